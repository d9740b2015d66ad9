//! Renders a Bootstrap modal dialog, plus its toggle button, as an HTML
//! fragment string.
//!
//! The builder accepts content as a string or a producing closure, and an
//! optional [`ModalOptions`] struct; explicit content overrides
//! [`ModalOptions::body`]. When no id is supplied a fresh one is generated
//! and shared between the button's `data-target` and the dialog's `id`.
//!
//! Interpolated values are emitted as-is: escape untrusted input before
//! passing it in.
//!
//! ```
//! use bootstrap_modal::{modal, Context, ModalOptions};
//!
//! let options = ModalOptions {
//!     id: Some("profile-modal".into()),
//!     title: Some("Profile".into()),
//!     context: Some(Context::Success),
//!     ..Default::default()
//! };
//! let html = modal().content("Your profile was updated").options(options).render();
//!
//! assert!(html.contains("btn btn-success"));
//! assert!(html.contains("data-target=\"#profile-modal\""));
//! assert!(html.contains("<div class=\"modal-body\">Your profile was updated</div>"));
//! ```

mod html;
mod modal;
mod options;

pub use modal::{modal, Modal};
pub use options::{ButtonOptions, ButtonSize, Context, DialogSize, ModalOptions};
