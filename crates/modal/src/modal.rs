//! Modal builder and HTML renderer

use uuid::Uuid;

use crate::html::{attr, content_tag, join_classes};
use crate::options::{ButtonOptions, Context, DialogSize, ModalOptions};

/// Start building a modal fragment
pub fn modal() -> Modal {
    Modal::new()
}

/// Builder for a Bootstrap modal fragment: a toggle button followed by the
/// dialog container, connected by a shared id
///
/// Content can come from a string, from a closure, or from
/// [`ModalOptions::body`]; explicit content wins over the option.
#[derive(Debug, Clone, Default)]
pub struct Modal {
    content: Option<String>,
    options: ModalOptions,
}

impl Modal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the body content from a string
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set the body content from a producing closure
    pub fn content_with(mut self, produce: impl FnOnce() -> String) -> Self {
        self.content = Some(produce());
        self
    }

    pub fn options(mut self, options: ModalOptions) -> Self {
        self.options = options;
        self
    }

    /// Render the fragment
    ///
    /// Pure string building; the only moving part is the id generated when
    /// [`ModalOptions::id`] is absent, which is shared between the button's
    /// `data-target` and the dialog's `id` attribute.
    pub fn render(self) -> String {
        let Self { content, options } = self;
        let id = options.id.clone().unwrap_or_else(generate_id);
        let body = content.or(options.body);
        let button = options.button.unwrap_or_default();
        let button_context = button.context.or(options.context).unwrap_or_default();

        let mut out = String::new();
        render_toggle_button(&mut out, &id, &button, button_context, options.title.as_deref());
        render_dialog(
            &mut out,
            &id,
            options.title.as_deref(),
            body.as_deref(),
            options.size,
        );
        out
    }
}

/// Fallback caption when neither `button.caption` nor `title` is given
const DEFAULT_CAPTION: &str = "Modal";

fn render_toggle_button(
    out: &mut String,
    id: &str,
    button: &ButtonOptions,
    context: Context,
    title: Option<&str>,
) {
    let size_class = button.size.map(|s| s.button_class()).unwrap_or("");
    let classes = join_classes(&["btn", context.button_class(), size_class]);
    let caption = button
        .caption
        .as_deref()
        .or(title)
        .unwrap_or(DEFAULT_CAPTION);

    let attrs = format!(
        "{}{}{}",
        attr("class", &classes),
        attr("data-toggle", "modal"),
        attr("data-target", &format!("#{id}")),
    );
    content_tag(out, "button", &attrs, caption);
}

fn render_dialog(
    out: &mut String,
    id: &str,
    title: Option<&str>,
    body: Option<&str>,
    size: Option<DialogSize>,
) {
    let label_id = format!("label-{id}");

    let mut content = String::new();
    content.push_str("<div class=\"modal-header\">");
    content.push_str(
        "<button type=\"button\" class=\"close\" data-dismiss=\"modal\">\
         <span aria-hidden=\"true\">&times;</span>\
         <span class=\"sr-only\">Close</span></button>",
    );
    if let Some(title) = title {
        let attrs = format!("{}{}", attr("class", "modal-title"), attr("id", &label_id));
        content_tag(&mut content, "h4", &attrs, title);
    }
    content.push_str("</div>");
    if let Some(body) = body {
        content_tag(&mut content, "div", &attr("class", "modal-body"), body);
    }

    let mut inner = String::new();
    content_tag(&mut inner, "div", &attr("class", "modal-content"), &content);

    let size_class = size.map(|s| s.dialog_class()).unwrap_or("");
    let dialog_classes = join_classes(&["modal-dialog", size_class]);
    let mut dialog = String::new();
    content_tag(&mut dialog, "div", &attr("class", &dialog_classes), &inner);

    let mut attrs = format!(
        "{}{}{}{}",
        attr("class", "modal fade"),
        attr("id", id),
        attr("tabindex", "-1"),
        attr("role", "dialog"),
    );
    if title.is_some() {
        attrs.push_str(&attr("aria-labelledby", &label_id));
    }
    attrs.push_str(&attr("aria-hidden", "true"));
    content_tag(out, "div", &attrs, &dialog);
}

/// Fresh id connecting a button to its dialog; uniqueness in practice is
/// all the contract asks for
fn generate_id() -> String {
    let id = format!("modal-{}", Uuid::new_v4().simple());
    log::trace!("generated modal id {id}");
    id
}
