//! Configuration structs for modal rendering

use serde::{Deserialize, Serialize};

/// Options accepted by the modal renderer
///
/// Every field is optional; missing values fall back to documented defaults
/// instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalOptions {
    /// Modal body text; overridden by content supplied to the builder
    pub body: Option<String>,
    /// Modal heading text
    pub title: Option<String>,
    /// Explicit element id connecting the toggle button and the dialog
    pub id: Option<String>,
    /// Dialog size variant
    pub size: Option<DialogSize>,
    /// Contextual variant for the toggle button, unless the nested
    /// button options carry their own
    pub context: Option<Context>,
    /// Options for the toggle button
    pub button: Option<ButtonOptions>,
}

impl ModalOptions {
    /// Deserialize options from a JSON document
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Options for the toggle button rendered next to the dialog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonOptions {
    pub context: Option<Context>,
    pub size: Option<ButtonSize>,
    pub caption: Option<String>,
}

/// Bootstrap contextual variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Context {
    Primary,
    Success,
    Info,
    Warning,
    Danger,
    Link,
    #[default]
    #[serde(other)]
    Default, // any unrecognized value degrades here
}

impl Context {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Link => "link",
            Self::Default => "default",
        }
    }

    /// Button class for this variant, e.g. `btn-danger`
    pub fn button_class(&self) -> &'static str {
        match self {
            Self::Primary => "btn-primary",
            Self::Success => "btn-success",
            Self::Info => "btn-info",
            Self::Warning => "btn-warning",
            Self::Danger => "btn-danger",
            Self::Link => "btn-link",
            Self::Default => "btn-default",
        }
    }
}

/// Size variant for the dialog container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogSize {
    Large,
    Small,
}

impl DialogSize {
    /// Class appended after `modal-dialog`
    pub fn dialog_class(&self) -> &'static str {
        match self {
            Self::Large => "modal-lg",
            Self::Small => "modal-sm",
        }
    }
}

/// Size variant for the toggle button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonSize {
    Large,
    Small,
    ExtraSmall,
}

impl ButtonSize {
    /// Class appended after the contextual class
    pub fn button_class(&self) -> &'static str {
        match self {
            Self::Large => "btn-lg",
            Self::Small => "btn-sm",
            Self::ExtraSmall => "btn-xs",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_are_empty() {
        let options = ModalOptions::default();
        assert_eq!(options.body, None);
        assert_eq!(options.title, None);
        assert_eq!(options.id, None);
        assert_eq!(options.size, None);
        assert_eq!(options.context, None);
        assert_eq!(options.button, None);
    }

    #[test]
    fn test_context_button_classes() {
        assert_eq!(Context::Primary.button_class(), "btn-primary");
        assert_eq!(Context::Success.button_class(), "btn-success");
        assert_eq!(Context::Info.button_class(), "btn-info");
        assert_eq!(Context::Warning.button_class(), "btn-warning");
        assert_eq!(Context::Danger.button_class(), "btn-danger");
        assert_eq!(Context::Link.button_class(), "btn-link");
        assert_eq!(Context::Default.button_class(), "btn-default");
    }

    #[test]
    fn test_button_size_classes() {
        assert_eq!(ButtonSize::Large.button_class(), "btn-lg");
        assert_eq!(ButtonSize::Small.button_class(), "btn-sm");
        assert_eq!(ButtonSize::ExtraSmall.button_class(), "btn-xs");
    }

    #[test]
    fn test_dialog_size_classes() {
        assert_eq!(DialogSize::Large.dialog_class(), "modal-lg");
        assert_eq!(DialogSize::Small.dialog_class(), "modal-sm");
    }

    #[test]
    fn test_from_json_full() {
        let options = ModalOptions::from_json(
            r#"{
                "body": "Your profile was updated",
                "title": "Profile",
                "id": "profile-modal",
                "size": "large",
                "button": {"context": "danger", "size": "extra_small", "caption": "Open"}
            }"#,
        )
        .unwrap();
        assert_eq!(options.body.as_deref(), Some("Your profile was updated"));
        assert_eq!(options.title.as_deref(), Some("Profile"));
        assert_eq!(options.id.as_deref(), Some("profile-modal"));
        assert_eq!(options.size, Some(DialogSize::Large));
        let button = options.button.unwrap();
        assert_eq!(button.context, Some(Context::Danger));
        assert_eq!(button.size, Some(ButtonSize::ExtraSmall));
        assert_eq!(button.caption.as_deref(), Some("Open"));
    }

    #[test]
    fn test_from_json_unknown_context_degrades_to_default() {
        let options = ModalOptions::from_json(r#"{"context": "fancy"}"#).unwrap();
        assert_eq!(options.context, Some(Context::Default));
    }

    #[test]
    fn test_from_json_rejects_malformed_document() {
        assert!(ModalOptions::from_json("not json").is_err());
    }

    #[test]
    fn test_options_round_trip() {
        let options = ModalOptions {
            title: Some("Profile".into()),
            size: Some(DialogSize::Small),
            button: Some(ButtonOptions {
                context: Some(Context::Link),
                size: Some(ButtonSize::Large),
                caption: Some("Call to action".into()),
            }),
            ..Default::default()
        };
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(ModalOptions::from_json(&json).unwrap(), options);
    }
}
