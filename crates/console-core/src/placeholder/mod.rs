//! Empty and error state placeholders.
//!
//! [`resolve`] picks exactly one display variant for a [`PlaceholderKind`] and
//! forwards the props that variant uses. [`Placeholder::content`] turns the
//! variant into text ready for rendering.

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::i18n::Translator;

/// Which placeholder to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlaceholderKind {
    Create,
    Assign,
    Filter,
    Permission,
    Custom,
    #[default]
    NoData,
}

impl FromStr for PlaceholderKind {
    type Err = Infallible;

    /// Unrecognized kinds resolve to [`PlaceholderKind::NoData`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "create" => Self::Create,
            "assign" => Self::Assign,
            "filter" => Self::Filter,
            "permission" => Self::Permission,
            "custom" => Self::Custom,
            _ => Self::NoData,
        })
    }
}

/// Illustration size scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlaceholderSize {
    XSmall,
    Small,
    Medium,
    #[default]
    Large,
    XLarge,
}

impl PlaceholderSize {
    /// Edge length of the illustration in pixels.
    pub const fn px(self) -> u32 {
        match self {
            Self::XSmall => 60,
            Self::Small => 100,
            Self::Medium => 140,
            Self::Large => 200,
            Self::XLarge => 250,
        }
    }
}

impl FromStr for PlaceholderSize {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xsmall" | "x-small" => Ok(Self::XSmall),
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            "xlarge" | "x-large" => Ok(Self::XLarge),
            other => Err(crate::Error::InvalidInput(format!(
                "unknown placeholder size '{other}'"
            ))),
        }
    }
}

/// Caller-supplied button shown by the assign placeholder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionButton {
    pub label: String,
    pub test_id: String,
}

/// Everything a caller may pass to the dispatcher
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderProps {
    #[serde(default)]
    pub kind: PlaceholderKind,
    #[serde(default)]
    pub size: PlaceholderSize,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default)]
    pub permission: bool,
    #[serde(default)]
    pub button: Option<ActionButton>,
    #[serde(default)]
    pub children: Option<String>,
    /// Whether the caller handles clicks on the create action
    #[serde(default)]
    pub on_click: bool,
}

impl PlaceholderProps {
    pub fn of(kind: PlaceholderKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }
}

/// The selected display variant with the props it consumes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "camelCase")]
pub enum Placeholder {
    Create {
        size: PlaceholderSize,
        class_name: Option<String>,
        heading: Option<String>,
        doc: Option<String>,
        permission: bool,
        has_action: bool,
    },
    Assign {
        size: PlaceholderSize,
        class_name: Option<String>,
        heading: Option<String>,
        permission: bool,
        button: Option<ActionButton>,
    },
    Filter {
        size: PlaceholderSize,
        class_name: Option<String>,
        doc: Option<String>,
    },
    Permission {
        size: PlaceholderSize,
        class_name: Option<String>,
    },
    Custom {
        size: PlaceholderSize,
        class_name: Option<String>,
        children: Option<String>,
    },
    NoData {
        size: PlaceholderSize,
        class_name: Option<String>,
        children: Option<String>,
    },
}

/// Select the display variant for `props.kind`.
pub fn resolve(props: PlaceholderProps) -> Placeholder {
    let PlaceholderProps {
        kind,
        size,
        class_name,
        heading,
        doc,
        permission,
        button,
        children,
        on_click,
    } = props;

    match kind {
        PlaceholderKind::Create => Placeholder::Create {
            size,
            class_name,
            heading,
            doc,
            permission,
            has_action: on_click,
        },
        PlaceholderKind::Assign => Placeholder::Assign {
            size,
            class_name,
            heading,
            permission,
            button,
        },
        PlaceholderKind::Filter => Placeholder::Filter {
            size,
            class_name,
            doc,
        },
        PlaceholderKind::Permission => Placeholder::Permission { size, class_name },
        PlaceholderKind::Custom => Placeholder::Custom {
            size,
            class_name,
            children,
        },
        PlaceholderKind::NoData => Placeholder::NoData {
            size,
            class_name,
            children,
        },
    }
}

/// Illustration shown above the message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlaceholderImage {
    NoData,
    NoAccess,
    NoSearchResults,
    AddEntity,
}

/// Button rendered by create and assign placeholders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderAction {
    pub label: String,
    pub test_id: String,
}

/// Display-ready text of a placeholder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderContent {
    pub image: PlaceholderImage,
    pub size_px: u32,
    pub class_name: Option<String>,
    pub heading: Option<String>,
    pub message: String,
    pub doc_link: Option<DocLink>,
    pub action: Option<PlaceholderAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocLink {
    pub label: String,
    pub href: String,
}

impl Placeholder {
    pub const fn kind(&self) -> PlaceholderKind {
        match self {
            Self::Create { .. } => PlaceholderKind::Create,
            Self::Assign { .. } => PlaceholderKind::Assign,
            Self::Filter { .. } => PlaceholderKind::Filter,
            Self::Permission { .. } => PlaceholderKind::Permission,
            Self::Custom { .. } => PlaceholderKind::Custom,
            Self::NoData { .. } => PlaceholderKind::NoData,
        }
    }

    pub const fn size(&self) -> PlaceholderSize {
        match self {
            Self::Create { size, .. }
            | Self::Assign { size, .. }
            | Self::Filter { size, .. }
            | Self::Permission { size, .. }
            | Self::Custom { size, .. }
            | Self::NoData { size, .. } => *size,
        }
    }

    pub fn class_name(&self) -> Option<&str> {
        match self {
            Self::Create { class_name, .. }
            | Self::Assign { class_name, .. }
            | Self::Filter { class_name, .. }
            | Self::Permission { class_name, .. }
            | Self::Custom { class_name, .. }
            | Self::NoData { class_name, .. } => class_name.as_deref(),
        }
    }

    /// Resolve the variant's text through the translator.
    ///
    /// Create and assign placeholders fall back to the no-access message when
    /// the user lacks permission.
    pub fn content(&self, t: &dyn Translator) -> PlaceholderContent {
        let mut content = PlaceholderContent {
            image: PlaceholderImage::NoData,
            size_px: self.size().px(),
            class_name: self.class_name().map(str::to_string),
            heading: None,
            message: String::new(),
            doc_link: None,
            action: None,
        };

        match self {
            Self::Create {
                heading,
                doc,
                permission,
                has_action,
                ..
            } => {
                if !permission {
                    return no_access(content, t);
                }
                let entity = heading.clone().unwrap_or_default();
                content.image = PlaceholderImage::AddEntity;
                content.heading.clone_from(heading);
                content.message = t.translate(
                    "message.adding-new-entity-is-easy-just-give-it-a-spin",
                    &[("entity", entity.as_str())],
                );
                content.doc_link = doc.as_deref().map(|href| doc_link(href, t));
                if *has_action {
                    content.action = Some(PlaceholderAction {
                        label: t.t("label.add"),
                        test_id: "add-placeholder-button".to_string(),
                    });
                }
            }
            Self::Assign {
                heading,
                permission,
                button,
                ..
            } => {
                if !permission {
                    return no_access(content, t);
                }
                let entity = heading.clone().unwrap_or_default();
                content.heading.clone_from(heading);
                content.message = t.translate(
                    "message.assign-entity-placeholder",
                    &[("entity", entity.as_str())],
                );
                content.action = button.as_ref().map(|button| PlaceholderAction {
                    label: button.label.clone(),
                    test_id: button.test_id.clone(),
                });
            }
            Self::Filter { doc, .. } => {
                content.image = PlaceholderImage::NoSearchResults;
                content.message = t.t("message.try-adjusting-filter");
                content.doc_link = doc.as_deref().map(|href| doc_link(href, t));
            }
            Self::Permission { .. } => return no_access(content, t),
            Self::Custom { children, .. } => {
                content.message = children.clone().unwrap_or_default();
            }
            Self::NoData { children, .. } => {
                content.message = children
                    .clone()
                    .unwrap_or_else(|| t.t("message.no-data-available"));
            }
        }
        content
    }
}

fn no_access(mut content: PlaceholderContent, t: &dyn Translator) -> PlaceholderContent {
    content.image = PlaceholderImage::NoAccess;
    content.message = t.t("message.no-access-placeholder");
    content
}

fn doc_link(href: &str, t: &dyn Translator) -> DocLink {
    DocLink {
        label: t.t("label.learn-more"),
        href: href.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::i18n::Catalog;

    #[test]
    fn unknown_kind_resolves_to_no_data() {
        assert_eq!(
            "banana".parse::<PlaceholderKind>(),
            Ok(PlaceholderKind::NoData)
        );
        assert_eq!(
            resolve(PlaceholderProps::default()).kind(),
            PlaceholderKind::NoData
        );
    }

    #[test]
    fn permission_placeholder_ignores_children() {
        let props = PlaceholderProps {
            children: Some("Custom body".to_string()),
            class_name: Some("m-t-lg".to_string()),
            ..PlaceholderProps::of(PlaceholderKind::Permission)
        };
        let placeholder = resolve(props);
        assert_eq!(
            placeholder,
            Placeholder::Permission {
                size: PlaceholderSize::Large,
                class_name: Some("m-t-lg".to_string()),
            }
        );

        let content = placeholder.content(&Catalog::english());
        assert_eq!(content.image, PlaceholderImage::NoAccess);
        assert!(!content.message.contains("Custom body"));
    }

    #[test]
    fn each_kind_selects_its_own_variant() {
        for kind in [
            PlaceholderKind::Create,
            PlaceholderKind::Assign,
            PlaceholderKind::Filter,
            PlaceholderKind::Permission,
            PlaceholderKind::Custom,
            PlaceholderKind::NoData,
        ] {
            assert_eq!(resolve(PlaceholderProps::of(kind)).kind(), kind);
        }
    }

    #[test]
    fn no_data_uses_children_or_default_message() {
        let catalog = Catalog::english();
        let default = resolve(PlaceholderProps::default()).content(&catalog);
        assert_eq!(default.message, "No data available.");

        let custom = resolve(PlaceholderProps {
            children: Some("Nothing here yet".to_string()),
            ..PlaceholderProps::default()
        })
        .content(&catalog);
        assert_eq!(custom.message, "Nothing here yet");
    }

    #[test]
    fn create_without_permission_shows_no_access() {
        let catalog = Catalog::english();
        let content = resolve(PlaceholderProps {
            heading: Some("Team".to_string()),
            on_click: true,
            ..PlaceholderProps::of(PlaceholderKind::Create)
        })
        .content(&catalog);
        assert_eq!(content.image, PlaceholderImage::NoAccess);
        assert_eq!(content.action, None);
    }

    #[test]
    fn create_with_permission_offers_add_action() {
        let catalog = Catalog::english();
        let content = resolve(PlaceholderProps {
            heading: Some("Team".to_string()),
            doc: Some("https://docs.example.com/teams".to_string()),
            permission: true,
            on_click: true,
            size: PlaceholderSize::Small,
            ..PlaceholderProps::of(PlaceholderKind::Create)
        })
        .content(&catalog);
        assert_eq!(
            content.message,
            "Adding a new Team is easy, just give it a spin!"
        );
        assert_eq!(content.size_px, 100);
        assert_eq!(content.action.map(|action| action.label), Some("Add".to_string()));
        assert_eq!(
            content.doc_link.map(|link| link.href),
            Some("https://docs.example.com/teams".to_string())
        );
    }

    #[test]
    fn filter_forwards_doc_only() {
        let placeholder = resolve(PlaceholderProps {
            doc: Some("https://docs.example.com".to_string()),
            heading: Some("ignored".to_string()),
            ..PlaceholderProps::of(PlaceholderKind::Filter)
        });
        assert_eq!(
            placeholder,
            Placeholder::Filter {
                size: PlaceholderSize::Large,
                class_name: None,
                doc: Some("https://docs.example.com".to_string()),
            }
        );
    }
}
