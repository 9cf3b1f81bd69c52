//! dbt configuration form builder
//!
//! [`DbtConfigForm`] owns the in-progress draft for one ingestion pipeline. It
//! renders the header fields and the panel of the selected source as
//! descriptors, absorbs per-field edits locally, and reports name/source/debug
//! changes, submissions and cancellation upward as [`FormEvent`]s.

pub mod panels;

use serde::{Deserialize, Serialize};

use crate::i18n::Translator;
use crate::models::{
    ChangeTarget, ConfigKey, DbtConfigDraft, DbtConfigSourceType, FieldDescriptor, FieldKind,
    FieldValue, GcsConfigType, SelectOption,
};
use panels::PanelContext;

/// Whether the form creates or edits a pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    #[default]
    Add,
    Edit,
}

/// Action button captions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormLabels {
    pub ok: String,
    pub cancel: String,
}

impl FormLabels {
    pub fn new(ok: impl Into<String>, cancel: impl Into<String>) -> Self {
        Self {
            ok: ok.into(),
            cancel: cancel.into(),
        }
    }
}

/// Cancel/submit row closing every panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRow {
    pub cancel_label: String,
    pub ok_label: String,
}

/// Pipeline settings the parent hands to the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbtFormData {
    #[serde(default)]
    pub ingestion_name: String,
    #[serde(default)]
    pub dbt_config_source_type: DbtConfigSourceType,
    #[serde(default)]
    pub gcs_config_type: Option<GcsConfigType>,
    #[serde(default)]
    pub dbt_config_source: DbtConfigDraft,
    #[serde(default)]
    pub dbt_classification_name: Option<String>,
    #[serde(default)]
    pub dbt_update_descriptions: bool,
    #[serde(default = "default_include_tags")]
    pub include_tags: bool,
    #[serde(default)]
    pub enable_debug_log: bool,
}

const fn default_include_tags() -> bool {
    true
}

impl Default for DbtFormData {
    fn default() -> Self {
        Self {
            ingestion_name: String::new(),
            dbt_config_source_type: DbtConfigSourceType::None,
            gcs_config_type: None,
            dbt_config_source: DbtConfigDraft::new(),
            dbt_classification_name: None,
            dbt_update_descriptions: false,
            include_tags: true,
            enable_debug_log: false,
        }
    }
}

impl DbtFormData {
    /// Source config overlaid with the top-level shared settings.
    pub fn initial_draft(&self) -> DbtConfigDraft {
        let mut draft = self.dbt_config_source.clone();
        match &self.dbt_classification_name {
            Some(name) => {
                draft.set(ConfigKey::DbtClassificationName, FieldValue::Text(name.clone()));
            }
            None => {
                draft.remove(ConfigKey::DbtClassificationName);
            }
        }
        draft.set(
            ConfigKey::DbtUpdateDescriptions,
            FieldValue::Bool(self.dbt_update_descriptions),
        );
        draft.set(ConfigKey::IncludeTags, FieldValue::Bool(self.include_tags));
        draft
    }

    /// Take a form draft as the source config, splitting the shared settings
    /// back out so [`Self::initial_draft`] reproduces it.
    fn adopt_draft(&mut self, draft: &DbtConfigDraft) {
        self.dbt_classification_name = draft
            .get(ConfigKey::DbtClassificationName)
            .and_then(FieldValue::as_text)
            .map(str::to_string);
        self.dbt_update_descriptions = draft.flag(ConfigKey::DbtUpdateDescriptions);
        self.include_tags = draft.flag(ConfigKey::IncludeTags);
        self.dbt_config_source = draft.clone();
    }

    /// Whether switching to `next` invalidates the local draft.
    fn resets_draft(&self, next: &Self) -> bool {
        self.ingestion_name != next.ingestion_name
            || self.dbt_config_source_type != next.dbt_config_source_type
            || self.gcs_config_type != next.gcs_config_type
    }
}

/// Upward change notification.
///
/// Carries the local draft as it stood when the change happened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbtFormPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingestion_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dbt_config_source_type: Option<DbtConfigSourceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gcs_config_type: Option<GcsConfigType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_debug_log: Option<bool>,
    pub dbt_config_source: DbtConfigDraft,
}

impl DbtFormPatch {
    /// Apply the changed settings to the parent's copy of the form data.
    ///
    /// Unless the source type changed, the carried draft becomes the parent's
    /// source config so a reset triggered by the patch restores local edits.
    /// A source type change keeps the parent's config and drops them.
    pub fn apply_to(&self, data: &mut DbtFormData) {
        if let Some(source) = self.dbt_config_source_type {
            data.dbt_config_source_type = source;
        } else {
            data.adopt_draft(&self.dbt_config_source);
        }
        if let Some(name) = &self.ingestion_name {
            data.ingestion_name.clone_from(name);
        }
        if let Some(kind) = self.gcs_config_type {
            data.gcs_config_type = Some(kind);
        }
        if let Some(enabled) = self.enable_debug_log {
            data.enable_debug_log = enabled;
        }
    }
}

/// Events emitted to the form's parent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload", rename_all = "camelCase")]
pub enum FormEvent {
    Change(DbtFormPatch),
    /// Source-specific subset of the draft, `None` when no source is selected
    Submit(Option<DbtConfigDraft>),
    Cancel,
}

/// User interactions fed into the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormInput {
    Edit {
        target: ChangeTarget,
        value: FieldValue,
    },
    Submit,
    Cancel,
}

/// Panel rendered below the header fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "panel", rename_all = "camelCase")]
pub enum PanelView {
    Source {
        source: DbtConfigSourceType,
        fields: Vec<FieldDescriptor>,
        actions: ActionRow,
    },
    NoSource {
        message: String,
        actions: ActionRow,
    },
}

impl PanelView {
    pub fn fields(&self) -> &[FieldDescriptor] {
        match self {
            Self::Source { fields, .. } => fields,
            Self::NoSource { .. } => &[],
        }
    }

    pub const fn actions(&self) -> &ActionRow {
        match self {
            Self::Source { actions, .. } | Self::NoSource { actions, .. } => actions,
        }
    }
}

/// Everything needed to render the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormView {
    pub header: Vec<FieldDescriptor>,
    pub panel: PanelView,
}

/// Stateful dispatcher over the dbt source panels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbtConfigForm {
    data: DbtFormData,
    draft: DbtConfigDraft,
    mode: FormMode,
    labels: FormLabels,
}

impl DbtConfigForm {
    pub fn new(data: DbtFormData, mode: FormMode, labels: FormLabels) -> Self {
        let draft = data.initial_draft();
        Self {
            data,
            draft,
            mode,
            labels,
        }
    }

    pub const fn data(&self) -> &DbtFormData {
        &self.data
    }

    pub const fn draft(&self) -> &DbtConfigDraft {
        &self.draft
    }

    pub const fn source_type(&self) -> DbtConfigSourceType {
        self.data.dbt_config_source_type
    }

    pub fn gcs_config_type(&self) -> GcsConfigType {
        self.data.gcs_config_type.unwrap_or_default()
    }

    /// Take new data from the parent.
    ///
    /// A changed ingestion name, source type or GCS config type replaces the
    /// local draft with the supplied source config, dropping unsaved edits.
    /// Returns whether the draft was reset.
    pub fn receive(&mut self, data: DbtFormData) -> bool {
        let reset = self.data.resets_draft(&data);
        if reset {
            tracing::debug!(
                "Resetting dbt draft for source {:?}",
                data.dbt_config_source_type
            );
            self.draft = data.initial_draft();
        }
        self.data = data;
        reset
    }

    /// Replace one key of the local draft without notifying the parent.
    pub fn update_config(&mut self, key: ConfigKey, value: FieldValue) -> bool {
        self.draft.set(key, value)
    }

    /// Feed one interaction into the form.
    pub fn handle(&mut self, input: FormInput) -> Option<FormEvent> {
        match input {
            FormInput::Edit { target, value } => self.edit(target, value),
            FormInput::Submit => Some(FormEvent::Submit(self.submission())),
            FormInput::Cancel => Some(FormEvent::Cancel),
        }
    }

    /// The subset of the draft the active source submits.
    pub fn submission(&self) -> Option<DbtConfigDraft> {
        panels::submission(self.source_type(), &self.draft)
    }

    /// Ingestion name and source selector rendered above every panel.
    pub fn header_fields(&self, t: &dyn Translator) -> Vec<FieldDescriptor> {
        let options = DbtConfigSourceType::SELECTABLE
            .into_iter()
            .map(|source| SelectOption::new(t.t(source.label_key()), source.as_str()))
            .collect();

        vec![
            FieldDescriptor::new(
                "name",
                t.t("label.name"),
                FieldKind::Text,
                FieldValue::Text(self.data.ingestion_name.clone()),
                ChangeTarget::IngestionName,
            )
            .required(true)
            .disabled(self.mode == FormMode::Edit)
            .help(t.t("message.instance-identifier")),
            FieldDescriptor::new(
                "dbtConfigSource",
                t.t("label.dbt-configuration-source"),
                FieldKind::Select { options },
                FieldValue::from(self.source_type().as_str()),
                ChangeTarget::SourceType,
            )
            .test_id("dbt-source"),
        ]
    }

    pub fn panel(&self, t: &dyn Translator) -> PanelView {
        let actions = ActionRow {
            cancel_label: self.labels.cancel.clone(),
            ok_label: self.labels.ok.clone(),
        };
        let ctx = PanelContext {
            draft: &self.draft,
            enable_debug_log: self.data.enable_debug_log,
            gcs_config_type: self.gcs_config_type(),
            translator: t,
        };

        match panels::panel_fields(self.source_type(), &ctx) {
            Some(fields) => PanelView::Source {
                source: self.source_type(),
                fields,
                actions,
            },
            None => PanelView::NoSource {
                message: t.t("message.no-selected-dbt"),
                actions,
            },
        }
    }

    pub fn view(&self, t: &dyn Translator) -> FormView {
        FormView {
            header: self.header_fields(t),
            panel: self.panel(t),
        }
    }

    fn edit(&mut self, target: ChangeTarget, value: FieldValue) -> Option<FormEvent> {
        let mut patch = DbtFormPatch::default();
        match (target, value) {
            (ChangeTarget::Config(key), value) => {
                self.update_config(key, value);
                return None;
            }
            (ChangeTarget::IngestionName, FieldValue::Text(name)) => {
                patch.ingestion_name = Some(name);
            }
            (ChangeTarget::SourceType, FieldValue::Text(raw)) => match raw.parse() {
                Ok(source) => patch.dbt_config_source_type = Some(source),
                Err(error) => {
                    tracing::warn!("Ignoring source change: {}", error);
                    return None;
                }
            },
            (ChangeTarget::GcsConfigType, FieldValue::Text(raw)) => match raw.parse() {
                Ok(kind) => patch.gcs_config_type = Some(kind),
                Err(error) => {
                    tracing::warn!("Ignoring GCS config type change: {}", error);
                    return None;
                }
            },
            (ChangeTarget::EnableDebugLog, FieldValue::Bool(enabled)) => {
                patch.enable_debug_log = Some(enabled);
            }
            (target, value) => {
                tracing::warn!(
                    "Ignoring {:?} value for {:?}",
                    value.shape(),
                    target
                );
                return None;
            }
        }
        patch.dbt_config_source = self.draft.clone();
        Some(FormEvent::Change(patch))
    }
}
