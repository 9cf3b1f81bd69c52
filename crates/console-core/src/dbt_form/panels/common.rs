use super::PanelContext;
use crate::models::{ChangeTarget, ConfigKey, FieldDescriptor, FieldKind, FieldValue};

/// Trailing block shared by every source panel.
pub(super) fn fields(ctx: &PanelContext<'_>, description_test_id: &str) -> Vec<FieldDescriptor> {
    let t = ctx.translator;
    let tags = t.t("label.tag-plural");

    vec![
        FieldDescriptor::new(
            "loggerLevel",
            t.t("label.enable-debug-log"),
            FieldKind::Switch,
            FieldValue::Bool(ctx.enable_debug_log),
            ChangeTarget::EnableDebugLog,
        )
        .test_id("toggle-button-enable-debug-log")
        .help(t.t("message.enable-debug-logging"))
        .separator(),
        FieldDescriptor::config_switch(
            ConfigKey::DbtUpdateDescriptions,
            t.t("label.update-description"),
            ctx.draft.flag(ConfigKey::DbtUpdateDescriptions),
        )
        .test_id(description_test_id)
        .help(t.t("message.optional-configuration-update-description-dbt"))
        .separator(),
        FieldDescriptor::config_switch(
            ConfigKey::IncludeTags,
            t.translate("label.include-entity", &[("entity", tags.as_str())]),
            ctx.draft.flag(ConfigKey::IncludeTags),
        )
        .test_id("toggle-button-include-tags")
        .help(t.t("message.include-assets-message"))
        .separator(),
        FieldDescriptor::config_text(
            ConfigKey::DbtClassificationName,
            t.t("label.dbt-classification-name"),
            ctx.draft.text(ConfigKey::DbtClassificationName),
        )
        .test_id("dbt-classification-name")
        .help(t.t("message.custom-classification-name-dbt-tags"))
        .separator(),
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::i18n::Catalog;
    use crate::models::{DbtConfigDraft, GcsConfigType};

    #[test]
    fn common_block_reflects_draft_and_debug_flag() {
        let catalog = Catalog::english();
        let draft = DbtConfigDraft::new()
            .with(ConfigKey::DbtUpdateDescriptions, true)
            .with(ConfigKey::DbtClassificationName, "dbtTags");
        let ctx = PanelContext {
            draft: &draft,
            enable_debug_log: true,
            gcs_config_type: GcsConfigType::default(),
            translator: &catalog,
        };

        let fields = fields(&ctx, "local-update-description");
        let names: Vec<_> = fields.iter().map(|field| field.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "loggerLevel",
                "dbtUpdateDescriptions",
                "includeTags",
                "dbtClassificationName"
            ]
        );
        assert_eq!(fields[0].value, FieldValue::Bool(true));
        assert_eq!(fields[0].on_change, ChangeTarget::EnableDebugLog);
        assert_eq!(fields[1].test_id, "local-update-description");
        assert_eq!(fields[2].label, "Include Tags");
        assert_eq!(fields[2].value, FieldValue::Bool(true));
        assert_eq!(fields[3].value, FieldValue::from("dbtTags"));
        assert!(fields.iter().all(|field| field.has_separator && !field.required));
    }
}
