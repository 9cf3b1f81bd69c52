use super::PanelContext;
use crate::models::{ConfigKey, FieldDescriptor};

pub(super) const SUBMIT_KEYS: [ConfigKey; 3] = [
    ConfigKey::DbtCatalogFilePath,
    ConfigKey::DbtManifestFilePath,
    ConfigKey::DbtRunResultsFilePath,
];

pub(super) fn fields(ctx: &PanelContext<'_>) -> Vec<FieldDescriptor> {
    let t = ctx.translator;
    let draft = ctx.draft;

    vec![
        FieldDescriptor::config_text(
            ConfigKey::DbtCatalogFilePath,
            t.t("label.dbt-catalog-file-path"),
            draft.text(ConfigKey::DbtCatalogFilePath),
        )
        .test_id("catalog-file")
        .help(t.t("message.dbt-catalog-file-extract-path")),
        FieldDescriptor::config_text(
            ConfigKey::DbtManifestFilePath,
            t.t("label.dbt-manifest-file-path"),
            draft.text(ConfigKey::DbtManifestFilePath),
        )
        .required(true)
        .test_id("manifest-file")
        .help(t.t("message.dbt-manifest-file-path")),
        FieldDescriptor::config_text(
            ConfigKey::DbtRunResultsFilePath,
            t.t("label.dbt-run-result-file-path"),
            draft.text(ConfigKey::DbtRunResultsFilePath),
        )
        .test_id("run-result-file")
        .help(t.t("message.dbt-result-file-path"))
        .separator(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;
    use crate::models::{DbtConfigDraft, GcsConfigType};

    #[test]
    fn only_manifest_path_is_required() {
        let catalog = Catalog::english();
        let draft = DbtConfigDraft::new().with(ConfigKey::DbtCatalogFilePath, "/data/catalog.json");
        let ctx = PanelContext {
            draft: &draft,
            enable_debug_log: false,
            gcs_config_type: GcsConfigType::default(),
            translator: &catalog,
        };

        let fields = fields(&ctx);
        let required: Vec<_> = fields
            .iter()
            .filter(|field| field.required)
            .map(|field| field.name.as_str())
            .collect();
        assert_eq!(required, vec!["dbtManifestFilePath"]);
        assert_eq!(fields[0].value.as_text(), Some("/data/catalog.json"));
        assert_eq!(fields[1].value.as_text(), Some(""));
        assert!(fields[2].has_separator);
    }
}
