use super::PanelContext;
use crate::models::{ConfigKey, FieldDescriptor};

pub(super) const SUBMIT_KEYS: [ConfigKey; 3] = [
    ConfigKey::DbtCatalogHttpPath,
    ConfigKey::DbtManifestHttpPath,
    ConfigKey::DbtRunResultsHttpPath,
];

pub(super) fn fields(ctx: &PanelContext<'_>) -> Vec<FieldDescriptor> {
    let t = ctx.translator;
    let draft = ctx.draft;

    vec![
        FieldDescriptor::config_text(
            ConfigKey::DbtCatalogHttpPath,
            t.t("label.dbt-catalog-http-path"),
            draft.text(ConfigKey::DbtCatalogHttpPath),
        )
        .test_id("catalog-url")
        .help(t.t("message.dbt-catalog-file-extract-path")),
        FieldDescriptor::config_text(
            ConfigKey::DbtManifestHttpPath,
            t.t("label.dbt-manifest-http-path"),
            draft.text(ConfigKey::DbtManifestHttpPath),
        )
        .required(true)
        .test_id("manifest-url")
        .help(t.t("message.dbt-manifest-file-path")),
        FieldDescriptor::config_text(
            ConfigKey::DbtRunResultsHttpPath,
            t.t("label.dbt-run-result-http-path"),
            draft.text(ConfigKey::DbtRunResultsHttpPath),
        )
        .test_id("run-result-file")
        .help(t.t("message.dbt-result-file-path"))
        .separator(),
    ]
}
