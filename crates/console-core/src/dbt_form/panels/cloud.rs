use super::PanelContext;
use crate::models::{ConfigKey, FieldDescriptor, FieldKind};

pub(super) const SUBMIT_KEYS: [ConfigKey; 5] = [
    ConfigKey::DbtCloudAccountId,
    ConfigKey::DbtCloudAuthToken,
    ConfigKey::DbtCloudProjectId,
    ConfigKey::DbtCloudJobId,
    ConfigKey::DbtCloudUrl,
];

pub(super) fn fields(ctx: &PanelContext<'_>) -> Vec<FieldDescriptor> {
    let t = ctx.translator;
    let draft = ctx.draft;

    vec![
        FieldDescriptor::config_text(
            ConfigKey::DbtCloudAccountId,
            t.t("label.dbt-cloud-account-id"),
            draft.text(ConfigKey::DbtCloudAccountId),
        )
        .required(true)
        .test_id("cloud-account-id")
        .help(t.t("message.dbt-cloud-account-id")),
        FieldDescriptor::config_text(
            ConfigKey::DbtCloudAuthToken,
            t.t("label.dbt-cloud-account-auth-token"),
            draft.text(ConfigKey::DbtCloudAuthToken),
        )
        .kind(FieldKind::Password)
        .required(true)
        .test_id("cloud-auth-token")
        .help(t.t("message.dbt-cloud-account-auth")),
        FieldDescriptor::config_text(
            ConfigKey::DbtCloudProjectId,
            t.t("label.dbt-cloud-project-id"),
            draft.text(ConfigKey::DbtCloudProjectId),
        )
        .test_id("dbtCloudProjectId")
        .help(t.t("message.dbt-cloud-project-id")),
        FieldDescriptor::config_text(
            ConfigKey::DbtCloudJobId,
            t.t("label.dbt-cloud-job-id"),
            draft.text(ConfigKey::DbtCloudJobId),
        )
        .test_id("dbtCloudJobId")
        .help(t.t("message.dbt-cloud-job-id")),
        FieldDescriptor::config_text(
            ConfigKey::DbtCloudUrl,
            t.t("label.dbt-cloud-url"),
            draft.text(ConfigKey::DbtCloudUrl),
        )
        .required(true)
        .test_id("dbtCloudUrl")
        .help(t.t("message.dbt-cloud-url"))
        .separator(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;
    use crate::models::{DbtConfigDraft, GcsConfigType, DEFAULT_DBT_CLOUD_URL};

    #[test]
    fn auth_token_is_masked_and_url_has_default() {
        let catalog = Catalog::english();
        let draft = DbtConfigDraft::new().with(ConfigKey::DbtCloudAuthToken, "token");
        let ctx = PanelContext {
            draft: &draft,
            enable_debug_log: false,
            gcs_config_type: GcsConfigType::default(),
            translator: &catalog,
        };

        let fields = fields(&ctx);
        assert_eq!(fields[1].kind, FieldKind::Password);
        assert_eq!(fields[1].value.as_text(), Some("token"));
        assert_eq!(fields[4].value.as_text(), Some(DEFAULT_DBT_CLOUD_URL));
    }
}
