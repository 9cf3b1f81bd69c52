use super::s3::{prefix_config_field, security_config_field};
use super::PanelContext;
use crate::models::{
    ChangeTarget, ConfigKey, CredentialShape, FieldDescriptor, FieldKind, FieldValue,
    GcsConfigType, SelectOption,
};

pub(super) const SUBMIT_KEYS: [ConfigKey; 2] = [ConfigKey::DbtSecurityConfig, ConfigKey::DbtPrefixConfig];

pub(super) fn fields(ctx: &PanelContext<'_>) -> Vec<FieldDescriptor> {
    let t = ctx.translator;
    let options = GcsConfigType::ALL
        .into_iter()
        .map(|kind| SelectOption::new(t.t(kind.label_key()), kind.as_str()))
        .collect();
    let shape = match ctx.gcs_config_type {
        GcsConfigType::GcsValues => CredentialShape::GcsValues,
        GcsConfigType::GcsCredentialsPath => CredentialShape::GcsPath,
    };

    vec![
        FieldDescriptor::new(
            "gcsConfigType",
            t.t("label.gcs-config-type"),
            FieldKind::Select { options },
            FieldValue::from(ctx.gcs_config_type.as_str()),
            ChangeTarget::GcsConfigType,
        )
        .test_id("gcs-config"),
        security_config_field(ctx, shape).help(t.t("message.dbt-gcs-security-config")),
        prefix_config_field(ctx),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;
    use crate::models::DbtConfigDraft;

    #[test]
    fn credential_shape_follows_gcs_config_type() {
        let catalog = Catalog::english();
        let draft = DbtConfigDraft::new();
        let ctx = PanelContext {
            draft: &draft,
            enable_debug_log: false,
            gcs_config_type: GcsConfigType::GcsCredentialsPath,
            translator: &catalog,
        };

        let fields = fields(&ctx);
        assert_eq!(fields[0].value.as_text(), Some("gcsCredentialsPath"));
        assert_eq!(fields[0].on_change, ChangeTarget::GcsConfigType);
        assert_eq!(
            fields[1].kind,
            FieldKind::Credentials {
                shape: CredentialShape::GcsPath
            }
        );
    }
}
