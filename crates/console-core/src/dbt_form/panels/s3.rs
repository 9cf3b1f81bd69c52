use super::PanelContext;
use crate::models::{
    ChangeTarget, ConfigKey, CredentialShape, FieldDescriptor, FieldKind, FieldValue,
};

pub(super) const SUBMIT_KEYS: [ConfigKey; 2] = [ConfigKey::DbtSecurityConfig, ConfigKey::DbtPrefixConfig];

pub(super) fn fields(ctx: &PanelContext<'_>) -> Vec<FieldDescriptor> {
    let t = ctx.translator;

    vec![
        security_config_field(ctx, CredentialShape::Aws)
            .help(t.t("message.dbt-s3-security-config")),
        prefix_config_field(ctx),
    ]
}

/// Structured credentials field shared with the GCS panel.
pub(super) fn security_config_field(
    ctx: &PanelContext<'_>,
    shape: CredentialShape,
) -> FieldDescriptor {
    let key = ConfigKey::DbtSecurityConfig;
    FieldDescriptor::new(
        key.as_str(),
        ctx.translator.t("label.dbt-security-config"),
        FieldKind::Credentials { shape },
        FieldValue::Credentials(ctx.draft.credentials(key)),
        ChangeTarget::Config(key),
    )
    .test_id("security-config")
}

/// Bucket name and prefix field shared with the GCS panel.
pub(super) fn prefix_config_field(ctx: &PanelContext<'_>) -> FieldDescriptor {
    let key = ConfigKey::DbtPrefixConfig;
    FieldDescriptor::new(
        key.as_str(),
        ctx.translator.t("label.dbt-prefix-config"),
        FieldKind::BucketPath,
        FieldValue::Bucket(ctx.draft.bucket(key)),
        ChangeTarget::Config(key),
    )
    .test_id("prefix-config")
    .help(ctx.translator.t("message.dbt-prefix-config"))
    .separator()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;
    use crate::models::{DbtBucketDetails, DbtConfigDraft, GcsConfigType, SCredentials};

    #[test]
    fn s3_fields_carry_structured_values() {
        let catalog = Catalog::english();
        let credentials = SCredentials {
            aws_region: Some("eu-west-1".to_string()),
            ..SCredentials::default()
        };
        let bucket = DbtBucketDetails {
            dbt_bucket_name: Some("dbt-artifacts".to_string()),
            dbt_object_prefix: Some("prod/".to_string()),
        };
        let draft = DbtConfigDraft::new()
            .with(ConfigKey::DbtSecurityConfig, credentials.clone())
            .with(ConfigKey::DbtPrefixConfig, bucket.clone());
        let ctx = PanelContext {
            draft: &draft,
            enable_debug_log: false,
            gcs_config_type: GcsConfigType::default(),
            translator: &catalog,
        };

        let fields = fields(&ctx);
        assert_eq!(
            fields[0].kind,
            FieldKind::Credentials {
                shape: CredentialShape::Aws
            }
        );
        assert_eq!(fields[0].value, FieldValue::Credentials(credentials));
        assert_eq!(fields[1].value, FieldValue::Bucket(bucket));
    }
}
