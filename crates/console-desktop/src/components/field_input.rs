//! Renders one form field descriptor as an input control.

use dioxus::prelude::*;

use console_core::models::{
    ChangeTarget, CredentialShape, DbtBucketDetails, FieldDescriptor, FieldKind, FieldValue,
    GcsCredentials, GcsCredentialsValues, SCredentials,
};
use console_core::util::normalize_text_option;
use console_core::Translator;

use crate::state::AppState;
use crate::theme::PALETTE;

/// One text input inside a credentials field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CredentialInput {
    AwsAccessKeyId,
    AwsSecretAccessKey,
    AwsRegion,
    AwsSessionToken,
    EndPointUrl,
    GcsProjectId,
    GcsPrivateKeyId,
    GcsPrivateKey,
    GcsClientEmail,
    GcsClientId,
    GcsPath,
}

impl CredentialInput {
    const AWS: [Self; 5] = [
        Self::AwsAccessKeyId,
        Self::AwsSecretAccessKey,
        Self::AwsRegion,
        Self::AwsSessionToken,
        Self::EndPointUrl,
    ];
    const GCS_VALUES: [Self; 5] = [
        Self::GcsProjectId,
        Self::GcsPrivateKeyId,
        Self::GcsPrivateKey,
        Self::GcsClientEmail,
        Self::GcsClientId,
    ];

    pub(crate) const fn for_shape(shape: CredentialShape) -> &'static [Self] {
        match shape {
            CredentialShape::Aws => &Self::AWS,
            CredentialShape::GcsValues => &Self::GCS_VALUES,
            CredentialShape::GcsPath => &[Self::GcsPath],
        }
    }

    pub(crate) const fn label_key(self) -> &'static str {
        match self {
            Self::AwsAccessKeyId => "label.aws-access-key-id",
            Self::AwsSecretAccessKey => "label.aws-secret-access-key",
            Self::AwsRegion => "label.aws-region",
            Self::AwsSessionToken => "label.aws-session-token",
            Self::EndPointUrl => "label.endpoint-url",
            Self::GcsProjectId => "label.project-id",
            Self::GcsPrivateKeyId => "label.private-key-id",
            Self::GcsPrivateKey => "label.private-key",
            Self::GcsClientEmail => "label.client-email",
            Self::GcsClientId => "label.client-id",
            Self::GcsPath => "label.gcs-credential-path",
        }
    }

    const fn is_secret(self) -> bool {
        matches!(
            self,
            Self::AwsSecretAccessKey | Self::AwsSessionToken | Self::GcsPrivateKey
        )
    }

    fn gcs_values(credentials: &SCredentials) -> GcsCredentialsValues {
        match &credentials.gcs_config {
            Some(GcsCredentials::Values(values)) => values.clone(),
            _ => GcsCredentialsValues::default(),
        }
    }

    fn gcs_slot(self, values: &mut GcsCredentialsValues) -> Option<&mut Option<String>> {
        match self {
            Self::GcsProjectId => Some(&mut values.project_id),
            Self::GcsPrivateKeyId => Some(&mut values.private_key_id),
            Self::GcsPrivateKey => Some(&mut values.private_key),
            Self::GcsClientEmail => Some(&mut values.client_email),
            Self::GcsClientId => Some(&mut values.client_id),
            _ => None,
        }
    }

    pub(crate) fn read(self, credentials: &SCredentials) -> String {
        let values = Self::gcs_values(credentials);
        let value = match self {
            Self::AwsAccessKeyId => credentials.aws_access_key_id.clone(),
            Self::AwsSecretAccessKey => credentials.aws_secret_access_key.clone(),
            Self::AwsRegion => credentials.aws_region.clone(),
            Self::AwsSessionToken => credentials.aws_session_token.clone(),
            Self::EndPointUrl => credentials.end_point_url.clone(),
            Self::GcsProjectId => values.project_id,
            Self::GcsPrivateKeyId => values.private_key_id,
            Self::GcsPrivateKey => values.private_key,
            Self::GcsClientEmail => values.client_email,
            Self::GcsClientId => values.client_id,
            Self::GcsPath => match &credentials.gcs_config {
                Some(GcsCredentials::Path(path)) => Some(path.clone()),
                _ => None,
            },
        };
        value.unwrap_or_default()
    }

    /// Credentials with this input replaced by `raw`; blank input clears it.
    pub(crate) fn write(self, credentials: &SCredentials, raw: String) -> SCredentials {
        let value = normalize_text_option(Some(raw));
        let mut next = credentials.clone();
        match self {
            Self::AwsAccessKeyId => next.aws_access_key_id = value,
            Self::AwsSecretAccessKey => next.aws_secret_access_key = value,
            Self::AwsRegion => next.aws_region = value,
            Self::AwsSessionToken => next.aws_session_token = value,
            Self::EndPointUrl => next.end_point_url = value,
            Self::GcsPath => next.gcs_config = value.map(GcsCredentials::Path),
            _ => {
                let mut values = Self::gcs_values(credentials);
                if let Some(slot) = self.gcs_slot(&mut values) {
                    *slot = value;
                }
                next.gcs_config = Some(GcsCredentials::Values(values));
            }
        }
        next
    }
}

pub(crate) fn with_bucket_name(bucket: &DbtBucketDetails, raw: String) -> DbtBucketDetails {
    DbtBucketDetails {
        dbt_bucket_name: normalize_text_option(Some(raw)),
        ..bucket.clone()
    }
}

pub(crate) fn with_object_prefix(bucket: &DbtBucketDetails, raw: String) -> DbtBucketDetails {
    DbtBucketDetails {
        dbt_object_prefix: normalize_text_option(Some(raw)),
        ..bucket.clone()
    }
}

const INPUT_STYLE: &str = "
    width: 100%;
    padding: 6px 8px;
    border-radius: 4px;
    box-sizing: border-box;
";

/// A labeled input for one descriptor.
///
/// Edits are reported as `(target, value)` pairs; the field holds no state.
#[component]
pub fn FieldInput(
    field: FieldDescriptor,
    on_change: EventHandler<(ChangeTarget, FieldValue)>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = PALETTE;
    let target = field.on_change;
    let input_id = format!("{}-input", field.id);
    let disabled = field.disabled;
    let help = field.help_text.clone().unwrap_or_default();

    let control = match (&field.kind, &field.value) {
        (FieldKind::Text | FieldKind::Password, FieldValue::Text(text)) => {
            let input_type = if field.kind == FieldKind::Password {
                "password"
            } else {
                "text"
            };
            rsx! {
                input {
                    id: "{input_id}",
                    r#type: input_type,
                    style: "{INPUT_STYLE} border: 1px solid {colors.border};",
                    value: "{text}",
                    disabled: disabled,
                    oninput: move |evt: FormEvent| {
                        on_change.call((target, FieldValue::Text(evt.value())));
                    },
                }
            }
        }
        (FieldKind::Switch, FieldValue::Bool(checked)) => rsx! {
            input {
                id: "{input_id}",
                r#type: "checkbox",
                checked: *checked,
                disabled: disabled,
                onchange: move |evt: FormEvent| {
                    on_change.call((target, FieldValue::Bool(evt.checked())));
                },
            }
        },
        (FieldKind::Select { options }, FieldValue::Text(selected)) => rsx! {
            select {
                id: "{input_id}",
                style: "{INPUT_STYLE} border: 1px solid {colors.border};",
                disabled: disabled,
                onchange: move |evt: FormEvent| {
                    on_change.call((target, FieldValue::Text(evt.value())));
                },
                option { value: "", selected: selected.is_empty(), "" }
                for choice in options.iter() {
                    option {
                        key: "{choice.value}",
                        value: "{choice.value}",
                        selected: &choice.value == selected,
                        "{choice.label}"
                    }
                }
            }
        },
        (FieldKind::Credentials { shape }, FieldValue::Credentials(credentials)) => rsx! {
            div {
                id: "{input_id}",
                style: "display: flex; flex-direction: column; gap: 6px;",
                for part in CredentialInput::for_shape(*shape).iter().copied() {
                    {
                        let credentials = credentials.clone();
                        let label_key = part.label_key();
                        let label = state.catalog.read().t(label_key);
                        let current = part.read(&credentials);
                        let input_type = if part.is_secret() { "password" } else { "text" };
                        rsx! {
                            label {
                                key: "{label_key}",
                                style: "font-size: 12px; color: {colors.text_secondary};",
                                "{label}"
                                input {
                                    r#type: input_type,
                                    style: "{INPUT_STYLE} border: 1px solid {colors.border};",
                                    value: "{current}",
                                    disabled: disabled,
                                    oninput: move |evt: FormEvent| {
                                        let next = part.write(&credentials, evt.value());
                                        on_change.call((target, FieldValue::Credentials(next)));
                                    },
                                }
                            }
                        }
                    }
                }
            }
        },
        (FieldKind::BucketPath, FieldValue::Bucket(bucket)) => {
            let bucket_name = bucket.dbt_bucket_name.clone().unwrap_or_default();
            let object_prefix = bucket.dbt_object_prefix.clone().unwrap_or_default();
            let bucket_for_name = bucket.clone();
            let bucket_for_prefix = bucket.clone();
            let (name_placeholder, prefix_placeholder) = {
                let catalog = state.catalog.read();
                (catalog.t("label.bucket-name"), catalog.t("label.object-prefix"))
            };
            rsx! {
                div {
                    id: "{input_id}",
                    style: "display: flex; gap: 6px;",
                    input {
                        placeholder: "{name_placeholder}",
                        style: "{INPUT_STYLE} border: 1px solid {colors.border};",
                        value: "{bucket_name}",
                        disabled: disabled,
                        oninput: move |evt: FormEvent| {
                            let next = with_bucket_name(&bucket_for_name, evt.value());
                            on_change.call((target, FieldValue::Bucket(next)));
                        },
                    }
                    input {
                        placeholder: "{prefix_placeholder}",
                        style: "{INPUT_STYLE} border: 1px solid {colors.border};",
                        value: "{object_prefix}",
                        disabled: disabled,
                        oninput: move |evt: FormEvent| {
                            let next = with_object_prefix(&bucket_for_prefix, evt.value());
                            on_change.call((target, FieldValue::Bucket(next)));
                        },
                    }
                }
            }
        }
        (kind, value) => {
            tracing::warn!(
                "Field {} has a {:?} value that its {:?} kind cannot render",
                field.name,
                value.shape(),
                kind
            );
            rsx! {}
        }
    };

    rsx! {
        div {
            class: "form-field",
            id: "{field.id}",
            "data-testid": "{field.test_id}",
            style: "margin-bottom: 12px;",

            label {
                r#for: "{input_id}",
                style: "display: block; font-weight: 500; margin-bottom: 4px;",
                "{field.label}"
                if field.required {
                    span { style: "color: {colors.error};", " *" }
                }
            }
            {control}
            if !help.is_empty() {
                div {
                    class: "field-help",
                    style: "font-size: 12px; color: {colors.text_muted}; margin-top: 4px;",
                    "{help}"
                }
            }
        }
        if field.has_separator {
            hr { style: "border: none; border-top: 1px solid {colors.border}; margin: 12px 0;" }
        }
    }
}
