//! Source-specific dbt config panels.
//!
//! Each panel is a pure function from a draft snapshot to descriptors, plus
//! the list of keys it submits. Dispatch over [`DbtConfigSourceType`] is an
//! exhaustive match so a new source cannot be silently skipped.

mod cloud;
mod common;
mod gcs;
mod http;
mod local;
mod s3;

use crate::i18n::Translator;
use crate::models::{ConfigKey, DbtConfigDraft, DbtConfigSourceType, FieldDescriptor, GcsConfigType};

/// Read-only inputs shared by every panel.
pub struct PanelContext<'a> {
    pub draft: &'a DbtConfigDraft,
    pub enable_debug_log: bool,
    pub gcs_config_type: GcsConfigType,
    pub translator: &'a dyn Translator,
}

/// Descriptors for the panel of `source`, common block included.
///
/// Returns `None` for [`DbtConfigSourceType::None`].
pub fn panel_fields(
    source: DbtConfigSourceType,
    ctx: &PanelContext<'_>,
) -> Option<Vec<FieldDescriptor>> {
    let (mut fields, description_test_id) = match source {
        DbtConfigSourceType::Cloud => (cloud::fields(ctx), "cloud-update-description"),
        DbtConfigSourceType::Local => (local::fields(ctx), "local-update-description"),
        DbtConfigSourceType::Http => (http::fields(ctx), "http-update-description"),
        DbtConfigSourceType::S3 => (s3::fields(ctx), "s3-update-description"),
        DbtConfigSourceType::Gcs => (gcs::fields(ctx), "gcs-update-description"),
        DbtConfigSourceType::None => return None,
    };
    fields.extend(common::fields(ctx, description_test_id));
    Some(fields)
}

/// Keys a source submits, shared keys last.
pub fn submit_keys(source: DbtConfigSourceType) -> Option<Vec<ConfigKey>> {
    let own: &[ConfigKey] = match source {
        DbtConfigSourceType::Cloud => &cloud::SUBMIT_KEYS,
        DbtConfigSourceType::Local => &local::SUBMIT_KEYS,
        DbtConfigSourceType::Http => &http::SUBMIT_KEYS,
        DbtConfigSourceType::S3 => &s3::SUBMIT_KEYS,
        DbtConfigSourceType::Gcs => &gcs::SUBMIT_KEYS,
        DbtConfigSourceType::None => return None,
    };
    Some(own.iter().chain(ConfigKey::SHARED.iter()).copied().collect())
}

/// The submission a source's panel assembles from the draft.
pub fn submission(source: DbtConfigSourceType, draft: &DbtConfigDraft) -> Option<DbtConfigDraft> {
    submit_keys(source).map(|keys| draft.subset(&keys))
}
