use console_core::config::ConsoleConfig;
use console_core::dbt_form::FormMode;
use console_core::models::{ConfigKey, DbtConfigSourceType, FieldValue};
use console_core::placeholder::PlaceholderSize;
use console_core::routing::RouteParams;
use console_core::settings_menu::SettingsLeftPanel;
use console_core::Catalog;
use pretty_assertions::assert_eq;

use crate::cli::CompletionShell;
use crate::commands::common::{format_value, load_config, load_form_data, parse_edit};
use crate::commands::completions::render_completions;
use crate::commands::form::{form_view, format_form_lines};
use crate::commands::menu::format_menu_lines;
use crate::commands::navigate::navigate;
use crate::commands::placeholder::{placeholder_content, PlaceholderArgs};
use crate::commands::submit::{assemble_submission, format_submission_lines};
use crate::error::CliError;

fn write_json(dir: &tempfile::TempDir, name: &str, payload: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, payload).unwrap();
    path
}

fn placeholder_args(kind: &str) -> PlaceholderArgs<'_> {
    PlaceholderArgs {
        kind,
        size: None,
        heading: None,
        doc: None,
        permission: false,
    }
}

#[test]
fn parse_edit_keeps_text_values_raw() {
    let (key, value) = parse_edit("dbtCloudAccountId=12345").unwrap();
    assert_eq!(key, ConfigKey::DbtCloudAccountId);
    assert_eq!(value, FieldValue::Text("12345".to_string()));

    let (_, value) = parse_edit("dbtCloudUrl=https://emea.getdbt.com/?a=b").unwrap();
    assert_eq!(value, FieldValue::Text("https://emea.getdbt.com/?a=b".to_string()));
}

#[test]
fn parse_edit_decodes_json_for_structured_keys() {
    let (_, value) = parse_edit("includeTags=false").unwrap();
    assert_eq!(value, FieldValue::Bool(false));

    let (key, value) =
        parse_edit(r#"dbtPrefixConfig={"dbtBucketName":"artifacts","dbtObjectPrefix":"dbt/"}"#)
            .unwrap();
    assert_eq!(key, ConfigKey::DbtPrefixConfig);
    assert_eq!(format_value(&value), "artifacts/dbt/");
}

#[test]
fn parse_edit_rejects_malformed_input() {
    assert!(matches!(
        parse_edit("dbtCloudUrl"),
        Err(CliError::InvalidEdit(_))
    ));
    assert!(matches!(
        parse_edit("dbtWarehouse=x"),
        Err(CliError::UnknownConfigKey(key)) if key == "dbtWarehouse"
    ));
    assert!(matches!(
        parse_edit("includeTags=maybe"),
        Err(CliError::InvalidEditValue { .. })
    ));
}

#[test]
fn load_form_data_selects_requested_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_json(
        &dir,
        "data.json",
        r#"{ "ingestionName": "dbt-nightly", "dbtConfigSourceType": "local" }"#,
    );
    let data = load_form_data(Some(&path), "s3").unwrap();
    assert_eq!(data.ingestion_name, "dbt-nightly");
    assert_eq!(data.dbt_config_source_type, DbtConfigSourceType::S3);

    assert!(load_form_data(None, "ftp").is_err());
}

#[test]
fn local_submission_contains_exactly_local_and_shared_keys() {
    let config = ConsoleConfig::default();
    let edits = vec![
        "dbtCatalogFilePath=/dbt/catalog.json".to_string(),
        "dbtCloudAccountId=ignored".to_string(),
    ];
    let submission = assemble_submission(&config, "local", None, &edits)
        .unwrap()
        .unwrap();

    let keys: Vec<&str> = submission.keys().map(ConfigKey::as_str).collect();
    assert_eq!(
        keys,
        vec![
            "dbtCatalogFilePath",
            "dbtManifestFilePath",
            "dbtRunResultsFilePath",
            "dbtUpdateDescriptions",
            "dbtClassificationName",
            "includeTags",
        ]
    );
    assert_eq!(submission.text(ConfigKey::DbtManifestFilePath), "");
    assert_eq!(
        format_submission_lines(&submission)[0],
        "dbtCatalogFilePath = /dbt/catalog.json"
    );
}

#[test]
fn submission_without_source_is_empty() {
    let config = ConsoleConfig::default();
    assert_eq!(
        assemble_submission(&config, "none", None, &[]).unwrap(),
        None
    );
}

#[test]
fn cloud_form_masks_token_and_reports_missing_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_json(
        &dir,
        "data.json",
        r#"{
            "ingestionName": "dbt-cloud",
            "dbtConfigSource": { "dbtCloudAuthToken": "secret-token" }
        }"#,
    );
    let view = form_view(&ConsoleConfig::default(), "cloud", Some(&path), FormMode::Edit).unwrap();
    let lines = format_form_lines(&view);

    assert_eq!(lines[0], "Name* [text] = dbt-cloud (disabled)");
    assert!(lines.iter().any(|line| line.contains("= ********")));
    assert!(lines.iter().all(|line| !line.contains("secret-token")));
    assert!(lines.contains(&"missing required: dbtCloudAccountId".to_string()));
    assert_eq!(lines.last().unwrap(), "[Back] [Submit]");
}

#[test]
fn form_without_source_shows_message() {
    let view = form_view(&ConsoleConfig::default(), "", None, FormMode::Add).unwrap();
    let lines = format_form_lines(&view);
    assert!(lines.contains(&"No source selected for dbt Configuration.".to_string()));
}

#[test]
fn menu_lines_mark_the_selected_item() {
    let catalog = Catalog::english();
    let view = SettingsLeftPanel::builtin().view(
        &console_core::models::PermissionSet::new(),
        true,
        &RouteParams::from_path("/settings/access/roles"),
        &catalog,
    );
    let lines = format_menu_lines(&view, &catalog);
    assert_eq!(lines[0], "Members");
    assert!(lines.iter().any(|line| line.starts_with(" > access.roles")));
    assert!(lines.contains(&"Notifications [Beta]".to_string()));
}

#[test]
fn menu_lines_fall_back_to_permission_message() {
    let catalog = Catalog::english();
    let view = SettingsLeftPanel::builtin().view(
        &console_core::models::PermissionSet::new(),
        false,
        &RouteParams::default(),
        &catalog,
    );
    assert_eq!(
        format_menu_lines(&view, &catalog),
        vec!["You don't have access, please check with the admin to get permissions".to_string()]
    );
}

#[test]
fn navigate_applies_routing_rules() {
    assert_eq!(
        navigate("members.teams").path,
        "/settings/members/teams/Organization"
    );
    let search = navigate("openMetadata.search");
    assert_eq!(search.path, "/settings/openMetadata/search/on-demand");
    assert_eq!(search.selected_key, "openMetadata.search");
}

#[test]
fn placeholder_uses_configured_size_unless_overridden() {
    let config = ConsoleConfig {
        placeholder_size: PlaceholderSize::Medium,
        ..ConsoleConfig::default()
    };
    let content = placeholder_content(&config, placeholder_args("unknown-kind")).unwrap();
    assert_eq!(content.size_px, 140);
    assert_eq!(content.message, "No data available.");

    let mut args = placeholder_args("filter");
    args.size = Some("small");
    let content = placeholder_content(&config, args).unwrap();
    assert_eq!(content.size_px, 100);

    let mut args = placeholder_args("filter");
    args.size = Some("huge");
    assert!(placeholder_content(&config, args).is_err());
}

#[test]
fn create_placeholder_requires_permission() {
    let config = ConsoleConfig::default();
    let mut args = placeholder_args("create");
    args.heading = Some("Glossary".to_string());
    let denied = placeholder_content(&config, args).unwrap();
    assert!(denied.message.starts_with("You don't have access"));

    let mut args = placeholder_args("create");
    args.heading = Some("Glossary".to_string());
    args.permission = true;
    let allowed = placeholder_content(&config, args).unwrap();
    assert_eq!(
        allowed.message,
        "Adding a new Glossary is easy, just give it a spin!"
    );
}

#[test]
fn load_config_reads_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_json(
        &dir,
        "console-config.json",
        r#"{ "version": 1, "placeholder_size": "xSmall" }"#,
    );
    let config = load_config(Some(&path)).unwrap();
    assert_eq!(config.placeholder_size, PlaceholderSize::XSmall);
}

#[test]
fn completions_reference_binary_name() {
    let script = String::from_utf8(render_completions(CompletionShell::Bash)).unwrap();
    assert!(script.contains("console"));
}
