use policy_wizard::core::config::{ConfigLoader, CONFIG_FILE_NAME};
use policy_wizard::core::{ConfigValidator, ErrorCategory, WizardConfig};
use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn clear_wizard_env() {
    for v in &[
        "POLICY_WIZARD_CONFIRM_TEMPLATE",
        "POLICY_WIZARD_CONFIRM_TITLE",
        "POLICY_WIZARD_REMOVE_MESSAGE_KEY",
        "POLICY_WIZARD_CUBE_SEPARATOR",
        "POLICY_WIZARD_TRANSLATIONS",
    ] {
        env::remove_var(v);
    }
}

/// Test integration of config loading with a complete file
#[test]
#[serial]
fn test_config_loading_integration() {
    clear_wizard_env();
    let temp_dir = TempDir::new().unwrap();
    let workspace_path = temp_dir.path();

    let config_content = r#"
[confirmation]
template = "templates/modal/danger-modal.tpl.html"
title = "_DELETE_TITLE_"
message_key = "_DELETE_MESSAGE_"
list_param = "cubes"
separator = ", "

[translations]
file = "i18n/en.json"
"#;
    fs::write(workspace_path.join(CONFIG_FILE_NAME), config_content).unwrap();

    let config = ConfigLoader::load_from_workspace(workspace_path).unwrap();
    assert_eq!(
        config.confirmation.template,
        "templates/modal/danger-modal.tpl.html"
    );
    assert_eq!(config.confirmation.title, "_DELETE_TITLE_");
    assert_eq!(config.confirmation.message_key, "_DELETE_MESSAGE_");
    assert_eq!(config.confirmation.list_param, "cubes");
    assert_eq!(config.confirmation.separator, ", ");
    assert_eq!(config.translations.file, Some(PathBuf::from("i18n/en.json")));
    assert!(ConfigValidator::validate(&config).is_ok());
}

/// Partial sections fall back to defaults field by field
#[test]
#[serial]
fn test_partial_config_keeps_defaults() {
    clear_wizard_env();
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(CONFIG_FILE_NAME),
        "[confirmation]\nseparator = \" | \"\n",
    )
    .unwrap();

    let config = ConfigLoader::load_from_workspace(temp_dir.path()).unwrap();
    let defaults = WizardConfig::default();
    assert_eq!(config.confirmation.separator, " | ");
    assert_eq!(config.confirmation.template, defaults.confirmation.template);
    assert_eq!(config.confirmation.title, defaults.confirmation.title);
    assert!(config.translations.file.is_none());
}

/// Test environment variable precedence over config file
#[test]
#[serial]
fn test_env_precedence_integration() {
    clear_wizard_env();
    let temp_dir = TempDir::new().unwrap();
    let workspace_path = temp_dir.path();

    fs::write(
        workspace_path.join(CONFIG_FILE_NAME),
        r#"
[confirmation]
title = "_FILE_TITLE_"
separator = ";"

[translations]
file = "file.json"
"#,
    )
    .unwrap();

    env::set_var("POLICY_WIZARD_CONFIRM_TITLE", "_ENV_TITLE_");
    env::set_var("POLICY_WIZARD_CUBE_SEPARATOR", "/");
    env::set_var("POLICY_WIZARD_TRANSLATIONS", "env.json");
    env::set_var("POLICY_WIZARD_CONFIRM_TEMPLATE", "env-template");
    env::set_var("POLICY_WIZARD_REMOVE_MESSAGE_KEY", "_ENV_MESSAGE_");

    let config = ConfigLoader::load_from_workspace(workspace_path).unwrap();
    clear_wizard_env();

    assert_eq!(config.confirmation.title, "_ENV_TITLE_");
    assert_eq!(config.confirmation.separator, "/");
    assert_eq!(config.confirmation.template, "env-template");
    assert_eq!(config.confirmation.message_key, "_ENV_MESSAGE_");
    assert_eq!(config.translations.file, Some(PathBuf::from("env.json")));
}

/// Test config loading without file (defaults + env vars)
#[test]
#[serial]
fn test_config_loading_without_file() {
    clear_wizard_env();
    let temp_dir = TempDir::new().unwrap();

    env::set_var("POLICY_WIZARD_CUBE_SEPARATOR", ";");
    let config = ConfigLoader::load_from_workspace(temp_dir.path()).unwrap();
    clear_wizard_env();

    assert_eq!(config.confirmation.separator, ";");
    assert_eq!(
        config.confirmation.template,
        "templates/modal/confirm-modal.tpl.html"
    );
    assert_eq!(config.confirmation.title, "_REMOVE_MODEL_CONFIRM_TITLE_");
    assert_eq!(config.confirmation.message_key, "_REMOVE_MODEL_MESSAGE_");
    assert_eq!(config.confirmation.list_param, "modelList");
}

#[test]
#[serial]
fn test_malformed_config_is_config_error() {
    clear_wizard_env();
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(CONFIG_FILE_NAME),
        "[confirmation\ntitle = ",
    )
    .unwrap();

    let err = ConfigLoader::load_from_workspace(temp_dir.path()).unwrap_err();
    assert_eq!(err.category, ErrorCategory::ConfigError);
    assert!(err.message.contains(CONFIG_FILE_NAME));
}

#[test]
#[serial]
fn test_blank_env_override_fails_validation() {
    clear_wizard_env();
    let temp_dir = TempDir::new().unwrap();

    env::set_var("POLICY_WIZARD_CONFIRM_TITLE", " ");
    let config = ConfigLoader::load_from_workspace(temp_dir.path()).unwrap();
    clear_wizard_env();

    let err = ConfigValidator::validate(&config).unwrap_err();
    assert_eq!(err.code, "WIZ-CONFIG-001");
}

#[test]
fn test_env_var_documentation_lists_every_override() {
    let docs = ConfigLoader::env_var_documentation();
    for name in [
        "POLICY_WIZARD_CONFIRM_TEMPLATE",
        "POLICY_WIZARD_CONFIRM_TITLE",
        "POLICY_WIZARD_REMOVE_MESSAGE_KEY",
        "POLICY_WIZARD_CUBE_SEPARATOR",
        "POLICY_WIZARD_TRANSLATIONS",
    ] {
        assert!(docs.iter().any(|line| line.starts_with(name)), "{}", name);
    }
}
