//! Integration tests for layered configuration loading.
//!
//! Uses `figment::Jail` for sandboxed working directory and env manipulation.

use figment::Jail;
use molar_config::{ConfigError, MolarConfig};
use pretty_assertions::assert_eq;

fn write_project_config(jail: &Jail, contents: &str) {
    let dir = jail.directory().join(".molar");
    std::fs::create_dir_all(&dir).expect(".molar should create");
    std::fs::write(dir.join("config.toml"), contents).expect("config should write");
}

#[test]
fn defaults_without_files() {
    Jail::expect_with(|jail| {
        let config = MolarConfig::load_from(jail.directory()).expect("config loads");
        assert!(!config.functions.is_configured());
        assert_eq!(config.functions.extract_function, "parse-procedure");
        assert_eq!(config.general.default_limit, 20);
        Ok(())
    });
}

#[test]
fn loads_project_toml() {
    Jail::expect_with(|jail| {
        write_project_config(
            jail,
            r#"
[functions]
url = "https://clinic.supabase.co"
anon_key = "anon-123"
timeout_secs = 5

[notes]
ai_correction = false
reference_path = "data/reference.json"

[roster]
default_batch = "Intake 2026"
"#,
        );

        let config = MolarConfig::load_from(jail.directory()).expect("config loads");
        assert!(config.functions.is_configured());
        assert_eq!(config.functions.timeout_secs, 5);
        assert!(!config.notes.ai_correction);
        assert!(config.notes.ai_extraction);
        assert_eq!(
            config.notes.reference_path,
            std::path::PathBuf::from("data/reference.json")
        );
        assert_eq!(config.roster.default_name, "Student");
        assert_eq!(config.roster.default_batch, "Intake 2026");
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        write_project_config(
            jail,
            r#"
[functions]
url = "https://from-toml.supabase.co"
anon_key = "toml-key"
"#,
        );
        jail.set_env("MOLAR_FUNCTIONS__ANON_KEY", "env-key");
        jail.set_env("MOLAR_NOTES__AI_EXTRACTION", "false");

        let config = MolarConfig::load_from(jail.directory()).expect("config loads");
        assert_eq!(config.functions.url, "https://from-toml.supabase.co");
        assert_eq!(config.functions.anon_key, "env-key");
        assert!(!config.notes.ai_extraction);
        Ok(())
    });
}

#[test]
fn single_underscore_env_is_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("MOLAR_FUNCTIONS_URL", "https://typo.supabase.co");
        let config = MolarConfig::load_from(jail.directory()).expect("config loads");
        assert!(config.functions.url.is_empty());
        Ok(())
    });
}

#[test]
fn blank_default_batch_is_rejected() {
    Jail::expect_with(|jail| {
        write_project_config(
            jail,
            r#"
[roster]
default_batch = "  "
"#,
        );
        let err = MolarConfig::load_from(jail.directory()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "roster.default_batch"));
        Ok(())
    });
}

#[test]
fn zero_capture_timeout_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("MOLAR_NOTES__CAPTURE_TIMEOUT_SECS", "0");
        let err = MolarConfig::load_from(jail.directory()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "notes.capture_timeout_secs"
        ));
        Ok(())
    });
}

#[test]
fn wrong_type_surfaces_figment_error() {
    Jail::expect_with(|jail| {
        write_project_config(
            jail,
            r#"
[functions]
timeout_secs = "soon"
"#,
        );
        let err = MolarConfig::load_from(jail.directory()).unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
