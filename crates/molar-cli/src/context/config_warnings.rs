use molar_config::MolarConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &MolarConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &MolarConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.functions.is_configured() && has_single_underscore_key(&env_keys, "MOLAR_FUNCTIONS")
    {
        warnings.push(
            "Functions config appears default while MOLAR_FUNCTIONS_* env vars exist. Use double underscores (example: MOLAR_FUNCTIONS__ANON_KEY)."
                .to_string(),
        );
    }

    for section in ["NOTES", "ROSTER", "GENERAL"] {
        let prefix = format!("MOLAR_{section}");
        if has_single_underscore_key(&env_keys, &prefix) {
            warnings.push(format!(
                "{prefix}_* env vars are ignored. Use double underscores (example: {prefix}__...)."
            ));
        }
    }

    warnings
}

/// `MOLAR_SECTION_FIELD` instead of `MOLAR_SECTION__FIELD`.
fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}

#[cfg(test)]
mod tests {
    use molar_config::{FunctionsConfig, MolarConfig};

    use super::collect_unconfigured_warnings;

    fn env(keys: &[&str]) -> Vec<(String, String)> {
        keys.iter()
            .map(|key| ((*key).to_string(), "value".to_string()))
            .collect()
    }

    #[test]
    fn warns_for_single_underscore_keys() {
        let warnings = collect_unconfigured_warnings(
            &MolarConfig::default(),
            env(&[
                "MOLAR_FUNCTIONS_URL",
                "MOLAR_NOTES_AI_CORRECTION",
                "MOLAR_ROSTER_DEFAULT_BATCH",
            ]),
        );

        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].contains("MOLAR_FUNCTIONS__ANON_KEY"));
    }

    #[test]
    fn general_section_single_underscore_warns() {
        let warnings = collect_unconfigured_warnings(
            &MolarConfig::default(),
            env(&["MOLAR_GENERAL_DEFAULT_LIMIT"]),
        );

        assert_eq!(
            warnings,
            vec![
                "MOLAR_GENERAL_* env vars are ignored. Use double underscores (example: MOLAR_GENERAL__...)."
                    .to_string()
            ]
        );
    }

    #[test]
    fn double_underscore_keys_are_fine() {
        let warnings = collect_unconfigured_warnings(
            &MolarConfig::default(),
            env(&[
                "MOLAR_FUNCTIONS__URL",
                "MOLAR_NOTES__AI_CORRECTION",
                "MOLAR_GENERAL__DEFAULT_LIMIT",
                "MOLAR_LOG",
            ]),
        );

        assert!(warnings.is_empty());
    }

    #[test]
    fn configured_functions_do_not_warn() {
        let config = MolarConfig {
            functions: FunctionsConfig {
                url: "https://abc.supabase.co".to_string(),
                anon_key: "anon".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        let warnings = collect_unconfigured_warnings(&config, env(&["MOLAR_FUNCTIONS_URL"]));
        assert!(warnings.is_empty());
    }
}
