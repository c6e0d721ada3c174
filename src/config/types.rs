// Configuration type definitions

use serde::Deserialize;

/// Suggestion behavior tuning
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestConfig {
    /// Queries shorter than this many characters are not sent to the server
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
    /// Quiet period after the last keystroke before fetching, in ms
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Delay between Enter and hiding the dropdown on submit, in ms
    #[serde(default = "default_submit_hide_delay_ms")]
    pub submit_hide_delay_ms: u64,
    /// Maximum dropdown rows shown at once
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
}

fn default_min_query_len() -> usize {
    3
}

fn default_debounce_ms() -> u64 {
    200
}

fn default_submit_hide_delay_ms() -> u64 {
    100
}

fn default_max_visible() -> usize {
    10
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            min_query_len: default_min_query_len(),
            debounce_ms: default_debounce_ms(),
            submit_hide_delay_ms: default_submit_hide_delay_ms(),
            max_visible: default_max_visible(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub suggest: SuggestConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.suggest.min_query_len, 3);
        assert_eq!(config.suggest.debounce_ms, 200);
        assert_eq!(config.suggest.submit_hide_delay_ms, 100);
        assert_eq!(config.suggest.max_visible, 10);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.suggest.min_query_len, 3);
        assert_eq!(config.suggest.debounce_ms, 200);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
[suggest]
min_query_len = 2
"#,
        )
        .unwrap();
        assert_eq!(config.suggest.min_query_len, 2);
        assert_eq!(config.suggest.debounce_ms, 200);
        assert_eq!(config.suggest.max_visible, 10);
    }

    #[test]
    fn test_full_section() {
        let config: Config = toml::from_str(
            r#"
[suggest]
min_query_len = 1
debounce_ms = 50
submit_hide_delay_ms = 0
max_visible = 5
"#,
        )
        .unwrap();
        assert_eq!(config.suggest.min_query_len, 1);
        assert_eq!(config.suggest.debounce_ms, 50);
        assert_eq!(config.suggest.submit_hide_delay_ms, 0);
        assert_eq!(config.suggest.max_visible, 5);
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let result: Result<Config, _> = toml::from_str(
            r#"
[suggest]
debounce_ms = "fast"
"#,
        );
        assert!(result.is_err());
    }
}
