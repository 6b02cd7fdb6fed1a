// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_DELAY_MS: u64 = 1000;
pub const MAX_DELAY_MS: u64 = 60_000;
pub const DEFAULT_TWO_COLUMN_MIN_WIDTH: u16 = 80;

/// Search configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

impl SearchConfig {
    /// Synthesis delay, capped at `MAX_DELAY_MS`
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms.min(MAX_DELAY_MS))
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            delay_ms: DEFAULT_DELAY_MS,
            seed: None,
        }
    }
}

/// UI configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_two_column_min_width")]
    pub two_column_min_width: u16,
}

fn default_two_column_min_width() -> u16 {
    DEFAULT_TWO_COLUMN_MIN_WIDTH
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            two_column_min_width: DEFAULT_TWO_COLUMN_MIN_WIDTH,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_delay_is_capped() {
        let search = SearchConfig {
            delay_ms: u64::MAX,
            seed: None,
        };
        assert_eq!(search.delay(), Duration::from_millis(MAX_DELAY_MS));
    }

    #[test]
    fn test_default_delay_is_one_second() {
        assert_eq!(SearchConfig::default().delay(), Duration::from_secs(1));
    }

    // For any delay and seed written to the [search] section, parsing keeps
    // both values and leaves [ui] at its defaults.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_search_section_round_trips(delay in 0u64..100_000, seed in any::<u32>()) {
            let toml_content = format!(r#"
[search]
delay_ms = {}
seed = {}
"#, delay, seed);

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse: {}", toml_content);

            let config = config.unwrap();
            prop_assert_eq!(config.search.delay_ms, delay);
            prop_assert_eq!(config.search.seed, Some(seed as u64));
            prop_assert_eq!(config.ui, UiConfig::default());
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_fields_use_defaults(
            include_search_section in prop::bool::ANY,
            include_ui_section in prop::bool::ANY
        ) {
            let mut toml_content = String::new();
            if include_search_section {
                toml_content.push_str("[search]\n");
            }
            if include_ui_section {
                toml_content.push_str("[ui]\n");
            }

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse config with missing fields");
            prop_assert_eq!(config.unwrap(), Config::default());
        }
    }
}
