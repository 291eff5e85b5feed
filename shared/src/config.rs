use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::constants::*;
use crate::entrants::parse_entrants;
use crate::error::WheelError;

/// Options accepted by [`WheelConfig::apply_override`].
pub const OVERRIDE_KEYS: [&str; 6] = ["duration", "min_spins", "max_spins", "points", "celebration", "names"];

/// Tunables for a single wheel instance. Every field has a default so a
/// partial JSON object (or none at all) is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_spin_range"))]
pub struct WheelConfig {
    #[validate(range(min = 1))]
    pub spin_duration_ms: u32,
    #[validate(range(min = 1))]
    pub min_spins: u32,
    pub max_spins: u32,
    pub points_per_win: u32,
    pub celebration_ms: u32,
    #[validate(length(min = 1))]
    pub default_names: Vec<String>,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            spin_duration_ms: SPIN_DURATION_MS,
            min_spins: MIN_SPINS,
            max_spins: MAX_SPINS,
            points_per_win: POINTS_PER_WIN,
            celebration_ms: CELEBRATION_MS,
            default_names: DEFAULT_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl WheelConfig {
    pub fn checked(self) -> Result<Self, WheelError> {
        self.validate()?;
        Ok(self)
    }

    /// Applies one `key=value` option as found in a page query string.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), WheelError> {
        let number = || {
            value
                .trim()
                .parse::<u32>()
                .map_err(|e| WheelError::InvalidConfig(format!("{key}={value}: {e}")))
        };
        match key {
            "duration" => self.spin_duration_ms = number()?,
            "min_spins" => self.min_spins = number()?,
            "max_spins" => self.max_spins = number()?,
            "points" => self.points_per_win = number()?,
            "celebration" => self.celebration_ms = number()?,
            "names" => {
                let names = parse_entrants(value);
                if names.is_empty() {
                    return Err(WheelError::InvalidConfig("names: no usable entries".to_string()));
                }
                self.default_names = names;
            }
            other => return Err(WheelError::InvalidConfig(format!("unknown option {other}"))),
        }
        Ok(())
    }

    /// Time after which the deadline timer forces completion of a spin.
    pub fn deadline_ms(&self) -> u32 {
        self.spin_duration_ms.saturating_add(DEADLINE_GRACE_MS)
    }
}

fn validate_spin_range(config: &WheelConfig) -> Result<(), ValidationError> {
    if config.min_spins > config.max_spins {
        return Err(ValidationError::new("inverted_spin_range"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = WheelConfig::default().checked().unwrap();
        assert_eq!(config.spin_duration_ms, 4000);
        assert_eq!(config.points_per_win, 5);
        assert_eq!(config.default_names.len(), 6);
        assert_eq!(config.deadline_ms(), 4000 + DEADLINE_GRACE_MS);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: WheelConfig = serde_json::from_str(r#"{"points_per_win": 10}"#).unwrap();
        assert_eq!(config.points_per_win, 10);
        assert_eq!(config.min_spins, MIN_SPINS);
        assert_eq!(config.max_spins, MAX_SPINS);
    }

    #[test]
    fn test_query_overrides() {
        let mut config = WheelConfig::default();
        config.apply_override("duration", " 2500 ").unwrap();
        config.apply_override("points", "3").unwrap();
        config.apply_override("names", "Ann, Ben\nCy").unwrap();
        assert_eq!(config.spin_duration_ms, 2500);
        assert_eq!(config.points_per_win, 3);
        assert_eq!(config.default_names, vec!["Ann", "Ben", "Cy"]);

        assert!(config.apply_override("duration", "fast").is_err());
        assert!(config.apply_override("names", " , ").is_err());
        assert!(config.apply_override("colour", "red").is_err());
        assert_eq!(config.spin_duration_ms, 2500);
    }

    #[test]
    fn test_rejects_inverted_range() {
        let config = WheelConfig { min_spins: 9, max_spins: 3, ..WheelConfig::default() };
        assert!(matches!(config.checked(), Err(WheelError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_zero_duration() {
        let config = WheelConfig { spin_duration_ms: 0, ..WheelConfig::default() };
        assert!(config.checked().is_err());
    }

    #[test]
    fn test_rejects_empty_default_names() {
        let config = WheelConfig { default_names: Vec::new(), ..WheelConfig::default() };
        assert!(config.checked().is_err());
    }
}
