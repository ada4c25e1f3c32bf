// core/src/config.rs
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_path_to_error as spte;

use crate::error::{WozError, WozResult};
use crate::ramp::{validate_step, DEFAULT_STEP_MIN};

/// Innstillinger for konvertering. Leses typisk fra JSON:
///
/// ```json
/// { "step_min": 0.25, "drop_final_breakpoint": false }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertConfig {
    /// Diskretiseringssteg for ramper (minutter).
    #[serde(alias = "step", alias = "time_per_unit")]
    pub step_min: f64,
    /// Gammel oppførsel: fjern siste breakpoint før [END COURSE DATA].
    pub drop_final_breakpoint: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            step_min: DEFAULT_STEP_MIN,
            drop_final_breakpoint: false,
        }
    }
}

impl ConvertConfig {
    pub fn with_step(step_min: f64) -> Self {
        Self { step_min, ..Self::default() }
    }

    pub fn validate(&self) -> WozResult<()> {
        validate_step(self.step_min)
    }

    /// Parse + valider. Feil peker på JSON-stien til feltet som feilet.
    pub fn from_json_str(s: &str) -> WozResult<Self> {
        let de = &mut serde_json::Deserializer::from_str(s);
        let cfg: ConvertConfig = spte::deserialize(de).map_err(|e| {
            WozError::config(format!("invalid config at {}: {}", e.path(), e.inner()))
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> WozResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| WozError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Self::from_json_str(&contents)?;
        log::debug!("config lastet fra {}: {:?}", path.display(), cfg);
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_fields_missing() {
        let cfg = ConvertConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, ConvertConfig::default());
        assert_eq!(cfg.step_min, 0.5);
    }

    #[test]
    fn legacy_alias_is_accepted() {
        let cfg = ConvertConfig::from_json_str(r#"{"time_per_unit": 1.0}"#).unwrap();
        assert_eq!(cfg.step_min, 1.0);
    }

    #[test]
    fn wrong_type_reports_path() {
        let err = ConvertConfig::from_json_str(r#"{"step_min": "fast"}"#).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("step_min"), "message was: {msg}");
    }

    #[test]
    fn non_positive_step_is_rejected() {
        assert!(matches!(
            ConvertConfig::from_json_str(r#"{"step_min": -0.5}"#),
            Err(WozError::Config { .. })
        ));
    }
}
