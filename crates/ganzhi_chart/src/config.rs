//! Chart configuration: balance weights and the month-stem rule.

use ganzhi_base::MonthStemRule;
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Default points a pillar's stem adds to its element.
pub const DEFAULT_STEM_WEIGHT: f64 = 2.0;

/// Default points a pillar's branch adds to its main-qi element.
pub const DEFAULT_BRANCH_WEIGHT: f64 = 1.5;

/// Configurable parameters for chart assembly.
///
/// Every field has a default, so a TOML document only needs the keys it
/// overrides:
///
/// ```toml
/// stem_weight = 2.0
/// branch_weight = 1.5
/// month_stem_rule = "classical"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// Points per stem in the elemental balance. Default: 2.0.
    pub stem_weight: f64,
    /// Points per branch in the elemental balance. Default: 1.5.
    pub branch_weight: f64,
    /// Month stem derivation. Default: [`MonthStemRule::Offset`].
    pub month_stem_rule: MonthStemRule,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            stem_weight: DEFAULT_STEM_WEIGHT,
            branch_weight: DEFAULT_BRANCH_WEIGHT,
            month_stem_rule: MonthStemRule::Offset,
        }
    }
}

impl ChartConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ChartError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject weights that would break the non-negative balance invariant.
    pub fn validate(&self) -> Result<(), ChartError> {
        if !self.stem_weight.is_finite() || self.stem_weight < 0.0 {
            return Err(ChartError::InvalidConfig("stem_weight must be finite and >= 0"));
        }
        if !self.branch_weight.is_finite() || self.branch_weight < 0.0 {
            return Err(ChartError::InvalidConfig("branch_weight must be finite and >= 0"));
        }
        Ok(())
    }

    /// Balance points contributed by one pillar (stem + branch).
    pub fn points_per_pillar(&self) -> f64 {
        self.stem_weight + self.branch_weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = ChartConfig::default();
        assert_eq!(c.stem_weight, 2.0);
        assert_eq!(c.branch_weight, 1.5);
        assert_eq!(c.month_stem_rule, MonthStemRule::Offset);
        assert_eq!(c.points_per_pillar(), 3.5);
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(ChartConfig::from_toml_str("").unwrap(), ChartConfig::default());
    }

    #[test]
    fn partial_override() {
        let c = ChartConfig::from_toml_str("month_stem_rule = \"classical\"").unwrap();
        assert_eq!(c.month_stem_rule, MonthStemRule::Classical);
        assert_eq!(c.stem_weight, DEFAULT_STEM_WEIGHT);
    }

    #[test]
    fn unknown_key_rejected() {
        assert!(matches!(
            ChartConfig::from_toml_str("stem_wieght = 3.0"),
            Err(ChartError::ConfigParse(_))
        ));
    }

    #[test]
    fn negative_weight_rejected() {
        assert!(matches!(
            ChartConfig::from_toml_str("branch_weight = -1.0"),
            Err(ChartError::InvalidConfig(_))
        ));
    }
}
