//! Display language for symbol labels.

use serde::{Deserialize, Serialize};

/// Which label variant to render. Purely cosmetic: no calculation depends on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    /// Chinese characters (`甲`, `子`, `木`).
    #[default]
    Chinese,
    /// Romanized / English names (`Jia`, `Zi`, `Wood`).
    English,
}
