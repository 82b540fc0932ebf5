use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Whether percentages resolve to whole pixels.
    ///
    /// - **true**: `round(base * p / 100)`, so `"33%"` of `100` is `33`.
    /// - **false**: the exact product is kept.
    ///
    /// Defaults to `true`.
    pub round_percentages: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            round_percentages: true,
        }
    }
}
