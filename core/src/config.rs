//! Draft tuning knobs.
//!
//! Defaults reproduce the shipped behavior; a JSON file can override
//! them for experiments without recompiling.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftConfig {
    /// Weight of the "fill the currently weakest team" term relative to
    /// the preference term when scoring a (team, role) slot.
    pub balance_weight: f64,

    /// Slots scoring within this fraction of the best slot are treated
    /// as ties and chosen among uniformly at random.
    pub tie_margin: f64,

    /// Upper bound on fairness-refinement passes. Keeps termination
    /// guaranteed on degenerate inputs.
    pub max_refine_passes: usize,
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            balance_weight: 0.1,
            tie_margin: 0.1,
            max_refine_passes: 100,
        }
    }
}

impl DraftConfig {
    /// Load from a JSON file. Missing file is an error; tests and most
    /// callers just use DraftConfig::default().
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: DraftConfig = serde_json::from_str(&content)?;
        Ok(config)
    }
}
