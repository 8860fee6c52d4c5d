//! Player records and effective-skill lookup.

use crate::error::{DraftError, DraftResult};
use crate::types::{PlayerId, Role, Tier, TEAM_SIZE};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// One player in the roster. Immutable for the duration of a draft run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,

    /// Default rank, used for any role without an override.
    pub tier: Tier,

    /// Sparse per-role overrides ("I'm diamond on jungle, gold elsewhere").
    #[serde(default)]
    pub role_tiers: HashMap<Role, Tier>,

    /// Acceptable roles, most preferred first. 1..=5 entries, no duplicates.
    pub preferred_roles: Vec<Role>,
}

impl Player {
    /// Create a player with a freshly generated id.
    pub fn new(name: impl Into<String>, tier: Tier, preferred_roles: Vec<Role>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            tier,
            role_tiers: HashMap::new(),
            preferred_roles,
        }
    }

    /// Create a player with an explicit id (imports, tests).
    pub fn with_id(
        id: impl Into<PlayerId>,
        name: impl Into<String>,
        tier: Tier,
        preferred_roles: Vec<Role>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tier,
            role_tiers: HashMap::new(),
            preferred_roles,
        }
    }

    /// Attach a per-role override tier.
    pub fn with_role_tier(mut self, role: Role, tier: Tier) -> Self {
        self.role_tiers.insert(role, tier);
        self
    }

    /// Effective rank for a role: the override if present, else the default.
    pub fn effective_tier(&self, role: Role) -> Tier {
        self.role_tiers.get(&role).copied().unwrap_or(self.tier)
    }

    /// Ordinal skill contributed when playing `role`.
    pub fn skill(&self, role: Role) -> u32 {
        self.effective_tier(role).value()
    }

    /// Whether the role appears anywhere in the preference list.
    pub fn is_eligible(&self, role: Role) -> bool {
        self.preferred_roles.contains(&role)
    }

    /// 0-based rank of the role in the preference list (0 = most preferred).
    pub fn preference_rank(&self, role: Role) -> Option<usize> {
        self.preferred_roles.iter().position(|r| *r == role)
    }

    /// Number of acceptable roles. Fewer = harder to place.
    pub fn flexibility(&self) -> usize {
        self.preferred_roles.len()
    }

    /// Check the preference list shape: non-empty, at most one entry per
    /// role, no duplicates.
    pub fn validate(&self) -> DraftResult<()> {
        if self.preferred_roles.is_empty() {
            return Err(DraftError::InvalidPlayer {
                name: self.name.clone(),
                reason: "preference list is empty".into(),
            });
        }
        if self.preferred_roles.len() > TEAM_SIZE {
            return Err(DraftError::InvalidPlayer {
                name: self.name.clone(),
                reason: format!(
                    "preference list has {} entries, max {TEAM_SIZE}",
                    self.preferred_roles.len()
                ),
            });
        }
        for (i, role) in self.preferred_roles.iter().enumerate() {
            if self.preferred_roles[..i].contains(role) {
                return Err(DraftError::InvalidPlayer {
                    name: self.name.clone(),
                    reason: format!("duplicate role {role} in preference list"),
                });
            }
        }
        Ok(())
    }
}
