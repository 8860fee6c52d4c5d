//! Eligibility analysis — who can fill what, and is a full draft possible.
//!
//! Pure functions over a pool snapshot. The feasibility gate is a
//! necessary condition only: each team needs exactly one filler per role,
//! so a role with fewer eligible players than teams can never be covered.
//! Passing the gate does not guarantee the greedy pass succeeds.

use crate::error::{DraftError, DraftResult};
use crate::player::Player;
use crate::types::Role;
use std::collections::HashMap;

/// Count, per role, the players whose preference list includes it.
pub fn eligible_counts(pool: &[Player]) -> HashMap<Role, usize> {
    let mut counts: HashMap<Role, usize> = HashMap::new();
    for role in Role::ALL {
        counts.insert(role, 0);
    }
    for player in pool {
        for role in &player.preferred_roles {
            *counts.entry(*role).or_insert(0) += 1;
        }
    }
    counts
}

/// Roles sorted ascending by eligible count — scarcest first.
/// Ties fall back to canonical role order.
pub fn rarity_order(counts: &HashMap<Role, usize>) -> Vec<Role> {
    let mut order = Role::ALL.to_vec();
    order.sort_by_key(|role| (counts.get(role).copied().unwrap_or(0), role.index()));
    order
}

/// Fail if any role has fewer eligible players than teams to fill.
/// Reports the scarcest offending role.
pub fn check_feasibility(pool: &[Player], teams_count: usize) -> DraftResult<()> {
    let counts = eligible_counts(pool);
    log::debug!("eligibility census: {:?}", {
        let mut pairs: Vec<_> = counts.iter().map(|(r, c)| (r.as_str(), *c)).collect();
        pairs.sort();
        pairs
    });

    let mut worst: Option<(Role, usize)> = None;
    for role in Role::ALL {
        let eligible = counts.get(&role).copied().unwrap_or(0);
        if eligible < teams_count {
            let replace = match worst {
                Some((_, count)) => eligible < count,
                None => true,
            };
            if replace {
                worst = Some((role, eligible));
            }
        }
    }

    match worst {
        Some((role, eligible)) => Err(DraftError::RoleShortfall {
            role,
            eligible,
            required: teams_count,
        }),
        None => Ok(()),
    }
}
