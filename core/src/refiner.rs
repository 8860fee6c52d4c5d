//! Fairness refinement — bounded local search over a finished draft.
//!
//! Repeatedly swaps same-role incumbents between two teams when doing so
//! strictly narrows the skill-total gap between those teams. Only
//! pairwise, same-role, strictly-improving swaps are considered, so the
//! result can be a local optimum a wider search would beat. Never fails;
//! worst case it returns its input untouched.

use crate::draft::Team;
use crate::types::Role;

/// Run improvement passes until a pass applies no swap or the budget is
/// exhausted. Returns the number of swaps applied.
pub fn refine(teams: &mut [Team], max_passes: usize) -> usize {
    let mut swaps_applied = 0;

    for pass in 0..max_passes {
        let mut improved = false;

        for a in 0..teams.len() {
            for b in (a + 1)..teams.len() {
                for role in Role::ALL {
                    if try_swap(teams, a, b, role) {
                        swaps_applied += 1;
                        improved = true;
                    }
                }
            }
        }

        if !improved {
            log::debug!("refinement converged after {} passes, {swaps_applied} swaps", pass + 1);
            return swaps_applied;
        }
    }

    log::debug!("refinement stopped at pass budget ({max_passes}), {swaps_applied} swaps");
    swaps_applied
}

/// Swap the `role` incumbents of teams `a` and `b` if both are eligible
/// for the role and the exchange strictly narrows the skill gap.
fn try_swap(teams: &mut [Team], a: usize, b: usize, role: Role) -> bool {
    let ia = match member_index(&teams[a], role) {
        Some(i) => i,
        None => return false,
    };
    let ib = match member_index(&teams[b], role) {
        Some(i) => i,
        None => return false,
    };

    // Same role on both sides, but override tiers make the skill transfer
    // asymmetric, and eligibility is still checked explicitly.
    if !teams[a].members[ia].player.is_eligible(role)
        || !teams[b].members[ib].player.is_eligible(role)
    {
        return false;
    }

    let skill_a = teams[a].members[ia].player.skill(role) as i64;
    let skill_b = teams[b].members[ib].player.skill(role) as i64;

    let total_a = teams[a].total_skill as i64;
    let total_b = teams[b].total_skill as i64;
    let gap_before = (total_a - total_b).abs();
    let gap_after = ((total_a - skill_a + skill_b) - (total_b - skill_b + skill_a)).abs();
    if gap_after >= gap_before {
        return false;
    }

    log::debug!(
        "swap {} <-> {} on {} (teams {} and {}, gap {gap_before} -> {gap_after})",
        teams[a].members[ia].player.name,
        teams[b].members[ib].player.name,
        role,
        teams[a].id,
        teams[b].id,
    );

    let player_a = teams[a].members[ia].player.clone();
    let player_b = std::mem::replace(&mut teams[b].members[ib].player, player_a);
    teams[a].members[ia].player = player_b;

    teams[a].total_skill = (total_a - skill_a + skill_b) as u32;
    teams[b].total_skill = (total_b - skill_b + skill_a) as u32;
    teams[a].recompute_average();
    teams[b].recompute_average();
    true
}

fn member_index(team: &Team, role: Role) -> Option<usize> {
    team.members.iter().position(|m| m.role == role)
}
