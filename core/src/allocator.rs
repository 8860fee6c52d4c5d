//! Greedy allocation — one pass assigns every player a (team, role) slot.
//!
//! ORDERING (fixed, load-bearing):
//!   - Roles fill scarcest-first: every team's open-role queue is seeded
//!     with the pool's rarity order.
//!   - Players place least-flexible-first, then strongest-first, with
//!     remaining ties randomized through the injected rng.
//!
//! Both orderings exist to keep hard-to-place players from arriving after
//! their only legal slots are gone. The pass does not backtrack: a player
//! with no open eligible slot fails the whole run, and the caller may
//! re-invoke with fresh randomness.

use crate::config::DraftConfig;
use crate::draft::PlacedPlayer;
use crate::eligibility::{eligible_counts, rarity_order};
use crate::error::{DraftError, DraftResult};
use crate::player::Player;
use crate::rng::DraftRng;
use crate::types::{Role, TEAM_SIZE};

/// Running state for one team during the greedy pass. Explicit so the
/// pass's transitions stay auditable: every commit is a member push, an
/// open-role removal, and a total bump.
#[derive(Debug, Clone)]
pub struct TeamState {
    /// Still-unfilled roles, scarcest first.
    pub open_roles: Vec<Role>,
    pub members: Vec<PlacedPlayer>,
    pub total_skill: u32,
}

impl TeamState {
    fn new(fill_order: &[Role]) -> Self {
        Self {
            open_roles: fill_order.to_vec(),
            members: Vec::with_capacity(TEAM_SIZE),
            total_skill: 0,
        }
    }

    fn is_full(&self) -> bool {
        self.members.len() >= TEAM_SIZE
    }

    fn commit(&mut self, player: &Player, role: Role) {
        self.open_roles.retain(|r| *r != role);
        self.total_skill += player.skill(role);
        self.members.push(PlacedPlayer {
            player: player.clone(),
            role,
        });
    }
}

/// A scored candidate slot for the player currently being placed.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    team_index: usize,
    role: Role,
    score: f64,
}

/// Assign exactly `teams_count * TEAM_SIZE` players, one (team, role)
/// each. The input order carries no meaning; the pass builds its own.
pub fn allocate(
    pool: &[Player],
    teams_count: usize,
    config: &DraftConfig,
    rng: &mut DraftRng,
) -> DraftResult<Vec<TeamState>> {
    debug_assert_eq!(pool.len(), teams_count * TEAM_SIZE);

    let counts = eligible_counts(pool);
    let fill_order = rarity_order(&counts);
    log::debug!(
        "fill order: {:?}",
        fill_order.iter().map(Role::as_str).collect::<Vec<_>>()
    );

    let mut teams: Vec<TeamState> = (0..teams_count)
        .map(|_| TeamState::new(&fill_order))
        .collect();

    // Shuffle first, then stable-sort: equal (flexibility, tier) keys keep
    // their shuffled order, which is exactly the randomized tie-break.
    let mut order: Vec<usize> = (0..pool.len()).collect();
    rng.shuffle(&mut order);
    order.sort_by_key(|&i| (pool[i].flexibility(), std::cmp::Reverse(pool[i].tier)));

    for index in order {
        let player = &pool[index];
        let candidates = collect_candidates(player, &teams, config);

        let chosen = match pick_candidate(&candidates, config, rng) {
            Some(c) => c,
            None => {
                return Err(DraftError::Unplaceable {
                    name: player.name.clone(),
                })
            }
        };

        log::debug!(
            "placed {} as {} on team {} (score {:.2}, {} near-ties)",
            player.name,
            chosen.role,
            chosen.team_index + 1,
            chosen.score,
            candidates.len()
        );
        teams[chosen.team_index].commit(player, chosen.role);
    }

    Ok(teams)
}

/// Every legal (team, role) slot for this player, scored.
fn collect_candidates(
    player: &Player,
    teams: &[TeamState],
    config: &DraftConfig,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    for (team_index, team) in teams.iter().enumerate() {
        if team.is_full() {
            continue;
        }
        for role in &team.open_roles {
            if let Some(rank) = player.preference_rank(*role) {
                candidates.push(Candidate {
                    team_index,
                    role: *role,
                    score: slot_score(rank, team.total_skill, config),
                });
            }
        }
    }
    candidates
}

/// Preference dominates; the balance term nudges ties toward the team
/// with the lowest running total. First choice scores 10, fifth 6; the
/// balance term is at most 10 at weight 0.1.
fn slot_score(preference_rank: usize, team_total: u32, config: &DraftConfig) -> f64 {
    let preference = 10.0 - preference_rank as f64;
    let balance = 100.0 - team_total as f64;
    preference + config.balance_weight * balance
}

/// Take the best slot, or a uniform pick among slots scoring within
/// `tie_margin` of it. The multiplicative window is safe because slot
/// scores are strictly positive.
fn pick_candidate(
    candidates: &[Candidate],
    config: &DraftConfig,
    rng: &mut DraftRng,
) -> Option<Candidate> {
    let best = candidates
        .iter()
        .map(|c| c.score)
        .fold(f64::NEG_INFINITY, f64::max);
    if best == f64::NEG_INFINITY {
        return None;
    }

    let cutoff = best * (1.0 - config.tie_margin);
    let near: Vec<&Candidate> = candidates.iter().filter(|c| c.score >= cutoff).collect();
    match near.len() {
        0 => None,
        1 => Some(*near[0]),
        n => Some(*near[rng.pick_index(n)]),
    }
}
