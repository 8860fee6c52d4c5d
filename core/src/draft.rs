//! The draft pipeline — the heart of Rift Draft.
//!
//! PIPELINE ORDER (fixed, documented, never reordered):
//!   1. Pre-flight validation (pool size, team count, player shape)
//!   2. Randomized subset selection (shuffle a copy, keep teams × 5)
//!   3. Eligibility feasibility gate on the selected subset
//!   4. Greedy allocation
//!   5. Fairness refinement
//!   6. Per-team and cross-team statistics
//!
//! RULES:
//!   - The input pool is never mutated.
//!   - No stage does I/O; the whole pipeline is a pure function of
//!     (pool, teams_count, config, rng).
//!   - All randomness flows through the caller's DraftRng.

use crate::allocator::{allocate, TeamState};
use crate::config::DraftConfig;
use crate::eligibility::check_feasibility;
use crate::error::{DraftError, DraftResult};
use crate::player::Player;
use crate::refiner::refine;
use crate::rng::DraftRng;
use crate::types::{Role, MAX_POOL, TEAM_SIZE};
use serde::{Deserialize, Serialize};

/// A player tagged with the role they were drafted into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedPlayer {
    pub player: Player,
    pub role: Role,
}

/// One finished team: exactly five members, one per role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// 1-based display id.
    pub id: u32,
    pub members: Vec<PlacedPlayer>,
    /// Sum of effective skill over assigned roles.
    pub total_skill: u32,
    /// total_skill / 5.
    pub average_skill: f64,
}

impl Team {
    fn from_state(id: u32, state: TeamState) -> Self {
        let mut team = Self {
            id,
            members: state.members,
            total_skill: state.total_skill,
            average_skill: 0.0,
        };
        team.recompute_average();
        team
    }

    /// The member drafted into `role`, if any.
    pub fn member_for(&self, role: Role) -> Option<&PlacedPlayer> {
        self.members.iter().find(|m| m.role == role)
    }

    pub fn recompute_average(&mut self) {
        self.average_skill = self.total_skill as f64 / self.members.len().max(1) as f64;
    }
}

/// Cross-team balance statistics, computed after refinement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftSummary {
    /// Mean of team average skills.
    pub average_skill: f64,
    /// Population variance of team average skills.
    pub skill_variance: f64,
    pub min_average: f64,
    pub max_average: f64,
}

impl DraftSummary {
    fn compute(teams: &[Team]) -> Self {
        let n = teams.len().max(1) as f64;
        let mean = teams.iter().map(|t| t.average_skill).sum::<f64>() / n;
        let variance = teams
            .iter()
            .map(|t| (t.average_skill - mean).powi(2))
            .sum::<f64>()
            / n;
        let min = teams
            .iter()
            .map(|t| t.average_skill)
            .fold(f64::INFINITY, f64::min);
        let max = teams
            .iter()
            .map(|t| t.average_skill)
            .fold(f64::NEG_INFINITY, f64::max);
        Self {
            average_skill: mean,
            skill_variance: variance,
            min_average: min,
            max_average: max,
        }
    }
}

/// The final output of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub teams: Vec<Team>,
    pub summary: DraftSummary,
}

/// Pre-flight check, before any analysis: team count sane, pool size in
/// [teams × 5, MAX_POOL], every player well-formed.
pub fn validate_pool(pool: &[Player], teams_count: usize) -> DraftResult<()> {
    if teams_count < 2 {
        return Err(DraftError::TooFewTeams(teams_count));
    }
    let required = teams_count * TEAM_SIZE;
    if pool.len() < required {
        return Err(DraftError::PoolTooSmall {
            teams: teams_count,
            required,
            actual: pool.len(),
        });
    }
    if pool.len() > MAX_POOL {
        return Err(DraftError::PoolTooLarge {
            max: MAX_POOL,
            actual: pool.len(),
        });
    }
    for player in pool {
        player.validate()?;
    }
    Ok(())
}

/// Run the whole pipeline. The pool may be larger than teams × 5; a
/// shuffled subset of exactly that size is drafted. Same pool, same
/// config, same seed — same Draft.
pub fn run_draft(
    pool: &[Player],
    teams_count: usize,
    config: &DraftConfig,
    rng: &mut DraftRng,
) -> DraftResult<Draft> {
    validate_pool(pool, teams_count)?;

    let mut selected: Vec<Player> = pool.to_vec();
    rng.shuffle(&mut selected);
    selected.truncate(teams_count * TEAM_SIZE);

    check_feasibility(&selected, teams_count)?;

    let states = allocate(&selected, teams_count, config, rng)?;
    let mut teams: Vec<Team> = states
        .into_iter()
        .enumerate()
        .map(|(i, state)| Team::from_state(i as u32 + 1, state))
        .collect();

    let swaps = refine(&mut teams, config.max_refine_passes);

    let summary = DraftSummary::compute(&teams);
    log::info!(
        "draft complete: {} teams from {} players, {swaps} balance swaps, avg spread {:.1}-{:.1}",
        teams.len(),
        pool.len(),
        summary.min_average,
        summary.max_average
    );

    Ok(Draft { teams, summary })
}
