//! Deterministic demo roster generation.
//!
//! Gives a fresh install something to draft: a seeded pool of players
//! with plausible summoner names, mixed tiers, varied preference lists,
//! and the occasional per-role override. Same seed = same roster.

use crate::player::Player;
use crate::rng::DraftRng;
use crate::types::{Role, Tier, TEAM_SIZE};

/// Generate `count` well-formed demo players.
///
/// Preference lists skew long (three roles or more is common) so a demo
/// pool of two-teams size nearly always passes the feasibility gate.
pub fn demo_pool(count: usize, rng: &mut DraftRng) -> Vec<Player> {
    (0..count).map(|i| demo_player(i, rng)).collect()
}

fn demo_player(index: usize, rng: &mut DraftRng) -> Player {
    let name = generate_name(rng);
    let tier = Tier::ALL[rng.pick_index(Tier::ALL.len())];

    // 1..=5 acceptable roles, weighted toward flexibility: reroll a
    // 1-length list once before accepting it.
    let mut list_len = 1 + rng.pick_index(TEAM_SIZE);
    if list_len == 1 {
        list_len = 1 + rng.pick_index(TEAM_SIZE);
    }
    let mut roles = Role::ALL.to_vec();
    rng.shuffle(&mut roles);
    roles.truncate(list_len);

    // Index-derived ids keep the whole roster reproducible; uuid ids are
    // for players created interactively.
    let mut player = Player::with_id(format!("demo-{index:04}"), name, tier, roles);

    // Sparse overrides: some players are one tier better on their main.
    if rng.chance(0.2) {
        let main = player.preferred_roles[0];
        let bumped = Tier::ALL
            .get(tier.value() as usize) // value() is 1-based, so this is +1
            .copied()
            .unwrap_or(Tier::MasterPlus);
        player = player.with_role_tier(main, bumped);
    }

    player
}

fn generate_name(rng: &mut DraftRng) -> String {
    let adjective = ADJECTIVES[rng.pick_index(ADJECTIVES.len())];
    let noun = NOUNS[rng.pick_index(NOUNS.len())];
    if rng.chance(0.3) {
        let digits = rng.next_u64_below(90) + 10;
        format!("{adjective}{noun}{digits}")
    } else {
        format!("{adjective}{noun}")
    }
}

const ADJECTIVES: &[&str] = &[
    "Silent", "Crimson", "Feral", "Arcane", "Shadow", "Iron", "Lunar", "Swift",
    "Grim", "Azure", "Rogue", "Stone", "Wild", "Frost", "Ember", "Night",
    "Vivid", "Gilded", "Static", "Hollow", "Primal", "Vexed", "Solar", "Ashen",
];

const NOUNS: &[&str] = &[
    "Fang", "Blade", "Raven", "Wolf", "Viper", "Spark", "Drake", "Lotus",
    "Titan", "Wisp", "Falcon", "Reaper", "Golem", "Lynx", "Warden", "Specter",
    "Mantis", "Herald", "Jackal", "Oracle", "Badger", "Comet", "Gale", "Serpent",
];
