//! Eligibility census, rarity ordering, and the feasibility gate.

use riftdraft_core::config::DraftConfig;
use riftdraft_core::draft::run_draft;
use riftdraft_core::eligibility::{check_feasibility, eligible_counts, rarity_order};
use riftdraft_core::error::DraftError;
use riftdraft_core::player::Player;
use riftdraft_core::rng::DraftRng;
use riftdraft_core::types::{Role, Tier};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn player(id: &str, roles: &[Role]) -> Player {
    Player::with_id(id, format!("Player-{id}"), Tier::Gold, roles.to_vec())
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[test]
fn census_counts_every_listed_role() {
    let pool = vec![
        player("a", &[Role::Top, Role::Mid]),
        player("b", &[Role::Top]),
        player("c", &[Role::Jungle, Role::Top, Role::Support]),
    ];

    let counts = eligible_counts(&pool);
    assert_eq!(counts[&Role::Top], 3);
    assert_eq!(counts[&Role::Jungle], 1);
    assert_eq!(counts[&Role::Mid], 1);
    assert_eq!(counts[&Role::Adc], 0, "unlisted roles must still appear with 0");
    assert_eq!(counts[&Role::Support], 1);
}

#[test]
fn rarity_order_is_ascending_with_canonical_tie_break() {
    let pool = vec![
        player("a", &[Role::Top, Role::Mid, Role::Support]),
        player("b", &[Role::Top, Role::Support]),
        player("c", &[Role::Adc]),
    ];
    // counts: top 2, jungle 0, mid 1, adc 1, support 2
    let order = rarity_order(&eligible_counts(&pool));

    // mid and adc tie at 1 — canonical order puts mid first; same for
    // the top/support tie at 2.
    assert_eq!(
        order,
        vec![Role::Jungle, Role::Mid, Role::Adc, Role::Top, Role::Support]
    );
}

/// Scenario: a role with fewer eligible players than teams fails the
/// gate, naming that role and the shortfall.
#[test]
fn shortfall_names_the_role() {
    // Nobody lists support; one player lists jungle.
    let mut pool: Vec<Player> = (0..8)
        .map(|i| player(&format!("p{i}"), &[Role::Top, Role::Mid, Role::Adc]))
        .collect();
    pool.push(player("p8", &[Role::Jungle, Role::Top]));
    pool.push(player("p9", &[Role::Jungle, Role::Mid]));

    let err = check_feasibility(&pool, 2).expect_err("support has no eligible players");
    match err {
        DraftError::RoleShortfall { role, eligible, required } => {
            assert_eq!(role, Role::Support);
            assert_eq!(eligible, 0);
            assert_eq!(required, 2);
        }
        other => panic!("Expected RoleShortfall, got: {other}"),
    }
}

/// With several roles short, the gate reports the scarcest one.
#[test]
fn scarcest_shortfall_wins() {
    let pool = vec![
        player("a", &[Role::Top]),
        player("b", &[Role::Top]),
        player("c", &[Role::Top]),
        player("d", &[Role::Top, Role::Jungle]),
        player("e", &[Role::Top, Role::Mid]),
        player("f", &[Role::Top, Role::Mid]),
    ];
    // For 3 teams: jungle 1, adc 0, support 0, mid 2 — adc ties support
    // at zero, census order resolves by canonical role order.
    let err = check_feasibility(&pool, 3).expect_err("several roles are short");
    match err {
        DraftError::RoleShortfall { role, eligible, .. } => {
            assert_eq!(role, Role::Adc);
            assert_eq!(eligible, 0);
        }
        other => panic!("Expected RoleShortfall, got: {other}"),
    }
}

#[test]
fn exact_minimum_counts_pass() {
    // Every role listed by exactly two players, two teams.
    let pool: Vec<Player> = Role::ALL
        .iter()
        .flat_map(|role| {
            [
                player(&format!("{role}-1"), &[*role]),
                player(&format!("{role}-2"), &[*role]),
            ]
        })
        .collect();

    check_feasibility(&pool, 2).expect("counts exactly equal to teams must pass");
}

/// The gate fires inside the pipeline, before allocation, on every seed.
#[test]
fn pipeline_fails_with_shortfall_before_allocating() {
    let pool: Vec<Player> = (0..10)
        .map(|i| player(&format!("p{i}"), &[Role::Top, Role::Jungle, Role::Mid, Role::Adc]))
        .collect();

    for seed in 0..3 {
        let mut rng = DraftRng::seeded(seed);
        let err = run_draft(&pool, 2, &DraftConfig::default(), &mut rng)
            .expect_err("no support players");
        assert!(
            matches!(err, DraftError::RoleShortfall { role: Role::Support, .. }),
            "got: {err}"
        );
    }
}
