//! draft-runner: headless roster and draft tool for Rift Draft.
//!
//! Usage:
//!   draft-runner [--db roster.db] seed-demo [--count 16] [--seed 42]
//!   draft-runner [--db roster.db] list
//!   draft-runner [--db roster.db] add --name SilentFang --tier gold --roles top,mid [--override jungle=diamond]
//!   draft-runner [--db roster.db] remove --id <player-id>
//!   draft-runner [--db roster.db] import --file roster.json
//!   draft-runner [--db roster.db] draft --teams 2 [--seed 42] [--retries 5] [--config draft.json] [--finalize] [--by me@example.com]
//!   draft-runner [--db roster.db] show-final | reset-final | clear

use anyhow::{bail, Context, Result};
use riftdraft_core::{
    config::DraftConfig,
    demo::demo_pool,
    draft::{run_draft, Draft},
    error::DraftError,
    player::Player,
    rng::DraftRng,
    roster::RosterStore,
    types::{Role, Tier},
};
use std::env;
use std::str::FromStr;

fn main() -> Result<()> {
    env_logger::init();

    const COMMANDS: &[&str] = &[
        "seed-demo", "list", "add", "remove", "clear", "import",
        "draft", "show-final", "reset-final",
    ];

    let args: Vec<String> = env::args().collect();
    let db = find_flag(&args, "--db").unwrap_or_else(|| "roster.db".to_string());
    let command = args
        .iter()
        .skip(1)
        .find(|a| COMMANDS.contains(&a.as_str()))
        .cloned();

    let store = RosterStore::open(&db)?;
    store.migrate()?;

    match command.as_deref() {
        Some("seed-demo") => cmd_seed_demo(&store, &args),
        Some("list") => cmd_list(&store),
        Some("add") => cmd_add(&store, &args),
        Some("remove") => cmd_remove(&store, &args),
        Some("clear") => cmd_clear(&store),
        Some("import") => cmd_import(&store, &args),
        Some("draft") => cmd_draft(&store, &args),
        Some("show-final") => cmd_show_final(&store),
        Some("reset-final") => cmd_reset_final(&store),
        Some(other) => bail!("unknown command: {other}"),
        None => bail!("no command given — see the usage header in this file"),
    }
}

// ── Roster commands ──────────────────────────────────────────────────────────

fn cmd_seed_demo(store: &RosterStore, args: &[String]) -> Result<()> {
    let count: usize = parse_arg(args, "--count", 16);
    let seed: u64 = parse_arg(args, "--seed", epoch_seed());

    store.clear_players()?;
    let mut rng = DraftRng::seeded(seed);
    let pool = demo_pool(count, &mut rng);
    for player in &pool {
        store.insert_player(player)?;
    }

    println!("Seeded {count} demo players (seed {seed}) into {}", db_label(args));
    cmd_list(store)
}

fn cmd_list(store: &RosterStore) -> Result<()> {
    let players = store.list_players()?;
    if players.is_empty() {
        println!("(roster is empty)");
        return Ok(());
    }

    println!("{:<38} {:<16} {:<9} roles", "id", "name", "tier");
    for p in &players {
        let roles: Vec<String> = p
            .preferred_roles
            .iter()
            .map(|r| match p.role_tiers.get(r) {
                Some(tier) => format!("{r}({tier})"),
                None => r.to_string(),
            })
            .collect();
        println!("{:<38} {:<16} {:<9} {}", p.id, p.name, p.tier.to_string(), roles.join(", "));
    }
    println!("{} players total", players.len());
    Ok(())
}

fn cmd_add(store: &RosterStore, args: &[String]) -> Result<()> {
    let name = find_flag(args, "--name").context("--name is required")?;
    let tier = Tier::from_str(&find_flag(args, "--tier").unwrap_or_else(|| "gold".into()))
        .map_err(|e| anyhow::anyhow!(e))?;
    let roles_raw = find_flag(args, "--roles").context("--roles is required (e.g. top,mid)")?;
    let roles = parse_roles(&roles_raw)?;

    let mut player = Player::new(name, tier, roles);
    for (role, tier) in parse_overrides(args)? {
        player = player.with_role_tier(role, tier);
    }
    player.validate()?;

    store.insert_player(&player)?;
    println!("Added {} as {}", player.name, player.id);
    Ok(())
}

fn cmd_remove(store: &RosterStore, args: &[String]) -> Result<()> {
    let id = find_flag(args, "--id").context("--id is required")?;
    if store.delete_player(&id)? {
        println!("Removed {id}");
    } else {
        println!("No player with id {id}");
    }
    Ok(())
}

fn cmd_clear(store: &RosterStore) -> Result<()> {
    store.clear_players()?;
    println!("Roster cleared");
    Ok(())
}

fn cmd_import(store: &RosterStore, args: &[String]) -> Result<()> {
    let path = find_flag(args, "--file").context("--file is required")?;
    let content = std::fs::read_to_string(&path).with_context(|| format!("cannot read {path}"))?;
    let players: Vec<Player> = serde_json::from_str(&content)?;

    for player in &players {
        player.validate()?;
        store.insert_player(player)?;
    }
    println!("Imported {} players from {path}", players.len());
    Ok(())
}

// ── Draft commands ───────────────────────────────────────────────────────────

fn cmd_draft(store: &RosterStore, args: &[String]) -> Result<()> {
    let teams_count: usize = parse_arg(args, "--teams", 2);
    let seed: u64 = parse_arg(args, "--seed", epoch_seed());
    let retries: u64 = parse_arg(args, "--retries", 5);
    let config = match find_flag(args, "--config") {
        Some(path) => DraftConfig::load(&path)?,
        None => DraftConfig::default(),
    };

    let pool = store.list_players()?;
    log::info!("drafting {} teams from {} players (seed {seed})", teams_count, pool.len());

    // An unplaceable player is a "try again" failure: the greedy pass
    // cornered itself, and fresh randomness usually escapes.
    let mut attempt: u64 = 0;
    let draft = loop {
        let mut rng = DraftRng::seeded(seed.wrapping_add(attempt));
        match run_draft(&pool, teams_count, &config, &mut rng) {
            Ok(draft) => break draft,
            Err(e @ DraftError::Unplaceable { .. }) if attempt + 1 < retries => {
                log::warn!("attempt {} failed: {e}", attempt + 1);
                attempt += 1;
            }
            Err(e) => return Err(e.into()),
        }
    };

    print_draft(&draft);

    if has_flag(args, "--finalize") {
        let by = find_flag(args, "--by");
        store.save_finalized(&draft, by.as_deref())?;
        println!();
        println!("Draft finalized{}", by.map(|b| format!(" by {b}")).unwrap_or_default());
    }
    Ok(())
}

fn cmd_show_final(store: &RosterStore) -> Result<()> {
    match store.load_finalized()? {
        Some(finalized) => {
            println!(
                "Finalized at {}{}",
                finalized.finalized_at,
                finalized
                    .finalized_by
                    .map(|b| format!(" by {b}"))
                    .unwrap_or_default()
            );
            println!();
            print_draft(&finalized.draft);
        }
        None => println!("No finalized draft"),
    }
    Ok(())
}

fn cmd_reset_final(store: &RosterStore) -> Result<()> {
    store.reset_finalized()?;
    println!("Finalized draft reset");
    Ok(())
}

fn print_draft(draft: &Draft) {
    for team in &draft.teams {
        println!("=== TEAM {} ===", team.id);
        for role in Role::ALL {
            if let Some(member) = team.member_for(role) {
                println!(
                    "  {:<8} {:<16} {}",
                    role.to_string(),
                    member.player.name,
                    member.player.effective_tier(role)
                );
            }
        }
        println!("  total:   {:<5} average: {:.1}", team.total_skill, team.average_skill);
        println!();
    }
    println!("=== BALANCE ===");
    println!("  avg skill:    {:.2}", draft.summary.average_skill);
    println!("  variance:     {:.3}", draft.summary.skill_variance);
    println!(
        "  avg spread:   {:.1} - {:.1}",
        draft.summary.min_average, draft.summary.max_average
    );
}

// ── Flag helpers ─────────────────────────────────────────────────────────────

fn parse_roles(raw: &str) -> Result<Vec<Role>> {
    raw.split(',')
        .map(|s| Role::from_str(s).map_err(|e| anyhow::anyhow!(e)))
        .collect()
}

fn parse_overrides(args: &[String]) -> Result<Vec<(Role, Tier)>> {
    args.windows(2)
        .filter(|w| w[0] == "--override")
        .map(|w| {
            let (role, tier) = w[1]
                .split_once('=')
                .context("--override takes role=tier, e.g. jungle=diamond")?;
            Ok((
                Role::from_str(role).map_err(|e| anyhow::anyhow!(e))?,
                Tier::from_str(tier).map_err(|e| anyhow::anyhow!(e))?,
            ))
        })
        .collect()
}

fn parse_arg<T: FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn find_flag(args: &[String], flag: &str) -> Option<String> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].clone())
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

fn db_label(args: &[String]) -> String {
    find_flag(args, "--db").unwrap_or_else(|| "roster.db".to_string())
}

/// Default seed when none is given: wall-clock seconds. Explicit --seed
/// makes a run reproducible.
fn epoch_seed() -> u64 {
    chrono::Utc::now().timestamp().max(0) as u64
}
