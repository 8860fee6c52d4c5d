//! SQLite roster persistence.
//!
//! RULE: Only this module talks to the database. The draft pipeline never
//! sees the store — it consumes a plain Vec<Player> snapshot per run.

use crate::draft::Draft;
use crate::error::DraftResult;
use crate::player::Player;
use crate::types::{PlayerId, Role, Tier};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// A draft frozen as authoritative, with provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalizedDraft {
    pub draft: Draft,
    pub finalized_at: String,
    pub finalized_by: Option<String>,
}

pub struct RosterStore {
    conn: Connection,
}

impl RosterStore {
    /// Open (or create) the roster database at `path`.
    pub fn open(path: &str) -> DraftResult<Self> {
        let conn = Connection::open(path)?;
        // WAL mode only matters for real files; :memory: ignores it.
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> DraftResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> DraftResult<()> {
        self.conn
            .execute_batch(include_str!("../../migrations/001_roster.sql"))?;
        Ok(())
    }

    // ── Players ───────────────────────────────────────────────

    pub fn insert_player(&self, player: &Player) -> DraftResult<()> {
        self.conn.execute(
            "INSERT INTO player (player_id, name, tier, preferred_roles, role_tiers, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                player.id,
                player.name,
                player.tier.as_str(),
                serde_json::to_string(&player.preferred_roles)?,
                serde_json::to_string(&player.role_tiers)?,
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    pub fn update_player(&self, player: &Player) -> DraftResult<()> {
        self.conn.execute(
            "UPDATE player SET name = ?2, tier = ?3, preferred_roles = ?4, role_tiers = ?5
             WHERE player_id = ?1",
            params![
                player.id,
                player.name,
                player.tier.as_str(),
                serde_json::to_string(&player.preferred_roles)?,
                serde_json::to_string(&player.role_tiers)?,
            ],
        )?;
        Ok(())
    }

    /// Delete by id. Returns whether a row was removed.
    pub fn delete_player(&self, id: &str) -> DraftResult<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM player WHERE player_id = ?1", params![id])?;
        Ok(removed > 0)
    }

    pub fn clear_players(&self) -> DraftResult<()> {
        self.conn.execute("DELETE FROM player", [])?;
        Ok(())
    }

    pub fn get_player(&self, id: &str) -> DraftResult<Option<Player>> {
        let row = self
            .conn
            .query_row(
                "SELECT player_id, name, tier, preferred_roles, role_tiers
                 FROM player WHERE player_id = ?1",
                params![id],
                player_row,
            )
            .optional()?;
        row.map(build_player).transpose()
    }

    /// The whole roster, insertion order.
    pub fn list_players(&self) -> DraftResult<Vec<Player>> {
        let mut stmt = self.conn.prepare(
            "SELECT player_id, name, tier, preferred_roles, role_tiers
             FROM player ORDER BY created_at ASC, player_id ASC",
        )?;
        let rows = stmt.query_map([], player_row)?;
        let mut players = Vec::new();
        for row in rows {
            players.push(build_player(row?)?);
        }
        Ok(players)
    }

    pub fn player_count(&self) -> DraftResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM player", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    // ── Finalized draft ───────────────────────────────────────

    /// Freeze a draft as the authoritative one, replacing any previous.
    pub fn save_finalized(&self, draft: &Draft, finalized_by: Option<&str>) -> DraftResult<()> {
        self.conn.execute(
            "INSERT INTO finalized_draft (slot, payload, finalized_at, finalized_by)
             VALUES ('current', ?1, ?2, ?3)
             ON CONFLICT(slot) DO UPDATE SET
                 payload = excluded.payload,
                 finalized_at = excluded.finalized_at,
                 finalized_by = excluded.finalized_by",
            params![
                serde_json::to_string(draft)?,
                Utc::now().to_rfc3339(),
                finalized_by,
            ],
        )?;
        Ok(())
    }

    pub fn load_finalized(&self) -> DraftResult<Option<FinalizedDraft>> {
        let row: Option<(String, String, Option<String>)> = self
            .conn
            .query_row(
                "SELECT payload, finalized_at, finalized_by
                 FROM finalized_draft WHERE slot = 'current'",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()?;
        match row {
            Some((payload, finalized_at, finalized_by)) => Ok(Some(FinalizedDraft {
                draft: serde_json::from_str(&payload)?,
                finalized_at,
                finalized_by,
            })),
            None => Ok(None),
        }
    }

    pub fn reset_finalized(&self) -> DraftResult<()> {
        self.conn
            .execute("DELETE FROM finalized_draft WHERE slot = 'current'", [])?;
        Ok(())
    }
}

/// Raw player columns as stored.
type PlayerRow = (PlayerId, String, String, String, String);

fn player_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<PlayerRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
    ))
}

fn build_player((id, name, tier, preferred, overrides): PlayerRow) -> DraftResult<Player> {
    let tier = Tier::from_str(&tier)
        .map_err(|e| anyhow::anyhow!("corrupt tier column for player {id}: {e}"))?;
    let preferred_roles: Vec<Role> = serde_json::from_str(&preferred)?;
    let role_tiers: HashMap<Role, Tier> = serde_json::from_str(&overrides)?;
    Ok(Player {
        id,
        name,
        tier,
        role_tiers,
        preferred_roles,
    })
}
