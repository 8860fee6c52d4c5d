//! Shared primitive types used across the entire drafter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A stable, unique identifier for a player (UUID v4 when generated by us).
pub type PlayerId = String;

/// Players per team. The drafter only builds full five-role teams.
pub const TEAM_SIZE: usize = 5;

/// Hard cap on the pool a single draft run will accept.
pub const MAX_POOL: usize = 30;

/// The five positions a team requires exactly one filler for.
/// Declaration order is the canonical order — it breaks ties and orders
/// display, never correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Top,
    Jungle,
    Mid,
    Adc,
    Support,
}

impl Role {
    /// All roles in canonical order.
    pub const ALL: [Role; TEAM_SIZE] = [
        Role::Top,
        Role::Jungle,
        Role::Mid,
        Role::Adc,
        Role::Support,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Top => "top",
            Role::Jungle => "jungle",
            Role::Mid => "mid",
            Role::Adc => "adc",
            Role::Support => "support",
        }
    }

    /// Position in the canonical order.
    pub fn index(&self) -> usize {
        Role::ALL.iter().position(|r| r == self).unwrap_or(0)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Role::Top),
            "jungle" | "jg" => Ok(Role::Jungle),
            "mid" => Ok(Role::Mid),
            "adc" | "bot" => Ok(Role::Adc),
            "support" | "sup" => Ok(Role::Support),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Ordinal skill rank, lowest to highest. Only the ordinal value is ever
/// used in arithmetic — iron counts 1, master+ counts 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Tier {
    Iron = 1,
    Bronze = 2,
    Silver = 3,
    Gold = 4,
    Platinum = 5,
    Emerald = 6,
    Diamond = 7,
    #[serde(rename = "master+")]
    MasterPlus = 8,
}

impl Tier {
    /// All tiers, lowest first.
    pub const ALL: [Tier; 8] = [
        Tier::Iron,
        Tier::Bronze,
        Tier::Silver,
        Tier::Gold,
        Tier::Platinum,
        Tier::Emerald,
        Tier::Diamond,
        Tier::MasterPlus,
    ];

    /// Ordinal value used in skill sums.
    pub fn value(self) -> u32 {
        self as u32
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Iron => "iron",
            Tier::Bronze => "bronze",
            Tier::Silver => "silver",
            Tier::Gold => "gold",
            Tier::Platinum => "platinum",
            Tier::Emerald => "emerald",
            Tier::Diamond => "diamond",
            Tier::MasterPlus => "master+",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "iron" => Ok(Tier::Iron),
            "bronze" => Ok(Tier::Bronze),
            "silver" => Ok(Tier::Silver),
            "gold" => Ok(Tier::Gold),
            "platinum" | "plat" => Ok(Tier::Platinum),
            "emerald" => Ok(Tier::Emerald),
            "diamond" => Ok(Tier::Diamond),
            "master+" | "master" => Ok(Tier::MasterPlus),
            other => Err(format!("unknown tier: {other}")),
        }
    }
}
