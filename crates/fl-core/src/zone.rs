//! Hub zone classification and role tags.

use std::fmt;
use std::str::FromStr;

use crate::ConfigError;

// ── ZoneKind ──────────────────────────────────────────────────────────────────

/// Traversal category of a hub.
///
/// | Zone         | Entry cost | Weight  |
/// |--------------|------------|---------|
/// | `Priority`   | 1 tick     | 1000    |
/// | `Normal`     | 1 tick     | 1001    |
/// | `Restricted` | 2 ticks    | 2000    |
/// | `Blocked`    | never      | 999999  |
///
/// The weight only breaks ties between frontier entries with the same
/// arrival tick; it is never added to a path cost.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ZoneKind {
    Priority,
    #[default]
    Normal,
    Restricted,
    Blocked,
}

impl ZoneKind {
    /// Frontier tie-break weight.  Lower is preferred.
    #[inline]
    pub fn weight(self) -> u32 {
        match self {
            ZoneKind::Priority   => 1_000,
            ZoneKind::Normal     => 1_001,
            ZoneKind::Restricted => 2_000,
            ZoneKind::Blocked    => 999_999,
        }
    }

    /// Ticks needed to enter a hub of this zone from an adjacent hub.
    ///
    /// Entering a restricted hub occupies the connecting link for two ticks.
    /// `Blocked` hubs are never entered; the value is only meaningful for
    /// live zones.
    #[inline]
    pub fn transit_ticks(self) -> u64 {
        match self {
            ZoneKind::Restricted => 2,
            _ => 1,
        }
    }

    #[inline]
    pub fn is_blocked(self) -> bool {
        self == ZoneKind::Blocked
    }

    #[inline]
    pub fn is_restricted(self) -> bool {
        self == ZoneKind::Restricted
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ZoneKind::Priority   => "priority",
            ZoneKind::Normal     => "normal",
            ZoneKind::Restricted => "restricted",
            ZoneKind::Blocked    => "blocked",
        }
    }
}

impl FromStr for ZoneKind {
    type Err = ConfigError;

    /// Case-insensitive: `"Restricted"`, `"RESTRICTED"` and `"restricted"`
    /// all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "priority"   => Ok(ZoneKind::Priority),
            "normal"     => Ok(ZoneKind::Normal),
            "restricted" => Ok(ZoneKind::Restricted),
            "blocked"    => Ok(ZoneKind::Blocked),
            _ => Err(ConfigError::UnknownZone(s.to_owned())),
        }
    }
}

impl fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── HubRole ───────────────────────────────────────────────────────────────────

/// Whether a hub is the fleet's departure point, its destination, or neither.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HubRole {
    #[default]
    Normal,
    Start,
    End,
}

impl HubRole {
    /// Map-file keyword that introduces a hub with this role.
    pub fn keyword(self) -> &'static str {
        match self {
            HubRole::Normal => "hub",
            HubRole::Start  => "start_hub",
            HubRole::End    => "end_hub",
        }
    }
}

impl FromStr for HubRole {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hub"       => Ok(HubRole::Normal),
            "start_hub" => Ok(HubRole::Start),
            "end_hub"   => Ok(HubRole::End),
            _ => Err(ConfigError::UnknownRole(s.to_owned())),
        }
    }
}
