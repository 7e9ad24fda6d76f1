//! Configuration keys
//!
//! Every key in the defaults file is a predicate over players, selected by a
//! fixed prefix grammar:
//!
//! | raw key      | matcher           |
//! |--------------|-------------------|
//! | `*`          | everyone          |
//! | `@css/vip`   | permission flag   |
//! | `#vip`       | permission group  |
//! | anything else| SteamID64         |

use crate::rules::actor::Actor;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Raw key that matches every player
pub const WILDCARD_KEY: &str = "*";
/// Prefix of permission flag keys
pub const FLAG_PREFIX: char = '@';
/// Prefix of permission group keys
pub const GROUP_PREFIX: char = '#';

/// Parsed configuration key
///
/// Equality is by variant and raw string, and all wildcards are equal. It is
/// only used to de-duplicate entries while merging sections.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyMatcher {
    /// Matches the player whose stable identity equals the string
    Identity(String),
    /// Matches players holding the flag (prefix kept)
    PermissionFlag(String),
    /// Matches members of the group (prefix kept)
    PermissionGroup(String),
    /// Matches every player
    Wildcard,
}

impl KeyMatcher {
    /// Parse a raw key. Never fails; malformed keys simply never match.
    pub fn parse(raw: &str) -> Self {
        if raw == WILDCARD_KEY {
            KeyMatcher::Wildcard
        } else if raw.starts_with(FLAG_PREFIX) {
            KeyMatcher::PermissionFlag(raw.to_string())
        } else if raw.starts_with(GROUP_PREFIX) {
            KeyMatcher::PermissionGroup(raw.to_string())
        } else {
            KeyMatcher::Identity(raw.to_string())
        }
    }

    /// Check whether the key applies to a player
    pub fn fits<A: Actor + ?Sized>(&self, actor: &A) -> bool {
        match self {
            KeyMatcher::Identity(id) => actor
                .stable_identity()
                .is_some_and(|identity| identity == id.as_str()),
            KeyMatcher::PermissionFlag(flag) => actor.has_permission_flag(flag),
            KeyMatcher::PermissionGroup(group) => actor.is_in_permission_group(group),
            KeyMatcher::Wildcard => true,
        }
    }

    /// Resolution priority, lower wins
    pub const fn tier(&self) -> Tier {
        match self {
            KeyMatcher::Identity(_) => Tier::Identity,
            KeyMatcher::PermissionFlag(_) => Tier::PermissionFlag,
            KeyMatcher::PermissionGroup(_) => Tier::PermissionGroup,
            KeyMatcher::Wildcard => Tier::Wildcard,
        }
    }

    /// The key as written in configuration
    pub fn as_str(&self) -> &str {
        match self {
            KeyMatcher::Identity(raw)
            | KeyMatcher::PermissionFlag(raw)
            | KeyMatcher::PermissionGroup(raw) => raw,
            KeyMatcher::Wildcard => WILDCARD_KEY,
        }
    }
}

impl fmt::Display for KeyMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyMatcher {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(KeyMatcher::parse(s))
    }
}

impl From<&str> for KeyMatcher {
    fn from(raw: &str) -> Self {
        KeyMatcher::parse(raw)
    }
}

/// Resolution priority of a key kind, in the order they are consulted
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Identity,
    PermissionFlag,
    PermissionGroup,
    Wildcard,
}

impl Tier {
    /// All tiers, highest priority first
    pub const ORDER: [Tier; 4] = [
        Tier::Identity,
        Tier::PermissionFlag,
        Tier::PermissionGroup,
        Tier::Wildcard,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Tier::Identity => "identity",
            Tier::PermissionFlag => "permission_flag",
            Tier::PermissionGroup => "permission_group",
            Tier::Wildcard => "wildcard",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a list of raw keys, keeping their order
pub fn parse_keys<S: AsRef<str>>(raw: &[S]) -> Vec<KeyMatcher> {
    raw.iter().map(|k| KeyMatcher::parse(k.as_ref())).collect()
}
