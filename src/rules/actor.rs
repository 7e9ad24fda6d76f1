//! Actor capability
//!
//! Keys are evaluated against an [`Actor`], the host's view of a connected
//! player. Hosts with their own player type implement the trait directly;
//! [`Player`] is a plain record for everything else.

use std::borrow::Cow;
use std::collections::HashSet;

/// Identity and permission queries the host environment answers for a player
pub trait Actor {
    /// Stable unique identifier, or `None` while the player is unauthenticated
    fn stable_identity(&self) -> Option<Cow<'_, str>>;

    /// Whether the player holds the named permission flag (e.g. `@css/vip`)
    fn has_permission_flag(&self, flag: &str) -> bool;

    /// Whether the player belongs to the named group (e.g. `#vip`)
    fn is_in_permission_group(&self, group: &str) -> bool;
}

impl<A: Actor + ?Sized> Actor for &A {
    fn stable_identity(&self) -> Option<Cow<'_, str>> {
        (**self).stable_identity()
    }

    fn has_permission_flag(&self, flag: &str) -> bool {
        (**self).has_permission_flag(flag)
    }

    fn is_in_permission_group(&self, group: &str) -> bool {
        (**self).is_in_permission_group(group)
    }
}

/// Suffix of the flag that grants every flag in its domain
pub const ROOT_FLAG: &str = "root";

/// Extract the domain of a permission flag (`@css/ban` -> `css`)
pub fn flag_domain(flag: &str) -> Option<&str> {
    let rest = flag.strip_prefix('@')?;
    rest.split_once('/').map(|(domain, _)| domain)
}

/// A player snapshot: SteamID64, permission flags and groups
///
/// Group names are stored with their `#` prefix, the way the admin system
/// reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Player {
    steam_id: Option<u64>,
    flags: HashSet<String>,
    groups: HashSet<String>,
}

impl Player {
    /// An authenticated player
    pub fn new(steam_id: u64) -> Self {
        Self {
            steam_id: Some(steam_id),
            ..Default::default()
        }
    }

    /// A player whose SteamID has not been authorized yet
    pub fn unauthenticated() -> Self {
        Self::default()
    }

    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.flags.insert(flag.into());
        self
    }

    pub fn with_flags<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flags.extend(flags.into_iter().map(Into::into));
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.groups.insert(group.into());
        self
    }

    pub fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups.extend(groups.into_iter().map(Into::into));
        self
    }
}

impl Actor for Player {
    fn stable_identity(&self) -> Option<Cow<'_, str>> {
        self.steam_id.map(|id| Cow::Owned(id.to_string()))
    }

    fn has_permission_flag(&self, flag: &str) -> bool {
        if self.flags.contains(flag) {
            return true;
        }

        // @domain/root implies every @domain/* flag
        match flag_domain(flag) {
            Some(domain) => self.flags.contains(&format!("@{domain}/{ROOT_FLAG}")),
            None => false,
        }
    }

    fn is_in_permission_group(&self, group: &str) -> bool {
        self.groups.contains(group)
    }
}
