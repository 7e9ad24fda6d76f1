//! Default model resolver
//!
//! Picks the single entry that applies to a player on a side. Matching
//! entries are ranked by key kind (highest to lowest):
//! 1. SteamID
//! 2. Permission flag
//! 3. Permission group
//! 4. Wildcard
//!
//! When several entries of the same kind match, the first in build order
//! wins. An empty model value suppresses the default instead of naming one.

use crate::rules::actor::Actor;
use crate::rules::entries::{EntrySet, ModelEntry};
use crate::rules::key::Tier;
use crate::rules::side::Side;
use tracing::{debug, trace};

/// Outcome of a default-model lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// A default model applies
    Model(&'a str),
    /// The winning entry explicitly sets no default
    Suppressed,
    /// No entry matched the player
    NoMatch,
}

impl<'a> Resolution<'a> {
    /// The model to apply, if any
    pub fn model(self) -> Option<&'a str> {
        match self {
            Resolution::Model(model) => Some(model),
            Resolution::Suppressed | Resolution::NoMatch => None,
        }
    }

    pub fn is_match(&self) -> bool {
        !matches!(self, Resolution::NoMatch)
    }
}

/// Default model resolver
///
/// Owns the effective entry set; immutable after construction.
#[derive(Debug, Clone, Default)]
pub struct ModelResolver {
    entries: EntrySet,
}

impl ModelResolver {
    pub fn new(entries: EntrySet) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &EntrySet {
        &self.entries
    }

    /// Default model for a player on a side, or `None` when nothing matches
    /// or the winning entry is empty
    pub fn resolve<A: Actor + ?Sized>(&self, actor: &A, side: Side) -> Option<&str> {
        self.lookup(actor, side).model()
    }

    /// Like [`resolve`](Self::resolve), but tells an explicit empty override
    /// apart from no match
    pub fn lookup<A: Actor + ?Sized>(&self, actor: &A, side: Side) -> Resolution<'_> {
        let identity = actor.stable_identity();
        debug!(side = %side, identity = ?identity.as_deref(), "Resolving default model");

        match self.winning_entry(actor, side) {
            None => {
                trace!("No entry matched");
                Resolution::NoMatch
            }
            Some(entry) if entry.value.is_empty() => {
                trace!(key = %entry.key, "Matched entry suppresses default");
                Resolution::Suppressed
            }
            Some(entry) => Resolution::Model(entry.value.as_str()),
        }
    }

    /// The entry that decides the default for a player on a side
    pub fn winning_entry<A: Actor + ?Sized>(&self, actor: &A, side: Side) -> Option<&ModelEntry> {
        let mut best: [Option<&ModelEntry>; Tier::ORDER.len()] = [None; Tier::ORDER.len()];

        // First fitting entry per tier; nothing outranks an identity match.
        for entry in self.entries.for_side(side) {
            let tier = entry.key.tier() as usize;
            if best[tier].is_none() && entry.key.fits(actor) {
                best[tier] = Some(entry);
                if entry.key.tier() == Tier::Identity {
                    break;
                }
            }
        }

        let winner = best.into_iter().flatten().next();
        if let Some(entry) = winner {
            trace!(tier = %entry.key.tier(), key = %entry.key, "Matched entry");
        }
        winner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModelTable;
    use crate::rules::actor::Player;
    use crate::rules::entries::EntrySetBuilder;

    const STEAM_ID: u64 = 76561198000000001;

    fn resolver(t: &[(&str, &str)]) -> ModelResolver {
        let t: ModelTable = t.iter().copied().collect();
        ModelResolver::new(EntrySetBuilder::build(None, Some(&t), None))
    }

    #[test]
    fn test_empty_resolver() {
        let resolver = ModelResolver::default();
        assert_eq!(resolver.lookup(&Player::new(1), Side::T), Resolution::NoMatch);
    }

    #[test]
    fn test_full_priority_order() {
        let resolver = resolver(&[
            ("*", "wildcard"),
            ("#vip", "group"),
            ("@css/vip", "flag"),
            ("76561198000000001", "identity"),
        ]);

        let everything = Player::new(STEAM_ID)
            .with_flag("@css/vip")
            .with_group("#vip");
        assert_eq!(resolver.resolve(&everything, Side::T), Some("identity"));

        let no_identity = Player::new(2).with_flag("@css/vip").with_group("#vip");
        assert_eq!(resolver.resolve(&no_identity, Side::T), Some("flag"));

        let group_only = Player::new(2).with_group("#vip");
        assert_eq!(resolver.resolve(&group_only, Side::T), Some("group"));

        assert_eq!(resolver.resolve(&Player::new(2), Side::T), Some("wildcard"));
    }

    #[test]
    fn test_other_side_not_consulted() {
        let resolver = resolver(&[("*", "model")]);
        assert_eq!(resolver.resolve(&Player::new(1), Side::CT), None);
    }

    #[test]
    fn test_empty_value_suppresses_lower_tiers() {
        let resolver = resolver(&[("*", "model"), ("#vip", "")]);
        let vip = Player::new(1).with_group("#vip");
        assert_eq!(resolver.lookup(&vip, Side::T), Resolution::Suppressed);
        assert_eq!(resolver.resolve(&vip, Side::T), None);

        assert_eq!(resolver.resolve(&Player::new(1), Side::T), Some("model"));
    }

    #[test]
    fn test_same_tier_first_in_build_order() {
        let resolver = resolver(&[("@css/a", "first"), ("@css/b", "second")]);
        let both = Player::new(1).with_flags(["@css/a", "@css/b"]);
        assert_eq!(resolver.resolve(&both, Side::T), Some("first"));
    }

    #[test]
    fn test_unauthenticated_player_skips_identity_keys() {
        let resolver = resolver(&[("76561198000000001", "identity"), ("*", "fallback")]);
        assert_eq!(
            resolver.resolve(&Player::unauthenticated(), Side::T),
            Some("fallback")
        );
    }

    #[test]
    fn test_winning_entry_exposes_key() {
        let resolver = resolver(&[("*", "a"), ("#vip", "b")]);
        let vip = Player::new(1).with_group("#vip");
        let entry = resolver.winning_entry(&vip, Side::T).unwrap();
        assert_eq!(entry.key.to_string(), "#vip");
    }

    #[test]
    fn test_resolution_helpers() {
        assert_eq!(Resolution::Model("m").model(), Some("m"));
        assert_eq!(Resolution::Suppressed.model(), None);
        assert!(Resolution::Suppressed.is_match());
        assert!(!Resolution::NoMatch.is_match());
    }
}
