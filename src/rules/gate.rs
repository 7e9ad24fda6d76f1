//! Model change permissions
//!
//! Each side has its own allow list of keys. A player may change their model
//! on a side when any key in that side's list fits them. The `all` query asks
//! for authority over both sides at once and therefore needs a fit in both
//! lists.

use crate::config::WhoCanChangeModelConfig;
use crate::rules::actor::Actor;
use crate::rules::key::{KeyMatcher, parse_keys};
use crate::rules::side::{Side, SideQuery};
use tracing::debug;

/// Keys allowed to change their model, per side
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    t: Vec<KeyMatcher>,
    ct: Vec<KeyMatcher>,
}

impl AllowList {
    pub fn new(t: Vec<KeyMatcher>, ct: Vec<KeyMatcher>) -> Self {
        Self { t, ct }
    }

    /// Build from configuration: `all` seeds both sides, `t` and `ct` replace
    /// the seeded list for their side when present
    pub fn from_config(config: &WhoCanChangeModelConfig) -> Self {
        let mut list = Self::default();

        if let Some(all) = &config.all {
            let keys = parse_keys(all);
            list.t = keys.clone();
            list.ct = keys;
        }
        if let Some(t) = &config.t {
            list.t = parse_keys(t);
        }
        if let Some(ct) = &config.ct {
            list.ct = parse_keys(ct);
        }

        list
    }

    pub fn side(&self, side: Side) -> &[KeyMatcher] {
        match side {
            Side::T => &self.t,
            Side::CT => &self.ct,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty() && self.ct.is_empty()
    }
}

/// Decides whether a player may change their model
#[derive(Debug, Clone, Default)]
pub struct PermissionGate {
    allowed: AllowList,
}

impl PermissionGate {
    pub fn new(allowed: AllowList) -> Self {
        Self { allowed }
    }

    pub fn from_config(config: &WhoCanChangeModelConfig) -> Self {
        Self::new(AllowList::from_config(config))
    }

    pub fn allow_list(&self) -> &AllowList {
        &self.allowed
    }

    /// Check whether a player may change their model on a side, or on both
    /// sides for [`SideQuery::All`]
    pub fn can_change<A: Actor + ?Sized>(&self, actor: &A, query: impl Into<SideQuery>) -> bool {
        let query = query.into();
        let allowed = query
            .sides()
            .iter()
            .all(|side| self.allowed_on(actor, *side));

        debug!(side = %query, allowed, "Checked model change permission");
        allowed
    }

    fn allowed_on<A: Actor + ?Sized>(&self, actor: &A, side: Side) -> bool {
        self.allowed.side(side).iter().any(|key| key.fits(actor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::actor::Player;

    fn strings(keys: &[&str]) -> Option<Vec<String>> {
        Some(keys.iter().map(|k| k.to_string()).collect())
    }

    #[test]
    fn test_empty_gate_denies() {
        let gate = PermissionGate::default();
        let player = Player::new(1).with_flag("@css/root");
        assert!(!gate.can_change(&player, Side::T));
        assert!(!gate.can_change(&player, Side::CT));
        assert!(!gate.can_change(&player, SideQuery::All));
    }

    #[test]
    fn test_all_seeds_both_sides() {
        let list = AllowList::from_config(&WhoCanChangeModelConfig {
            all: strings(&["@css/vip"]),
            ..Default::default()
        });
        assert_eq!(list.side(Side::T), list.side(Side::CT));
        assert_eq!(list.side(Side::T).len(), 1);
    }

    #[test]
    fn test_side_list_replaces_seed() {
        let list = AllowList::from_config(&WhoCanChangeModelConfig {
            all: strings(&["@css/vip", "#donor"]),
            t: strings(&["*"]),
            ct: None,
        });
        assert_eq!(list.side(Side::T), &[KeyMatcher::Wildcard]);
        assert_eq!(list.side(Side::CT).len(), 2);
    }

    #[test]
    fn test_empty_side_list_replaces_seed() {
        let gate = PermissionGate::from_config(&WhoCanChangeModelConfig {
            all: strings(&["*"]),
            t: None,
            ct: strings(&[]),
        });
        let player = Player::new(1);
        assert!(gate.can_change(&player, Side::T));
        assert!(!gate.can_change(&player, Side::CT));
    }

    #[test]
    fn test_any_key_on_side_allows() {
        let gate = PermissionGate::from_config(&WhoCanChangeModelConfig {
            t: strings(&["#vip", "@css/vip"]),
            ..Default::default()
        });
        assert!(gate.can_change(&Player::new(1).with_flag("@css/vip"), Side::T));
        assert!(gate.can_change(&Player::new(1).with_group("#vip"), Side::T));
        assert!(!gate.can_change(&Player::new(1), Side::T));
    }

    #[test]
    fn test_all_query_requires_both_sides() {
        let gate = PermissionGate::from_config(&WhoCanChangeModelConfig {
            t: strings(&["*"]),
            ct: strings(&["@css/vip"]),
            ..Default::default()
        });
        let regular = Player::new(1);
        assert!(gate.can_change(&regular, Side::T));
        assert!(!gate.can_change(&regular, Side::CT));
        assert!(!gate.can_change(&regular, SideQuery::All));

        let vip = Player::new(1).with_flag("@css/vip");
        assert!(gate.can_change(&vip, SideQuery::All));
    }
}
