//! Default model rules
//!
//! Decides which model a player gets by default on each side, and whether
//! they may change it.
//!
//! ## Keys
//!
//! Every configuration key is a predicate over players:
//! - `*` matches everyone
//! - `@domain/flag` matches players holding the permission flag
//! - `#group` matches members of the permission group
//! - anything else is compared to the player's SteamID64
//!
//! ## Merging
//!
//! ```text
//! all (both sides) → t overrides → ct overrides
//! ```
//!
//! A later section replaces an earlier entry with the same key on the same
//! side. All `*` keys count as the same key.
//!
//! ## Resolution
//!
//! Among matching entries on the queried side, SteamID keys beat permission
//! flags, which beat permission groups, which beat `*`. An empty model name
//! means "no default" and hides every lower-priority match.
//!
//! ## Example Configuration
//!
//! ```json
//! {
//!   "DefaultModels": {
//!     "all": { "*": "models/player/default.vmdl" },
//!     "t":   { "#vip": "models/player/vip_t.vmdl" }
//!   },
//!   "WhoCanChangeModel": { "all": ["@css/vip"] }
//! }
//! ```

pub mod actor;
pub mod entries;
pub mod gate;
pub mod key;
pub mod manager;
pub mod resolver;
pub mod side;

pub use actor::{Actor, Player};
pub use entries::{EntrySet, EntrySetBuilder, ModelEntry};
pub use gate::{AllowList, PermissionGate};
pub use key::{KeyMatcher, Tier};
pub use manager::DefaultModels;
pub use resolver::{ModelResolver, Resolution};
pub use side::{Side, SideQuery};
