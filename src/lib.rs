//! Default player models
//!
//! Resolves which model a player gets by default on each side of a
//! Counter-Strike server, and whether that player may change it, from a
//! static rules file loaded once at startup.
//!
//! ## Features
//!
//! - **Prefix-typed keys**: SteamID64, `@permission/flag`, `#group` and `*`
//! - **Layered sections**: `all` applies to both sides, `t` and `ct` override it
//! - **Fixed priority**: SteamID > flag > group > `*`, with empty values
//!   suppressing the default
//! - **Per-side allow lists** for changing models, with a conjunctive `all` check
//!
//! ## Example
//!
//! ```
//! use model_defaults::config::DefaultModelsConfig;
//! use model_defaults::rules::{DefaultModels, Player, Side, SideQuery};
//!
//! let config = DefaultModelsConfig::from_json(r##"{
//!     "DefaultModels": { "all": { "*": "modelA" }, "t": { "#vip": "modelB" } },
//!     "WhoCanChangeModel": { "all": ["@css/vip"] }
//! }"##).unwrap();
//! let models = DefaultModels::new(&config);
//!
//! let vip = Player::new(76561198000000001).with_group("#vip");
//! assert_eq!(models.default_model(&vip, Side::T), Some("modelB"));
//! assert_eq!(models.default_model(&vip, Side::CT), Some("modelA"));
//! assert!(!models.can_change_model(&vip, SideQuery::All));
//! ```

pub mod config;
pub mod error;
pub mod rules;

// Re-export main types
pub use config::{AppConfig, DefaultModelsConfig, load_config};
pub use error::{ConfigError, ParseSideError};
pub use rules::{Actor, DefaultModels, Player, Side, SideQuery};
