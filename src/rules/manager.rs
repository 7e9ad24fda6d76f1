//! Default model manager
//!
//! Ties the resolver and the permission gate to the plugin's defaults file.
//! A missing file disables the feature: nothing resolves and nobody may
//! change their model.

use crate::config::{DefaultModelsConfig, MODULE_RELATIVE_MODELS_PATH};
use crate::error::ConfigError;
use crate::rules::actor::Actor;
use crate::rules::entries::EntrySet;
use crate::rules::gate::{AllowList, PermissionGate};
use crate::rules::resolver::{ModelResolver, Resolution};
use crate::rules::side::{Side, SideQuery};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, warn};

/// Default models and model change permissions, built once at startup
#[derive(Debug, Clone, Default)]
pub struct DefaultModels {
    resolver: ModelResolver,
    gate: PermissionGate,
}

impl DefaultModels {
    /// Build from a parsed defaults file
    pub fn new(config: &DefaultModelsConfig) -> Self {
        let entries = EntrySet::from_sections(&config.models);
        let allowed = AllowList::from_config(&config.who_can_change_model);

        info!(
            entries = entries.len(),
            t_allowed = allowed.side(Side::T).len(),
            ct_allowed = allowed.side(Side::CT).len(),
            "Loaded default model rules"
        );

        Self {
            resolver: ModelResolver::new(entries),
            gate: PermissionGate::new(allowed),
        }
    }

    /// Feature disabled: no defaults, no one may change
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Load the defaults file at `path`
    ///
    /// A missing file yields [`DefaultModels::disabled`]; unreadable or
    /// malformed files are errors.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(
                    path = %path.display(),
                    "Default models file not found, disabling default models"
                );
                return Ok(Self::disabled());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        let config =
            DefaultModelsConfig::from_json(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self::new(&config))
    }

    /// Load the defaults file from its place relative to the plugin's module
    /// directory
    pub fn for_module_directory(module_dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::load(module_dir.as_ref().join(MODULE_RELATIVE_MODELS_PATH))
    }

    /// Default model for a player on a side
    pub fn default_model<A: Actor + ?Sized>(&self, actor: &A, side: Side) -> Option<&str> {
        self.resolver.resolve(actor, side)
    }

    /// Default model lookup that reports explicit suppression
    pub fn lookup<A: Actor + ?Sized>(&self, actor: &A, side: Side) -> Resolution<'_> {
        self.resolver.lookup(actor, side)
    }

    /// Whether a player may change their model on a side (or both, for `all`)
    pub fn can_change_model<A: Actor + ?Sized>(
        &self,
        actor: &A,
        query: impl Into<SideQuery>,
    ) -> bool {
        self.gate.can_change(actor, query)
    }

    /// Whether any default or allow-list key is configured
    pub fn is_enabled(&self) -> bool {
        !self.resolver.entries().is_empty() || !self.gate.allow_list().is_empty()
    }

    pub fn resolver(&self) -> &ModelResolver {
        &self.resolver
    }

    pub fn gate(&self) -> &PermissionGate {
        &self.gate
    }
}
