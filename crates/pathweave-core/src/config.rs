//! Search configuration for pathweave
//!
//! Options may be built in code or loaded from a TOML file:
//!
//! ```toml
//! max-expansions = 10000
//! flood-strategy = "depth-first"
//! ```

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::{PathError, Result};

pub use types::{FloodStrategy, SearchOptions};

impl SearchOptions {
    /// Options with an expansion budget
    pub fn with_max_expansions(max: usize) -> Self {
        Self {
            max_expansions: Some(max),
            ..Default::default()
        }
    }

    /// Reject settings no search could honour
    pub fn validate(&self) -> Result<()> {
        if self.max_expansions == Some(0) {
            bail_invalid!("max_expansions", "must be positive when set");
        }
        Ok(())
    }

    /// True once `expanded` vertices exhaust the configured budget
    pub fn budget_exhausted(&self, expanded: usize) -> bool {
        self.max_expansions.is_some_and(|max| expanded >= max)
    }

    /// Parse and validate options from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let options: SearchOptions = toml::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| PathError::ConfigSerialize {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        fs::write(path, content)?;
        Ok(())
    }
}
