use crate::stack::BoundedStack;
use anyhow::{Context, Result};
use std::env;

pub const CAPACITY_VAR: &str = "BOUNDED_STACK_CAPACITY";
pub const LOG_FILTER_VAR: &str = "RUST_LOG";

/// Settings for the demo binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub capacity: usize,
    /// An `EnvFilter` directive string, e.g. `"info"` or `"bounded_stack=debug"`.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: BoundedStack::DEFAULT_CAPACITY,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like `from_env`, but reads variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(CAPACITY_VAR) {
            config.capacity = raw
                .trim()
                .parse()
                .with_context(|| format!("invalid {CAPACITY_VAR}: {raw:?}"))?;
        }
        if let Some(filter) = lookup(LOG_FILTER_VAR) {
            config.log_filter = filter;
        }

        Ok(config)
    }
}
