use std::any::Any;

use log::info;
use roster_states::State;
use serde::Deserialize;

/// Where the member list is served from unless overridden.
pub const DEFAULT_MEMBERS_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    members_url: String,
}

/// Environment variables recognised by [`RosterConfig::from_vars`].
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    roster_members_url: Option<String>,
}

impl RosterConfig {
    pub fn new(members_url: impl Into<String>) -> Self {
        Self {
            members_url: members_url.into(),
        }
    }

    pub fn members_url(&self) -> &str {
        &self.members_url
    }

    /// Read `ROSTER_MEMBERS_URL` from the process environment.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(std::env::vars())
    }

    /// Build from `(name, value)` pairs; a missing or blank
    /// `ROSTER_MEMBERS_URL` falls back to [`DEFAULT_MEMBERS_URL`].
    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> anyhow::Result<Self> {
        let raw: RawConfig = serde_env::from_iter(vars)?;

        match raw.roster_members_url {
            Some(url) if !url.trim().is_empty() => {
                info!("Using provided ROSTER_MEMBERS_URL: {url}");
                Ok(Self::new(url.trim()))
            }
            _ => Ok(Self::default()),
        }
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MEMBERS_URL)
    }
}

impl State for RosterConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
