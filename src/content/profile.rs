use crate::domain::output::{Field, Output};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

const BUILTIN_PROFILE: &str = include_str!("../../assets/profile.toml");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub user: String,
    pub host: String,
    pub role: String,
    pub location: String,
    #[serde(default)]
    pub welcome: Output,
}

/// One content command, e.g. `about` or `projects`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub description: String,
    pub blocks: Output,
    /// Register after the shell built-ins rather than before them.
    #[serde(default)]
    pub after_shell: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Productivity {
    #[serde(default)]
    pub metrics: Vec<Field>,
    /// Inclusive local hours during which the dashboard reports "Active".
    #[serde(default = "default_work_hours")]
    pub work_hours: (u32, u32),
}

impl Default for Productivity {
    fn default() -> Self {
        Self {
            metrics: Vec::new(),
            work_hours: default_work_hours(),
        }
    }
}

fn default_work_hours() -> (u32, u32) {
    (8, 18)
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Daily {
    #[serde(default)]
    pub quotes: Vec<Quote>,
    #[serde(default)]
    pub verses: Vec<Quote>,
}

/// Everything the shell says about its owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub identity: Identity,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub productivity: Productivity,
    #[serde(default)]
    pub daily: Daily,
}

impl Profile {
    /// The profile compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_PROFILE)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let profile: Profile = toml::from_str(content)?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Profile(format!("{}: {e}", path.display())))?;
        let profile = Self::parse(&content)?;
        log::info!(
            "loaded profile for {} with {} sections from {}",
            profile.identity.name,
            profile.sections.len(),
            path.display()
        );
        Ok(profile)
    }

    fn validate(&self) -> Result<()> {
        if self.identity.user.trim().is_empty() || self.identity.host.trim().is_empty() {
            return Err(Error::Profile("identity.user and identity.host are required".into()));
        }
        let (start, end) = self.productivity.work_hours;
        if start > 23 || end > 23 || start > end {
            return Err(Error::Profile(format!(
                "productivity.work_hours must be ordered hours 0-23, got [{start}, {end}]"
            )));
        }
        Ok(())
    }
}
