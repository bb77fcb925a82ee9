//! Newtype wrappers for improved type safety and domain modeling.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Placeholder name that must be replaced before saving anything.
pub const PLACEHOLDER_TEAM_NAME: &str = "Team Name";

/// Name a value function is stored under.
///
/// Team names become part of a file name, so they must be non-empty, must not
/// contain path separators and must not be the placeholder `"Team Name"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TeamName(String);

impl TeamName {
    /// Create a validated team name.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidTeamName`] if the name is empty, is the
    /// placeholder, or contains `/` or `\`.
    pub fn new(name: impl Into<String>) -> Result<Self, crate::Error> {
        let name = name.into();
        let reason = if name.trim().is_empty() {
            Some("team name is empty")
        } else if name == PLACEHOLDER_TEAM_NAME {
            Some("please change the placeholder to your team name")
        } else if name.contains('/') || name.contains('\\') {
            Some("path separators are not allowed")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(crate::Error::InvalidTeamName {
                name,
                reason: reason.to_string(),
            }),
            None => Ok(Self(name)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name used by file-backed repositories, without directory
    pub fn file_name(&self, extension: &str) -> String {
        format!("dict_{}.{extension}", self.0)
    }
}

impl FromStr for TeamName {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TeamName {
    type Error = crate::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TeamName> for String {
    fn from(name: TeamName) -> Self {
        name.0
    }
}

impl AsRef<str> for TeamName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
