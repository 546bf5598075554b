use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Trade vocabulary used for worker skills and job types.
///
/// Persisted as the display string. Tags outside the vocabulary survive a
/// load/save cycle as [`Skill::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Skill {
    Painter,
    Mason,
    Helper,
    Plumber,
    Electrician,
    Carpenter,
    TileWorker,
    Welder,
    Cleaner,
    LoadingWorker,
    Other,
    Custom(String),
}

impl Skill {
    pub const VOCABULARY: [Self; 11] = [
        Self::Painter,
        Self::Mason,
        Self::Helper,
        Self::Plumber,
        Self::Electrician,
        Self::Carpenter,
        Self::TileWorker,
        Self::Welder,
        Self::Cleaner,
        Self::LoadingWorker,
        Self::Other,
    ];

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Painter => "Painter",
            Self::Mason => "Mason",
            Self::Helper => "Helper",
            Self::Plumber => "Plumber",
            Self::Electrician => "Electrician",
            Self::Carpenter => "Carpenter",
            Self::TileWorker => "Tile Worker",
            Self::Welder => "Welder",
            Self::Cleaner => "Cleaner",
            Self::LoadingWorker => "Loading Worker",
            Self::Other => "Other",
            Self::Custom(tag) => tag,
        }
    }

    /// Case-insensitive substring match against the tag.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        self.as_str()
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Skill {
    fn from(s: &str) -> Self {
        let trimmed = s.trim();
        Self::VOCABULARY
            .iter()
            .find(|skill| skill.as_str().eq_ignore_ascii_case(trimmed))
            .cloned()
            .unwrap_or_else(|| Self::Custom(trimmed.to_string()))
    }
}

impl FromStr for Skill {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl Serialize for Skill {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Skill {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from(raw.as_str()))
    }
}
