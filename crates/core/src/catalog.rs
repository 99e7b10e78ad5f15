//! Fixed catalog enumerations for learning resources.
//!
//! The string forms here are the values stored in the `resources` table and
//! must match the CHECK constraints in `20260301000002_create_resources_table.sql`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Resource type constants
// ---------------------------------------------------------------------------

pub const RESOURCE_TYPE_ARTICLE: &str = "article";
pub const RESOURCE_TYPE_VIDEO: &str = "video";
pub const RESOURCE_TYPE_COURSE: &str = "course";

/// All valid resource types, in display order.
pub const VALID_RESOURCE_TYPES: &[&str] =
    &[RESOURCE_TYPE_ARTICLE, RESOURCE_TYPE_VIDEO, RESOURCE_TYPE_COURSE];

// ---------------------------------------------------------------------------
// Difficulty constants
// ---------------------------------------------------------------------------

pub const DIFFICULTY_BEGINNER: &str = "beginner";
pub const DIFFICULTY_INTERMEDIATE: &str = "intermediate";
pub const DIFFICULTY_ADVANCED: &str = "advanced";

/// All valid difficulty levels, easiest first.
pub const VALID_DIFFICULTIES: &[&str] =
    &[DIFFICULTY_BEGINNER, DIFFICULTY_INTERMEDIATE, DIFFICULTY_ADVANCED];

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Kind of learning material a resource points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Article,
    Video,
    Course,
}

impl ResourceType {
    pub const ALL: [ResourceType; 3] = [Self::Article, Self::Video, Self::Course];

    /// Return the database string representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Article => RESOURCE_TYPE_ARTICLE,
            Self::Video => RESOURCE_TYPE_VIDEO,
            Self::Course => RESOURCE_TYPE_COURSE,
        }
    }
}

impl FromStr for ResourceType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            RESOURCE_TYPE_ARTICLE => Ok(Self::Article),
            RESOURCE_TYPE_VIDEO => Ok(Self::Video),
            RESOURCE_TYPE_COURSE => Ok(Self::Course),
            other => Err(CoreError::Validation(format!(
                "Unknown resource type '{other}'. Valid types: {}",
                VALID_RESOURCE_TYPES.join(", ")
            ))),
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much prior knowledge a resource assumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Return the database string representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => DIFFICULTY_BEGINNER,
            Self::Intermediate => DIFFICULTY_INTERMEDIATE,
            Self::Advanced => DIFFICULTY_ADVANCED,
        }
    }
}

impl FromStr for Difficulty {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            DIFFICULTY_BEGINNER => Ok(Self::Beginner),
            DIFFICULTY_INTERMEDIATE => Ok(Self::Intermediate),
            DIFFICULTY_ADVANCED => Ok(Self::Advanced),
            other => Err(CoreError::Validation(format!(
                "Unknown difficulty '{other}'. Valid levels: {}",
                VALID_DIFFICULTIES.join(", ")
            ))),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_type_parses_every_valid_value() {
        for value in VALID_RESOURCE_TYPES {
            let parsed: ResourceType = value.parse().unwrap();
            assert_eq!(parsed.as_str(), *value);
        }
    }

    #[test]
    fn resource_type_rejects_unknown_and_wrong_case() {
        assert!("podcast".parse::<ResourceType>().is_err());
        assert!("Video".parse::<ResourceType>().is_err());
        assert!("".parse::<ResourceType>().is_err());
    }

    #[test]
    fn resource_type_error_lists_valid_values() {
        let err = "book".parse::<ResourceType>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'book'"));
        assert!(msg.contains("article, video, course"));
    }

    #[test]
    fn difficulty_parses_every_valid_value() {
        for value in VALID_DIFFICULTIES {
            let parsed: Difficulty = value.parse().unwrap();
            assert_eq!(parsed.to_string(), *value);
        }
    }

    #[test]
    fn difficulty_rejects_unknown() {
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn difficulty_orders_easiest_first() {
        assert!(Difficulty::Beginner < Difficulty::Intermediate);
        assert!(Difficulty::Intermediate < Difficulty::Advanced);
    }

    #[test]
    fn all_arrays_match_string_tables() {
        let types: Vec<&str> = ResourceType::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(types, VALID_RESOURCE_TYPES);
        let levels: Vec<&str> = Difficulty::ALL.iter().map(|d| d.as_str()).collect();
        assert_eq!(levels, VALID_DIFFICULTIES);
    }
}
