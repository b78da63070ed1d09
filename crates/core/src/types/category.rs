//! Shoe categories and the capabilities they imply.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// What a pair of shoes is suitable for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Can be used to kick a ball on a football pitch.
    Football,
    /// Can be used for running.
    Running,
}

/// Shoe category.
///
/// The creation form only offers the eight named variants. Rows read back
/// from the data file may carry any text; those are kept as [`Category::Other`]
/// and have no capabilities. Names are matched case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Running,
    Lifestyle,
    Casual,
    Skateboarding,
    Basketball,
    Boots,
    Sandals,
    Football,
    /// Category text that is not one of the known names.
    Other(String),
}

impl Category {
    /// The selectable categories, in the order the form offers them.
    pub const ALL: [Self; 8] = [
        Self::Running,
        Self::Lifestyle,
        Self::Casual,
        Self::Skateboarding,
        Self::Basketball,
        Self::Boots,
        Self::Sandals,
        Self::Football,
    ];

    /// Capabilities granted by this category.
    #[must_use]
    pub const fn capabilities(&self) -> &'static [Capability] {
        match self {
            Self::Football => &[Capability::Football, Capability::Running],
            Self::Running | Self::Basketball => &[Capability::Running],
            Self::Lifestyle
            | Self::Casual
            | Self::Skateboarding
            | Self::Boots
            | Self::Sandals
            | Self::Other(_) => &[],
        }
    }

    /// Whether this category grants `capability`.
    #[must_use]
    pub fn has(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }

    /// The category name as stored in the data file.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Running => "Running",
            Self::Lifestyle => "Lifestyle",
            Self::Casual => "Casual",
            Self::Skateboarding => "Skateboarding",
            Self::Basketball => "Basketball",
            Self::Boots => "Boots",
            Self::Sandals => "Sandals",
            Self::Football => "Football",
            Self::Other(name) => name,
        }
    }

    /// Parse a category, keeping unknown text as [`Category::Other`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        name.parse()
            .unwrap_or_else(|_| Self::Other(name.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Parse one of the eight known names. Unknown names are an error here;
    /// use [`Category::from_name`] to keep them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Running" => Ok(Self::Running),
            "Lifestyle" => Ok(Self::Lifestyle),
            "Casual" => Ok(Self::Casual),
            "Skateboarding" => Ok(Self::Skateboarding),
            "Basketball" => Ok(Self::Basketball),
            "Boots" => Ok(Self::Boots),
            "Sandals" => Ok(Self::Sandals),
            "Football" => Ok(Self::Football),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_football_has_both_capabilities() {
        assert!(Category::Football.has(Capability::Football));
        assert!(Category::Football.has(Capability::Running));
    }

    #[test]
    fn test_capability_table() {
        for category in Category::ALL {
            let football = category == Category::Football;
            let running = matches!(
                category,
                Category::Running | Category::Basketball | Category::Football
            );
            assert_eq!(category.has(Capability::Football), football, "{category}");
            assert_eq!(category.has(Capability::Running), running, "{category}");
        }
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert!("football".parse::<Category>().is_err());
        let lower = Category::from_name("football");
        assert_eq!(lower, Category::Other("football".to_string()));
        assert!(lower.capabilities().is_empty());
    }

    #[test]
    fn test_unknown_category_is_preserved() {
        let category: Category = serde_json::from_str("\"Hiking\"").unwrap();
        assert_eq!(category.as_str(), "Hiking");
        assert_eq!(category, Category::Other("Hiking".to_string()));
        assert_eq!(serde_json::to_string(&category).unwrap(), "\"Hiking\"");
    }

    #[test]
    fn test_display_matches_from_str() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), category);
        }
    }
}
