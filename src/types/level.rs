//! Level and character placement records.

use serde::Serialize;

/// A character placed in a level (or level globals).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Character {
    pub name: String,
    pub map_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treasures_tables: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_treasure_tables: Option<Vec<String>>,
}

impl Character {
    /// Create a character with only the required fields set.
    pub fn new(map_key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            map_key: map_key.into(),
            template: None,
            position: None,
            display_name: None,
            tags: None,
            treasures_tables: None,
            trade_treasure_tables: None,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().flatten().any(|t| t == tag)
    }
}

/// All characters of one level, merged across the level load order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Level {
    /// Localized level name, or the identifier when no name is known.
    pub name: String,
    pub id: String,
    pub characters: Vec<Character>,
}
