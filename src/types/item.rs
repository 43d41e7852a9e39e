//! Item template records.

use serde::Serialize;

/// An item root template after load-order merging.
///
/// `data` holds what the template file itself declares. `resolved_data` is
/// filled in by [`crate::registry::resolve_inheritance`] once every layer has
/// been merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Item {
    pub name: String,
    pub map_key: String,
    /// Source file relative to the source root.
    pub path: String,
    pub data: ItemData,
    pub resolved_data: ResolvedData,
}

/// Fields declared directly on an item template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_template_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_template_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Data computed by walking the parent-template chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResolvedData {
    /// Ancestor names, nearest first. A dangling parent shows up as its raw key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parents: Option<Vec<String>>,
    /// Own tags plus every ancestor's, deduplicated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Keys walked to produce `parents`, nearest first.
    #[serde(skip)]
    pub parent_keys: Vec<String>,
}

impl Item {
    /// Create an unresolved item.
    pub fn new(
        map_key: impl Into<String>,
        name: impl Into<String>,
        path: impl Into<String>,
        data: ItemData,
    ) -> Self {
        Self {
            name: name.into(),
            map_key: map_key.into(),
            path: path.into(),
            data,
            resolved_data: ResolvedData::default(),
        }
    }

    /// Parent key, treating blank values as absent.
    pub fn parent_key(&self) -> Option<&str> {
        self.data
            .parent_template_id
            .as_deref()
            .filter(|k| !k.trim().is_empty())
    }

    /// Tags declared on this template only.
    pub fn own_tags(&self) -> &[String] {
        self.data.tags.as_deref().unwrap_or_default()
    }

    /// Resolved ancestor names, nearest first.
    pub fn ancestry(&self) -> &[String] {
        self.resolved_data.parents.as_deref().unwrap_or_default()
    }

    /// Resolved tag closure.
    pub fn tag_closure(&self) -> &[String] {
        self.resolved_data.tags.as_deref().unwrap_or_default()
    }

    /// Check whether `name` appears anywhere in this item's ancestry.
    pub fn inherits_from(&self, name: &str) -> bool {
        self.ancestry().iter().any(|p| p == name)
    }
}
