//! Attributed node tree produced by the LSX reader.
//!
//! An LSX document is a list of regions, each holding nodes. A node has an
//! `id`, a flat list of typed attributes and nested child nodes. The
//! `<children>` wrapper element of the markup is not represented; its nodes
//! are attached directly to the enclosing node.

/// A single `<attribute>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attribute {
    pub id: String,
    /// Declared storage type (`FixedString`, `guid`, `TranslatedString`, ...).
    pub type_name: Option<String>,
    pub value: Option<String>,
    /// Localization handle for translated strings.
    pub handle: Option<String>,
}

/// A `<node>` element with its attributes and child nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    pub id: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
}

impl Node {
    /// Create an empty node.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Get the first attribute with the given id.
    pub fn attribute(&self, id: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.id == id)
    }

    /// Get the `value` of an attribute.
    pub fn value(&self, id: &str) -> Option<&str> {
        self.attribute(id).and_then(|a| a.value.as_deref())
    }

    /// Get the `handle` of an attribute.
    pub fn handle(&self, id: &str) -> Option<&str> {
        self.attribute(id).and_then(|a| a.handle.as_deref())
    }

    /// Get the first child node with the given id.
    pub fn child(&self, id: &str) -> Option<&Node> {
        self.children.iter().find(|n| n.id == id)
    }

    /// Iterate over child nodes with the given id.
    pub fn children_named<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Node> {
        self.children.iter().filter(move |n| n.id == id)
    }

    /// Values of every attribute of every `item_id` node inside the `group_id`
    /// child, e.g. `Tags → Tag → attribute`.
    pub fn grouped_values<'a>(
        &'a self,
        group_id: &'a str,
        item_id: &'a str,
    ) -> impl Iterator<Item = &'a str> {
        self.children_named(group_id)
            .flat_map(move |group| group.children_named(item_id))
            .flat_map(|item| item.attributes.iter())
            .filter_map(|a| a.value.as_deref())
    }
}

/// A `<region>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    pub id: String,
    pub nodes: Vec<Node>,
}

impl Region {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            nodes: Vec::new(),
        }
    }
}

/// A parsed LSX document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub regions: Vec<Region>,
}

impl Document {
    /// Get the first region with the given id.
    pub fn region(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// Top-level nodes of a region (empty if the region is absent).
    pub fn region_nodes<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a Node> {
        self.region(id).into_iter().flat_map(|r| r.nodes.iter())
    }
}
