//! Layered template registry.
//!
//! Records from every root in the load order are merged into a
//! [`LayeredTable`], keyed by `MapKey`. Once the table is complete,
//! [`resolve_inheritance`] walks each item's parent chain and
//! [`inherited_attribute`] looks up values through the resolved ancestry.
//!
//! # Example
//!
//! ```ignore
//! use lootgen::registry::{inherited_attribute, resolve_inheritance};
//!
//! let summary = resolve_inheritance(&mut items, &mut report);
//! let stats = inherited_attribute(item, &items, |d| d.stats.as_deref());
//! ```

mod fallback;
mod inherit;
mod table;

pub use fallback::{inherited_attribute, resolve_attribute};
pub use inherit::{resolve_inheritance, ResolveSummary};
pub use table::LayeredTable;
