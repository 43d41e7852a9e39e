//! lootgen - Layered game template resolver
//!
//! A library for merging unpacked game template files across a load order,
//! resolving parent-template inheritance, and deriving item, level and
//! trader datasets from the result.

pub mod cli;
pub mod diagnostics;
pub mod discovery;
pub mod error;
pub mod export;
pub mod extract;
pub mod lookup;
pub mod output;
pub mod parser;
pub mod registry;
pub mod types;
pub mod views;

pub use diagnostics::{Diagnostic, Report, Severity};
pub use discovery::{discover, Manifest, SourceTree};
pub use error::{LootError, Result};
pub use export::ArmourMod;
pub use lookup::{LookupTable, Lookups};
pub use registry::{inherited_attribute, resolve_inheritance, LayeredTable, ResolveSummary};
pub use types::{Character, Item, ItemData, Level, ResolvedData, TraderCharacter, TraderLevel};
