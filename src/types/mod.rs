//! Core domain types for lootgen.
//!
//! This module contains the records produced by extraction and consumed by
//! the resolver, view builders and exporters:
//! - `Item` - Item root templates with declared and resolved data
//! - `Character` / `Level` - Character placements grouped per level
//! - `TraderLevel` - Trader roster view of a level

mod item;
mod level;
mod trader;

pub use item::{Item, ItemData, ResolvedData};
pub use level::{Character, Level};
pub use trader::{TraderCharacter, TraderLevel};
