//! Readers for the game's XML-based definition files.
//!
//! Template, tag and level files use the LSX layout:
//!
//! ```text
//! <save>
//!   <region id="Templates">
//!     <node id="Templates">
//!       <children>
//!         <node id="GameObjects">
//!           <attribute id="MapKey" type="FixedString" value="..." />
//!           <children> ... </children>
//!         </node>
//! ```
//!
//! The localization table uses a separate flat `contentList` layout.
//!
//! # Usage
//!
//! ```ignore
//! use lootgen::parser::parse_lsx_file;
//!
//! let doc = parse_lsx_file(Path::new("RootTemplates/_merged.lsx"))?;
//! for node in doc.region_nodes("Templates") {
//!     println!("{} children", node.children.len());
//! }
//! ```

mod localization;
mod lsx;
mod node;

pub use localization::parse_localization;
pub use lsx::{parse_lsx, parse_lsx_file};
pub use node::{Attribute, Document, Node, Region};
