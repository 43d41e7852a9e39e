use std::path::PathBuf;

use crate::diagnostics::{Diagnostic, Report};
use crate::parser::{parse_lsx_file, Document};

use super::LookupTable;

/// Load tag names from every tag definition file, in load order.
///
/// Files that fail to parse are reported and skipped.
pub fn load_tag_names(files: &[PathBuf], report: &mut Report) -> LookupTable {
    let mut table = LookupTable::new();

    for path in files {
        match parse_lsx_file(path) {
            Ok(doc) => {
                for (guid, name) in tag_names_from_document(&doc, report) {
                    table.insert(guid, name);
                }
            }
            Err(e) => report.push(
                Diagnostic::error("lootgen::parse::tags", e.to_string())
                    .in_source(path.display().to_string()),
            ),
        }
    }

    table
}

/// Extract `(UUID, Name)` pairs from `region[Tags]/node[Tags]`.
pub fn tag_names_from_document(doc: &Document, report: &mut Report) -> Vec<(String, String)> {
    doc.region_nodes("Tags")
        .filter(|node| node.id == "Tags")
        .filter_map(|node| match (node.value("UUID"), node.value("Name")) {
            (Some(guid), Some(name)) if !guid.is_empty() => Some((guid.to_string(), name.to_string())),
            _ => {
                report.warning(
                    "lootgen::extract::incomplete-tag",
                    "Tag definition without UUID or Name skipped",
                );
                None
            }
        })
        .collect()
}
