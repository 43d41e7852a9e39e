use std::path::PathBuf;

use crate::diagnostics::{Diagnostic, Report};
use crate::discovery::LEVEL_NAMES_FILE;
use crate::parser::{parse_lsx_file, Document};

use super::LookupTable;

/// Load level display names from `Localization/Levels.lsx` of every level
/// root, in load order. Roots without the file are skipped.
///
/// Names are localized through `localization`; an unknown handle is kept
/// verbatim.
pub fn load_level_names(
    level_roots: &[PathBuf],
    localization: &LookupTable,
    report: &mut Report,
) -> LookupTable {
    let mut table = LookupTable::new();

    for root in level_roots {
        let path = root.join(LEVEL_NAMES_FILE);
        if !path.is_file() {
            continue;
        }

        match parse_lsx_file(&path) {
            Ok(doc) => {
                for (id, handle) in level_handles(&doc) {
                    table.insert(id, localization.get_or_raw(handle));
                }
            }
            Err(e) => report.push(
                Diagnostic::error("lootgen::parse::level-names", e.to_string())
                    .in_source(path.display().to_string()),
            ),
        }
    }

    table
}

/// `(UUID, Content handle)` pairs of `TranslatedStringKey` nodes.
fn level_handles(doc: &Document) -> impl Iterator<Item = (&str, &str)> {
    doc.region_nodes("TranslatedStringKeys")
        .flat_map(|node| node.children_named("TranslatedStringKey"))
        .filter_map(|key| Some((key.value("UUID")?, key.handle("Content")?)))
}
