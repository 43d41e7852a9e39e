//! Build command implementation.
//!
//! Reads an unpacked source tree and writes the resolved item, level and
//! trader datasets (and optionally the armour mod files).

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::diagnostics::{check_dangling_parents, check_duplicate_names, print_diagnostics, Report};
use crate::discovery::{collect, discover, normalize_path, SourceTree, ROOT_TEMPLATES_DIR, TAGS_DIR};
use crate::error::{LootError, Result};
use crate::export::{write_items, write_levels, write_traders, ArmourMod, ARMOR_ROOT};
use crate::extract::{extract_items, extract_levels};
use crate::lookup::{load_level_names, load_localization, load_tag_names, Lookups};
use crate::output::{plural, Printer};
use crate::registry::{resolve_inheritance, LayeredTable};
use crate::types::Item;
use crate::views::{group_by_root, group_levels, inherits_from, trader_roster};

/// Resolve game templates into JSON datasets
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Directory holding the unpacked game data.
    ///
    /// A lootgen.yaml in this directory overrides the built-in load order
    /// (`localization`, `templates` and `levels` keys).
    pub source: String,

    /// Directory the datasets are written to (created if missing)
    pub destination: String,

    /// Also write Armour.txt and TreasureTable.txt
    #[arg(long)]
    pub generate_mod: bool,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let source = normalize_path(&args.source);
    let destination = normalize_path(&args.destination);

    let report = build(&source, &destination, args.generate_mod, printer)?;
    print_diagnostics(&report, printer);

    Ok(())
}

/// Run the whole pipeline, returning the recovered problems.
///
/// Structural failures (missing source or localization, unwritable
/// destination) abort with an error.
pub fn build(source: &Path, destination: &Path, generate_mod: bool, printer: &Printer) -> Result<Report> {
    let tree = discover(source)?;
    if tree.has_manifest {
        printer.info("Manifest", "using load order from lootgen.yaml");
    }

    fs::create_dir_all(destination).map_err(|e| LootError::Io {
        path: destination.to_path_buf(),
        message: format!("Failed to create destination directory: {}", e),
    })?;

    let mut report = Report::new();

    let localization = load_localization(&tree.localization_path())?;
    printer.status("Loaded", &plural(localization.len(), "localized string", "localized strings"));

    let tag_files = collect(&tree.template_roots(), TAGS_DIR);
    let tags = load_tag_names(&tag_files, &mut report);
    printer.status("Loaded", &plural(tags.len(), "tag", "tags"));

    let lookups = Lookups::new(localization, tags);

    let items = load_items(&tree, &lookups, &mut report, printer);

    let level_names = load_level_names(&tree.level_roots(), &lookups.localization, &mut report);
    let level_tables = extract_levels(&tree, &lookups, &mut report);
    let levels = group_levels(&level_tables, &level_names);
    let traders = trader_roster(&levels);
    printer.status(
        "Extracted",
        &format!(
            "{} with {} ({} named)",
            plural(levels.len(), "level", "levels"),
            plural(levels.iter().map(|l| l.characters.len()).sum(), "character", "characters"),
            level_names.len()
        ),
    );

    printer.saved(&write_items(items.values(), destination)?);
    printer.saved(&write_levels(&levels, destination)?);
    printer.saved(&write_traders(&traders, destination)?);

    if generate_mod {
        let armour = ArmourMod::generate(&items, &mut report);
        printer.status(
            "Generated",
            &format!(
                "{} for {}",
                plural(armour.armour.len(), "stats entry", "stats entries"),
                plural(inherits_from(&items, ARMOR_ROOT).len(), "armour template", "armour templates")
            ),
        );
        for path in armour.write(destination)? {
            printer.saved(&path);
        }
    }

    Ok(report)
}

fn load_items(tree: &SourceTree, lookups: &Lookups, report: &mut Report, printer: &Printer) -> LayeredTable<Item> {
    let files: Vec<PathBuf> = collect(&tree.template_roots(), ROOT_TEMPLATES_DIR);
    printer.status("Loading", &format!("item templates ({})", plural(files.len(), "file", "files")));

    let mut items = extract_items(&files, tree, lookups, report);
    let summary = resolve_inheritance(&mut items, report);
    printer.status(
        "Resolved",
        &format!(
            "{} under {} ({} with parents, {} dangling)",
            plural(summary.resolved, "item", "items"),
            plural(group_by_root(&items).len(), "root", "roots"),
            summary.with_ancestry,
            summary.dangling
        ),
    );

    report.merge(check_duplicate_names(&items));
    report.merge(check_dangling_parents(&items));

    items
}
