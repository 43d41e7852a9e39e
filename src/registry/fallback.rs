//! Attribute lookup through the resolved ancestry.

use crate::diagnostics::{Diagnostic, Report};
use crate::types::{Item, ItemData};

use super::LayeredTable;

/// The item's own non-blank value for an attribute, else the value of the
/// nearest ancestor that declares one.
///
/// Ancestors are found by key, so templates sharing a name never shadow each
/// other. Requires a resolved table.
pub fn inherited_attribute<'a, F>(item: &'a Item, items: &'a LayeredTable<Item>, select: F) -> Option<&'a str>
where
    F: Fn(&'a ItemData) -> Option<&'a str>,
{
    let non_blank = |data: &'a ItemData| select(data).filter(|v| !v.trim().is_empty());

    non_blank(&item.data).or_else(|| {
        item.resolved_data
            .parent_keys
            .iter()
            .filter_map(|key| items.get(key))
            .find_map(|ancestor| non_blank(&ancestor.data))
    })
}

/// Like [`inherited_attribute`], recording a warning when nothing is found.
pub fn resolve_attribute<'a, F>(
    item: &'a Item,
    items: &'a LayeredTable<Item>,
    attribute: &str,
    select: F,
    report: &mut Report,
) -> Option<&'a str>
where
    F: Fn(&'a ItemData) -> Option<&'a str>,
{
    let found = inherited_attribute(item, items, select);
    if found.is_none() {
        report.push(
            Diagnostic::warning(
                "lootgen::fallback::missing-attribute",
                format!("Couldn't find {} for {} / {}", attribute, item.name, item.map_key),
            )
            .in_source(item.path.clone()),
        );
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::resolve_inheritance;

    fn item(key: &str, name: &str, parent: Option<&str>, stats: Option<&str>) -> Item {
        Item::new(
            key,
            name,
            "a.lsx",
            ItemData {
                parent_template_id: parent.map(String::from),
                stats: stats.map(String::from),
                ..Default::default()
            },
        )
    }

    fn resolved(items: Vec<Item>) -> LayeredTable<Item> {
        let mut table: LayeredTable<Item> = items.into_iter().map(|i| (i.map_key.clone(), i)).collect();
        resolve_inheritance(&mut table, &mut Report::new());
        table
    }

    fn stats(data: &ItemData) -> Option<&str> {
        data.stats.as_deref()
    }

    #[test]
    fn test_own_value_wins() {
        let items = resolved(vec![
            item("a", "A", Some("b"), Some("OWN")),
            item("b", "B", None, Some("PARENT")),
        ]);

        assert_eq!(inherited_attribute(items.get("a").unwrap(), &items, stats), Some("OWN"));
    }

    #[test]
    fn test_nearest_ancestor_value() {
        let items = resolved(vec![
            item("a", "A", Some("b"), None),
            item("b", "B", Some("c"), Some("S1")),
            item("c", "C", None, Some("S0")),
        ]);

        assert_eq!(inherited_attribute(items.get("a").unwrap(), &items, stats), Some("S1"));
    }

    #[test]
    fn test_blank_values_are_skipped() {
        let items = resolved(vec![
            item("a", "A", Some("b"), Some(" ")),
            item("b", "B", Some("c"), Some("")),
            item("c", "C", None, Some("S0")),
        ]);

        assert_eq!(inherited_attribute(items.get("a").unwrap(), &items, stats), Some("S0"));
    }

    #[test]
    fn test_lookup_is_by_key_not_name() {
        let items = resolved(vec![
            item("a", "A", Some("b"), None),
            item("b", "SHARED", None, Some("RIGHT")),
            item("x", "SHARED", None, Some("WRONG")),
        ]);

        assert_eq!(inherited_attribute(items.get("a").unwrap(), &items, stats), Some("RIGHT"));
    }

    #[test]
    fn test_missing_attribute_is_reported() {
        let items = resolved(vec![
            item("a", "A", Some("missing"), None),
        ]);
        let mut report = Report::new();

        let found = resolve_attribute(items.get("a").unwrap(), &items, "Stats", stats, &mut report);

        assert_eq!(found, None);
        assert_eq!(report.count_code("lootgen::fallback::missing-attribute"), 1);
        assert_eq!(
            report.iter().next().map(|d| d.message.as_str()),
            Some("Couldn't find Stats for A / a")
        );
    }
}
