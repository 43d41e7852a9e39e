use std::path::PathBuf;

use crate::diagnostics::Report;
use crate::discovery::SourceTree;
use crate::lookup::Lookups;
use crate::parser::{parse_lsx_file, Document, Node};
use crate::registry::LayeredTable;
use crate::types::Character;

use super::{game_objects, non_empty, report_unreadable, required_identity, tags, text, value, CHARACTER_TYPE};

/// Placeholder treasure reference the game uses for "no table".
const EMPTY_TREASURE: &str = "Empty";

/// Extract character placements from files given in load order.
pub fn extract_characters(
    files: &[PathBuf],
    tree: &SourceTree,
    lookups: &Lookups,
    report: &mut Report,
) -> LayeredTable<Character> {
    let mut table = LayeredTable::new();

    for path in files {
        let source = tree.relative(path);
        match parse_lsx_file(path) {
            Ok(doc) => {
                for character in characters_from_document(&doc, &source, lookups, report) {
                    table.insert_or_replace(character.map_key.clone(), character);
                }
            }
            Err(e) => report_unreadable(report, source, e),
        }
    }

    table
}

/// Extract the character records of one parsed document.
pub fn characters_from_document(
    doc: &Document,
    source: &str,
    lookups: &Lookups,
    report: &mut Report,
) -> Vec<Character> {
    let mut characters = Vec::new();

    for node in game_objects(doc, CHARACTER_TYPE) {
        let Some((map_key, name)) = required_identity(node, CHARACTER_TYPE, source, report) else {
            continue;
        };

        characters.push(Character {
            template: value(node, "TemplateName"),
            position: node
                .child("Transform")
                .and_then(|t| t.value("Position"))
                .map(String::from),
            display_name: text(node, "DisplayName", lookups),
            tags: tags(node, lookups),
            treasures_tables: treasure_tables(node, "Treasures"),
            trade_treasure_tables: treasure_tables(node, "TradeTreasures"),
            ..Character::new(map_key, name)
        });
    }

    characters
}

fn treasure_tables(node: &Node, group: &str) -> Option<Vec<String>> {
    non_empty(
        node.grouped_values(group, "TreasureItem")
            .filter(|t| *t != EMPTY_TREASURE)
            .map(String::from)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_lsx;
    use pretty_assertions::assert_eq;

    const CHARACTERS: &str = r#"<save>
    <region id="Templates">
        <node id="Templates">
            <children>
                <node id="GameObjects">
                    <attribute id="MapKey" type="FixedString" value="char-1" />
                    <attribute id="Name" type="LSString" value="S_DEN_Arron" />
                    <attribute id="TemplateName" type="FixedString" value="tmpl-arron" />
                    <attribute id="Type" type="FixedString" value="character" />
                    <attribute id="DisplayName" type="TranslatedString" handle="h-arron" version="1" />
                    <children>
                        <node id="Tags">
                            <children>
                                <node id="Tag"><attribute id="Object" type="guid" value="guid-trader" /></node>
                            </children>
                        </node>
                        <node id="Transform">
                            <attribute id="Position" type="fvec3" value="1 2 3" />
                        </node>
                        <node id="Treasures">
                            <children>
                                <node id="TreasureItem"><attribute id="Object" type="FixedString" value="Empty" /></node>
                            </children>
                        </node>
                        <node id="TradeTreasures">
                            <children>
                                <node id="TreasureItem"><attribute id="Object" type="FixedString" value="DEN_Arron_Trade" /></node>
                                <node id="TreasureItem"><attribute id="Object" type="FixedString" value="Empty" /></node>
                            </children>
                        </node>
                    </children>
                </node>
                <node id="GameObjects">
                    <attribute id="MapKey" type="FixedString" value="item-1" />
                    <attribute id="Name" type="LSString" value="CONT_Chest" />
                    <attribute id="Type" type="FixedString" value="item" />
                </node>
            </children>
        </node>
    </region>
</save>"#;

    #[test]
    fn test_characters_from_document() {
        let doc = parse_lsx(CHARACTERS).unwrap();
        let lookups = Lookups::new(
            [("h-arron", "Arron")].into_iter().collect(),
            [("guid-trader", "TRADER")].into_iter().collect(),
        );
        let mut report = Report::new();

        let characters = characters_from_document(&doc, "Levels/DEN/Characters/_merged.lsx", &lookups, &mut report);

        assert!(report.is_ok());
        assert_eq!(
            characters,
            vec![Character {
                name: "S_DEN_Arron".to_string(),
                map_key: "char-1".to_string(),
                template: Some("tmpl-arron".to_string()),
                position: Some("1 2 3".to_string()),
                display_name: Some("Arron".to_string()),
                tags: Some(vec!["TRADER".to_string()]),
                treasures_tables: None,
                trade_treasure_tables: Some(vec!["DEN_Arron_Trade".to_string()]),
            }]
        );
    }

    #[test]
    fn test_unlocalized_display_name_keeps_handle() {
        let doc = parse_lsx(CHARACTERS).unwrap();
        let mut report = Report::new();

        let characters = characters_from_document(&doc, "a.lsx", &Lookups::default(), &mut report);

        assert_eq!(characters[0].display_name.as_deref(), Some("h-arron"));
        assert_eq!(characters[0].tags, Some(vec!["guid-trader".to_string()]));
    }
}
