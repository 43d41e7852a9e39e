use crate::lookup::LookupTable;
use crate::registry::LayeredTable;
use crate::types::{Character, Level, TraderCharacter, TraderLevel};

/// Tag carried by characters that run a shop.
pub const TRADER_TAG: &str = "TRADER";

/// One `Level` per level identifier, named through `level_names`.
pub fn group_levels(
    levels: &LayeredTable<LayeredTable<Character>>,
    level_names: &LookupTable,
) -> Vec<Level> {
    levels
        .iter()
        .map(|(id, characters)| Level {
            name: level_names.get_or_raw(id),
            id: id.to_string(),
            characters: characters.values().cloned().collect(),
        })
        .collect()
}

/// Levels reduced to their traders. Levels without traders are left out.
pub fn trader_roster(levels: &[Level]) -> Vec<TraderLevel> {
    levels
        .iter()
        .filter_map(|level| {
            let traders: Vec<TraderCharacter> = level
                .characters
                .iter()
                .filter(|c| c.has_tag(TRADER_TAG))
                .map(|c| TraderCharacter {
                    trader_name: c.display_name.clone(),
                    trader_id: c.name.clone(),
                    trader_treasure_tables: c.trade_treasure_tables.clone(),
                })
                .collect();

            (!traders.is_empty()).then(|| TraderLevel {
                level_name: level.name.clone(),
                level_id: level.id.clone(),
                traders,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn trader(map_key: &str, name: &str) -> Character {
        Character {
            display_name: Some("Arron".to_string()),
            tags: Some(vec!["HUMAN".to_string(), TRADER_TAG.to_string()]),
            trade_treasure_tables: Some(vec!["DEN_Arron_Trade".to_string()]),
            ..Character::new(map_key, name)
        }
    }

    fn levels() -> LayeredTable<LayeredTable<Character>> {
        let den: LayeredTable<Character> = [
            ("c1", trader("c1", "S_DEN_Arron")),
            ("c2", Character::new("c2", "S_DEN_Guard")),
        ]
        .into_iter()
        .collect();
        let beach: LayeredTable<Character> =
            [("c3", Character::new("c3", "S_TUT_Zombie"))].into_iter().collect();

        [("DEN_Main_A", den), ("TUT_Avernus_C", beach)].into_iter().collect()
    }

    #[test]
    fn test_group_levels_applies_names() {
        let names: LookupTable = [("DEN_Main_A", "Druid Grove")].into_iter().collect();

        let grouped = group_levels(&levels(), &names);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].name, "Druid Grove");
        assert_eq!(grouped[0].id, "DEN_Main_A");
        assert_eq!(grouped[0].characters.len(), 2);
        assert_eq!(grouped[1].name, "TUT_Avernus_C");
    }

    #[test]
    fn test_trader_roster_skips_levels_without_traders() {
        let grouped = group_levels(&levels(), &LookupTable::new());

        assert_eq!(
            trader_roster(&grouped),
            vec![TraderLevel {
                level_name: "DEN_Main_A".to_string(),
                level_id: "DEN_Main_A".to_string(),
                traders: vec![TraderCharacter {
                    trader_name: Some("Arron".to_string()),
                    trader_id: "S_DEN_Arron".to_string(),
                    trader_treasure_tables: Some(vec!["DEN_Arron_Trade".to_string()]),
                }],
            }]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(group_levels(&LayeredTable::new(), &LookupTable::new()).is_empty());
        assert!(trader_roster(&[]).is_empty());
    }
}
