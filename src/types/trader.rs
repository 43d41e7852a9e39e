use serde::Serialize;

/// A level reduced to its traders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TraderLevel {
    pub level_name: String,
    pub level_id: String,
    pub traders: Vec<TraderCharacter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TraderCharacter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trader_name: Option<String>,
    pub trader_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trader_treasure_tables: Option<Vec<String>>,
}
