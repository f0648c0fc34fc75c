//! Starter document offered by "new from template".

/// A complete, valid `.scard` document with every registered field.
pub const TEMPLATE: &str = r#"# Template for a Scard file
id = "unique_card_id"
# one of COMMON, UNCOMMON, RARE, EPIC, LEGENDARY
rarity = "COMMON"
npcName = "NPC Name"
npcSpeed = 1.0f
npcPassing = 10
npcShooting = 10
# Add other fields as needed
"#;
