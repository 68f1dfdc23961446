use crate::analysis::records::{
    Ability, ChampionRecord, ItemCatalog, ItemRecord, LevelUpNotes, StatImportance,
};
use serde::Deserialize;
use std::collections::HashMap;

// Champion detail response: champion/{id}.json
#[derive(Debug, Deserialize)]
pub struct ChampionDetailResponse {
    pub data: HashMap<String, ChampionDto>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChampionDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub info: ChampionInfoDto,
    #[serde(default)]
    pub passive: PassiveDto,
    #[serde(default)]
    pub spells: Vec<SpellDto>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ChampionInfoDto {
    #[serde(default)]
    pub attack: u8,
    #[serde(default)]
    pub defense: u8,
    #[serde(default)]
    pub magic: u8,
    #[serde(default)]
    pub difficulty: u8,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PassiveDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SpellDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tooltip: String,
    #[serde(default)]
    pub cooldown: Vec<f64>,
    #[serde(default)]
    pub cost: Vec<f64>,
    pub leveltip: Option<LevelTipDto>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LevelTipDto {
    #[serde(default)]
    pub label: Vec<String>,
    #[serde(default)]
    pub effect: Vec<String>,
}

// Item catalog response: item.json
#[derive(Debug, Deserialize)]
pub struct ItemCatalogResponse {
    pub data: HashMap<String, ItemDto>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ItemDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub gold: GoldDto,
    /// Absent for base components.
    pub depth: Option<u8>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub into: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct GoldDto {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub purchasable: bool,
}

impl From<ChampionDto> for ChampionRecord {
    fn from(dto: ChampionDto) -> Self {
        let passive = Ability {
            name: dto.passive.name,
            description: dto.passive.description,
            ..Ability::default()
        };

        let abilities = std::iter::once(passive)
            .chain(dto.spells.into_iter().map(Ability::from))
            .collect();

        ChampionRecord {
            id: dto.id,
            name: dto.name,
            role_tags: dto.tags,
            stat_importance: StatImportance {
                attack: dto.info.attack,
                defense: dto.info.defense,
                magic: dto.info.magic,
                difficulty_level: dto.info.difficulty,
            },
            abilities,
        }
    }
}

impl From<SpellDto> for Ability {
    fn from(spell: SpellDto) -> Self {
        Ability {
            name: spell.name,
            description: spell.description,
            tooltip: spell.tooltip,
            cooldown_per_level: spell.cooldown,
            cost_per_level: spell.cost,
            level_up_notes: spell.leveltip.map(|tip| LevelUpNotes {
                label: tip.label,
                effect: tip.effect,
            }),
        }
    }
}

impl ItemDto {
    pub fn into_record(self, id: String) -> ItemRecord {
        ItemRecord {
            id,
            name: self.name,
            total_cost: self.gold.total,
            purchasable: self.gold.purchasable,
            build_depth: self.depth.unwrap_or(1),
            tags: self.tags.into_iter().collect(),
            description: self.description,
            builds_into: self.into.filter(|ids| !ids.is_empty()),
        }
    }
}

impl ChampionDetailResponse {
    /// The detail payload holds a single champion keyed by its id.
    pub fn into_record(self) -> Option<ChampionRecord> {
        self.data.into_values().next().map(ChampionRecord::from)
    }
}

impl ItemCatalogResponse {
    pub fn into_catalog(self) -> ItemCatalog {
        self.data
            .into_iter()
            .map(|(id, dto)| (id.clone(), dto.into_record(id)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn champion_passive_lands_at_index_zero() {
        let json = r#"{"data": {"Annie": {
            "id": "Annie", "key": "1", "name": "Annie", "title": "the Dark Child", "tags": ["Mage"],
            "info": {"attack": 2, "defense": 3, "magic": 10, "difficulty": 6},
            "passive": {"name": "Pyromania", "description": "stuns"},
            "spells": [
                {"id": "AnnieQ", "name": "Disintegrate", "description": "magic damage", "tooltip": "",
                 "cooldown": [4, 4, 4, 4, 4], "cost": [60, 65, 70, 75, 80],
                 "leveltip": {"label": ["Damage"], "effect": ["{{ e1 }} -> {{ e1NL }}"]}}
            ]}}}"#;
        let record = serde_json::from_str::<ChampionDetailResponse>(json)
            .unwrap()
            .into_record()
            .unwrap();
        assert_eq!(record.abilities.len(), 2);
        assert_eq!(record.abilities[0].name, "Pyromania");
        assert_eq!(record.abilities[1].cooldown_per_level.len(), 5);
        assert_eq!(record.stat_importance.magic, 10);
    }

    #[test]
    fn item_depth_defaults_to_base_component() {
        let json = r#"{"data": {
            "1001": {"name": "Boots", "gold": {"total": 300, "purchasable": true},
                     "tags": ["Boots"], "into": ["3006"]},
            "3031": {"name": "Infinity Edge", "gold": {"total": 3400, "purchasable": true},
                     "depth": 3, "tags": ["Damage", "CriticalStrike"]}
        }}"#;
        let catalog = serde_json::from_str::<ItemCatalogResponse>(json)
            .unwrap()
            .into_catalog();
        assert_eq!(catalog["1001"].build_depth, 1);
        assert!(catalog["1001"].builds_into.is_some());
        assert_eq!(catalog["3031"].build_depth, 3);
        assert!(catalog["3031"].builds_into.is_none());
    }
}
