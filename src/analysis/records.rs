use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Item catalog keyed by item id. Ordered so every pass over it is deterministic.
pub type ItemCatalog = BTreeMap<String, ItemRecord>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatImportance {
    pub attack: u8,
    pub defense: u8,
    pub magic: u8,
    pub difficulty_level: u8,
}

/// Per-rank scaling notes. `label` and `effect` are parallel arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelUpNotes {
    pub label: Vec<String>,
    pub effect: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Ability {
    pub name: String,
    pub description: String,
    pub tooltip: String,
    pub cooldown_per_level: Vec<f64>,
    pub cost_per_level: Vec<f64>,
    pub level_up_notes: Option<LevelUpNotes>,
}

impl Ability {
    /// Lowercased `description + tooltip`, the text every keyword scan runs against.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.description, self.tooltip).to_lowercase()
    }
}

/// Skill slots that receive points. The passive (index 0) never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AbilitySlot {
    Q,
    W,
    E,
    R,
}

impl AbilitySlot {
    pub const ALL: [AbilitySlot; 4] = [AbilitySlot::Q, AbilitySlot::W, AbilitySlot::E, AbilitySlot::R];

    /// Position in `ChampionRecord::abilities` (1..=4).
    pub fn ability_index(self) -> usize {
        self.row() + 1
    }

    /// Row in the skill schedule matrix (0..=3).
    pub fn row(self) -> usize {
        match self {
            AbilitySlot::Q => 0,
            AbilitySlot::W => 1,
            AbilitySlot::E => 2,
            AbilitySlot::R => 3,
        }
    }

    pub fn from_ability_index(index: usize) -> Option<Self> {
        match index {
            1 => Some(AbilitySlot::Q),
            2 => Some(AbilitySlot::W),
            3 => Some(AbilitySlot::E),
            4 => Some(AbilitySlot::R),
            _ => None,
        }
    }

    pub fn is_ultimate(self) -> bool {
        self == AbilitySlot::R
    }

    pub fn label(self) -> &'static str {
        match self {
            AbilitySlot::Q => "Q",
            AbilitySlot::W => "W",
            AbilitySlot::E => "E",
            AbilitySlot::R => "R",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChampionRecord {
    pub id: String,
    pub name: String,
    /// First entry is the primary role.
    pub role_tags: Vec<String>,
    pub stat_importance: StatImportance,
    /// Index 0 is the passive, 1..=4 are Q, W, E, R.
    pub abilities: Vec<Ability>,
}

impl ChampionRecord {
    pub fn ability(&self, slot: AbilitySlot) -> Option<&Ability> {
        self.abilities.get(slot.ability_index())
    }

    /// The non-passive abilities that are present, with their slot.
    pub fn spells(&self) -> impl Iterator<Item = (AbilitySlot, &Ability)> {
        AbilitySlot::ALL
            .into_iter()
            .filter_map(move |slot| self.ability(slot).map(|a| (slot, a)))
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.role_tags.iter().any(|t| t.eq_ignore_ascii_case(role))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemRecord {
    pub id: String,
    pub name: String,
    pub total_cost: u32,
    pub purchasable: bool,
    /// 1 = base component, 2 = mid tier, 3+ = completed.
    pub build_depth: u8,
    pub tags: BTreeSet<String>,
    pub description: String,
    pub builds_into: Option<Vec<String>>,
}

impl ItemRecord {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn description_mentions(&self, marker: &str) -> bool {
        self.description.to_lowercase().contains(&marker.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_indices_follow_fixed_qwer_order() {
        for (i, slot) in AbilitySlot::ALL.iter().enumerate() {
            assert_eq!(slot.row(), i);
            assert_eq!(AbilitySlot::from_ability_index(i + 1), Some(*slot));
        }
        assert_eq!(AbilitySlot::from_ability_index(0), None);
        assert_eq!(AbilitySlot::from_ability_index(5), None);
    }

    #[test]
    fn sparse_champion_json_fills_defaults() {
        let champ: ChampionRecord = serde_json::from_str(r#"{"name": "Nobody"}"#).unwrap();
        assert!(champ.role_tags.is_empty());
        assert_eq!(champ.stat_importance, StatImportance::default());
        assert_eq!(champ.spells().count(), 0);
    }

    #[test]
    fn spells_skip_passive() {
        let champ = ChampionRecord {
            abilities: vec![
                Ability { name: "passive".into(), ..Ability::default() },
                Ability { name: "q".into(), ..Ability::default() },
                Ability { name: "w".into(), ..Ability::default() },
            ],
            ..ChampionRecord::default()
        };
        let names: Vec<_> = champ.spells().map(|(s, a)| (s, a.name.as_str())).collect();
        assert_eq!(names, vec![(AbilitySlot::Q, "q"), (AbilitySlot::W, "w")]);
    }
}
