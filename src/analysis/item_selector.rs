use super::classifier::BuildArchetype;
use super::item_index::{CategorizedItemPools, ItemCategory};
use super::records::ItemRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;

const MAX_STARTERS: usize = 2;
const MAX_BOOTS: usize = 2;
const CORE_MYTHICS: usize = 1;
const CORE_LEGENDARIES: usize = 2;
const MAX_LUXURY: usize = 3;

const CASTER_BOOT_MARKERS: &[&str] = &[
    "magic penetration",
    "ability haste",
    "마법 관통력",
    "스킬 가속",
];
const SUPPORT_MARKERS: &[&str] = &["support", "서포터"];

/// Tag predicate for one pool. An item passes when it carries every `required`
/// tag and matches at least one of `any_tag` / `description_any`. With both
/// alternatives empty the second half is vacuously true.
#[derive(Debug, Clone, Copy)]
pub struct ItemFilter {
    pub required: &'static [&'static str],
    pub any_tag: &'static [&'static str],
    pub description_any: &'static [&'static str],
}

impl ItemFilter {
    const fn any(tags: &'static [&'static str]) -> Self {
        ItemFilter {
            required: &[],
            any_tag: tags,
            description_any: &[],
        }
    }

    const fn or_description(self, markers: &'static [&'static str]) -> Self {
        ItemFilter {
            description_any: markers,
            ..self
        }
    }

    pub fn matches(&self, item: &ItemRecord) -> bool {
        if !self.required.iter().all(|t| item.has_tag(t)) {
            return false;
        }
        if self.any_tag.is_empty() && self.description_any.is_empty() {
            return true;
        }
        self.any_tag.iter().any(|t| item.has_tag(t))
            || self
                .description_any
                .iter()
                .any(|m| item.description_mentions(m))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ArchetypeFilters {
    pub starters: ItemFilter,
    pub boots: ItemFilter,
    /// Applied to both the mythic and the legendary pool.
    pub completed: ItemFilter,
}

impl ArchetypeFilters {
    pub fn for_archetype(archetype: BuildArchetype) -> Self {
        const DEFENSIVE: &[&str] = &["Health", "Armor", "SpellBlock"];
        const RESISTS: &[&str] = &["Armor", "SpellBlock"];
        const NO_TAGS: &[&str] = &[];

        match archetype {
            BuildArchetype::Ap => ArchetypeFilters {
                starters: ItemFilter::any(&["SpellDamage", "Mana"]),
                boots: ItemFilter::any(NO_TAGS).or_description(CASTER_BOOT_MARKERS),
                completed: ItemFilter::any(&["SpellDamage"]),
            },
            BuildArchetype::Ad => ArchetypeFilters {
                starters: ItemFilter::any(&["Damage", "LifeSteal"]),
                boots: ItemFilter::any(&["Armor", "AttackSpeed"])
                    .or_description(&["lethality", "물리 관통력"]),
                completed: ItemFilter::any(&["Damage", "ArmorPenetration"]),
            },
            BuildArchetype::Adc => ArchetypeFilters {
                starters: ItemFilter::any(&["Damage", "LifeSteal"]),
                boots: ItemFilter::any(&["AttackSpeed"]),
                completed: ItemFilter {
                    required: &["Damage"],
                    any_tag: &["CriticalStrike", "AttackSpeed"],
                    description_any: &[],
                },
            },
            BuildArchetype::Tank => ArchetypeFilters {
                starters: ItemFilter::any(DEFENSIVE),
                boots: ItemFilter::any(RESISTS),
                completed: ItemFilter::any(DEFENSIVE),
            },
            BuildArchetype::ApSupport => ArchetypeFilters {
                starters: ItemFilter::any(&["SpellDamage", "Mana", "GoldPer"])
                    .or_description(SUPPORT_MARKERS),
                boots: ItemFilter::any(NO_TAGS).or_description(CASTER_BOOT_MARKERS),
                completed: ItemFilter::any(&["SpellDamage", "ManaRegen"])
                    .or_description(SUPPORT_MARKERS),
            },
            BuildArchetype::TankSupport => ArchetypeFilters {
                starters: ItemFilter::any(&["Health", "Armor", "GoldPer"])
                    .or_description(SUPPORT_MARKERS),
                boots: ItemFilter::any(RESISTS),
                completed: ItemFilter::any(DEFENSIVE).or_description(SUPPORT_MARKERS),
            },
        }
    }

    pub fn for_category(&self, category: ItemCategory) -> &ItemFilter {
        match category {
            ItemCategory::Starter => &self.starters,
            ItemCategory::Boots => &self.boots,
            ItemCategory::Mythic | ItemCategory::Legendary => &self.completed,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemBundle {
    pub starters: Vec<ItemRecord>,
    pub boots: Vec<ItemRecord>,
    pub core_items: Vec<ItemRecord>,
    pub luxury_items: Vec<ItemRecord>,
}

pub struct ItemSelector;

impl ItemSelector {
    pub fn select(archetype: BuildArchetype, pools: &CategorizedItemPools) -> ItemBundle {
        let filters = ArchetypeFilters::for_archetype(archetype);
        let ranked = |category| Self::ranked_pool(pools, &filters, category);

        let starters = ranked(ItemCategory::Starter);
        let boots = ranked(ItemCategory::Boots);
        let mythics = ranked(ItemCategory::Mythic);
        let legendaries = ranked(ItemCategory::Legendary);

        let core_items = mythics
            .iter()
            .take(CORE_MYTHICS)
            .chain(legendaries.iter().take(CORE_LEGENDARIES))
            .cloned()
            .collect();

        let bundle = ItemBundle {
            starters: starters.into_iter().take(MAX_STARTERS).collect(),
            boots: boots.into_iter().take(MAX_BOOTS).collect(),
            core_items,
            luxury_items: legendaries.into_iter().take(MAX_LUXURY).collect(),
        };

        debug!(
            archetype = %archetype,
            starters = bundle.starters.len(),
            boots = bundle.boots.len(),
            core = bundle.core_items.len(),
            luxury = bundle.luxury_items.len(),
            "selected items"
        );

        bundle
    }

    /// Filtered pool, most expensive first. Ties keep catalog order.
    fn ranked_pool(
        pools: &CategorizedItemPools,
        filters: &ArchetypeFilters,
        category: ItemCategory,
    ) -> Vec<ItemRecord> {
        let filter = filters.for_category(category);
        let mut items: Vec<ItemRecord> = pools
            .pool(category)
            .iter()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect();
        items.sort_by(|a, b| b.total_cost.cmp(&a.total_cost));
        items
    }
}
