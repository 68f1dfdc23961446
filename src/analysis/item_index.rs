use super::records::{ItemCatalog, ItemRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Control Ward: purchasable and pricey enough to pass the cost floor, but never recommended.
pub const VISION_CONSUMABLE_ID: &str = "2055";

const MIN_COST: u32 = 300;
const MYTHIC_MARKERS: &[&str] = &["mythic", "신화"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemCategory {
    Starter,
    Boots,
    Mythic,
    Legendary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorizedItemPools {
    pub starters: Vec<ItemRecord>,
    pub boots: Vec<ItemRecord>,
    pub mythics: Vec<ItemRecord>,
    pub legendaries: Vec<ItemRecord>,
}

impl CategorizedItemPools {
    pub fn pool(&self, category: ItemCategory) -> &[ItemRecord] {
        match category {
            ItemCategory::Starter => &self.starters,
            ItemCategory::Boots => &self.boots,
            ItemCategory::Mythic => &self.mythics,
            ItemCategory::Legendary => &self.legendaries,
        }
    }

    fn pool_mut(&mut self, category: ItemCategory) -> &mut Vec<ItemRecord> {
        match category {
            ItemCategory::Starter => &mut self.starters,
            ItemCategory::Boots => &mut self.boots,
            ItemCategory::Mythic => &mut self.mythics,
            ItemCategory::Legendary => &mut self.legendaries,
        }
    }

    pub fn len(&self) -> usize {
        self.starters.len() + self.boots.len() + self.mythics.len() + self.legendaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Categorization rules, tried in order. An item lands in the first category
/// whose predicate holds and is never tested against the rest.
pub const CATEGORY_RULES: &[(ItemCategory, fn(&ItemRecord) -> bool)] = &[
    (ItemCategory::Starter, is_starter),
    (ItemCategory::Boots, is_boots),
    (ItemCategory::Mythic, is_mythic),
    (ItemCategory::Legendary, is_legendary),
];

fn is_starter(item: &ItemRecord) -> bool {
    item.total_cost <= 500 && item.build_depth >= 2
}

fn is_boots(item: &ItemRecord) -> bool {
    item.has_tag("Boots") && item.build_depth >= 2
}

fn is_mythic(item: &ItemRecord) -> bool {
    MYTHIC_MARKERS.iter().any(|m| item.description_mentions(m))
}

fn is_legendary(item: &ItemRecord) -> bool {
    item.total_cost >= 2000 && item.builds_into.is_none() && item.build_depth >= 3
}

pub fn is_excluded(item: &ItemRecord) -> bool {
    !item.purchasable
        || item.total_cost < MIN_COST
        || item.id == VISION_CONSUMABLE_ID
        || item.has_tag("Consumable")
        || item.has_tag("Trinket")
}

/// First matching category for an item that passed the exclusion filter.
pub fn categorize(item: &ItemRecord) -> Option<ItemCategory> {
    CATEGORY_RULES
        .iter()
        .find(|(_, matches)| matches(item))
        .map(|(category, _)| *category)
}

pub struct ItemCatalogIndexer;

impl ItemCatalogIndexer {
    pub fn index(catalog: &ItemCatalog) -> CategorizedItemPools {
        let mut pools = CategorizedItemPools::default();
        let mut discarded = 0usize;

        for item in catalog.values().filter(|item| !is_excluded(item)) {
            match categorize(item) {
                Some(category) => pools.pool_mut(category).push(item.clone()),
                None => discarded += 1,
            }
        }

        debug!(
            catalog = catalog.len(),
            starters = pools.starters.len(),
            boots = pools.boots.len(),
            mythics = pools.mythics.len(),
            legendaries = pools.legendaries.len(),
            discarded,
            "indexed item catalog"
        );

        pools
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, cost: u32, depth: u8, tags: &[&str]) -> ItemRecord {
        ItemRecord {
            id: id.into(),
            name: format!("Item {}", id),
            total_cost: cost,
            purchasable: true,
            build_depth: depth,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            description: String::new(),
            builds_into: None,
        }
    }

    fn catalog(items: Vec<ItemRecord>) -> ItemCatalog {
        items.into_iter().map(|i| (i.id.clone(), i)).collect()
    }

    #[test]
    fn cheap_mid_tier_item_is_a_starter() {
        let pools = ItemCatalogIndexer::index(&catalog(vec![item("1", 450, 2, &["Damage"])]));
        assert_eq!(pools.starters.len(), 1);
        assert!(pools.boots.is_empty() && pools.legendaries.is_empty());
    }

    #[test]
    fn exclusions_apply_before_rules() {
        let mut hidden = item("2", 3000, 3, &["Damage"]);
        hidden.purchasable = false;
        let items = vec![
            hidden,
            item("3", 299, 2, &[]),
            item(VISION_CONSUMABLE_ID, 400, 2, &["Vision"]),
            item("4", 400, 2, &["Consumable"]),
            item("5", 400, 2, &["Trinket"]),
        ];
        assert!(ItemCatalogIndexer::index(&catalog(items)).is_empty());
    }

    #[test]
    fn boots_rule_wins_over_legendary_rule() {
        let boots = item("6", 2100, 3, &["Boots"]);
        assert!(is_legendary(&boots));
        let pools = ItemCatalogIndexer::index(&catalog(vec![boots]));
        assert_eq!(pools.boots.len(), 1);
        assert!(pools.legendaries.is_empty());
    }

    #[test]
    fn mythic_marker_in_description() {
        let mut mythic = item("7", 3200, 3, &["SpellDamage"]);
        mythic.description = "<rarityMythic>Mythic Passive:</rarityMythic> stuff".into();
        let mut ko = item("8", 3200, 3, &["Health"]);
        ko.description = "<b>신화급 기본 지속 효과</b>".into();
        let pools = ItemCatalogIndexer::index(&catalog(vec![mythic, ko]));
        assert_eq!(pools.mythics.len(), 2);
        assert!(pools.legendaries.is_empty());
    }

    #[test]
    fn components_and_upgradable_items_are_discarded() {
        let mut upgradable = item("9", 2600, 3, &["Damage"]);
        upgradable.builds_into = Some(vec!["10".into()]);
        let items = vec![item("11", 1300, 2, &["Damage"]), upgradable, item("12", 2500, 2, &[])];
        assert!(ItemCatalogIndexer::index(&catalog(items)).is_empty());
    }
}
