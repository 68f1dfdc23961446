use super::ability_scorer::{AbilityScore, AbilityScorer};
use super::classifier::{BuildArchetype, ChampionClassifier, ChampionProfile};
use super::fallback::{FallbackCatalog, ItemStub};
use super::item_index::ItemCatalogIndexer;
use super::item_selector::{ItemBundle, ItemSelector};
use super::records::{AbilitySlot, ChampionRecord, ItemCatalog, ItemRecord};
use super::skill_schedule::{SkillSchedule, SkillScheduleBuilder, MAX_LEVEL};
use crate::api::endpoints;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedItem {
    pub id: String,
    pub name: String,
    pub total_cost: u32,
    pub icon_url: String,
}

impl RecommendedItem {
    fn from_record(item: &ItemRecord, cdn: &str) -> Self {
        RecommendedItem {
            id: item.id.clone(),
            name: item.name.clone(),
            total_cost: item.total_cost,
            icon_url: endpoints::item_icon_url(cdn, &item.id),
        }
    }

    fn from_stub(stub: &ItemStub, cdn: &str) -> Self {
        RecommendedItem {
            id: stub.id.clone(),
            name: stub.name.clone(),
            total_cost: stub.total_cost,
            icon_url: endpoints::item_icon_url(cdn, &stub.id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BuildSource {
    Catalog,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildRecommendation {
    pub champion_id: String,
    pub champion_name: String,
    pub archetype: BuildArchetype,
    pub profile: ChampionProfile,
    pub ability_scores: Vec<AbilityScore>,
    pub starters: Vec<RecommendedItem>,
    pub boots: Vec<RecommendedItem>,
    pub core_items: Vec<RecommendedItem>,
    pub luxury_items: Vec<RecommendedItem>,
    /// Rows Q, W, E, R; one column per level.
    pub skill_order: [[bool; MAX_LEVEL]; 4],
    pub level_sequence: Vec<Option<AbilitySlot>>,
    pub max_order: Vec<AbilitySlot>,
    pub source: BuildSource,
}

pub struct BuildRecommender;

impl BuildRecommender {
    /// Full pipeline against a live item catalog. `cdn` is the versioned CDN root
    /// used for icon URLs.
    pub fn recommend(champion: &ChampionRecord, catalog: &ItemCatalog, cdn: &str) -> BuildRecommendation {
        let profile = ChampionClassifier::classify(champion);
        let pools = ItemCatalogIndexer::index(catalog);
        let bundle = ItemSelector::select(profile.archetype, &pools);

        let items = |list: &[ItemRecord]| -> Vec<RecommendedItem> {
            list.iter().map(|i| RecommendedItem::from_record(i, cdn)).collect()
        };
        let ItemBundle {
            starters,
            boots,
            core_items,
            luxury_items,
        } = bundle;

        Self::assemble(
            champion,
            profile,
            [items(&starters), items(&boots), items(&core_items), items(&luxury_items)],
            BuildSource::Catalog,
        )
    }

    /// Classifies and schedules as usual but takes items from the static table.
    pub fn fallback(champion: &ChampionRecord, fallback: &FallbackCatalog, cdn: &str) -> BuildRecommendation {
        let profile = ChampionClassifier::classify(champion);
        let bundle = fallback.bundle_for(profile.archetype);

        let items = |list: &[ItemStub]| -> Vec<RecommendedItem> {
            list.iter().map(|s| RecommendedItem::from_stub(s, cdn)).collect()
        };

        Self::assemble(
            champion,
            profile,
            [
                items(&bundle.starters),
                items(&bundle.boots),
                items(&bundle.core_items),
                items(&bundle.luxury_items),
            ],
            BuildSource::Fallback,
        )
    }

    fn assemble(
        champion: &ChampionRecord,
        profile: ChampionProfile,
        items: [Vec<RecommendedItem>; 4],
        source: BuildSource,
    ) -> BuildRecommendation {
        let ability_scores = AbilityScorer::score_champion(champion);
        let schedule: SkillSchedule = SkillScheduleBuilder::build(&ability_scores);
        let [starters, boots, core_items, luxury_items] = items;

        info!(
            champion = %champion.name,
            archetype = %profile.archetype,
            source = ?source,
            "built recommendation"
        );

        BuildRecommendation {
            champion_id: champion.id.clone(),
            champion_name: champion.name.clone(),
            archetype: profile.archetype,
            profile,
            ability_scores,
            starters,
            boots,
            core_items,
            luxury_items,
            skill_order: *schedule.rows(),
            level_sequence: schedule.level_sequence(),
            max_order: schedule.max_order().to_vec(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::records::{Ability, StatImportance};

    const CDN: &str = "https://cdn.test/14.25.1";

    fn support() -> ChampionRecord {
        ChampionRecord {
            id: "Lulu".into(),
            name: "Lulu".into(),
            role_tags: vec!["Support".into(), "Mage".into()],
            stat_importance: StatImportance {
                attack: 2,
                defense: 5,
                magic: 7,
                difficulty_level: 5,
            },
            abilities: vec![
                Ability::default(),
                Ability {
                    description: "Deals magic damage and slows".into(),
                    ..Ability::default()
                },
                Ability::default(),
                Ability::default(),
                Ability::default(),
            ],
        }
    }

    #[test]
    fn fallback_uses_table_for_archetype() {
        let table = FallbackCatalog::embedded().unwrap();
        let rec = BuildRecommender::fallback(&support(), &table, CDN);
        assert_eq!(rec.archetype, BuildArchetype::Ap);
        assert_eq!(rec.source, BuildSource::Fallback);
        assert_eq!(rec.starters[0].id, "1056");
        assert_eq!(rec.starters[0].icon_url, "https://cdn.test/14.25.1/img/item/1056.png");
    }

    #[test]
    fn empty_catalog_still_schedules_skills() {
        let rec = BuildRecommender::recommend(&support(), &ItemCatalog::new(), CDN);
        assert_eq!(rec.source, BuildSource::Catalog);
        assert!(rec.starters.is_empty() && rec.core_items.is_empty());
        assert_eq!(rec.level_sequence.iter().flatten().count(), MAX_LEVEL);
        assert_eq!(rec.max_order[0], AbilitySlot::Q);
    }

    #[test]
    fn output_json_uses_camel_case_labels() {
        let rec = BuildRecommender::recommend(&support(), &ItemCatalog::new(), CDN);
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["championName"], "Lulu");
        assert_eq!(json["archetype"], "AP");
        assert_eq!(json["skillOrder"].as_array().unwrap().len(), 4);
        assert_eq!(json["source"], "catalog");
    }
}
