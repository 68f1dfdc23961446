use super::records::ChampionRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

const MAGIC_DAMAGE_MARKERS: &[&str] = &["magic damage", "마법 피해"];
const PHYSICAL_DAMAGE_MARKERS: &[&str] = &["physical damage", "물리 피해"];
const CROWD_CONTROL_MARKERS: &[&str] = &[
    "stun", "slow", "root", "knock", "기절", "둔화", "속박", "에어본",
];

const IMPORTANCE_THRESHOLD: u8 = 6;
const DURABLE_DEFENSE: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BuildArchetype {
    #[serde(rename = "AP")]
    Ap,
    #[serde(rename = "AD")]
    Ad,
    #[serde(rename = "ADC")]
    Adc,
    Tank,
    #[serde(rename = "APSupport")]
    ApSupport,
    TankSupport,
}

impl BuildArchetype {
    pub const ALL: [BuildArchetype; 6] = [
        BuildArchetype::Ap,
        BuildArchetype::Ad,
        BuildArchetype::Adc,
        BuildArchetype::Tank,
        BuildArchetype::ApSupport,
        BuildArchetype::TankSupport,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BuildArchetype::Ap => "AP",
            BuildArchetype::Ad => "AD",
            BuildArchetype::Adc => "ADC",
            BuildArchetype::Tank => "Tank",
            BuildArchetype::ApSupport => "APSupport",
            BuildArchetype::TankSupport => "TankSupport",
        }
    }

    pub fn is_support(self) -> bool {
        matches!(self, BuildArchetype::ApSupport | BuildArchetype::TankSupport)
    }
}

impl fmt::Display for BuildArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifier output: the archetype plus the traits it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionProfile {
    pub archetype: BuildArchetype,
    pub primary_role: String,
    pub has_magic_damage: bool,
    pub has_physical_damage: bool,
    pub has_crowd_control: bool,
    pub is_durable: bool,
    pub attack_importance: u8,
    pub magic_importance: u8,
    pub defense_importance: u8,
}

/// One step of the archetype decision. Rules are tried in order and the first
/// whose `applies` holds decides the archetype.
pub struct ArchetypeRule {
    pub name: &'static str,
    pub applies: fn(&ChampionProfile) -> bool,
    pub outcome: fn(&ChampionProfile) -> BuildArchetype,
}

pub const ARCHETYPE_RULES: &[ArchetypeRule] = &[
    ArchetypeRule {
        name: "magic damage with high magic importance",
        applies: |p| p.has_magic_damage && p.magic_importance >= IMPORTANCE_THRESHOLD,
        outcome: |_| BuildArchetype::Ap,
    },
    ArchetypeRule {
        name: "physical damage with high attack importance",
        applies: |p| p.has_physical_damage && p.attack_importance >= IMPORTANCE_THRESHOLD,
        outcome: |_| BuildArchetype::Ad,
    },
    ArchetypeRule {
        name: "durable",
        applies: |p| p.is_durable,
        outcome: |_| BuildArchetype::Tank,
    },
    ArchetypeRule {
        name: "support",
        applies: |p| p.primary_role == "support",
        outcome: |p| {
            if p.has_magic_damage {
                BuildArchetype::ApSupport
            } else {
                BuildArchetype::TankSupport
            }
        },
    },
    ArchetypeRule {
        name: "dominant importance",
        applies: |_| true,
        outcome: |p| {
            if p.magic_importance > p.attack_importance {
                BuildArchetype::Ap
            } else {
                BuildArchetype::Ad
            }
        },
    },
];

pub struct ChampionClassifier;

impl ChampionClassifier {
    pub fn classify(champion: &ChampionRecord) -> ChampionProfile {
        let primary_role = champion
            .role_tags
            .first()
            .map(|r| r.to_lowercase())
            .unwrap_or_default();

        let texts: Vec<String> = champion.abilities.iter().map(|a| a.search_text()).collect();
        let any_mentions = |markers: &[&str]| {
            texts
                .iter()
                .any(|text| markers.iter().any(|m| text.contains(m)))
        };

        let stats = champion.stat_importance;
        let is_durable = stats.defense >= DURABLE_DEFENSE
            || primary_role == "tank"
            || champion.has_role("Fighter");

        let mut profile = ChampionProfile {
            // provisional, replaced below
            archetype: BuildArchetype::Ad,
            primary_role,
            has_magic_damage: any_mentions(MAGIC_DAMAGE_MARKERS),
            has_physical_damage: any_mentions(PHYSICAL_DAMAGE_MARKERS),
            has_crowd_control: any_mentions(CROWD_CONTROL_MARKERS),
            is_durable,
            attack_importance: stats.attack,
            magic_importance: stats.magic,
            defense_importance: stats.defense,
        };

        profile.archetype = Self::decide(&profile);

        if profile.primary_role == "marksman" {
            profile.archetype = BuildArchetype::Adc;
        }

        debug!(
            champion = %champion.name,
            archetype = %profile.archetype,
            durable = profile.is_durable,
            "classified champion"
        );

        profile
    }

    fn decide(profile: &ChampionProfile) -> BuildArchetype {
        ARCHETYPE_RULES
            .iter()
            .find(|rule| (rule.applies)(profile))
            .map(|rule| {
                debug!(rule = rule.name, "archetype rule matched");
                (rule.outcome)(profile)
            })
            .unwrap_or(BuildArchetype::Ad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::records::{Ability, StatImportance};

    fn champion(tags: &[&str], stats: (u8, u8, u8), texts: &[&str]) -> ChampionRecord {
        let (attack, defense, magic) = stats;
        ChampionRecord {
            id: "Test".into(),
            name: "Test".into(),
            role_tags: tags.iter().map(|t| t.to_string()).collect(),
            stat_importance: StatImportance {
                attack,
                defense,
                magic,
                difficulty_level: 5,
            },
            abilities: texts
                .iter()
                .map(|t| Ability {
                    description: t.to_string(),
                    ..Ability::default()
                })
                .collect(),
        }
    }

    #[test]
    fn mage_with_magic_damage_is_ap() {
        let c = champion(&["Mage"], (3, 4, 8), &["", "Deals magic damage"]);
        assert_eq!(ChampionClassifier::classify(&c).archetype, BuildArchetype::Ap);
    }

    #[test]
    fn magic_rule_beats_physical_rule() {
        let c = champion(
            &["Assassin"],
            (9, 2, 7),
            &["Deals physical damage", "Deals Magic Damage"],
        );
        assert_eq!(ChampionClassifier::classify(&c).archetype, BuildArchetype::Ap);
    }

    #[test]
    fn fighter_without_damage_match_is_tank() {
        let c = champion(&["Fighter", "Tank"], (5, 3, 2), &["Gains shield"]);
        let profile = ChampionClassifier::classify(&c);
        assert!(profile.is_durable);
        assert_eq!(profile.archetype, BuildArchetype::Tank);
    }

    #[test]
    fn support_splits_on_magic_damage() {
        let ap = champion(&["Support"], (2, 3, 5), &["deals magic damage and slows"]);
        let tank = champion(&["Support"], (2, 3, 5), &["Knocks up enemies"]);
        let ap = ChampionClassifier::classify(&ap);
        let tank = ChampionClassifier::classify(&tank);
        assert_eq!(ap.archetype, BuildArchetype::ApSupport);
        assert!(ap.has_crowd_control);
        assert_eq!(tank.archetype, BuildArchetype::TankSupport);
        assert!(tank.has_crowd_control);
    }

    #[test]
    fn last_rule_compares_importances() {
        let c = champion(&["Assassin"], (4, 2, 5), &[]);
        assert_eq!(ChampionClassifier::classify(&c).archetype, BuildArchetype::Ap);
        let c = champion(&["Assassin"], (4, 2, 4), &[]);
        assert_eq!(ChampionClassifier::classify(&c).archetype, BuildArchetype::Ad);
    }

    #[test]
    fn marksman_always_becomes_adc() {
        let c = champion(&["Marksman", "Mage"], (2, 8, 9), &["magic damage"]);
        assert_eq!(ChampionClassifier::classify(&c).archetype, BuildArchetype::Adc);
    }

    #[test]
    fn korean_markers_are_recognized() {
        let c = champion(&["Support"], (1, 2, 3), &["적에게 마법 피해를 입히고 기절시킵니다"]);
        let profile = ChampionClassifier::classify(&c);
        assert!(profile.has_magic_damage);
        assert!(profile.has_crowd_control);
        assert_eq!(profile.archetype, BuildArchetype::ApSupport);
    }

    #[test]
    fn empty_record_never_panics() {
        let profile = ChampionClassifier::classify(&ChampionRecord::default());
        assert_eq!(profile.primary_role, "");
        assert_eq!(profile.archetype, BuildArchetype::Ad);
    }

    #[test]
    fn archetype_serializes_as_label() {
        let json = serde_json::to_string(&BuildArchetype::ApSupport).unwrap();
        assert_eq!(json, "\"APSupport\"");
        for archetype in BuildArchetype::ALL {
            let json = serde_json::to_string(&archetype).unwrap();
            assert_eq!(json, format!("\"{}\"", archetype.label()));
        }
    }
}
