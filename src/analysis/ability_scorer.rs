use super::records::{Ability, AbilitySlot, ChampionRecord};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde::Deserialize;
use tracing::debug;

const DAMAGE_KEYWORDS: &[&str] = &["damage", "피해"];
const DAMAGE_BONUS: f64 = 5.0;
const COOLDOWN_BASELINE: f64 = 20.0;
const COOLDOWN_DIVISOR: f64 = 3.0;
const MAX_TERM: f64 = 5.0;
const POINTS_PER_NOTE: f64 = 2.0;
const PROGRESSION_SEPARATOR: &str = "->";

/// The ultimate is pinned to this score instead of being scored.
pub const ULTIMATE_SCORE: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityScore {
    pub slot: AbilitySlot,
    pub score: f64,
}

/// Written as `{abilityIndex, slot, score}`; `abilityIndex` runs 1..=4 for Q..R.
impl Serialize for AbilityScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AbilityScore", 3)?;
        state.serialize_field("abilityIndex", &self.slot.ability_index())?;
        state.serialize_field("slot", &self.slot)?;
        state.serialize_field("score", &self.score)?;
        state.end()
    }
}

pub struct AbilityScorer;

impl AbilityScorer {
    /// One score per non-passive ability present on the champion, in Q, W, E, R order.
    pub fn score_champion(champion: &ChampionRecord) -> Vec<AbilityScore> {
        champion
            .spells()
            .map(|(slot, ability)| AbilityScore {
                slot,
                score: Self::score(slot, ability),
            })
            .collect()
    }

    pub fn score(slot: AbilitySlot, ability: &Ability) -> f64 {
        if slot.is_ultimate() {
            return ULTIMATE_SCORE;
        }

        let damage = damage_term(ability);
        let cooldown = cooldown_term(&ability.cooldown_per_level);
        let (notes, growth) = match &ability.level_up_notes {
            Some(notes) => (
                notes.label.len() as f64 * POINTS_PER_NOTE,
                notes.effect.iter().filter_map(|e| growth_term(e)).sum::<f64>(),
            ),
            None => (0.0, 0.0),
        };

        let score = damage + cooldown + notes + growth;
        debug!(
            slot = slot.label(),
            damage, cooldown, notes, growth, score, "scored ability"
        );
        score
    }
}

fn damage_term(ability: &Ability) -> f64 {
    let text = ability.search_text();
    if DAMAGE_KEYWORDS.iter().any(|k| text.contains(k)) {
        DAMAGE_BONUS
    } else {
        0.0
    }
}

/// Lower average cooldown scores higher, clamped to `[0, 5]`.
pub fn cooldown_term(cooldowns: &[f64]) -> f64 {
    if cooldowns.is_empty() {
        return 0.0;
    }
    let average = cooldowns.iter().sum::<f64>() / cooldowns.len() as f64;
    ((COOLDOWN_BASELINE - average) / COOLDOWN_DIVISOR).clamp(0.0, MAX_TERM)
}

/// Growth bonus for an effect written as `first -> ... -> last`.
///
/// Returns `None` when the effect is not a numeric progression or starts at
/// zero or below. Shrinking progressions produce a negative bonus.
pub fn growth_term(effect: &str) -> Option<f64> {
    let steps: Vec<&str> = effect.split(PROGRESSION_SEPARATOR).collect();
    if steps.len() < 2 {
        return None;
    }
    let first = leading_number(steps[0])?;
    let last = leading_number(steps[steps.len() - 1])?;
    if first <= 0.0 {
        return None;
    }
    Some(((last - first) / first * MAX_TERM).min(MAX_TERM))
}

fn leading_number(segment: &str) -> Option<f64> {
    let trimmed = segment.trim();
    let end = trimmed
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || *c == '.'))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}
