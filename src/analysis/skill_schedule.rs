use super::ability_scorer::AbilityScore;
use super::records::AbilitySlot;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const MAX_LEVEL: usize = 18;
pub const MAX_POINTS_PER_ABILITY: usize = 5;
/// 0-indexed columns of levels 6, 11 and 16.
pub const ULTIMATE_COLUMNS: [usize; 3] = [5, 10, 15];
const OPENING_LEVELS: usize = 3;

/// 4 x 18 allocation matrix, rows Q, W, E, R and one column per level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSchedule {
    #[serde(rename = "rows")]
    grid: [[bool; MAX_LEVEL]; 4],
    max_order: Vec<AbilitySlot>,
}

impl SkillSchedule {
    pub fn is_set(&self, slot: AbilitySlot, column: usize) -> bool {
        self.grid[slot.row()].get(column).copied().unwrap_or(false)
    }

    pub fn row(&self, slot: AbilitySlot) -> &[bool; MAX_LEVEL] {
        &self.grid[slot.row()]
    }

    pub fn rows(&self) -> &[[bool; MAX_LEVEL]; 4] {
        &self.grid
    }

    pub fn points(&self, slot: AbilitySlot) -> usize {
        self.row(slot).iter().filter(|set| **set).count()
    }

    pub fn total_points(&self) -> usize {
        AbilitySlot::ALL.iter().map(|s| self.points(*s)).sum()
    }

    /// Slot levelled at each character level; `None` where no point was spent.
    pub fn level_sequence(&self) -> Vec<Option<AbilitySlot>> {
        (0..MAX_LEVEL)
            .map(|column| {
                AbilitySlot::ALL
                    .into_iter()
                    .find(|slot| self.is_set(*slot, column))
            })
            .collect()
    }

    /// Non-ultimate slots in the order they are maxed.
    pub fn max_order(&self) -> &[AbilitySlot] {
        &self.max_order
    }

    fn column_taken(&self, column: usize) -> bool {
        self.grid.iter().any(|row| row[column])
    }
}

pub struct SkillScheduleBuilder;

impl SkillScheduleBuilder {
    pub fn build(scores: &[AbilityScore]) -> SkillSchedule {
        let mut ranked: Vec<AbilityScore> = scores.to_vec();
        // stable: equal scores keep input order
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

        let mut max_order: Vec<AbilitySlot> = Vec::with_capacity(3);
        for score in ranked.iter().filter(|s| !s.slot.is_ultimate()) {
            if !max_order.contains(&score.slot) {
                max_order.push(score.slot);
            }
        }

        let mut schedule = SkillSchedule {
            grid: [[false; MAX_LEVEL]; 4],
            max_order,
        };

        for column in ULTIMATE_COLUMNS {
            schedule.grid[AbilitySlot::R.row()][column] = true;
        }

        let order = schedule.max_order.clone();

        for (column, slot) in order.iter().take(OPENING_LEVELS).enumerate() {
            schedule.grid[slot.row()][column] = true;
        }

        for column in OPENING_LEVELS..MAX_LEVEL {
            if schedule.column_taken(column) {
                continue;
            }
            let next = order
                .iter()
                .find(|slot| schedule.points(**slot) < MAX_POINTS_PER_ABILITY);
            match next {
                Some(slot) => schedule.grid[slot.row()][column] = true,
                None => {
                    warn!(
                        level = column + 1,
                        "every basic ability is maxed, leaving remaining levels unassigned"
                    );
                    break;
                }
            }
        }

        debug!(
            order = ?schedule.max_order,
            points = schedule.total_points(),
            "built skill schedule"
        );

        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AbilitySlot::*;

    fn scores(values: &[(AbilitySlot, f64)]) -> Vec<AbilityScore> {
        values
            .iter()
            .map(|(slot, score)| AbilityScore {
                slot: *slot,
                score: *score,
            })
            .collect()
    }

    #[test]
    fn ranked_example_assigns_exact_columns() {
        let schedule = SkillScheduleBuilder::build(&scores(&[(Q, 9.0), (W, 3.0), (E, 7.0), (R, 8.0)]));
        let sequence: Vec<_> = schedule.level_sequence().into_iter().map(|s| s.unwrap()).collect();
        assert_eq!(
            sequence,
            vec![Q, E, W, Q, Q, R, Q, Q, E, E, R, E, E, W, W, R, W, W]
        );
        assert_eq!(schedule.max_order(), &[Q, E, W]);
        assert_eq!(schedule.total_points(), MAX_LEVEL);
    }

    #[test]
    fn ties_keep_input_order() {
        let schedule =
            SkillScheduleBuilder::build(&scores(&[(E, 4.0), (Q, 4.0), (W, 4.0), (R, 8.0)]));
        assert_eq!(schedule.max_order(), &[E, Q, W]);
        assert!(schedule.is_set(E, 0) && schedule.is_set(Q, 1) && schedule.is_set(W, 2));
    }

    #[test]
    fn ultimate_columns_are_fixed_even_without_an_ultimate_score() {
        let schedule = SkillScheduleBuilder::build(&scores(&[(Q, 1.0), (W, 2.0), (E, 3.0)]));
        let cols: Vec<_> = (0..MAX_LEVEL).filter(|c| schedule.is_set(R, *c)).collect();
        assert_eq!(cols, ULTIMATE_COLUMNS.to_vec());
    }

    #[test]
    fn capped_abilities_leave_trailing_levels_empty() {
        let schedule = SkillScheduleBuilder::build(&scores(&[(Q, 5.0), (W, 1.0), (R, 8.0)]));
        assert_eq!(schedule.points(Q), MAX_POINTS_PER_ABILITY);
        assert_eq!(schedule.points(W), MAX_POINTS_PER_ABILITY);
        assert_eq!(schedule.points(E), 0);
        assert_eq!(schedule.total_points(), 13);

        let sequence = schedule.level_sequence();
        // Q W _ Q Q R Q Q W W R W W _ _ R _ _
        assert_eq!(sequence[2], None);
        assert_eq!(sequence[12], Some(W));
        assert!(sequence[13..15].iter().all(|s| s.is_none()));
        assert_eq!(sequence[15], Some(R));
        assert!(sequence[16..].iter().all(|s| s.is_none()));
    }

    #[test]
    fn empty_scores_only_place_the_ultimate() {
        let schedule = SkillScheduleBuilder::build(&[]);
        assert_eq!(schedule.total_points(), 3);
        assert!(schedule.max_order().is_empty());
    }
}
