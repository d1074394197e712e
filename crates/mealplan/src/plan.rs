use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use mealmate_shared::DateRange;

/// Result of one grocery-list generation: the selected recipes (input order,
/// deduplicated), the dates the plan covers, and the rendered grocery list.
/// Immutable once produced; callers may persist it verbatim.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MealPlan {
    pub recipe_names: Vec<String>,
    pub date_range: DateRange,
    pub grocery_list: Vec<String>,
}

/// A meal plan persisted for later viewing, stored as an opaque blob plus
/// identity and bookkeeping. The checked state lives beside the plan, never
/// inside it.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SavedPlan {
    pub id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub plan: MealPlan,
    #[serde(default)]
    pub checks: CheckState,
}

impl SavedPlan {
    pub fn new(plan: MealPlan) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: OffsetDateTime::now_utc(),
            plan,
            checks: CheckState::default(),
        }
    }
}

/// Ephemeral per-item "already in the cart" state, keyed by the grocery-list
/// line. UI bookkeeping only; the aggregation pipeline never reads it.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct CheckState {
    checked: HashSet<String>,
}

impl CheckState {
    pub fn check(&mut self, item: &str) {
        self.checked.insert(item.to_string());
    }

    pub fn uncheck(&mut self, item: &str) {
        self.checked.remove(item);
    }

    pub fn toggle(&mut self, item: &str) -> bool {
        if self.checked.remove(item) {
            false
        } else {
            self.checked.insert(item.to_string());
            true
        }
    }

    pub fn is_checked(&self, item: &str) -> bool {
        self.checked.contains(item)
    }

    pub fn reset(&mut self) {
        self.checked.clear();
    }

    pub fn len(&self) -> usize {
        self.checked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn plan() -> MealPlan {
        MealPlan {
            recipe_names: vec!["Pancakes".to_string()],
            date_range: DateRange::new(date!(2025 - 06 - 02), date!(2025 - 06 - 08)).unwrap(),
            grocery_list: vec!["2 cups flour".to_string()],
        }
    }

    #[test]
    fn test_saved_plan_serde_round_trip() {
        let saved = SavedPlan::new(plan());
        let json = serde_json::to_string(&saved).unwrap();
        let back: SavedPlan = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id, saved.id);
        assert_eq!(back.plan, saved.plan);
    }

    #[test]
    fn test_check_state_toggle() {
        let mut checks = CheckState::default();

        assert!(checks.toggle("2 cups flour"));
        assert!(checks.is_checked("2 cups flour"));
        assert!(!checks.toggle("2 cups flour"));
        assert!(checks.is_empty());
    }

    #[test]
    fn test_check_state_reset() {
        let mut checks = CheckState::default();
        checks.check("milk");
        checks.check("eggs");
        assert_eq!(checks.len(), 2);

        checks.reset();
        assert!(checks.is_empty());
    }
}
