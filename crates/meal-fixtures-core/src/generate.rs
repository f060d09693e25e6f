use tracing::debug;

use crate::catalog::SampleCatalog;
use crate::model::{record_id, MealRecord};
use crate::plans::PlanCounts;

/// Expand `plans` into meal records.
///
/// Plans are visited in insertion order and days `1..=count` within each
/// plan. A single counter runs across all plans: the `i`-th record (0-based)
/// gets id `meal-record-{i + 1:03}` and embeds `catalog.cyclic(i)`, so the
/// sample rotation does not restart at plan boundaries.
pub fn generate(catalog: &SampleCatalog, plans: &PlanCounts, created_at: &str) -> Vec<MealRecord> {
    let mut records = Vec::with_capacity(plans.total());

    for (plan_id, count) in plans.iter() {
        debug!(plan_id, count, first = records.len() + 1, "expanding plan");
        for day_number in 1..=count {
            let index = records.len();
            records.push(MealRecord {
                id: record_id(index + 1),
                meal_plan_id: plan_id.to_string(),
                day_number,
                data: catalog.cyclic(index).clone(),
                created_at: created_at.to_string(),
            });
        }
    }

    records
}
