//! Plan identifier → record count mapping.

/// Insertion-ordered mapping from plan identifier to the number of records to
/// generate for it.
///
/// Keys are unique. Inserting a key that is already present replaces its
/// count and keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanCounts {
    entries: Vec<(String, u32)>,
}

impl PlanCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, plan_id: impl Into<String>, count: u32) {
        let plan_id = plan_id.into();
        match self.entries.iter_mut().find(|(id, _)| *id == plan_id) {
            Some(entry) => entry.1 = count,
            None => self.entries.push((plan_id, count)),
        }
    }

    pub fn get(&self, plan_id: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(id, _)| id == plan_id)
            .map(|(_, count)| *count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the number of records `generate` produces.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| *count as usize).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.entries.iter().map(|(id, count)| (id.as_str(), *count))
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for PlanCounts {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut plans = PlanCounts::new();
        for (plan_id, count) in iter {
            plans.insert(plan_id, count);
        }
        plans
    }
}

/// The fifteen completed plans seeded into the test database.
pub fn builtin_plans() -> PlanCounts {
    [
        ("plan-fixture-001", 7),
        ("plan-fixture-002", 7),
        ("plan-fixture-003", 7),
        ("plan-fixture-004", 7),
        ("plan-fixture-005", 7),
        ("plan-fixture-006", 5),
        ("plan-fixture-007", 5),
        ("plan-fixture-008", 5),
        ("plan-fixture-009", 10),
        ("plan-fixture-010", 10),
        ("plan-fixture-011", 10),
        ("plan-fixture-012", 14),
        ("plan-fixture-013", 14),
        ("plan-fixture-014", 7),
        ("plan-fixture-015", 7),
    ]
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let plans: PlanCounts = [("zeta", 1), ("alpha", 2), ("mid", 3)].into_iter().collect();
        let ids: Vec<&str> = plans.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn reinsert_replaces_count_in_place() {
        let mut plans = PlanCounts::new();
        plans.insert("a", 1);
        plans.insert("b", 2);
        plans.insert("a", 5);

        assert_eq!(plans.len(), 2);
        assert_eq!(plans.get("a"), Some(5));
        let order: Vec<(&str, u32)> = plans.iter().collect();
        assert_eq!(order, vec![("a", 5), ("b", 2)]);
    }

    #[test]
    fn builtin_plans_total() {
        let plans = builtin_plans();
        assert_eq!(plans.len(), 15);
        assert_eq!(plans.total(), 122);
        assert_eq!(plans.get("plan-fixture-012"), Some(14));
        assert_eq!(plans.get("plan-fixture-999"), None);
    }
}
