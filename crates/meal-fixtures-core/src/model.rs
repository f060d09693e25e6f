//! Fixture data model.
//!
//! Field names follow the camelCase layout the database seeder reads
//! (`mealPlanId`, `prepTime`, `hebAvailable`, ...).

use serde::{Deserialize, Serialize};

/// Prefix shared by every generated record identifier.
pub const RECORD_ID_PREFIX: &str = "meal-record-";

/// Weekday names indexed by `day_number % 7`.
pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub item: String,
    pub amount: String,
}

impl Ingredient {
    pub fn new(item: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            amount: amount.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    pub fiber: u32,
}

/// A template meal embedded into generated records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleMeal {
    pub name: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub nutrition: Nutrition,
    /// Minutes.
    pub prep_time: u32,
    /// Minutes.
    pub cook_time: u32,
    pub heb_available: bool,
}

/// One generated fixture entry: a meal assigned to a day of a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealRecord {
    pub id: String,
    pub meal_plan_id: String,
    pub day_number: u32,
    pub data: SampleMeal,
    pub created_at: String,
}

/// Format the identifier for the `sequence`-th record (1-based).
///
/// Numbers are zero-padded to three digits; wider numbers are kept as-is.
pub fn record_id(sequence: usize) -> String {
    format!("{RECORD_ID_PREFIX}{sequence:03}")
}

/// Weekday the seeder assigns to a plan day (1 = Monday, 7 = Sunday).
pub fn day_name(day_number: u32) -> &'static str {
    DAY_NAMES[(day_number % 7) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_pads_to_three_digits() {
        assert_eq!(record_id(1), "meal-record-001");
        assert_eq!(record_id(42), "meal-record-042");
        assert_eq!(record_id(999), "meal-record-999");
    }

    #[test]
    fn record_id_grows_past_three_digits() {
        assert_eq!(record_id(1000), "meal-record-1000");
        assert_eq!(record_id(123456), "meal-record-123456");
    }

    #[test]
    fn day_name_wraps_weekly() {
        assert_eq!(day_name(1), "Monday");
        assert_eq!(day_name(6), "Saturday");
        assert_eq!(day_name(7), "Sunday");
        assert_eq!(day_name(8), "Monday");
        assert_eq!(day_name(14), "Sunday");
    }

    #[test]
    fn sample_meal_serializes_camel_case_fields() {
        let meal = SampleMeal {
            name: "Toast".to_string(),
            ingredients: vec![Ingredient::new("bread", "2 slices")],
            instructions: vec!["Toast the bread.".to_string()],
            nutrition: Nutrition {
                calories: 160,
                protein: 6,
                carbs: 30,
                fat: 2,
                fiber: 2,
            },
            prep_time: 1,
            cook_time: 3,
            heb_available: true,
        };

        let value = serde_json::to_value(&meal).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        for key in [
            "name",
            "ingredients",
            "instructions",
            "nutrition",
            "prepTime",
            "cookTime",
            "hebAvailable",
        ] {
            assert!(keys.contains(&key), "missing field {key}");
        }
        assert_eq!(value["ingredients"][0]["item"], "bread");
        assert_eq!(value["nutrition"]["fiber"], 2);
    }
}
