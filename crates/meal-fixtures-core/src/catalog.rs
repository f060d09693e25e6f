//! Sample meal catalog.
//!
//! `SampleCatalog` is the non-empty table records are drawn from. The built-in
//! catalog is the seven-meal table used for the seeded test database.

use crate::error::{FixtureError, Result};
use crate::model::{Ingredient, Nutrition, SampleMeal};

/// Non-empty, ordered table of sample meals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleCatalog {
    meals: Vec<SampleMeal>,
}

impl SampleCatalog {
    pub fn new(meals: Vec<SampleMeal>) -> Result<Self> {
        if meals.is_empty() {
            return Err(FixtureError::EmptyCatalog);
        }
        Ok(Self { meals })
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    pub fn meals(&self) -> &[SampleMeal] {
        &self.meals
    }

    /// Meal for the `index`-th generated record, wrapping around the table.
    pub fn cyclic(&self, index: usize) -> &SampleMeal {
        &self.meals[index % self.meals.len()]
    }
}

// ============================================================================
// Built-in table
// ============================================================================

fn meal(
    name: &str,
    ingredients: &[(&str, &str)],
    instructions: &[&str],
    nutrition: Nutrition,
    prep_time: u32,
    cook_time: u32,
    heb_available: bool,
) -> SampleMeal {
    SampleMeal {
        name: name.to_string(),
        ingredients: ingredients
            .iter()
            .map(|(item, amount)| Ingredient::new(*item, *amount))
            .collect(),
        instructions: instructions.iter().map(|s| s.to_string()).collect(),
        nutrition,
        prep_time,
        cook_time,
        heb_available,
    }
}

fn nutrition(calories: u32, protein: u32, carbs: u32, fat: u32, fiber: u32) -> Nutrition {
    Nutrition {
        calories,
        protein,
        carbs,
        fat,
        fiber,
    }
}

/// The seven sample meals used for the seeded test database.
pub fn builtin_catalog() -> SampleCatalog {
    let meals = vec![
        meal(
            "Grilled Chicken Breast with Roasted Vegetables",
            &[
                ("chicken breast", "1.5 lbs"),
                ("broccoli florets", "2 cups"),
                ("bell peppers", "2 medium"),
                ("olive oil", "2 tbsp"),
                ("garlic", "3 cloves"),
                ("lemon", "1 medium"),
                ("salt and pepper", "to taste"),
            ],
            &[
                "Preheat oven to 425°F.",
                "Season chicken breasts with salt, pepper, and minced garlic.",
                "Heat olive oil in oven-safe skillet over medium-high heat.",
                "Sear chicken for 3-4 minutes per side until golden brown.",
                "Add broccoli and peppers to the skillet around the chicken.",
                "Transfer skillet to oven and roast for 15-20 minutes.",
                "Check chicken reaches internal temperature of 165°F.",
                "Squeeze fresh lemon juice over chicken before serving.",
            ],
            nutrition(420, 45, 18, 16, 5),
            15,
            30,
            true,
        ),
        meal(
            "Honey Garlic Salmon with Quinoa",
            &[
                ("salmon fillets", "1.5 lbs"),
                ("quinoa", "1 cup"),
                ("honey", "3 tbsp"),
                ("soy sauce", "2 tbsp"),
                ("garlic", "4 cloves"),
                ("green beans", "2 cups"),
                ("sesame seeds", "1 tbsp"),
            ],
            &[
                "Cook quinoa according to package directions.",
                "Mix honey, soy sauce, and minced garlic in a bowl.",
                "Brush salmon fillets with honey-garlic mixture.",
                "Bake salmon at 400°F for 12-15 minutes.",
                "Steam green beans for 5-7 minutes until tender-crisp.",
                "Serve salmon over quinoa with green beans on the side.",
                "Garnish with sesame seeds.",
            ],
            nutrition(520, 42, 45, 18, 6),
            10,
            20,
            true,
        ),
        meal(
            "Turkey Meatballs with Marinara",
            &[
                ("ground turkey", "1.5 lbs"),
                ("breadcrumbs", "1/2 cup"),
                ("egg", "1 large"),
                ("marinara sauce", "2 cups"),
                ("zucchini", "4 medium"),
                ("parmesan cheese", "1/4 cup"),
                ("Italian seasoning", "2 tsp"),
            ],
            &[
                "Mix ground turkey, breadcrumbs, egg, and Italian seasoning.",
                "Form mixture into 16-20 meatballs.",
                "Brown meatballs in skillet over medium heat.",
                "Add marinara sauce and simmer for 15 minutes.",
                "Spiralize zucchini into noodles.",
                "Sauté zucchini noodles for 2-3 minutes until tender.",
                "Serve meatballs and sauce over zucchini noodles.",
                "Top with parmesan cheese.",
            ],
            nutrition(380, 38, 22, 14, 4),
            20,
            25,
            false,
        ),
        meal(
            "Beef Stir-Fry with Brown Rice",
            &[
                ("sirloin steak", "1.5 lbs"),
                ("brown rice", "1.5 cups"),
                ("broccoli", "2 cups"),
                ("snap peas", "1 cup"),
                ("carrots", "1 cup sliced"),
                ("soy sauce", "3 tbsp"),
                ("ginger", "1 tbsp minced"),
                ("sesame oil", "2 tsp"),
            ],
            &[
                "Cook brown rice according to package directions.",
                "Slice beef into thin strips against the grain.",
                "Heat sesame oil in wok over high heat.",
                "Stir-fry beef for 3-4 minutes until browned, remove.",
                "Add vegetables and stir-fry for 5-6 minutes.",
                "Return beef to pan with soy sauce and ginger.",
                "Cook for 2 more minutes, tossing to combine.",
                "Serve over brown rice.",
            ],
            nutrition(480, 44, 42, 14, 5),
            15,
            20,
            true,
        ),
        meal(
            "Baked Tofu Buddha Bowl",
            &[
                ("firm tofu", "14 oz"),
                ("sweet potato", "2 medium"),
                ("kale", "2 cups chopped"),
                ("chickpeas", "1 can"),
                ("tahini", "3 tbsp"),
                ("lemon juice", "2 tbsp"),
                ("quinoa", "1 cup"),
            ],
            &[
                "Press tofu and cut into cubes, toss with soy sauce.",
                "Dice sweet potatoes and drain chickpeas.",
                "Roast tofu, sweet potatoes, and chickpeas at 400°F for 25 minutes.",
                "Cook quinoa according to package directions.",
                "Massage kale with olive oil until softened.",
                "Make tahini dressing with tahini, lemon juice, and water.",
                "Assemble bowls with quinoa, kale, roasted vegetables, and tofu.",
                "Drizzle with tahini dressing.",
            ],
            nutrition(450, 22, 58, 16, 12),
            20,
            30,
            false,
        ),
        meal(
            "Lemon Herb Chicken Thighs",
            &[
                ("chicken thighs", "2 lbs"),
                ("baby potatoes", "1.5 lbs"),
                ("lemon", "2 medium"),
                ("fresh rosemary", "2 tbsp"),
                ("garlic", "6 cloves"),
                ("olive oil", "3 tbsp"),
            ],
            &[
                "Preheat oven to 425°F.",
                "Halve baby potatoes and toss with olive oil, salt, and pepper.",
                "Season chicken with lemon zest, rosemary, and minced garlic.",
                "Arrange chicken and potatoes on a baking sheet.",
                "Roast for 35-40 minutes until chicken is cooked through.",
                "Squeeze fresh lemon juice over chicken before serving.",
            ],
            nutrition(510, 38, 32, 24, 4),
            15,
            40,
            true,
        ),
        meal(
            "Shrimp Tacos with Cabbage Slaw",
            &[
                ("large shrimp", "1.5 lbs"),
                ("corn tortillas", "12 small"),
                ("red cabbage", "2 cups shredded"),
                ("lime", "2 medium"),
                ("cilantro", "1/2 cup"),
                ("avocado", "2 medium"),
                ("chili powder", "1 tbsp"),
            ],
            &[
                "Season shrimp with chili powder, cumin, and lime juice.",
                "Make slaw by mixing cabbage, lime juice, and cilantro.",
                "Sauté shrimp in hot skillet for 2-3 minutes per side.",
                "Warm tortillas in a separate pan.",
                "Mash avocado with lime juice for guacamole.",
                "Assemble tacos with shrimp, slaw, and guacamole.",
            ],
            nutrition(440, 36, 38, 16, 10),
            20,
            10,
            true,
        ),
    ];

    SampleCatalog { meals }
}
