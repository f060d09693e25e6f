//! Meal record fixture generation
//!
//! Expands a table of sample meals and a plan → count mapping into the flat
//! list of meal records the database seeder loads:
//!
//! ```text
//!  SampleCatalog ──┐
//!                  ├──► generate() ──► Vec<MealRecord> ──► persist() ──► meal-records.json
//!  PlanCounts ─────┘                                                         │
//!                                                       load() ◄─────────────┘
//! ```
//!
//! Generation is pure and deterministic: the same catalog, plans and
//! timestamp always produce byte-identical output.

pub mod catalog;
pub mod config;
pub mod error;
pub mod generate;
pub mod model;
pub mod persist;
pub mod plans;

pub use catalog::{builtin_catalog, SampleCatalog};
pub use config::{GeneratorConfig, DEFAULT_CREATED_AT, DEFAULT_DESTINATION};
pub use error::{FixtureError, Result};
pub use generate::generate;
pub use model::{day_name, record_id, Ingredient, MealRecord, Nutrition, SampleMeal};
pub use persist::{load, persist, plan_summary, PersistSummary};
pub use plans::{builtin_plans, PlanCounts};
