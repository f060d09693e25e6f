//! Fixture file I/O.
//!
//! `persist` writes the whole record list in one `fs::write`; the parent
//! directory must already exist. `load` reads a fixture back the way the
//! database seeder does, without any semantic checks.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{FixtureError, Result};
use crate::model::MealRecord;

/// What a successful `persist` wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistSummary {
    pub records: usize,
    pub path: PathBuf,
    pub bytes: usize,
}

/// Serialize `records` as two-space indented JSON and write them to `path`,
/// creating or truncating the file.
pub fn persist(records: &[MealRecord], path: &Path) -> Result<PersistSummary> {
    let json = serde_json::to_string_pretty(records).map_err(FixtureError::Serialize)?;
    fs::write(path, &json).map_err(|source| FixtureError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    let summary = PersistSummary {
        records: records.len(),
        path: path.to_path_buf(),
        bytes: json.len(),
    };
    info!(
        records = summary.records,
        bytes = summary.bytes,
        path = %summary.path.display(),
        "wrote meal record fixture"
    );
    Ok(summary)
}

pub fn load(path: &Path) -> Result<Vec<MealRecord>> {
    let content = fs::read_to_string(path).map_err(|source| FixtureError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| FixtureError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Record count per plan, in the order plans first appear.
pub fn plan_summary(records: &[MealRecord]) -> Vec<(String, usize)> {
    let mut summary: Vec<(String, usize)> = Vec::new();
    for record in records {
        match summary
            .iter_mut()
            .find(|(plan_id, _)| *plan_id == record.meal_plan_id)
        {
            Some(entry) => entry.1 += 1,
            None => summary.push((record.meal_plan_id.clone(), 1)),
        }
    }
    summary
}
