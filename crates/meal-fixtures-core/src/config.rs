//! Generator configuration.
//!
//! Defaults are compiled in; the CLI overrides individual fields.

use std::path::PathBuf;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::{FixtureError, Result};

/// Where the seeder expects the fixture, relative to the repository root.
pub const DEFAULT_DESTINATION: &str = "packages/database/fixtures/meal-records.json";

/// `createdAt` stamped onto every record.
pub const DEFAULT_CREATED_AT: &str = "2025-01-01T10:00:00.000Z";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub destination: PathBuf,
    pub created_at: DateTime<Utc>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            destination: PathBuf::from(DEFAULT_DESTINATION),
            created_at: default_created_at(),
        }
    }
}

impl GeneratorConfig {
    pub fn with_destination(mut self, destination: impl Into<PathBuf>) -> Self {
        self.destination = destination.into();
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// `created_at` in the wire form, e.g. `2025-01-01T10:00:00.000Z`.
    pub fn created_at_string(&self) -> String {
        format_created_at(&self.created_at)
    }
}

/// Parse an RFC 3339 timestamp (any offset) into UTC.
pub fn parse_created_at(input: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(input)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|source| FixtureError::Timestamp {
            input: input.to_string(),
            source,
        })
}

/// Millisecond precision, `Z` suffix.
pub fn format_created_at(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn default_created_at() -> DateTime<Utc> {
    // The constant always parses; the epoch fallback is unreachable.
    parse_created_at(DEFAULT_CREATED_AT).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timestamp_round_trips_exactly() {
        let config = GeneratorConfig::default();
        assert_eq!(config.created_at_string(), DEFAULT_CREATED_AT);
        assert_eq!(config.destination, PathBuf::from(DEFAULT_DESTINATION));
    }

    #[test]
    fn offsets_are_normalized_to_utc_millis() {
        let ts = parse_created_at("2025-03-04T05:06:07+02:00").unwrap();
        assert_eq!(format_created_at(&ts), "2025-03-04T03:06:07.000Z");
    }

    #[test]
    fn malformed_timestamp_is_an_error() {
        let err = parse_created_at("yesterday").unwrap_err();
        match err {
            FixtureError::Timestamp { input, .. } => assert_eq!(input, "yesterday"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn builders_override_fields() {
        let ts = parse_created_at("2030-12-31T23:59:59.999Z").unwrap();
        let config = GeneratorConfig::default()
            .with_destination("out/records.json")
            .with_created_at(ts);
        assert_eq!(config.destination, PathBuf::from("out/records.json"));
        assert_eq!(config.created_at_string(), "2030-12-31T23:59:59.999Z");
    }
}
