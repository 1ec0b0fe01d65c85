//! Validation failure reporting shared by the Crewclock services
//!
//! The request layer consumes the rule set and surfaces violations to
//! clients as (field, message) pairs. This module defines that surface
//! independent of any transport; how a report is rendered (status code,
//! body shape) belongs to the service that owns the endpoint.

use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

/// A single violated rule: the offending field and its failure message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Field name in wire casing (camelCase).
    pub field: String,
    /// Human-readable failure message.
    pub message: String,
}

/// Every rule violation found in one payload.
///
/// Violations are sorted by field and then message, so a report is
/// deterministic regardless of rule evaluation order. Serializes as a
/// plain array of violations.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("validation failed with {} violation(s)", .violations.len())]
#[serde(transparent)]
pub struct ValidationReport {
    violations: Vec<FieldViolation>,
}

impl ValidationReport {
    /// Build a report from raw violations, normalizing their order.
    pub fn new(mut violations: Vec<FieldViolation>) -> Self {
        violations.sort_by(|a, b| {
            a.field
                .cmp(&b.field)
                .then_with(|| a.message.cmp(&b.message))
        });

        Self { violations }
    }

    /// The violations, in normalized order.
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Number of violations in the report.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// True when no rule was violated.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl From<&ValidationErrors> for ValidationReport {
    fn from(errors: &ValidationErrors) -> Self {
        let violations = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |error| FieldViolation {
                    field: wire_field_name(field),
                    message: error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| error.code.to_string()),
                })
            })
            .collect();

        Self::new(violations)
    }
}

/// Convert a Rust field identifier to its camelCase wire name.
fn wire_field_name(field: &str) -> String {
    let mut name = String::with_capacity(field.len());
    let mut upper_next = false;

    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            name.extend(c.to_uppercase());
            upper_next = false;
        } else {
            name.push(c);
        }
    }

    name
}
