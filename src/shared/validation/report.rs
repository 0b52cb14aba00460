use serde::Serialize;

use crate::shared::errors::AppError;

/// A single violated field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

/// Accumulates violations across every field rule of a request, so the caller
/// receives all of them at once instead of the first failure.
#[derive(Debug, Default)]
pub struct ValidationReport {
    violations: Vec<FieldViolation>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field,
            message: message.into(),
        });
    }

    /// Required string: length must fall within `min..=max` characters.
    /// An empty value fails the minimum like any other short value.
    pub fn require_length(&mut self, field: &'static str, value: &str, min: usize, max: usize) {
        let len = value.chars().count();
        if len < min {
            self.add(field, format!("must be at least {} characters", min));
        } else if len > max {
            self.add(field, format!("must be at most {} characters", max));
        }
    }

    /// Optional string: the length rule applies only when a value is present.
    pub fn optional_length(
        &mut self,
        field: &'static str,
        value: Option<&str>,
        min: usize,
        max: usize,
    ) {
        if let Some(v) = value {
            self.require_length(field, v, min, max);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn merge(&mut self, other: ValidationReport) {
        self.violations.extend(other.violations);
    }

    /// `Err(AppError::Validation)` carrying every violation when any rule
    /// failed, `Ok(())` otherwise.
    pub fn into_result(self) -> Result<(), AppError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self.violations))
        }
    }
}
