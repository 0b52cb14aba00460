mod report;

pub use report::{FieldViolation, ValidationReport};
