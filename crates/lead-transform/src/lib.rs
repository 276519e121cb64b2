//! Rule-based field standardizers.
//!
//! One pure function per canonical field: given the raw cell value (plus the
//! locality index or segment dictionary where relevant) each returns the
//! canonical string, or its documented fallback. None of them raises past
//! the pipeline; an unclassifiable value becomes an empty string or, for
//! the employee count, the raw text kept for human review.

pub mod registry;
pub mod standardize;

pub use registry::{FieldRule, apply_rule, rule_for};
pub use standardize::{
    LocalityKind, company, contact_name, employee_count, locality, phone, segment, website,
};
