//! Reference data used by the cleaning pipeline.
//!
//! Two datasets live here:
//!
//! - **locality**: the IBGE municipality list, reduced to two lookup maps
//!   (normalized city name → canonical city name, state abbreviation or
//!   normalized state name → canonical state name). Fetched over HTTP once
//!   per process by [`LocalityService`] and cached until invalidated; a
//!   failed fetch degrades to an empty index instead of failing the run.
//! - **segments**: a static translation dictionary from normalized industry
//!   segment strings to canonical Portuguese labels.

pub mod error;
pub mod locality;
pub mod segments;
pub mod service;

pub use error::ReferenceError;
pub use locality::{IbgeFetcher, LocalityFetcher, LocalityIndex, Municipality};
pub use segments::SegmentDictionary;
pub use service::LocalityService;
