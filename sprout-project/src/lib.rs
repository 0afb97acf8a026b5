//! Project generation for sprout.
//!
//! A [`ProjectGenerator`] takes a validated
//! [`ProjectDescription`](sprout_manifest::ProjectDescription) and runs:
//!
//! 1. [`conditions`] select the customizers that apply to the project
//! 2. the [`build`], [`code`] and [`documentation`] customizers shape the models
//! 3. each [`contributor`] renders its models into a file registry
//! 4. the registry is written once every file has been rendered

pub mod build;
pub mod code;
pub mod conditions;
pub mod contributor;
mod customizers;
pub mod documentation;
mod generator;

pub use customizers::ProjectCustomizers;
pub use generator::{GenerationPlan, PlannedFile, ProjectGenerator, indent_styles};
