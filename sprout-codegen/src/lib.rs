//! Shared models and code generation utilities for the sprout generators.
//!
//! This crate provides the build-tool and language independent pieces used
//! by the renderers (`sprout-codegen-maven`, `sprout-codegen-gradle`,
//! `sprout-codegen-jvm`) and by project generation (`sprout-project`).
//!
//! # Module Organization
//!
//! - [`builder`] - Indented text building (CodeBuilder, Indent, IndentStyles)
//! - [`customize`] - Ordered customizer registry
//! - [`build`] - Build model, build customizers and render errors
//! - [`source`] - Source code model and the writer trait
//! - [`documentation`] - Help document sections
//! - [`generation`] - Output management (FileRegistry, ImportCollector)

pub mod build;
pub mod builder;
pub mod customize;
pub mod documentation;
pub mod generation;
pub mod source;
