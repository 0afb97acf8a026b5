//! Help document assembly.
//!
//! A [`HelpDocument`] is an ordered composition of [`Section`]s; only
//! non-empty sections are written and an empty document renders to nothing.

mod help;
mod section;

pub use help::{
    GettingStartedSection, HelpDocument, InfrastructureElement, Link, RequiredDependency,
};
pub use section::{BulletedSection, FnSection, Section, TextSection};
