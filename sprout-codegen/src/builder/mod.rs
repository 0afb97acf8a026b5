//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - indented line output
//! - [`IndentStyles`] - which [`Indent`] each content kind uses

mod code_builder;
mod indent;

pub use code_builder::CodeBuilder;
pub use indent::IndentStyles;
pub use sprout_core::Indent;
