use sprout_core::{BuildSystem, DependencyScope};
use thiserror::Error;

/// Configuration errors detected while rendering a build file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("dependency scope '{scope}' has no {tool} equivalent (dependency '{dependency}')")]
    UnmappedScope {
        scope: DependencyScope,
        tool: BuildSystem,
        dependency: String,
    },
}
