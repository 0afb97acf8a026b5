mod gitignore;
mod gradle_wrapper;

pub use gitignore::GitIgnore;
pub use gradle_wrapper::{DEFAULT_GRADLE_VERSION, GradleWrapperProperties, Gradlew};
