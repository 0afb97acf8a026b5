mod gitignore;
mod maven_wrapper;

pub use gitignore::GitIgnore;
pub use maven_wrapper::{DEFAULT_MAVEN_VERSION, MavenWrapperProperties, Mvnw};
