use std::path::{Path, PathBuf};

use sprout_core::{FileRules, GeneratedFile};

/// Maven version the wrapper downloads.
pub const DEFAULT_MAVEN_VERSION: &str = "3.9.9";

/// `.mvn/wrapper/maven-wrapper.properties`
#[derive(Debug, Clone)]
pub struct MavenWrapperProperties {
    maven_version: String,
}

impl MavenWrapperProperties {
    pub fn new(maven_version: impl Into<String>) -> Self {
        Self {
            maven_version: maven_version.into(),
        }
    }

    /// Where the Maven distribution is fetched from.
    pub fn distribution_url(&self) -> String {
        let version = &self.maven_version;
        format!(
            "https://repo.maven.apache.org/maven2/org/apache/maven/apache-maven/{version}/apache-maven-{version}-bin.zip"
        )
    }
}

impl Default for MavenWrapperProperties {
    fn default() -> Self {
        Self::new(DEFAULT_MAVEN_VERSION)
    }
}

impl GeneratedFile for MavenWrapperProperties {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(".mvn").join("wrapper").join("maven-wrapper.properties")
    }

    fn render(&self) -> String {
        format!(
            "wrapperVersion=3.3.2\ndistributionType=only-script\ndistributionUrl={}\n",
            self.distribution_url()
        )
    }
}

/// The `mvnw` launcher script.
///
/// Reads the distribution url from the wrapper properties, unpacks it under
/// `~/.m2/wrapper/dists` on first use and runs the bundled `mvn`.
pub struct Mvnw;

impl GeneratedFile for Mvnw {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("mvnw")
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite().executable()
    }

    fn render(&self) -> String {
        r#"#!/bin/sh
# Maven wrapper launcher
set -e

BASE_DIR=$(cd "$(dirname "$0")" && pwd)
PROPERTIES="$BASE_DIR/.mvn/wrapper/maven-wrapper.properties"

if [ ! -f "$PROPERTIES" ]; then
  echo "Cannot find $PROPERTIES" >&2
  exit 1
fi

DISTRIBUTION_URL=$(sed -n 's/^distributionUrl=//p' "$PROPERTIES" | tr -d '\r')
DISTRIBUTION_NAME=$(basename "$DISTRIBUTION_URL" -bin.zip)
MAVEN_USER_HOME=${MAVEN_USER_HOME:-"$HOME/.m2"}
MAVEN_HOME="$MAVEN_USER_HOME/wrapper/dists/$DISTRIBUTION_NAME"

if [ ! -x "$MAVEN_HOME/bin/mvn" ]; then
  TMP_DIR=$(mktemp -d)
  trap 'rm -rf "$TMP_DIR"' EXIT
  echo "Downloading $DISTRIBUTION_URL" >&2
  if command -v curl >/dev/null 2>&1; then
    curl -fsSL -o "$TMP_DIR/maven.zip" "$DISTRIBUTION_URL"
  else
    wget -q -O "$TMP_DIR/maven.zip" "$DISTRIBUTION_URL"
  fi
  unzip -q "$TMP_DIR/maven.zip" -d "$TMP_DIR"
  mkdir -p "$(dirname "$MAVEN_HOME")"
  mv "$TMP_DIR/$DISTRIBUTION_NAME" "$MAVEN_HOME"
fi

exec "$MAVEN_HOME/bin/mvn" -f "$BASE_DIR/pom.xml" "$@"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution_url() {
        let properties = MavenWrapperProperties::new("3.8.1");
        assert_eq!(
            properties.distribution_url(),
            "https://repo.maven.apache.org/maven2/org/apache/maven/apache-maven/3.8.1/apache-maven-3.8.1-bin.zip"
        );
        assert!(properties.render().contains("distributionUrl=https://"));
    }

    #[test]
    fn test_paths_and_rules() {
        let base = Path::new("demo");
        assert_eq!(
            MavenWrapperProperties::default().path(base),
            base.join(".mvn/wrapper/maven-wrapper.properties")
        );
        assert_eq!(Mvnw.path(base), base.join("mvnw"));
        assert!(Mvnw.rules().executable);
        assert!(Mvnw.render().starts_with("#!/bin/sh\n"));
    }
}
