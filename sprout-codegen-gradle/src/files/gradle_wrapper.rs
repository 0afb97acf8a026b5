use std::path::{Path, PathBuf};

use sprout_core::{FileRules, GeneratedFile};

/// Gradle version the wrapper downloads.
///
/// Matches the default Spring Boot 2.1 platform; its Gradle plugin and
/// `org.asciidoctor.convert` 1.5.3 do not run on Gradle 6 or later.
pub const DEFAULT_GRADLE_VERSION: &str = "4.10.2";

/// `gradle/wrapper/gradle-wrapper.properties`
#[derive(Debug, Clone)]
pub struct GradleWrapperProperties {
    gradle_version: String,
}

impl GradleWrapperProperties {
    pub fn new(gradle_version: impl Into<String>) -> Self {
        Self {
            gradle_version: gradle_version.into(),
        }
    }

    pub fn distribution_url(&self) -> String {
        format!(
            "https://services.gradle.org/distributions/gradle-{}-bin.zip",
            self.gradle_version
        )
    }
}

impl Default for GradleWrapperProperties {
    fn default() -> Self {
        Self::new(DEFAULT_GRADLE_VERSION)
    }
}

impl GeneratedFile for GradleWrapperProperties {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("gradle").join("wrapper").join("gradle-wrapper.properties")
    }

    fn render(&self) -> String {
        // Colons are escaped in java properties files.
        let url = self.distribution_url().replace(':', "\\:");
        format!(
            "distributionBase=GRADLE_USER_HOME\n\
             distributionPath=wrapper/dists\n\
             distributionUrl={url}\n\
             zipStoreBase=GRADLE_USER_HOME\n\
             zipStorePath=wrapper/dists\n"
        )
    }
}

/// The `gradlew` launcher script.
///
/// Downloads the distribution named in the wrapper properties into
/// `~/.gradle/wrapper/dists` on first use, then runs it.
pub struct Gradlew;

impl GeneratedFile for Gradlew {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("gradlew")
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite().executable()
    }

    fn render(&self) -> String {
        r#"#!/bin/sh
# Gradle wrapper launcher
set -e

APP_HOME=$(cd "$(dirname "$0")" && pwd)
PROPERTIES="$APP_HOME/gradle/wrapper/gradle-wrapper.properties"

if [ ! -f "$PROPERTIES" ]; then
  echo "Cannot find $PROPERTIES" >&2
  exit 1
fi

DISTRIBUTION_URL=$(sed -n 's/^distributionUrl=//p' "$PROPERTIES" | sed 's/\\:/:/g' | tr -d '\r')
DISTRIBUTION_NAME=$(basename "$DISTRIBUTION_URL" .zip)
GRADLE_USER_HOME=${GRADLE_USER_HOME:-"$HOME/.gradle"}
GRADLE_DIST="$GRADLE_USER_HOME/wrapper/dists/$DISTRIBUTION_NAME"
GRADLE_VERSION_DIR=$(echo "$DISTRIBUTION_NAME" | sed 's/-bin$//; s/-all$//')

if [ ! -x "$GRADLE_DIST/$GRADLE_VERSION_DIR/bin/gradle" ]; then
  TMP_DIR=$(mktemp -d)
  trap 'rm -rf "$TMP_DIR"' EXIT
  echo "Downloading $DISTRIBUTION_URL" >&2
  if command -v curl >/dev/null 2>&1; then
    curl -fsSL -o "$TMP_DIR/gradle.zip" "$DISTRIBUTION_URL"
  else
    wget -q -O "$TMP_DIR/gradle.zip" "$DISTRIBUTION_URL"
  fi
  mkdir -p "$GRADLE_DIST"
  unzip -q -o "$TMP_DIR/gradle.zip" -d "$GRADLE_DIST"
fi

cd "$APP_HOME"
exec "$GRADLE_DIST/$GRADLE_VERSION_DIR/bin/gradle" "$@"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_properties_escape_colons() {
        let content = GradleWrapperProperties::new("8.5").render();
        assert!(content.contains(
            "distributionUrl=https\\://services.gradle.org/distributions/gradle-8.5-bin.zip\n"
        ));
    }

    #[test]
    fn test_default_version_matches_platform() {
        let content = GradleWrapperProperties::default().render();
        assert!(content.contains("/gradle-4.10.2-bin.zip\n"));
    }

    #[test]
    fn test_gradlew_is_executable() {
        assert!(Gradlew.rules().executable);
        assert_eq!(Gradlew.path(Path::new("demo")), Path::new("demo/gradlew"));
    }
}
