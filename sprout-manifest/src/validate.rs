//! Semantic checks run after sprout.toml was parsed.

use miette::SourceSpan;
use sprout_core::{is_valid_identifier, to_package_name};

use crate::{
    Result,
    error::SourceContext,
    manifest::{Manifest, ProjectConfig},
};

/// Java reserved keywords and literals that cannot appear in a package name.
pub(crate) const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while", "true", "false", "null", "_",
];

pub(crate) fn is_java_keyword(name: &str) -> bool {
    JAVA_KEYWORDS.contains(&name)
}

/// Span of the quoted string `"value"` in the source, without the quotes.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    find_value_spans(src, value).into_iter().next()
}

fn find_value_spans(src: &str, value: &str) -> Vec<SourceSpan> {
    let quoted = format!("\"{value}\"");
    src.match_indices(&quoted)
        .map(|(pos, _)| SourceSpan::from((pos + 1, value.len())))
        .collect()
}

/// Check every segment of a dotted name (group or package).
pub(crate) fn validate_qualified_name(
    name: &str,
    context: &str,
    ctx: &SourceContext,
    span: Option<SourceSpan>,
) -> Result<()> {
    for segment in name.split('.') {
        if segment.is_empty() {
            return Err(ctx.identifier(name, context, "segments cannot be empty", span));
        }
        if is_java_keyword(segment) {
            return Err(ctx.keyword(segment, context, span));
        }
        if !is_valid_identifier(segment) {
            return Err(ctx.identifier(
                name,
                context,
                format!("'{segment}' is not a valid identifier"),
                span,
            ));
        }
    }
    Ok(())
}

/// Check a value that ends up quoted in a build script: non-empty, and made
/// of letters, digits, `-`, `_` and `.` only.
fn validate_plain_value(value: &str, what: &str, ctx: &SourceContext) -> Result<()> {
    let span = find_value_span(ctx.src(), value);
    if value.is_empty() {
        return Err(ctx.invalid(format!("{what} cannot be empty"), span));
    }
    if let Some(c) = value
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return Err(ctx.invalid(
            format!("{what} '{value}' contains invalid character '{c}'"),
            span,
        ));
    }
    Ok(())
}

/// The package sources are generated in.
pub(crate) fn effective_package(project: &ProjectConfig) -> String {
    match &project.package {
        Some(package) => package.clone(),
        None => to_package_name(&project.group, &project.artifact),
    }
}

/// Validate the manifest after parsing.
pub(crate) fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    let project = &manifest.project;
    let src = ctx.src();

    validate_qualified_name(&project.group, "group", ctx, find_value_span(src, &project.group))?;
    validate_plain_value(&project.artifact, "artifact", ctx)?;
    validate_plain_value(&project.version, "version", ctx)?;
    validate_plain_value(&project.java_version, "java-version", ctx)?;
    if let Some(name) = &project.name {
        if name.trim().is_empty() {
            return Err(ctx.invalid(
                "project name cannot be empty",
                find_value_span(src, name),
            ));
        }
    }
    let package = effective_package(project);
    let package_span = match &project.package {
        Some(package) => find_value_span(src, package),
        None => find_value_span(src, &project.artifact),
    };
    validate_qualified_name(&package, "package", ctx, package_span)?;

    for dependency in &manifest.dependencies {
        let span = find_value_span(src, &dependency.id);
        if dependency.id.trim().is_empty() {
            return Err(ctx.invalid("dependency id cannot be empty", span));
        }
        if dependency.group.is_empty() || dependency.artifact.is_empty() {
            return Err(ctx.invalid(
                format!("dependency '{}' needs both a group and an artifact", dependency.id),
                span,
            ));
        }
        if let Some(version) = &dependency.version {
            validate_plain_value(version, "dependency version", ctx)?;
        }
    }

    for (index, dependency) in manifest.dependencies.iter().enumerate() {
        let duplicated = manifest.dependencies[..index]
            .iter()
            .any(|earlier| earlier.id == dependency.id);
        if duplicated {
            let spans = find_value_spans(src, &dependency.id);
            let first = spans.first().copied().unwrap_or_else(|| SourceSpan::from((0, 0)));
            let second = spans.get(1).copied().unwrap_or(first);
            return Err(ctx.duplicate(&dependency.id, first, second));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_keywords() {
        assert!(is_java_keyword("class"));
        assert!(is_java_keyword("new"));
        assert!(!is_java_keyword("example"));
    }

    #[test]
    fn test_find_value_span() {
        let src = "group = \"com.example\"\nartifact = \"demo\"\n";
        assert_eq!(find_value_span(src, "demo"), Some(SourceSpan::from((34, 4))));
        assert_eq!(find_value_span(src, "missing"), None);
    }

    #[test]
    fn test_validate_qualified_name() {
        let ctx = SourceContext::new("", "sprout.toml");
        assert!(validate_qualified_name("com.example", "group", &ctx, None).is_ok());
        assert!(matches!(
            *validate_qualified_name("com..example", "group", &ctx, None).unwrap_err(),
            crate::Error::InvalidIdentifier { .. }
        ));
        assert!(matches!(
            *validate_qualified_name("com.1example", "group", &ctx, None).unwrap_err(),
            crate::Error::InvalidIdentifier { .. }
        ));
        assert!(matches!(
            *validate_qualified_name("com.new", "package", &ctx, None).unwrap_err(),
            crate::Error::ReservedKeyword { .. }
        ));
    }
}
