//! Shared utility functions for code generation.

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld").
///
/// `_`, `-`, `.` and whitespace all separate words.
pub fn to_pascal_case(s: &str) -> String {
    s.split(|c: char| c == '_' || c == '-' || c == '.' || c.is_whitespace())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Derive a JVM package name from a group and an artifact id
/// (e.g., "com.example" + "my-app" -> "com.example.myapp").
pub fn to_package_name(group: &str, artifact: &str) -> String {
    let raw = if artifact.is_empty() {
        group.to_string()
    } else {
        format!("{}.{}", group, artifact)
    };

    raw.split('.')
        .map(|segment| {
            let cleaned: String = segment
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
                .collect::<String>()
                .to_lowercase();
            match cleaned.chars().next() {
                Some(c) if c.is_ascii_digit() => format!("_{}", cleaned),
                _ => cleaned,
            }
        })
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

/// Derive the main application class name from a project name
/// (e.g., "demo" -> "DemoApplication").
///
/// Falls back to `Application` when the name yields no valid identifier.
pub fn to_application_name(name: &str) -> String {
    let candidate: String = to_pascal_case(name)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();

    match candidate.chars().next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            if candidate.ends_with("Application") {
                candidate
            } else {
                format!("{}Application", candidate)
            }
        }
        _ => "Application".to_string(),
    }
}

/// Check that a string is a usable JVM identifier (ASCII subset).
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}
