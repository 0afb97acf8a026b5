//! Import collection utilities.

use std::collections::BTreeSet;

use indexmap::IndexMap;

/// Tracks imports and deduplicates them.
///
/// Packages keep insertion order; symbols within a package are sorted.
///
/// # Example
///
/// ```
/// use sprout_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// assert_eq!(imports.add_qualified("org.springframework.boot.SpringApplication"), "SpringApplication");
/// assert_eq!(imports.add_qualified("java.util.List<String>"), "List<String>");
/// assert_eq!(imports.add_qualified("String[]"), "String[]");
///
/// assert_eq!(
///     imports.qualified_names(),
///     ["java.util.List", "org.springframework.boot.SpringApplication"]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    /// Package -> set of symbols (sorted for deterministic output)
    imports: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol import from a package.
    pub fn add(&mut self, package: &str, symbol: &str) {
        self.imports
            .entry(package.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Import the qualified part of `name`, if any, and return the text to
    /// use in code.
    pub fn add_qualified(&mut self, name: &str) -> String {
        if let Some((package, symbol)) = split_qualified(name) {
            self.add(package, symbol);
        }
        simple_name(name)
    }

    /// Merge another collector into this one.
    pub fn merge(&mut self, other: &ImportCollector) {
        for (package, symbols) in &other.imports {
            let entry = self.imports.entry(package.clone()).or_default();
            entry.extend(symbols.iter().cloned());
        }
    }

    /// Check if a package is already imported.
    pub fn has_package(&self, package: &str) -> bool {
        self.imports.contains_key(package)
    }

    /// Check if a specific symbol is imported from a package.
    pub fn has_symbol(&self, package: &str, symbol: &str) -> bool {
        self.imports
            .get(package)
            .is_some_and(|symbols| symbols.contains(symbol))
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Every imported `package.Symbol`, sorted.
    pub fn qualified_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .iter()
            .flat_map(|(package, symbols)| symbols.iter().map(move |s| format!("{package}.{s}")))
            .collect();
        names.sort();
        names
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Get the number of packages.
    pub fn len(&self) -> usize {
        self.imports.len()
    }
}

/// The part of a type name before any generic arguments or array brackets.
fn base_name(name: &str) -> &str {
    match name.find(['<', '[']) {
        Some(end) => &name[..end],
        None => name,
    }
}

/// `org.example.Type<T>` -> `Some(("org.example", "Type"))`; `None` for simple names.
pub fn split_qualified(name: &str) -> Option<(&str, &str)> {
    base_name(name.trim()).rsplit_once('.')
}

/// `org.example.Type<T>` -> `Type<T>`.
pub fn simple_name(name: &str) -> String {
    let name = name.trim();
    let base = base_name(name);
    match base.rsplit_once('.') {
        Some((_, symbol)) => format!("{}{}", symbol, &name[base.len()..]),
        None => name.to_string(),
    }
}
