//! Language-neutral syntax tree for generated application sources.
//!
//! Type names are written fully qualified (`org.springframework.boot.SpringApplication`);
//! writers turn them into imports plus simple names.

use sprout_core::Language;

/// A source file: a package, its types and top-level functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationUnit {
    package: String,
    name: String,
    types: Vec<TypeDeclaration>,
    functions: Vec<FunctionDeclaration>,
}

impl CompilationUnit {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
            types: Vec::new(),
            functions: Vec::new(),
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// File name without extension.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_declarations(&self) -> &[TypeDeclaration] {
        &self.types
    }

    pub fn type_declarations_mut(&mut self) -> &mut [TypeDeclaration] {
        &mut self.types
    }

    pub fn add_type_declaration(&mut self, declaration: TypeDeclaration) -> &mut TypeDeclaration {
        self.types.push(declaration);
        let last = self.types.len() - 1;
        &mut self.types[last]
    }

    /// Functions declared outside any type (Kotlin only).
    pub fn top_level_functions(&self) -> &[FunctionDeclaration] {
        &self.functions
    }

    pub fn add_top_level_function(&mut self, function: FunctionDeclaration) -> &mut Self {
        self.functions.push(function);
        self
    }

    /// Path of this unit below the project root, e.g.
    /// `src/main/java/com/example/demo/DemoApplication.java`.
    pub fn relative_path(&self, source_set: &str, language: Language) -> String {
        let mut path = format!("src/{}/{}/", source_set, language.as_str());
        if !self.package.is_empty() {
            path.push_str(&self.package.replace('.', "/"));
            path.push('/');
        }
        path.push_str(&self.name);
        path.push('.');
        path.push_str(language.source_extension());
        path
    }
}

/// A class declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    name: String,
    extends: Option<String>,
    annotations: Vec<Annotation>,
    modifiers: Vec<Modifier>,
    functions: Vec<FunctionDeclaration>,
}

impl TypeDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: None,
            annotations: Vec::new(),
            modifiers: Vec::new(),
            functions: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extends(&self) -> Option<&str> {
        self.extends.as_deref()
    }

    pub fn set_extends(&mut self, supertype: impl Into<String>) -> &mut Self {
        self.extends = Some(supertype.into());
        self
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn annotate(&mut self, annotation: Annotation) -> &mut Self {
        self.annotations.push(annotation);
        self
    }

    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    pub fn set_modifiers(&mut self, modifiers: impl IntoIterator<Item = Modifier>) -> &mut Self {
        self.modifiers = modifiers.into_iter().collect();
        self
    }

    pub fn functions(&self) -> &[FunctionDeclaration] {
        &self.functions
    }

    pub fn add_function(&mut self, function: FunctionDeclaration) -> &mut Self {
        self.functions.push(function);
        self
    }
}

/// A function or method declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDeclaration {
    name: String,
    return_type: Option<String>,
    parameters: Vec<Parameter>,
    modifiers: Vec<Modifier>,
    annotations: Vec<Annotation>,
    body: Vec<Statement>,
}

impl FunctionDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: None,
            parameters: Vec::new(),
            modifiers: Vec::new(),
            annotations: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn returning(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = Some(return_type.into());
        self
    }

    pub fn parameter(mut self, type_name: impl Into<String>, name: impl Into<String>) -> Self {
        self.parameters.push(Parameter::new(type_name, name));
        self
    }

    pub fn with_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers = modifiers.into_iter().collect();
        self
    }

    pub fn annotate(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn statement(mut self, statement: Statement) -> Self {
        self.body.push(statement);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `None` means no declared return type (`void` / `Unit`).
    pub fn return_type(&self) -> Option<&str> {
        self.return_type.as_deref()
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Body statements; empty means an empty body.
    pub fn body(&self) -> &[Statement] {
        &self.body
    }
}

/// A function parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub type_name: String,
    pub name: String,
}

impl Parameter {
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
        }
    }
}

/// An annotation with optional attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub name: String,
    pub attributes: Vec<(String, AnnotationValue)>,
}

impl Annotation {
    /// An annotation by fully-qualified name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    pub fn attribute(mut self, name: impl Into<String>, value: AnnotationValue) -> Self {
        self.attributes.push((name.into(), value));
        self
    }
}

/// The value of an annotation attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationValue {
    /// A class literal, by fully-qualified name.
    Class(String),
    /// Raw source text, written as-is.
    Raw(String),
}

/// Declaration modifiers. Writers drop the ones their language implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Static,
    Final,
    Abstract,
    Override,
    Open,
}

/// A statement of a function body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Expression(Expression),
    Return(Expression),
}

/// An expression of a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// `<target>.<name>(<arguments>)`; a qualified target is imported.
    Invocation {
        target: String,
        name: String,
        arguments: Vec<String>,
    },
    /// `<function><<type_argument>>(<arguments>)`, Kotlin reified call of a
    /// fully-qualified top-level function.
    ReifiedInvocation {
        function: String,
        type_argument: String,
        arguments: Vec<String>,
    },
}

impl Expression {
    pub fn invoke<I, S>(target: impl Into<String>, name: impl Into<String>, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Expression::Invocation {
            target: target.into(),
            name: name.into(),
            arguments: arguments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn reified<I, S>(
        function: impl Into<String>,
        type_argument: impl Into<String>,
        arguments: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Expression::ReifiedInvocation {
            function: function.into(),
            type_argument: type_argument.into(),
            arguments: arguments.into_iter().map(Into::into).collect(),
        }
    }
}

/// A set of compilation units for one source set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceCode {
    units: Vec<CompilationUnit>,
}

impl SourceCode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, unit: CompilationUnit) -> &mut CompilationUnit {
        self.units.push(unit);
        let last = self.units.len() - 1;
        &mut self.units[last]
    }

    pub fn units(&self) -> &[CompilationUnit] {
        &self.units
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
