//! Application and test source skeletons.
//!
//! Sources start as empty declarations which the registered customizers
//! fill in: annotations shared by every language first, then the bits
//! specific to the project's language.

mod groovy;
mod java;
mod kotlin;

use eyre::Result;
use sprout_codegen::{
    customize::Customizers,
    source::{Annotation, AnnotationValue, CompilationUnit, SourceCode, TypeDeclaration},
};
use sprout_core::Language;
use sprout_manifest::ProjectDescription;

use crate::conditions;

pub const SPRING_BOOT_APPLICATION: &str =
    "org.springframework.boot.autoconfigure.SpringBootApplication";
pub const SPRING_APPLICATION: &str = "org.springframework.boot.SpringApplication";
pub const SERVLET_INITIALIZER: &str =
    "org.springframework.boot.web.servlet.support.SpringBootServletInitializer";
pub const SPRING_APPLICATION_BUILDER: &str =
    "org.springframework.boot.builder.SpringApplicationBuilder";
const JUNIT_TEST: &str = "org.junit.Test";

/// Name of the class configuring war deployments.
pub const SERVLET_INITIALIZER_NAME: &str = "ServletInitializer";

/// Customizers of the generated sources.
#[derive(Debug, Default)]
pub struct SourceCustomizers {
    /// The `@SpringBootApplication` class.
    pub main_application_type: Customizers<TypeDeclaration>,
    /// The compilation unit holding the application class.
    pub main_compilation_unit: Customizers<CompilationUnit>,
    /// The `<Name>ApplicationTests` class.
    pub test_application_type: Customizers<TypeDeclaration>,
    /// The `ServletInitializer` class of war projects.
    pub servlet_initializer: Customizers<TypeDeclaration>,
}

impl SourceCustomizers {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The source customizers `description` asks for.
pub fn source_customizers(description: &ProjectDescription) -> SourceCustomizers {
    let mut customizers = SourceCustomizers::new();
    customizers
        .main_application_type
        .register_fn("spring-boot-application", |declaration: &mut TypeDeclaration| {
            declaration.annotate(Annotation::new(SPRING_BOOT_APPLICATION));
            Ok(())
        });
    customizers
        .test_application_type
        .register_fn("spring-boot-test", |declaration: &mut TypeDeclaration| {
            declaration
                .annotate(Annotation::new("org.junit.runner.RunWith").attribute(
                    "value",
                    AnnotationValue::Class(
                        "org.springframework.test.context.junit4.SpringRunner".to_string(),
                    ),
                ))
                .annotate(Annotation::new(
                    "org.springframework.boot.test.context.SpringBootTest",
                ));
            Ok(())
        });
    if conditions::is_war(description) {
        customizers
            .servlet_initializer
            .register_fn("servlet-initializer", |declaration: &mut TypeDeclaration| {
                declaration.set_extends(SERVLET_INITIALIZER);
                Ok(())
            });
    }

    match description.language {
        Language::Java => java::register(description, &mut customizers),
        Language::Kotlin => kotlin::register(description, &mut customizers),
        Language::Groovy => groovy::register(description, &mut customizers),
    }
    customizers
}

/// The `src/main` compilation units: the application and, for war
/// packaging, the servlet initializer.
pub fn main_source(
    description: &ProjectDescription,
    customizers: &SourceCustomizers,
) -> Result<SourceCode> {
    let package = description.package_name.as_str();
    let name = description.application_name.as_str();
    let mut source = SourceCode::new();

    let mut application = TypeDeclaration::new(name);
    customizers.main_application_type.customize(&mut application)?;
    let unit = source.add(CompilationUnit::new(package, name));
    unit.add_type_declaration(application);
    customizers.main_compilation_unit.customize(unit)?;

    if conditions::is_war(description) {
        let mut initializer = TypeDeclaration::new(SERVLET_INITIALIZER_NAME);
        customizers.servlet_initializer.customize(&mut initializer)?;
        source
            .add(CompilationUnit::new(package, SERVLET_INITIALIZER_NAME))
            .add_type_declaration(initializer);
    }
    Ok(source)
}

/// The `src/test` compilation unit checking the application context loads.
pub fn test_source(
    description: &ProjectDescription,
    customizers: &SourceCustomizers,
) -> Result<SourceCode> {
    let name = format!("{}Tests", description.application_name);
    let mut tests = TypeDeclaration::new(name.as_str());
    customizers.test_application_type.customize(&mut tests)?;

    let mut source = SourceCode::new();
    source
        .add(CompilationUnit::new(description.package_name.as_str(), name))
        .add_type_declaration(tests);
    Ok(source)
}

/// Expression referring to the application class, e.g. `DemoApplication.class`.
fn class_reference(language: Language, name: &str) -> String {
    match language {
        Language::Java => format!("{name}.class"),
        Language::Kotlin => format!("{name}::class.java"),
        Language::Groovy => name.to_string(),
    }
}
