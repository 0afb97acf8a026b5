use sprout_codegen::source::{
    Annotation, CompilationUnit, Expression, FunctionDeclaration, Modifier, Statement,
    TypeDeclaration,
};
use sprout_core::Language;
use sprout_manifest::ProjectDescription;

use super::{JUNIT_TEST, SPRING_APPLICATION, SourceCustomizers, class_reference, java};
use crate::conditions;

const RUN_APPLICATION: &str = "org.springframework.boot.runApplication";

pub(super) fn register(description: &ProjectDescription, customizers: &mut SourceCustomizers) {
    let name = description.application_name.clone();
    let reference = class_reference(Language::Kotlin, &name);

    // `runApplication` ships with Spring Boot 2.
    let run = if conditions::platform_at_least(description, 2) {
        Expression::reified(RUN_APPLICATION, name.as_str(), ["*args"])
    } else {
        Expression::invoke(SPRING_APPLICATION, "run", [reference.as_str(), "*args"])
    };
    customizers
        .main_compilation_unit
        .register_fn("kotlin-main-function", move |unit: &mut CompilationUnit| {
            unit.add_top_level_function(
                FunctionDeclaration::new("main")
                    .parameter("Array<String>", "args")
                    .statement(Statement::Expression(run.clone())),
            );
            Ok(())
        });

    customizers
        .test_application_type
        .register_fn("kotlin-context-loads", |declaration: &mut TypeDeclaration| {
            declaration.add_function(
                FunctionDeclaration::new("contextLoads").annotate(Annotation::new(JUNIT_TEST)),
            );
            Ok(())
        });

    if conditions::is_war(description) {
        customizers
            .servlet_initializer
            .register_fn("kotlin-configure", move |declaration: &mut TypeDeclaration| {
                declaration.add_function(java::configure(&reference, [Modifier::Override]));
                Ok(())
            });
    }
}
