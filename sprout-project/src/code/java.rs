use sprout_codegen::source::{
    Annotation, Expression, FunctionDeclaration, Modifier, Statement, TypeDeclaration,
};
use sprout_core::Language;
use sprout_manifest::ProjectDescription;

use super::{
    JUNIT_TEST, SPRING_APPLICATION, SPRING_APPLICATION_BUILDER, SourceCustomizers,
    class_reference,
};
use crate::conditions;

pub(super) fn register(description: &ProjectDescription, customizers: &mut SourceCustomizers) {
    let application = class_reference(Language::Java, &description.application_name);

    let reference = application.clone();
    customizers
        .main_application_type
        .register_fn("java-main-method", move |declaration: &mut TypeDeclaration| {
            declaration.set_modifiers([Modifier::Public]).add_function(
                FunctionDeclaration::new("main")
                    .with_modifiers([Modifier::Public, Modifier::Static])
                    .parameter("java.lang.String[]", "args")
                    .statement(Statement::Expression(Expression::invoke(
                        SPRING_APPLICATION,
                        "run",
                        [reference.as_str(), "args"],
                    ))),
            );
            Ok(())
        });

    customizers
        .test_application_type
        .register_fn("java-context-loads", |declaration: &mut TypeDeclaration| {
            declaration.set_modifiers([Modifier::Public]).add_function(
                FunctionDeclaration::new("contextLoads")
                    .with_modifiers([Modifier::Public])
                    .annotate(Annotation::new(JUNIT_TEST)),
            );
            Ok(())
        });

    if conditions::is_war(description) {
        customizers
            .servlet_initializer
            .register_fn("java-configure", move |declaration: &mut TypeDeclaration| {
                declaration.set_modifiers([Modifier::Public]).add_function(configure(
                    &application,
                    [Modifier::Protected, Modifier::Override],
                ));
                Ok(())
            });
    }
}

/// `configure(SpringApplicationBuilder)` returning `application.sources(<reference>)`.
pub(super) fn configure(
    reference: &str,
    modifiers: impl IntoIterator<Item = Modifier>,
) -> FunctionDeclaration {
    FunctionDeclaration::new("configure")
        .with_modifiers(modifiers)
        .returning(SPRING_APPLICATION_BUILDER)
        .parameter(SPRING_APPLICATION_BUILDER, "application")
        .statement(Statement::Return(Expression::invoke(
            "application",
            "sources",
            [reference],
        )))
}
