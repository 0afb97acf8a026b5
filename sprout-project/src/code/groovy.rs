use sprout_codegen::source::{
    Annotation, Expression, FunctionDeclaration, Modifier, Statement, TypeDeclaration,
};
use sprout_core::Language;
use sprout_manifest::ProjectDescription;

use super::{JUNIT_TEST, SPRING_APPLICATION, SourceCustomizers, class_reference, java};
use crate::conditions;

pub(super) fn register(description: &ProjectDescription, customizers: &mut SourceCustomizers) {
    let application = class_reference(Language::Groovy, &description.application_name);

    let reference = application.clone();
    customizers
        .main_application_type
        .register_fn("groovy-main-method", move |declaration: &mut TypeDeclaration| {
            declaration.add_function(
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
        .register_fn("groovy-context-loads", |declaration: &mut TypeDeclaration| {
            declaration.add_function(
                FunctionDeclaration::new("contextLoads").annotate(Annotation::new(JUNIT_TEST)),
            );
            Ok(())
        });

    if conditions::is_war(description) {
        customizers
            .servlet_initializer
            .register_fn("groovy-configure", move |declaration: &mut TypeDeclaration| {
                declaration.add_function(java::configure(
                    &application,
                    [Modifier::Protected, Modifier::Override],
                ));
                Ok(())
            });
    }
}
