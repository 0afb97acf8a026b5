//! Rendering tests for build.gradle and settings.gradle.
//!
//! Run `cargo insta review` after changing the renderers to inspect snapshot changes.

use sprout_codegen::build::{Dependency, DependencyScope, GradleBuild, Repository};
use sprout_codegen::builder::{Indent, IndentStyles};
use sprout_codegen_gradle::{GradleBuildWriter, GradleSettingsWriter};

/// Write settings.gradle into a temporary project and read its lines back.
fn generate_settings(build: &GradleBuild, styles: &IndentStyles) -> Vec<String> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.gradle");
    sprout_core::write_file(&path, &GradleSettingsWriter::new(styles).write(build)).unwrap();
    std::fs::read_to_string(&path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn assert_contains_sequence(lines: &[String], expected: &[&str]) {
    let found = lines
        .windows(expected.len())
        .any(|window| window.iter().zip(expected).all(|(a, b)| a == b));
    assert!(found, "{expected:#?} not found in:\n{}", lines.join("\n"));
}

fn render(build: &GradleBuild) -> String {
    GradleBuildWriter::new(&IndentStyles::default())
        .write(build)
        .unwrap()
}

#[test]
fn settings_lists_plugin_repositories() {
    let mut build = GradleBuild::new();
    build.add_plugin_repository(Repository::maven_central());
    let lines = generate_settings(&build, &IndentStyles::default());
    assert_contains_sequence(
        &lines,
        &[
            "pluginManagement {",
            "    repositories {",
            "        mavenCentral()",
            "        gradlePluginPortal()",
            "    }",
            "}",
        ],
    );
}

#[test]
fn settings_uses_gradle_indent() {
    let styles = IndentStyles::new(Indent::Spaces(4)).with("gradle", Indent::Spaces(2));
    let mut build = GradleBuild::new();
    build.add_plugin_repository(Repository::maven_central());
    let lines = generate_settings(&build, &styles);
    assert_contains_sequence(
        &lines,
        &[
            "pluginManagement {",
            "  repositories {",
            "    mavenCentral()",
            "    gradlePluginPortal()",
            "  }",
            "}",
        ],
    );
}

#[test]
fn settings_ignores_dependency_repositories() {
    let mut build = GradleBuild::new();
    build.add_repository(Repository::maven_central());
    let lines = generate_settings(&build, &IndentStyles::default());
    assert_contains_sequence(
        &lines,
        &[
            "pluginManagement {",
            "    repositories {",
            "        gradlePluginPortal()",
            "    }",
            "}",
        ],
    );
}

#[test]
fn dependencies_are_sorted() {
    let mut build = GradleBuild::new();
    build.add_dependency(Dependency::artifact("org.zeta", "zeta", DependencyScope::Compile));
    build.add_dependency(Dependency::artifact("com.beta", "beta", DependencyScope::Runtime));
    build.add_dependency(Dependency::artifact("com.alpha", "alpha", DependencyScope::TestCompile));
    build.add_dependency(Dependency::artifact("com.beta", "annotations", DependencyScope::AnnotationProcessor));

    let gradle = render(&build);
    assert!(gradle.contains(
        "dependencies {\n\
         \x20   testImplementation 'com.alpha:alpha'\n\
         \x20   annotationProcessor 'com.beta:annotations'\n\
         \x20   runtimeOnly 'com.beta:beta'\n\
         \x20   implementation 'org.zeta:zeta'\n\
         }\n"
    ));
}

#[test]
fn tasks_keep_insertion_order() {
    let mut build = GradleBuild::new();
    build.customize_task("compileKotlin", |task| {
        task.set("kotlinOptions.freeCompilerArgs", "['-Xjsr305=strict']");
        task.set("kotlinOptions.jvmTarget", "'1.8'");
    });
    build.customize_task("asciidoctor", |task| {
        task.invoke("inputs.dir", ["snippetsDir"]);
    });
    build.customize_task("compileKotlin", |task| {
        task.invoke("dependsOn", ["processResources"]);
    });

    let gradle = render(&build);
    assert!(gradle.ends_with(
        "compileKotlin {\n\
         \x20   kotlinOptions.freeCompilerArgs = ['-Xjsr305=strict']\n\
         \x20   kotlinOptions.jvmTarget = '1.8'\n\
         \x20   dependsOn processResources\n\
         }\n\
         \n\
         asciidoctor {\n\
         \x20   inputs.dir snippetsDir\n\
         }\n\
         \n"
    ));
}

#[test]
fn build_gradle_for_documented_web_application() {
    let mut build = GradleBuild::new();
    build.add_plugin("org.springframework.boot", Some("2.1.0.RELEASE"));
    build.add_plugin("java", None);
    build.apply_plugin("io.spring.dependency-management");
    build.set_group("com.example");
    build.set_version("0.0.1-SNAPSHOT");
    build.set_java_version("1.8");
    build.add_repository(Repository::maven_central());
    build.add_dependency(Dependency::new(
        "web",
        "org.springframework.boot",
        "spring-boot-starter-web",
        DependencyScope::Compile,
    ));
    build.add_dependency(Dependency::new(
        "restdocs",
        "org.springframework.restdocs",
        "spring-restdocs-mockmvc",
        DependencyScope::TestCompile,
    ));
    build.add_dependency(Dependency::new(
        "test",
        "org.springframework.boot",
        "spring-boot-starter-test",
        DependencyScope::TestCompile,
    ));
    build.add_plugin("org.asciidoctor.convert", Some("1.5.3"));
    build.set_ext("snippetsDir", "file(\"build/generated-snippets\")");
    build.customize_task("test", |task| {
        task.invoke("outputs.dir", ["snippetsDir"]);
    });
    build.customize_task("asciidoctor", |task| {
        task.invoke("inputs.dir", ["snippetsDir"])
            .invoke("dependsOn", ["test"]);
    });

    insta::assert_snapshot!(render(&build), @r#"
plugins {
    id 'org.springframework.boot' version '2.1.0.RELEASE'
    id 'java'
    id 'org.asciidoctor.convert' version '1.5.3'
}

apply plugin: 'io.spring.dependency-management'

group = 'com.example'
version = '0.0.1-SNAPSHOT'
sourceCompatibility = '1.8'

ext {
    set('snippetsDir', file("build/generated-snippets"))
}

repositories {
    mavenCentral()
}

dependencies {
    testImplementation 'org.springframework.boot:spring-boot-starter-test'
    implementation 'org.springframework.boot:spring-boot-starter-web'
    testImplementation 'org.springframework.restdocs:spring-restdocs-mockmvc'
}

test {
    outputs.dir snippetsDir
}

asciidoctor {
    inputs.dir snippetsDir
    dependsOn test
}
"#);
}

#[test]
fn development_only_dependencies_get_a_configuration() {
    let mut build = GradleBuild::new();
    build.add_plugin("org.springframework.boot", Some("2.1.0.RELEASE"));
    build.add_plugin("java", None);
    build.add_dependency(Dependency::new(
        "devtools",
        "org.springframework.boot",
        "spring-boot-devtools",
        DependencyScope::DevelopmentOnly,
    ));
    build.add_dependency(Dependency::new(
        "web",
        "org.springframework.boot",
        "spring-boot-starter-web",
        DependencyScope::Compile,
    ));

    insta::assert_snapshot!(render(&build), @r"
plugins {
    id 'org.springframework.boot' version '2.1.0.RELEASE'
    id 'java'
}

configurations {
    developmentOnly
    runtimeClasspath {
        extendsFrom developmentOnly
    }
}

dependencies {
    developmentOnly 'org.springframework.boot:spring-boot-devtools'
    implementation 'org.springframework.boot:spring-boot-starter-web'
}
");
}
