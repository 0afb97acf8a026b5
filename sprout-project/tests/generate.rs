//! End-to-end generation into temporary directories.
//!
//! Run `cargo insta review` after changing a renderer to inspect snapshot changes.

use std::{fs, path::Path};

use sprout_codegen::build::RenderError;
use sprout_manifest::{Manifest, ProjectDescription};
use sprout_project::ProjectGenerator;

fn description(src: &str) -> ProjectDescription {
    let manifest: Manifest = src.parse().unwrap();
    ProjectDescription::from(&manifest)
}

fn read(dir: &Path, path: &str) -> String {
    fs::read_to_string(dir.join(path)).unwrap()
}

const JAVA_MAVEN: &str = r#"
[project]
group = "com.example"
artifact = "demo"
"#;

const KOTLIN_GRADLE_WAR: &str = r#"
[project]
group = "com.example"
artifact = "demo"
language = "kotlin"
build = "gradle"
packaging = "war"

[[dependencies]]
id = "web"
group = "org.springframework.boot"
artifact = "spring-boot-starter-web"
guides = [{ href = "https://spring.io/guides/gs/rest-service/", label = "Building a RESTful Web Service" }]

[[dependencies]]
id = "restdocs"
group = "org.springframework.restdocs"
artifact = "spring-restdocs-mockmvc"
scope = "test-compile"
"#;

#[test]
fn java_maven_project() {
    let dir = tempfile::tempdir().unwrap();
    let stats = ProjectGenerator::new(description(JAVA_MAVEN))
        .generate(dir.path())
        .unwrap();
    assert_eq!(stats.written, 7);
    assert_eq!(stats.skipped, 0);

    insta::assert_snapshot!(read(dir.path(), "pom.xml"), @r#"
<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
        xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 https://maven.apache.org/xsd/maven-4.0.0.xsd">
    <modelVersion>4.0.0</modelVersion>
    <parent>
        <groupId>org.springframework.boot</groupId>
        <artifactId>spring-boot-starter-parent</artifactId>
        <version>2.1.0.RELEASE</version>
        <relativePath/>
    </parent>
    <groupId>com.example</groupId>
    <artifactId>demo</artifactId>
    <version>0.0.1-SNAPSHOT</version>
    <name>demo</name>
    <description>Demo project for Spring Boot</description>

    <properties>
        <java.version>1.8</java.version>
    </properties>

    <dependencies>
        <dependency>
            <groupId>org.springframework.boot</groupId>
            <artifactId>spring-boot-starter</artifactId>
        </dependency>
        <dependency>
            <groupId>org.springframework.boot</groupId>
            <artifactId>spring-boot-starter-test</artifactId>
            <scope>test</scope>
        </dependency>
    </dependencies>

    <build>
        <plugins>
            <plugin>
                <groupId>org.springframework.boot</groupId>
                <artifactId>spring-boot-maven-plugin</artifactId>
            </plugin>
        </plugins>
    </build>

</project>
"#);

    insta::assert_snapshot!(
        read(dir.path(), "src/main/java/com/example/demo/DemoApplication.java"),
        @r"
package com.example.demo;

import org.springframework.boot.SpringApplication;
import org.springframework.boot.autoconfigure.SpringBootApplication;

@SpringBootApplication
public class DemoApplication {

    public static void main(String[] args) {
        SpringApplication.run(DemoApplication.class, args);
    }

}
"
    );

    let tests = read(dir.path(), "src/test/java/com/example/demo/DemoApplicationTests.java");
    assert!(tests.contains("@RunWith(SpringRunner.class)\n@SpringBootTest\npublic class DemoApplicationTests {"));
    assert!(tests.contains("    @Test\n    public void contextLoads() {\n    }\n"));

    assert_eq!(read(dir.path(), "src/main/resources/application.properties"), "");
    assert!(read(dir.path(), ".gitignore").contains("target/"));
    assert!(read(dir.path(), ".mvn/wrapper/maven-wrapper.properties").contains("distributionUrl="));
    assert!(!dir.path().join("HELP.md").exists());
}

#[cfg(unix)]
#[test]
fn wrapper_script_is_executable() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    ProjectGenerator::new(description(JAVA_MAVEN))
        .generate(dir.path())
        .unwrap();
    let mode = fs::metadata(dir.path().join("mvnw")).unwrap().permissions().mode();
    assert_ne!(mode & 0o111, 0);
}

#[test]
fn kotlin_gradle_war_project() {
    let dir = tempfile::tempdir().unwrap();
    ProjectGenerator::new(description(KOTLIN_GRADLE_WAR))
        .generate(dir.path())
        .unwrap();

    insta::assert_snapshot!(read(dir.path(), "build.gradle"), @r#"
plugins {
    id 'org.springframework.boot' version '2.1.0.RELEASE'
    id 'org.jetbrains.kotlin.jvm' version '1.2.71'
    id 'org.jetbrains.kotlin.plugin.spring' version '1.2.71'
    id 'war'
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
    implementation 'org.jetbrains.kotlin:kotlin-reflect'
    implementation 'org.jetbrains.kotlin:kotlin-stdlib-jdk8'
    testImplementation 'org.springframework.boot:spring-boot-starter-test'
    providedRuntime 'org.springframework.boot:spring-boot-starter-tomcat'
    implementation 'org.springframework.boot:spring-boot-starter-web'
    testImplementation 'org.springframework.restdocs:spring-restdocs-mockmvc'
}

compileKotlin {
    kotlinOptions.freeCompilerArgs = ['-Xjsr305=strict']
    kotlinOptions.jvmTarget = '1.8'
}

compileTestKotlin {
    kotlinOptions.freeCompilerArgs = ['-Xjsr305=strict']
    kotlinOptions.jvmTarget = '1.8'
}

test {
    outputs.dir snippetsDir
}

asciidoctor {
    inputs.dir snippetsDir
    dependsOn test
}
"#);

    let settings = read(dir.path(), "settings.gradle");
    assert!(settings.contains("gradlePluginPortal()"));
    assert!(settings.contains("rootProject.name = 'demo'"));

    insta::assert_snapshot!(
        read(dir.path(), "src/main/kotlin/com/example/demo/DemoApplication.kt"),
        @r"
package com.example.demo

import org.springframework.boot.autoconfigure.SpringBootApplication
import org.springframework.boot.runApplication

@SpringBootApplication
class DemoApplication

fun main(args: Array<String>) {
    runApplication<DemoApplication>(*args)
}
"
    );

    let initializer = read(
        dir.path(),
        "src/main/kotlin/com/example/demo/ServletInitializer.kt",
    );
    assert!(initializer.contains("class ServletInitializer : SpringBootServletInitializer() {"));
    assert!(initializer.contains(
        "    override fun configure(application: SpringApplicationBuilder): SpringApplicationBuilder {\n\
         \x20       return application.sources(DemoApplication::class.java)\n"
    ));
    assert!(dir.path().join("src/test/kotlin/com/example/demo/DemoApplicationTests.kt").exists());
    assert!(dir.path().join("gradlew").exists());
    assert!(dir.path().join("gradle/wrapper/gradle-wrapper.properties").exists());

    let help: Vec<_> = read(dir.path(), "HELP.md").lines().map(str::to_string).collect();
    assert_eq!(
        help,
        [
            "# Getting Started",
            "",
            "### Guides",
            "The following guides illustrates how to use certain features concretely:",
            "",
            "* [Building a RESTful Web Service](https://spring.io/guides/gs/rest-service/)",
            "",
        ]
    );
}

#[test]
fn kotlin_before_2_0_uses_spring_application() {
    let src = format!("{JAVA_MAVEN}language = \"kotlin\"\nplatform-version = \"1.5.17.RELEASE\"\n");
    let files = ProjectGenerator::new(description(&src)).preview().unwrap();
    let application = files
        .iter()
        .find(|f| f.path.ends_with("DemoApplication.kt"))
        .unwrap();
    assert!(application.content.contains("SpringApplication.run(DemoApplication::class.java, *args)"));
    let pom = &files[0];
    assert_eq!(pom.path, "pom.xml");
    assert!(pom.content.contains("<kotlin.version>1.2.71</kotlin.version>"));
    assert!(pom.content.contains("<artifactId>kotlin-stdlib-jre8</artifactId>"));
}

#[test]
fn milestone_platform_adds_spring_repositories() {
    let src = format!("{JAVA_MAVEN}build = \"gradle\"\nplatform-version = \"2.1.0.M4\"\n");
    let files = ProjectGenerator::new(description(&src)).preview().unwrap();
    let script = &files.iter().find(|f| f.path == "build.gradle").unwrap().content;
    assert!(script.contains(
        "repositories {\n\
         \x20   mavenCentral()\n\
         \x20   maven { url 'https://repo.spring.io/snapshot' }\n\
         \x20   maven { url 'https://repo.spring.io/milestone' }\n\
         }\n"
    ));
    let settings = &files.iter().find(|f| f.path == "settings.gradle").unwrap().content;
    assert!(settings.contains("maven { url 'https://repo.spring.io/milestone' }"));
}

#[test]
fn groovy_maven_project() {
    let src = format!("{JAVA_MAVEN}language = \"groovy\"\n");
    let files = ProjectGenerator::new(description(&src)).preview().unwrap();
    let pom = &files[0].content;
    assert!(pom.contains("<artifactId>gmavenplus-plugin</artifactId>"));
    assert!(pom.contains("<goal>removeTestStubs</goal>"));
    let application = files
        .iter()
        .find(|f| f.path == "src/main/groovy/com/example/demo/DemoApplication.groovy")
        .unwrap();
    assert!(application.content.contains("SpringApplication.run(DemoApplication, args)"));
}

#[test]
fn manifest_indent_applies_per_content_kind() {
    let src = format!("{JAVA_MAVEN}\n[indent]\ndefault = \"2\"\nmaven = \"tab\"\n");
    let files = ProjectGenerator::new(description(&src)).preview().unwrap();
    assert!(files[0].content.contains("\n\t<modelVersion>4.0.0</modelVersion>\n"));
    let application = files
        .iter()
        .find(|f| f.path.ends_with("DemoApplication.java"))
        .unwrap();
    assert!(application.content.contains("\n  public static void main(String[] args) {\n"));
}

#[test]
fn unmapped_scope_writes_nothing() {
    let src = format!(
        "{JAVA_MAVEN}\n[[dependencies]]\nid = \"bom\"\ngroup = \"com.example\"\nartifact = \"bom\"\nscope = \"import\"\n"
    );
    let dir = tempfile::tempdir().unwrap();
    let err = ProjectGenerator::new(description(&src))
        .generate(dir.path())
        .unwrap_err();

    assert_eq!(err.to_string(), "contributor 'build-file' failed");
    let render_error = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<RenderError>())
        .unwrap();
    assert!(matches!(
        render_error,
        RenderError::UnmappedScope { dependency, .. } if dependency == "bom"
    ));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn existing_application_properties_is_kept() {
    let dir = tempfile::tempdir().unwrap();
    let properties = dir.path().join("src/main/resources/application.properties");
    fs::create_dir_all(properties.parent().unwrap()).unwrap();
    fs::write(&properties, "server.port=9000\n").unwrap();

    let stats = ProjectGenerator::new(description(JAVA_MAVEN))
        .generate(dir.path())
        .unwrap();
    assert_eq!(stats.skipped_paths, ["src/main/resources/application.properties"]);
    assert_eq!(fs::read_to_string(&properties).unwrap(), "server.port=9000\n");
}

const GRADLE_RUNTIME_SCOPES: &str = r#"
[project]
group = "com.example"
artifact = "demo"
build = "gradle"

[[dependencies]]
id = "devtools"
group = "org.springframework.boot"
artifact = "spring-boot-devtools"
scope = "development-only"

[[dependencies]]
id = "provided"
group = "org.example"
artifact = "provided-thing"
scope = "provided-runtime"
"#;

#[test]
fn gradle_jar_with_development_only_and_provided_runtime() {
    let dir = tempfile::tempdir().unwrap();
    ProjectGenerator::new(description(GRADLE_RUNTIME_SCOPES))
        .generate(dir.path())
        .unwrap();

    insta::assert_snapshot!(read(dir.path(), "build.gradle"), @r"
plugins {
    id 'org.springframework.boot' version '2.1.0.RELEASE'
    id 'java'
}

apply plugin: 'io.spring.dependency-management'

group = 'com.example'
version = '0.0.1-SNAPSHOT'
sourceCompatibility = '1.8'

repositories {
    mavenCentral()
}

configurations {
    developmentOnly
    runtimeClasspath {
        extendsFrom developmentOnly
    }
}

dependencies {
    runtimeOnly 'org.example:provided-thing'
    developmentOnly 'org.springframework.boot:spring-boot-devtools'
    implementation 'org.springframework.boot:spring-boot-starter'
    testImplementation 'org.springframework.boot:spring-boot-starter-test'
}
");
}

#[test]
fn gradle_war_with_development_only_and_provided_runtime() {
    let src = GRADLE_RUNTIME_SCOPES.replace(
        "build = \"gradle\"\n",
        "build = \"gradle\"\npackaging = \"war\"\n",
    );
    let dir = tempfile::tempdir().unwrap();
    ProjectGenerator::new(description(&src))
        .generate(dir.path())
        .unwrap();

    insta::assert_snapshot!(read(dir.path(), "build.gradle"), @r"
plugins {
    id 'org.springframework.boot' version '2.1.0.RELEASE'
    id 'java'
    id 'war'
}

apply plugin: 'io.spring.dependency-management'

group = 'com.example'
version = '0.0.1-SNAPSHOT'
sourceCompatibility = '1.8'

repositories {
    mavenCentral()
}

configurations {
    developmentOnly
    runtimeClasspath {
        extendsFrom developmentOnly
    }
}

dependencies {
    providedRuntime 'org.example:provided-thing'
    developmentOnly 'org.springframework.boot:spring-boot-devtools'
    implementation 'org.springframework.boot:spring-boot-starter'
    testImplementation 'org.springframework.boot:spring-boot-starter-test'
    providedRuntime 'org.springframework.boot:spring-boot-starter-tomcat'
}
");
    assert!(dir.path().join("src/main/java/com/example/demo/ServletInitializer.java").exists());
}
