use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

const EXPECTED_DEFAULT: &str = r#"import type {
    FluentBundle,
    FluentVariable,
    Message as FluentMessage,
    // @ts-ignore
} from "@fluent/bundle"

export interface LocalesMap {
    "hello": {
        "name": FluentVariable
    }
    "static": never
    "items": {
        "count": FluentVariable
    }
}

export interface Message<Key extends keyof LocalesMap> extends FluentMessage {
    id: Key
}

export interface TypedFluentBundle extends FluentBundle {
    getMessage<Key extends keyof LocalesMap>(key: Key): Message<Key>
    formatPattern<Key extends keyof LocalesMap>(
        key: Key,
        ...args: LocalesMap[Key] extends never ? [] : [args: LocalesMap[Key]]
    ): string
    formatPattern<Key extends keyof LocalesMap>(
        key: Key,
        args: LocalesMap[Key] extends never ? null : LocalesMap[Key],
        errors?: Error[] | null,
    ): string
}
"#;

const MESSAGES: &str = r#"
hello = Hello, { $name }!
static = Static text only.
items = { NUMBER($count) ->
        [one] One item
       *[other] { $count } items
    }
"#;

#[test]
fn test_generates_default_output() -> Result<()> {
    let test = CliTest::with_file("locales/en/main.ftl", MESSAGES)?;

    assert_cmd_snapshot!(test.command());

    assert_eq!(test.read_file("src/locales.types.ts")?, EXPECTED_DEFAULT);

    Ok(())
}

#[test]
fn test_second_run_is_unchanged() -> Result<()> {
    let test = CliTest::with_file("main.ftl", MESSAGES)?;

    test.command().output()?;
    let first = test.read_file("src/locales.types.ts")?;

    assert_cmd_snapshot!(test.command());

    assert_eq!(test.read_file("src/locales.types.ts")?, first);

    Ok(())
}

#[test]
fn test_pattern_and_output_flags() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en/app.ftl", "app = { $user }\n")?;
    test.write_file("other/skip.ftl", "skip = Skip\n")?;

    assert_cmd_snapshot!(
        test.command()
            .arg("locales/**/*.ftl")
            .arg("-o")
            .arg("types/{stem}.ts")
    );

    let text = test.read_file("types/app.ts")?;
    assert!(text.contains("\"app\": {\n        \"user\": FluentVariable\n    }"));
    assert!(!test.root().join("types/skip.ts").exists());

    Ok(())
}

#[test]
fn test_literal_directory_input() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en/a.ftl", "a = A\n")?;
    test.write_file("locales/en/b.ftl", "b = { $x }\n")?;

    assert_cmd_snapshot!(
        test.command()
            .arg("locales/en")
            .arg("--output")
            .arg("out/{stem}.ts")
    );

    assert!(test.read_file("out/a.ts")?.contains("\"a\": never"));
    assert!(test.read_file("out/b.ts")?.contains("\"x\": FluentVariable"));

    Ok(())
}

#[test]
fn test_config_file_is_applied() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".fluent-typegen.json",
        r#"{
            "input": "i18n/*.ftl",
            "output": "generated/fluent.ts",
            "bundleModule": "@fluent/bundle/esm",
            "tabWidth": 2,
            "semi": true
        }"#,
    )?;
    test.write_file("i18n/en.ftl", "greet = Hi { $who }\n")?;

    assert_cmd_snapshot!(test.command());

    let text = test.read_file("generated/fluent.ts")?;
    assert!(text.contains("} from \"@fluent/bundle/esm\";\n"));
    assert!(text.contains("  \"greet\": {\n    \"who\": FluentVariable;\n  };\n"));

    Ok(())
}

#[test]
fn test_cli_output_overrides_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".fluent-typegen.json", r#"{ "output": "from-config.ts" }"#)?;
    test.write_file("en.ftl", "a = A\n")?;

    assert_cmd_snapshot!(test.command().arg("-o").arg("from-cli.ts"));

    assert!(test.root().join("from-cli.ts").exists());
    assert!(!test.root().join("from-config.ts").exists());

    Ok(())
}

#[test]
fn test_check_mode() -> Result<()> {
    let test = CliTest::with_file("en.ftl", "a = { $x }\n")?;

    assert_cmd_snapshot!(test.check_command());
    assert!(!test.root().join("src/locales.types.ts").exists());

    test.command().output()?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_parse_errors_are_warnings() -> Result<()> {
    let test = CliTest::with_file("en.ftl", "ok = { $v }\nbroken = { $\nlater = Later\n")?;

    assert_cmd_snapshot!(test.command());

    let text = test.read_file("src/locales.types.ts")?;
    assert!(text.contains("\"ok\": {"));
    assert!(text.contains("\"later\": never"));
    assert!(!text.contains("\"broken\""));

    Ok(())
}

#[test]
fn test_parse_errors_verbose() -> Result<()> {
    let test = CliTest::with_file("en.ftl", "ok = { $v }\nbroken = { $\nlater = Later\n")?;

    assert_cmd_snapshot!(test.command().arg("-v"));

    Ok(())
}

#[test]
fn test_output_collision_fails_later_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.ftl", "a = A\n")?;
    test.write_file("b.ftl", "b = B\n")?;

    assert_cmd_snapshot!(test.command());

    assert!(test.read_file("src/locales.types.ts")?.contains("\"a\": never"));

    Ok(())
}

#[test]
fn test_no_matching_files() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("missing/*.ftl"));

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".fluent-typegen.json", r#"{ "tabWidth": 0 }"#)?;
    test.write_file("en.ftl", "a = A\n")?;

    assert_cmd_snapshot!(test.command());

    assert!(!test.root().join("src/locales.types.ts").exists());

    Ok(())
}

#[test]
fn test_watch_conflicts_with_check() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.check_command().arg("--watch").output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot be used with"), "stderr: {}", stderr);

    Ok(())
}
