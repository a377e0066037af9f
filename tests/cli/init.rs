use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.init_command());

    let content = test.read_file(".fluent-typegen.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["input"], "**/*.ftl");
    assert_eq!(parsed["output"], "src/locales.types.ts");
    assert_eq!(parsed["bundleModule"], "@fluent/bundle");
    assert_eq!(parsed["tabWidth"], 4);
    assert_eq!(parsed["semi"], false);

    Ok(())
}

#[test]
fn test_init_existing_config() -> Result<()> {
    let test = CliTest::with_file(".fluent-typegen.json", "{}")?;

    assert_cmd_snapshot!(test.init_command());

    assert_eq!(test.read_file(".fluent-typegen.json")?, "{}");

    Ok(())
}

#[test]
fn test_generated_config_is_usable() -> Result<()> {
    let test = CliTest::with_file("en.ftl", "a = { $x }\n")?;

    test.init_command().output()?;
    let output = test.command().output()?;

    assert!(
        output.status.success(),
        "Generation should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(test.root().join("src/locales.types.ts").exists());

    Ok(())
}
