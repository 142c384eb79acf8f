use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, MY_COMPONENT, REGISTRY_FILE, STUB};

#[test]
fn test_check_missing_registry_fails_without_writing() -> Result<()> {
    let test = CliTest::with_package("my-addon")?;
    test.write_file("addon/components/my-component.ts", MY_COMPONENT)?;

    assert_cmd_snapshot!(test.sync_command().arg("--check"), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    ✘ Template registry addon/template-registry.ts does not exist.

    ----- stderr -----
    ");
    assert!(!test.root().join(REGISTRY_FILE).exists());

    Ok(())
}

#[test]
fn test_check_stale_registry() -> Result<()> {
    let test = CliTest::with_package("my-addon")?;
    test.write_file("addon/components/my-component.ts", MY_COMPONENT)?;
    test.write_file(REGISTRY_FILE, STUB)?;

    assert_cmd_snapshot!(test.sync_command().arg("--check"), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    ✘ Template registry addon/template-registry.ts is out of sync. Run without --check to update it.

    ----- stderr -----
    ");
    assert_eq!(test.registry()?, STUB);

    Ok(())
}

#[test]
fn test_check_synced_registry() -> Result<()> {
    let test = CliTest::with_package("my-addon")?;
    test.write_file("addon/components/my-component.ts", MY_COMPONENT)?;
    test.write_file(REGISTRY_FILE, STUB)?;
    test.sync(&[])?;

    assert_cmd_snapshot!(test.sync_command().arg("--check"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Template registry addon/template-registry.ts is up to date.

    ----- stderr -----
    ");

    Ok(())
}
