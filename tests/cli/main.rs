use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod check;

const BIN_NAME: &str = "sync-template-registry";

pub const REGISTRY_FILE: &str = "addon/template-registry.ts";

pub const MY_COMPONENT: &str = r#"import Component from '@glimmer/component';

export default class MyComponent extends Component {}

declare module '@glint/environment-ember-loose/registry' {
  export default interface Registry {
    'my-component': typeof MyComponent;
  }
}
"#;

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project with a `package.json` named `package_name`.
    pub fn with_package(package_name: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(
            "package.json",
            &format!(r#"{{ "name": "{}", "version": "0.0.0" }}"#, package_name),
        )?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    /// The binary with the default source glob.
    pub fn sync_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("addon/**/*.ts");
        cmd
    }

    /// Run the binary with `args` and the default source glob.
    pub fn sync(&self, args: &[&str]) -> Result<Output> {
        let output = self.sync_command().args(args).output()?;
        Ok(output)
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    pub fn registry(&self) -> Result<String> {
        self.read_file(REGISTRY_FILE)
    }
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Replaces the temporary project directory in command output.
pub const PROJECT_FILTERS: &[(&str, &str)] = &[
    (r"(?:/[\w.\-\[\]]+)*/\.tmp\w+", "[PROJECT]"),
    (r"near position \d+", "near position [N]"),
];

pub const STUB: &str = "\n\nexport default interface AddonRegistry {\n\n}\n";
