//! Builder for constructing and executing external processes (shelling
//! out to `docker` and `syft`).

use std::collections::HashMap;
use std::path::Path;
use std::process::{Command, Output};

use crate::errors::JavamapError;

/// A fluent builder around [`std::process::Command`].
pub struct CommandBuilder {
    program: String,
    args: Vec<String>,
    env: HashMap<String, String>,
    cwd: Option<String>,
}

impl CommandBuilder {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: HashMap::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn cwd(mut self, dir: impl Into<String>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn exec(&self) -> Result<Output, JavamapError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        for (k, v) in &self.env {
            cmd.env(k, v);
        }
        if let Some(ref dir) = self.cwd {
            cmd.current_dir(Path::new(dir));
        }
        cmd.output().map_err(JavamapError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_a_simple_command() {
        let output = CommandBuilder::new("echo").arg("hello").exec().unwrap();
        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "hello");
    }

    #[test]
    fn sets_environment_variables() {
        let output = CommandBuilder::new("sh")
            .args(["-c", "echo $JAVAMAP_TEST_VAR"])
            .env("JAVAMAP_TEST_VAR", "present")
            .exec()
            .unwrap();
        assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "present");
    }
}
