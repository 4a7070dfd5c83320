use std::{
    io,
    path::{Path, PathBuf},
    thread,
    time::Duration,
};

use anyhow::Context;

/// Cadence of the "still running" updates emitted while a child process runs.
pub const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Descriptor for one external command invocation.
#[derive(Debug, Clone)]
pub struct Step {
    pub label: String,
    pub command: String,
    pub args: Vec<String>,
    pub dir: PathBuf,
}

impl Step {
    pub fn new<P: AsRef<Path>>(label: &str, command: &str, args: &[&str], dir: P) -> Self {
        Self {
            label: label.to_string(),
            command: command.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn command_line(&self) -> String {
        let mut line = self.command.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Terminal state of one external command invocation.
#[derive(Debug)]
pub enum Outcome {
    Success,
    NonZeroExit(Option<i32>),
    LaunchError(io::Error),
}

impl Outcome {
    pub fn into_result(self, step: &Step) -> anyhow::Result<()> {
        match self {
            Outcome::Success => Ok(()),
            Outcome::NonZeroExit(Some(code)) => {
                anyhow::bail!("`{}` failed with exit code {}", step.command_line(), code)
            }
            Outcome::NonZeroExit(None) => {
                anyhow::bail!("`{}` was terminated by a signal", step.command_line())
            }
            Outcome::LaunchError(err) => Err(err)
                .with_context(|| format!("failed to launch `{}`", step.command_line())),
        }
    }
}

/// Seam between the pipeline and the operating system; `tick` is invoked
/// between polls so the caller can refresh its status line.
pub trait CommandRunner {
    fn run(&self, step: &Step, tick: &mut dyn FnMut()) -> Outcome;
}

/// Runs the command through `duct` with all stdio streams discarded.
pub struct DuctRunner;

impl CommandRunner for DuctRunner {
    fn run(&self, step: &Step, tick: &mut dyn FnMut()) -> Outcome {
        let expression = duct::cmd(&step.command, step.args.iter().cloned())
            .dir(&step.dir)
            .stdin_null()
            .stdout_null()
            .stderr_null()
            .unchecked();

        let handle = match expression.start() {
            Ok(handle) => handle,
            Err(err) => return Outcome::LaunchError(err),
        };

        loop {
            match handle.try_wait() {
                Ok(Some(output)) => {
                    return if output.status.success() {
                        Outcome::Success
                    } else {
                        Outcome::NonZeroExit(output.status.code())
                    };
                }
                Ok(None) => {
                    thread::sleep(POLL_INTERVAL);
                    tick();
                }
                Err(err) => return Outcome::LaunchError(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(command: &str, args: &[&str]) -> Step {
        Step::new("test step", command, args, std::env::current_dir().unwrap())
    }

    #[test]
    fn zero_exit_is_success() {
        let outcome = DuctRunner.run(&step("true", &[]), &mut || {});
        assert!(matches!(outcome, Outcome::Success));
    }

    #[test]
    fn non_zero_exit_carries_the_code() {
        let outcome = DuctRunner.run(&step("sh", &["-c", "exit 3"]), &mut || {});
        assert!(matches!(outcome, Outcome::NonZeroExit(Some(3))));
    }

    #[test]
    fn missing_command_is_a_launch_error() {
        let outcome = DuctRunner.run(&step("definitely-not-a-command-xyz", &[]), &mut || {});
        assert!(matches!(outcome, Outcome::LaunchError(_)));
    }

    #[test]
    fn ticks_fire_while_running_and_stop_on_resolution() {
        let mut ticks = 0u32;
        let outcome = DuctRunner.run(&step("sleep", &["1"]), &mut || ticks += 1);
        assert!(matches!(outcome, Outcome::Success));
        assert!(ticks >= 1);

        let observed = ticks;
        thread::sleep(POLL_INTERVAL + Duration::from_millis(200));
        assert_eq!(ticks, observed);
    }

    #[test]
    fn into_result_reports_the_step_command_line() {
        let step = step("npx", &["@nestjs/cli", "new", "demo"]);
        let err = Outcome::NonZeroExit(Some(1)).into_result(&step).unwrap_err();
        assert!(err.to_string().contains("npx @nestjs/cli new demo"));

        assert!(Outcome::Success.into_result(&step).is_ok());
    }
}
