use std::{
    env, fmt, fs,
    path::Path,
    str::FromStr,
    time::{Duration, Instant},
};

use super::{
    args::Cli,
    interface::Interface,
    manifest,
    progress::Reporter,
    runner::{CommandRunner, DuctRunner, Step},
    templates,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "npm" => Ok(PackageManager::Npm),
            "yarn" => Ok(PackageManager::Yarn),
            "pnpm" => Ok(PackageManager::Pnpm),
            other => anyhow::bail!("unknown package manager `{}`; use npm, yarn or pnpm", other),
        }
    }
}

/// Validated user input; consumed once per run.
pub struct ProjectRequest {
    pub name: String,
    pub package_manager: PackageManager,
}

pub fn init(args: &Cli, interface: &mut Interface) -> anyhow::Result<()> {
    interface.banner();

    let request = collect_request(args, interface);
    let cwd = env::current_dir()?;
    prepare_target(&cwd.join(&request.name), interface)?;

    let mut reporter = if args.interface.quiet > 0 {
        Reporter::silent()
    } else {
        Reporter::start("Starting project creation...")
    };

    match run_pipeline(&request, &cwd, &DuctRunner, &mut reporter) {
        Ok(elapsed) => {
            reporter.success(&format!(
                "Project {} successfully created in {:.2}s!",
                request.name,
                elapsed.as_secs_f64()
            ));

            let run_hint = match request.package_manager {
                PackageManager::Npm => "npm run start:dev".to_string(),
                pm => format!("{} start:dev", pm),
            };
            interface.info("\nRun the following commands to get started:");
            interface.info(format!("  cd {}", request.name));
            interface.info(format!("  {}", run_hint));

            Ok(())
        }
        Err(err) => {
            reporter.fail("Failed to create the NestJS project.");
            Err(err)
        }
    }
}

fn collect_request(args: &Cli, interface: &mut Interface) -> ProjectRequest {
    interface.prompt("What is the name of your project?");
    let mut preset = args.name.clone();
    let name = loop {
        let line = interface.line_or_read(None, preset.take());
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            break trimmed.to_string();
        }
        interface.error("The project name cannot be empty.");
    };

    interface.prompt("Which package manager do you want to use? [npm/yarn/pnpm]");
    let mut preset = args.package_manager.clone();
    let package_manager = loop {
        let line = interface.line_or_read(Some("npm"), preset.take());
        match line.trim().parse() {
            Ok(pm) => break pm,
            Err(err) => interface.error(format!("{}", err)),
        }
    };

    interface.info(format!(
        "Project name: {}, Package manager: {}",
        name, package_manager
    ));

    ProjectRequest {
        name,
        package_manager,
    }
}

fn prepare_target(target: &Path, interface: &mut Interface) -> anyhow::Result<()> {
    if target.is_file() {
        anyhow::bail!(
            "`{}` already exists and is a file; choose another project name",
            target.display()
        );
    }

    if target.exists() && fs::remove_dir(target).is_err() {
        interface.prompt(format!(
            "The target directory `{}` already exists; overwrite? [y/n]",
            target.display()
        ));
        interface.read_confirmation();
        fs::remove_dir_all(target)?;
    }

    Ok(())
}

/// Fixed ordered step sequence; the first failure aborts the run and no
/// partial artifacts are cleaned up.
pub fn run_pipeline(
    request: &ProjectRequest,
    cwd: &Path,
    runner: &dyn CommandRunner,
    reporter: &mut Reporter,
) -> anyhow::Result<Duration> {
    let started = Instant::now();
    let project_dir = cwd.join(&request.name);

    let generate = Step::new(
        "Running the NestJS CLI to create the project...",
        "npx",
        &[
            "@nestjs/cli",
            "new",
            &request.name,
            "-p",
            request.package_manager.as_str(),
        ],
        cwd,
    );
    run_step(runner, reporter, &generate)?;

    reporter.update("Updating the package.json description...");
    manifest::patch_description(&project_dir)?;

    reporter.update("Creating the necessary files and directories...");
    templates::emit(&project_dir)?;

    let install = Step::new(
        "Installing the discord.js package...",
        request.package_manager.as_str(),
        &["add", "discord.js"],
        &project_dir,
    );
    run_step(runner, reporter, &install)?;

    Ok(started.elapsed())
}

fn run_step(
    runner: &dyn CommandRunner,
    reporter: &mut Reporter,
    step: &Step,
) -> anyhow::Result<()> {
    reporter.update(step.label.clone());

    let line = step.command_line();
    let outcome = runner.run(step, &mut || {
        reporter.update(format!("`{}` is still running...", line));
    });

    outcome.into_result(step)
}
