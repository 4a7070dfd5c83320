use std::process;

use clap::Parser;
use console::style;

mod args;
mod init;
mod interface;
mod manifest;
mod progress;
mod runner;
mod templates;

use args::Cli;
use interface::Interface;

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Version,
    Init,
    Unknown(String),
}

fn dispatch(token: Option<&str>) -> Command {
    match token {
        None | Some("help") => Command::Help,
        Some("version") => Command::Version,
        Some("init") => Command::Init,
        Some(other) => Command::Unknown(other.to_string()),
    }
}

fn main() {
    let args = Cli::parse();

    match dispatch(args.command.as_deref()) {
        Command::Help => show_help(),
        Command::Version => {
            println!(
                "{}",
                style(format!(
                    "Discord Bot With NestJS CLI version: {}",
                    env!("CARGO_PKG_VERSION")
                ))
                .green()
            );
        }
        Command::Init => {
            if let Err(err) = run_init(&args) {
                eprintln!("{} {:#}", style("Error running the CLI:").red(), err);
                process::exit(1);
            }
        }
        Command::Unknown(token) => {
            eprintln!("{}", style(format!("Unknown command: {}", token)).red());
            show_help();
        }
    }
}

fn run_init(args: &Cli) -> anyhow::Result<()> {
    let mut interface = Interface::try_from(args.interface.clone())?;
    init::init(args, &mut interface)
}

fn show_help() {
    println!("\n{}", style("Available commands:").blue());
    println!(
        "{}     - Create a new Discord Bot project",
        style("init").cyan()
    );
    println!("{}  - Display the CLI version", style("version").cyan());
    println!("{}     - Show this help message", style("help").cyan());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_and_help_both_show_help() {
        assert_eq!(dispatch(None), Command::Help);
        assert_eq!(dispatch(Some("help")), Command::Help);
    }

    #[test]
    fn version_and_init_get_their_own_branches() {
        assert_eq!(dispatch(Some("version")), Command::Version);
        assert_eq!(dispatch(Some("init")), Command::Init);
    }

    #[test]
    fn unknown_tokens_are_reported_without_reaching_the_pipeline() {
        let command = dispatch(Some("bogus"));
        assert_eq!(command, Command::Unknown("bogus".to_string()));

        // only Command::Init runs external processes or can exit non-zero
        for token in [None, Some("help"), Some("version"), Some("bogus")] {
            assert!(!matches!(dispatch(token), Command::Init));
        }
    }
}
