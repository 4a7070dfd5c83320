use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "nestcord", version)]
pub struct Cli {
    /// Command to run; one of `init`, `version`, `help`.
    pub command: Option<String>,

    /// Name of the project to generate, skipping the prompt.
    #[arg(short, long)]
    pub name: Option<String>,

    /// Package manager to use (npm, yarn or pnpm), skipping the prompt.
    #[arg(short, long)]
    pub package_manager: Option<String>,

    #[command(flatten)]
    pub interface: InterfaceArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct InterfaceArgs {
    /// Silences output; repeat to also silence errors and prompts.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Defaults all inputs.
    #[arg(long)]
    pub defaults: bool,

    /// Skips all confirmations.
    #[arg(long)]
    pub force: bool,
}
