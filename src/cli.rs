use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::{
    commands::{InitCommand, SetupCommand},
    config,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "sw", version, about = "AWS STS Role Switcher", long_about = None)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Path to the profile file [default: $SW_CONFIG_FILE or ~/.aws/config.yaml]"
    )]
    pub config: Option<PathBuf>,

    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Increase verbosity (-v info, -vv debug, -vvv trace)")]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    #[command(about = "Initialize configuration file")]
    Init(InitCommand),
    #[command(about = "Get temporary credentials for a role alias")]
    Setup(SetupCommand),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let config_path = config::resolve_path(self.config)?;

        match self.command {
            Commands::Init(cmd) => cmd.execute(&config_path).await,
            Commands::Setup(cmd) => cmd.execute(&config_path).await,
        }
    }
}
