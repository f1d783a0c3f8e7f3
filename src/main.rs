//! Lipunto CLI entry point

use std::env;
use std::process::ExitCode;

use clap::Parser;

use lipunto::cli::{
    app::{load_merged_config, run_switch, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
    SwitchOptions,
};
use lipunto::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let mut cli = Cli::parse();
    let presenter = Presenter::new();
    let store = XdgConfigStore::new();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command.take() {
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // Merge: defaults < file < env < cli
    let config = match load_merged_config(&store, cli.to_config(), |name| env::var(name).ok()).await
    {
        Ok(config) => config,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    run_switch(SwitchOptions {
        mode: cli.mode.into(),
        config,
    })
    .await
}
