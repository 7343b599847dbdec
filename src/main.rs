use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let inputs = services::assumptions::load_assumptions(cli.assumptions.as_deref())?;

    if commands::handle_analysis_commands(&cli, &inputs)? {
        return Ok(());
    }
    if commands::handle_verify_commands(&cli)? {
        return Ok(());
    }

    anyhow::bail!("unhandled command");
}
