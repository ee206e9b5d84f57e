use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

pub use cli::*;
pub use domain::models::*;
pub use services::environment::{report_environment, Environment, SystemEnvironment};
pub use services::filesystem::{FileSystem, RealFileSystem};
pub use services::listing::list_directories;
pub use services::logging::{init_tracing, Verbosity};
pub use services::output::print_report;
pub use services::probe::probe_file;
pub use services::report::{
    build_report, render_environment, render_listing, render_probe, render_report,
};
pub use services::settings::{load_settings_file, resolve_settings};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(Verbosity::from_flags(cli.verbose, cli.quiet));

    let file = load_settings_file(cli.settings.as_deref())?;
    let settings = resolve_settings(&cli, file);
    tracing::debug!(?settings, "settings resolved");

    commands::handle_commands(&cli, &settings, &SystemEnvironment, &RealFileSystem)
}
