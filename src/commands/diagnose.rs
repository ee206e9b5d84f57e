use crate::*;
use std::path::PathBuf;

pub fn handle_commands(
    cli: &Cli,
    settings: &Settings,
    env: &dyn Environment,
    fs: &dyn FileSystem,
) -> anyhow::Result<()> {
    match cli.command() {
        Commands::Report => {
            let report = build_report(env, fs, settings);
            print_report(cli.json, &report, render_report)?;
        }
        Commands::Env => {
            let report = report_environment(env);
            print_report(cli.json, &report, render_environment)?;
        }
        Commands::Probe { path } => {
            let target = path
                .map(PathBuf::from)
                .unwrap_or_else(|| settings.config_file.clone());
            let probe = probe_file(fs, env, &target);
            print_report(cli.json, &probe, render_probe)?;
        }
        Commands::Ls => {
            let listing = list_directories(
                fs,
                &[settings.current_dir.clone(), settings.extra_dir.clone()],
                settings.listing_mode,
            );
            print_report(cli.json, &listing, render_listing)?;
        }
    }
    Ok(())
}
