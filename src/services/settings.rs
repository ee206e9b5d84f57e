use crate::cli::Cli;
use crate::domain::models::{ListingMode, Settings, SettingsFile};
use anyhow::Context;
use std::path::{Path, PathBuf};

fn default_settings_path() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".config/crafty-debug/settings.toml"))
}

/// An explicit `--settings` path must exist and parse. The default location
/// is optional, and a broken file there only costs its overrides.
pub fn load_settings_file(explicit: Option<&str>) -> anyhow::Result<SettingsFile> {
    if let Some(p) = explicit {
        return read_settings(Path::new(p));
    }
    match default_settings_path() {
        Some(p) if p.exists() => match read_settings(&p) {
            Ok(file) => Ok(file),
            Err(e) => {
                tracing::warn!(
                    path = %p.display(),
                    error = %format!("{e:#}"),
                    "ignoring settings file"
                );
                Ok(SettingsFile::default())
            }
        },
        _ => Ok(SettingsFile::default()),
    }
}

fn read_settings(path: &Path) -> anyhow::Result<SettingsFile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading settings {}", path.display()))?;
    let parsed = toml::from_str(&raw)
        .with_context(|| format!("parsing settings {}", path.display()))?;
    tracing::debug!(path = %path.display(), "settings loaded");
    Ok(parsed)
}

/// Defaults, then the settings file, then command-line flags.
pub fn resolve_settings(cli: &Cli, file: SettingsFile) -> Settings {
    let mut s = Settings::default();
    if let Some(p) = file.probe.config_file {
        s.config_file = PathBuf::from(p);
    }
    if let Some(p) = file.listing.current_dir {
        s.current_dir = PathBuf::from(p);
    }
    if let Some(p) = file.listing.extra_dir {
        s.extra_dir = PathBuf::from(p);
    }
    if file.listing.independent {
        s.listing_mode = ListingMode::Independent;
    }

    if let Some(p) = &cli.config_file {
        s.config_file = PathBuf::from(p);
    }
    if let Some(p) = &cli.current_dir {
        s.current_dir = PathBuf::from(p);
    }
    if let Some(p) = &cli.extra_dir {
        s.extra_dir = PathBuf::from(p);
    }
    if cli.independent_listings {
        s.listing_mode = ListingMode::Independent;
    }
    s
}
