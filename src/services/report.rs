use crate::domain::models::{
    DiagnosticReport, EnvironmentReport, FileProbe, ListingOutcome, ListingReport, Outcome,
    Settings,
};
use crate::services::environment::{report_environment, Environment};
use crate::services::filesystem::FileSystem;
use crate::services::listing::list_directories;
use crate::services::probe::probe_file;
use std::fmt::Write;
use std::path::Path;

pub fn build_report(
    env: &dyn Environment,
    fs: &dyn FileSystem,
    settings: &Settings,
) -> DiagnosticReport {
    let environment = report_environment(env);
    let probe = probe_file(fs, env, &settings.config_file);
    let listing = list_directories(
        fs,
        &[settings.current_dir.clone(), settings.extra_dir.clone()],
        settings.listing_mode,
    );
    DiagnosticReport {
        environment,
        probe,
        listing,
    }
}

pub fn render_report(report: &DiagnosticReport) -> String {
    let mut out = render_environment(&report.environment);
    out.push('\n');
    out.push_str(&render_probe(&report.probe));
    out.push('\n');
    out.push_str(&render_listing(&report.listing));
    out
}

pub fn render_environment(report: &EnvironmentReport) -> String {
    let mut out = String::new();
    let rt = &report.runtime;
    let _ = writeln!(out, "Current Working Directory: {}", rt.working_dir);
    let _ = writeln!(out, "Executable: {}", rt.executable);
    let _ = writeln!(out, "Version: {} ({} {})", rt.version, rt.os, rt.arch);
    let _ = writeln!(out, "Environment Variables:");
    for v in &report.variables {
        let _ = writeln!(out, "{}: {}", v.key, v.value);
    }
    out
}

pub fn render_probe(probe: &FileProbe) -> String {
    let mut out = String::new();
    let name = Path::new(&probe.requested_path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| probe.requested_path.clone());
    let _ = writeln!(out, "Checking {name}:");
    let _ = writeln!(out, "Full Path: {}", probe.absolute_path);
    let _ = writeln!(out, "Path Exists: {}", probe.exists);

    let Some(d) = &probe.details else {
        return out;
    };
    let _ = writeln!(out, "File Details:");
    let _ = writeln!(out, "Absolute Path: {}", probe.absolute_path);
    let _ = writeln!(out, "Is File: {}", d.is_file);
    let _ = writeln!(out, "Is Symlink: {}", d.is_symlink);
    match &d.symlink_target {
        Some(Outcome::Ok(t)) => {
            let _ = writeln!(out, "Symlink Target: {t}");
        }
        Some(Outcome::Failed(e)) => {
            let _ = writeln!(out, "Error resolving symlink: {e}");
        }
        None => {}
    }
    match &d.contents {
        Outcome::Ok(c) => {
            let _ = writeln!(out, "File Contents:");
            let _ = writeln!(out, "{c}");
        }
        Outcome::Failed(e) => {
            let _ = writeln!(out, "Error reading file: {e}");
        }
    }
    let _ = writeln!(out, "\nParsing JSON:");
    match &d.parsed {
        Outcome::Ok(v) => {
            let _ = writeln!(out, "Parsed JSON: {v}");
        }
        Outcome::Failed(e) => {
            let _ = writeln!(out, "Error parsing file: {e}");
        }
    }
    out
}

pub fn render_listing(report: &ListingReport) -> String {
    let mut out = String::from("Directory Contents:\n");
    for (i, l) in report.listings.iter().enumerate() {
        if l.outcome == ListingOutcome::Skipped {
            continue;
        }
        if i > 0 {
            out.push('\n');
        }
        let label = if l.path == "." {
            "Current Directory".to_string()
        } else {
            l.path.clone()
        };
        let _ = writeln!(out, "{label} Contents:");
        match &l.outcome {
            ListingOutcome::Ok(entries) => {
                let _ = writeln!(out, "{entries:?}");
            }
            ListingOutcome::Failed(e) => {
                let _ = writeln!(out, "Error listing directory: {e}");
            }
            ListingOutcome::Skipped => {}
        }
    }
    out
}
