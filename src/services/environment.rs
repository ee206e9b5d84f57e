use crate::domain::models::{EnvVar, EnvironmentReport, RuntimeInfo};
use std::ffi::OsString;
use std::path::PathBuf;

/// Read-only view of process-wide state.
pub trait Environment {
    fn current_dir(&self) -> std::io::Result<PathBuf>;
    fn current_exe(&self) -> std::io::Result<PathBuf>;
    /// Variables in the order the store yields them.
    fn vars(&self) -> Vec<(OsString, OsString)>;
}

pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn current_exe(&self) -> std::io::Result<PathBuf> {
        std::env::current_exe()
    }

    fn vars(&self) -> Vec<(OsString, OsString)> {
        std::env::vars_os().collect()
    }
}

pub fn report_environment(env: &dyn Environment) -> EnvironmentReport {
    let working_dir = match env.current_dir() {
        Ok(p) => p.display().to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "working directory unavailable");
            unavailable(&e)
        }
    };
    let executable = match env.current_exe() {
        Ok(p) => p.display().to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "executable path unavailable");
            unavailable(&e)
        }
    };

    let variables: Vec<EnvVar> = env
        .vars()
        .into_iter()
        .map(|(k, v)| EnvVar {
            key: k.to_string_lossy().into_owned(),
            value: v.to_string_lossy().into_owned(),
        })
        .collect();
    tracing::debug!(count = variables.len(), "environment captured");

    EnvironmentReport {
        runtime: RuntimeInfo {
            working_dir,
            executable,
            version: format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
        },
        variables,
    }
}

fn unavailable(e: &std::io::Error) -> String {
    format!("<unavailable: {e}>")
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io;

    pub struct FakeEnvironment {
        pub cwd: Option<PathBuf>,
        pub vars: Vec<(OsString, OsString)>,
    }

    pub fn vars_of(pairs: &[(&str, &str)]) -> Vec<(OsString, OsString)> {
        pairs
            .iter()
            .map(|(k, v)| (OsString::from(k), OsString::from(v)))
            .collect()
    }

    impl Environment for FakeEnvironment {
        fn current_dir(&self) -> io::Result<PathBuf> {
            self.cwd
                .clone()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "cwd deleted"))
        }

        fn current_exe(&self) -> io::Result<PathBuf> {
            Ok(PathBuf::from("/usr/local/bin/crafty-debug"))
        }

        fn vars(&self) -> Vec<(OsString, OsString)> {
            self.vars.clone()
        }
    }

    #[test]
    fn keeps_store_order_of_variables() {
        let env = FakeEnvironment {
            cwd: Some(PathBuf::from("/crafty")),
            vars: vars_of(&[("ZETA", "1"), ("ALPHA", "2"), ("MID", "")]),
        };
        let report = report_environment(&env);
        let keys: Vec<&str> = report.variables.iter().map(|v| v.key.as_str()).collect();
        assert_eq!(keys, vec!["ZETA", "ALPHA", "MID"]);
        assert_eq!(report.variables[2].value, "");
        assert_eq!(report.runtime.working_dir, "/crafty");
        assert_eq!(report.runtime.executable, "/usr/local/bin/crafty-debug");
    }

    #[test]
    fn missing_working_dir_is_reported_not_fatal() {
        let env = FakeEnvironment {
            cwd: None,
            vars: vec![],
        };
        let report = report_environment(&env);
        assert!(report.runtime.working_dir.starts_with("<unavailable:"));
        assert!(report.runtime.working_dir.contains("cwd deleted"));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_variables_are_rendered_lossily() {
        use std::os::unix::ffi::OsStringExt;

        let env = FakeEnvironment {
            cwd: Some(PathBuf::from("/crafty")),
            vars: vec![
                (OsString::from_vec(vec![0x66, 0xff]), OsString::from("key")),
                (OsString::from("VALUE"), OsString::from_vec(vec![0x66, 0xff])),
            ],
        };
        let report = report_environment(&env);

        assert_eq!(report.variables.len(), 2);
        assert_eq!(report.variables[0].key, "f\u{FFFD}");
        assert_eq!(report.variables[0].value, "key");
        assert_eq!(report.variables[1].key, "VALUE");
        assert_eq!(report.variables[1].value, "f\u{FFFD}");
    }
}
