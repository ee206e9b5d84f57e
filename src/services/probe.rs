use crate::domain::error::ProbeError;
use crate::domain::models::{FileDetails, FileProbe, Outcome};
use crate::services::environment::Environment;
use crate::services::filesystem::FileSystem;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Inspect one file: existence, type flags, symlink target, raw contents and
/// its JSON decoding. Read and parse are attempted independently.
pub fn probe_file(fs: &dyn FileSystem, env: &dyn Environment, path: &Path) -> FileProbe {
    let absolute = absolute_path(env, path);
    let exists = fs.exists(path);
    tracing::debug!(path = %absolute.display(), exists, "probing file");

    let details = exists.then(|| {
        let is_symlink = fs.is_symlink(path);
        let symlink_target = is_symlink.then(|| {
            Outcome::from_result(
                fs.read_link(path)
                    .map(|t| t.display().to_string())
                    .map_err(|source| ProbeError::ReadLink {
                        path: path.to_path_buf(),
                        source,
                    }),
            )
        });

        let contents = Outcome::from_result(read_contents(fs, path));
        if let Outcome::Failed(msg) = &contents {
            tracing::warn!(path = %path.display(), error = %msg, "raw read failed");
        }
        let parsed = Outcome::from_result(parse_contents(fs, path));
        if let Outcome::Failed(msg) = &parsed {
            tracing::warn!(path = %path.display(), error = %msg, "parse failed");
        }

        FileDetails {
            is_file: fs.is_file(path),
            is_symlink,
            symlink_target,
            contents,
            parsed,
        }
    });

    FileProbe {
        requested_path: path.display().to_string(),
        absolute_path: absolute.display().to_string(),
        exists,
        details,
    }
}

/// Lexical: relative paths are joined onto the working directory, links are
/// not resolved.
pub fn absolute_path(env: &dyn Environment, path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match env.current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}

fn read_contents(fs: &dyn FileSystem, path: &Path) -> Result<String, ProbeError> {
    let mut file = fs.open(path).map_err(|source| ProbeError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|source| ProbeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(content)
}

fn parse_contents(fs: &dyn FileSystem, path: &Path) -> Result<serde_json::Value, ProbeError> {
    let file = fs.open(path).map_err(|source| ProbeError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        if e.is_io() {
            ProbeError::Read {
                path: path.to_path_buf(),
                source: e.into(),
            }
        } else {
            ProbeError::Decode {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}
