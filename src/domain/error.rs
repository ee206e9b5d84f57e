use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum ProbeError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("cannot resolve symlink {}: {source}", .path.display())]
    ReadLink {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot list {}: {source}", .path.display())]
    ListDir {
        path: PathBuf,
        source: std::io::Error,
    },
}
