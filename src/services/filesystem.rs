use std::io::Read;
use std::path::{Path, PathBuf};

/// Read-only filesystem operations used by the probe and the listings.
pub trait FileSystem {
    /// `true` if the path exists, following symlinks.
    fn exists(&self, path: &Path) -> bool;
    /// `true` if the path is a regular file, following symlinks.
    fn is_file(&self, path: &Path) -> bool;
    /// `true` if the path itself is a symlink.
    fn is_symlink(&self, path: &Path) -> bool;
    fn read_link(&self, path: &Path) -> std::io::Result<PathBuf>;
    fn open(&self, path: &Path) -> std::io::Result<Box<dyn Read>>;
    /// Entry names in OS order, without `.` and `..`.
    fn list_dir(&self, path: &Path) -> std::io::Result<Vec<String>>;
}

pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_symlink(&self, path: &Path) -> bool {
        path.is_symlink()
    }

    fn read_link(&self, path: &Path) -> std::io::Result<PathBuf> {
        std::fs::read_link(path)
    }

    fn open(&self, path: &Path) -> std::io::Result<Box<dyn Read>> {
        Ok(Box::new(std::fs::File::open(path)?))
    }

    fn list_dir(&self, path: &Path) -> std::io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(path)? {
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn list_dir_returns_entry_names_only() {
        let tmp = TempDir::new().expect("temp dir");
        std::fs::write(tmp.path().join("a.json"), "{}").expect("write a");
        std::fs::create_dir(tmp.path().join("logs")).expect("mkdir logs");

        let mut names = RealFileSystem.list_dir(tmp.path()).expect("list");
        names.sort();
        assert_eq!(names, vec!["a.json".to_string(), "logs".to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_does_not_exist_but_is_symlink() {
        let tmp = TempDir::new().expect("temp dir");
        let link = tmp.path().join("version.json");
        std::os::unix::fs::symlink(tmp.path().join("gone.json"), &link).expect("symlink");

        assert!(!RealFileSystem.exists(&link));
        assert!(RealFileSystem.is_symlink(&link));
    }
}
