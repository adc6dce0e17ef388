//! Writing rendered reports to stdout or a file.

use std::io::Write as _;
use std::path::PathBuf;

use crate::error::{CompassError, Result};

/// Where a rendered report goes.
#[derive(Debug, Clone)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Stdout unless an explicit path was given.
    #[must_use]
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }
}

/// Write rendered content to the target.
pub fn write_output(target: &OutputTarget, content: &str) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(content.as_bytes())?;
            Ok(())
        }
        OutputTarget::File(path) => {
            std::fs::write(path, content).map_err(|e| CompassError::io(path, e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("report.txt");
        let target = OutputTarget::from_path(Some(path.clone()));
        write_output(&target, "hello\n").expect("write");
        assert_eq!(std::fs::read_to_string(path).expect("read"), "hello\n");
    }

    #[test]
    fn test_target_defaults_to_stdout() {
        assert!(matches!(OutputTarget::from_path(None), OutputTarget::Stdout));
    }
}
