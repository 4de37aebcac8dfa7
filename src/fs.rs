//! File system utilities.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Write a verbatim copy of the previous content, replacing any older backup.
pub fn write_backup(backup_path: &Path, content: &str) -> io::Result<()> {
    fs::write(backup_path, content)?;
    tracing::debug!(path = %backup_path.display(), "Wrote backup");
    Ok(())
}

/// Replace `path` with `content` without ever exposing a partial file.
///
/// The content goes to a temporary file next to `path` which is then renamed
/// over it. If anything fails the temporary file is removed and `path` is
/// left as it was.
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Not a file path: {}", path.display()),
            )
        })?;

    let mut temp = tempfile::Builder::new()
        .prefix(&format!(".{}.", file_name))
        .suffix(".tmp")
        .tempfile_in(dir)?;

    // Temp files are created owner-only; keep the original's mode
    if let Ok(metadata) = fs::metadata(path) {
        temp.as_file().set_permissions(metadata.permissions())?;
    }

    temp.write_all(content.as_bytes())?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "Replaced file");
    Ok(())
}

/// Trim trailing line breaks and end with exactly one `line_ending`.
pub fn ensure_trailing_newline(content: &str, line_ending: &str) -> String {
    let mut result = content.trim_end_matches(['\r', '\n']).to_string();
    result.push_str(line_ending);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_write_backup_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let backup = temp_dir.path().join("SUMMARY.md.bak");
        fs::write(&backup, "stale").unwrap();

        write_backup(&backup, "# Summary\n").unwrap();
        assert_eq!(fs::read_to_string(&backup).unwrap(), "# Summary\n");
    }

    #[test]
    fn test_atomic_write_replaces_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("SUMMARY.md");
        fs::write(&path, "old\n").unwrap();

        atomic_write(&path, "new\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
        assert_eq!(entries(temp_dir.path()), vec!["SUMMARY.md".to_string()]);
    }

    #[test]
    fn test_atomic_write_creates_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("SUMMARY.md");

        atomic_write(&path, "fresh\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn test_atomic_write_failure_cleans_up_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        // A directory in the way makes the final rename fail
        let path = temp_dir.path().join("SUMMARY.md");
        fs::create_dir(&path).unwrap();

        assert!(atomic_write(&path, "content\n").is_err());
        assert!(path.is_dir());
        assert_eq!(entries(temp_dir.path()), vec!["SUMMARY.md".to_string()]);
    }

    #[test]
    fn test_atomic_write_missing_parent_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("SUMMARY.md");
        assert!(atomic_write(&path, "content\n").is_err());
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_atomic_write_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("SUMMARY.md");
        fs::write(&path, "old\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        atomic_write(&path, "new\n").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn test_ensure_trailing_newline() {
        assert_eq!(ensure_trailing_newline("a", "\n"), "a\n");
        assert_eq!(ensure_trailing_newline("a\n", "\n"), "a\n");
        assert_eq!(ensure_trailing_newline("a\n\n\n", "\n"), "a\n");
        assert_eq!(ensure_trailing_newline("", "\n"), "\n");
    }

    #[test]
    fn test_ensure_trailing_newline_crlf() {
        assert_eq!(ensure_trailing_newline("a\r\nb", "\r\n"), "a\r\nb\r\n");
        assert_eq!(ensure_trailing_newline("a\r\n\r\n\r\n", "\r\n"), "a\r\n");
    }
}
