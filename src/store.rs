//! Raw file store: whole-file reads and overwrites.

use crate::error::Result;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Overwrite the file at `path` with `text`.
///
/// Plain overwrite, no temp-file-plus-rename: a crash mid-write can leave a
/// truncated file, which the length check in [`read`] discards on the next
/// load.
pub(crate) fn write(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text.as_bytes())?;
    Ok(())
}

/// Read the whole file at `path`.
///
/// Returns `Ok(None)` if the file is missing or zero-length - both mean
/// "no persisted state". The byte count read is checked against the length
/// reported by metadata; a mismatch (concurrent truncation or rewrite mid-read)
/// is an error rather than partial data.
pub(crate) fn read(path: &Path) -> Result<Option<Vec<u8>>> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let expected = file.metadata()?.len();
    if expected == 0 {
        return Ok(None);
    }

    let mut buf = Vec::with_capacity(usize::try_from(expected).unwrap_or(0));
    file.read_to_end(&mut buf)?;
    if buf.len() as u64 != expected {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("read {} of {expected} bytes", buf.len()),
        )
        .into());
    }

    Ok(Some(buf))
}

/// Remove the file at `path`, best-effort.
///
/// Absence and failure are both ignored; failure is logged at debug.
pub(crate) fn delete(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        if e.kind() != io::ErrorKind::NotFound {
            debug!(path = %path.display(), error = %e, "failed to delete state file");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_then_read_round_trips() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("activeChats.sss");

        write(&path, r#"["alice","bob"]"#).unwrap();

        let bytes = read(&path).unwrap().unwrap();
        assert_eq!(bytes, br#"["alice","bob"]"#);
    }

    #[test]
    fn read_missing_file_is_none() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nonexistent.sss");
        assert!(read(&path).unwrap().is_none());
    }

    #[test]
    fn read_zero_length_file_is_none() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.sss");
        fs::write(&path, "").unwrap();
        assert!(read(&path).unwrap().is_none());
    }

    #[test]
    fn write_overwrites_entire_contents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("messageIds.sss");

        write(&path, r#"{"alice":100,"bob":200}"#).unwrap();
        write(&path, r#"{"carol":1}"#).unwrap();

        let bytes = read(&path).unwrap().unwrap();
        assert_eq!(bytes, br#"{"carol":1}"#);
    }

    #[test]
    fn delete_removes_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("unsentMessages.sss");
        write(&path, "[]").unwrap();
        assert!(path.exists());

        delete(&path);
        assert!(!path.exists());
    }

    #[test]
    fn delete_missing_file_is_silent() {
        let temp = TempDir::new().unwrap();
        delete(&temp.path().join("nonexistent.sss"));
    }
}
