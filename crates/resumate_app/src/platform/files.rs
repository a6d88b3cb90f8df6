use std::fs;
use std::path::{Path, PathBuf};

use resumate_core::CandidateFile;

const UNKNOWN_MIME_TYPE: &str = "application/octet-stream";

/// Describes the file at `raw` the way a browser file picker would: name,
/// size and a MIME type declared from the extension.
pub fn inspect(raw: &str) -> Result<CandidateFile, String> {
    let path = PathBuf::from(strip_quotes(raw.trim()));
    let meta = fs::metadata(&path).map_err(|err| format!("Cannot open {}: {err}", path.display()))?;
    if !meta.is_file() {
        return Err(format!("{} is not a file.", path.display()));
    }

    Ok(CandidateFile {
        file_name: file_name_of(&path),
        mime_type: declared_mime_type(&path),
        size: meta.len(),
        path,
    })
}

/// Terminals quote dragged-in paths that contain spaces.
fn strip_quotes(raw: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = raw
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    raw
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn declared_mime_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(UNKNOWN_MIME_TYPE)
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use resumate_core::{DOCX_MIME_TYPE, PDF_MIME_TYPE};
    use tempfile::TempDir;

    #[test]
    fn declares_mime_type_from_extension() {
        let dir = TempDir::new().unwrap();
        let pdf = dir.path().join("resume.pdf");
        fs::write(&pdf, vec![0u8; 2048]).unwrap();
        let docx = dir.path().join("cv.docx");
        fs::write(&docx, b"PK").unwrap();

        let file = inspect(&pdf.display().to_string()).unwrap();
        assert_eq!(file.file_name, "resume.pdf");
        assert_eq!(file.mime_type, PDF_MIME_TYPE);
        assert_eq!(file.size, 2048);

        let file = inspect(&docx.display().to_string()).unwrap();
        assert_eq!(file.mime_type, DOCX_MIME_TYPE);
    }

    #[test]
    fn unknown_extension_is_octet_stream() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("resume.weird");
        fs::write(&path, b"x").unwrap();
        assert_eq!(
            inspect(&path.display().to_string()).unwrap().mime_type,
            UNKNOWN_MIME_TYPE
        );
    }

    #[test]
    fn quoted_paths_are_accepted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("my resume.pdf");
        fs::write(&path, b"x").unwrap();

        let quoted = format!("  '{}'  ", path.display());
        assert_eq!(inspect(&quoted).unwrap().file_name, "my resume.pdf");
    }

    #[test]
    fn missing_files_and_directories_are_reported() {
        let dir = TempDir::new().unwrap();
        assert!(inspect(&dir.path().join("nope.pdf").display().to_string())
            .unwrap_err()
            .starts_with("Cannot open"));
        assert!(inspect(&dir.path().display().to_string())
            .unwrap_err()
            .ends_with("is not a file."));
    }
}
