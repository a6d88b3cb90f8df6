use std::fmt;

use crate::CandidateFile;

pub const PDF_MIME_TYPE: &str = "application/pdf";
pub const DOCX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const ALLOWED_MIME_TYPES: [&str; 2] = [PDF_MIME_TYPE, DOCX_MIME_TYPE];

/// Largest accepted upload, inclusive.
pub const MAX_FILE_BYTES: u64 = 5 * 1024 * 1024;

/// Minimum job description length after trimming, in characters.
pub const MIN_DESCRIPTION_CHARS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRejection {
    UnsupportedType,
    TooLarge,
}

impl fmt::Display for FileRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileRejection::UnsupportedType => write!(f, "Please upload a PDF or DOCX file only."),
            FileRejection::TooLarge => write!(f, "File size must be less than 5MB."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionRejection {
    Empty,
    TooShort { chars: usize },
}

impl fmt::Display for DescriptionRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescriptionRejection::Empty => write!(f, "Please enter a job description."),
            DescriptionRejection::TooShort { .. } => write!(
                f,
                "Please provide a more detailed job description (at least {MIN_DESCRIPTION_CHARS} characters)."
            ),
        }
    }
}

/// Checks the declared MIME type, then the size.
pub fn validate_file(file: &CandidateFile) -> Result<(), FileRejection> {
    if !ALLOWED_MIME_TYPES.contains(&file.mime_type.as_str()) {
        return Err(FileRejection::UnsupportedType);
    }
    if file.size > MAX_FILE_BYTES {
        return Err(FileRejection::TooLarge);
    }
    Ok(())
}

/// Returns the trimmed description when it is long enough to submit.
pub fn validate_job_description(raw: &str) -> Result<String, DescriptionRejection> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DescriptionRejection::Empty);
    }
    let chars = trimmed.chars().count();
    if chars < MIN_DESCRIPTION_CHARS {
        return Err(DescriptionRejection::TooShort { chars });
    }
    Ok(trimmed.to_owned())
}

/// Whether the submit control should be enabled for this draft.
pub fn can_submit(raw: &str) -> bool {
    validate_job_description(raw).is_ok()
}
