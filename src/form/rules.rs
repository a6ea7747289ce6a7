//! The validation vocabulary shared by the site's forms.
//!
//! Each rule is a pure, single-pass check over one field value. Rules take
//! the message to report so every form keeps its own wording.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::validation::ValidationError;

static LETTERS_AND_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("letters-and-spaces pattern is valid"));
static LOOSE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is valid"));
static TEN_DIGIT_PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"));
static LINKEDIN_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://(www\.)?linkedin\.com/.*$").expect("linkedin pattern is valid")
});

/// MIME types accepted for resume uploads: PDF, DOC, DOCX.
pub const DOCUMENT_MIME_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// The crate's one validation error kind: a message scoped to one field.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldError(Cow<'static, str>);

impl FieldError {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self(message.into())
    }
}

impl ValidationError for FieldError {
    fn message(&self) -> Cow<'static, str> {
        self.0.clone()
    }
}

/// A file picked in an upload field. The browser-reported MIME type is all
/// the validator looks at; file contents never reach this crate.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FileUpload {
    pub file_name: String,
    pub mime_type: String,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
        }
    }
}

pub fn required(value: &str, message: &'static str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::new(message));
    }
    Ok(())
}

pub fn letters_and_spaces(value: &str, message: &'static str) -> Result<(), FieldError> {
    if !LETTERS_AND_SPACES.is_match(value) {
        return Err(FieldError::new(message));
    }
    Ok(())
}

pub fn email(value: &str, message: &'static str) -> Result<(), FieldError> {
    if !LOOSE_EMAIL.is_match(value) {
        return Err(FieldError::new(message));
    }
    Ok(())
}

/// Exactly 10 ASCII digits, nothing else.
pub fn phone(value: &str, message: &'static str) -> Result<(), FieldError> {
    if !TEN_DIGIT_PHONE.is_match(value) {
        return Err(FieldError::new(message));
    }
    Ok(())
}

pub fn min_trimmed_len(value: &str, min: usize, message: &'static str) -> Result<(), FieldError> {
    if value.trim().chars().count() < min {
        return Err(FieldError::new(message));
    }
    Ok(())
}

/// Optional URL field restricted to LinkedIn. Empty values pass.
pub fn linkedin_url(value: &str, message: &'static str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Ok(());
    }
    if !LINKEDIN_URL.is_match(value) {
        return Err(FieldError::new(message));
    }
    Ok(())
}

/// Enumerated selects keep the `""` sentinel ("--- Select ---") until the
/// user picks an option.
pub fn selected(value: &str, message: &'static str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::new(message));
    }
    Ok(())
}

pub fn document_upload(
    file: Option<&FileUpload>,
    missing_message: &'static str,
    file_type_message: &'static str,
) -> Result<(), FieldError> {
    let Some(file) = file else {
        return Err(FieldError::new(missing_message));
    };
    if !DOCUMENT_MIME_TYPES.contains(&file.mime_type.as_str()) {
        return Err(FieldError::new(file_type_message));
    }
    Ok(())
}
