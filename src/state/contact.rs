//! Contact form validation and the simulated submit.
//!
//! DESIGN
//! ======
//! Validity is recomputed from the field values on every submit attempt.
//! All three fields are checked on every pass so several errors can show at
//! once. Nothing is sent anywhere: a valid form shows a success banner and
//! resets.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ControllerError;

pub const SUCCESS_TITLE: &str = "Sukses!";
pub const SUCCESS_BODY: &str = "Pesan Anda telah terkirim. Saya akan membalas dalam 1-2 hari kerja.";

/// Unicode `\s` does not cover U+FEFF, so it is listed explicitly.
const EMAIL_REGEX: &str = r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$";

static EMAIL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| match Regex::new(EMAIL_REGEX) {
    Ok(re) => Some(re),
    Err(err) => {
        #[cfg(feature = "hydrate")]
        log::error!("email pattern failed to compile, every address will be rejected: {err}");
        #[cfg(not(feature = "hydrate"))]
        drop(err);
        None
    }
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidFormat,
    TooShort { min_chars: usize },
}

impl FieldError {
    /// Inline message shown next to `field`.
    pub fn message(self, field: Field) -> String {
        match (field, self) {
            (Field::Name, _) => "Nama harus diisi".into(),
            (Field::Email, Self::InvalidFormat) => "Format email tidak valid".into(),
            (Field::Email, _) => "Email harus diisi".into(),
            (Field::Message, Self::TooShort { min_chars }) => format!("Pesan minimal {min_chars} karakter"),
            (Field::Message, _) => "Pesan harus diisi".into(),
        }
    }
}

/// Trimmed field values from one submit attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn from_raw(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: trim_field(name),
            email: trim_field(email),
            message: trim_field(message),
        }
    }
}

/// Trim like a browser does: Unicode whitespace plus the U+FEFF byte-order mark.
fn trim_field(raw: &str) -> String {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}').to_owned()
}

/// Per-field outcome of one validation pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactReport {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl ContactReport {
    pub fn outcome(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }

    pub fn errors(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.outcome(field).map(|err| (field, err)))
    }

    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }
}

/// Simple `local@domain.tld` shape check, no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.as_ref().is_some_and(|re| re.is_match(email))
}

pub fn validate(draft: &ContactDraft, min_message_chars: usize) -> ContactReport {
    let name = draft.name.is_empty().then_some(FieldError::Required);

    let email = if draft.email.is_empty() {
        Some(FieldError::Required)
    } else if !is_valid_email(&draft.email) {
        Some(FieldError::InvalidFormat)
    } else {
        None
    };

    let message = if draft.message.is_empty() {
        Some(FieldError::Required)
    } else if draft.message.chars().count() < min_message_chars {
        Some(FieldError::TooShort { min_chars: min_message_chars })
    } else {
        None
    };

    ContactReport { name, email, message }
}

/// Rendering surface for the contact form.
pub trait FormSurface {
    /// Replace any annotation on `field` with `message` and mark it invalid.
    ///
    /// # Errors
    ///
    /// Returns an error when the field cannot be updated.
    fn show_field_error(&mut self, field: Field, message: &str) -> Result<(), ControllerError>;

    /// Remove the annotation and invalid marker from `field`.
    ///
    /// # Errors
    ///
    /// Returns an error when the field cannot be updated.
    fn clear_field_error(&mut self, field: Field) -> Result<(), ControllerError>;

    /// Insert the dismissible success banner after the form.
    ///
    /// # Errors
    ///
    /// Returns an error when the banner cannot be inserted.
    fn show_success(&mut self, title: &str, body: &str) -> Result<(), ControllerError>;

    /// Clear every field.
    ///
    /// # Errors
    ///
    /// Returns an error when the form cannot be reset.
    fn reset(&mut self) -> Result<(), ControllerError>;
}

/// Render `report` onto `surface`; a valid report also submits.
///
/// # Errors
///
/// Propagates the first surface error.
pub fn apply_report(surface: &mut dyn FormSurface, report: &ContactReport) -> Result<(), ControllerError> {
    for field in Field::ALL {
        match report.outcome(field) {
            Some(err) => surface.show_field_error(field, &err.message(field))?,
            None => surface.clear_field_error(field)?,
        }
    }
    if report.is_valid() {
        surface.show_success(SUCCESS_TITLE, SUCCESS_BODY)?;
        surface.reset()?;
    }
    Ok(())
}
