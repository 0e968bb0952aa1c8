use std::collections::HashMap;

use super::*;

const MIN: usize = 10;

/// In-memory stand-in for the form markup.
#[derive(Default)]
struct FakeForm {
    values: HashMap<Field, String>,
    annotations: HashMap<Field, Vec<String>>,
    invalid: HashMap<Field, bool>,
    banners: Vec<String>,
}

impl FakeForm {
    fn filled(name: &str, email: &str, message: &str) -> Self {
        let mut form = Self::default();
        form.values.insert(Field::Name, name.into());
        form.values.insert(Field::Email, email.into());
        form.values.insert(Field::Message, message.into());
        form
    }

    fn value(&self, field: Field) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    fn submit(&mut self) {
        let draft = ContactDraft::from_raw(self.value(Field::Name), self.value(Field::Email), self.value(Field::Message));
        let report = validate(&draft, MIN);
        apply_report(self, &report).unwrap();
    }

    fn annotations(&self, field: Field) -> &[String] {
        self.annotations.get(&field).map_or(&[][..], Vec::as_slice)
    }

    fn total_annotations(&self) -> usize {
        self.annotations.values().map(Vec::len).sum()
    }
}

impl FormSurface for FakeForm {
    fn show_field_error(&mut self, field: Field, message: &str) -> Result<(), ControllerError> {
        self.clear_field_error(field)?;
        self.annotations.entry(field).or_default().push(message.to_owned());
        self.invalid.insert(field, true);
        Ok(())
    }

    fn clear_field_error(&mut self, field: Field) -> Result<(), ControllerError> {
        self.annotations.remove(&field);
        self.invalid.insert(field, false);
        Ok(())
    }

    fn show_success(&mut self, title: &str, body: &str) -> Result<(), ControllerError> {
        self.banners.push(format!("{title} {body}"));
        Ok(())
    }

    fn reset(&mut self) -> Result<(), ControllerError> {
        self.values.clear();
        Ok(())
    }
}

// =============================================================
// validate
// =============================================================

#[test]
fn draft_trims_every_field() {
    let draft = ContactDraft::from_raw("  Ana ", "\ta@b.c\n", "  hello  ");
    assert_eq!(draft, ContactDraft { name: "Ana".into(), email: "a@b.c".into(), message: "hello".into() });
}

#[test]
fn all_fields_are_checked_without_short_circuit() {
    let report = validate(&ContactDraft::default(), MIN);
    assert_eq!(report.name, Some(FieldError::Required));
    assert_eq!(report.email, Some(FieldError::Required));
    assert_eq!(report.message, Some(FieldError::Required));
    assert_eq!(report.errors().count(), 3);
    assert!(!report.is_valid());
}

#[test]
fn whitespace_only_name_is_required_error() {
    let report = validate(&ContactDraft::from_raw("   ", "a@b.c", "0123456789"), MIN);
    assert_eq!(report.name, Some(FieldError::Required));
    assert_eq!(report.errors().count(), 1);
}

#[test]
fn email_format_rules() {
    assert!(!is_valid_email("not-an-email"));
    assert!(is_valid_email("a@b.c"));
    assert!(is_valid_email("first.last@example.co.id"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("a@.c"));
    assert!(!is_valid_email("a b@c.d"));
    assert!(!is_valid_email("a@b@c.d"));
    assert!(!is_valid_email("@b.c"));
    assert!(!is_valid_email("a@b."));
}

#[test]
fn email_pattern_compiles() {
    assert!(EMAIL_PATTERN.is_some());
}

#[test]
fn email_rejects_unicode_whitespace_inside_address() {
    assert!(!is_valid_email("a\u{a0}b@c.d"));
    assert!(!is_valid_email("a@b\u{2003}c.d"));
    assert!(!is_valid_email("a@b.c\u{3000}d"));
    assert!(!is_valid_email("a\u{feff}@b.c"));
    assert!(is_valid_email("josé@contoh.id"));
}

#[test]
fn draft_trims_unicode_whitespace_and_bom() {
    let draft = ContactDraft::from_raw("\u{feff}", "\u{feff}a@b.c\u{a0}", "\u{2003}0123456789\u{3000}");
    assert_eq!(draft.name, "");
    assert_eq!(draft.email, "a@b.c");
    assert_eq!(draft.message, "0123456789");
    let report = validate(&draft, MIN);
    assert_eq!(report.name, Some(FieldError::Required));
    assert_eq!(report.email, None);
    assert_eq!(report.message, None);
}

#[test]
fn invalid_email_reports_format_error() {
    let report = validate(&ContactDraft::from_raw("Ana", "not-an-email", "0123456789"), MIN);
    assert_eq!(report.email, Some(FieldError::InvalidFormat));
}

#[test]
fn message_length_boundary() {
    let nine = validate(&ContactDraft::from_raw("Ana", "a@b.c", "123456789"), MIN);
    assert_eq!(nine.message, Some(FieldError::TooShort { min_chars: 10 }));
    let ten = validate(&ContactDraft::from_raw("Ana", "a@b.c", "1234567890"), MIN);
    assert_eq!(ten.message, None);
    assert!(ten.is_valid());
}

#[test]
fn message_length_is_measured_after_trimming() {
    let report = validate(&ContactDraft::from_raw("Ana", "a@b.c", "   123456789   "), MIN);
    assert_eq!(report.message, Some(FieldError::TooShort { min_chars: 10 }));
}

#[test]
fn messages_are_per_field() {
    assert_eq!(FieldError::Required.message(Field::Name), "Nama harus diisi");
    assert_eq!(FieldError::Required.message(Field::Email), "Email harus diisi");
    assert_eq!(FieldError::InvalidFormat.message(Field::Email), "Format email tidak valid");
    assert_eq!(FieldError::Required.message(Field::Message), "Pesan harus diisi");
    assert_eq!(FieldError::TooShort { min_chars: 10 }.message(Field::Message), "Pesan minimal 10 karakter");
}

// =============================================================
// apply_report
// =============================================================

#[test]
fn each_empty_field_gets_exactly_one_required_error() {
    let cases = [
        (Field::Name, FakeForm::filled("", "a@b.c", "0123456789"), "Nama harus diisi"),
        (Field::Email, FakeForm::filled("Ana", "", "0123456789"), "Email harus diisi"),
        (Field::Message, FakeForm::filled("Ana", "a@b.c", ""), "Pesan harus diisi"),
    ];
    for (field, mut form, message) in cases {
        form.submit();
        assert_eq!(form.annotations(field), [message.to_owned()]);
        assert_eq!(form.total_annotations(), 1);
        assert!(form.banners.is_empty());
        assert_eq!(form.invalid.get(&field), Some(&true));
    }
}

#[test]
fn resubmitting_replaces_rather_than_stacks_errors() {
    let mut form = FakeForm::filled("", "bad", "short");
    form.submit();
    form.submit();
    assert_eq!(form.annotations(Field::Name).len(), 1);
    assert_eq!(form.annotations(Field::Email), ["Format email tidak valid".to_owned()]);
    assert_eq!(form.annotations(Field::Message), ["Pesan minimal 10 karakter".to_owned()]);
}

#[test]
fn fixed_field_has_its_error_cleared() {
    let mut form = FakeForm::filled("", "a@b.c", "0123456789");
    form.submit();
    assert_eq!(form.annotations(Field::Name).len(), 1);

    form.values.insert(Field::Name, "Ana".into());
    form.values.insert(Field::Email, "bad".into());
    form.submit();
    assert!(form.annotations(Field::Name).is_empty());
    assert_eq!(form.invalid.get(&Field::Name), Some(&false));
    assert_eq!(form.annotations(Field::Email).len(), 1);
}

#[test]
fn valid_submit_shows_banner_resets_and_leaves_no_errors() {
    let mut form = FakeForm::filled("", "a@b.c", "0123456789");
    form.submit();

    form.values.insert(Field::Name, "Ana".into());
    form.submit();

    assert_eq!(form.banners, vec![format!("{SUCCESS_TITLE} {SUCCESS_BODY}")]);
    assert_eq!(form.total_annotations(), 0);
    assert!(Field::ALL.iter().all(|f| form.value(*f).is_empty()));
    assert!(form.invalid.values().all(|invalid| !invalid));
}
