use serde::Serialize;
use validator::{Validate, ValidationError};

use crate::ReportForm;

/// Minimum number of characters in a trimmed report message.
pub const MIN_MESSAGE_CHARS: usize = 5;

/// Separator used when violations are shown as one line.
pub const VIOLATION_SEPARATOR: &str = " · ";

/// Checked fields in reporting order, with the text shown to residents.
const RULES: &[(&str, &str)] = &[
    ("building", "Indica lo stabile (via e numero civico)."),
    ("full_name", "Inserisci nome e cognome."),
    ("email", "Inserisci un indirizzo email."),
    ("message", "Descrivi la segnalazione (almeno 5 caratteri)."),
    ("consent", "Devi accettare l'informativa privacy."),
];

/// A single field-level problem with the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub message: &'static str,
}

/// Check a form and return every violation, in fixed field order.
///
/// An empty list means the form can be sent.
pub fn validate(form: &ReportForm) -> Vec<Violation> {
    let errors = match form.validate() {
        Ok(()) => return Vec::new(),
        Err(errors) => errors,
    };
    let failed = errors.field_errors();

    RULES
        .iter()
        .filter(|(field, _)| failed.contains_key(*field))
        .map(|&(field, message)| Violation { field, message })
        .collect()
}

/// Join violations into the single line shown in the result banner.
pub fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.message)
        .collect::<Vec<_>>()
        .join(VIOLATION_SEPARATOR)
}

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

pub(crate) fn descriptive_message(value: &str) -> Result<(), ValidationError> {
    if value.trim().chars().count() < MIN_MESSAGE_CHARS {
        return Err(ValidationError::new("too_short"));
    }
    Ok(())
}

pub(crate) fn accepted(value: &bool) -> Result<(), ValidationError> {
    if !*value {
        return Err(ValidationError::new("consent_required"));
    }
    Ok(())
}
