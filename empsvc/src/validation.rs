//! Declarative field validation for request bodies.
//!
//! A submission type implements [`Validate`] by listing its [`FieldConstraint`]s in order.
//! Validation is eager and exhaustive: every constraint is evaluated and every violation is
//! collected into [`FieldErrors`], keyed by the field's wire name. When several constraints on
//! one field fail, the last one in the list wins.
//!
//! Handlers receive already-validated bodies through the [`ValidatedJson`] extractor, which
//! rejects the request with [`Error::ValidationFailed`] before the handler runs.
//!
//! ```ignore
//! impl Validate for Signup {
//!     fn constraints() -> &'static [FieldConstraint<Self>] {
//!         static CONSTRAINTS: &[FieldConstraint<Signup>] = &[
//!             FieldConstraint::new("name", Constraint::NotBlank, "name is required", name),
//!         ];
//!         CONSTRAINTS
//!     }
//! }
//! ```

use std::borrow::Cow;
use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use rust_decimal::Decimal;
use serde::{Serialize, de::DeserializeOwned};
use validator::ValidateEmail;

use crate::errors::Error;

/// The value of a single field, as seen by a constraint.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    Text(Option<&'a str>),
    Decimal(Option<&'a Decimal>),
}

/// A single rule a field must satisfy.
///
/// Apart from [`Constraint::NotNull`] and [`Constraint::NotBlank`], constraints treat a missing
/// value as valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    NotNull,
    /// Present and non-empty once characters up to U+0020 are trimmed from both ends
    NotBlank,
    /// At most this many UTF-16 code units
    MaxChars(usize),
    /// Zero or greater
    NonNegative,
    Email,
    /// Exactly this many ASCII digits and nothing else
    Digits(usize),
}

impl Constraint {
    pub fn is_satisfied_by(&self, value: FieldValue<'_>) -> bool {
        match (self, value) {
            (Constraint::NotNull, FieldValue::Text(v)) => v.is_some(),
            (Constraint::NotNull, FieldValue::Decimal(v)) => v.is_some(),
            (Constraint::NotBlank, FieldValue::Text(v)) => v.is_some_and(|s| !trim_control(s).is_empty()),
            (Constraint::MaxChars(max), FieldValue::Text(v)) => v.is_none_or(|s| s.encode_utf16().count() <= *max),
            (Constraint::NonNegative, FieldValue::Decimal(v)) => v.is_none_or(|d| *d >= Decimal::ZERO),
            (Constraint::Email, FieldValue::Text(v)) => v.is_none_or(is_email),
            (Constraint::Digits(n), FieldValue::Text(v)) => {
                v.is_none_or(|s| s.len() == *n && s.bytes().all(|b| b.is_ascii_digit()))
            }
            // A constraint that does not apply to the value's kind cannot be violated by it
            _ => true,
        }
    }
}

/// One entry in a type's ordered list of field rules.
pub struct FieldConstraint<T> {
    /// Field name as it appears on the wire
    pub field: &'static str,
    pub constraint: Constraint,
    pub message: &'static str,
    pub value: for<'a> fn(&'a T) -> FieldValue<'a>,
}

impl<T> FieldConstraint<T> {
    pub const fn new(
        field: &'static str,
        constraint: Constraint,
        message: &'static str,
        value: for<'a> fn(&'a T) -> FieldValue<'a>,
    ) -> Self {
        Self {
            field,
            constraint,
            message,
            value,
        }
    }
}

/// Violations keyed by field name, one message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    pub fn insert(&mut self, field: &'static str, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Types whose fields are checked against an ordered list of constraints.
pub trait Validate: Sized + 'static {
    fn constraints() -> &'static [FieldConstraint<Self>];

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        for rule in Self::constraints() {
            if !rule.constraint.is_satisfied_by((rule.value)(self)) {
                errors.insert(rule.field, rule.message);
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// JSON body extractor that also runs [`Validate::validate`].
///
/// Malformed JSON is rejected exactly like [`axum::Json`] would; a well-formed body that
/// violates constraints is rejected with [`Error::ValidationFailed`].
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate().map_err(Error::ValidationFailed)?;
        Ok(Self(value))
    }
}

/// Email shape as accepted by [`validator::ValidateEmail`], with two allowances: an empty
/// string passes (pair with [`Constraint::NotBlank`] when the address is mandatory), and
/// non-ASCII characters are permitted in the local part.
fn is_email(s: &str) -> bool {
    if s.is_empty() {
        return true;
    }

    // validator's local-part grammar is ASCII-only; substitute an ASCII letter for anything
    // beyond so the 64-character local-part limit still applies
    let candidate: Cow<'_, str> = match s.rsplit_once('@') {
        Some((local, domain)) if !local.is_ascii() => {
            let local: String = local.chars().map(|c| if c.is_ascii() { c } else { 'x' }).collect();
            Cow::Owned(format!("{local}@{domain}"))
        }
        _ => Cow::Borrowed(s),
    };

    let candidate: &str = &candidate;
    candidate.validate_email()
}

/// Strips ASCII control characters and spaces (everything up to U+0020) from both ends.
fn trim_control(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        name: Option<String>,
        amount: Option<Decimal>,
    }

    fn name(p: &Sample) -> FieldValue<'_> {
        FieldValue::Text(p.name.as_deref())
    }

    fn amount(p: &Sample) -> FieldValue<'_> {
        FieldValue::Decimal(p.amount.as_ref())
    }

    impl Validate for Sample {
        fn constraints() -> &'static [FieldConstraint<Self>] {
            static CONSTRAINTS: &[FieldConstraint<Sample>] = &[
                FieldConstraint::new("name", Constraint::NotBlank, "blank", name),
                FieldConstraint::new("name", Constraint::MaxChars(3), "too long", name),
                FieldConstraint::new("amount", Constraint::NonNegative, "negative", amount),
            ];
            CONSTRAINTS
        }
    }

    #[test]
    fn collects_every_violation() {
        let sample = Sample {
            name: None,
            amount: Some(Decimal::new(-1, 0)),
        };
        let errors = sample.validate().unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name"), Some("blank"));
        assert_eq!(errors.get("amount"), Some("negative"));
    }

    #[test]
    fn last_violation_on_a_field_wins() {
        // Whitespace-only and over-long: both name rules fail, the later message is kept
        let sample = Sample {
            name: Some("      ".to_string()),
            amount: None,
        };
        let errors = sample.validate().unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name"), Some("too long"));
    }

    #[test]
    fn valid_value_passes() {
        let sample = Sample {
            name: Some("abc".to_string()),
            amount: Some(Decimal::ZERO),
        };
        assert!(sample.validate().is_ok());
    }

    #[test]
    fn max_chars_counts_utf16_units_not_bytes() {
        assert!(Constraint::MaxChars(3).is_satisfied_by(FieldValue::Text(Some("ñöé"))));
        assert!(!Constraint::MaxChars(3).is_satisfied_by(FieldValue::Text(Some("ñöéü"))));
        // Astral-plane characters take two units each
        assert!(Constraint::MaxChars(4).is_satisfied_by(FieldValue::Text(Some("😀😀"))));
        assert!(!Constraint::MaxChars(3).is_satisfied_by(FieldValue::Text(Some("😀😀"))));
    }

    #[test]
    fn not_blank_only_trims_ascii_control_and_space() {
        let not_blank = Constraint::NotBlank;
        assert!(!not_blank.is_satisfied_by(FieldValue::Text(Some(" \t\r\n"))));
        assert!(!not_blank.is_satisfied_by(FieldValue::Text(Some("\u{0}\u{1f}"))));
        assert!(not_blank.is_satisfied_by(FieldValue::Text(Some("\u{a0}"))));
        assert!(not_blank.is_satisfied_by(FieldValue::Text(Some("\u{2003}"))));
    }

    #[test]
    fn optional_constraints_accept_missing_values() {
        for constraint in [
            Constraint::MaxChars(1),
            Constraint::Email,
            Constraint::Digits(10),
            Constraint::NonNegative,
        ] {
            assert!(constraint.is_satisfied_by(FieldValue::Text(None)));
            assert!(constraint.is_satisfied_by(FieldValue::Decimal(None)));
        }
        assert!(!Constraint::NotNull.is_satisfied_by(FieldValue::Text(None)));
        assert!(!Constraint::NotBlank.is_satisfied_by(FieldValue::Text(None)));
    }

    #[test]
    fn not_null_accepts_empty_text() {
        assert!(Constraint::NotNull.is_satisfied_by(FieldValue::Text(Some(""))));
    }

    #[test]
    fn digits_requires_exact_length() {
        let digits = Constraint::Digits(10);
        assert!(digits.is_satisfied_by(FieldValue::Text(Some("0123456789"))));
        assert!(!digits.is_satisfied_by(FieldValue::Text(Some("123"))));
        assert!(!digits.is_satisfied_by(FieldValue::Text(Some("01234567890"))));
        assert!(!digits.is_satisfied_by(FieldValue::Text(Some("012345678a"))));
        assert!(!digits.is_satisfied_by(FieldValue::Text(Some("٠١٢٣٤٥٦٧٨٩"))));
    }

    #[test]
    fn email_shapes() {
        let local_64 = format!("{}@example.com", "a".repeat(64));
        let local_65 = format!("{}@example.com", "a".repeat(65));
        let accented_64 = format!("{}@example.com", "é".repeat(64));

        for ok in [
            "a@b.com",
            "first.last+tag@mail.example.org",
            "user@localhost",
            "josé@example.com",
            "a@[127.0.0.1]",
            local_64.as_str(),
            accented_64.as_str(),
            "",
        ] {
            assert!(is_email(ok), "{ok} should be accepted");
        }
        for bad in ["bad", "@b.com", "a@", "a@b..com", "a@-b.com", "a b@c.com", "a@b_c.com", local_65.as_str()] {
            assert!(!is_email(bad), "{bad} should be rejected");
        }
    }
}
