use std::{borrow::Cow, fmt};

use serde::Serialize;
use validator::ValidationErrors;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: Cow<'static, str>,
    pub code: Cow<'static, str>,
    pub message: Cow<'static, str>,
}

/// Every violation found in an input, in field declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn new(
        field: impl Into<Cow<'static, str>>,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self(vec![Violation {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }])
    }

    /// Collects `errors` field by field, following the order of `fields`.
    ///
    /// Fields that are not listed are appended afterwards, sorted by name, so nothing
    /// reported by the validator is lost.
    pub fn from_errors(errors: &ValidationErrors, fields: &[&'static str]) -> Self {
        let field_errors = errors.field_errors();
        let mut violations = Vec::new();

        for field in fields {
            if let Some(errors) = field_errors.get(*field) {
                violations.extend(errors.iter().map(|error| Violation {
                    field: Cow::Borrowed(*field),
                    code: error.code.clone(),
                    message: error.message.clone().unwrap_or_else(|| error.code.clone()),
                }));
            }
        }

        let mut unlisted = field_errors
            .iter()
            .filter(|(field, _)| fields.iter().all(|listed| **field != *listed))
            .collect::<Vec<_>>();
        unlisted.sort_by(|a, b| a.0.cmp(b.0));

        for (field, errors) in unlisted {
            violations.extend(errors.iter().map(|error| Violation {
                field: field.clone(),
                code: error.code.clone(),
                message: error.message.clone().unwrap_or_else(|| error.code.clone()),
            }));
        }

        Self(violations)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = self
            .0
            .iter()
            .map(|v| format!("{}: {}", v.field, v.message))
            .collect::<Vec<_>>();

        write!(f, "{}", parts.join(", "))
    }
}

impl std::error::Error for Violations {}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use validator::{ValidationError, ValidationErrors};

    use super::*;

    fn error(code: &'static str, message: &'static str) -> ValidationError {
        ValidationError::new(code).with_message(Cow::Borrowed(message))
    }

    #[test]
    fn follows_field_order() {
        let mut errors = ValidationErrors::new();
        errors.add("message", error("length", "too short"));
        errors.add("name", error("length", "too short"));
        errors.add("email", error("email", "invalid"));

        let violations = Violations::from_errors(&errors, &["name", "email", "message"]);
        let fields = violations
            .iter()
            .map(|v| v.field.as_ref())
            .collect::<Vec<_>>();

        assert_eq!(fields, vec!["name", "email", "message"]);
    }

    #[test]
    fn keeps_unlisted_fields() {
        let mut errors = ValidationErrors::new();
        errors.add("zeta", ValidationError::new("custom"));
        errors.add("name", error("length", "too short"));

        let violations = Violations::from_errors(&errors, &["name"]);

        assert_eq!(violations.iter().count(), 2);
        assert!(violations.contains("zeta"));
        assert_eq!(violations.iter().last().map(|v| v.message.as_ref()), Some("custom"));
    }

    #[test]
    fn display_joins_messages() {
        let violations = Violations::new("email", "email", "E-mail inválido");
        assert_eq!(violations.to_string(), "email: E-mail inválido");
    }
}
