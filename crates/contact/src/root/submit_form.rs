use std::{borrow::Cow, sync::LazyLock};

use bittencourt_db::table::ContactMessage;
use bittencourt_shared::Violations;
use regex::Regex;
use sea_query::SqliteQueryBuilder;
use sea_query_sqlx::SqlxBinder;
use ulid::Ulid;
use validator::{Validate, ValidateEmail, ValidationError};

use crate::ContactField;

/// Dotted domain ending with an alphabetic TLD of at least two letters.
static RE_EMAIL_DOMAIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Za-z0-9-]+\.)+[A-Za-z]{2,}$").unwrap());

/// HTML5 address check, then rejects dotless domains, one-letter TLDs and IP literals.
fn validate_email_address(email: &str) -> Result<(), ValidationError> {
    let valid = email.validate_email()
        && email
            .rsplit_once('@')
            .is_some_and(|(_, domain)| RE_EMAIL_DOMAIN.is_match(domain));

    if valid {
        return Ok(());
    }

    let mut error = ValidationError::new("email");
    error.message = Some(Cow::from("E-mail inválido"));
    Err(error)
}

/// Raw contact form as received from a visitor. Every field may be missing.
#[derive(Debug, Default, Clone, Validate)]
pub struct SubmitFormInput {
    #[validate(
        required(message = "Nome é obrigatório"),
        length(min = 2, message = "Nome deve ter pelo menos 2 caracteres")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "E-mail é obrigatório"),
        custom(function = "validate_email_address")
    )]
    pub email: Option<String>,
    pub phone: Option<String>,
    #[validate(
        required(message = "Mensagem é obrigatória"),
        length(min = 10, message = "Mensagem deve ter pelo menos 10 caracteres")
    )]
    pub message: Option<String>,
}

/// A contact form that passed validation and can be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

impl SubmitFormInput {
    /// Checks every rule and reports all violations at once.
    pub fn into_submission(self) -> Result<ContactSubmission, Violations> {
        if let Err(errors) = self.validate() {
            return Err(Violations::from_errors(&errors, &ContactField::names()));
        }

        // The required rules above guarantee every field is present here
        let (Some(name), Some(email), Some(message)) = (self.name, self.email, self.message)
        else {
            return Err(Violations::new(
                "body",
                "required",
                "Campos obrigatórios ausentes",
            ));
        };

        Ok(ContactSubmission {
            name,
            email,
            phone: self.phone,
            message,
        })
    }
}

impl super::Command {
    /// Validates `input` and stores it, returning the new contact id.
    ///
    /// Nothing is written when validation fails.
    pub async fn submit_form(&self, input: SubmitFormInput) -> bittencourt_shared::Result<String> {
        let submission = input.into_submission()?;
        let id = Ulid::new().to_string();

        let statement = sea_query::Query::insert()
            .into_table(ContactMessage::Table)
            .columns([
                ContactMessage::Id,
                ContactMessage::Name,
                ContactMessage::Email,
                ContactMessage::Phone,
                ContactMessage::Message,
                ContactMessage::CreatedAt,
            ])
            .values_panic([
                id.to_owned().into(),
                submission.name.into(),
                submission.email.into(),
                submission.phone.into(),
                submission.message.into(),
                bittencourt_shared::now().into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, email: &str, message: &str) -> SubmitFormInput {
        SubmitFormInput {
            name: Some(name.to_owned()),
            email: Some(email.to_owned()),
            phone: None,
            message: Some(message.to_owned()),
        }
    }

    fn fields(violations: &Violations) -> Vec<&str> {
        violations.iter().map(|v| v.field.as_ref()).collect()
    }

    #[test]
    fn accepts_minimal_submission() {
        let submission = input("Jo", "a@b.com", "1234567890")
            .into_submission()
            .unwrap();

        assert_eq!(submission.name, "Jo");
        assert_eq!(submission.email, "a@b.com");
        assert_eq!(submission.phone, None);
        assert_eq!(submission.message, "1234567890");
    }

    #[test]
    fn reports_every_violation() {
        let violations = input("J", "bad", "short").into_submission().unwrap_err();

        assert_eq!(fields(&violations), vec!["name", "email", "message"]);
        let messages = violations
            .iter()
            .map(|v| v.message.as_ref())
            .collect::<Vec<_>>();
        assert_eq!(
            messages,
            vec![
                "Nome deve ter pelo menos 2 caracteres",
                "E-mail inválido",
                "Mensagem deve ter pelo menos 10 caracteres",
            ]
        );
    }

    #[test]
    fn missing_fields_are_required() {
        let violations = SubmitFormInput::default().into_submission().unwrap_err();

        assert_eq!(fields(&violations), vec!["name", "email", "message"]);
        assert!(violations.iter().all(|v| v.code == "required"));
    }

    #[test]
    fn short_name_only() {
        let violations = input("A", "ana@example.com", "Preciso de uma consulta")
            .into_submission()
            .unwrap_err();

        assert_eq!(fields(&violations), vec!["name"]);
        assert_eq!(violations.iter().next().map(|v| v.code.as_ref()), Some("length"));
    }

    #[test]
    fn lengths_count_characters() {
        let submission = input("Zé", "ze@example.com", "ação ação!")
            .into_submission()
            .unwrap();
        assert_eq!(submission.name, "Zé");

        let violations = input("É", "e@example.com", "çççççççç")
            .into_submission()
            .unwrap_err();
        assert_eq!(fields(&violations), vec!["name", "message"]);
    }

    #[test]
    fn invalid_emails() {
        for email in [
            "",
            "bad",
            "a@",
            "@b.com",
            "a b@c.com",
            "user@localhost",
            "a@b",
            "a@b.c",
            "a@[127.0.0.1]",
            "a@example.c0m",
        ] {
            let violations = input("Maria", email, "Gostaria de agendar")
                .into_submission()
                .unwrap_err();
            assert_eq!(fields(&violations), vec!["email"], "{email}");
        }
    }

    #[test]
    fn invalid_email_is_reported_once() {
        let violations = input("Maria", "user@localhost", "Gostaria de agendar")
            .into_submission()
            .unwrap_err();

        assert_eq!(violations.iter().count(), 1);
        let violation = violations.iter().next().unwrap();
        assert_eq!(violation.code, "email");
        assert_eq!(violation.message, "E-mail inválido");
    }

    #[test]
    fn valid_emails() {
        for email in [
            "a@b.com",
            "carlos@empresa.com.br",
            "first.last+tag@sub-domain.example.org",
            "CONTATO@BITTENCOURT.ADV.BR",
        ] {
            let submission = input("Maria", email, "Gostaria de agendar")
                .into_submission()
                .unwrap();
            assert_eq!(submission.email, email);
        }
    }

    #[test]
    fn phone_is_passed_through() {
        let mut value = input("Maria", "maria@example.com", "Gostaria de agendar");
        value.phone = Some(" (11) 9999-0000 ".to_owned());

        let submission = value.into_submission().unwrap();
        assert_eq!(submission.phone.as_deref(), Some(" (11) 9999-0000 "));
    }
}
