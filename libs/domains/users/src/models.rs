use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::error::{UserError, UserResult};

/// Fields validated on every write, in the order they are reported.
const VALIDATED_FIELDS: [&str; 2] = ["name", "email"];

/// Structural email rule: exactly one `@`, neither first nor last, and a `.`
/// somewhere after the `@` but before the final character.
///
/// Deliberately looser than RFC 5322.
pub fn is_valid_email(email: &str) -> bool {
    let mut ats = email.match_indices('@');
    let Some((at, _)) = ats.next() else {
        return false;
    };
    if ats.next().is_some() {
        return false;
    }

    let Some((last, _)) = email.char_indices().last() else {
        return false;
    };
    if at == 0 || at == last {
        return false;
    }

    email[at + 1..last].contains('.')
}

/// Custom validator for the email field
fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::new("required")
            .with_message(Cow::Borrowed("email cannot be empty")));
    }
    if !is_valid_email(email) {
        return Err(ValidationError::new("email_format")
            .with_message(Cow::Borrowed("email format is invalid")));
    }
    Ok(())
}

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct User {
    /// Opaque unique identifier, assigned at creation
    pub id: String,
    /// Display name
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: String,
    /// Email address (unique across users, case-sensitive)
    #[validate(custom(function = "validate_email"))]
    pub email: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user stamped with the current time.
    pub fn new(id: String, name: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            email,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check the record, reporting the first offending field.
    pub fn check(&self) -> UserResult<()> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };

        let field_errors = errors.field_errors();
        for field in VALIDATED_FIELDS {
            if let Some(error) = field_errors.get(field).and_then(|errs| errs.first()) {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                return Err(UserError::validation(field, message));
            }
        }

        Err(UserError::Internal(format!(
            "unexpected validation failure: {}",
            errors
        )))
    }

    /// Build the record that results from applying `changes`.
    ///
    /// `self` is untouched, so a candidate that fails [`check`](Self::check)
    /// can be dropped without leaving a partially updated record behind.
    pub fn with_changes(&self, changes: &UpdateUser) -> Self {
        let mut candidate = self.clone();
        if let Some(name) = changes.requested_name() {
            candidate.name = name.to_string();
        }
        if let Some(email) = changes.requested_email() {
            candidate.email = email.to_string();
        }
        candidate.updated_at = next_update_time(self.updated_at);
        candidate
    }
}

/// Current time, nudged forward when the clock has not moved past `previous`.
fn next_update_time(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::nanoseconds(1)
    }
}

/// DTO for creating a new user
///
/// Missing fields decode as empty strings and are then reported as
/// validation errors on the named field.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default, deny_unknown_fields)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
}

/// DTO for updating an existing user
///
/// An absent or empty field means "no change".
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UpdateUser {
    pub fn requested_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn requested_email(&self) -> Option<&str> {
        self.email.as_deref().filter(|email| !email.is_empty())
    }
}
