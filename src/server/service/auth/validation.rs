//! Field rules for user accounts.

use crate::server::error::user::UserError;

pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_NAME_LEN: usize = 150;
pub const MIN_PASSWORD_LEN: usize = 8;

/// Usernames which would clash with fixed routes
const RESERVED_USERNAMES: &[&str] = &["me"];

pub fn validate_email(email: &str) -> Result<(), UserError> {
    if email.is_empty() {
        return Err(UserError::EmptyField { field: "email" });
    }
    if email.chars().count() > MAX_EMAIL_LEN {
        return Err(UserError::FieldTooLong {
            field: "email",
            max: MAX_EMAIL_LEN,
        });
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(UserError::InvalidEmail);
    };

    let valid = !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace);

    if !valid {
        return Err(UserError::InvalidEmail);
    }

    Ok(())
}

/// Usernames are letters, digits and `@ . + - _`
pub fn validate_username(username: &str) -> Result<(), UserError> {
    validate_name("username", username)?;

    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '_' | '.' | '@' | '+' | '-'))
    {
        return Err(UserError::InvalidUsername);
    }

    if RESERVED_USERNAMES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(username))
    {
        return Err(UserError::ReservedUsername(username.to_string()));
    }

    Ok(())
}

pub fn validate_name(field: &'static str, value: &str) -> Result<(), UserError> {
    if value.trim().is_empty() {
        return Err(UserError::EmptyField { field });
    }
    if value.chars().count() > MAX_NAME_LEN {
        return Err(UserError::FieldTooLong {
            field,
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), UserError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(UserError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }

    Ok(())
}
