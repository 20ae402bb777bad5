//! Login and registration inputs.
//!
//! Inbound adapters hand raw form strings to these constructors before any
//! port is called, so services only ever see normalised, validated values.

use zeroize::Zeroizing;

use super::user::{Email, UserName, UserValidationError};

/// Form field a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
    /// Display name.
    Name,
    /// Email address.
    Email,
    /// Password.
    Password,
}

impl CredentialField {
    /// Field name as used in forms and error details.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

/// Validation failure for login or registration input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialsValidationError {
    /// A field failed its user-model validation.
    #[error("{source}")]
    Field {
        /// Offending field.
        field: CredentialField,
        /// Underlying rule that failed.
        source: UserValidationError,
    },
    /// Password was empty.
    #[error("password must not be empty")]
    EmptyPassword,
}

impl CredentialsValidationError {
    /// Field the failure refers to.
    pub fn field(&self) -> CredentialField {
        match self {
            Self::Field { field, .. } => *field,
            Self::EmptyPassword => CredentialField::Password,
        }
    }

    /// Stable code for error details.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Field { source, .. } => match source {
                UserValidationError::EmptyName => "empty_name",
                UserValidationError::NameTooLong { .. } => "name_too_long",
                UserValidationError::EmptyEmail => "empty_email",
                UserValidationError::EmailTooLong { .. } => "email_too_long",
                UserValidationError::InvalidEmail => "invalid_email",
                UserValidationError::InvalidId | UserValidationError::UnknownRole { .. } => {
                    "invalid_value"
                }
            },
            Self::EmptyPassword => "empty_password",
        }
    }
}

fn email_field(raw: &str) -> Result<Email, CredentialsValidationError> {
    Email::new(raw).map_err(|source| CredentialsValidationError::Field {
        field: CredentialField::Email,
        source,
    })
}

fn password_field(raw: &str) -> Result<Zeroizing<String>, CredentialsValidationError> {
    if raw.is_empty() {
        return Err(CredentialsValidationError::EmptyPassword);
    }
    Ok(Zeroizing::new(raw.to_owned()))
}

/// Validated login credentials.
///
/// ## Invariants
/// - `email` is normalised as described on [`Email`].
/// - `password` is non-empty; whitespace is preserved.
///
/// # Examples
/// ```
/// use rentitease_shell::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" Ada@Example.com ", "pw").unwrap();
/// assert_eq!(creds.email().as_ref(), "ada@example.com");
/// assert_eq!(creds.password(), "pw");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: Email,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Validate raw form values.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, CredentialsValidationError> {
        Ok(Self {
            email: email_field(email)?,
            password: password_field(password)?,
        })
    }

    /// Normalised email used for lookup.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Password as typed.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validated registration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    name: UserName,
    email: Email,
    password: Zeroizing<String>,
}

impl Registration {
    /// Validate raw form values, reporting the first failing field in form
    /// order (name, email, password).
    pub fn try_from_parts(
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Self, CredentialsValidationError> {
        let name = UserName::new(name).map_err(|source| CredentialsValidationError::Field {
            field: CredentialField::Name,
            source,
        })?;
        Ok(Self {
            name,
            email: email_field(email)?,
            password: password_field(password)?,
        })
    }

    /// Display name.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Normalised email.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Password as typed.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "pw", CredentialField::Email, "empty_email")]
    #[case("not-an-email", "pw", CredentialField::Email, "invalid_email")]
    #[case("ada@example.com", "", CredentialField::Password, "empty_password")]
    fn invalid_login(
        #[case] email: &str,
        #[case] password: &str,
        #[case] field: CredentialField,
        #[case] code: &str,
    ) {
        let err = LoginCredentials::try_from_parts(email, password)
            .expect_err("invalid inputs must fail");
        assert_eq!(err.field(), field);
        assert_eq!(err.code(), code);
    }

    #[rstest]
    fn login_keeps_password_whitespace() {
        let creds = LoginCredentials::try_from_parts("ada@example.com", " pw ").expect("valid");
        assert_eq!(creds.password(), " pw ");
    }

    #[rstest]
    #[case("", "ada@example.com", "pw", CredentialField::Name, "empty_name")]
    #[case("Ada", "", "pw", CredentialField::Email, "empty_email")]
    #[case("Ada", "ada@example.com", "", CredentialField::Password, "empty_password")]
    #[case("", "", "", CredentialField::Name, "empty_name")]
    fn invalid_registration_reports_first_field(
        #[case] name: &str,
        #[case] email: &str,
        #[case] password: &str,
        #[case] field: CredentialField,
        #[case] code: &str,
    ) {
        let err = Registration::try_from_parts(name, email, password)
            .expect_err("invalid inputs must fail");
        assert_eq!(err.field(), field);
        assert_eq!(err.code(), code);
    }

    #[rstest]
    fn registration_normalises_fields() {
        let reg = Registration::try_from_parts(" Ada ", "ADA@example.com", "pw").expect("valid");
        assert_eq!(reg.name().as_ref(), "Ada");
        assert_eq!(reg.email().as_ref(), "ada@example.com");
        assert_eq!(reg.password(), "pw");
    }
}
