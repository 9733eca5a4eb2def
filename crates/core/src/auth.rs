//! Client-side validation for the teacher login and signup forms.
//!
//! Every check here runs before any network call; the per-field messages
//! are shown inline next to the offending control.

/// Per-field validation messages. `None` means the field passed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
    pub qualification: Option<&'static str>,
}

impl FieldErrors {
    /// True when every field passed validation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
            && self.qualification.is_none()
    }
}

/// Login form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl LoginForm {
    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        FieldErrors {
            name: validate_name(&self.name),
            email: validate_email(&self.email),
            password: validate_password(&self.password),
            ..FieldErrors::default()
        }
    }
}

/// Signup form input. Adds qualification and password confirmation on
/// top of the login fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub qualification: String,
}

impl SignupForm {
    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        FieldErrors {
            name: validate_name(&self.name),
            email: validate_email(&self.email),
            password: validate_password(&self.password),
            confirm_password: validate_confirmation(&self.password, &self.confirm_password),
            qualification: if self.qualification.is_empty() {
                Some("Qualification is required")
            } else {
                None
            },
        }
    }
}

fn validate_name(name: &str) -> Option<&'static str> {
    name.is_empty().then_some("Name is required")
}

fn validate_email(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        Some("Email is required")
    } else if !is_valid_email(email) {
        Some("Email is invalid")
    } else {
        None
    }
}

fn validate_password(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        Some("Password is required")
    } else if password.len() < 6 {
        Some("Password must be at least 6 characters")
    } else {
        None
    }
}

fn validate_confirmation(password: &str, confirmation: &str) -> Option<&'static str> {
    if confirmation.is_empty() {
        Some("Please confirm your password")
    } else if password != confirmation {
        Some("Passwords do not match")
    } else {
        None
    }
}

/// Simple `local@domain.tld` shape check: no whitespace, one `@` with a
/// non-empty local part, and a dot-separated domain.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
