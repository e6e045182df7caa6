//! Customer domain types.

use uuid::Uuid;

/// A customer as seen by the service and handler layers.
///
/// Distinct from the persisted row; the storage adapter maps between the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: Uuid,
    pub mail: String,
}

/// Input for creating a customer. Carries no id; the storage adapter
/// assigns one at insert.
#[derive(Debug, Clone)]
pub struct CustomerInput {
    pub mail: String,
}

/// Why a mail address failed validation. The first failing rule wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailError {
    /// Blank or missing.
    Required,
    /// Not a local-part@domain address.
    Format,
}

impl MailError {
    /// Field-error message as it appears on the wire.
    pub fn message(self) -> &'static str {
        match self {
            Self::Required => "Email is required",
            Self::Format => "Invalid email format",
        }
    }
}

/// Validate a mail address: non-blank, then local-part@domain shape.
///
/// Grammar: exactly one `@`, non-empty local part and domain, no
/// whitespace, domain neither starting nor ending with a dot.
pub fn validate_mail(mail: &str) -> Result<(), MailError> {
    if mail.trim().is_empty() {
        return Err(MailError::Required);
    }
    if mail.chars().any(char::is_whitespace) {
        return Err(MailError::Format);
    }
    let Some((local, domain)) = mail.split_once('@') else {
        return Err(MailError::Format);
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(MailError::Format);
    }
    if domain.starts_with('.') || domain.ends_with('.') {
        return Err(MailError::Format);
    }
    Ok(())
}
