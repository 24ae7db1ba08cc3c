use serde::Serialize;

use crate::TrackError;

/// Email and backer number identifying one pledge.
///
/// Serializes to the request body the endpoint expects: `{ "email", "number" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    email: String,
    number: String,
}

impl Credentials {
    /// Trims both values and rejects blank ones, email first.
    pub fn new(email: Option<&str>, number: Option<&str>) -> Result<Self, TrackError> {
        let email = required(email, "email")?;
        let number = required(number, "backer number")?;
        Ok(Self { email, number })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    /// Email with the local part hidden, safe for log lines.
    pub fn masked_email(&self) -> String {
        match self.email.split_once('@') {
            Some((local, domain)) => {
                let first: String = local.chars().take(1).collect();
                format!("{first}***@{domain}")
            }
            None => "***".to_owned(),
        }
    }
}

fn required(value: Option<&str>, field: &'static str) -> Result<String, TrackError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_owned()),
        _ => Err(TrackError::MissingCredential(field)),
    }
}
