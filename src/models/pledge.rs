use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::requests::pledge::PledgeForm;

/// Format of the timestamp column in the pledge ledger.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Error, Debug)]
pub enum PledgeError {
    #[error("field '{field}' must not be empty")]
    EmptyField { field: &'static str },
}

/// A validated pledge submission. Created per request, forwarded once to
/// the ledger, never read back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pledge {
    pub name: String,
    pub amount: String,
    pub contact: String,
    pub location: String,
    pub message: String,
}

fn required(field: &'static str, value: String) -> Result<String, PledgeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PledgeError::EmptyField { field });
    }
    Ok(trimmed.to_string())
}

impl TryFrom<PledgeForm> for Pledge {
    type Error = PledgeError;

    fn try_from(form: PledgeForm) -> Result<Self, Self::Error> {
        Ok(Self {
            name: required("name", form.name)?,
            amount: required("amount", form.amount)?,
            contact: required("contact", form.contact)?,
            location: required("location", form.location)?,
            message: required("message", form.message)?,
        })
    }
}

impl Pledge {
    /// Row appended to the ledger. Column order is fixed:
    /// name, amount, message, timestamp, contact, location.
    pub fn ledger_row(&self, submitted_at: DateTime<Local>) -> Vec<String> {
        vec![
            self.name.clone(),
            self.amount.clone(),
            self.message.clone(),
            submitted_at.format(TIMESTAMP_FORMAT).to_string(),
            self.contact.clone(),
            self.location.clone(),
        ]
    }

    /// Download filename for the card, spaces in the name replaced with
    /// underscores.
    pub fn attachment_filename(&self) -> String {
        format!("pledge_{}.png", self.name.replace(' ', "_"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn form() -> PledgeForm {
        PledgeForm {
            name: "Jane Doe".to_string(),
            amount: "50000".to_string(),
            contact: "0700000000".to_string(),
            location: "Kampala".to_string(),
            message: "Congrats!".to_string(),
        }
    }

    #[test]
    fn test_valid_form_is_accepted() {
        let pledge = Pledge::try_from(form()).unwrap();
        assert_eq!(pledge.name, "Jane Doe");
        assert_eq!(pledge.amount, "50000");
    }

    #[test]
    fn test_fields_are_trimmed() {
        let mut f = form();
        f.name = "  Jane Doe  ".to_string();

        let pledge = Pledge::try_from(f).unwrap();
        assert_eq!(pledge.name, "Jane Doe");
    }

    #[test]
    fn test_empty_field_is_rejected() {
        let mut f = form();
        f.location = String::new();

        let err = Pledge::try_from(f).unwrap_err();
        assert!(matches!(err, PledgeError::EmptyField { field: "location" }));
    }

    #[test]
    fn test_whitespace_only_field_is_rejected() {
        let mut f = form();
        f.message = "   ".to_string();

        assert!(Pledge::try_from(f).is_err());
    }

    #[test]
    fn test_ledger_row_ordering() {
        let pledge = Pledge::try_from(form()).unwrap();
        let at = Local.with_ymd_and_hms(2025, 8, 6, 13, 45, 9).unwrap();

        let row = pledge.ledger_row(at);
        assert_eq!(
            row,
            vec![
                "Jane Doe",
                "50000",
                "Congrats!",
                "2025-08-06 13:45:09",
                "0700000000",
                "Kampala",
            ]
        );
    }

    #[test]
    fn test_row_timestamp_round_trips() {
        let pledge = Pledge::try_from(form()).unwrap();
        let row = pledge.ledger_row(Local::now());

        assert!(chrono::NaiveDateTime::parse_from_str(&row[3], TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_attachment_filename_replaces_spaces() {
        let pledge = Pledge::try_from(form()).unwrap();
        assert_eq!(pledge.attachment_filename(), "pledge_Jane_Doe.png");
    }

    #[test]
    fn test_attachment_filename_single_word() {
        let mut f = form();
        f.name = "Jane".to_string();

        let pledge = Pledge::try_from(f).unwrap();
        assert_eq!(pledge.attachment_filename(), "pledge_Jane.png");
    }
}
