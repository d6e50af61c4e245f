#[cfg(feature = "diesel")]
use diesel::prelude::*;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;
use uuid::Uuid;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[cfg_attr(feature = "diesel", derive(diesel_derive_enum::DbEnum))]
#[cfg_attr(feature = "diesel", ExistingTypePath = "crate::schema::sql_types::InvoiceStatus")]
#[cfg_attr(feature = "diesel", DbValueStyle = "snake_case")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Pending,
    Paid,
}

impl InvoiceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "Draft",
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Paid => "Paid",
        }
    }
}

/// One row of the invoice list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "diesel", derive(Queryable, Selectable))]
#[cfg_attr(feature = "diesel", diesel(table_name = crate::schema::invoices))]
#[cfg_attr(feature = "diesel", diesel(check_for_backend(diesel::pg::Pg)))]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSummary {
    pub id: Uuid,
    pub reference: String,
    pub client_name: String,
    pub payment_due: NaiveDate,
    pub total_cents: i64,
    pub status: InvoiceStatus,
}

impl InvoiceSummary {
    pub fn display_reference(&self) -> String {
        format!("#{}", self.reference)
    }

    pub fn due_label(&self) -> String {
        format!("Due {}", self.payment_due.format("%d %b %Y"))
    }

    pub fn formatted_total(&self) -> String {
        format_pounds(self.total_cents)
    }
}

/// Formats an amount in pence as pounds with thousands separators, e.g. `£1,800.90`.
pub fn format_pounds(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{sign}£{grouped}.{:02}", cents % 100)
}

/// Column widths of `invoices.client_name` and `invoices.client_email`.
pub const MAX_CLIENT_NAME_LEN: usize = 255;
pub const MAX_CLIENT_EMAIL_LEN: usize = 254;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvoiceValidationError {
    #[error("Client name is required")]
    MissingClientName,
    #[error("Client name is longer than {} characters", MAX_CLIENT_NAME_LEN)]
    ClientNameTooLong,
    #[error("Client email is longer than {} characters", MAX_CLIENT_EMAIL_LEN)]
    ClientEmailTooLong,
    #[error("Client email is invalid")]
    InvalidClientEmail,
    #[error("Total cannot be negative")]
    NegativeTotal,
    #[error("New invoices cannot be created as paid")]
    CreatedAsPaid,
    #[error("Total is not a valid amount: {0}")]
    InvalidAmount(String),
}

/// Payload of `invoice.create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewInvoice {
    pub client_name: String,
    pub client_email: String,
    pub description: String,
    pub payment_due: NaiveDate,
    pub total_cents: i64,
    pub status: InvoiceStatus,
}

impl NewInvoice {
    pub fn validate(&self) -> Result<(), InvoiceValidationError> {
        if self.client_name.trim().is_empty() {
            return Err(InvoiceValidationError::MissingClientName);
        }
        if self.client_name.chars().count() > MAX_CLIENT_NAME_LEN {
            return Err(InvoiceValidationError::ClientNameTooLong);
        }
        if self.client_email.chars().count() > MAX_CLIENT_EMAIL_LEN {
            return Err(InvoiceValidationError::ClientEmailTooLong);
        }
        let email = self.client_email.trim();
        if !email.is_empty() && !email.contains('@') {
            return Err(InvoiceValidationError::InvalidClientEmail);
        }
        if self.total_cents < 0 {
            return Err(InvoiceValidationError::NegativeTotal);
        }
        if self.status == InvoiceStatus::Paid {
            return Err(InvoiceValidationError::CreatedAsPaid);
        }
        Ok(())
    }
}

/// Parses a decimal amount such as `1800.9` or `1,800.90` into pence.
pub fn parse_amount(input: &str) -> Result<i64, InvoiceValidationError> {
    let invalid = || InvoiceValidationError::InvalidAmount(input.to_string());
    let trimmed = input.trim();
    // the sign may sit on either side of the currency symbol
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest.strip_prefix('£').unwrap_or(rest)),
        None => {
            let rest = trimmed.strip_prefix('£').unwrap_or(trimmed);
            match rest.strip_prefix('-') {
                Some(rest) => (true, rest),
                None => (false, rest),
            }
        }
    };
    let cleaned: String = unsigned.chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Err(invalid());
    }
    let (whole, fraction) = match cleaned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (cleaned.as_str(), ""),
    };
    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    let is_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
    if fraction.len() > 2 || !is_digits(whole) || !is_digits(fraction) {
        return Err(invalid());
    }
    if negative {
        return Err(InvoiceValidationError::NegativeTotal);
    }
    let whole: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| invalid())?
    };
    let fraction: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
        _ => fraction.parse().map_err(|_| invalid())?,
    };
    whole
        .checked_mul(100)
        .and_then(|w| w.checked_add(fraction))
        .ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_invoice() -> NewInvoice {
        NewInvoice {
            client_name: "Alex Grim".to_string(),
            client_email: "alexgrim@mail.com".to_string(),
            description: "Graphic Design".to_string(),
            payment_due: NaiveDate::from_ymd_opt(2021, 8, 19).unwrap(),
            total_cents: 55_600,
            status: InvoiceStatus::Pending,
        }
    }

    #[test]
    fn test_format_pounds() {
        assert_eq!(format_pounds(0), "£0.00");
        assert_eq!(format_pounds(180_090), "£1,800.90");
        assert_eq!(format_pounds(10_200_000), "£102,000.00");
        assert_eq!(format_pounds(-550), "-£5.50");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1800.9"), Ok(180_090));
        assert_eq!(parse_amount("£1,800.90"), Ok(180_090));
        assert_eq!(parse_amount("12"), Ok(1_200));
        assert_eq!(parse_amount(".5"), Ok(50));
        assert!(parse_amount("").is_err());
        assert!(parse_amount("1.234").is_err());
        assert!(parse_amount("abc").is_err());
        assert_eq!(parse_amount("-3"), Err(InvoiceValidationError::NegativeTotal));
    }

    #[test]
    fn test_parse_amount_keeps_sign_of_fractions() {
        assert_eq!(parse_amount("-0.50"), Err(InvoiceValidationError::NegativeTotal));
        assert_eq!(parse_amount("-.5"), Err(InvoiceValidationError::NegativeTotal));
        assert_eq!(parse_amount("-£0.01"), Err(InvoiceValidationError::NegativeTotal));
        assert_eq!(parse_amount("£-1,000"), Err(InvoiceValidationError::NegativeTotal));
        assert!(matches!(
            parse_amount("+5"),
            Err(InvoiceValidationError::InvalidAmount(_))
        ));
        assert!(matches!(
            parse_amount("--5"),
            Err(InvoiceValidationError::InvalidAmount(_))
        ));
        assert!(matches!(
            parse_amount("-"),
            Err(InvoiceValidationError::InvalidAmount(_))
        ));
        assert!(matches!(
            parse_amount("."),
            Err(InvoiceValidationError::InvalidAmount(_))
        ));
        assert_eq!(parse_amount("0.50"), Ok(50));
    }

    #[test]
    fn test_summary_labels() {
        let summary = InvoiceSummary {
            id: Uuid::new_v4(),
            reference: "RT3080".to_string(),
            client_name: "Jensen Huang".to_string(),
            payment_due: NaiveDate::from_ymd_opt(2021, 8, 19).unwrap(),
            total_cents: 180_090,
            status: InvoiceStatus::Paid,
        };
        assert_eq!(summary.display_reference(), "#RT3080");
        assert_eq!(summary.due_label(), "Due 19 Aug 2021");
        assert_eq!(summary.formatted_total(), "£1,800.90");
    }

    #[test]
    fn test_validate_new_invoice() {
        assert_eq!(new_invoice().validate(), Ok(()));

        let mut invoice = new_invoice();
        invoice.client_name = "   ".to_string();
        assert_eq!(invoice.validate(), Err(InvoiceValidationError::MissingClientName));

        let mut invoice = new_invoice();
        invoice.status = InvoiceStatus::Paid;
        assert_eq!(invoice.validate(), Err(InvoiceValidationError::CreatedAsPaid));

        let mut invoice = new_invoice();
        invoice.client_email = "not-an-email".to_string();
        assert_eq!(invoice.validate(), Err(InvoiceValidationError::InvalidClientEmail));
    }

    #[test]
    fn test_validate_column_limits() {
        let mut invoice = new_invoice();
        invoice.client_name = "é".repeat(MAX_CLIENT_NAME_LEN);
        assert_eq!(invoice.validate(), Ok(()));
        invoice.client_name.push('x');
        assert_eq!(invoice.validate(), Err(InvoiceValidationError::ClientNameTooLong));

        let mut invoice = new_invoice();
        invoice.client_email = format!("{}@mail.com", "a".repeat(MAX_CLIENT_EMAIL_LEN));
        assert_eq!(invoice.validate(), Err(InvoiceValidationError::ClientEmailTooLong));
    }

    #[test]
    fn test_new_invoice_rejects_unknown_fields() {
        let json = r#"{"clientName":"a","clientEmail":"","description":"","paymentDue":"2021-08-19","totalCents":1,"status":"draft","id":"x"}"#;
        assert!(serde_json::from_str::<NewInvoice>(json).is_err());
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(serde_json::to_string(&InvoiceStatus::Pending).unwrap(), r#""pending""#);
        assert_eq!("paid".parse::<InvoiceStatus>().unwrap(), InvoiceStatus::Paid);
    }
}
