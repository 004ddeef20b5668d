//! Contact inquiry composed from the calculator.
//!
//! Validates the contact form, formats the phone number, and builds an
//! email body summarising the calculation plus a `mailto:` link that opens
//! it in the user's mail client.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use equity_core::calculations::common::format_currency;
use equity_core::{CalculationResults, ParsedInputs, RawInputs};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// One message per contact field that failed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", joined(.name, .email, .phone, .message))]
pub struct InquiryError {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

fn joined(
    name: &Option<String>,
    email: &Option<String>,
    phone: &Option<String>,
    message: &Option<String>,
) -> String {
    [name, email, phone, message]
        .into_iter()
        .filter_map(|m| m.as_deref())
        .collect::<Vec<_>>()
        .join(" ")
}

impl InquiryError {
    fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none() && self.message.is_none()
    }

    pub fn messages(&self) -> Vec<&str> {
        [&self.name, &self.email, &self.phone, &self.message]
            .into_iter()
            .filter_map(|m| m.as_deref())
            .collect()
    }
}

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is valid"));

fn digits(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

/// Formats phone input progressively as `(XXX) XXX-XXXX`, ignoring anything
/// that is not a digit and anything past the tenth digit.
pub fn format_phone_number(input: &str) -> String {
    let d: String = digits(input).chars().take(10).collect();
    match d.len() {
        0..=3 => d,
        4..=6 => format!("({}) {}", &d[..3], &d[3..]),
        _ => format!("({}) {}-{}", &d[..3], &d[3..6], &d[6..]),
    }
}

impl ContactForm {
    /// Checks every field and reports all problems at once.
    pub fn validate(&self) -> Result<(), InquiryError> {
        let mut errors = InquiryError::default();

        if self.name.trim().is_empty() {
            errors.name = Some("Name is required.".to_string());
        }

        if self.email.trim().is_empty() {
            errors.email = Some("Email is required.".to_string());
        } else if !EMAIL_PATTERN.is_match(&self.email) {
            errors.email = Some("Please enter a valid email address.".to_string());
        }

        let phone_digits = digits(&self.phone);
        if phone_digits.is_empty() {
            errors.phone = Some("Phone number is required.".to_string());
        } else if phone_digits.len() < 10 {
            errors.phone = Some("Please enter a complete 10-digit phone number.".to_string());
        }

        if self.message.trim().is_empty() {
            errors.message = Some("Message is required.".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// The figures quoted in an inquiry.
#[derive(Debug, Clone, Copy)]
pub struct CalculatorSummary<'a> {
    pub raw: &'a RawInputs,
    pub parsed: ParsedInputs,
    pub results: &'a CalculationResults,
}

impl fmt::Display for CalculatorSummary<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "--- Calculator Summary ---")?;
        writeln!(
            f,
            "Current Home Value: {}",
            format_currency(self.parsed.current_home_value)
        )?;
        writeln!(
            f,
            "New Home Price: {}",
            format_currency(self.parsed.new_home_price)
        )?;
        writeln!(
            f,
            "Available for Down Payment: {}",
            format_currency(self.results.net_equity)
        )?;
        writeln!(
            f,
            "Debts Paid Off: {} ({}%)",
            format_currency(self.results.debts_paid_off),
            self.raw.debt_payoff_percentage.trim()
        )?;
        writeln!(
            f,
            "Estimated New Monthly Payment (PITI): {}",
            format_currency(self.results.new_monthly_payment)
        )?;
        write!(f, "--------------------------")
    }
}

/// A validated, ready-to-send inquiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inquiry {
    pub subject: String,
    pub body: String,
}

impl Inquiry {
    /// Validates `form` and composes the email.
    pub fn compose(
        form: &ContactForm,
        summary: Option<CalculatorSummary<'_>>,
    ) -> Result<Self, InquiryError> {
        form.validate()?;

        let summary = summary
            .map(|s| s.to_string())
            .unwrap_or_else(|| "No calculation results available.".to_string());

        let body = format!(
            "A new inquiry has been submitted from the Equity to Opportunity Calculator.

--- Client Details ---
Name: {name}
Email: {email}
Phone: {phone}
--------------------

Message:
{message}

{summary}
",
            name = form.name,
            email = form.email,
            phone = format_phone_number(&form.phone),
            message = form.message,
        );

        Ok(Self {
            subject: format!("Inquiry from Equity Calculator: {}", form.name),
            body,
        })
    }

    /// `mailto:` link with the subject and body percent-encoded.
    pub fn mailto(
        &self,
        recipient: &str,
    ) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use equity_core::{FormField, evaluate};
    use pretty_assertions::assert_eq;

    fn form() -> ContactForm {
        ContactForm {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "920-555-0142".to_string(),
            message: "Can we talk about selling this spring?".to_string(),
        }
    }

    // =========================================================================
    // format_phone_number
    // =========================================================================

    #[test]
    fn phone_formats_progressively() {
        assert_eq!(format_phone_number(""), "");
        assert_eq!(format_phone_number("920"), "920");
        assert_eq!(format_phone_number("92055"), "(920) 55");
        assert_eq!(format_phone_number("9205550142"), "(920) 555-0142");
    }

    #[test]
    fn phone_ignores_punctuation_and_extra_digits() {
        assert_eq!(format_phone_number("+1 (920) 555-0142"), "(192) 055-5014");
        assert_eq!(format_phone_number("920.555.0142 x99"), "(920) 555-0142");
    }

    // =========================================================================
    // validate
    // =========================================================================

    #[test]
    fn complete_form_is_valid() {
        assert_eq!(form().validate(), Ok(()));
    }

    #[test]
    fn blank_form_reports_every_field() {
        let errors = ContactForm::default().validate().unwrap_err();

        assert_eq!(
            errors.messages(),
            vec![
                "Name is required.",
                "Email is required.",
                "Phone number is required.",
                "Message is required.",
            ]
        );
    }

    #[test]
    fn error_displays_messages_in_field_order() {
        let errors = ContactForm {
            name: " ".to_string(),
            phone: "920".to_string(),
            ..form()
        }
        .validate()
        .unwrap_err();

        let boxed: Box<dyn std::error::Error> = Box::new(errors);
        assert_eq!(
            boxed.to_string(),
            "Name is required. Please enter a complete 10-digit phone number."
        );
    }

    #[test]
    fn malformed_email_is_rejected() {
        let bad = ContactForm {
            email: "jane@example".to_string(),
            ..form()
        };

        assert_eq!(
            bad.validate().unwrap_err().email.as_deref(),
            Some("Please enter a valid email address.")
        );
    }

    #[test]
    fn short_phone_is_rejected() {
        let bad = ContactForm {
            phone: "(920) 555".to_string(),
            ..form()
        };

        assert_eq!(
            bad.validate().unwrap_err().phone.as_deref(),
            Some("Please enter a complete 10-digit phone number.")
        );
    }

    // =========================================================================
    // compose
    // =========================================================================

    #[test]
    fn body_without_results_says_so() {
        let inquiry = Inquiry::compose(&form(), None).unwrap();

        assert_eq!(inquiry.subject, "Inquiry from Equity Calculator: Jane Doe");
        assert_eq!(
            inquiry.body,
            "A new inquiry has been submitted from the Equity to Opportunity Calculator.

--- Client Details ---
Name: Jane Doe
Email: jane@example.com
Phone: (920) 555-0142
--------------------

Message:
Can we talk about selling this spring?

No calculation results available.
"
        );
    }

    #[test]
    fn body_with_results_quotes_the_summary() {
        let mut raw = RawInputs::starter();
        raw.set(FormField::NewInterestRate, "6.5");
        let results = evaluate(&raw).unwrap();
        let summary = CalculatorSummary {
            raw: &raw,
            parsed: ParsedInputs::from_raw(&raw),
            results: &results,
        };

        let inquiry = Inquiry::compose(&form(), Some(summary)).unwrap();

        assert!(inquiry.body.ends_with(
            "--- Calculator Summary ---
Current Home Value: $500,000
New Home Price: $750,000
Available for Down Payment: $235,000
Debts Paid Off: $25,000 (100%)
Estimated New Monthly Payment (PITI): $4,088
--------------------------
"
        ));
    }

    #[test]
    fn invalid_form_composes_nothing() {
        let bad = ContactForm {
            message: "  ".to_string(),
            ..form()
        };

        assert!(Inquiry::compose(&bad, None).is_err());
    }

    #[test]
    fn mailto_percent_encodes_subject_and_body() {
        let inquiry = Inquiry {
            subject: "Hi there".to_string(),
            body: "Line 1\nLine & 2".to_string(),
        };

        assert_eq!(
            inquiry.mailto("agent@example.com"),
            "mailto:agent@example.com?subject=Hi%20there&body=Line%201%0ALine%20%26%202"
        );
    }
}
