//! Shapes of the literal site content and of the contact form.
//!
//! Content records borrow `'static` strings because every value is a literal
//! compiled into the binary; the contact form owns its strings because they
//! come from user input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub image: &'static str,
    pub profile_url: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Service {
    pub title: &'static str,
    pub summary: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub channel: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GalleryItem {
    pub title: &'static str,
    pub image: &'static str,
    pub category: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub name: &'static str,
    pub short: &'static str,
    pub url: &'static str,
}

/// Ways to reach the association outside the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactDetails {
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
    pub map_embed_url: &'static str,
    pub membership_form_url: &'static str,
}

impl ContactDetails {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` link with every character except digits and a leading `+` removed.
    pub fn tel(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .enumerate()
            .filter(|(i, c)| c.is_ascii_digit() || (*i == 0 && *c == '+'))
            .map(|(_, c)| c)
            .collect();
        format!("tel:{digits}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Event {
    pub slug: &'static str,
    pub title: &'static str,
    /// ISO 8601 calendar date, e.g. `2026-11-14`.
    pub date: &'static str,
    pub location: &'static str,
    pub category: &'static str,
    pub summary: &'static str,
    pub details: &'static str,
}

impl Event {
    /// Parses the literal date. `None` only if the literal is malformed.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d").ok()
    }

    /// Human readable date, falling back to the raw literal.
    pub fn display_date(&self) -> String {
        self.date()
            .map_or_else(|| self.date.to_owned(), |d| d.format("%B %-d, %Y").to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Billing {
    #[default]
    Monthly,
    Yearly,
}

impl Billing {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Monthly => Self::Yearly,
            Self::Yearly => Self::Monthly,
        }
    }

    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Monthly => "/mo",
            Self::Yearly => "/yr",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub name: &'static str,
    pub monthly_price: u32,
    pub tagline: &'static str,
    pub features: &'static [&'static str],
    pub highlighted: bool,
}

impl Plan {
    /// Yearly billing charges ten months, so two months are free.
    pub const fn price(&self, billing: Billing) -> u32 {
        match billing {
            Billing::Monthly => self.monthly_price,
            Billing::Yearly => self.monthly_price * 10,
        }
    }

    pub fn price_label(&self, billing: Billing) -> String {
        match self.price(billing) {
            0 => "Free".to_owned(),
            price => format!("${price}{}", billing.suffix()),
        }
    }
}

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_SUBJECT_LEN: usize = 200;
pub const MAX_MESSAGE_LEN: usize = 5000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please tell us your name")]
    EmptyName,
    #[error("Name is too long (max 100 characters)")]
    NameTooLong,
    #[error("Please enter your email address")]
    EmptyEmail,
    #[error("Email address is too long")]
    EmailTooLong,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Subject is too long (max 200 characters)")]
    SubjectTooLong,
    #[error("Please write a message")]
    EmptyMessage,
    #[error("Message is too long (max 5000 characters)")]
    MessageTooLong,
}

/// Contact form submission data.
///
/// `website` is a honeypot: the field is hidden from people, so a value
/// there means a bot filled the form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub website: Option<String>,
}

impl ContactRequest {
    /// Checks the fields in form order and reports the first problem.
    pub fn validate(&self) -> Result<(), ContactError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ContactError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(ContactError::NameTooLong);
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactError::EmptyEmail);
        }
        if email.chars().count() > MAX_EMAIL_LEN {
            return Err(ContactError::EmailTooLong);
        }
        if !is_plausible_email(email) {
            return Err(ContactError::InvalidEmail);
        }

        if self.subject.trim().chars().count() > MAX_SUBJECT_LEN {
            return Err(ContactError::SubjectTooLong);
        }

        let message = self.message.trim();
        if message.is_empty() {
            return Err(ContactError::EmptyMessage);
        }
        if message.chars().count() > MAX_MESSAGE_LEN {
            return Err(ContactError::MessageTooLong);
        }

        Ok(())
    }

    pub fn is_bot(&self) -> bool {
        self.website.as_deref().is_some_and(|v| !v.trim().is_empty())
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

/// Progress of the simulated contact submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Sent,
}

impl FormStatus {
    pub const fn is_submitting(self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub const fn is_sent(self) -> bool {
        matches!(self, Self::Sent)
    }

    /// Status after the user presses send.
    ///
    /// A second press while submitting is ignored. Bots skip straight to
    /// `Sent` so the honeypot is not revealed.
    pub fn on_submit(self, request: &ContactRequest) -> Result<Self, ContactError> {
        if self.is_submitting() {
            return Ok(self);
        }
        if request.is_bot() {
            return Ok(Self::Sent);
        }
        request.validate()?;
        Ok(Self::Submitting)
    }

    /// Status once the simulated delivery delay has elapsed.
    pub const fn on_delivered(self) -> Self {
        match self {
            Self::Submitting => Self::Sent,
            other => other,
        }
    }

    /// Status after the confirmation modal is closed.
    pub const fn on_dismiss(self) -> Self {
        match self {
            Self::Sent => Self::Idle,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn valid_request() -> ContactRequest {
        ContactRequest {
            name: "Ada Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            subject: "Collab".to_owned(),
            message: "Hello there".to_owned(),
            website: None,
        }
    }

    #[test]
    fn test_contact_request_default() {
        let request = ContactRequest::default();
        assert_eq!(request.name, "");
        assert_eq!(request.email, "");
        assert_eq!(request.subject, "");
        assert_eq!(request.message, "");
        assert_eq!(request.website, None);
    }

    #[test]
    fn test_valid_request_passes() {
        assert_eq!(valid_request().validate(), Ok(()));
    }

    #[test]
    fn test_subject_is_optional() {
        let request = ContactRequest {
            subject: String::new(),
            ..valid_request()
        };
        assert!(request.validate().is_ok());
    }

    /// An address of exactly `len` characters made of `local` repeated.
    fn email_of_len(local: char, len: usize) -> String {
        let domain = "@example.com";
        let mut email: String = std::iter::repeat_n(local, len - domain.len()).collect();
        email.push_str(domain);
        email
    }

    #[test]
    fn test_email_length_limit() {
        let at_limit = ContactRequest {
            email: email_of_len('a', MAX_EMAIL_LEN),
            ..valid_request()
        };
        assert_eq!(at_limit.validate(), Ok(()));

        let over = ContactRequest {
            email: email_of_len('a', MAX_EMAIL_LEN + 1),
            ..valid_request()
        };
        assert_matches!(over.validate(), Err(ContactError::EmailTooLong));
    }

    #[test]
    fn test_email_length_counts_characters() {
        // 142 characters but 272 bytes.
        let request = ContactRequest {
            email: email_of_len('\u{e9}', 142),
            ..valid_request()
        };
        assert!(request.email.len() > MAX_EMAIL_LEN);
        assert_eq!(request.validate(), Ok(()));

        let over = ContactRequest {
            email: email_of_len('\u{e9}', MAX_EMAIL_LEN + 1),
            ..valid_request()
        };
        assert_matches!(over.validate(), Err(ContactError::EmailTooLong));
    }

    #[test]
    fn test_subject_length_limit() {
        let at_limit = ContactRequest {
            subject: "\u{e9}".repeat(MAX_SUBJECT_LEN),
            ..valid_request()
        };
        assert_eq!(at_limit.validate(), Ok(()));

        let over = ContactRequest {
            subject: "s".repeat(MAX_SUBJECT_LEN + 1),
            ..valid_request()
        };
        assert_matches!(over.validate(), Err(ContactError::SubjectTooLong));
    }

    #[test]
    fn test_whitespace_name_is_empty() {
        let request = ContactRequest {
            name: "   ".to_owned(),
            ..valid_request()
        };
        assert_matches!(request.validate(), Err(ContactError::EmptyName));
    }

    #[test]
    fn test_first_error_wins() {
        let request = ContactRequest {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            ..valid_request()
        };
        assert_matches!(request.validate(), Err(ContactError::EmptyName));
    }

    #[test]
    fn test_email_shapes() {
        for bad in ["ada", "ada@", "@example.com", "ada@example", "ada@.com", "a da@example.com"] {
            let request = ContactRequest {
                email: bad.to_owned(),
                ..valid_request()
            };
            assert_matches!(request.validate(), Err(ContactError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn test_length_limits() {
        let request = ContactRequest {
            message: "x".repeat(MAX_MESSAGE_LEN + 1),
            ..valid_request()
        };
        assert_matches!(request.validate(), Err(ContactError::MessageTooLong));

        let request = ContactRequest {
            message: "x".repeat(MAX_MESSAGE_LEN),
            ..valid_request()
        };
        assert!(request.validate().is_ok());

        let request = ContactRequest {
            name: "n".repeat(MAX_NAME_LEN + 1),
            ..valid_request()
        };
        assert_matches!(request.validate(), Err(ContactError::NameTooLong));
    }

    #[test]
    fn test_honeypot() {
        assert!(!valid_request().is_bot());
        let request = ContactRequest {
            website: Some("http://spam.example".to_owned()),
            ..valid_request()
        };
        assert!(request.is_bot());
        let request = ContactRequest {
            website: Some("  ".to_owned()),
            ..valid_request()
        };
        assert!(!request.is_bot());
    }

    #[test]
    fn test_contact_request_deserializes_without_honeypot() {
        let request: ContactRequest = serde_json::from_str(
            r#"{"name":"A","email":"a@b.co","subject":"","message":"hi"}"#,
        )
        .unwrap();
        assert_eq!(request.website, None);
    }

    #[test]
    fn test_form_status_happy_path() {
        let status = FormStatus::default();
        let status = status.on_submit(&valid_request()).unwrap();
        assert_eq!(status, FormStatus::Submitting);
        let status = status.on_delivered();
        assert!(status.is_sent());
        assert_eq!(status.on_dismiss(), FormStatus::Idle);
    }

    #[test]
    fn test_form_status_invalid_stays_idle() {
        let request = ContactRequest {
            email: "nope".to_owned(),
            ..valid_request()
        };
        assert_matches!(
            FormStatus::Idle.on_submit(&request),
            Err(ContactError::InvalidEmail)
        );
    }

    #[test]
    fn test_form_status_ignores_double_submit() {
        let status = FormStatus::Submitting
            .on_submit(&ContactRequest::default())
            .unwrap();
        assert_eq!(status, FormStatus::Submitting);
    }

    #[test]
    fn test_form_status_bot_short_circuits() {
        let request = ContactRequest {
            website: Some("spam".to_owned()),
            ..ContactRequest::default()
        };
        assert_eq!(FormStatus::Idle.on_submit(&request), Ok(FormStatus::Sent));
    }

    #[test]
    fn test_form_status_stray_events_are_noops() {
        assert_eq!(FormStatus::Idle.on_delivered(), FormStatus::Idle);
        assert_eq!(FormStatus::Submitting.on_dismiss(), FormStatus::Submitting);
    }

    #[test]
    fn test_plan_pricing() {
        let plan = Plan {
            name: "Pro",
            monthly_price: 12,
            tagline: "",
            features: &[],
            highlighted: false,
        };
        assert_eq!(plan.price(Billing::Monthly), 12);
        assert_eq!(plan.price(Billing::Yearly), 120);
        assert_eq!(plan.price_label(Billing::Yearly), "$120/yr");

        let free = Plan {
            monthly_price: 0,
            ..plan
        };
        assert_eq!(free.price_label(Billing::Monthly), "Free");
        assert_eq!(free.price_label(Billing::Yearly), "Free");
    }

    #[test]
    fn test_billing_toggle() {
        assert_eq!(Billing::default(), Billing::Monthly);
        assert_eq!(Billing::Monthly.toggled(), Billing::Yearly);
        assert_eq!(Billing::Yearly.toggled(), Billing::Monthly);
    }

    #[test]
    fn test_contact_links() {
        let details = ContactDetails {
            email: "hello@example.org",
            phone: "+1 (555) 010-2030",
            address: "",
            map_embed_url: "",
            membership_form_url: "",
        };
        assert_eq!(details.mailto(), "mailto:hello@example.org");
        assert_eq!(details.tel(), "tel:+15550102030");
    }

    #[test]
    fn test_event_dates() {
        let event = Event {
            slug: "meetup",
            title: "Meetup",
            date: "2026-03-07",
            location: "",
            category: "",
            summary: "",
            details: "",
        };
        assert_eq!(event.date(), NaiveDate::from_ymd_opt(2026, 3, 7));
        assert_eq!(event.display_date(), "March 7, 2026");

        let broken = Event {
            date: "soon",
            ..event
        };
        assert_eq!(broken.date(), None);
        assert_eq!(broken.display_date(), "soon");
    }
}
