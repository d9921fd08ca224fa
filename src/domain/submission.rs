//! Validated form submissions.

use std::fmt;

/// General contact form submission.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

/// Career application submission.
#[derive(Debug, Clone)]
pub struct CareerSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub experience: String,
    pub availability: String,
    pub message: Option<String>,
    pub resume: Option<ResumeAttachment>,
}

impl CareerSubmission {
    /// Applicant's full name as rendered in notifications.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Decoded resume paired with its original filename and declared MIME type.
///
/// Invariant: the filename is non-empty whenever an attachment exists; a
/// resume payload without one is treated as absent upstream.
#[derive(Clone)]
pub struct ResumeAttachment {
    pub filename: String,
    pub content: Vec<u8>,
    pub content_type: String,
}

impl fmt::Debug for ResumeAttachment {
    // Content bytes stay out of logs
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResumeAttachment")
            .field("filename", &self.filename)
            .field("content_type", &self.content_type)
            .field("len", &self.content.len())
            .finish()
    }
}

/// Client referral submission: who is referring, who needs care, and what care.
#[derive(Debug, Clone)]
pub struct ReferralSubmission {
    pub referrer_name: String,
    pub referrer_email: String,
    pub referrer_phone: Option<String>,
    pub patient_name: String,
    pub patient_phone: String,
    pub patient_address: String,
    pub services_needed: String,
    pub urgency: Urgency,
    pub insurance_info: String,
    pub additional_info: Option<String>,
}

/// Referral timeline classification.
///
/// Controls only how the notification reads; there is no routing logic
/// behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Immediate,
    WithinWeek,
    WithinMonth,
    Flexible,
}

impl Urgency {
    pub const TOKENS: [&'static str; 4] = ["immediate", "within_week", "within_month", "flexible"];

    /// Parses the wire token used by the referral form.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "immediate" => Some(Self::Immediate),
            "within_week" => Some(Self::WithinWeek),
            "within_month" => Some(Self::WithinMonth),
            "flexible" => Some(Self::Flexible),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Self::Immediate => "immediate",
            Self::WithinWeek => "within_week",
            Self::WithinMonth => "within_month",
            Self::Flexible => "flexible",
        }
    }

    /// Human-readable label shown in notification emails, matching the
    /// options offered on the referral form.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Immediate => "Immediate (within 24 hours)",
            Self::WithinWeek => "Within a week",
            Self::WithinMonth => "Within a month",
            Self::Flexible => "Flexible timing",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgency_token_round_trip() {
        for token in Urgency::TOKENS {
            let urgency = Urgency::from_token(token).unwrap();
            assert_eq!(urgency.token(), token);
        }
    }

    #[test]
    fn test_urgency_rejects_unknown_tokens() {
        assert!(Urgency::from_token("asap").is_none());
        assert!(Urgency::from_token("IMMEDIATE").is_none());
        assert!(Urgency::from_token("").is_none());
    }

    #[test]
    fn test_resume_debug_omits_content() {
        let resume = ResumeAttachment {
            filename: "resume.pdf".to_string(),
            content: b"%PDF-1.4 secret".to_vec(),
            content_type: "application/pdf".to_string(),
        };

        let rendered = format!("{resume:?}");
        assert!(rendered.contains("resume.pdf"));
        assert!(!rendered.contains("secret"));
    }
}
