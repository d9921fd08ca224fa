//! Notification email rendering.
//!
//! Each form gets an HTML and a plain-text rendering of the same content,
//! built from Askama templates under `templates/`. Every validated field
//! appears labelled in both renderings; absent optional fields are omitted
//! entirely rather than shown with a placeholder.
//!
//! Subject lines are deterministic templates:
//!
//! - contact:  `Website Contact: {subject}`
//! - careers:  `Career Application: {position} - {first} {last}`
//! - referral: `New Client Referral: {patient name}`

use askama::Template;

use crate::domain::{CareerSubmission, ContactSubmission, ReferralSubmission};

/// Subject plus both body renderings of one notification.
#[derive(Debug, Clone)]
pub struct EmailContent {
    pub subject: String,
    pub html: String,
    pub text: String,
}

#[derive(Template)]
#[template(path = "contact_email.html")]
struct ContactEmailHtml<'a> {
    submission: &'a ContactSubmission,
}

#[derive(Template)]
#[template(path = "contact_email.txt")]
struct ContactEmailText<'a> {
    submission: &'a ContactSubmission,
}

#[derive(Template)]
#[template(path = "career_email.html")]
struct CareerEmailHtml<'a> {
    submission: &'a CareerSubmission,
    resume_attached: bool,
}

#[derive(Template)]
#[template(path = "career_email.txt")]
struct CareerEmailText<'a> {
    submission: &'a CareerSubmission,
    resume_attached: bool,
}

#[derive(Template)]
#[template(path = "referral_email.html")]
struct ReferralEmailHtml<'a> {
    submission: &'a ReferralSubmission,
}

#[derive(Template)]
#[template(path = "referral_email.txt")]
struct ReferralEmailText<'a> {
    submission: &'a ReferralSubmission,
}

/// Renders the contact-form notification.
pub fn contact_email(submission: &ContactSubmission) -> askama::Result<EmailContent> {
    Ok(EmailContent {
        subject: format!("Website Contact: {}", submission.subject),
        html: ContactEmailHtml { submission }.render()?,
        text: ContactEmailText { submission }.render()?,
    })
}

/// Renders the career-application notification.
///
/// The body states whether a resume made it through decoding; the attachment
/// itself travels separately on the outgoing message.
pub fn career_email(submission: &CareerSubmission) -> askama::Result<EmailContent> {
    let resume_attached = submission.resume.is_some();

    Ok(EmailContent {
        subject: format!(
            "Career Application: {} - {}",
            submission.position,
            submission.full_name()
        ),
        html: CareerEmailHtml {
            submission,
            resume_attached,
        }
        .render()?,
        text: CareerEmailText {
            submission,
            resume_attached,
        }
        .render()?,
    })
}

/// Renders the client-referral notification.
pub fn referral_email(submission: &ReferralSubmission) -> askama::Result<EmailContent> {
    Ok(EmailContent {
        subject: format!("New Client Referral: {}", submission.patient_name),
        html: ReferralEmailHtml { submission }.render()?,
        text: ReferralEmailText { submission }.render()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ResumeAttachment, Urgency};

    fn contact_submission() -> ContactSubmission {
        ContactSubmission {
            name: "Jo Smith".to_string(),
            email: "jo@example.com".to_string(),
            phone: None,
            subject: "Hi there".to_string(),
            message: "First line\nSecond line".to_string(),
        }
    }

    fn career_submission() -> CareerSubmission {
        CareerSubmission {
            first_name: "Dana".to_string(),
            last_name: "Lee".to_string(),
            email: "dana@example.com".to_string(),
            phone: "5551234567".to_string(),
            position: "Registered Nurse".to_string(),
            experience: "5".to_string(),
            availability: "Weekdays".to_string(),
            message: None,
            resume: None,
        }
    }

    fn referral_submission() -> ReferralSubmission {
        ReferralSubmission {
            referrer_name: "Sam Carter".to_string(),
            referrer_email: "sam@example.com".to_string(),
            referrer_phone: None,
            patient_name: "Pat Doe".to_string(),
            patient_phone: "5559876543".to_string(),
            patient_address: "12 Elm Street\nSpringfield".to_string(),
            services_needed: "Skilled nursing".to_string(),
            urgency: Urgency::WithinWeek,
            insurance_info: "Medicare".to_string(),
            additional_info: None,
        }
    }

    #[test]
    fn test_contact_subject_and_labels() {
        let content = contact_email(&contact_submission()).unwrap();

        assert_eq!(content.subject, "Website Contact: Hi there");
        assert!(content.html.contains("Jo Smith"));
        assert!(content.html.contains("jo@example.com"));
        assert!(content.text.contains("Name: Jo Smith"));
        assert!(content.text.contains("Subject: Hi there"));
    }

    #[test]
    fn test_contact_message_line_breaks_become_html() {
        let content = contact_email(&contact_submission()).unwrap();

        assert!(content.html.contains("First line<br"));
        assert!(content.text.contains("First line\nSecond line"));
    }

    #[test]
    fn test_contact_absent_phone_is_omitted() {
        let content = contact_email(&contact_submission()).unwrap();

        assert!(!content.html.contains("Phone"));
        assert!(!content.text.contains("Phone"));
        assert!(!content.html.contains("undefined"));
    }

    #[test]
    fn test_contact_present_phone_is_labelled() {
        let mut submission = contact_submission();
        submission.phone = Some("5550001111".to_string());

        let content = contact_email(&submission).unwrap();
        assert!(content.html.contains("Phone:</strong> 5550001111"));
        assert!(content.text.contains("Phone: 5550001111"));
    }

    #[test]
    fn test_html_escapes_user_content() {
        let mut submission = contact_submission();
        submission.name = "<script>alert(1)</script>".to_string();

        let content = contact_email(&submission).unwrap();
        assert!(!content.html.contains("<script>"));
        assert!(content.html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_career_subject_and_resume_flag() {
        let mut submission = career_submission();

        let content = career_email(&submission).unwrap();
        assert_eq!(content.subject, "Career Application: Registered Nurse - Dana Lee");
        assert!(content.html.contains("Resume Attached:</strong> No"));
        assert!(content.text.contains("Resume Attached: No"));

        submission.resume = Some(ResumeAttachment {
            filename: "resume.pdf".to_string(),
            content: b"%PDF-1.4".to_vec(),
            content_type: "application/pdf".to_string(),
        });

        let content = career_email(&submission).unwrap();
        assert!(content.html.contains("Resume Attached:</strong> Yes"));
        assert!(content.text.contains("Resume Attached: Yes"));
    }

    #[test]
    fn test_career_optional_message_block() {
        let mut submission = career_submission();

        let content = career_email(&submission).unwrap();
        assert!(!content.html.contains("Additional Information"));

        submission.message = Some("Available immediately".to_string());
        let content = career_email(&submission).unwrap();
        assert!(content.html.contains("Additional Information"));
        assert!(content.text.contains("Available immediately"));
    }

    #[test]
    fn test_referral_sections_and_urgency_label() {
        let content = referral_email(&referral_submission()).unwrap();

        assert_eq!(content.subject, "New Client Referral: Pat Doe");
        assert!(content.html.contains("Referring Party Information"));
        assert!(content.html.contains("Patient Information"));
        assert!(content.html.contains("Care Details"));
        assert!(content.html.contains("Within a week"));
        assert!(content.text.contains("Urgency: Within a week"));
    }

    #[test]
    fn test_referral_multiline_address() {
        let content = referral_email(&referral_submission()).unwrap();

        assert!(content.html.contains("12 Elm Street<br"));
        assert!(content.text.contains("12 Elm Street\nSpringfield"));
    }

    #[test]
    fn test_every_urgency_label_renders() {
        for token in Urgency::TOKENS {
            let mut submission = referral_submission();
            submission.urgency = Urgency::from_token(token).unwrap();

            let content = referral_email(&submission).unwrap();
            assert!(content.html.contains(submission.urgency.label()));
            assert!(content.text.contains(submission.urgency.label()));
        }
    }
}
