//! Message drafts for the contact-host modal and the contact page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both forms "send" through a fixed delay that always succeeds. These models
//! hold the draft, gate sending on required fields and produce the toast copy.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// Simulated send latency for both contact forms.
pub const SEND_DELAY_MS: u64 = 1000;

/// Reason for contacting a listing's host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InquiryType {
    #[default]
    General,
    Viewing,
    Application,
    Questions,
    Availability,
}

impl InquiryType {
    pub const ALL: [InquiryType; 5] =
        [Self::General, Self::Viewing, Self::Application, Self::Questions, Self::Availability];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Viewing => "viewing",
            Self::Application => "application",
            Self::Questions => "questions",
            Self::Availability => "availability",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::General => "General Inquiry",
            Self::Viewing => "Request Viewing",
            Self::Application => "Application to Rent",
            Self::Questions => "Questions about Property",
            Self::Availability => "Availability Check",
        }
    }

    pub fn parse(raw: &str) -> Self {
        Self::ALL.into_iter().find(|t| t.as_str() == raw).unwrap_or_default()
    }
}

/// Topic picked on the contact page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContactCategory {
    #[default]
    General,
    Discrimination,
    Safety,
    Technical,
    Partnership,
}

impl ContactCategory {
    pub const ALL: [ContactCategory; 5] =
        [Self::General, Self::Discrimination, Self::Safety, Self::Technical, Self::Partnership];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Discrimination => "discrimination",
            Self::Safety => "safety",
            Self::Technical => "technical",
            Self::Partnership => "partnership",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::General => "General Inquiry",
            Self::Discrimination => "Discrimination Report",
            Self::Safety => "Safety Concern",
            Self::Technical => "Technical Support",
            Self::Partnership => "Partnership Inquiry",
        }
    }

    pub fn parse(raw: &str) -> Self {
        Self::ALL.into_iter().find(|c| c.as_str() == raw).unwrap_or_default()
    }
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Draft message to a listing's host.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HostMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub inquiry_type: InquiryType,
    pub message: String,
}

impl HostMessage {
    /// # Errors
    ///
    /// Returns a user-facing message when a required field is blank.
    pub fn validate(&self) -> Result<(), &'static str> {
        if blank(&self.name) || blank(&self.email) || blank(&self.message) {
            return Err("Enter your name, email and a message.");
        }
        Ok(())
    }
}

/// Success toast for a message sent to `host_name`.
pub fn host_message_sent_copy(host_name: &str) -> (&'static str, String) {
    (
        "Message sent successfully!",
        format!("Your message has been sent to {host_name}. They will contact you soon."),
    )
}

/// Draft message to the DRAMP team from the contact page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SupportMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub category: ContactCategory,
    pub message: String,
}

impl SupportMessage {
    /// # Errors
    ///
    /// Returns a user-facing message when a required field is blank.
    pub fn validate(&self) -> Result<(), &'static str> {
        if blank(&self.name) || blank(&self.email) || blank(&self.subject) || blank(&self.message) {
            return Err("Enter your name, email, a subject and a message.");
        }
        Ok(())
    }
}

pub const SUPPORT_SENT_TITLE: &str = "Message sent successfully!";
pub const SUPPORT_SENT_DESCRIPTION: &str = "We'll get back to you within 24 hours.";
