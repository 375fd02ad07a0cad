//! Discrimination report wizard: draft fields, per-step validation and the
//! four-step linear navigation.
//!
//! DESIGN
//! ======
//! `ReportWizard` is the whole page state. Transitions are methods that either
//! move the step or return the missing field labels, so the page only decides
//! how to surface errors (a destructive toast). Submission is split into
//! `begin_submit` / `finish_submit` around the simulated delay the page owns.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

/// Simulated submission latency.
pub const SUBMIT_DELAY_MS: u64 = 2000;

pub const PROPERTY_TYPES: &[&str] =
    &["Apartment", "House", "Room/Shared Housing", "Student Housing", "Dormitory", "Other"];

pub const DISCRIMINATION_CATEGORIES: &[&str] = &[
    "Race/Ethnicity",
    "National Origin",
    "Religion",
    "Gender",
    "Disability",
    "Familial Status",
    "Sexual Orientation",
    "Age",
    "Source of Income",
    "Other",
];

/// Wizard steps in order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReportStep {
    #[default]
    Location,
    Incident,
    Evidence,
    Review,
}

impl ReportStep {
    pub const COUNT: u8 = 4;

    /// One-based step number.
    pub fn number(self) -> u8 {
        match self {
            Self::Location => 1,
            Self::Incident => 2,
            Self::Evidence => 3,
            Self::Review => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Location => "Property Location",
            Self::Incident => "Incident Details",
            Self::Evidence => "Evidence & Contact",
            Self::Review => "Review & Submit",
        }
    }

    /// Following step, saturating at `Review`.
    pub fn next(self) -> Self {
        match self {
            Self::Location => Self::Incident,
            Self::Incident => Self::Evidence,
            Self::Evidence | Self::Review => Self::Review,
        }
    }

    /// Preceding step, saturating at `Location`.
    pub fn prev(self) -> Self {
        match self {
            Self::Location | Self::Incident => Self::Location,
            Self::Evidence => Self::Incident,
            Self::Review => Self::Evidence,
        }
    }

    pub fn is_first(self) -> bool {
        self == Self::Location
    }

    pub fn is_last(self) -> bool {
        self == Self::Review
    }

    /// Completion percentage shown on the progress bar.
    pub fn progress_percent(self) -> u32 {
        u32::from(self.number()) * 100 / u32::from(Self::COUNT)
    }
}

/// Everything the reporter has typed so far.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportDraft {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub property_type: String,
    pub category: String,
    pub description: String,
    pub date_occurred: String,
    pub evidence_links: Vec<String>,
    pub contact_info: String,
}

impl Default for ReportDraft {
    fn default() -> Self {
        Self {
            street: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            property_type: String::new(),
            category: String::new(),
            description: String::new(),
            date_occurred: String::new(),
            evidence_links: vec![String::new()],
            contact_info: String::new(),
        }
    }
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl ReportDraft {
    /// Evidence links with content, in entry order.
    pub fn filled_evidence_links(&self) -> Vec<&str> {
        self.evidence_links.iter().map(String::as_str).filter(|l| !blank(l)).collect()
    }

    /// Labels of required fields still empty on `step`.
    pub fn missing_fields(&self, step: ReportStep) -> Vec<&'static str> {
        let mut missing = Vec::new();
        match step {
            ReportStep::Location => {
                for (value, label) in [
                    (&self.street, "Street Address"),
                    (&self.city, "City"),
                    (&self.state, "State"),
                    (&self.zip_code, "ZIP Code"),
                    (&self.property_type, "Property Type"),
                ] {
                    if blank(value) {
                        missing.push(label);
                    }
                }
            }
            ReportStep::Incident => {
                for (value, label) in [
                    (&self.category, "Discrimination Category"),
                    (&self.date_occurred, "Date Occurred"),
                    (&self.description, "Description of Incident"),
                ] {
                    if blank(value) {
                        missing.push(label);
                    }
                }
            }
            ReportStep::Evidence => {
                if self.filled_evidence_links().is_empty() && blank(&self.contact_info) {
                    missing.push("Evidence Link or Contact Information");
                }
            }
            ReportStep::Review => {}
        }
        missing
    }

    /// # Errors
    ///
    /// Returns the labels of the required fields left blank on `step`.
    pub fn validate_step(&self, step: ReportStep) -> Result<(), Vec<&'static str>> {
        let missing = self.missing_fields(step);
        if missing.is_empty() { Ok(()) } else { Err(missing) }
    }

    /// Single-line address for the review summary.
    pub fn address_line(&self) -> String {
        format!("{}, {}, {} {}", self.street.trim(), self.city.trim(), self.state.trim(), self.zip_code.trim())
    }
}

/// Report page state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportWizard {
    pub step: ReportStep,
    pub draft: ReportDraft,
    pub submitting: bool,
}

impl ReportWizard {
    /// Advance one step if the current step validates.
    ///
    /// # Errors
    ///
    /// Returns the missing field labels and leaves the step unchanged.
    pub fn next(&mut self) -> Result<ReportStep, Vec<&'static str>> {
        self.draft.validate_step(self.step)?;
        self.step = self.step.next();
        Ok(self.step)
    }

    pub fn back(&mut self) -> ReportStep {
        self.step = self.step.prev();
        self.step
    }

    pub fn add_evidence_link(&mut self) {
        self.draft.evidence_links.push(String::new());
    }

    pub fn set_evidence_link(&mut self, index: usize, value: String) {
        if let Some(slot) = self.draft.evidence_links.get_mut(index) {
            *slot = value;
        }
    }

    /// Drop the link at `index`. The last remaining entry stays.
    pub fn remove_evidence_link(&mut self, index: usize) -> bool {
        if self.draft.evidence_links.len() <= 1 || index >= self.draft.evidence_links.len() {
            return false;
        }
        self.draft.evidence_links.remove(index);
        true
    }

    /// Mark the report as submitting. Only valid from the review step and
    /// when no submission is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if !self.step.is_last() || self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    /// The simulated submission always succeeds: reset to a blank first step.
    pub fn finish_submit(&mut self) {
        *self = Self::default();
    }
}

pub const SUBMIT_SUCCESS_TITLE: &str = "Report submitted successfully";
pub const SUBMIT_SUCCESS_DESCRIPTION: &str =
    "Thank you for reporting. We'll review your case and follow up if needed.";
pub const INCOMPLETE_STEP_TITLE: &str = "Please complete all required fields";

/// Toast description for a blocked step advance.
pub fn incomplete_step_description(missing: &[&str]) -> String {
    if missing.is_empty() {
        "Fill in all required information before proceeding.".to_owned()
    } else {
        format!("Missing: {}.", missing.join(", "))
    }
}
