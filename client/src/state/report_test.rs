use super::*;

fn filled_location(draft: &mut ReportDraft) {
    draft.street = "123 Main Street".to_owned();
    draft.city = "New York".to_owned();
    draft.state = "NY".to_owned();
    draft.zip_code = "10001".to_owned();
    draft.property_type = "Apartment".to_owned();
}

fn filled_incident(draft: &mut ReportDraft) {
    draft.category = "Religion".to_owned();
    draft.description = "Refused a viewing after asking about my name.".to_owned();
    draft.date_occurred = "2024-02-01".to_owned();
}

fn wizard_at_review() -> ReportWizard {
    let mut wizard = ReportWizard::default();
    filled_location(&mut wizard.draft);
    filled_incident(&mut wizard.draft);
    wizard.draft.contact_info = "me@example.com".to_owned();
    wizard.next().unwrap();
    wizard.next().unwrap();
    wizard.next().unwrap();
    wizard
}

// =============================================================
// Step bounds
// =============================================================

#[test]
fn steps_number_one_through_four() {
    let numbers: Vec<u8> = [ReportStep::Location, ReportStep::Incident, ReportStep::Evidence, ReportStep::Review]
        .into_iter()
        .map(ReportStep::number)
        .collect();
    assert_eq!(numbers, [1, 2, 3, 4]);
}

#[test]
fn step_next_and_prev_saturate() {
    assert_eq!(ReportStep::Review.next(), ReportStep::Review);
    assert_eq!(ReportStep::Location.prev(), ReportStep::Location);
    assert_eq!(ReportStep::Incident.prev(), ReportStep::Location);
    assert_eq!(ReportStep::Evidence.next(), ReportStep::Review);
}

#[test]
fn back_never_goes_below_first_step() {
    let mut wizard = ReportWizard::default();
    assert_eq!(wizard.back(), ReportStep::Location);
    assert_eq!(wizard.back(), ReportStep::Location);
}

#[test]
fn next_never_goes_past_review() {
    let mut wizard = wizard_at_review();
    assert_eq!(wizard.step, ReportStep::Review);
    assert_eq!(wizard.next(), Ok(ReportStep::Review));
    assert_eq!(wizard.step.number(), 4);
}

#[test]
fn progress_tracks_step() {
    assert_eq!(ReportStep::Location.progress_percent(), 25);
    assert_eq!(ReportStep::Incident.progress_percent(), 50);
    assert_eq!(ReportStep::Evidence.progress_percent(), 75);
    assert_eq!(ReportStep::Review.progress_percent(), 100);
}

// =============================================================
// Validation gating
// =============================================================

#[test]
fn empty_location_blocks_advance() {
    let mut wizard = ReportWizard::default();
    let err = wizard.next().unwrap_err();
    assert_eq!(err, ["Street Address", "City", "State", "ZIP Code", "Property Type"]);
    assert_eq!(wizard.step, ReportStep::Location);
}

#[test]
fn partial_location_reports_remaining_fields() {
    let mut wizard = ReportWizard::default();
    filled_location(&mut wizard.draft);
    wizard.draft.zip_code = "   ".to_owned();
    assert_eq!(wizard.next(), Err(vec!["ZIP Code"]));
}

#[test]
fn incident_step_requires_category_description_and_date() {
    let mut wizard = ReportWizard::default();
    filled_location(&mut wizard.draft);
    assert_eq!(wizard.next(), Ok(ReportStep::Incident));

    wizard.draft.category = "Age".to_owned();
    assert_eq!(wizard.next(), Err(vec!["Date Occurred", "Description of Incident"]));

    filled_incident(&mut wizard.draft);
    assert_eq!(wizard.next(), Ok(ReportStep::Evidence));
}

#[test]
fn evidence_step_accepts_link_or_contact() {
    let mut draft = ReportDraft::default();
    assert!(draft.validate_step(ReportStep::Evidence).is_err());

    draft.evidence_links[0] = "  ".to_owned();
    assert!(draft.validate_step(ReportStep::Evidence).is_err());

    draft.evidence_links[0] = "https://example.com/evidence.jpg".to_owned();
    assert!(draft.validate_step(ReportStep::Evidence).is_ok());

    let mut draft = ReportDraft { contact_info: "555-0100".to_owned(), ..ReportDraft::default() };
    assert!(draft.validate_step(ReportStep::Evidence).is_ok());
    draft.contact_info.clear();
    assert!(draft.validate_step(ReportStep::Evidence).is_err());
}

#[test]
fn review_step_always_validates() {
    assert!(ReportDraft::default().validate_step(ReportStep::Review).is_ok());
}

#[test]
fn back_does_not_require_validation() {
    let mut wizard = wizard_at_review();
    wizard.draft = ReportDraft::default();
    assert_eq!(wizard.back(), ReportStep::Evidence);
    assert_eq!(wizard.back(), ReportStep::Incident);
}

// =============================================================
// Evidence links
// =============================================================

#[test]
fn draft_starts_with_one_empty_link() {
    assert_eq!(ReportDraft::default().evidence_links, vec![String::new()]);
}

#[test]
fn evidence_links_add_edit_remove() {
    let mut wizard = ReportWizard::default();
    wizard.add_evidence_link();
    wizard.set_evidence_link(1, "https://a.test".to_owned());
    wizard.set_evidence_link(9, "ignored".to_owned());
    assert_eq!(wizard.draft.evidence_links, ["", "https://a.test"]);

    assert!(wizard.remove_evidence_link(0));
    assert_eq!(wizard.draft.evidence_links, ["https://a.test"]);
}

#[test]
fn last_evidence_link_cannot_be_removed() {
    let mut wizard = ReportWizard::default();
    assert!(!wizard.remove_evidence_link(0));
    assert_eq!(wizard.draft.evidence_links.len(), 1);

    wizard.add_evidence_link();
    assert!(!wizard.remove_evidence_link(5));
    assert_eq!(wizard.draft.evidence_links.len(), 2);
}

#[test]
fn filled_links_skip_blanks() {
    let draft = ReportDraft {
        evidence_links: vec!["https://a.test".to_owned(), " ".to_owned(), "https://b.test".to_owned()],
        ..ReportDraft::default()
    };
    assert_eq!(draft.filled_evidence_links(), ["https://a.test", "https://b.test"]);
}

// =============================================================
// Submission
// =============================================================

#[test]
fn submit_only_from_review_step() {
    let mut wizard = ReportWizard::default();
    assert!(!wizard.begin_submit());
    assert!(!wizard.submitting);
}

#[test]
fn second_submit_is_ignored_while_in_flight() {
    let mut wizard = wizard_at_review();
    assert!(wizard.begin_submit());
    assert!(wizard.submitting);
    assert!(!wizard.begin_submit());
}

#[test]
fn finish_submit_resets_form() {
    let mut wizard = wizard_at_review();
    wizard.begin_submit();
    wizard.finish_submit();
    assert_eq!(wizard, ReportWizard::default());
    assert_eq!(wizard.step, ReportStep::Location);
    assert!(!wizard.submitting);
}

#[test]
fn review_summary_helpers() {
    let wizard = wizard_at_review();
    assert_eq!(wizard.draft.address_line(), "123 Main Street, New York, NY 10001");
    assert_eq!(
        incomplete_step_description(&["City", "State"]),
        "Missing: City, State."
    );
    assert_eq!(incomplete_step_description(&[]), "Fill in all required information before proceeding.");
}
