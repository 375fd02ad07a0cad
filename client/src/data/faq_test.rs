use super::*;

fn matched_count(matches: &[FaqMatch]) -> usize {
    matches.iter().map(|m| m.entries.len()).sum()
}

#[test]
fn five_categories_of_four_questions() {
    assert_eq!(FAQ_CATEGORIES.len(), 5);
    assert_eq!(total_questions(), 20);
}

#[test]
fn empty_query_keeps_every_category() {
    let matches = search("");
    assert_eq!(matches.len(), 5);
    assert_eq!(matched_count(&matches), 20);
    assert_eq!(results_caption("", 20), "20 questions available");
}

#[test]
fn search_is_case_insensitive_over_questions() {
    let matches = search("ANONYMOUS");
    assert!(matched_count(&matches) >= 1);
    assert!(matches.iter().any(|m| m.title == "Discrimination Reporting"));
}

#[test]
fn search_matches_answers_and_drops_empty_categories() {
    let matches = search("smartphone");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].title, "Platform Features");
    assert_eq!(matches[0].entries[0].question, "Can I use DRAMP on mobile devices?");
}

#[test]
fn search_without_hits_returns_nothing() {
    let matches = search("zzz-no-such-term");
    assert!(matches.is_empty());
    assert_eq!(results_caption("zzz-no-such-term", 0), "Showing 0 of 20 questions");
}
