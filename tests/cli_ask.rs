/// Tests for the one-shot `ask` command's text output

use career_coach::coach::{CoachError, CAREER_SWITCHER_NOTE, INTRO};
use career_coach::render::ask_text;

const NO_INTERESTS: &[&str] = &[];

#[test]
fn test_ask_text_renders_context_answer_and_stories() {
    let out = ask_text("Is it too late to switch into tech?", "Career switcher", &["Technology"]).unwrap();

    assert!(out.contains("- Stage: Career switcher"));
    assert!(out.contains("- Interests: Technology"));
    assert!(out.contains(INTRO));
    assert!(out.contains(CAREER_SWITCHER_NOTE));
    assert!(out.contains("▸ UX Designer: From community college art classes to UX design"));
}

#[test]
fn test_ask_text_without_interests() {
    let out = ask_text("How do I explore careers?", "College", NO_INTERESTS).unwrap();
    assert!(out.contains("- Interests: None selected (general advice)."));
}

#[test]
fn test_ask_text_rejects_blank_question() {
    let err = ask_text("  \n", "College", NO_INTERESTS).unwrap_err();
    assert_eq!(err, CoachError::EmptyQuestion);
    assert_eq!(
        err.to_string(),
        "Please enter a question first so the coach knows what to answer."
    );
}

#[test]
fn test_ask_text_rejects_unknown_interest() {
    let err = ask_text("q", "College", &["Sports"]).unwrap_err();
    assert_eq!(err, CoachError::UnknownInterest("Sports".to_string()));
}
