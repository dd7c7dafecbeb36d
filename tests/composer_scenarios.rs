/// End-to-end compose scenarios against the public library API

use career_coach::coach::{
    compose, sample_stories, InterestTag, StageTag, StoryCatalog, CAREER_SWITCHER_NOTE,
    COLLEGE_NOTE, COMMON_PATTERN, HIGH_SCHOOL_NOTE, INTRO,
};

#[test]
fn test_high_school_question_without_interests() {
    let answer = compose("What does UX look like?", StageTag::from_label("High school"), &[]);

    assert!(answer.text.contains(HIGH_SCHOOL_NOTE));
    assert!(!answer.text.contains(COLLEGE_NOTE));
    assert!(!answer.text.contains(CAREER_SWITCHER_NOTE));
    assert!(!answer.text.contains("You mentioned interests in"));
    assert_eq!(answer.stories.len(), 3);
}

#[test]
fn test_career_switcher_with_two_interests() {
    let interests = InterestTag::parse_all(&["Technology", "Healthcare"]).unwrap();
    let answer = compose("x", StageTag::from_label("Career switcher"), &interests);

    assert!(answer.text.contains(CAREER_SWITCHER_NOTE));
    assert!(answer.text.contains("Technology, Healthcare"));
}

#[test]
fn test_empty_question_with_other_stage() {
    let answer = compose("", StageTag::from_label("Other"), &[]);
    assert_eq!(answer.text, format!("{}\n\n{}", INTRO, COMMON_PATTERN));
}

#[test]
fn test_stories_are_the_same_for_any_input() {
    let a = compose("first", StageTag::College, &[InterestTag::Education]);
    let b = compose("", StageTag::Other, &[]);
    let c = compose("third", StageTag::HighSchool, &InterestTag::ALL);

    assert_eq!(a.stories, b.stories);
    assert_eq!(b.stories, c.stories);
    assert_eq!(a.stories, StoryCatalog::sample().list_stories());
}

#[test]
fn test_catalog_count_and_order_are_stable() {
    let first: Vec<String> = sample_stories().iter().map(|s| s.label()).collect();
    let second: Vec<String> = sample_stories().iter().map(|s| s.label()).collect();

    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
    assert_eq!(first[0], "Software Engineer: Switching from undecided major to CS in sophomore year");
}
