//! Story Catalog
//!
//! Holds the fixed set of example career narratives. The sample data is
//! built once per process and never mutated.

use super::types::StoryRecord;
use once_cell::sync::Lazy;

static SAMPLE_STORIES: Lazy<Vec<StoryRecord>> = Lazy::new(|| {
    vec![
        StoryRecord::new(
            "Software Engineer",
            "Switching from undecided major to CS in sophomore year",
            "I didn’t write my first line of code until college. I started with intro CS, \
             joined a project team, and slowly built a portfolio. The key was doing small \
             projects consistently rather than trying to learn everything at once.",
        ),
        StoryRecord::new(
            "Firefighter",
            "A day in the life of a firefighter",
            "Most days aren’t dramatic rescues. We spend a lot of time on drills, building \
             inspections, and community education, so when an emergency happens we can \
             react automatically.",
        ),
        StoryRecord::new(
            "UX Designer",
            "From community college art classes to UX design",
            "My art background helped, but I still had to learn research, prototyping, and \
             collaboration with engineers. I built a small portfolio with redesigns of apps \
             I already used every day.",
        ),
    ]
});

/// The process-wide sample stories, in insertion order
pub fn sample_stories() -> &'static [StoryRecord] {
    &SAMPLE_STORIES
}

/// A flat, read-only list of stories
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryCatalog {
    stories: Vec<StoryRecord>,
}

impl StoryCatalog {
    pub fn new(stories: Vec<StoryRecord>) -> Self {
        Self { stories }
    }

    /// Catalog backed by the built-in sample stories
    pub fn sample() -> Self {
        Self::new(sample_stories().to_vec())
    }

    pub fn list_stories(&self) -> &[StoryRecord] {
        &self.stories
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }
}
