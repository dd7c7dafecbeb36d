//! Answer Composer
//!
//! Builds the advice paragraph for a submission and attaches the story
//! catalog. Composition is pure: the output depends only on the inputs,
//! and the catalog is returned whole (stories are not yet filtered by
//! question or interests).
//!
//! Text layout, in fixed order:
//! 1. intro block, then a blank line
//! 2. common-pattern observation
//! 3. stage clause (empty for `Other`)
//! 4. interests clause (only when interests were selected)

use super::catalog::StoryCatalog;
use super::types::{ComposedAnswer, InterestTag, StageTag, UserContext};

pub const INTRO: &str = "\
Here’s a perspective pulled from a few different career stories. \
This is a placeholder answer — in the final version, this will be \
grounded directly in quotes from RAG pipeline transcript.";

pub const COMMON_PATTERN: &str = "\
From these stories, a common pattern is that people rarely had everything figured out at the start. \
They picked a direction that seemed interesting, took one or two concrete steps, and then adjusted \
based on what they liked or disliked.";

pub const HIGH_SCHOOL_NOTE: &str = " \
Since you’re in high school, focus on low-risk exploration: clubs, \
short online courses, and talking to people doing the work you’re curious about.";

pub const COLLEGE_NOTE: &str = " \
In college, you can use electives, side projects, and internships \
to test directions without locking yourself in forever.";

pub const CAREER_SWITCHER_NOTE: &str = " \
As a career switcher, try small experiments on the side first \
(online courses, volunteering, small freelance work) before making a big jump.";

/// Stage-specific clause appended after the common pattern
pub fn stage_note(stage: StageTag) -> &'static str {
    match stage {
        StageTag::HighSchool => HIGH_SCHOOL_NOTE,
        StageTag::College => COLLEGE_NOTE,
        StageTag::CareerSwitcher => CAREER_SWITCHER_NOTE,
        StageTag::Other => "",
    }
}

/// Interests clause; empty when nothing was selected
pub fn interest_note(interests: &[InterestTag]) -> String {
    if interests.is_empty() {
        return String::new();
    }

    let interest_list = interests
        .iter()
        .map(|tag| tag.label())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        " You mentioned interests in {}. Try looking for roles that mix those \
         themes instead of just one 'perfect' job.",
        interest_list
    )
}

/// Composes answers against a fixed story catalog
#[derive(Debug, Clone)]
pub struct AnswerComposer {
    catalog: StoryCatalog,
}

impl AnswerComposer {
    pub fn new(catalog: StoryCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &StoryCatalog {
        &self.catalog
    }

    /// Never fails. The question is accepted as-is; rejecting blank input
    /// is up to the caller.
    pub fn compose(&self, _question: &str, stage: StageTag, interests: &[InterestTag]) -> ComposedAnswer {
        let mut text = String::with_capacity(INTRO.len() + COMMON_PATTERN.len() + 256);
        text.push_str(INTRO);
        text.push_str("\n\n");
        text.push_str(COMMON_PATTERN);
        text.push_str(stage_note(stage));
        text.push_str(&interest_note(interests));

        ComposedAnswer {
            text,
            stories: self.catalog.list_stories().to_vec(),
        }
    }

    pub fn compose_context(&self, ctx: &UserContext) -> ComposedAnswer {
        self.compose(&ctx.question, ctx.stage, &ctx.interests)
    }
}

/// Composes an answer against the built-in sample stories
pub fn compose(question: &str, stage: StageTag, interests: &[InterestTag]) -> ComposedAnswer {
    AnswerComposer::new(StoryCatalog::sample()).compose(question, stage, interests)
}
