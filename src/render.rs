//! Plain-text rendering of a composed answer for the terminal.
//!
//! Layout: who the answer is for, the answer paragraph, then one
//! disclosure line per story labelled `"{role}: {title}"` with the snippet
//! indented beneath it.

use crate::coach::{
    AnswerComposer, CoachError, ComposedAnswer, InterestTag, StageTag, StoryCatalog, StoryRecord,
    UserContext,
};

const DISCLOSURE_MARKER: &str = "▸";
const SNIPPET_INDENT: &str = "    ";

pub fn render_context(ctx: &UserContext) -> String {
    let summary = ctx.summary();
    format!(
        "Who this answer is for\n- Stage: {}\n- Interests: {}\n",
        summary.stage, summary.interests
    )
}

pub fn render_story(story: &StoryRecord) -> String {
    format!(
        "{} {}\n{}{}\n",
        DISCLOSURE_MARKER,
        story.label(),
        SNIPPET_INDENT,
        story.snippet
    )
}

pub fn render_answer(ctx: &UserContext, answer: &ComposedAnswer) -> String {
    let mut out = String::new();
    out.push_str("Your personalized answer\n\n");
    out.push_str(&render_context(ctx));
    out.push('\n');
    out.push_str(&answer.text);
    out.push_str("\n\n");

    if answer.stories.is_empty() {
        return out;
    }

    out.push_str("Stories this answer is inspired by\n\n");
    for story in &answer.stories {
        out.push_str(&render_story(story));
    }
    out
}

/// Validates raw CLI input, composes against the sample stories and
/// renders the result
pub fn ask_text<S: AsRef<str>>(question: &str, stage: &str, interests: &[S]) -> Result<String, CoachError> {
    let ctx = UserContext::new(
        question,
        StageTag::from_label(stage),
        InterestTag::parse_all(interests)?,
    );
    ctx.validate()?;

    let answer = AnswerComposer::new(StoryCatalog::sample()).compose_context(&ctx);
    Ok(render_answer(&ctx, &answer))
}
