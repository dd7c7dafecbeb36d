//! Coach Types
//!
//! Core data structures for the Q&A coach: the closed sets of life stages
//! and interest tags, the per-submission user context, story records, and
//! the composed answer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================
// ERRORS
// ============================================================

/// Input errors raised at the boundary before the composer is invoked
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoachError {
    #[error("Please enter a question first so the coach knows what to answer.")]
    EmptyQuestion,

    #[error("Unknown interest: {0}")]
    UnknownInterest(String),
}

// ============================================================
// LIFE STAGE
// ============================================================

/// Which best describes the user right now
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StageTag {
    HighSchool,
    #[default]
    College,
    CareerSwitcher,
    /// Unspecified; contributes no stage clause
    Other,
}

impl StageTag {
    /// All stages in the order they are offered
    pub const ALL: [StageTag; 4] = [
        StageTag::HighSchool,
        StageTag::College,
        StageTag::CareerSwitcher,
        StageTag::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StageTag::HighSchool => "High school",
            StageTag::College => "College",
            StageTag::CareerSwitcher => "Career switcher",
            StageTag::Other => "Other",
        }
    }

    /// Maps a display label to a stage. Anything unrecognized becomes `Other`.
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|stage| stage.label() == label)
            .unwrap_or(StageTag::Other)
    }
}

// ============================================================
// INTERESTS
// ============================================================

/// What the user is most curious about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterestTag {
    Technology,
    Healthcare,
    Education,
    CreativeWork,
    PublicService,
    BusinessStartups,
}

impl InterestTag {
    pub const ALL: [InterestTag; 6] = [
        InterestTag::Technology,
        InterestTag::Healthcare,
        InterestTag::Education,
        InterestTag::CreativeWork,
        InterestTag::PublicService,
        InterestTag::BusinessStartups,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InterestTag::Technology => "Technology",
            InterestTag::Healthcare => "Healthcare",
            InterestTag::Education => "Education",
            InterestTag::CreativeWork => "Creative work",
            InterestTag::PublicService => "Public service",
            InterestTag::BusinessStartups => "Business / startups",
        }
    }

    pub fn from_label(label: &str) -> Result<Self, CoachError> {
        Self::ALL
            .iter()
            .copied()
            .find(|tag| tag.label() == label)
            .ok_or_else(|| CoachError::UnknownInterest(label.to_string()))
    }

    /// Parses a list of labels into a duplicate-free list, keeping the
    /// order of first selection.
    pub fn parse_all<S: AsRef<str>>(labels: &[S]) -> Result<Vec<Self>, CoachError> {
        let mut tags = Vec::with_capacity(labels.len());
        for label in labels {
            let tag = Self::from_label(label.as_ref())?;
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        Ok(tags)
    }
}

// ============================================================
// USER CONTEXT
// ============================================================

/// Inputs captured for a single submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserContext {
    pub stage: StageTag,
    pub interests: Vec<InterestTag>,
    pub question: String,
}

impl UserContext {
    pub fn new(question: &str, stage: StageTag, interests: Vec<InterestTag>) -> Self {
        Self {
            stage,
            interests,
            question: question.to_string(),
        }
    }

    /// Rejects a question that is empty once trimmed
    pub fn validate(&self) -> Result<(), CoachError> {
        if self.question.trim().is_empty() {
            return Err(CoachError::EmptyQuestion);
        }
        Ok(())
    }

    /// Who the answer is for, in display labels
    pub fn summary(&self) -> ContextSummary {
        let interests = if self.interests.is_empty() {
            NO_INTERESTS_SELECTED.to_string()
        } else {
            self.interests
                .iter()
                .map(|tag| tag.label())
                .collect::<Vec<_>>()
                .join(", ")
        };

        ContextSummary {
            stage: self.stage.label().to_string(),
            interests,
        }
    }
}

pub const NO_INTERESTS_SELECTED: &str = "None selected (general advice).";

/// Display form of a user context, shown alongside an answer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContextSummary {
    pub stage: String,
    pub interests: String,
}

// ============================================================
// STORIES AND ANSWERS
// ============================================================

/// One fixed example narrative shown alongside an answer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoryRecord {
    /// Job title, e.g. "Firefighter"
    pub role: String,
    /// Short headline
    pub title: String,
    /// 1-3 sentence narrative excerpt
    pub snippet: String,
}

impl StoryRecord {
    pub fn new(role: &str, title: &str, snippet: &str) -> Self {
        Self {
            role: role.to_string(),
            title: title.to_string(),
            snippet: snippet.to_string(),
        }
    }

    /// Label for the story's disclosure widget
    pub fn label(&self) -> String {
        format!("{}: {}", self.role, self.title)
    }
}

/// Output of a single compose call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComposedAnswer {
    pub text: String,
    pub stories: Vec<StoryRecord>,
}
