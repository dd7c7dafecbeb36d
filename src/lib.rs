//! Career Coach
//!
//! A concept demo of a career Q&A coach:
//! - Pick a life stage and interests, ask a question
//! - Get a template-assembled answer plus sample career stories
//! - Served over a JSON API or asked once from the command line

pub mod api;
pub mod coach;
pub mod config;
pub mod render;

pub use api::*;
pub use coach::*;
pub use config::*;
