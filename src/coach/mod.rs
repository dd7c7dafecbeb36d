//! Coach Module - Core of the Career Q&A Coach
//!
//! Architecture:
//! - Types: life stages, interest tags, user context, stories, answers
//! - Catalog: the fixed set of sample career stories
//! - Composer: template assembly of the advice paragraph
//!
//! Nothing here performs I/O; the HTTP and CLI boundaries live outside.

pub mod catalog;
pub mod composer;
pub mod types;

pub use catalog::*;
pub use composer::*;
pub use types::*;
