pub mod category;
pub mod classifier;
pub mod enrichment;
pub mod lexicon;
pub mod modifiers;
pub mod patterns;
pub mod ranking;
pub mod scoring;
pub mod text;

#[cfg(test)]
mod classifier_tests;

pub use category::*;
pub use classifier::*;
pub use enrichment::{ContentTitleLookup, TitleEnricher};
pub use lexicon::*;
pub use ranking::RoomScore;
pub use scoring::{ContextMatches, MatchResult};
pub use text::similarity;
