//! Decodable Reader: phonics word classification and story validation.
//!
//! Classifies vocabulary against phonics-level word banks and scores
//! generated children's stories for how much of their text a beginning
//! reader at a given level can sound out, recognize by sight, or pick up
//! from context.

pub mod core;
pub mod schema;

pub use crate::core::classifier::{AllowedNames, WordClassifier};
pub use crate::core::config::ValidationConfig;
pub use crate::core::validator::{StoryValidator, ValidationOptions};
pub use crate::core::word_bank::{WordBankData, WordBanks};
pub use crate::schema::classification::{WordCategory, WordClassification};
pub use crate::schema::level::PhonicsLevel;
pub use crate::schema::report::ValidationReport;
pub use crate::schema::story::StoryDocument;
