// src/domain/mod.rs
pub mod document;
pub mod error;
pub mod memo;
pub mod settings;

pub use document::ActiveDocument;
pub use error::{DomainError, SaveMemoError};
pub use memo::{SaveMemoOutcome, SaveMemoRequest};
pub use settings::Settings;
