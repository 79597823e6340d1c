// src/ports/mod.rs
pub mod i18n;
pub mod terminal;

pub use i18n::{Locale, Translation};
pub use terminal::TerminalPresenter;
