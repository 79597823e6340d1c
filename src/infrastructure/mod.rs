// src/infrastructure/mod.rs
pub mod cubox;
pub mod terminal_host;

pub use cubox::CuboxClient;
pub use terminal_host::{default_data_dir, TerminalHost};
