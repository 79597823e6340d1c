// src/util/testing.rs

use anyhow::Result;
use serde_json::Value;
use std::cell::RefCell;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{CommandSpec, Host, MemoGateway, RibbonIcon};
use crate::domain::{ActiveDocument, DomainError, SaveMemoOutcome, SaveMemoRequest};

enum DocumentBehavior {
    Missing,
    Present(ActiveDocument),
    Unreadable(String),
}

/// In-memory host recording every notice, save and registration
///
/// # Examples
///
/// ```
/// use cubox_share::util::testing::MockHost;
/// use cubox_share::domain::ActiveDocument;
///
/// let host = MockHost::builder()
///     .with_locale("zh-CN")
///     .with_document(ActiveDocument::new("Note", "content"))
///     .build();
/// assert!(host.notices().is_empty());
/// ```
pub struct MockHost {
    locale: Option<String>,
    document: DocumentBehavior,
    data: Option<Value>,
    save_count: usize,
    notices: Vec<String>,
    commands: Vec<CommandSpec>,
    ribbon_icons: Vec<RibbonIcon>,
}

impl MockHost {
    pub fn builder() -> MockHostBuilder {
        MockHostBuilder::new()
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    pub fn commands(&self) -> &[CommandSpec] {
        &self.commands
    }

    pub fn ribbon_icons(&self) -> &[RibbonIcon] {
        &self.ribbon_icons
    }

    /// Document as last written by `save_data` (or seeded by the builder)
    pub fn saved_data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl Host for MockHost {
    fn locale(&self) -> Option<String> {
        self.locale.clone()
    }

    fn active_document(&self) -> Result<Option<ActiveDocument>> {
        match &self.document {
            DocumentBehavior::Missing => Ok(None),
            DocumentBehavior::Present(document) => Ok(Some(document.clone())),
            DocumentBehavior::Unreadable(reason) => {
                Err(DomainError::DocumentError(reason.clone()).into())
            }
        }
    }

    fn show_notice(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }

    fn load_data(&self) -> Result<Option<Value>> {
        Ok(self.data.clone())
    }

    fn save_data(&mut self, data: &Value) -> Result<()> {
        self.data = Some(data.clone());
        self.save_count += 1;
        Ok(())
    }

    fn register_command(&mut self, command: CommandSpec) {
        self.commands.push(command);
    }

    fn register_ribbon_icon(&mut self, icon: RibbonIcon) {
        self.ribbon_icons.push(icon);
    }
}

/// Builder for MockHost
pub struct MockHostBuilder {
    locale: Option<String>,
    document: DocumentBehavior,
    data: Option<Value>,
}

impl MockHostBuilder {
    pub fn new() -> Self {
        Self {
            locale: None,
            document: DocumentBehavior::Missing,
            data: None,
        }
    }

    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = Some(locale.to_string());
        self
    }

    /// Make `document` the active document
    pub fn with_document(mut self, document: ActiveDocument) -> Self {
        self.document = DocumentBehavior::Present(document);
        self
    }

    /// Make reading the active document fail
    pub fn with_document_error(mut self, reason: &str) -> Self {
        self.document = DocumentBehavior::Unreadable(reason.to_string());
        self
    }

    /// Seed the persisted settings document
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn build(self) -> MockHost {
        MockHost {
            locale: self.locale,
            document: self.document,
            data: self.data,
            save_count: 0,
            notices: vec![],
            commands: vec![],
            ribbon_icons: vec![],
        }
    }
}

impl Default for MockHostBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Gateway returning a fixed outcome and recording each call
pub struct MockMemoGateway {
    outcome: SaveMemoOutcome,
    calls: RefCell<Vec<(String, SaveMemoRequest)>>,
}

impl MockMemoGateway {
    pub fn succeeding() -> Self {
        Self::with_outcome(SaveMemoOutcome::succeeded())
    }

    pub fn failing(error: &str) -> Self {
        Self::with_outcome(SaveMemoOutcome::failed(error))
    }

    pub fn with_outcome(outcome: SaveMemoOutcome) -> Self {
        Self {
            outcome,
            calls: RefCell::new(vec![]),
        }
    }

    /// `(api_key, request)` for every call so far
    pub fn calls(&self) -> Vec<(String, SaveMemoRequest)> {
        self.calls.borrow().clone()
    }
}

impl MemoGateway for MockMemoGateway {
    fn save_memo(&self, api_key: &str, request: &SaveMemoRequest) -> SaveMemoOutcome {
        self.calls
            .borrow_mut()
            .push((api_key.to_string(), request.clone()));
        self.outcome.clone()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "reqwest", "rustls", "mio", "wiremock"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
