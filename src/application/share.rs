// src/application/share.rs
use anyhow::{Context, Result};
use tracing::{debug, info, instrument, warn};

use crate::application::Host;
use crate::domain::{ActiveDocument, SaveMemoOutcome, SaveMemoRequest, Settings};
use crate::ports::Translation;

pub trait MemoGateway {
    /// Send one save request; every failure is folded into the outcome
    fn save_memo(&self, api_key: &str, request: &SaveMemoRequest) -> SaveMemoOutcome;
}

impl<G: MemoGateway + ?Sized> MemoGateway for &G {
    fn save_memo(&self, api_key: &str, request: &SaveMemoRequest) -> SaveMemoOutcome {
        (**self).save_memo(api_key, request)
    }
}

/// Which branch a share attempt ended in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    MissingApiKey,
    NoActiveDocument,
    Shared,
    Failed(String),
}

/// Build the memo for a document with the plugin-level defaults applied
pub fn build_request(settings: &Settings, document: &ActiveDocument) -> SaveMemoRequest {
    SaveMemoRequest::memo(&document.basename, &document.content)
        .with_tags(settings.tags())
        .with_folder(settings.folder())
}

pub struct ShareAction<G: MemoGateway> {
    gateway: G,
}

impl<G: MemoGateway> ShareAction<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Share the active document; always ends with exactly one notice
    #[instrument(level = "debug", skip_all)]
    pub fn share<H: Host>(
        &self,
        host: &mut H,
        settings: &Settings,
        translation: &Translation,
    ) -> Result<ShareOutcome> {
        if !settings.has_api_key() {
            debug!("No API key configured");
            host.show_notice(translation.enter_api_key);
            return Ok(ShareOutcome::MissingApiKey);
        }

        let Some(document) = host
            .active_document()
            .context("Failed to read active document")?
        else {
            debug!("No active document");
            host.show_notice(translation.no_active_file);
            return Ok(ShareOutcome::NoActiveDocument);
        };

        let request = build_request(settings, &document);
        info!(
            title = %request.title,
            bytes = request.content.len(),
            tags = ?request.tags,
            folder = ?request.folder,
            "Sharing document"
        );

        let outcome = self.gateway.save_memo(&settings.api_key, &request);
        if outcome.success {
            info!("Document shared");
            host.show_notice(translation.success);
            Ok(ShareOutcome::Shared)
        } else {
            let error = outcome.error.unwrap_or_default();
            warn!(%error, "Share failed");
            host.show_notice(&translation.failure_notice(&error));
            Ok(ShareOutcome::Failed(error))
        }
    }
}
