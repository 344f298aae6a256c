//! # Command Layer
//!
//! This module contains the business operations of providerdb. Each command lives in its
//! own submodule and exposes a `run` function over any [`DataStore`](crate::store::DataStore).
//!
//! ## Role and Responsibilities
//!
//! Commands are where the rules that sit above storage live:
//! - Field validation of incoming providers
//! - Name uniqueness on create and rename
//! - Turning "absent" lookups into `NotFound` where presence is required
//! - Projecting stored records into [`ProviderView`]s
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O** beyond the store: no stdout, stderr, or terminal concerns
//! - **Argument parsing**: that's the CLI layer's job
//! - **Exit codes**: return `Result`, let the caller decide
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings. It carries:
//! - `affected`: providers created, updated or deleted
//! - `listed`: providers to display
//! - `page`: page metadata for listings
//! - `count`: for the `count` command
//! - `messages`: leveled messages (info, success, warning)
//!
//! ## Testing Strategy
//!
//! Command tests use [`InMemoryStore`](crate::store::InMemoryStore) and cover every
//! logic branch and error condition.
//!
//! ## Command Modules
//!
//! - [`create`]: Validate and insert a provider with a unique name
//! - [`get`]: Fetch one provider by id
//! - [`list`]: Page through providers
//! - [`update`]: Partially update a provider
//! - [`delete`]: Remove a provider
//! - [`count`]: Number of stored providers

use crate::model::ProviderView;
use crate::pagination::Page;
use serde::Serialize;

pub mod count;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CmdResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub affected: Vec<ProviderView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub listed: Vec<ProviderView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<Page<ProviderView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, providers: Vec<ProviderView>) -> Self {
        self.affected = providers;
        self
    }

    pub fn with_listed(mut self, providers: Vec<ProviderView>) -> Self {
        self.listed = providers;
        self
    }

    pub fn with_page(mut self, page: Page<ProviderView>) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}
