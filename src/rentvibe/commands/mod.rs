use crate::catalog_store::PropertyDetail;
use crate::config::RentConfig;
use crate::model::{PropertyRecord, UserRecord};
use std::path::PathBuf;

pub mod auth;
pub mod config;
pub mod favorites;
pub mod list;
pub mod search;
pub mod view;

#[derive(Debug, Clone)]
pub struct RentPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn new(level: MessageLevel, content: impl Into<String>) -> Self {
        let content = content.into();
        Self { level, content }
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, content)
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Success, content)
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, content)
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Error, content)
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_properties: Vec<PropertyRecord>,
    pub detail: Option<PropertyDetail>,
    pub user: Option<UserRecord>,
    pub config: Option<RentConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_properties(mut self, properties: Vec<PropertyRecord>) -> Self {
        self.listed_properties = properties;
        self
    }

    pub fn with_detail(mut self, detail: PropertyDetail) -> Self {
        self.detail = Some(detail);
        self
    }

    pub fn with_user(mut self, user: UserRecord) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_config(mut self, config: RentConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}
