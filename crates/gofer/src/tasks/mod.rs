//! The task registry and its handlers.
//!
//! Every operation the service knows how to perform is a [`TaskKind`]
//! variant with a fixed public name. [`TaskAgent`] resolves names by exact
//! string match and runs the matching handler against its storage root.
//! Handlers are independent of each other: each one reads at most one
//! input (file, database, or remote endpoint), applies a trivial
//! transform, and writes at most one output file.

mod contacts;
mod dates;
mod files;
mod media;
mod remote;
mod sales;

use serde::Serialize;

use crate::store::DataStore;
use crate::Result;

/// One variant per task name accepted at the `/run` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    ExtractSenderEmail,
    CountWednesdays,
    SortContacts,
    ExtractLogs,
    ConvertMarkdownToHtml,
    FetchApiData,
    GoldTicketSales,
    CompressImage,
    TranscribeAudio,
}

impl TaskKind {
    /// Every task, in registry order.
    pub const ALL: [TaskKind; 9] = [
        TaskKind::ExtractSenderEmail,
        TaskKind::CountWednesdays,
        TaskKind::SortContacts,
        TaskKind::ExtractLogs,
        TaskKind::ConvertMarkdownToHtml,
        TaskKind::FetchApiData,
        TaskKind::GoldTicketSales,
        TaskKind::CompressImage,
        TaskKind::TranscribeAudio,
    ];

    /// Look a task up by its exact public name. No fuzzy matching, no
    /// partial matches, no case folding.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "extract sender email" => Some(Self::ExtractSenderEmail),
            "count Wednesdays" => Some(Self::CountWednesdays),
            "sort contacts" => Some(Self::SortContacts),
            "extract logs" => Some(Self::ExtractLogs),
            "convert markdown to html" => Some(Self::ConvertMarkdownToHtml),
            "fetch data from API" => Some(Self::FetchApiData),
            "SQL query gold ticket sales" => Some(Self::GoldTicketSales),
            "compress image" => Some(Self::CompressImage),
            "transcribe audio" => Some(Self::TranscribeAudio),
            _ => None,
        }
    }

    /// The public name used at the `/run` endpoint.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ExtractSenderEmail => "extract sender email",
            Self::CountWednesdays => "count Wednesdays",
            Self::SortContacts => "sort contacts",
            Self::ExtractLogs => "extract logs",
            Self::ConvertMarkdownToHtml => "convert markdown to html",
            Self::FetchApiData => "fetch data from API",
            Self::GoldTicketSales => "SQL query gold ticket sales",
            Self::CompressImage => "compress image",
            Self::TranscribeAudio => "transcribe audio",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Success,
    Error,
}

/// Per-call result payload, serialized as the `/run` response body.
///
/// The wire shapes are `{"status", "message"}` for most tasks plus the two
/// computed-value shapes `{"status", "count"}` and
/// `{"status", "gold_ticket_sales"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TaskReport {
    Message {
        status: TaskStatus,
        message: String,
    },
    Count {
        status: TaskStatus,
        count: u64,
    },
    GoldTicketSales {
        status: TaskStatus,
        gold_ticket_sales: u64,
    },
}

impl TaskReport {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Message {
            status: TaskStatus::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Message {
            status: TaskStatus::Error,
            message: message.into(),
        }
    }

    pub fn count(count: u64) -> Self {
        Self::Count {
            status: TaskStatus::Success,
            count,
        }
    }

    pub fn gold_ticket_sales(count: u64) -> Self {
        Self::GoldTicketSales {
            status: TaskStatus::Success,
            gold_ticket_sales: count,
        }
    }

    pub fn status(&self) -> TaskStatus {
        match self {
            Self::Message { status, .. }
            | Self::Count { status, .. }
            | Self::GoldTicketSales { status, .. } => *status,
        }
    }

    pub fn is_error(&self) -> bool {
        self.status() == TaskStatus::Error
    }
}

/// Executes tasks against a storage root.
#[derive(Debug, Clone)]
pub struct TaskAgent {
    store: DataStore,
    http: reqwest::Client,
}

impl TaskAgent {
    pub fn new(store: DataStore) -> Self {
        Self {
            store,
            http: reqwest::Client::new(),
        }
    }

    /// The storage root this agent works against.
    pub fn store(&self) -> &DataStore {
        &self.store
    }

    /// Look `name` up in the registry and run the matching task. An
    /// unknown name is a normal report, not a fault.
    pub async fn dispatch(&self, name: &str) -> Result<TaskReport> {
        match TaskKind::from_name(name) {
            Some(kind) => self.run(kind).await,
            None => Ok(TaskReport::error("Task not recognized")),
        }
    }

    /// Run one task to completion. Expected domain failures (missing
    /// inputs, failed upstream calls) come back as error reports; faults
    /// come back as [`Err`].
    pub async fn run(&self, kind: TaskKind) -> Result<TaskReport> {
        tracing::debug!(task = kind.name(), "running task");
        match kind {
            TaskKind::ExtractSenderEmail => files::extract_sender_email(&self.store),
            TaskKind::CountWednesdays => dates::count_wednesdays(&self.store),
            TaskKind::SortContacts => contacts::sort_contacts(&self.store),
            TaskKind::ExtractLogs => files::extract_logs(&self.store),
            TaskKind::ConvertMarkdownToHtml => files::convert_markdown_to_html(&self.store),
            TaskKind::FetchApiData => {
                remote::fetch_api_data(&self.http, &self.store, remote::POSTS_URL).await
            }
            TaskKind::GoldTicketSales => sales::gold_ticket_sales(&self.store),
            TaskKind::CompressImage => media::compress_image(&self.store),
            TaskKind::TranscribeAudio => Ok(media::transcribe_audio()),
        }
    }
}
