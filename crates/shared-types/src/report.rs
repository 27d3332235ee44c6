use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// Office department a report is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Administrative,
    Technical,
    Accounting,
    Concierge,
    Other,
}

/// All categories in display order.
pub const ALL_CATEGORIES: &[Category] = &[
    Category::Administrative,
    Category::Technical,
    Category::Accounting,
    Category::Concierge,
    Category::Other,
];

impl Category {
    /// Wire name sent to the webhook and used as the select value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Administrative => "Administrative",
            Category::Technical => "Technical",
            Category::Accounting => "Accounting",
            Category::Concierge => "Concierge",
            Category::Other => "Other",
        }
    }

    /// Label shown to residents.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Administrative => "Amministrativa",
            Category::Technical => "Tecnica",
            Category::Accounting => "Contabilità",
            Category::Concierge => "Portineria",
            Category::Other => "Altro",
        }
    }

    /// Parse a wire name, falling back to Administrative.
    pub fn from_key(s: &str) -> Self {
        ALL_CATEGORIES
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .unwrap_or_default()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How quickly the office should act on a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
    #[default]
    Normal,
    Urgent,
    Emergency,
}

/// All priorities in display order.
pub const ALL_PRIORITIES: &[Priority] = &[Priority::Normal, Priority::Urgent, Priority::Emergency];

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Normal => "Normal",
            Priority::Urgent => "Urgent",
            Priority::Emergency => "Emergency",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Normal => "Normale",
            Priority::Urgent => "Urgente",
            Priority::Emergency => "Emergenza",
        }
    }

    /// Parse a wire name, falling back to Normal.
    pub fn from_key(s: &str) -> Self {
        ALL_PRIORITIES
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .unwrap_or_default()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maintenance trades the office dispatches for technical reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MaintenanceTrade {
    Antennista,
    Ascensore,
    CancelliElettrici,
    Disinfestazioni,
    Edilizia,
    Elettricista,
    Fabbro,
    Giardinaggio,
    Idraulico,
    ImpiantoRiscaldamento,
    Montascale,
}

/// All trades, alphabetical by label.
pub const ALL_TRADES: &[MaintenanceTrade] = &[
    MaintenanceTrade::Antennista,
    MaintenanceTrade::Ascensore,
    MaintenanceTrade::CancelliElettrici,
    MaintenanceTrade::Disinfestazioni,
    MaintenanceTrade::Edilizia,
    MaintenanceTrade::Elettricista,
    MaintenanceTrade::Fabbro,
    MaintenanceTrade::Giardinaggio,
    MaintenanceTrade::Idraulico,
    MaintenanceTrade::ImpiantoRiscaldamento,
    MaintenanceTrade::Montascale,
];

impl MaintenanceTrade {
    pub fn label(&self) -> &'static str {
        match self {
            MaintenanceTrade::Antennista => "Antennista",
            MaintenanceTrade::Ascensore => "Ascensore",
            MaintenanceTrade::CancelliElettrici => "Cancelli Elettrici",
            MaintenanceTrade::Disinfestazioni => "Disinfestazioni/Derattizzazioni",
            MaintenanceTrade::Edilizia => "Edilizia",
            MaintenanceTrade::Elettricista => "Elettricista",
            MaintenanceTrade::Fabbro => "Fabbro",
            MaintenanceTrade::Giardinaggio => "Giardinaggio",
            MaintenanceTrade::Idraulico => "Idraulico",
            MaintenanceTrade::ImpiantoRiscaldamento => "Impianto di Riscaldamento",
            MaintenanceTrade::Montascale => "Montascale",
        }
    }

    /// Parse a label. Unknown or empty input means no trade selected.
    pub fn from_label(s: &str) -> Option<Self> {
        ALL_TRADES.iter().copied().find(|t| t.label() == s)
    }
}

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

/// The report a resident is composing. One live instance per session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReportForm {
    #[validate(custom(function = "crate::validation::not_blank"))]
    pub building: String,
    #[serde(default)]
    pub entrance: String,
    #[serde(default)]
    pub unit: String,
    #[validate(custom(function = "crate::validation::not_blank"))]
    pub full_name: String,
    #[validate(custom(function = "crate::validation::not_blank"))]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub trade: Option<MaintenanceTrade>,
    #[serde(default)]
    pub priority: Priority,
    #[validate(custom(function = "crate::validation::descriptive_message"))]
    pub message: String,
    #[validate(custom(function = "crate::validation::accepted"))]
    #[serde(default)]
    pub consent: bool,
}

impl ReportForm {
    /// Change the category. A trade only survives on technical reports.
    pub fn set_category(&mut self, category: Category) {
        self.category = category;
        if category != Category::Technical {
            self.trade = None;
        }
    }

    /// Clear the per-report fields after a successful send.
    ///
    /// Identity fields and consent are kept so a resident can file a
    /// follow-up without retyping them.
    pub fn reset_after_send(&mut self) {
        self.category = Category::default();
        self.trade = None;
        self.priority = Priority::default();
        self.message.clear();
    }

    /// Flatten the form into the outbound multipart fields.
    pub fn to_payload(&self, ticket: &str, timestamp: DateTime<Utc>) -> ReportPayload {
        let trade = self.trade.map(|t| t.label().to_string()).unwrap_or_default();
        ReportPayload {
            fields: vec![
                ("building", self.building.clone()),
                ("entrance", self.entrance.clone()),
                ("unit", self.unit.clone()),
                ("fullName", self.full_name.clone()),
                ("email", self.email.clone()),
                ("phone", self.phone.clone()),
                ("category", self.category.as_str().to_string()),
                ("trade", trade),
                ("priority", self.priority.as_str().to_string()),
                ("message", self.message.clone()),
                ("consent", self.consent.to_string()),
                ("ticket", ticket.to_string()),
                (
                    "timestamp",
                    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
                ),
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// Outbound payload
// ---------------------------------------------------------------------------

/// Ordered name/value pairs sent as one multipart text part each.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPayload {
    fields: Vec<(&'static str, String)>,
}

impl ReportPayload {
    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// Outcome of the latest submit attempt. Replaced on every attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SubmissionResult {
    Success { ticket: String },
    Failure { reason: String },
}

impl SubmissionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionResult::Success { .. })
    }

    pub fn ticket(&self) -> Option<&str> {
        match self {
            SubmissionResult::Success { ticket } => Some(ticket),
            SubmissionResult::Failure { .. } => None,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            SubmissionResult::Success { .. } => None,
            SubmissionResult::Failure { reason } => Some(reason),
        }
    }
}
