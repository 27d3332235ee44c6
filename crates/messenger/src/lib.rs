pub mod config;
pub mod controller;
pub mod cooldown;
pub mod prefs;
pub mod ticket;
pub mod timer;
pub mod webhook;

pub use controller::{deliver, Outbound, Phase, Prepared, SubmissionController, SubmissionView, Target};
pub use cooldown::{run_cooldown, Cooldown, COOLDOWN_SECS};
pub use prefs::{FileStore, MemoryStore, PreferenceError, PreferenceStore};
pub use ticket::Ticket;
pub use timer::{Sleeper, TokioSleeper};
pub use webhook::{ReqwestWebhook, WebhookClient};
