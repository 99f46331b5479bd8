//! Agenda event types.

use crate::user::Participant;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A calendar event as displayed by the agenda surface.
///
/// Identity is assigned by the backend at creation. The only in-place
/// mutation after creation is the participant sequence; events are never
/// deleted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub all_day: bool,
    pub description: Option<String>,
    #[serde(default)]
    pub participants: Vec<Participant>,
}
