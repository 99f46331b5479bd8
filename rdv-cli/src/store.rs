//! Local agenda store: the displayed set of events.
//!
//! Entries persist as a JSON array and carry the display-facing shape
//! (RFC 3339 strings); conversions bridge to the core `Event`. Newly
//! created events are merged in optimistically — existing events are never
//! re-fetched from the backend here.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rdv_core::config::GlobalConfig;
use rdv_core::{Event, Participant};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A displayed agenda entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgendaEntry {
    pub id: String,
    pub title: String,
    pub start: String,
    pub end: String,
    pub all_day: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

impl AgendaEntry {
    pub fn from_event(event: &Event) -> AgendaEntry {
        AgendaEntry {
            id: event.id.clone(),
            title: event.title.clone(),
            start: event.start.to_rfc3339(),
            end: event.end.to_rfc3339(),
            all_day: event.all_day,
            description: event.description.clone(),
            participants: event.participants.clone(),
        }
    }

    pub fn to_event(&self) -> Result<Event> {
        Ok(Event {
            id: self.id.clone(),
            title: self.title.clone(),
            start: parse_instant(&self.start)?,
            end: parse_instant(&self.end)?,
            all_day: self.all_day,
            description: self.description.clone(),
            participants: self.participants.clone(),
        })
    }
}

fn parse_instant(s: &str) -> Result<DateTime<Utc>> {
    let parsed =
        DateTime::parse_from_rfc3339(s).with_context(|| format!("Horodatage invalide: {s}"))?;
    Ok(parsed.with_timezone(&Utc))
}

/// The persisted displayed set.
pub struct Agenda {
    path: PathBuf,
    entries: Vec<AgendaEntry>,
}

impl Agenda {
    /// Open the agenda at the platform config location.
    pub fn open_default() -> Result<Agenda> {
        Agenda::open(GlobalConfig::agenda_path()?)
    }

    /// Open the agenda backed by an explicit file.
    pub fn open(path: PathBuf) -> Result<Agenda> {
        let entries = if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        } else {
            Vec::new()
        };

        Ok(Agenda { path, entries })
    }

    pub fn entries(&self) -> &[AgendaEntry] {
        &self.entries
    }

    pub fn find(&self, id: &str) -> Option<&AgendaEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Insert a newly created event into the displayed set.
    pub fn insert(&mut self, entry: AgendaEntry) -> Result<()> {
        self.entries.push(entry);
        self.save()
    }

    /// Replace an event's stored participant sequence.
    pub fn set_participants(&mut self, id: &str, participants: &[Participant]) -> Result<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .with_context(|| format!("Événement introuvable: {id}"))?;

        entry.participants = participants.to_vec();
        self.save()
    }

    fn save(&self) -> Result<()> {
        let contents =
            serde_json::to_string_pretty(&self.entries).context("Failed to serialize agenda")?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        std::fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event() -> Event {
        Event {
            id: "evt-1".to_string(),
            title: "Réunion".to_string(),
            start: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
            all_day: false,
            description: None,
            participants: Vec::new(),
        }
    }

    // --- conversions ---

    #[test]
    fn entry_event_roundtrip() {
        let entry = AgendaEntry::from_event(&event());
        assert_eq!(entry.to_event().unwrap(), event());
    }

    #[test]
    fn entry_without_participants_field_defaults_empty() {
        let entry: AgendaEntry = serde_json::from_str(
            r#"{
                "id": "evt-1",
                "title": "Réunion",
                "start": "2024-01-01T09:00:00+00:00",
                "end": "2024-01-01T10:00:00+00:00",
                "all_day": false
            }"#,
        )
        .unwrap();

        assert!(entry.participants.is_empty());
        assert_eq!(entry.description, None);
    }

    #[test]
    fn entry_with_bad_timestamp_fails_conversion() {
        let mut entry = AgendaEntry::from_event(&event());
        entry.start = "pas une date".to_string();
        assert!(entry.to_event().is_err());
    }

    // --- store ---

    #[test]
    fn insert_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agenda.json");

        let mut agenda = Agenda::open(path.clone()).unwrap();
        agenda.insert(AgendaEntry::from_event(&event())).unwrap();

        let reopened = Agenda::open(path).unwrap();
        assert_eq!(reopened.entries().len(), 1);
        assert_eq!(reopened.find("evt-1").unwrap().title, "Réunion");
    }

    #[test]
    fn set_participants_replaces_sequence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agenda.json");

        let mut agenda = Agenda::open(path.clone()).unwrap();
        agenda.insert(AgendaEntry::from_event(&event())).unwrap();

        let participants = vec![Participant {
            user_id: "7".to_string(),
            username: "lea".to_string(),
            email: "lea@example.com".to_string(),
        }];
        agenda.set_participants("evt-1", &participants).unwrap();

        let reopened = Agenda::open(path).unwrap();
        assert_eq!(reopened.find("evt-1").unwrap().participants, participants);
    }

    #[test]
    fn set_participants_unknown_id_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut agenda = Agenda::open(dir.path().join("agenda.json")).unwrap();

        assert!(agenda.set_participants("inconnu", &[]).is_err());
    }

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let agenda = Agenda::open(dir.path().join("agenda.json")).unwrap();
        assert!(agenda.entries().is_empty());
    }
}
