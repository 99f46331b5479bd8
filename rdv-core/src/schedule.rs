//! Event creation: form resolution and authenticated submission.

use crate::error::{RdvError, RdvResult};
use crate::event::Event;
use crate::gateway::{Gateway, Method};
use crate::session::SessionStore;
use crate::user::lenient_string;
use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use serde_json::json;

/// Submitted event-creation form.
///
/// Field presence and shape are the form layer's responsibility (required
/// prompts/arguments); the flow only resolves and submits.
#[derive(Debug, Clone)]
pub struct EventForm {
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub description: Option<String>,
}

/// The form's range resolved to submission shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub all_day: bool,
}

impl EventForm {
    /// Resolve the submitted range to a start/end instant pair and the
    /// all-day flag.
    ///
    /// Each side resolves independently: a side with a time component is
    /// interpreted in the local timezone, a bare date is midnight UTC. The
    /// event is all-day exactly when neither side carries a time, so a
    /// timed start can legitimately pair with a date-only end.
    pub fn resolve(&self) -> RdvResult<ResolvedRange> {
        let all_day = self.start_time.is_none() && self.end_time.is_none();

        Ok(ResolvedRange {
            start: resolve_side(self.start_date, self.start_time)?,
            end: resolve_side(self.end_date, self.end_time)?,
            all_day,
        })
    }
}

fn resolve_side(date: NaiveDate, time: Option<NaiveTime>) -> RdvResult<DateTime<Utc>> {
    match time {
        Some(time) => Local
            .from_local_datetime(&date.and_time(time))
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| RdvError::Validation("Date ou heure invalide".into())),
        None => Ok(date.and_hms_opt(0, 0, 0).unwrap().and_utc()),
    }
}

/// Create an event through the gateway.
///
/// Fails with `AuthRequired` before any network call when no credential is
/// stored. On success the backend-assigned id becomes the event's identity
/// and the returned `Event` starts with an empty participant sequence; the
/// surface inserts it into the displayed set.
pub async fn create_event<G: Gateway>(
    gateway: &G,
    store: &SessionStore,
    form: &EventForm,
) -> RdvResult<Event> {
    let Some(token) = store.token()? else {
        return Err(RdvError::AuthRequired);
    };

    let range = form.resolve()?;

    let payload = json!({
        "title": form.title,
        "start": range.start.to_rfc3339(),
        "end": range.end.to_rfc3339(),
        "all_day": range.all_day,
        "description": form.description,
    });

    let body = gateway
        .call("events", Method::POST, payload, Some(&token))
        .await?
        .into_result()?;

    let id = body
        .get("id")
        .and_then(lenient_string)
        .ok_or_else(|| RdvError::Transport("réponse de création sans identifiant".into()))?;

    Ok(Event {
        id,
        title: form.title.clone(),
        start: range.start,
        end: range.end,
        all_day: range.all_day,
        description: form.description.clone(),
        participants: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::ApiResponse;
    use crate::gateway::testing::MockGateway;
    use serde_json::json;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn time(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn local_instant(d: &str, t: &str) -> DateTime<Utc> {
        Local
            .from_local_datetime(&date(d).and_time(time(t)))
            .earliest()
            .unwrap()
            .with_timezone(&Utc)
    }

    fn form() -> EventForm {
        EventForm {
            title: "Réunion".to_string(),
            start_date: date("2024-01-01"),
            end_date: date("2024-01-01"),
            start_time: None,
            end_time: None,
            description: None,
        }
    }

    fn store_with_token() -> (tempfile::TempDir, SessionStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at(dir.path());
        store.set_token("jwt-1").unwrap();
        (dir, store)
    }

    // --- resolve ---

    #[test]
    fn resolve_without_times_is_all_day() {
        let range = form().resolve().unwrap();

        assert!(range.all_day);
        assert_eq!(range.start, date("2024-01-01").and_hms_opt(0, 0, 0).unwrap().and_utc());
        assert_eq!(range.end, range.start);
    }

    #[test]
    fn resolve_with_times_is_timed_local() {
        let mut form = form();
        form.start_time = Some(time("09:00"));
        form.end_time = Some(time("10:00"));

        let range = form.resolve().unwrap();

        assert!(!range.all_day);
        assert_eq!(range.start, local_instant("2024-01-01", "09:00"));
        assert_eq!(range.end, local_instant("2024-01-01", "10:00"));
    }

    #[test]
    fn resolve_single_time_is_not_all_day() {
        // A timed start paired with a date-only end is accepted: each side
        // resolves independently.
        let mut form = form();
        form.start_time = Some(time("09:00"));

        let range = form.resolve().unwrap();

        assert!(!range.all_day);
        assert_eq!(range.start, local_instant("2024-01-01", "09:00"));
        assert_eq!(range.end, date("2024-01-01").and_hms_opt(0, 0, 0).unwrap().and_utc());
    }

    #[test]
    fn resolve_does_not_check_ordering() {
        let mut form = form();
        form.start_date = date("2024-02-01");
        form.end_date = date("2024-01-01");

        let range = form.resolve().unwrap();

        assert!(range.end < range.start);
    }

    // --- create_event ---

    #[tokio::test]
    async fn create_without_credential_fails_before_any_call() {
        let gateway = MockGateway::returning(ApiResponse::Success {
            status: 201,
            body: json!({"id": 42}),
        });
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at(dir.path());

        let err = create_event(&gateway, &store, &form()).await.unwrap_err();

        assert!(matches!(err, RdvError::AuthRequired));
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn create_submits_resolved_payload_with_bearer() {
        let gateway = MockGateway::returning(ApiResponse::Success {
            status: 201,
            body: json!({"id": 42}),
        });
        let (_dir, store) = store_with_token();
        let mut form = form();
        form.start_time = Some(time("09:00"));
        form.end_time = Some(time("10:00"));

        let event = create_event(&gateway, &store, &form).await.unwrap();

        assert_eq!(event.id, "42");
        assert!(!event.all_day);
        assert!(event.participants.is_empty());

        let calls = gateway.calls.borrow();
        assert_eq!(calls[0].endpoint, "events");
        assert_eq!(calls[0].method, Method::POST);
        assert_eq!(calls[0].token.as_deref(), Some("jwt-1"));
        assert_eq!(calls[0].payload["title"], "Réunion");
        assert_eq!(calls[0].payload["all_day"], false);
        assert_eq!(
            calls[0].payload["start"],
            local_instant("2024-01-01", "09:00").to_rfc3339()
        );
    }

    #[tokio::test]
    async fn create_all_day_event() {
        let gateway = MockGateway::returning(ApiResponse::Success {
            status: 201,
            body: json!({"id": "evt-1"}),
        });
        let (_dir, store) = store_with_token();

        let event = create_event(&gateway, &store, &form()).await.unwrap();

        assert!(event.all_day);
        assert_eq!(event.id, "evt-1");
        assert_eq!(gateway.calls.borrow()[0].payload["all_day"], true);
    }

    #[tokio::test]
    async fn create_surfaces_remote_failure() {
        let gateway = MockGateway::returning(ApiResponse::Failure {
            status: 401,
            status_text: "Unauthorized".to_string(),
            message: None,
        });
        let (_dir, store) = store_with_token();

        let err = create_event(&gateway, &store, &form()).await.unwrap_err();

        assert_eq!(err.to_string(), "Erreur 401: Unauthorized");
    }

    #[tokio::test]
    async fn create_without_id_in_body_is_transport_error() {
        let gateway = MockGateway::returning(ApiResponse::Success {
            status: 201,
            body: json!({"ok": true}),
        });
        let (_dir, store) = store_with_token();

        let err = create_event(&gateway, &store, &form()).await.unwrap_err();

        assert!(matches!(err, RdvError::Transport(_)));
    }
}
