//! Calendar event creation and listing.

use std::sync::Arc;

use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use tracing::info;

use notnotion_core::error::{AppError, ErrorKind};
use notnotion_core::traits::auth::AuthProvider;
use notnotion_core::traits::store::{Document, DocumentStore};
use notnotion_core::types::{CollectionPath, DocumentPath, EventId, NoteId};
use notnotion_entity::event::CalendarEvent;

use crate::context::RequestContext;

/// Input collected by the event form.
#[derive(Debug, Clone)]
pub struct EventDraft {
    /// Event title; must not be blank.
    pub title: String,
    /// Free-form details, stored trimmed.
    pub description: String,
    /// Local calendar date.
    pub date: NaiveDate,
    /// Local wall-clock time; seconds are dropped.
    pub time: NaiveTime,
    /// Note the event was created from, if any.
    pub note_id: Option<NoteId>,
}

/// Manages calendar events.
#[derive(Debug, Clone)]
pub struct EventService {
    store: Arc<dyn DocumentStore>,
    auth: Arc<dyn AuthProvider>,
}

impl EventService {
    /// Creates a new event service.
    pub fn new(store: Arc<dyn DocumentStore>, auth: Arc<dyn AuthProvider>) -> Self {
        Self { store, auth }
    }

    /// Creates a zero-length event at the draft's local date and time.
    pub async fn create_event(&self, draft: EventDraft) -> Result<CalendarEvent, AppError> {
        let ctx = RequestContext::resolve(self.auth.as_ref())?;
        let uid = ctx.user_id();

        let title = draft.title.trim();
        if title.is_empty() {
            return Err(AppError::validation("Event title cannot be empty"));
        }

        let start = local_start(draft.date, draft.time)?;
        let now = Utc::now();
        let event = CalendarEvent {
            id: EventId::generate(),
            title: title.to_string(),
            description: draft.description.trim().to_string(),
            start_date: start,
            end_date: start,
            note_id: draft.note_id,
            reminder_minutes: 0,
            is_recurring: false,
            recurrence_pattern: None,
            created_at: now,
            updated_at: now,
        };

        let data = serde_json::to_value(&event)?;
        self.store
            .set(&DocumentPath::event(uid, &event.id), data)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::RemoteOperation, "Failed to save event", e))?;

        info!(
            user_id = %uid,
            event_id = %event.id,
            start = %event.start_date,
            "Event created"
        );

        Ok(event)
    }

    /// Lists every event of the user, earliest first.
    pub async fn list_events(&self) -> Result<Vec<CalendarEvent>, AppError> {
        let ctx = RequestContext::resolve(self.auth.as_ref())?;
        let docs = self
            .store
            .list(&CollectionPath::CalendarEvents(ctx.user_id().clone()), None)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::RemoteOperation, "Failed to list events", e))?;

        let mut events = docs
            .iter()
            .map(Document::decode::<CalendarEvent>)
            .collect::<Result<Vec<_>, _>>()?;
        events.sort_by_key(|event| event.start_date);
        Ok(events)
    }

    /// Lists the events starting on the given local date.
    pub async fn list_events_on(&self, date: NaiveDate) -> Result<Vec<CalendarEvent>, AppError> {
        let events = self.list_events().await?;
        Ok(events
            .into_iter()
            .filter(|event| event.start_date.with_timezone(&Local).date_naive() == date)
            .collect())
    }
}

/// Resolves a local date and hour:minute to an instant.
///
/// An ambiguous local time (clocks turned back) resolves to the earlier
/// instant. A local time skipped by a clock change is rejected.
fn local_start(date: NaiveDate, time: NaiveTime) -> Result<DateTime<Utc>, AppError> {
    let time = time
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .ok_or_else(|| AppError::validation("Invalid event time"))?;

    match Local.from_local_datetime(&date.and_time(time)) {
        LocalResult::Single(start) | LocalResult::Ambiguous(start, _) => Ok(start.with_timezone(&Utc)),
        LocalResult::None => Err(AppError::validation(format!(
            "{date} {time} does not exist in the local time zone"
        ))),
    }
}
