//! Device events and the in-process event log.
//!
//! The log is most-recent-first: new events are pushed to the front and are
//! never updated or removed afterwards. Queries return a sorted snapshot, so
//! readers never observe a half-applied write.

use core::str::FromStr;
use std::collections::VecDeque;
use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use jetstream_core::{JetstreamError, JetstreamResult};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    DoorOpened,
    DoorClosed,
    InventorySnapshot,
}

impl FromStr for EventType {
    type Err = JetstreamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DOOR_OPENED" => Ok(EventType::DoorOpened),
            "DOOR_CLOSED" => Ok(EventType::DoorClosed),
            "INVENTORY_SNAPSHOT" => Ok(EventType::InventorySnapshot),
            other => Err(JetstreamError::bad_request(format!(
                "unknown event type '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub device_id: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub occurred_utc: DateTime<Utc>,
    #[serde(default)]
    pub payload: Map<String, Value>,
}

/// Exact-match filters for [`EventLog::query`]. `None` means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub device_id: Option<String>,
    pub event_type: Option<EventType>,
}

impl EventFilter {
    pub fn for_device(device_id: impl Into<String>) -> Self {
        Self {
            device_id: Some(device_id.into()),
            event_type: None,
        }
    }

    pub fn matches(&self, event: &Event) -> bool {
        self.device_id.as_deref().is_none_or(|d| event.device_id == d)
            && self.event_type.is_none_or(|t| event.event_type == t)
    }
}

#[derive(Debug, Default)]
pub struct EventLog {
    inner: RwLock<VecDeque<Event>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the log; `events` is kept in the given order.
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            inner: RwLock::new(events.into()),
        }
    }

    /// Record `event` as the most recent entry.
    ///
    /// Writers only ever push whole events, so a poisoned lock still guards a
    /// consistent log; recover it rather than drop the event.
    pub fn prepend(&self, event: Event) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push_front(event);
    }

    /// Matching events, newest `occurred_utc` first.
    ///
    /// The sort is stable, so events sharing a timestamp keep log order
    /// (most recently recorded first).
    pub fn query(&self, filter: &EventFilter) -> Vec<Event> {
        let log = self.inner.read().unwrap_or_else(PoisonError::into_inner);

        let mut events: Vec<Event> = log.iter().filter(|e| filter.matches(e)).cloned().collect();
        events.sort_by(|a, b| b.occurred_utc.cmp(&a.occurred_utc));
        events
    }

    /// Raw log contents in storage order (front = most recently recorded).
    pub fn snapshot(&self) -> Vec<Event> {
        let log = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        log.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Acknowledge a batch of event ids.
///
/// Mock behaviour: the ids are echoed back and nothing in the log changes.
/// `body` must be an object whose `ids` field is an array of strings.
pub fn acknowledge(body: &Value) -> JetstreamResult<Vec<String>> {
    let ids = body
        .get("ids")
        .and_then(Value::as_array)
        .ok_or_else(|| JetstreamError::bad_request("ids must be an array"))?;

    ids.iter()
        .map(|v| {
            v.as_str()
                .map(str::to_owned)
                .ok_or_else(|| JetstreamError::bad_request("ids must contain only strings"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use serde_json::json;

    use super::*;
    use crate::fixtures::SeedData;

    fn seeded_log() -> EventLog {
        EventLog::with_events(SeedData::load().unwrap().events)
    }

    fn event(id: &str, device_id: &str, at: DateTime<Utc>) -> Event {
        Event {
            id: id.to_string(),
            device_id: device_id.to_string(),
            event_type: EventType::DoorClosed,
            occurred_utc: at,
            payload: Map::new(),
        }
    }

    #[test]
    fn query_sorts_newest_first() {
        let log = seeded_log();
        let ids: Vec<_> = log
            .query(&EventFilter::default())
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec!["EVT-3002", "EVT-3001", "EVT-3003"]);
    }

    #[test]
    fn query_filters_by_device_and_type() {
        let log = seeded_log();

        let by_device = log.query(&EventFilter::for_device("DEV-1002"));
        assert_eq!(by_device.len(), 1);
        assert_eq!(by_device[0].id, "EVT-3003");

        let by_type = log.query(&EventFilter {
            device_id: None,
            event_type: Some(EventType::InventorySnapshot),
        });
        assert_eq!(by_type.len(), 1);
        assert_eq!(by_type[0].device_id, "DEV-1003");

        let none = log.query(&EventFilter {
            device_id: Some("DEV-1001".into()),
            event_type: Some(EventType::DoorClosed),
        });
        assert!(none.is_empty());
    }

    #[test]
    fn prepend_puts_event_at_front_of_log() {
        let log = seeded_log();
        let at = DateTime::parse_from_rfc3339("2025-09-03T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        log.prepend(event("EVT-NEW", "DEV-1004", at));

        assert_eq!(log.len(), 4);
        assert_eq!(log.snapshot()[0].id, "EVT-NEW");
        // Older timestamp, so it sorts last regardless of log position.
        assert_eq!(log.query(&EventFilter::default()).last().unwrap().id, "EVT-NEW");
    }

    #[test]
    fn equal_timestamps_keep_most_recent_first() {
        let log = EventLog::new();
        let at = Utc::now();
        log.prepend(event("EVT-A", "DEV-1001", at));
        log.prepend(event("EVT-B", "DEV-1001", at));
        log.prepend(event("EVT-C", "DEV-1001", at - Duration::seconds(1)));

        let ids: Vec<_> = log
            .query(&EventFilter::default())
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec!["EVT-B", "EVT-A", "EVT-C"]);
    }

    #[test]
    fn prepend_survives_a_poisoned_lock() {
        let log = std::sync::Arc::new(seeded_log());
        let poisoner = log.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.inner.write().unwrap();
            panic!("writer panicked while holding the log");
        })
        .join();
        assert!(log.inner.is_poisoned());

        log.prepend(event("EVT-AFTER", "DEV-1001", Utc::now()));
        assert_eq!(log.len(), 4);
        assert_eq!(log.snapshot()[0].id, "EVT-AFTER");
        assert_eq!(log.query(&EventFilter::default())[0].id, "EVT-AFTER");
    }

    #[test]
    fn event_type_parses_case_insensitively() {
        assert_eq!("door_opened".parse::<EventType>().unwrap(), EventType::DoorOpened);
        assert!("DOOR_SLAMMED".parse::<EventType>().is_err());
    }

    #[test]
    fn acknowledge_echoes_ids() {
        let ids = acknowledge(&json!({ "ids": ["EVT-1", "EVT-2"] })).unwrap();
        assert_eq!(ids, vec!["EVT-1", "EVT-2"]);
        assert!(acknowledge(&json!({ "ids": [] })).unwrap().is_empty());
    }

    #[test]
    fn acknowledge_rejects_non_array_ids() {
        for body in [
            json!({ "ids": "not-an-array" }),
            json!({ "ids": { "0": "EVT-1" } }),
            json!({ "ids": null }),
            json!({}),
            json!(["EVT-1"]),
            json!({ "ids": ["EVT-1", 7] }),
        ] {
            assert!(
                matches!(acknowledge(&body), Err(JetstreamError::BadRequest(_))),
                "expected BadRequest for {body}"
            );
        }
    }
}
