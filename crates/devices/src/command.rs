//! Command simulation: turns a device command into a synthetic event.
//!
//! Every accepted command appends exactly one event to the log. There is no
//! idempotency key, so duplicate requests produce duplicate events.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use jetstream_core::{Clock, IdGenerator, JetstreamError, JetstreamResult};

use crate::{DeviceRegistry, Event, EventLog, EventType, InventoryStore};

/// Id prefix for synthesized events.
pub const EVENT_ID_PREFIX: &str = "EVT";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandKind {
    DoorOpen,
    InventorySnapshot,
}

impl CommandKind {
    pub fn id_prefix(&self) -> &'static str {
        match self {
            CommandKind::DoorOpen => "CMD",
            CommandKind::InventorySnapshot => "SNAP",
        }
    }

    /// Event type recorded when this command is accepted.
    pub fn event_type(&self) -> EventType {
        match self {
            CommandKind::DoorOpen => EventType::DoorOpened,
            CommandKind::InventorySnapshot => EventType::InventorySnapshot,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandStatus {
    Accepted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResult {
    pub id: String,
    pub status: CommandStatus,
    pub device_id: String,
    pub event_id: String,
}

pub struct CommandSimulator {
    devices: Arc<DeviceRegistry>,
    inventory: Arc<InventoryStore>,
    events: Arc<EventLog>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl CommandSimulator {
    pub fn new(
        devices: Arc<DeviceRegistry>,
        inventory: Arc<InventoryStore>,
        events: Arc<EventLog>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            devices,
            inventory,
            events,
            ids,
            clock,
        }
    }

    /// Accept `kind` for `device_id`, recording the resulting event.
    ///
    /// Unknown devices are rejected before anything is written.
    pub fn submit(&self, device_id: &str, kind: CommandKind) -> JetstreamResult<CommandResult> {
        if !self.devices.contains(device_id) {
            tracing::warn!(device_id, ?kind, "command rejected: unknown device");
            return Err(JetstreamError::not_found(format!("device {device_id}")));
        }

        let command_id = self.ids.generate(kind.id_prefix());
        let event = Event {
            id: self.ids.generate(EVENT_ID_PREFIX),
            device_id: device_id.to_string(),
            event_type: kind.event_type(),
            occurred_utc: self.clock.now(),
            payload: self.payload_for(device_id, kind, &command_id),
        };
        let event_id = event.id.clone();

        self.events.prepend(event);
        tracing::info!(device_id, command_id = %command_id, event_id = %event_id, ?kind, "command accepted");

        Ok(CommandResult {
            id: command_id,
            status: CommandStatus::Accepted,
            device_id: device_id.to_string(),
            event_id,
        })
    }

    fn payload_for(&self, device_id: &str, kind: CommandKind, command_id: &str) -> Map<String, Value> {
        match kind {
            CommandKind::DoorOpen => Map::from_iter([
                ("by".to_string(), Value::from("api")),
                ("cmdId".to_string(), Value::from(command_id)),
            ]),
            CommandKind::InventorySnapshot => Map::from_iter([
                ("snapshotId".to_string(), Value::from(command_id)),
                (
                    "count".to_string(),
                    Value::from(self.inventory.count_for_device(device_id)),
                ),
            ]),
        }
    }
}
