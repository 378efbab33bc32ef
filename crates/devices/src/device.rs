use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use jetstream_core::JetstreamError;

/// Connectivity status reported by a device.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceStatus {
    Online,
    Offline,
}

impl FromStr for DeviceStatus {
    type Err = JetstreamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ONLINE" => Ok(DeviceStatus::Online),
            "OFFLINE" => Ok(DeviceStatus::Offline),
            other => Err(JetstreamError::bad_request(format!(
                "unknown device status '{other}' (expected ONLINE or OFFLINE)"
            ))),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceType {
    Refrigerator,
    Freezer,
    RfidCabinet,
}

/// A piece of simulated lab equipment. Fixture data; never created at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    pub status: DeviceStatus,
    pub location: String,
    pub firmware_version: String,
    pub last_seen_utc: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_percent: Option<u8>,
}

/// Read-only device registry.
#[derive(Debug, Clone, Default)]
pub struct DeviceRegistry {
    devices: Vec<Device>,
}

impl DeviceRegistry {
    pub fn new(devices: Vec<Device>) -> Self {
        Self { devices }
    }

    pub fn get(&self, id: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// All devices in fixture order, optionally narrowed to one status.
    pub fn list(&self, status: Option<DeviceStatus>) -> Vec<Device> {
        self.devices
            .iter()
            .filter(|d| status.is_none_or(|s| d.status == s))
            .cloned()
            .collect()
    }
}
