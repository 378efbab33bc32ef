use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// An RFID-tagged item held by a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub device_id: String,
    pub sku: String,
    pub tag_epc: String,
    pub description: String,
    pub quantity: u32,
    pub uom: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<NaiveDate>,
    pub last_seen_utc: DateTime<Utc>,
}

/// Read-only inventory store.
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    items: Vec<InventoryItem>,
}

impl InventoryStore {
    pub fn new(items: Vec<InventoryItem>) -> Self {
        Self { items }
    }

    /// Items in fixture order, optionally restricted to one device.
    ///
    /// An unknown device id simply yields an empty list.
    pub fn list(&self, device_id: Option<&str>) -> Vec<InventoryItem> {
        self.items
            .iter()
            .filter(|i| device_id.is_none_or(|d| i.device_id == d))
            .cloned()
            .collect()
    }

    /// Number of item records currently held for `device_id`.
    pub fn count_for_device(&self, device_id: &str) -> usize {
        self.items.iter().filter(|i| i.device_id == device_id).count()
    }
}
