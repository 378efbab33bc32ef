//! Seed data loaded at startup.

use serde::Deserialize;

use crate::{Device, Event, InventoryItem, Policy};

const SEED_JSON: &str = include_str!("../fixtures/seed.json");

#[derive(Debug, Clone, Deserialize)]
pub struct SeedData {
    pub devices: Vec<Device>,
    pub inventory: Vec<InventoryItem>,
    pub events: Vec<Event>,
    pub policies: Vec<Policy>,
}

impl SeedData {
    /// Parse the bundled fixture set.
    pub fn load() -> Result<Self, serde_json::Error> {
        Self::from_json(SEED_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
