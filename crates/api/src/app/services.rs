use std::sync::Arc;

use jetstream_core::{Clock, IdGenerator, RandomIdGenerator, SystemClock};
use jetstream_devices::{
    CommandSimulator, DeviceRegistry, EventLog, InventoryStore, PolicyStore, SeedData,
};

/// Everything the handlers need, owned per app instance (never global).
///
/// Tests build their own instance so each one starts from the seed state.
pub struct AppServices {
    devices: Arc<DeviceRegistry>,
    inventory: Arc<InventoryStore>,
    events: Arc<EventLog>,
    policies: Arc<PolicyStore>,
    commands: CommandSimulator,
    clock: Arc<dyn Clock>,
}

impl AppServices {
    /// Production wiring: bundled fixtures, random ids, system clock.
    pub fn seeded() -> Result<Self, serde_json::Error> {
        let seed = SeedData::load()?;
        Ok(Self::from_seed(
            seed,
            Arc::new(RandomIdGenerator::new()),
            Arc::new(SystemClock),
        ))
    }

    pub fn from_seed(seed: SeedData, ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        let devices = Arc::new(DeviceRegistry::new(seed.devices));
        let inventory = Arc::new(InventoryStore::new(seed.inventory));
        let events = Arc::new(EventLog::with_events(seed.events));
        let policies = Arc::new(PolicyStore::new(seed.policies));

        let commands = CommandSimulator::new(
            devices.clone(),
            inventory.clone(),
            events.clone(),
            ids,
            clock.clone(),
        );

        Self {
            devices,
            inventory,
            events,
            policies,
            commands,
            clock,
        }
    }

    pub fn devices(&self) -> &DeviceRegistry {
        &self.devices
    }

    pub fn inventory(&self) -> &InventoryStore {
        &self.inventory
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    pub fn policies(&self) -> &PolicyStore {
        &self.policies
    }

    pub fn commands(&self) -> &CommandSimulator {
        &self.commands
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}
