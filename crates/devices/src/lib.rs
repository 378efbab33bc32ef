//! Device domain for the mock Jetstream API.
//!
//! Fixture-backed registries for devices, inventory and policies, the
//! mutable event log, and the command simulator that feeds it. Deterministic
//! logic only (no IO, no HTTP).

pub mod command;
pub mod device;
pub mod event;
pub mod fixtures;
pub mod inventory;
pub mod policy;

pub use command::{CommandKind, CommandResult, CommandSimulator, CommandStatus};
pub use device::{Device, DeviceRegistry, DeviceStatus, DeviceType};
pub use event::{Event, EventFilter, EventLog, EventType, acknowledge};
pub use fixtures::SeedData;
pub use inventory::{InventoryItem, InventoryStore};
pub use policy::{Policy, PolicyRules, PolicyStore};
