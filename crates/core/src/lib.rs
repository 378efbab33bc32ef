//! `jetstream-core` — shared building blocks for the mock device API.
//!
//! Pure primitives only (no HTTP, no IO): the error model plus the injectable
//! id-generation and clock capabilities.

pub mod clock;
pub mod error;
pub mod id;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{JetstreamError, JetstreamResult};
pub use id::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
