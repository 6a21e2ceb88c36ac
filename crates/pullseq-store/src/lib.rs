mod delay;
mod joined;
mod memory;
mod store;

#[cfg(feature = "tokio-delay")]
pub use delay::FixedDelay;
pub use delay::{Delay, Delayed, NoDelay, YieldDelay};
pub use joined::{Composite, DeferredJoined, Joined};
pub use memory::MemoryStore;
pub use store::{DeferredRecordStore, RecordStore};
