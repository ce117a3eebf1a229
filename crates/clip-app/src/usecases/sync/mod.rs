mod engine;
mod poller;

pub use engine::{RefreshPolicy, SyncEngine};
pub use poller::{spawn_poller, DEFAULT_POLL_INTERVAL};
