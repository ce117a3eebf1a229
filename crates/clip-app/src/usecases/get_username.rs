use std::sync::{Arc, OnceLock};

use clip_core::identity::random_username;
use clip_core::ports::IdentityStorePort;
use tracing::{debug, warn};

/// Identity provider: the persisted per-installation display name.
///
/// The first call either loads the stored name or generates and stores a
/// new one; the result is then fixed for the lifetime of this instance.
/// Storage failures degrade to an in-memory name instead of failing.
pub struct GetUsername {
    store: Arc<dyn IdentityStorePort>,
    cached: OnceLock<String>,
}

impl GetUsername {
    pub fn new(store: Arc<dyn IdentityStorePort>) -> Self {
        Self {
            store,
            cached: OnceLock::new(),
        }
    }

    pub fn execute(&self) -> String {
        self.cached.get_or_init(|| self.load_or_create()).clone()
    }

    fn load_or_create(&self) -> String {
        match self.store.load_username() {
            Ok(Some(name)) if !name.trim().is_empty() => {
                debug!(username = %name, "loaded stored username");
                return name;
            }
            Ok(_) => {}
            Err(err) => warn!(error = %err, "failed to load username, generating a new one"),
        }

        let name = random_username();
        if let Err(err) = self.store.store_username(&name) {
            warn!(error = %err, "failed to persist username");
        }
        debug!(username = %name, "generated username");
        name
    }
}
