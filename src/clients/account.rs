use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Error, Result};
use tracing::{debug, info};

/// Account teardown collaborator. Implementations must tolerate repeated
/// calls within one session: the foreground block side channel and a tap
/// on the same notification can both fire.
pub trait AccountGateway: Send + Sync {
    fn logout_and_delete_account(&self) -> Result<(), Error>;
}

/// Latches after the first teardown so later triggers become no-ops.
#[derive(Debug, Default)]
pub struct AccountClient {
    torn_down: AtomicBool,
}

impl AccountClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down.load(Ordering::SeqCst)
    }
}

impl AccountGateway for AccountClient {
    fn logout_and_delete_account(&self) -> Result<(), Error> {
        if self.torn_down.swap(true, Ordering::SeqCst) {
            debug!("account already torn down, ignoring repeat logout");
            return Ok(());
        }

        info!("logging out and deleting account");
        Ok(())
    }
}
