use anyhow::{Error, Result};
use tracing::info;

use crate::models::route::ScreenKind;

/// Navigation collaborator: takes the user to a resource screen.
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, screen: ScreenKind, id: i64) -> Result<(), Error>;
}

/// Stand-in navigator for deployments without a UI shell attached.
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn navigate_to(&self, screen: ScreenKind, id: i64) -> Result<(), Error> {
        info!(screen = %screen, id, "navigating");
        Ok(())
    }
}
