//! Shared-PIN gate for the admin flow.
//!
//! The PIN ships with the client and is compared in plain text. It keeps
//! casual visitors out of the editor; it does not protect the data.

use super::AdminError;
use log::{info, warn};

/// PIN used when no override is configured.
pub const DEFAULT_ADMIN_PIN: &str = "2255";

/// Holds the PIN that unlocks editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminGate {
    pin: String,
}

impl Default for AdminGate {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_PIN)
    }
}

impl AdminGate {
    pub fn new(pin: impl Into<String>) -> Self {
        Self { pin: pin.into() }
    }

    /// Exact comparison; no trimming or case folding.
    pub fn unlock(&self, input: &str) -> Result<AdminSession, AdminError> {
        if input == self.pin {
            info!("event=admin_unlock module=admin status=ok");
            Ok(AdminSession { _private: () })
        } else {
            warn!("event=admin_unlock module=admin status=rejected");
            Err(AdminError::IncorrectPin)
        }
    }
}

/// Proof that the gate was passed for the current session.
#[derive(Debug)]
pub struct AdminSession {
    _private: (),
}
