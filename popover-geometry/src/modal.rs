//! Process-wide record of the modal popover currently on screen.
//!
//! Only one popover may present as a modal at a time. The view layer calls
//! [`ModalGate::acknowledge_open`] once the host confirms the modal is shown and
//! [`ModalGate::acknowledge_close`] once it is gone; [`ModalGate::is_showing`]
//! is the precondition check before presenting another one. The placement
//! engine never reads this state.

use crate::error::GeometryError;
use once_cell::sync::Lazy;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};

static GLOBAL_MODAL_GATE: Lazy<ModalGate> = Lazy::new(ModalGate::new);

/// The gate shared by every popover in the process.
pub fn global_modal_gate() -> &'static ModalGate {
    &GLOBAL_MODAL_GATE
}

#[derive(Debug, Default)]
pub struct ModalGate {
    owner: Mutex<Option<String>>,
}

impl ModalGate {
    pub fn new() -> Self {
        ModalGate::default()
    }

    fn slot(&self) -> MutexGuard<'_, Option<String>> {
        // The slot holds plain data, so a poisoned lock is still consistent.
        self.owner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Returns `true` while any modal popover is showing.
    pub fn is_showing(&self) -> bool {
        self.slot().is_some()
    }

    /// The owner of the showing modal, if any.
    pub fn owner(&self) -> Option<String> {
        self.slot().clone()
    }

    /// Records that `owner` is now showing as a modal.
    ///
    /// Acknowledging twice for the same owner is a no-op.
    ///
    /// # Errors
    ///
    /// `ModalAlreadyShowing` if a different owner holds the gate.
    pub fn acknowledge_open(&self, owner: &str) -> Result<(), GeometryError> {
        let mut slot = self.slot();
        match slot.as_deref() {
            Some(current) if current != owner => {
                warn!(requested = owner, current, "Modal popover already showing");
                Err(GeometryError::ModalAlreadyShowing {
                    owner: current.to_string(),
                })
            }
            _ => {
                debug!(owner, "Modal popover shown");
                *slot = Some(owner.to_string());
                Ok(())
            }
        }
    }

    /// Records that `owner` is no longer showing.
    ///
    /// # Errors
    ///
    /// `ModalNotOwned` if `owner` does not hold the gate.
    pub fn acknowledge_close(&self, owner: &str) -> Result<(), GeometryError> {
        let mut slot = self.slot();
        if slot.as_deref() != Some(owner) {
            return Err(GeometryError::ModalNotOwned {
                requester: owner.to_string(),
            });
        }
        debug!(owner, "Modal popover closed");
        *slot = None;
        Ok(())
    }
}
