//! Ctrl+C outside raw mode.
//!
//! Raw mode turns Ctrl+C into a byte the decoder reports as an interrupt, but raw mode is only
//! held for a single read. Between reads, and during every line-based fallback read, the
//! terminal delivers SIGINT instead. The handler installed here records the signal in a shared
//! flag so the console can report it as `PortfolioError::Interrupted` at its next check.

use crate::error::{PortfolioError, Result};
use log::debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared record of a pending Ctrl+C.
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag {
    raised: Arc<AtomicBool>,
}

impl InterruptFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route the process's SIGINT into this flag. Can succeed only once per process.
    pub fn install(&self) -> std::result::Result<(), ctrlc::Error> {
        let raised = Arc::clone(&self.raised);
        ctrlc::set_handler(move || raised.store(true, Ordering::SeqCst))
    }

    pub fn raise(&self) {
        self.raised.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }

    /// Consume a pending interrupt as `Err(Interrupted)`.
    pub fn check(&self) -> Result<()> {
        if self.raised.swap(false, Ordering::SeqCst) {
            debug!("Pending Ctrl+C consumed");
            return Err(PortfolioError::Interrupted);
        }
        Ok(())
    }
}
