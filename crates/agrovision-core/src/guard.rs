//! Per-view in-flight guard.

use crate::error::{Error, Result};

/// Tracks whether a view has a request outstanding.
///
/// At most one request per view may be pending; a second submission is
/// rejected with [`Error::Busy`] before it changes any state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InFlight {
    busy: bool,
}

impl InFlight {
    /// Whether a request is pending.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Mark a request as started.
    pub fn begin(&mut self) -> Result<()> {
        if self.busy {
            return Err(Error::Busy);
        }
        self.busy = true;
        Ok(())
    }

    /// Mark the pending request as resolved.
    pub fn finish(&mut self) {
        self.busy = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_begin_is_rejected() {
        let mut guard = InFlight::default();
        guard.begin().unwrap();
        assert_eq!(guard.begin(), Err(Error::Busy));
        guard.finish();
        assert!(guard.begin().is_ok());
    }
}
