// Run identity and cooperative cancellation

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Identifies one run on a scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RunId(pub(crate) u64);

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle on a live run
///
/// Clones share the same flag, so a token handed to another thread (or kept
/// by the UI) can stop the run. The scheduler checks the flag before every
/// step and delivers nothing more for a cancelled run.
#[derive(Debug, Clone)]
pub struct RunToken {
    id: RunId,
    cancelled: Arc<AtomicBool>,
}

impl RunToken {
    pub(crate) fn new(id: RunId) -> Self {
        RunToken {
            id,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn id(&self) -> RunId {
        self.id
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
