use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Transfer state reported by a transport on every progress tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub bytes_received: u64,
    /// Taken from `Content-Length` when the server sent one.
    pub content_length: Option<u64>,
}

/// Answer of a progress callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Next {
    Continue,
    Abort,
}

/// Shared, one-way cancellation flag.
///
/// Clones observe the same flag. Once cancelled it stays cancelled.
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag(Arc<AtomicBool>);

impl CancellationFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Progress callback handed to transports: abort once cancelled.
    pub fn progress_report(&self, _progress: &Progress) -> Next {
        if self.is_cancelled() {
            Next::Abort
        } else {
            Next::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_initial_state_continues() {
        let flag = CancellationFlag::new();
        assert!(!flag.is_cancelled());
        assert_eq!(flag.progress_report(&Progress::default()), Next::Continue);
    }

    #[test]
    fn test_cancel_from_other_thread() {
        let flag = CancellationFlag::new();
        let remote = flag.clone();

        thread::spawn(move || remote.cancel()).join().unwrap();

        assert!(flag.is_cancelled());
        assert_eq!(
            flag.progress_report(&Progress {
                bytes_received: 512,
                content_length: Some(1024),
            }),
            Next::Abort
        );
    }

    #[test]
    fn test_cancel_is_permanent() {
        let flag = CancellationFlag::new();
        flag.cancel();
        flag.cancel();
        assert!(flag.is_cancelled());
    }
}
