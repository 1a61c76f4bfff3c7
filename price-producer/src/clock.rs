use async_trait::async_trait;
use std::time::Duration;

/// Scheduling seam for the polling loop.
#[async_trait]
pub trait Clock {
    async fn sleep(&self, duration: Duration);
}

#[derive(Clone, Debug, Default)]
pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod recording_impls {
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Records requested sleeps and returns immediately.
    #[derive(Clone, Default)]
    pub struct RecordingClock {
        slept: Arc<Mutex<Vec<Duration>>>,
    }

    impl RecordingClock {
        pub fn sleeps(&self) -> Vec<Duration> {
            self.slept.lock().expect("clock lock poisoned").clone()
        }
    }

    #[async_trait]
    impl Clock for RecordingClock {
        async fn sleep(&self, duration: Duration) {
            self.slept
                .lock()
                .expect("clock lock poisoned")
                .push(duration);
        }
    }
}

#[cfg(test)]
pub use recording_impls::*;
