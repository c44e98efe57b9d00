//! Fixed politeness delay between page fetches
//!
//! The crawl is strictly sequential, so a fixed pause after every page caps
//! the request rate at one page per `delay` plus fetch time. This is not
//! adaptive: the delay never grows or shrinks in response to the server.

use std::time::Duration;

/// Unconditional pause applied after each page
#[derive(Debug, Clone, Copy)]
pub struct Pacer {
    delay: Duration,
}

impl Pacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Waits for the configured delay
    pub async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}
