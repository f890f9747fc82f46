//! Awaitable delays for the simulated network round trips.
//!
//! In the browser this is a real timer; natively it resolves immediately so
//! tests never wait on UX theatrics.

use std::time::Duration;

/// Suspend the current task for `duration`.
pub async fn sleep(duration: Duration) {
    #[cfg(feature = "hydrate")]
    {
        let ms = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = duration;
    }
}
