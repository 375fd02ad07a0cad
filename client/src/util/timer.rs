//! Fixed-delay callbacks standing in for network round-trips.
//!
//! TRADE-OFFS
//! ==========
//! Delays only exist in the browser. Server rendering never triggers the
//! simulated sends, so the non-hydrate build drops the callback.

/// Run `f` once after `delay_ms` on the client event loop.
pub fn after_delay<F>(delay_ms: u64, f: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(delay_ms)).await;
        f();
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (delay_ms, f);
    }
}
