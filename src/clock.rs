use gloo_timers::callback::Timeout;

/// Defers work on the page's event loop.
pub trait Clock: Clone + 'static {
    fn after<F>(&self, millis: u32, task: F)
    where
        F: FnOnce() + 'static;
}

/// One-shot browser timers. Handles are forgotten: every delay in this crate
/// runs to completion.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn after<F>(&self, millis: u32, task: F)
    where
        F: FnOnce() + 'static,
    {
        Timeout::new(millis, task).forget();
    }
}

#[cfg(test)]
pub use virtual_clock::VirtualClock;
