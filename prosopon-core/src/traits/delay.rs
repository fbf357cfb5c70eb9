//! Blocking delay abstraction

/// Blocking sleep between poll cycles
pub trait Delay {
    /// Block the current thread of execution for `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}
