use crate::observer::StackObserver;

/// A `tracing`-based implementation of `StackObserver`.
///
/// Install a subscriber (see `main.rs`) to see the events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl StackObserver for TracingObserver {
    fn pushed(&mut self, value: i32, len: usize) {
        tracing::info!(target: "bounded_stack", len, "pushed {value} to stack");
    }

    fn popped(&mut self, value: i32, len: usize) {
        tracing::debug!(target: "bounded_stack", value, len, "popped");
    }

    fn overflow(&mut self, value: i32, capacity: usize) {
        tracing::warn!(target: "bounded_stack", value, capacity, "stack overflow");
    }

    fn underflow(&mut self) {
        tracing::warn!(target: "bounded_stack", "stack underflow");
    }
}
