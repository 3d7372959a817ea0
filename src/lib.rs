mod config;
mod observer;
mod stack;
mod tracing_observer;

pub use config::Config;
pub use observer::{NullObserver, ObservedStack, StackObserver};
pub use stack::{BoundedStack, StackError};
pub use tracing_observer::TracingObserver;
