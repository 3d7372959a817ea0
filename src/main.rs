use anyhow::{Context, Result};
use bounded_stack::{BoundedStack, Config, ObservedStack, TracingObserver};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("invalid log filter {:?}", config.log_filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let stack = BoundedStack::new(config.capacity)?;
    let mut observer = TracingObserver;
    let mut stack = ObservedStack::new(stack, &mut observer);

    stack.push(10)?;
    stack.push(30)?;

    tracing::debug!("{:?}", stack.stack());

    Ok(())
}
