use crate::stack::{BoundedStack, StackError};
use std::fmt::Debug;

/// Receives a notification for every operation on an `ObservedStack`.
///
/// All methods default to doing nothing, so implementors only override the
/// events they care about.
pub trait StackObserver: Debug {
    /// `len` is the number of elements after the push.
    fn pushed(&mut self, _value: i32, _len: usize) {}

    /// `len` is the number of elements after the pop.
    fn popped(&mut self, _value: i32, _len: usize) {}

    fn overflow(&mut self, _value: i32, _capacity: usize) {}

    fn underflow(&mut self) {}
}

/// Ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl StackObserver for NullObserver {}

/// A `BoundedStack` that reports each outcome to a `StackObserver`.
///
/// Results are identical to calling the inner stack directly.
#[derive(Debug)]
pub struct ObservedStack<'a> {
    stack: BoundedStack,
    observer: &'a mut dyn StackObserver,
}

impl<'a> ObservedStack<'a> {
    pub fn new(stack: BoundedStack, observer: &'a mut dyn StackObserver) -> Self {
        Self { stack, observer }
    }

    pub fn push(&mut self, value: i32) -> Result<(), StackError> {
        let res = self.stack.push(value);
        match &res {
            Ok(()) => self.observer.pushed(value, self.stack.len()),
            Err(StackError::StackOverflow { value, capacity }) => {
                self.observer.overflow(*value, *capacity)
            }
            Err(_) => unreachable!("push only fails with StackOverflow"),
        }
        res
    }

    pub fn pop(&mut self) -> Result<i32, StackError> {
        let res = self.stack.pop();
        match res {
            Ok(value) => self.observer.popped(value, self.stack.len()),
            Err(_) => self.observer.underflow(),
        }
        res
    }

    pub fn stack(&self) -> &BoundedStack {
        &self.stack
    }

    pub fn into_inner(self) -> BoundedStack {
        self.stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Pushed(i32, usize),
        Popped(i32, usize),
        Overflow(i32, usize),
        Underflow,
    }

    #[derive(Debug, Default)]
    struct Recorder {
        events: Vec<Event>,
    }

    impl StackObserver for Recorder {
        fn pushed(&mut self, value: i32, len: usize) {
            self.events.push(Event::Pushed(value, len));
        }

        fn popped(&mut self, value: i32, len: usize) {
            self.events.push(Event::Popped(value, len));
        }

        fn overflow(&mut self, value: i32, capacity: usize) {
            self.events.push(Event::Overflow(value, capacity));
        }

        fn underflow(&mut self) {
            self.events.push(Event::Underflow);
        }
    }

    #[test]
    fn one_event_per_operation() {
        let mut recorder = Recorder::default();
        let mut stack = ObservedStack::new(BoundedStack::new(2).unwrap(), &mut recorder);

        stack.push(10).unwrap();
        stack.push(30).unwrap();
        assert!(stack.push(99).is_err());
        assert_eq!(stack.pop(), Ok(30));
        assert_eq!(stack.pop(), Ok(10));
        assert!(stack.pop().is_err());
        assert!(stack.stack().is_empty());

        use Event::*;
        assert_eq!(
            recorder.events,
            vec![
                Pushed(10, 1),
                Pushed(30, 2),
                Overflow(99, 2),
                Popped(30, 1),
                Popped(10, 0),
                Underflow,
            ]
        );
    }

    #[test]
    fn null_observer_passes_results_through() {
        let mut null = NullObserver;
        let mut stack = ObservedStack::new(BoundedStack::new(1).unwrap(), &mut null);
        stack.push(-1).unwrap();
        assert_eq!(
            stack.push(2),
            Err(StackError::StackOverflow {
                value: 2,
                capacity: 1
            })
        );

        let inner = stack.into_inner();
        assert_eq!(inner.peek(), Some(-1));
    }
}
