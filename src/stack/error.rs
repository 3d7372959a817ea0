/// Why a stack operation was rejected.
///
/// Every variant leaves the stack exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StackError {
    #[error("stack capacity must be positive, got {capacity}")]
    InvalidCapacity { capacity: usize },

    #[error("stack overflow: cannot push {value}, capacity {capacity} reached")]
    StackOverflow { value: i32, capacity: usize },

    #[error("stack underflow: nothing to pop")]
    StackUnderflow,
}
