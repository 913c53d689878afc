use thiserror::Error;

/// Errors returned by the sort entry points.
///
/// Broken internal invariants are not represented here, they are `debug_assert!`s.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// An argument other than the radix configuration is unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// Scratch memory (auxiliary buffer or histograms) could not be reserved.
    #[error("could not allocate {elements} elements of scratch memory")]
    AllocationError { elements: usize },
    /// The element width and digit width do not form a valid radix configuration.
    #[error("invalid radix configuration: {digit_bits}-bit digits over {element_bits}-bit elements")]
    StateFailure { element_bits: u32, digit_bits: u32 },
    /// A partition needed the small-array sorter but none was supplied.
    #[error("no small-array sorter for a partition of {len} elements")]
    NotImplemented { len: usize },
}

/// Numeric status codes, one per [`SortError`] kind plus success.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Ok = 0,
    InvalidArgument = 1,
    AllocationError = 2,
    NotImplemented = 3,
    StateFailure = 4,
}

impl SortError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SortError::InvalidArgument(_) => ErrorCode::InvalidArgument,
            SortError::AllocationError { .. } => ErrorCode::AllocationError,
            SortError::StateFailure { .. } => ErrorCode::StateFailure,
            SortError::NotImplemented { .. } => ErrorCode::NotImplemented,
        }
    }
}

impl From<Result<(), SortError>> for ErrorCode {
    fn from(result: Result<(), SortError>) -> Self {
        match result {
            Ok(()) => ErrorCode::Ok,
            Err(e) => e.code(),
        }
    }
}
