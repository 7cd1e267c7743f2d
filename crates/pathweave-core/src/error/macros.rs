//! Error macros for pathweave

/// Return early with an invalid argument error
#[macro_export]
macro_rules! bail_invalid {
    ($argument:expr, $reason:expr) => {
        return Err($crate::error::PathError::invalid_argument(
            $argument, $reason,
        ))
    };
}

/// Return early with a not-found error for a vertex
#[macro_export]
macro_rules! bail_not_found {
    ($vertex:expr) => {
        return Err($crate::error::PathError::not_found($vertex))
    };
}
