//! Binary max-heap construction and heap sort over slices.
//!
//! | Feature | Description |
//! | ------- | ----------- |
//! | `tracing` | Heap builds and sorts emit a `tracing::trace!` event with the operation name and slice length. Off by default. |

#[cfg(feature = "tracing")]
macro_rules! trace_op {
    ($op:literal, $len:expr) => {
        tracing::trace!(op = $op, len = $len)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_op {
    ($op:literal, $len:expr) => {
        let _ = $len;
    };
}

pub mod demo;
pub mod heap;
