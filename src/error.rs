//! Error taxonomy for list operations.
//!
//! Every fallible operation reports its failure synchronously through a
//! [`ListError`] in its return value. Diagnostic detail is additionally
//! emitted on the `log` facade at the rejection site, so callers that only
//! check the flag still leave a trail for whoever wired up a logger.

use thiserror::Error;

/// The ways a list operation can fail.
///
/// On any failure the list's prior committed state is fully intact: no
/// partial relinking, no changed positions, no resized backing store.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// Creation was asked for zero nodes. A list always holds at least one.
    #[error("node count must be at least 1")]
    InvalidCount,

    /// A position index fell outside the operation's valid range.
    #[error("position {position} is out of range for a list of {count} nodes")]
    OutOfRange {
        /// The rejected position argument.
        position: usize,
        /// The node count at the time of the call.
        count: usize,
    },

    /// A delete would have shrunk the list below one node.
    ///
    /// Dropping the list is the way to release the last node.
    #[error("cannot delete the last remaining node; drop the list instead")]
    MinimumSize,

    /// The backing store could not acquire memory for a grown node array.
    #[error("failed to allocate backing storage for {requested} nodes")]
    AllocationFailure {
        /// The node count the store was being grown to.
        requested: usize,
    },
}
