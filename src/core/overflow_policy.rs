//! Overflow policies for bounded async queues
//!
//! The default async queue is unbounded and never drops records. These
//! policies only apply when a capacity is configured with
//! [`LoggerBuilder::async_bounded`](crate::LoggerBuilder::async_bounded).

use std::fmt;
use std::time::Duration;

/// Policy for handling a full bounded queue
///
/// # Example
///
/// ```
/// use console_logger::OverflowPolicy;
/// use std::time::Duration;
///
/// // Default behavior: wait for room, never drop
/// assert_eq!(OverflowPolicy::default(), OverflowPolicy::Block);
///
/// // Wait a little, then drop
/// let policy = OverflowPolicy::BlockWithTimeout(Duration::from_millis(100));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Block until space is available
    ///
    /// Producers slow down to the writer's pace; nothing is lost.
    #[default]
    Block,

    /// Block with timeout, then drop
    BlockWithTimeout(Duration),

    /// Drop the new record immediately when the queue is full
    DropNewest,
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverflowPolicy::Block => write!(f, "Block"),
            OverflowPolicy::BlockWithTimeout(d) => write!(f, "BlockWithTimeout({:?})", d),
            OverflowPolicy::DropNewest => write!(f, "DropNewest"),
        }
    }
}
