mod codec;
mod envelope;
mod id;
mod options;
mod owner;
mod queue;

pub use codec::Codec;
pub use envelope::{wrap, Envelope};
pub use id::MessageId;
pub use options::QueueOptions;
pub use owner::OwnerId;
pub use queue::{MessageQueue, QueueError};

/// Contains support for envelope encoding and decoding.
pub mod encoding;

/// Contains the foundational support for messages.
pub mod message;

pub use queue_macros::*;

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "mem")] {
        mod mem;

        /// Provides an in-memory message queue.
        ///
        /// # Remarks
        ///
        /// An in-memory queue is typically only useful for testing purposes.
        pub mod in_memory {
            use super::*;
            pub use mem::{Queue, Received};
        }
    }
}

cfg_if! {
    if #[cfg(feature = "di")] {
        /// Provides Dependency Injection (DI) extensions.
        pub mod di;
    }
}
