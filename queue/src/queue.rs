use crate::encoding::EncodingError;
use crate::message::{Message, MessageError};
use crate::MessageId;
use async_trait::async_trait;
use std::error::Error;
use thiserror::Error;

/// Represents the possible queue errors.
#[derive(Error, Debug)]
pub enum QueueError {
    /// Indicates a [message](Message) could not be wrapped or unwrapped.
    #[error(transparent)]
    Message(#[from] MessageError),

    /// Indicates a message body could not be encoded or decoded.
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// Indicates the underlying queue transport failed.
    #[error(transparent)]
    Transport(Box<dyn Error + Send + Sync>),
}

/// Defines the behavior of a message queue.
///
/// # Remarks
///
/// All concrete queue implementations are expected to convert messages to and from message
/// bodies using a [codec](crate::Codec).
#[async_trait]
pub trait MessageQueue: Send + Sync {
    /// Sends a message to the queue.
    ///
    /// # Arguments
    ///
    /// * `message` - the [message](Message) to send
    ///
    /// # Returns
    ///
    /// The unique [identifier](MessageId) of the sent message; otherwise, a [queue error](QueueError).
    async fn send_message(&self, message: &dyn Message) -> Result<MessageId, QueueError>;
}
