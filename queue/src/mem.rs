use crate::message::{Kinded, Message};
use crate::{Codec, MessageId, MessageQueue, OwnerId, QueueError};
use async_trait::async_trait;
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard},
};
use tracing::{debug, warn};

/// Represents a message received from a queue.
pub struct Received {
    id: MessageId,
    message: Box<dyn Message>,
}

impl Received {
    /// Gets the [identifier](MessageId) of the received message.
    pub fn id(&self) -> &MessageId {
        &self.id
    }

    /// Gets the received [message](Message).
    pub fn message(&self) -> &dyn Message {
        self.message.as_ref()
    }

    /// Deconstructs the received message into its identifier and message.
    pub fn into_parts(self) -> (MessageId, Box<dyn Message>) {
        (self.id, self.message)
    }
}

/// Represents an in-memory [message queue](MessageQueue).
///
/// # Remarks
///
/// Messages are delivered in the order they are sent and each message is delivered once.
pub struct Queue {
    bodies: Mutex<VecDeque<(MessageId, Vec<u8>)>>,
    codec: Codec,
}

impl Queue {
    /// Initializes a new in-memory [Queue].
    ///
    /// # Arguments
    ///
    /// * `codec` - the [codec](Codec) used to encode and decode messages
    pub fn new<C: Into<Codec>>(codec: C) -> Self {
        Self {
            bodies: Default::default(),
            codec: codec.into(),
        }
    }

    /// Gets the associated [codec](Codec).
    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    /// Gets the number of messages in the queue.
    pub fn len(&self) -> usize {
        self.bodies().len()
    }

    /// Gets a value indicating whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.bodies().is_empty()
    }

    /// Receives the next message in the queue.
    ///
    /// # Arguments
    ///
    /// * `owner` - the [identifier](OwnerId) of the user that owns the message
    ///
    /// # Returns
    ///
    /// The next [received](Received) message or `None` if the queue is empty; otherwise, a
    /// [queue error](QueueError) if the message cannot be decoded.
    ///
    /// # Remarks
    ///
    /// A message that cannot be decoded is still removed from the queue.
    pub async fn receive(&self, owner: OwnerId) -> Result<Option<Received>, QueueError> {
        let Some((id, body)) = self.bodies().pop_front() else {
            return Ok(None);
        };

        match self.codec.decode(owner, &body) {
            Ok(message) => {
                debug!(id = %id, kind = %message.kind(), "received message");
                Ok(Some(Received { id, message }))
            }
            Err(error) => {
                warn!(id = %id, error = %error, "received message could not be decoded");
                Err(error)
            }
        }
    }

    /// Adds a raw message body to the end of the queue.
    ///
    /// # Arguments
    ///
    /// * `body` - the encoded message body
    ///
    /// # Remarks
    ///
    /// This function is intended to simulate messages sent by other producers.
    pub fn push_raw<B: Into<Vec<u8>>>(&self, body: B) -> MessageId {
        let id = MessageId::random();
        self.bodies().push_back((id.clone(), body.into()));
        id
    }

    fn bodies(&self) -> MutexGuard<'_, VecDeque<(MessageId, Vec<u8>)>> {
        self.bodies
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl From<Queue> for Arc<dyn MessageQueue> {
    fn from(value: Queue) -> Self {
        Arc::new(value)
    }
}

#[async_trait]
impl MessageQueue for Queue {
    async fn send_message(&self, message: &dyn Message) -> Result<MessageId, QueueError> {
        let body = self.codec.encode(message)?;
        let id = self.push_raw(body);

        debug!(id = %id, kind = %message.kind(), owner = %message.owner(), "sent message");

        Ok(id)
    }
}
