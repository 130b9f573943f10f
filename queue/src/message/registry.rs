use super::{Create, Factory, Kind, Message, MessageError, TypeFactory};
use crate::{Envelope, OwnerId};
use std::{any::TypeId, collections::HashMap};
use tracing::{debug, trace, warn};

/// Represents a registry of [message](Message) [factories](Factory).
///
/// # Remarks
///
/// A registry maps the [kind](Kind) carried in an [envelope](Envelope) to the [factory](Factory)
/// that reconstructs the original message. A registry is populated once at startup and is only
/// read afterwards.
#[derive(Default)]
pub struct Registry {
    factories: HashMap<Kind, Box<dyn Factory>>,
}

impl Registry {
    /// Initializes a new [Registry].
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a [creatable](Create) message type using its [kind](Create::kind).
    ///
    /// # Returns
    ///
    /// An [error](MessageError) if a factory has already been registered for the message kind.
    pub fn register<T: Create>(&mut self) -> Result<(), MessageError> {
        self.register_with(TypeFactory::<T>::new())
    }

    /// Registers a [creatable](Create) message type using an alternate [kind](Kind).
    ///
    /// # Arguments
    ///
    /// * `kind` - the alternate kind the message type is created for
    ///
    /// # Remarks
    ///
    /// An alternate kind is typically used to accept messages sent with a legacy type identifier.
    pub fn register_as<T: Create>(&mut self, kind: impl Into<Kind>) -> Result<(), MessageError> {
        self.register_with(TypeFactory::<T>::with_kind(kind))
    }

    /// Registers a message [factory](Factory).
    ///
    /// # Arguments
    ///
    /// * `factory` - the [factory](Factory) to register
    ///
    /// # Returns
    ///
    /// An [error](MessageError) if a factory has already been registered for the same kind.
    pub fn register_with<F>(&mut self, factory: F) -> Result<(), MessageError>
    where
        F: Factory + 'static,
    {
        let kind = factory.kind().clone();

        if self.factories.contains_key(&kind) {
            Err(MessageError::DuplicateType(kind))
        } else {
            trace!(kind = %kind, "registered message factory");
            self.factories.insert(kind, Box::new(factory));
            Ok(())
        }
    }

    /// Merges another registry into the current instance.
    ///
    /// # Arguments
    ///
    /// * `other` - the [registry](Registry) to merge into the current instance
    ///
    /// # Remarks
    ///
    /// Factories already registered in the current instance take precedence.
    pub fn merge(&mut self, other: Registry) {
        for (kind, factory) in other.factories {
            self.factories.entry(kind).or_insert(factory);
        }
    }

    /// Gets a value indicating whether the specified [kind](Kind) has been registered.
    pub fn contains(&self, kind: &str) -> bool {
        self.factories.contains_key(kind)
    }

    /// Gets the registered [kinds](Kind).
    pub fn kinds(&self) -> impl Iterator<Item = &Kind> {
        self.factories.keys()
    }

    /// Gets the number of registered factories.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Gets a value indicating whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Unwraps the specified envelope into the original message.
    ///
    /// # Arguments
    ///
    /// * `owner` - the [identifier](OwnerId) of the user that owns the message
    /// * `envelope` - the [envelope](Envelope) to unwrap
    ///
    /// # Returns
    ///
    /// The unwrapped [message](Message); otherwise, an [error](MessageError) if the message
    /// kind is unknown or the payload is rejected by the message factory.
    pub fn unwrap(&self, owner: OwnerId, envelope: Envelope) -> Result<Box<dyn Message>, MessageError> {
        let (kind, payload) = envelope.into_parts();

        let Some(factory) = self.factories.get(&kind) else {
            warn!(kind = %kind, owner = %owner, "envelope contains an unknown message type");
            return Err(MessageError::UnknownType(kind));
        };

        debug!(kind = %kind, owner = %owner, "unwrapping message");

        factory.create(owner, payload).map_err(|error| {
            warn!(kind = %kind, error = %error, "message body was rejected");
            MessageError::invalid_body(kind, error)
        })
    }

    /// Unwraps the specified envelope into a message of a known type.
    ///
    /// # Arguments
    ///
    /// * `owner` - the [identifier](OwnerId) of the user that owns the message
    /// * `envelope` - the [envelope](Envelope) to unwrap
    ///
    /// # Remarks
    ///
    /// The envelope must contain a message of the requested type, either by its own
    /// [kind](Create::kind) or by an alternate kind registered for the type. The message type
    /// does not need to be registered under its own kind.
    pub fn unwrap_as<T: Create>(&self, owner: OwnerId, envelope: Envelope) -> Result<T, MessageError> {
        let expected = <T as Create>::kind();
        let (kind, payload) = envelope.into_parts();
        let alternate = self
            .factories
            .get(&kind)
            .and_then(|factory| factory.creates())
            .map(|id| id == TypeId::of::<T>())
            .unwrap_or_default();

        if kind != expected && !alternate {
            return Err(MessageError::UnexpectedType {
                expected,
                actual: kind,
            });
        }

        debug!(kind = %kind, owner = %owner, "unwrapping message");
        T::create(owner, payload).map_err(|error| MessageError::invalid_body(kind, error))
    }
}
