use super::{Create, InvalidMessageBody, Kind, Message, Params};
use crate::OwnerId;
use std::{any::TypeId, marker::PhantomData};

/// Defines the behavior of a [message](Message) factory.
pub trait Factory: Send + Sync {
    /// Gets the [kind](Kind) of message the factory creates.
    fn kind(&self) -> &Kind;

    /// Creates a new message.
    ///
    /// # Arguments
    ///
    /// * `owner` - the [identifier](OwnerId) of the user that owns the message
    /// * `params` - the message [parameters](Params)
    fn create(&self, owner: OwnerId, params: Params) -> Result<Box<dyn Message>, InvalidMessageBody>;

    /// Gets the [type identifier](TypeId) of the message the factory creates, if known.
    fn creates(&self) -> Option<TypeId> {
        None
    }
}

/// Represents a [factory](Factory) for a [creatable](Create) message type.
pub struct TypeFactory<T> {
    kind: Kind,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Create> TypeFactory<T> {
    /// Initializes a new [TypeFactory] using the [kind](Create::kind) of the message type.
    pub fn new() -> Self {
        Self::with_kind(<T as Create>::kind())
    }

    /// Initializes a new [TypeFactory] for an alternate [kind](Kind).
    ///
    /// # Arguments
    ///
    /// * `kind` - the kind the message type is created for
    pub fn with_kind<K: Into<Kind>>(kind: K) -> Self {
        Self {
            kind: kind.into(),
            _marker: PhantomData,
        }
    }
}

impl<T: Create> Default for TypeFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Create> Factory for TypeFactory<T> {
    fn kind(&self) -> &Kind {
        &self.kind
    }

    fn create(&self, owner: OwnerId, params: Params) -> Result<Box<dyn Message>, InvalidMessageBody> {
        Ok(Box::new(T::create(owner, params)?))
    }

    fn creates(&self) -> Option<TypeId> {
        Some(TypeId::of::<T>())
    }
}

type CreateFn =
    dyn Fn(OwnerId, Params) -> Result<Box<dyn Message>, InvalidMessageBody> + Send + Sync;

/// Represents a [factory](Factory) backed by a function.
pub struct FnFactory {
    kind: Kind,
    create: Box<CreateFn>,
}

impl FnFactory {
    /// Initializes a new [FnFactory].
    ///
    /// # Arguments
    ///
    /// * `kind` - the [kind](Kind) of message the factory creates
    /// * `create` - the function used to create messages
    pub fn new<K, F>(kind: K, create: F) -> Self
    where
        K: Into<Kind>,
        F: Fn(OwnerId, Params) -> Result<Box<dyn Message>, InvalidMessageBody> + Send + Sync + 'static,
    {
        Self {
            kind: kind.into(),
            create: Box::new(create),
        }
    }
}

impl Factory for FnFactory {
    fn kind(&self) -> &Kind {
        &self.kind
    }

    fn create(&self, owner: OwnerId, params: Params) -> Result<Box<dyn Message>, InvalidMessageBody> {
        (self.create)(owner, params)
    }
}
