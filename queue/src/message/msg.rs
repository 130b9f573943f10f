use super::{Create, InvalidMessageBody, Kind, Params};
use crate::OwnerId;
use std::any::Any;

/// Defines the behavior of a message instance with a [kind](Kind).
///
/// # Remarks
///
/// This trait is implemented for every [creatable](Create) message type using the
/// [kind](Create::kind) of the type. A message is therefore always wrapped with the same kind
/// its type is registered with.
pub trait Kinded {
    /// Gets the message [kind](Kind).
    fn kind(&self) -> Kind;
}

impl<T: Create> Kinded for T {
    fn kind(&self) -> Kind {
        <T as Create>::kind()
    }
}

/// Defines the behavior of a message.
pub trait Message: Kinded + Send + Sync {
    /// Gets the identifier of the user that owns the message.
    fn owner(&self) -> &OwnerId;

    /// Gets the message parameters.
    ///
    /// # Returns
    ///
    /// The [parameters](Params) carried as the message payload; otherwise, an
    /// [error](InvalidMessageBody) if the message cannot be represented as parameters.
    fn params(&self) -> Result<Params, InvalidMessageBody>;

    /// Gets the message as a dynamic type.
    fn as_any(&self) -> &dyn Any;
}
