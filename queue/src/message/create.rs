use super::{InvalidMessageBody, Kind, Message, Params};
use crate::OwnerId;

/// Defines the behavior of a message that can be created from its parameters.
pub trait Create: Message + Sized + 'static {
    /// Gets the message [kind](Kind).
    ///
    /// # Remarks
    ///
    /// The kind is the type tag carried on the wire. It must be stable across builds and
    /// deployments, so it is never derived from the Rust type name.
    fn kind() -> Kind;

    /// Creates a new message.
    ///
    /// # Arguments
    ///
    /// * `owner` - the [identifier](OwnerId) of the user that owns the message
    /// * `params` - the message [parameters](Params)
    ///
    /// # Returns
    ///
    /// A new message; otherwise, an [error](InvalidMessageBody) if the parameters are malformed.
    fn create(owner: OwnerId, params: Params) -> Result<Self, InvalidMessageBody>;
}
