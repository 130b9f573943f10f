extern crate proc_macro;

mod message;
mod registry;

use message::MessageAttribute;
use proc_macro::TokenStream;
use registry::RegistryAttribute;
use syn::parse_macro_input;

/// Represents the metadata used to identify a message structure.
///
/// # Arguments
///
/// * `kind` - the optional type identifier of the message, which defaults to the structure name
///
/// # Remarks
///
/// The structure must have named fields and derive `serde::Serialize` and `serde::Deserialize`.
/// This attribute must be placed before the derive attributes. An `owner` field, which is not
/// serialized, is added to the structure.
#[proc_macro_attribute]
pub fn message(metadata: TokenStream, input: TokenStream) -> TokenStream {
    let attribute = parse_macro_input!(metadata as MessageAttribute);
    message::expand(attribute, input.into()).into()
}

/// Represents the metadata used to generate a message registry factory function.
///
/// # Arguments
///
/// * `name` - the name of the generated `Registry` factory function, which defaults to `registry`
///
/// # Remarks
///
/// This attribute can only be applied to a module. Every structure in the module with the
/// `#[message]` attribute is registered.
#[proc_macro_attribute]
pub fn registry(metadata: TokenStream, input: TokenStream) -> TokenStream {
    let attribute = parse_macro_input!(metadata as RegistryAttribute);
    registry::expand(attribute, input.into()).into()
}
