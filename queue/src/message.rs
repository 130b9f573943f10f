mod create;
mod error;
mod factory;
mod kind;
mod msg;
mod params;
mod registry;

pub use create::Create;
pub use error::{InvalidMessageBody, MessageError};
pub use factory::{Factory, FnFactory, TypeFactory};
pub use kind::Kind;
pub use msg::{Kinded, Message};
pub use params::{from_params, to_params, Params, ParamsExt};
pub use registry::Registry;
