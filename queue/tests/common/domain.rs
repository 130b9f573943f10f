use queue::message::{Create, InvalidMessageBody, Kind, Message, Params, ParamsExt};
use queue::{message, registry, OwnerId};
use serde_json::json;
use std::any::Any;

// since this is a test crate, the test configuration needs to be
// specified in order to expand macros
//
// RUSTFLAGS='--cfg test' cargo expand

#[registry]
mod messages {
    #[message]
    #[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
    pub struct WelcomeEmail {
        pub template: String,
    }

    impl WelcomeEmail {
        pub fn new<O: Into<OwnerId>, S: Into<String>>(owner: O, template: S) -> Self {
            Self {
                template: template.into(),
                owner: owner.into(),
            }
        }
    }

    #[message(kind = "urn:profile:updated")]
    #[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
    pub struct ProfileUpdated {
        #[serde(default)]
        pub fields: Vec<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub display_name: Option<String>,
    }

    impl ProfileUpdated {
        pub fn new<O: Into<OwnerId>>(
            owner: O,
            fields: Vec<String>,
            display_name: Option<String>,
        ) -> Self {
            Self {
                fields,
                display_name,
                owner: owner.into(),
            }
        }
    }

    #[message]
    #[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
    pub struct PasswordReset {
        pub token: String,
        pub expires_in: u32,
    }

    impl PasswordReset {
        pub fn new<O: Into<OwnerId>, S: Into<String>>(owner: O, token: S, expires_in: u32) -> Self {
            Self {
                token: token.into(),
                expires_in,
                owner: owner.into(),
            }
        }
    }
}

// implemented by hand with a kind that differs from the type name
#[derive(Debug, PartialEq)]
pub struct Heartbeat {
    owner: OwnerId,
    pub sequence: u64,
}

impl Heartbeat {
    pub fn new<O: Into<OwnerId>>(owner: O, sequence: u64) -> Self {
        Self {
            owner: owner.into(),
            sequence,
        }
    }
}

impl Message for Heartbeat {
    fn owner(&self) -> &OwnerId {
        &self.owner
    }

    fn params(&self) -> Result<Params, InvalidMessageBody> {
        let mut params = Params::new();
        params.insert("sequence".into(), json!(self.sequence));
        Ok(params)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Create for Heartbeat {
    fn kind() -> Kind {
        Kind::new("urn:profile:heartbeat")
    }

    fn create(owner: OwnerId, params: Params) -> Result<Self, InvalidMessageBody> {
        Ok(Self {
            owner,
            sequence: params.required("sequence")?,
        })
    }
}

pub fn heartbeat_kind() -> Kind {
    <Heartbeat as Create>::kind()
}
