use crate::{message::Registry, QueueOptions};

/// Represents the builder used to configure message queue services.
#[derive(Default)]
pub struct QueueBuilder {
    /// Gets the [registries](Registry) of the message types sent and received.
    ///
    /// # Remarks
    ///
    /// All registries are merged into a single registry. When more than one registry contains
    /// the same message kind, the registry added last wins.
    pub registries: Vec<Registry>,

    /// Gets or sets the [queue options](QueueOptions).
    pub options: QueueOptions,

    #[cfg_attr(not(feature = "mem"), allow(dead_code))]
    pub(crate) in_memory: bool,
}

impl QueueBuilder {
    /// Adds a [registry](Registry) of message types.
    ///
    /// # Arguments
    ///
    /// * `registry` - the [registry](Registry) to add
    pub fn registry(&mut self, registry: Registry) -> &mut Self {
        self.registries.push(registry);
        self
    }

    /// Configures the [queue options](QueueOptions).
    ///
    /// # Arguments
    ///
    /// * `options` - the [queue options](QueueOptions) to use
    pub fn options(&mut self, options: QueueOptions) -> &mut Self {
        self.options = options;
        self
    }
}
