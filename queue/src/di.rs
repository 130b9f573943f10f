mod builder;

pub use builder::QueueBuilder;

use crate::{message::Registry, Codec};
use cfg_if::cfg_if;
use di::{exactly_one, existing_as_self, singleton_as_self, Ref, ServiceCollection};

cfg_if! {
    if #[cfg(feature = "mem")] {
        mod mem;
    }
}

fn merge(mut registries: Vec<Registry>) -> Registry {
    if let Some(mut merged) = registries.pop() {
        for registry in registries.drain(..) {
            merged.merge(registry);
        }

        merged
    } else {
        Registry::default()
    }
}

/// Provides the extension functions for message queues.
pub trait QueueExt: Sized {
    /// Adds the message queue services.
    ///
    /// # Arguments
    ///
    /// * `setup` - the function used to setup the [queue builder](QueueBuilder)
    fn add_message_queue<F>(&mut self, setup: F) -> &mut Self
    where
        F: FnOnce(&mut QueueBuilder);
}

impl QueueExt for ServiceCollection {
    fn add_message_queue<F>(&mut self, setup: F) -> &mut Self
    where
        F: FnOnce(&mut QueueBuilder),
    {
        let mut builder = QueueBuilder::default();

        setup(&mut builder);

        let registry = merge(builder.registries);
        let options = builder.options;

        self.try_add(existing_as_self(registry)).try_add(
            singleton_as_self::<Codec>()
                .depends_on(exactly_one::<Registry>())
                .from(move |sp| Ref::new(Codec::from_options(sp.get_required::<Registry>(), &options))),
        );

        #[cfg(feature = "mem")]
        if builder.in_memory {
            mem::add_in_memory(self);
        }

        self
    }
}
