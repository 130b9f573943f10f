use super::QueueBuilder;
use crate::{in_memory::Queue, Codec, MessageQueue};
use di::{exactly_one, singleton, singleton_as_self, Ref, ServiceCollection};

impl QueueBuilder {
    /// Configures the message queue with in-memory storage.
    ///
    /// # Remarks
    ///
    /// The in-memory queue is registered as itself and as a [message queue](MessageQueue).
    pub fn in_memory(&mut self) -> &mut Self {
        self.in_memory = true;
        self
    }
}

pub(super) fn add_in_memory(services: &mut ServiceCollection) {
    services
        .try_add(
            singleton_as_self::<Queue>()
                .depends_on(exactly_one::<Codec>())
                .from(|sp| {
                    let codec = sp.get_required::<Codec>();
                    Ref::new(Queue::new(Codec::clone(&codec)))
                }),
        )
        .try_add(
            singleton::<dyn MessageQueue, Queue>()
                .depends_on(exactly_one::<Queue>())
                .from(|sp| {
                    let queue: Ref<dyn MessageQueue> = sp.get_required::<Queue>();
                    queue
                }),
        );
}
