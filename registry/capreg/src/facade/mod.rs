//! The two lookup entry points.

use capreg_cache::ServiceSlot;
use capreg_table::Capability;

use crate::face::ServiceConsumer;

/// Ask the consumer's module for `id`, without touching the cache.
///
/// For services that are not worth a cache slot. Every call reaches the
/// module.
pub fn find_service<'m, C>(consumer: &C, id: &str) -> Option<Capability>
where
    C: ServiceConsumer<'m> + ?Sized,
{
    consumer.module().get_interface(id)
}

/// Look up `id` through the consumer's cache slot `slot`.
///
/// The first request for a slot asks the module and memoizes the answer,
/// whether the service was found or not. Every later request is answered
/// from the slot until the consumer is rebound to another module.
///
/// The slot keeps whatever the first `id` produced; pass the slot's own
/// `ServiceSlot::service_id` unless a module publishes the service under an
/// alias.
pub fn lookup_service<'m, C>(consumer: &C, slot: ServiceSlot, id: &str) -> Option<Capability>
where
    C: ServiceConsumer<'m> + ?Sized,
{
    consumer
        .services()
        .get_or_populate(slot, || find_service(consumer, id))
}
