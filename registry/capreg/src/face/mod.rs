//! Consumers of module services.

use std::fmt;

use capreg_cache::{CacheConfig, ServiceCache, ServiceSlot};
use capreg_table::Capability;

use crate::facade;
use crate::module::{same_module, Module};
use crate::service::Service;

/// An object that requests services on behalf of its user.
///
/// It exposes the module it is bound to and the cache it owns, and can be
/// rebound to another module living for `'m`. Implementors only store the
/// new module in `bind_module`; `rebind` owns the reset.
pub trait ServiceConsumer<'m> {
    fn module(&self) -> &dyn Module;

    fn services(&self) -> &ServiceCache;

    fn services_mut(&mut self) -> &mut ServiceCache;

    /// Replace the bound module without touching the cache.
    fn bind_module(&mut self, module: &'m dyn Module);

    /// Bind this consumer to `module`.
    ///
    /// If the module differs from the current one every cache slot goes back
    /// to `Uninitialized`; rebinding to the same module keeps the cache.
    /// Returns whether the cache was reset.
    fn rebind(&mut self, module: &'m dyn Module) -> bool {
        if same_module(self.module(), module) {
            return false;
        }
        tracing::debug!(
            from = self.module().name(),
            to = module.name(),
            "rebinding consumer; resetting service cache"
        );
        self.bind_module(module);
        self.services_mut().reset();
        true
    }
}

/// A face: the standard service consumer.
///
/// Borrows its module (one module serves many faces) and owns a
/// `ServiceCache` that lives and dies with it.
pub struct Face<'m> {
    module: &'m dyn Module,
    services: ServiceCache,
}

impl<'m> Face<'m> {
    /// Bind a new face to `module` with an empty cache.
    pub fn new(module: &'m dyn Module) -> Self {
        Self::with_config(module, CacheConfig::default())
    }

    pub fn with_config(module: &'m dyn Module, config: CacheConfig) -> Self {
        Face {
            module,
            services: ServiceCache::with_config(config),
        }
    }

    /// The module this face is bound to.
    pub fn module(&self) -> &'m dyn Module {
        self.module
    }

    pub fn services(&self) -> &ServiceCache {
        &self.services
    }

    /// Bind this face to `module`, resetting the cache if it changed.
    ///
    /// See `ServiceConsumer::rebind`.
    pub fn rebind(&mut self, module: &'m dyn Module) -> bool {
        ServiceConsumer::rebind(self, module)
    }

    /// Ask the module for `id`, bypassing the cache.
    pub fn find_service(&self, id: &str) -> Option<Capability> {
        facade::find_service(self, id)
    }

    /// Look up `id` through the cache slot `slot`.
    pub fn lookup_service(&self, slot: ServiceSlot, id: &str) -> Option<Capability> {
        facade::lookup_service(self, slot, id)
    }

    /// Look up a hot service under its canonical id.
    pub fn lookup_slot(&self, slot: ServiceSlot) -> Option<Capability> {
        facade::lookup_service(self, slot, slot.service_id())
    }

    /// Look up a typed service.
    ///
    /// Services bound to a slot go through the cache; the rest go straight
    /// to the module.
    ///
    /// # Panics
    ///
    /// Panics if the module published a payload of another type under
    /// `S::ID`. That is a broken service table, not a missing service.
    pub fn service<S: Service>(&self) -> Option<&'static S> {
        let capability = match S::SLOT {
            Some(slot) => self.lookup_service(slot, S::ID),
            None => self.find_service(S::ID),
        }?;
        let Some(service) = capability.downcast::<S>() else {
            panic!(
                "module `{}` published service `{}` with a payload that is not `{}`",
                self.module.name(),
                S::ID,
                std::any::type_name::<S>()
            );
        };
        Some(service)
    }
}

impl<'m> ServiceConsumer<'m> for Face<'m> {
    fn module(&self) -> &dyn Module {
        self.module
    }

    fn services(&self) -> &ServiceCache {
        &self.services
    }

    fn services_mut(&mut self) -> &mut ServiceCache {
        &mut self.services
    }

    fn bind_module(&mut self, module: &'m dyn Module) {
        self.module = module;
    }
}

impl fmt::Debug for Face<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Face")
            .field("module", &self.module.name())
            .field("services", &self.services)
            .finish()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
