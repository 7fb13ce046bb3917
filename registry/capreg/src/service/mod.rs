//! Typed service definitions.
//!
//! A service is a record (usually of function pointers) that a module
//! publishes under a well-known id. `define_service!` declares the record
//! type and ties it to its id, and optionally to a hot cache slot:
//!
//! ```text
//! define_service! {
//!     /// PostScript name retrieval.
//!     pub struct PsNameService for ids::POSTSCRIPT_FONT_NAME, slot = PostScriptName {
//!         pub get_name: fn(u32) -> Option<&'static str>,
//!     }
//! }
//!
//! let ps = face.service::<PsNameService>();
//! ```

use std::any::Any;

use capreg_cache::ServiceSlot;

/// A service record type bound to its id.
pub trait Service: Any + Send + Sync {
    /// The id modules publish this service under.
    const ID: &'static str;

    /// The cache slot that memoizes this service, if it is a hot one.
    const SLOT: Option<ServiceSlot> = None;
}

/// Declare a service record type and implement [`Service`] for it.
///
/// The id must be given as a path to a `&'static str` constant. Adding
/// `slot = Variant` routes typed lookups through that `ServiceSlot`.
#[macro_export]
macro_rules! define_service {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident for $id:path $(, slot = $slot:ident)? {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::Service for $name {
            const ID: &'static str = $id;
            $(
                const SLOT: ::core::option::Option<$crate::ServiceSlot> =
                    ::core::option::Option::Some($crate::ServiceSlot::$slot);
            )?
        }
    };
}
