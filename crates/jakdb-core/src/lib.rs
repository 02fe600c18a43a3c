// crates/jakdb-core/src/lib.rs

pub mod api; // JSON views for the JS/WASM boundary
pub mod error;
pub mod geo;
pub mod loader; // The public loader
pub mod model;
pub mod search; // Filter engine + proximity ranker
pub mod text;
pub mod traits;
// Shared Raw Input (Used by the loader)
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::error::{JakDbError, Result};
pub use crate::geo::{format_distance, haversine_distance};
pub use crate::model::{
    DbStats, DefaultBackend, DefaultJakDb, Facility, JakDb, NearbyHit, StandardBackend,
    KERALA_DISTRICTS,
};
pub use crate::text::{equals_folded, fold_key};
pub use crate::traits::{JakBackend, NameMatch};

/// jakdb prelude: bring common types and traits into scope for examples.
pub mod prelude {
    #![allow(unused_imports)]

    pub use crate::api::FacilityView;
    pub use crate::error::{JakDbError, Result};
    pub use crate::geo::{format_distance, haversine_distance};
    pub use crate::model::{
        DbStats, DefaultBackend, DefaultJakDb, Facility, JakDb, NearbyHit, StandardBackend,
        KERALA_DISTRICTS,
    };
    pub use crate::text::{equals_folded, fold_key};
    pub use crate::traits::{JakBackend, NameMatch};
}
