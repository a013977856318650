//! The ownership capability checked by every mutating resource handler.
//!
//! Resources that belong to a single user implement [`Owned`]; handlers call
//! [`ensure_owner`] after the existence lookup and before any write. Policy:
//! a missing resource is reported as NotFound first, an ownership mismatch as
//! Forbidden -- identical across all resources.

use crate::error::CoreError;
use crate::types::DbId;

/// A resource with a single owning user.
pub trait Owned {
    /// Entity name used in error messages (e.g. `"Course"`).
    const ENTITY: &'static str;

    /// The id of the user who owns this resource.
    fn owner_id(&self) -> DbId;
}

/// Whether `actor_id` owns `resource`. Value equality on ids.
pub fn is_owner<T: Owned>(actor_id: DbId, resource: &T) -> bool {
    resource.owner_id() == actor_id
}

/// Reject with [`CoreError::Forbidden`] unless `actor_id` owns `resource`.
pub fn ensure_owner<T: Owned>(actor_id: DbId, resource: &T) -> Result<(), CoreError> {
    if is_owner(actor_id, resource) {
        Ok(())
    } else {
        Err(CoreError::Forbidden(format!(
            "You do not own this {}",
            T::ENTITY.to_lowercase()
        )))
    }
}
