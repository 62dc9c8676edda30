//! Form validation ahead of store calls

use post_core::{StoreError, StoreResult};
use tracing::warn;
use validator::Validate;

/// Validate a creation payload, reporting any failure as `BadRequest`
pub fn validate_form<T: Validate>(form: &T) -> StoreResult<()> {
    form.validate().map_err(|errors| {
        warn!(%errors, "form validation failed");
        StoreError::BadRequest
    })
}
