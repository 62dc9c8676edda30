//! Store services
//!
//! The store itself holds no locks and no mutable state; all
//! synchronization is left to the document collection.

pub mod context;
pub mod post;
pub mod validation;

pub use context::{ContextError, StoreContext};
pub use post::{PostStore, StoreSettings};
pub use validation::validate_form;
