//! Collection implementations
//!
//! Both implementations keep each single-document mutation atomic; neither
//! guards the store's read-then-replace vote path.

mod error;
mod memory;
mod post;

pub use memory::MemoryPostCollection;
pub use post::PgPostCollection;
