//! Ports - interfaces implemented by the storage layer

mod collection;

pub use collection::PostCollection;
