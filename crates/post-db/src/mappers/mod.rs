//! Document <-> entity mappers

mod post;

pub use post::{decode_post, encode_post};
