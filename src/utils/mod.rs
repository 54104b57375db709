pub mod json;

pub use json::{decode, encode};
