pub mod classify;
pub mod subscriber;
pub mod workspace;

pub use bantay_traits::*;
