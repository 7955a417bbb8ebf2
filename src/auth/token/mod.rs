//! Bearer token validation

mod hydra;
mod types;

pub use hydra::HydraTokenValidator;
#[cfg(test)]
pub use types::MockTokenValidator;
pub use types::{TokenData, TokenValidator};
