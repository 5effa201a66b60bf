//! Authentication adapters.
//!
//! Implementations of the `SessionValidator` port:
//!
//! - `passthrough` - Verification disabled, fixed caller identity
//! - `mock` - Token map for tests

mod mock;
mod passthrough;

pub use mock::MockSessionValidator;
pub use passthrough::{PassthroughSessionValidator, DISABLED_AUTH_CALLER};
