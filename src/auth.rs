//! Auth-domain identifiers, scope sets, client secrets, and per-flow state tokens.

pub mod id;
pub mod scope;
pub mod secret;
pub mod state;

pub use id::*;
pub use scope::*;
pub use secret::*;
pub use state::*;
