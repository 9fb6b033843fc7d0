//! Session-store contract and the built-in in-memory implementation.
//!
//! The host owns session storage and serializes access per session; the authenticator only
//! overwrites the pending [`STATE_KEY`] on the redirect leg and reads-then-removes it on the
//! callback leg.

pub mod memory;

pub use memory::MemorySessionStore;

// self
use crate::{_prelude::*, auth::SessionId};

/// Session attribute holding the pending authorization `state`.
pub const STATE_KEY: &str = "state";

/// Caller-bound attribute storage supplied by the host.
pub trait SessionStore
where
	Self: Send + Sync,
{
	/// Stores `value` under `key`, replacing any previous value.
	fn put(&self, session: &SessionId, key: &str, value: String) -> Result<(), SessionError>;

	/// Returns the value stored under `key`, if present.
	fn get(&self, session: &SessionId, key: &str) -> Result<Option<String>, SessionError>;

	/// Removes and returns the value stored under `key`.
	fn remove(&self, session: &SessionId, key: &str) -> Result<Option<String>, SessionError>;
}

/// Error type produced by [`SessionStore`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum SessionError {
	/// Backend-level failure for the storage engine.
	#[error("Session backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}
