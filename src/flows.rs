//! Request handlers for the GitHub authenticator.

pub mod authorize;
pub mod callback;

pub use authorize::*;

// self
use crate::{
	_prelude::*,
	auth::SessionId,
	config::AuthenticatorConfig,
	metadata::AuthenticatorMetadata,
	session::SessionStore,
};

/// Inbound request as seen by the authenticator.
///
/// Only the verb and the caller's session matter; bodies and query parameters are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticationRequest {
	/// HTTP method of the request.
	pub method: Method,
	/// Session the request is bound to.
	pub session: SessionId,
}
impl AuthenticationRequest {
	/// Creates a request with an arbitrary method.
	pub fn new(method: Method, session: SessionId) -> Self {
		Self { method, session }
	}

	/// Shorthand for a GET request.
	pub fn get(session: SessionId) -> Self {
		Self::new(Method::GET, session)
	}

	/// Shorthand for a POST request.
	pub fn post(session: SessionId) -> Self {
		Self::new(Method::POST, session)
	}
}

/// Handles authentication requests for one configured GitHub authenticator.
///
/// The authenticator owns the immutable configuration and the two host collaborators it
/// talks to: the caller-bound session store and the metadata describing where the
/// authenticator is mounted. It keeps no per-request state of its own, so one value can
/// serve concurrent requests.
#[derive(Clone)]
pub struct Authenticator {
	/// Configuration read by every request.
	pub config: Arc<AuthenticatorConfig>,
	/// Session store holding the pending `state`.
	pub sessions: Arc<dyn SessionStore>,
	/// Metadata used to derive the callback URI.
	pub metadata: Arc<dyn AuthenticatorMetadata>,
}
impl Authenticator {
	/// Creates an authenticator from its configuration and collaborators.
	pub fn new(
		config: impl Into<Arc<AuthenticatorConfig>>,
		sessions: Arc<dyn SessionStore>,
		metadata: Arc<dyn AuthenticatorMetadata>,
	) -> Self {
		Self { config: config.into(), sessions, metadata }
	}
}
impl Debug for Authenticator {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Authenticator")
			.field("client_id", &self.config.client_id)
			.field("authorization_endpoint", &self.config.endpoints.authorization.as_str())
			.finish()
	}
}
