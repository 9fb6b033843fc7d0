//! Authenticator-level error types shared across flows, configuration, and session storage.

// self
use crate::_prelude::*;

/// Authenticator-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical authenticator error returned to the host's dispatch layer.
///
/// None of these are retried locally. The host decides how each variant is rendered.
#[derive(Debug, ThisError)]
pub enum Error {
	/// The request used a verb other than GET; nothing was written or emitted.
	#[error("HTTP method {method} is not allowed for this authenticator.")]
	MethodNotAllowed {
		/// Method carried by the rejected request.
		method: String,
	},
	/// The callback URI could not be derived from the authenticator metadata.
	#[error(transparent)]
	RedirectUri(#[from] RedirectUriError),
	/// Session-store failure; no redirect was issued.
	#[error("{0}")]
	Session(
		#[from]
		#[source]
		crate::session::SessionError,
	),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// The redirect could not be rendered as an HTTP response.
	#[error("Redirect response could not be constructed.")]
	Http(#[from] oauth2::http::Error),
	/// The `state` returned on the callback leg does not match the pending flow.
	#[error("Authorization state mismatch: {reason}.")]
	StateMismatch {
		/// Which check failed.
		reason: &'static str,
	},
}
impl Error {
	/// Returns true when the failure is the method-not-allowed outcome.
	pub fn is_method_not_allowed(&self) -> bool {
		matches!(self, Self::MethodNotAllowed { .. })
	}
}

/// Configuration loading and validation failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Configuration document could not be deserialized.
	#[error("Configuration is malformed at `{path}`.")]
	Malformed {
		/// Path to the offending field (`.` when the document itself is broken).
		path: String,
		/// Underlying JSON failure.
		#[source]
		source: serde_json::Error,
	},
	/// An endpoint URL does not use HTTPS.
	#[error("The {endpoint} endpoint must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
	/// The custom scope string cannot be normalized.
	#[error("Configured scopes are invalid.")]
	InvalidScope(#[from] crate::auth::ScopeValidationError),
}
impl From<serde_path_to_error::Error<serde_json::Error>> for ConfigError {
	fn from(e: serde_path_to_error::Error<serde_json::Error>) -> Self {
		let path = e.path().to_string();

		Self::Malformed { path, source: e.into_inner() }
	}
}

/// Failures raised while computing the callback (redirect) URI.
#[derive(Debug, ThisError)]
pub enum RedirectUriError {
	/// The host could not supply the authenticator's URI.
	#[error("Authenticator metadata is unavailable.")]
	Metadata {
		/// Collaborator failure.
		#[source]
		source: BoxError,
	},
	/// The authenticator URI is not an absolute, well-formed URL.
	#[error("Authenticator URI `{uri}` is not a valid absolute URL.")]
	Malformed {
		/// Raw value supplied by the metadata collaborator.
		uri: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// The authenticator URI cannot carry a path (e.g., `mailto:`).
	#[error("Authenticator URI `{uri}` cannot be extended with a callback path.")]
	CannotBeABase {
		/// Raw value supplied by the metadata collaborator.
		uri: String,
	},
}
impl RedirectUriError {
	/// Wraps a metadata collaborator failure.
	pub fn metadata(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Metadata { source: Box::new(src) }
	}
}
