//! Host-provided authenticator metadata and callback-URI derivation.

// self
use crate::{_prelude::*, error::RedirectUriError};

/// Path segment appended to the authenticator URI to form the registered callback.
pub const CALLBACK_PATH_SEGMENT: &str = "callback";

/// Failure reported by an [`AuthenticatorMetadata`] implementation.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Authenticator metadata lookup failed: {message}.")]
pub struct MetadataError {
	/// Human-readable error payload.
	pub message: String,
}
impl MetadataError {
	/// Creates a metadata error from any message.
	pub fn new(message: impl Into<String>) -> Self {
		Self { message: message.into() }
	}
}

/// Runtime metadata about the mounted authenticator instance.
pub trait AuthenticatorMetadata
where
	Self: Send + Sync,
{
	/// Fully qualified URI under which the host serves this authenticator.
	fn authentication_uri(&self) -> Result<String, MetadataError>;
}

/// Metadata backed by a fixed URI, for hosts with static routing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticMetadata {
	authentication_uri: String,
}
impl StaticMetadata {
	/// Creates metadata that always reports `authentication_uri`.
	pub fn new(authentication_uri: impl Into<String>) -> Self {
		Self { authentication_uri: authentication_uri.into() }
	}
}
impl AuthenticatorMetadata for StaticMetadata {
	fn authentication_uri(&self) -> Result<String, MetadataError> {
		Ok(self.authentication_uri.clone())
	}
}

/// Derives the callback URI registered with GitHub: `<authentication path>/callback`.
///
/// Query and fragment of the authenticator URI are dropped.
pub fn callback_uri(metadata: &dyn AuthenticatorMetadata) -> Result<Url, RedirectUriError> {
	let raw = metadata.authentication_uri().map_err(RedirectUriError::metadata)?;
	let mut url = Url::parse(&raw)
		.map_err(|source| RedirectUriError::Malformed { uri: raw.clone(), source })?;

	if url.cannot_be_a_base() {
		return Err(RedirectUriError::CannotBeABase { uri: raw });
	}

	let path = format!("{}/{CALLBACK_PATH_SEGMENT}", url.path().trim_end_matches('/'));

	url.set_path(&path);
	url.set_query(None);
	url.set_fragment(None);

	Ok(url)
}
