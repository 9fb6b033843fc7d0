//! Authenticator configuration: GitHub endpoints, client credentials, and permission flags.
//!
//! Values come either from [`AuthenticatorConfigBuilder`] or from a JSON document via
//! [`AuthenticatorConfig::from_json_str`]; both paths run the same validation.

/// Builder API for assembling authenticator configuration.
pub mod builder;

pub use builder::*;

// self
use crate::{
	_prelude::*,
	auth::{ClientId, ClientSecret, ScopeSet},
	error::ConfigError,
	permission::PermissionConfig,
};

/// Default GitHub authorization endpoint.
pub const DEFAULT_AUTHORIZATION_ENDPOINT: &str = "https://github.com/login/oauth/authorize";
/// Default GitHub token endpoint.
pub const DEFAULT_TOKEN_ENDPOINT: &str = "https://github.com/login/oauth/access_token";
/// Default GitHub user-info endpoint.
pub const DEFAULT_USER_INFO_ENDPOINT: &str = "https://api.github.com/user";

/// Endpoint set used by the authenticator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubEndpoints {
	/// Authorization endpoint that receives the browser redirect.
	pub authorization: Url,
	/// Token endpoint used by the callback leg.
	pub token: Url,
	/// User-info endpoint used by the callback leg.
	pub user_info: Url,
}
impl GitHubEndpoints {
	fn validate(&self) -> Result<(), ConfigError> {
		validate_endpoint("authorization", &self.authorization)?;
		validate_endpoint("token", &self.token)?;
		validate_endpoint("user_info", &self.user_info)?;

		Ok(())
	}
}
impl Default for GitHubEndpoints {
	fn default() -> Self {
		Self {
			authorization: github_url(DEFAULT_AUTHORIZATION_ENDPOINT),
			token: github_url(DEFAULT_TOKEN_ENDPOINT),
			user_info: github_url(DEFAULT_USER_INFO_ENDPOINT),
		}
	}
}

/// Immutable configuration consumed by [`Authenticator`](crate::flows::Authenticator).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatorConfig {
	/// OAuth client identifier.
	pub client_id: ClientId,
	/// OAuth client secret (never sent on the redirect leg).
	pub client_secret: ClientSecret,
	/// GitHub endpoints.
	#[serde(default)]
	pub endpoints: GitHubEndpoints,
	/// Operator-configured scope string, carried for the host.
	///
	/// The authorization redirect never reads it; its `scope` parameter is derived from
	/// [`permissions`](Self::permissions) alone.
	#[serde(default, with = "scope_string")]
	pub scope: ScopeSet,
	/// Organization whose membership the callback leg checks; empty disables the check.
	#[serde(default)]
	pub organization_name: String,
	/// Permission flags translated into GitHub scopes.
	#[serde(default)]
	pub permissions: PermissionConfig,
}
impl AuthenticatorConfig {
	/// Creates a new builder for the provided client credentials.
	pub fn builder(client_id: ClientId, client_secret: ClientSecret) -> AuthenticatorConfigBuilder {
		AuthenticatorConfigBuilder::new(client_id, client_secret)
	}

	/// Parses and validates a JSON configuration document.
	pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
		Self::from_json_slice(json.as_bytes())
	}

	/// Parses and validates a JSON configuration document from raw bytes.
	pub fn from_json_slice(json: &[u8]) -> Result<Self, ConfigError> {
		let mut de = serde_json::Deserializer::from_slice(json);
		let config: Self = serde_path_to_error::deserialize(&mut de)?;

		de.end().map_err(|source| ConfigError::Malformed { path: ".".into(), source })?;
		config.validate()?;

		Ok(config)
	}

	/// Validates invariants for the configuration.
	pub(crate) fn validate(&self) -> Result<(), ConfigError> {
		self.endpoints.validate()
	}
}

fn validate_endpoint(name: &'static str, url: &Url) -> Result<(), ConfigError> {
	if url.scheme() != "https" {
		Err(ConfigError::InsecureEndpoint { endpoint: name, url: url.to_string() })
	} else {
		Ok(())
	}
}

fn github_url(raw: &'static str) -> Url {
	Url::parse(raw).expect("Built-in GitHub endpoint must parse.")
}

/// The custom scope is configured as a single space-separated string.
mod scope_string {
	// crates.io
	use serde::{Deserializer, Serializer, de::Error as DeError};
	// self
	use crate::{_prelude::*, auth::ScopeSet};

	pub(super) fn serialize<S>(scope: &ScopeSet, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&scope.joined())
	}

	pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<ScopeSet, D::Error>
	where
		D: Deserializer<'de>,
	{
		let raw = String::deserialize(deserializer)?;

		ScopeSet::from_str(raw.trim()).map_err(DeError::custom)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::permission::AccessLevel;

	const MINIMAL: &str = r#"{"client_id":"Iv1.abc","client_secret":"shh"}"#;

	#[test]
	fn minimal_document_uses_github_defaults() {
		let config = AuthenticatorConfig::from_json_str(MINIMAL)
			.expect("Minimal configuration should load.");

		assert_eq!(config.endpoints, GitHubEndpoints::default());
		assert_eq!(config.endpoints.authorization.as_str(), DEFAULT_AUTHORIZATION_ENDPOINT);
		assert!(config.scope.is_empty());
		assert!(config.organization_name.is_empty());
		assert_eq!(config.permissions, PermissionConfig::default());
	}

	#[test]
	fn configured_scope_string_is_parsed_and_kept_apart() {
		let config = AuthenticatorConfig::from_json_str(
			r#"{
				"client_id": "Iv1.abc",
				"client_secret": "shh",
				"scope": " workflow  gist ",
				"permissions": { "organization_access": "read", "gists_access": true }
			}"#,
		)
		.expect("Configuration with a scope string should load.");

		assert_eq!(config.scope.joined(), "workflow gist");
		assert_eq!(crate::permission::resolve(&config.permissions).joined(), "read:org gist");
		assert!(
			AuthenticatorConfig::from_json_str(
				r#"{"client_id":"Iv1.abc","client_secret":"shh","scope":"   "}"#
			)
			.expect("Blank scope strings should load.")
			.scope
			.is_empty()
		);
	}

	#[test]
	fn malformed_fields_are_reported_by_path() {
		let err = AuthenticatorConfig::from_json_str(
			r#"{"client_id":"Iv1.abc","client_secret":"shh","permissions":{"public_keys_access":"all"}}"#,
		)
		.expect_err("Unknown access levels must be rejected.");

		assert!(
			matches!(&err, ConfigError::Malformed { path, .. } if path == "permissions.public_keys_access")
		);
	}

	#[test]
	fn client_id_that_would_alter_the_query_is_rejected() {
		let err = AuthenticatorConfig::from_json_str(
			r#"{"client_id":"Iv1.abc&scope=repo","client_secret":"shh"}"#,
		)
		.expect_err("Client ids outside the query-safe alphabet must be rejected.");

		assert!(matches!(&err, ConfigError::Malformed { path, .. } if path == "client_id"));
	}

	#[test]
	fn plain_http_endpoints_are_rejected() {
		let err = AuthenticatorConfig::from_json_str(
			r#"{"client_id":"Iv1.abc","client_secret":"shh","endpoints":{"token":"http://github.test/token"}}"#,
		)
		.expect_err("Insecure endpoints must be rejected.");

		assert!(matches!(err, ConfigError::InsecureEndpoint { endpoint: "token", .. }));
	}

	#[test]
	fn trailing_garbage_is_rejected() {
		let err = AuthenticatorConfig::from_json_str(&format!("{MINIMAL} {{}}"))
			.expect_err("Trailing content must be rejected.");

		assert!(matches!(err, ConfigError::Malformed { .. }));
	}

	#[test]
	fn serialized_config_round_trips_permissions() {
		let config = AuthenticatorConfig::from_json_str(
			r#"{"client_id":"Iv1.abc","client_secret":"shh","permissions":{"gpg_keys_access":"read_write"}}"#,
		)
		.expect("Configuration should load.");
		let payload = serde_json::to_string(&config).expect("Configuration should serialize.");
		let reloaded =
			AuthenticatorConfig::from_json_str(&payload).expect("Serialized form should reload.");

		assert_eq!(reloaded.permissions.gpg_keys_access, AccessLevel::ReadWrite);
		assert_eq!(reloaded, config);
	}
}
