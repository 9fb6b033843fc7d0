// self
use crate::{
	_prelude::*,
	auth::{ClientId, ClientSecret, ScopeSet},
	config::{AuthenticatorConfig, GitHubEndpoints},
	error::ConfigError,
	permission::PermissionConfig,
};

/// Builder for [`AuthenticatorConfig`] values.
#[derive(Debug)]
pub struct AuthenticatorConfigBuilder {
	/// OAuth client identifier.
	pub client_id: ClientId,
	/// OAuth client secret.
	pub client_secret: ClientSecret,
	/// GitHub endpoints (defaults to github.com).
	pub endpoints: GitHubEndpoints,
	/// Operator-configured scope string, carried for the host.
	pub scope: ScopeSet,
	/// Organization name carried for the callback leg.
	pub organization_name: String,
	/// Permission flags.
	pub permissions: PermissionConfig,
}
impl AuthenticatorConfigBuilder {
	/// Creates a new builder seeded with the client credentials.
	pub fn new(client_id: ClientId, client_secret: ClientSecret) -> Self {
		Self {
			client_id,
			client_secret,
			endpoints: GitHubEndpoints::default(),
			scope: ScopeSet::default(),
			organization_name: String::new(),
			permissions: PermissionConfig::default(),
		}
	}

	/// Overrides the authorization endpoint (e.g., GitHub Enterprise Server).
	pub fn authorization_endpoint(mut self, url: Url) -> Self {
		self.endpoints.authorization = url;

		self
	}

	/// Overrides the token endpoint.
	pub fn token_endpoint(mut self, url: Url) -> Self {
		self.endpoints.token = url;

		self
	}

	/// Overrides the user-info endpoint.
	pub fn user_info_endpoint(mut self, url: Url) -> Self {
		self.endpoints.user_info = url;

		self
	}

	/// Sets the carried scope string (space-separated).
	pub fn scope(mut self, scope: &str) -> Result<Self, ConfigError> {
		self.scope = ScopeSet::from_str(scope.trim())?;

		Ok(self)
	}

	/// Sets the organization name.
	pub fn organization_name(mut self, name: impl Into<String>) -> Self {
		self.organization_name = name.into();

		self
	}

	/// Replaces the permission flags.
	pub fn permissions(mut self, permissions: PermissionConfig) -> Self {
		self.permissions = permissions;

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<AuthenticatorConfig, ConfigError> {
		let config = AuthenticatorConfig {
			client_id: self.client_id,
			client_secret: self.client_secret,
			endpoints: self.endpoints,
			scope: self.scope,
			organization_name: self.organization_name,
			permissions: self.permissions,
		};

		config.validate()?;

		Ok(config)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::permission::AccessLevel;

	fn builder() -> AuthenticatorConfigBuilder {
		AuthenticatorConfig::builder(
			ClientId::new("Iv1.builder").expect("Client fixture should be valid."),
			ClientSecret::new("secret"),
		)
	}

	#[test]
	fn builder_applies_overrides() {
		let enterprise = Url::parse("https://ghe.example.com/login/oauth/authorize")
			.expect("Enterprise URL should parse.");
		let config = builder()
			.authorization_endpoint(enterprise.clone())
			.organization_name("acme")
			.permissions(PermissionConfig {
				organization_access: Some(AccessLevel::Read),
				..Default::default()
			})
			.scope(" workflow ")
			.expect("Scope string should parse.")
			.build()
			.expect("Configuration should build.");

		assert_eq!(config.endpoints.authorization, enterprise);
		assert_eq!(config.organization_name, "acme");
		assert_eq!(config.scope.joined(), "workflow");
		assert_eq!(config.permissions.organization_access, Some(AccessLevel::Read));
	}

	#[test]
	fn builder_rejects_insecure_endpoints() {
		let err = builder()
			.user_info_endpoint(Url::parse("http://api.github.test/user").expect("URL should parse."))
			.build()
			.expect_err("Plain HTTP must be rejected.");

		assert!(matches!(err, ConfigError::InsecureEndpoint { endpoint: "user_info", .. }));
	}

	#[test]
	fn builder_treats_blank_scope_strings_as_empty() {
		let config = builder()
			.scope("   ")
			.expect("Blank scope strings should be accepted.")
			.build()
			.expect("Configuration should build.");

		assert!(config.scope.is_empty());
	}
}
