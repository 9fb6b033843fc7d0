//! Declarative GitHub permission flags and their translation into scopes.
//!
//! [`PermissionConfig`] mirrors the operator-facing switches (organization access, repository
//! flags, key management, user data). [`resolve`] turns one immutable configuration into the
//! minimal [`ScopeSet`](crate::auth::ScopeSet) GitHub needs, following an ordered rule table.

pub mod resolver;

pub use resolver::*;

// self
use crate::_prelude::*;

/// Three-level access switch used by organization, key, and hook permissions.
///
/// `None` stands for "no access requested". For organization access it behaves like
/// `Read`; everywhere else it contributes no scope.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
	/// No access requested.
	#[default]
	None,
	/// Read-only access.
	Read,
	/// Write access.
	Write,
	/// Full administrative access.
	ReadWrite,
}
impl AccessLevel {
	/// Returns the configuration label for the level.
	pub const fn as_str(self) -> &'static str {
		match self {
			AccessLevel::None => "none",
			AccessLevel::Read => "read",
			AccessLevel::Write => "write",
			AccessLevel::ReadWrite => "read_write",
		}
	}
}
impl Display for AccessLevel {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Repository permission flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RepoAccess {
	/// Access to deployment statuses.
	pub deployment_statuses: bool,
	/// Access to public repositories.
	pub public_repos: bool,
	/// Access to repository invitations.
	pub invite: bool,
	/// Read/write access to commit statuses.
	pub read_write_commit_status: bool,
}
impl RepoAccess {
	/// Flags every repository permission.
	pub const fn full() -> Self {
		Self {
			deployment_statuses: true,
			public_repos: true,
			invite: true,
			read_write_commit_status: true,
		}
	}

	/// Returns true when every repository flag is set.
	pub const fn is_full(&self) -> bool {
		self.deployment_statuses && self.public_repos && self.invite && self.read_write_commit_status
	}
}

/// User-profile permission flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct UserAccess {
	/// Access to the user's email addresses.
	pub email: bool,
	/// Access to follow/unfollow users.
	pub follow: bool,
}

/// Permission configuration for one authenticator instance.
///
/// Values are read once per flow and never mutated by the resolver.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PermissionConfig {
	/// Organization and team membership access, when requested.
	pub organization_access: Option<AccessLevel>,
	/// Repository permission flags, when requested.
	pub repo_access: Option<RepoAccess>,
	/// Public SSH key management.
	pub public_keys_access: AccessLevel,
	/// Repository webhook management.
	pub repo_hooks_access: AccessLevel,
	/// GPG key management.
	pub gpg_keys_access: AccessLevel,
	/// Organization webhook management.
	pub organization_hooks: bool,
	/// Gist write access.
	pub gists_access: bool,
	/// Notification access.
	pub notifications_access: bool,
	/// User-profile access, when requested.
	pub user_access: Option<UserAccess>,
	/// Permission to delete administrable repositories.
	pub delete_repo: bool,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn omitted_fields_default_to_no_access() {
		let config: PermissionConfig =
			serde_json::from_str("{}").expect("Empty object should deserialize.");

		assert_eq!(config, PermissionConfig::default());
		assert_eq!(config.public_keys_access, AccessLevel::None);
		assert!(config.organization_access.is_none());
	}

	#[test]
	fn access_levels_use_snake_case_labels() {
		let config: PermissionConfig = serde_json::from_str(
			r#"{"organization_access":"read_write","gpg_keys_access":"write","repo_access":{"invite":true}}"#,
		)
		.expect("Permission fixture should deserialize.");

		assert_eq!(config.organization_access, Some(AccessLevel::ReadWrite));
		assert_eq!(config.gpg_keys_access, AccessLevel::Write);
		assert_eq!(config.repo_access, Some(RepoAccess { invite: true, ..Default::default() }));
		assert!(serde_json::from_str::<PermissionConfig>(r#"{"gpg_keys_access":"admin"}"#).is_err());
	}

	#[test]
	fn full_repo_access_is_detected() {
		assert!(RepoAccess::full().is_full());
		assert!(!RepoAccess { invite: false, ..RepoAccess::full() }.is_full());
	}
}
