// self
use github_authenticator::{
	auth::ScopeSet,
	permission::{self, AccessLevel, PermissionConfig, RepoAccess, UserAccess},
};

const REPO_SCOPES: [&str; 5] = ["repo", "repo_deployment", "repo:invite", "public_repo", "repo:status"];
const USER_SCOPES: [&str; 4] = ["user", "read:user", "user:email", "user:follow"];

fn repo_related(scopes: &ScopeSet) -> Vec<&str> {
	scopes.iter().filter(|scope| REPO_SCOPES.iter().any(|repo| repo == scope)).collect()
}

fn user_related(scopes: &ScopeSet) -> Vec<&str> {
	scopes.iter().filter(|scope| USER_SCOPES.iter().any(|user| user == scope)).collect()
}

fn levels() -> [AccessLevel; 4] {
	[AccessLevel::None, AccessLevel::Read, AccessLevel::Write, AccessLevel::ReadWrite]
}

#[test]
fn resolution_is_deterministic() {
	for level in levels() {
		for flag in [false, true] {
			let config = PermissionConfig {
				organization_access: Some(level),
				repo_access: Some(RepoAccess { invite: flag, public_repos: !flag, ..Default::default() }),
				public_keys_access: level,
				repo_hooks_access: level,
				gpg_keys_access: level,
				organization_hooks: flag,
				gists_access: !flag,
				notifications_access: flag,
				user_access: Some(UserAccess { email: flag, follow: true }),
				delete_repo: !flag,
			};
			let snapshot = config.clone();
			let first = permission::resolve(&config);
			let second = permission::resolve(&config);

			assert_eq!(first, second);
			assert_eq!(first.joined(), second.joined());
			assert_eq!(config, snapshot, "Resolution must not mutate its input.");
		}
	}
}

#[test]
fn full_repo_access_collapses_to_umbrella_scope() {
	let config = PermissionConfig { repo_access: Some(RepoAccess::full()), ..Default::default() };

	assert_eq!(repo_related(&permission::resolve(&config)), ["repo"]);
}

#[test]
fn single_repo_flag_grants_single_scope() {
	let cases = [
		(RepoAccess { invite: true, ..Default::default() }, "repo:invite"),
		(RepoAccess { deployment_statuses: true, ..Default::default() }, "repo_deployment"),
		(RepoAccess { public_repos: true, ..Default::default() }, "public_repo"),
		(RepoAccess { read_write_commit_status: true, ..Default::default() }, "repo:status"),
	];

	for (repo, expected) in cases {
		let config = PermissionConfig { repo_access: Some(repo), ..Default::default() };

		assert_eq!(repo_related(&permission::resolve(&config)), [expected]);
	}
}

#[test]
fn organization_read_write_keeps_read_scope() {
	let config =
		PermissionConfig { organization_access: Some(AccessLevel::ReadWrite), ..Default::default() };
	let scopes = permission::resolve(&config);

	assert!(scopes.contains("admin:org"));
	assert!(scopes.contains("read:org"));
	assert_eq!(scopes.len(), 2);
}

#[test]
fn key_and_hook_read_write_grant_admin_scope_only() {
	let cases: [(fn(AccessLevel) -> PermissionConfig, &str, &str); 3] = [
		(
			|level| PermissionConfig { public_keys_access: level, ..Default::default() },
			"admin:public_key",
			"read:public_key",
		),
		(
			|level| PermissionConfig { repo_hooks_access: level, ..Default::default() },
			"admin:repo_hook",
			"read:repo_hook",
		),
		(
			|level| PermissionConfig { gpg_keys_access: level, ..Default::default() },
			"admin:gpg_key",
			"read:gpg_key",
		),
	];

	for (build, admin, read) in cases {
		let scopes = permission::resolve(&build(AccessLevel::ReadWrite));

		assert_eq!(scopes.iter().collect::<Vec<_>>(), [admin]);
		assert!(!scopes.contains(read));
		assert!(permission::resolve(&build(AccessLevel::None)).is_empty());
	}
}

#[test]
fn user_umbrella_and_partial_grants() {
	let both = PermissionConfig {
		user_access: Some(UserAccess { email: true, follow: true }),
		..Default::default()
	};
	let email_only = PermissionConfig {
		user_access: Some(UserAccess { email: true, follow: false }),
		..Default::default()
	};

	assert_eq!(user_related(&permission::resolve(&both)), ["user"]);
	assert_eq!(user_related(&permission::resolve(&email_only)), ["read:user", "user:email"]);
}

#[test]
fn documented_example_produces_expected_scope_string() {
	let config = PermissionConfig {
		organization_access: Some(AccessLevel::Read),
		gists_access: true,
		..Default::default()
	};

	assert_eq!(permission::resolve(&config).joined(), "read:org gist");
}
