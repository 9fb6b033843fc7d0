//! Ordered rule table translating [`PermissionConfig`] into GitHub scopes.
//!
//! Each [`ScopeRule`] inspects one slice of the configuration and yields the scopes it
//! grants. [`resolve`] walks the table once, in order, and only ever adds scopes, so a
//! later rule can never withdraw what an earlier one granted.

// self
use crate::{
	_prelude::*,
	auth::ScopeSet,
	permission::{AccessLevel, PermissionConfig},
};

/// One entry of the resolver table.
#[derive(Clone, Copy)]
pub struct ScopeRule {
	/// Stable rule label used in diagnostics.
	pub name: &'static str,
	grant: fn(&PermissionConfig) -> Vec<&'static str>,
}
impl ScopeRule {
	/// Scopes this rule grants for `config`.
	pub fn grant(&self, config: &PermissionConfig) -> Vec<&'static str> {
		(self.grant)(config)
	}
}
impl Debug for ScopeRule {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("ScopeRule").field(&self.name).finish()
	}
}

/// Scope names for a three-level access switch.
struct LevelScopes {
	read: &'static str,
	write: &'static str,
	admin: &'static str,
}

const PUBLIC_KEY_SCOPES: LevelScopes =
	LevelScopes { read: "read:public_key", write: "write:public_key", admin: "admin:public_key" };
const REPO_HOOK_SCOPES: LevelScopes =
	LevelScopes { read: "read:repo_hook", write: "write:repo_hook", admin: "admin:repo_hook" };
const GPG_KEY_SCOPES: LevelScopes =
	LevelScopes { read: "read:gpg_key", write: "write:gpg_key", admin: "admin:gpg_key" };

/// Resolver table in evaluation order.
pub static SCOPE_RULES: [ScopeRule; 10] = [
	ScopeRule { name: "organization_access", grant: organization_scopes },
	ScopeRule { name: "repo_access", grant: repo_scopes },
	ScopeRule { name: "public_keys_access", grant: public_key_scopes },
	ScopeRule { name: "repo_hooks_access", grant: repo_hook_scopes },
	ScopeRule { name: "organization_hooks", grant: organization_hook_scopes },
	ScopeRule { name: "gists_access", grant: gist_scopes },
	ScopeRule { name: "notifications_access", grant: notification_scopes },
	ScopeRule { name: "user_access", grant: user_scopes },
	ScopeRule { name: "delete_repo", grant: delete_repo_scopes },
	ScopeRule { name: "gpg_keys_access", grant: gpg_key_scopes },
];

/// Resolves the minimal GitHub scope set for `config`.
///
/// Pure and infallible: absent optional sections simply contribute nothing. The returned
/// set keeps the order in which rules fired.
pub fn resolve(config: &PermissionConfig) -> ScopeSet {
	let mut scopes = ScopeSet::default();

	for rule in SCOPE_RULES.iter() {
		for scope in rule.grant(config) {
			scopes.insert_known(scope);
		}
	}

	scopes
}

/// Labels of the resolver rules in evaluation order.
pub fn rule_names() -> impl Iterator<Item = &'static str> {
	SCOPE_RULES.iter().map(|rule| rule.name)
}

// `read_write` keeps the read scope alongside `admin:org`; the key and hook switches do not.
fn organization_scopes(config: &PermissionConfig) -> Vec<&'static str> {
	match config.organization_access {
		None => Vec::new(),
		Some(AccessLevel::Write) => vec!["write:org"],
		Some(AccessLevel::ReadWrite) => vec!["admin:org", "read:org"],
		Some(AccessLevel::Read | AccessLevel::None) => vec!["read:org"],
	}
}

fn repo_scopes(config: &PermissionConfig) -> Vec<&'static str> {
	let Some(repo) = config.repo_access else {
		return Vec::new();
	};

	if repo.is_full() {
		return vec!["repo"];
	}

	[
		(repo.deployment_statuses, "repo_deployment"),
		(repo.invite, "repo:invite"),
		(repo.public_repos, "public_repo"),
		(repo.read_write_commit_status, "repo:status"),
	]
	.into_iter()
	.filter_map(|(enabled, scope)| enabled.then_some(scope))
	.collect()
}

fn user_scopes(config: &PermissionConfig) -> Vec<&'static str> {
	let Some(user) = config.user_access else {
		return Vec::new();
	};

	if user.email && user.follow {
		return vec!["user"];
	}

	let mut scopes = vec!["read:user"];

	if user.email {
		scopes.push("user:email");
	}
	if user.follow {
		scopes.push("user:follow");
	}

	scopes
}

fn public_key_scopes(config: &PermissionConfig) -> Vec<&'static str> {
	level_scopes(config.public_keys_access, &PUBLIC_KEY_SCOPES)
}

fn repo_hook_scopes(config: &PermissionConfig) -> Vec<&'static str> {
	level_scopes(config.repo_hooks_access, &REPO_HOOK_SCOPES)
}

fn gpg_key_scopes(config: &PermissionConfig) -> Vec<&'static str> {
	level_scopes(config.gpg_keys_access, &GPG_KEY_SCOPES)
}

fn organization_hook_scopes(config: &PermissionConfig) -> Vec<&'static str> {
	flag_scope(config.organization_hooks, "admin:org_hook")
}

fn gist_scopes(config: &PermissionConfig) -> Vec<&'static str> {
	flag_scope(config.gists_access, "gist")
}

fn notification_scopes(config: &PermissionConfig) -> Vec<&'static str> {
	flag_scope(config.notifications_access, "notifications")
}

fn delete_repo_scopes(config: &PermissionConfig) -> Vec<&'static str> {
	flag_scope(config.delete_repo, "delete_repo")
}

fn level_scopes(level: AccessLevel, scopes: &LevelScopes) -> Vec<&'static str> {
	match level {
		AccessLevel::Write => vec![scopes.write],
		AccessLevel::ReadWrite => vec![scopes.admin],
		AccessLevel::Read => vec![scopes.read],
		AccessLevel::None => Vec::new(),
	}
}

fn flag_scope(enabled: bool, scope: &'static str) -> Vec<&'static str> {
	if enabled { vec![scope] } else { Vec::new() }
}
