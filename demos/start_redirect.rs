//! Walks through loading an authenticator configuration, issuing the GitHub authorization
//! redirect, and verifying the `state` GitHub echoes back.

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
// self
use github_authenticator::{
	auth::SessionId,
	config::AuthenticatorConfig,
	flows::{AuthenticationRequest, Authenticator},
	metadata::StaticMetadata,
	session::{MemorySessionStore, SessionStore},
};

const CONFIG: &str = r#"{
	"client_id": "Iv1.demo-client",
	"client_secret": "demo-secret",
	"organization_name": "acme",
	"permissions": {
		"organization_access": "read",
		"repo_access": { "public_repos": true, "invite": true },
		"public_keys_access": "read_write",
		"user_access": { "email": true }
	}
}"#;

fn main() -> Result<()> {
	color_eyre::install()?;

	let config = AuthenticatorConfig::from_json_str(CONFIG)?;
	let sessions: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::default());
	let metadata = Arc::new(StaticMetadata::new("https://idp.example.com/authn/github"));
	let authenticator = Authenticator::new(config, sessions, metadata);
	let session = SessionId::new("demo-session")?;
	let redirect = authenticator.handle(&AuthenticationRequest::get(session.clone()))?;

	println!("Respond with {} and send the browser to {}.", redirect.status, redirect.location());

	for (name, value) in redirect.query.iter() {
		println!("  {name} = {value}");
	}

	// Simulate GitHub echoing the state back on the callback.
	let returned_state = redirect.query.get("state").unwrap_or_default().to_owned();

	authenticator.verify_state(&session, &returned_state)?;
	println!("Validated state for session {session}; the host may now exchange the code.");

	if let Err(e) = authenticator.handle(&AuthenticationRequest::post(session)) {
		println!("POST is refused: {e}");
	}

	Ok(())
}
