//! Thread-safe in-memory [`SessionStore`] implementation for local development and tests.

// self
use crate::{
	_prelude::*,
	auth::SessionId,
	session::{SessionError, SessionStore},
};

type SessionMap = Arc<RwLock<HashMap<SessionId, HashMap<String, String>>>>;

/// Thread-safe session backend that keeps attributes in-process for tests and demos.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore(SessionMap);
impl MemorySessionStore {
	/// Number of attributes stored for `session`.
	pub fn len_for(&self, session: &SessionId) -> usize {
		self.0.read().get(session).map_or(0, HashMap::len)
	}

	/// Drops every attribute of `session`, returning true when the session existed.
	pub fn invalidate(&self, session: &SessionId) -> bool {
		self.0.write().remove(session).is_some()
	}
}
impl SessionStore for MemorySessionStore {
	fn put(&self, session: &SessionId, key: &str, value: String) -> Result<(), SessionError> {
		self.0.write().entry(session.clone()).or_default().insert(key.to_owned(), value);

		Ok(())
	}

	fn get(&self, session: &SessionId, key: &str) -> Result<Option<String>, SessionError> {
		Ok(self.0.read().get(session).and_then(|attrs| attrs.get(key)).cloned())
	}

	fn remove(&self, session: &SessionId, key: &str) -> Result<Option<String>, SessionError> {
		let mut guard = self.0.write();
		let Some(attrs) = guard.get_mut(session) else {
			return Ok(None);
		};
		let removed = attrs.remove(key);

		if attrs.is_empty() {
			guard.remove(session);
		}

		Ok(removed)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn session(id: &str) -> SessionId {
		SessionId::new(id).expect("Session fixture should be valid.")
	}

	#[test]
	fn put_overwrites_and_sessions_are_isolated() {
		let store = MemorySessionStore::default();
		let alice = session("alice");
		let bob = session("bob");

		store.put(&alice, "state", "one".into()).expect("First put should succeed.");
		store.put(&alice, "state", "two".into()).expect("Second put should succeed.");
		store.put(&bob, "state", "other".into()).expect("Put for bob should succeed.");

		assert_eq!(store.get(&alice, "state"), Ok(Some("two".into())));
		assert_eq!(store.get(&bob, "state"), Ok(Some("other".into())));
		assert_eq!(store.len_for(&alice), 1);
	}

	#[test]
	fn remove_is_single_use_and_prunes_empty_sessions() {
		let store = MemorySessionStore::default();
		let alice = session("alice");

		store.put(&alice, "state", "one".into()).expect("Put should succeed.");

		assert_eq!(store.remove(&alice, "state"), Ok(Some("one".into())));
		assert_eq!(store.remove(&alice, "state"), Ok(None));
		assert!(!store.invalidate(&alice), "Empty sessions are pruned on removal.");
	}

	#[test]
	fn clones_share_storage() {
		let store = MemorySessionStore::default();
		let clone = store.clone();
		let alice = session("alice");

		clone.put(&alice, "state", "shared".into()).expect("Put through clone should succeed.");

		assert_eq!(store.get(&alice, "state"), Ok(Some("shared".into())));
		assert!(store.invalidate(&alice));
		assert_eq!(clone.len_for(&alice), 0);
	}
}
