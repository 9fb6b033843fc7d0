//! Single-use CSRF state tokens bound to one authorization attempt.

// crates.io
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::Rng;
// self
use crate::_prelude::*;

const STATE_BYTES: usize = 16;

/// Unguessable `state` value generated once per authorization redirect.
///
/// Carries 128 bits drawn from the thread-local CSPRNG, encoded as unpadded base64url so
/// it survives query strings without escaping.
#[derive(Clone, PartialEq, Eq)]
pub struct FlowState(String);
impl FlowState {
	/// Draws a fresh state value.
	pub fn generate() -> Self {
		let mut bytes = [0_u8; STATE_BYTES];

		rand::rng().fill(&mut bytes);

		Self(URL_SAFE_NO_PAD.encode(bytes))
	}

	/// Returns the encoded value.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Compares a value returned by the provider without short-circuiting on the first
	/// differing byte.
	pub fn matches(&self, returned: &str) -> bool {
		let expected = self.0.as_bytes();
		let returned = returned.as_bytes();

		// Length is not secret; every generated state is 22 characters.
		if expected.len() != returned.len() {
			return false;
		}

		expected.iter().zip(returned).fold(0_u8, |acc, (a, b)| acc | (a ^ b)) == 0
	}
}
impl From<String> for FlowState {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl From<FlowState> for String {
	fn from(value: FlowState) -> Self {
		value.0
	}
}
impl AsRef<str> for FlowState {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl Debug for FlowState {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("FlowState").field(&self.0).finish()
	}
}
impl Display for FlowState {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
