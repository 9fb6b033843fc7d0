//! Identifiers the authenticator receives from its configuration and its host.

// self
use crate::_prelude::*;

macro_rules! def_id {
	($name:ident, $doc:literal, $validate:path) => {
		#[doc = $doc]
		#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
		#[serde(try_from = "String", into = "String")]
		pub struct $name(String);
		impl $name {
			/// Creates the identifier after validation.
			pub fn new(value: impl Into<String>) -> Result<Self, IdentifierError> {
				Self::try_from(value.into())
			}
		}
		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				&self.0
			}
		}
		impl From<$name> for String {
			fn from(value: $name) -> Self {
				value.0
			}
		}
		impl TryFrom<String> for $name {
			type Error = IdentifierError;

			fn try_from(value: String) -> Result<Self, Self::Error> {
				$validate(&value)?;

				Ok(Self(value))
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.debug_tuple(stringify!($name)).field(&self.0).finish()
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(&self.0)
			}
		}
	};
}

const CLIENT_ID_MAX_LEN: usize = 64;
const SESSION_ID_MAX_LEN: usize = 256;

/// Error returned when identifier validation fails.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum IdentifierError {
	/// The identifier was empty.
	#[error("{kind} identifier cannot be empty.")]
	Empty {
		/// Kind of identifier (client, session).
		kind: &'static str,
	},
	/// The identifier contains a character it may not carry.
	#[error("{kind} identifier contains the disallowed character {character:?}.")]
	InvalidCharacter {
		/// Kind of identifier (client, session).
		kind: &'static str,
		/// First offending character.
		character: char,
	},
	/// The identifier exceeded the allowed byte length.
	#[error("{kind} identifier exceeds {max} bytes.")]
	TooLong {
		/// Kind of identifier (client, session).
		kind: &'static str,
		/// Maximum permitted length in bytes.
		max: usize,
	},
}

def_id! {
	ClientId,
	"GitHub OAuth app client identifier, sent verbatim as the `client_id` query parameter.",
	validate_client_id
}
def_id! {
	SessionId,
	"Opaque key of the caller's session in the host session store.",
	validate_session_id
}

// GitHub issues ids such as `Iv1.8a61f9b3a7aba766` or `Ov23li...`; keeping to this alphabet
// means the value never needs percent-encoding.
fn validate_client_id(view: &str) -> Result<(), IdentifierError> {
	const KIND: &str = "Client";

	validate_length(KIND, view, CLIENT_ID_MAX_LEN)?;

	match view.chars().find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))) {
		Some(character) => Err(IdentifierError::InvalidCharacter { kind: KIND, character }),
		None => Ok(()),
	}
}

// The host owns the format; only control characters are refused since the key ends up in logs.
fn validate_session_id(view: &str) -> Result<(), IdentifierError> {
	const KIND: &str = "Session";

	validate_length(KIND, view, SESSION_ID_MAX_LEN)?;

	match view.chars().find(|c| c.is_control()) {
		Some(character) => Err(IdentifierError::InvalidCharacter { kind: KIND, character }),
		None => Ok(()),
	}
}

fn validate_length(kind: &'static str, view: &str, max: usize) -> Result<(), IdentifierError> {
	if view.is_empty() {
		Err(IdentifierError::Empty { kind })
	} else if view.len() > max {
		Err(IdentifierError::TooLong { kind, max })
	} else {
		Ok(())
	}
}
