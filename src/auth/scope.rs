//! Scope modeling helpers used across the authenticator.

// self
use crate::_prelude::*;

/// Errors emitted when validating scopes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum ScopeValidationError {
	/// Empty scope entries are not allowed.
	#[error("Scope entries cannot be empty.")]
	Empty,
	/// Scopes cannot contain embedded whitespace characters.
	#[error("Scope contains whitespace: {scope}.")]
	ContainsWhitespace {
		/// The offending scope string.
		scope: String,
	},
}

/// Duplicate-free set of GitHub scopes that remembers insertion order.
///
/// Order carries no meaning for GitHub; it is kept so the `scope` parameter and
/// log lines read in the order the permission rules fired. Equality ignores it.
#[derive(Clone, Default)]
pub struct ScopeSet {
	scopes: Vec<String>,
}
impl ScopeSet {
	/// Creates a scope set from any iterator, dropping duplicates after their first
	/// occurrence.
	pub fn new<I, S>(scopes: I) -> Result<Self, ScopeValidationError>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut set = Self::default();

		for scope in scopes {
			set.insert(scope)?;
		}

		Ok(set)
	}

	/// Appends a scope unless already present; returns true when it was added.
	pub fn insert(&mut self, scope: impl Into<String>) -> Result<bool, ScopeValidationError> {
		let owned = validate(scope.into())?;

		if self.contains(&owned) {
			return Ok(false);
		}

		self.scopes.push(owned);

		Ok(true)
	}

	/// Appends a scope drawn from the built-in GitHub vocabulary.
	pub(crate) fn insert_known(&mut self, scope: &'static str) {
		if !self.contains(scope) {
			self.scopes.push(scope.to_owned());
		}
	}

	/// Number of distinct scopes.
	pub fn len(&self) -> usize {
		self.scopes.len()
	}

	/// Returns true if no scopes are defined.
	pub fn is_empty(&self) -> bool {
		self.scopes.is_empty()
	}

	/// Returns true if the set contains the provided scope.
	pub fn contains(&self, scope: &str) -> bool {
		self.scopes.iter().any(|candidate| candidate == scope)
	}

	/// Iterator over scopes in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.scopes.iter().map(|s| s.as_str())
	}

	/// Space-delimited scopes in insertion order, as sent in the `scope` parameter.
	pub fn joined(&self) -> String {
		self.scopes.join(" ")
	}

	fn sorted(&self) -> Vec<&str> {
		let mut sorted = self.iter().collect::<Vec<_>>();

		sorted.sort_unstable();

		sorted
	}
}
impl PartialEq for ScopeSet {
	fn eq(&self, other: &Self) -> bool {
		self.len() == other.len() && self.sorted() == other.sorted()
	}
}
impl Eq for ScopeSet {}
impl Debug for ScopeSet {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("ScopeSet").field(&self.scopes).finish()
	}
}
impl Display for ScopeSet {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.joined())
	}
}
impl FromStr for ScopeSet {
	type Err = ScopeValidationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.is_empty() {
			return Ok(Self::default());
		}
		if s.chars().all(char::is_whitespace) {
			return Err(ScopeValidationError::Empty);
		}

		Self::new(s.split_whitespace())
	}
}

fn validate(scope: String) -> Result<String, ScopeValidationError> {
	if scope.is_empty() {
		return Err(ScopeValidationError::Empty);
	}
	if scope.chars().any(char::is_whitespace) {
		return Err(ScopeValidationError::ContainsWhitespace { scope });
	}

	Ok(scope)
}
