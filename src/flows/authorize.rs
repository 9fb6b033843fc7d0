//! Authorization redirect leg: state generation, session binding, and query assembly.

// crates.io
use oauth2::http::{Response, header::LOCATION};
use url::form_urlencoded;
// self
use crate::{
	_prelude::*,
	auth::{FlowState, SessionId},
	flows::{AuthenticationRequest, Authenticator},
	metadata,
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
	permission,
	session::STATE_KEY,
};

/// Ordered query parameters of the authorization redirect.
///
/// Built fresh for each request and never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RedirectQuery(Vec<(&'static str, String)>);
impl RedirectQuery {
	/// Returns the value of `name`, if present.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.0.iter().find(|(key, _)| *key == name).map(|(_, value)| value.as_str())
	}

	/// Iterator over `(name, value)` pairs in emission order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(key, value)| (*key, value.as_str()))
	}

	/// Parameter names in emission order.
	pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.0.iter().map(|(key, _)| *key)
	}

	/// Number of parameters.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true when no parameters were added.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// URL-encoded query string (`application/x-www-form-urlencoded`).
	pub fn to_query_string(&self) -> String {
		let mut serializer = form_urlencoded::Serializer::new(String::new());

		for (name, value) in self.iter() {
			serializer.append_pair(name, value);
		}

		serializer.finish()
	}

	fn push(&mut self, name: &'static str, value: impl Into<String>) {
		self.0.push((name, value.into()));
	}
}

/// Redirect the host must issue as the request's terminal response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectInstruction {
	/// HTTP status, always `302 Found` ("moved temporarily").
	pub status: StatusCode,
	/// Authorization endpoint the browser is sent to.
	pub endpoint: Url,
	/// Query parameters appended to the endpoint.
	pub query: RedirectQuery,
}
impl RedirectInstruction {
	/// Full `Location` URL with the query appended in emission order.
	pub fn location(&self) -> Url {
		let mut url = self.endpoint.clone();
		let mut pairs = url.query_pairs_mut();

		for (name, value) in self.query.iter() {
			pairs.append_pair(name, value);
		}

		drop(pairs);

		url
	}

	/// Renders the redirect as a bodiless HTTP response.
	pub fn into_response(self) -> Result<Response<()>> {
		let location = self.location();

		Ok(Response::builder().status(self.status).header(LOCATION, location.as_str()).body(())?)
	}
}

impl Authenticator {
	/// Dispatches an inbound request: GET builds the redirect, every other verb is rejected
	/// without touching the session.
	pub fn handle(&self, request: &AuthenticationRequest) -> Result<RedirectInstruction> {
		obs::log_request_received(&request.method);

		if request.method == Method::GET {
			self.get(&request.session)
		} else {
			self.reject(&request.method)
		}
	}

	/// Handles the GET leg by building the authorization redirect for `session`.
	pub fn get(&self, session: &SessionId) -> Result<RedirectInstruction> {
		const KIND: FlowKind = FlowKind::Authorization;

		let _span = FlowSpan::new(KIND, "build_redirect").entered();

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);

		match self.build_redirect(session) {
			Ok(instruction) => {
				obs::record_flow_outcome(KIND, FlowOutcome::Success);

				Ok(instruction)
			},
			Err(e) => {
				obs::record_flow_outcome(KIND, FlowOutcome::Failure);
				obs::log_failure(KIND, &e);

				Err(e)
			},
		}
	}

	/// Handles the POST leg, which this authenticator does not support.
	pub fn post(&self) -> Result<RedirectInstruction> {
		self.reject(&Method::POST)
	}

	fn reject(&self, method: &Method) -> Result<RedirectInstruction> {
		Err(Error::MethodNotAllowed { method: method.to_string() })
	}

	fn build_redirect(&self, session: &SessionId) -> Result<RedirectInstruction> {
		let redirect_uri = metadata::callback_uri(self.metadata.as_ref())?;
		let state = FlowState::generate();

		self.sessions.put(session, STATE_KEY, state.as_str().to_owned())?;

		let scopes = permission::resolve(&self.config.permissions);
		let mut query = RedirectQuery::default();

		query.push("client_id", self.config.client_id.to_string());
		query.push("redirect_uri", redirect_uri.as_str());
		query.push("state", state);
		query.push("response_type", "code");
		query.push("scope", scopes.joined());

		let endpoint = self.config.endpoints.authorization.clone();

		obs::log_redirect(&endpoint, &query);

		Ok(RedirectInstruction { status: StatusCode::FOUND, endpoint, query })
	}
}
