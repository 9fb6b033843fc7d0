//! Callback-leg `state` verification.
//!
//! Only the CSRF check lives here; exchanging the returned code is left to the host.

// self
use crate::{
	_prelude::*,
	auth::{FlowState, SessionId},
	flows::Authenticator,
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
	session::STATE_KEY,
};

impl Authenticator {
	/// Consumes the pending `state` of `session` and checks it against the value GitHub
	/// echoed back.
	///
	/// The stored value is removed before comparing, so a state can be verified at most once
	/// whatever the outcome.
	pub fn verify_state(&self, session: &SessionId, returned: &str) -> Result<()> {
		const KIND: FlowKind = FlowKind::Callback;

		let _span = FlowSpan::new(KIND, "verify_state").entered();

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);

		let result = self.consume_state(session, returned);

		match &result {
			Ok(()) => obs::record_flow_outcome(KIND, FlowOutcome::Success),
			Err(e) => {
				obs::record_flow_outcome(KIND, FlowOutcome::Failure);
				obs::log_failure(KIND, e);
			},
		}

		result
	}

	fn consume_state(&self, session: &SessionId, returned: &str) -> Result<()> {
		let pending = self
			.sessions
			.remove(session, STATE_KEY)?
			.ok_or(Error::StateMismatch { reason: "no authorization is pending" })?;

		if FlowState::from(pending).matches(returned) {
			Ok(())
		} else {
			Err(Error::StateMismatch { reason: "returned state differs from the pending one" })
		}
	}
}
