// self
use crate::{_prelude::*, flows::RedirectQuery, obs::FlowKind};

/// A span builder used by authenticator flows.
#[derive(Clone, Debug)]
pub struct FlowSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl FlowSpan {
	/// Creates a new span tagged with the provided flow kind + stage.
	pub fn new(kind: FlowKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("github_authenticator.flow", flow = kind.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Enters the span for the synchronous flow body.
	pub fn entered(self) -> FlowSpanGuard {
		#[cfg(feature = "tracing")]
		{
			FlowSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			FlowSpanGuard {}
		}
	}
}

/// RAII guard returned by [`FlowSpan::entered`].
pub struct FlowSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for FlowSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("FlowSpanGuard(..)")
	}
}

/// Emits the informational event for an inbound authentication request.
pub fn log_request_received(method: &Method) {
	#[cfg(feature = "tracing")]
	{
		tracing::info!(method = %method, "Authentication request received.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = method;
	}
}

/// Emits the debug event describing the redirect about to be issued.
///
/// `query` is rendered in emission order; it never contains the client secret.
pub fn log_redirect(endpoint: &Url, query: &RedirectQuery) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(endpoint = %endpoint, ?query, "Redirecting to authorization endpoint.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (endpoint, query);
	}
}

/// Emits a warning for a failure that is about to be propagated to the host.
pub fn log_failure(kind: FlowKind, error: &Error) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(flow = kind.as_str(), error = %error, "Authenticator flow failed.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (kind, error);
	}
}
