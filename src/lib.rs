//! GitHub OAuth 2.0 authenticator front half: declarative permission flags in, minimal GitHub
//! scope sets and CSRF-bound authorization redirects out.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod config;
pub mod error;
pub mod flows;
pub mod metadata;
pub mod obs;
pub mod permission;
pub mod session;

mod _prelude {
	pub use std::{
		collections::HashMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
		sync::Arc,
	};

	pub use oauth2::http::{Method, StatusCode};
	pub use parking_lot::RwLock;
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use oauth2::http;
pub use url;
#[cfg(test)] use color_eyre as _;
