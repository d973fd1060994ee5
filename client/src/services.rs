// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use gloo_net::http::Request;
use portal_shared::messages::signup::{SignupError, SignupRequest};
use std::fmt::Display;

pub const SIGNUP_ENDPOINT: &str = "/api/signup";

/// The service's answer to a sign-up attempt: accepted, or rejected with a
/// message for exactly one field.
pub type SignupOutcome = Result<(), SignupError>;

/// Errors that can occur exchanging a sign-up request with the service
pub enum RequestError {
	Http(gloo_net::Error),
	UnexpectedStatus(u16),
}

impl Display for RequestError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Http(err) => write!(f, "{}", err),
			Self::UnexpectedStatus(status) => write!(f, "The sign-up service responded with status {}", status),
		}
	}
}

impl From<gloo_net::Error> for RequestError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Http(error)
	}
}

/// Sends one sign-up attempt to the service.
///
/// An accepted submission comes back as 204 with no body. A field-scoped
/// rejection comes back as 409 or 422 with a [`SignupError`] body.
///
/// # Errors
///
/// Errors occur when the request can't be sent or serialized, when the
/// response body can't be deserialized, and when the service answers with a
/// status outside the contract.
pub async fn send_signup(request: &SignupRequest) -> Result<SignupOutcome, RequestError> {
	let response = Request::post(SIGNUP_ENDPOINT).json(request)?.send().await?;
	match response.status() {
		204 => Ok(Ok(())),
		409 | 422 => {
			let rejection: SignupError = response.json().await?;
			Ok(Err(rejection))
		}
		status => Err(RequestError::UnexpectedStatus(status)),
	}
}
