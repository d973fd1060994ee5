// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shortest accepted first/last name. Enforced by the client rule set and by
/// the service on its side of the contract.
pub const NAME_MIN_LENGTH: usize = 2;
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Identifies one input of the sign-up form. The serialized names are the
/// wire names used in request bodies and field-scoped error responses.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
	FirstName,
	LastName,
	Email,
	Password,
}

impl Field {
	pub const ALL: [Field; 4] = [Field::FirstName, Field::LastName, Field::Email, Field::Password];

	/// The wire name of the field, matching its serialized form.
	pub fn name(self) -> &'static str {
		match self {
			Self::FirstName => "firstName",
			Self::LastName => "lastName",
			Self::Email => "email",
			Self::Password => "password",
		}
	}
}

impl fmt::Display for Field {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.name())
	}
}

/// Data sent to the sign-up service when trying to create an account
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
	pub first_name: String,
	pub last_name: String,
	pub email: String,
	pub password: String,
}

/// A rejection from the sign-up service, naming exactly one offending field
/// and a message to show the user on that field
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SignupError {
	pub field: Field,
	pub error: String,
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn signup_request_uses_wire_field_names() {
		let request = SignupRequest {
			first_name: String::from("Al"),
			last_name: String::new(),
			email: String::from("a@b.com"),
			password: String::from("longenough"),
		};
		let serialized = serde_json::to_value(&request).unwrap();
		assert_eq!(
			serialized,
			json!({
				"firstName": "Al",
				"lastName": "",
				"email": "a@b.com",
				"password": "longenough",
			})
		);
	}

	#[test]
	fn signup_error_reads_service_response() {
		let response = r#"{"field":"email","error":"Email already in use"}"#;
		let error: SignupError = serde_json::from_str(response).unwrap();
		assert_eq!(error.field, Field::Email);
		assert_eq!(error.error, "Email already in use");
	}

	#[test]
	fn field_names_match_serialized_form() {
		for field in Field::ALL {
			let serialized = serde_json::to_value(field).unwrap();
			assert_eq!(serialized, json!(field.name()));
		}
	}
}
