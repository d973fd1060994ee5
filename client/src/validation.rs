// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use portal_shared::messages::signup::{Field, NAME_MIN_LENGTH, PASSWORD_MIN_LENGTH};

/// Runs the rule for one field against a candidate value. Rules are pure and
/// independent of each other; the message is what the user sees next to the
/// input.
pub fn field_error(field: Field, value: &str) -> Option<String> {
	match field {
		Field::FirstName => first_name_error(value),
		Field::LastName => last_name_error(value),
		Field::Email => email_error(value),
		Field::Password => password_error(value),
	}
}

pub fn first_name_error(value: &str) -> Option<String> {
	if value.is_empty() {
		return Some(String::from("First name is required"));
	}
	if value.chars().count() < NAME_MIN_LENGTH {
		return Some(format!("First name should be of minimum {NAME_MIN_LENGTH} characters length"));
	}
	None
}

/// Last name is optional; the length rule only applies once something was
/// entered.
pub fn last_name_error(value: &str) -> Option<String> {
	if value.is_empty() {
		return None;
	}
	if value.chars().count() < NAME_MIN_LENGTH {
		return Some(format!("Last name should be of minimum {NAME_MIN_LENGTH} characters length"));
	}
	None
}

pub fn email_error(value: &str) -> Option<String> {
	if value.is_empty() {
		return Some(String::from("Email is required"));
	}
	if !is_valid_email(value) {
		return Some(String::from("Enter a valid email"));
	}
	None
}

pub fn password_error(value: &str) -> Option<String> {
	if value.is_empty() {
		return Some(String::from("Password is required"));
	}
	if value.chars().count() < PASSWORD_MIN_LENGTH {
		return Some(format!("Password should be of minimum {PASSWORD_MIN_LENGTH} characters length"));
	}
	None
}

/// Syntax check only; whether the address exists is the service's problem.
/// Requires a single `@` with a non-empty local part and a dotted domain,
/// and rejects whitespace anywhere.
fn is_valid_email(value: &str) -> bool {
	if value.chars().any(char::is_whitespace) {
		return false;
	}
	let Some((local, domain)) = value.split_once('@') else {
		return false;
	};
	if local.is_empty() || domain.is_empty() || domain.contains('@') {
		return false;
	}
	if !domain.contains('.') {
		return false;
	}
	!(domain.starts_with('.') || domain.ends_with('.') || domain.contains(".."))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn first_name_requires_two_characters() {
		assert_eq!(first_name_error("").as_deref(), Some("First name is required"));
		assert!(first_name_error("A").is_some());
		assert!(first_name_error("é").is_some());
		assert!(first_name_error("Al").is_none());
		assert!(first_name_error("éé").is_none());
	}

	#[test]
	fn last_name_is_optional_but_bounded() {
		assert!(last_name_error("").is_none());
		assert!(last_name_error("B").is_some());
		assert!(last_name_error("Bo").is_none());
	}

	#[test]
	fn email_requires_valid_syntax() {
		assert_eq!(email_error("").as_deref(), Some("Email is required"));
		assert_eq!(email_error("not-an-email").as_deref(), Some("Enter a valid email"));
		assert!(email_error("a@b").is_some());
		assert!(email_error("@b.com").is_some());
		assert!(email_error("a@").is_some());
		assert!(email_error("a b@c.com").is_some());
		assert!(email_error("a@b@c.com").is_some());
		assert!(email_error("a@b..com").is_some());
		assert!(email_error("a@.com").is_some());
		assert!(email_error("a@b.com").is_none());
		assert!(email_error("first.last@sub.example.org").is_none());
	}

	#[test]
	fn password_requires_eight_characters() {
		assert_eq!(password_error("").as_deref(), Some("Password is required"));
		assert!(password_error("short12").is_some());
		assert!(password_error("longenough").is_none());
	}
}
