// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::validation;
use portal_shared::messages::signup::{Field, SignupError, SignupRequest};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct FieldState {
	value: String,
	touched: bool,
	error: Option<String>,
}

/// What the page should do once a submission resolves
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmitOutcome {
	/// The service accepted the submission; leave for the authenticated area.
	Complete,
	/// The service rejected a field; stay on the form and show the error.
	Rejected,
}

/// State of the registration form: one value, touched flag, and error slot
/// per field, plus whether a submission is in flight.
///
/// All mutation goes through the reducer methods here. The errors are
/// recomputed from the current values on every change, so no stale message
/// survives an edit. A field's error is only reported for display once that
/// field was touched; submitting touches every field.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistrationForm {
	first_name: FieldState,
	last_name: FieldState,
	email: FieldState,
	password: FieldState,
	submitting: bool,
}

impl RegistrationForm {
	pub fn new() -> Self {
		let mut form = Self {
			first_name: FieldState::default(),
			last_name: FieldState::default(),
			email: FieldState::default(),
			password: FieldState::default(),
			submitting: false,
		};
		form.revalidate();
		form
	}

	fn field(&self, field: Field) -> &FieldState {
		match field {
			Field::FirstName => &self.first_name,
			Field::LastName => &self.last_name,
			Field::Email => &self.email,
			Field::Password => &self.password,
		}
	}

	fn field_mut(&mut self, field: Field) -> &mut FieldState {
		match field {
			Field::FirstName => &mut self.first_name,
			Field::LastName => &mut self.last_name,
			Field::Email => &mut self.email,
			Field::Password => &mut self.password,
		}
	}

	fn revalidate(&mut self) {
		for field in Field::ALL {
			let error = validation::field_error(field, self.value(field));
			self.field_mut(field).error = error;
		}
	}

	pub fn value(&self, field: Field) -> &str {
		&self.field(field).value
	}

	pub fn touched(&self, field: Field) -> bool {
		self.field(field).touched
	}

	/// The field's current rule or service error, whether or not it should
	/// be displayed yet.
	pub fn error(&self, field: Field) -> Option<&str> {
		self.field(field).error.as_deref()
	}

	/// The field's error for display. Errors stay hidden until the field was
	/// touched or a submission was attempted.
	pub fn visible_error(&self, field: Field) -> Option<&str> {
		if self.field(field).touched {
			self.error(field)
		} else {
			None
		}
	}

	pub fn is_submitting(&self) -> bool {
		self.submitting
	}

	pub fn has_errors(&self) -> bool {
		Field::ALL.iter().any(|field| self.field(*field).error.is_some())
	}

	/// Updates one field's value, marking it touched and recomputing every
	/// field's error.
	pub fn set_field(&mut self, field: Field, value: String) {
		let entry = self.field_mut(field);
		entry.value = value;
		entry.touched = true;
		self.revalidate();
	}

	/// Starts a submission. Returns the request to send when the form is
	/// valid and no submission is already in flight; the caller owns
	/// dispatching it and must resolve the attempt with [`Self::finish_submit`]
	/// or [`Self::abort_submit`].
	///
	/// Attempting to submit marks every field touched, so all current errors
	/// become visible even on fields the user never reached.
	pub fn begin_submit(&mut self) -> Option<SignupRequest> {
		if self.submitting {
			return None;
		}

		for field in Field::ALL {
			self.field_mut(field).touched = true;
		}
		self.revalidate();
		if self.has_errors() {
			return None;
		}

		self.submitting = true;
		Some(SignupRequest {
			first_name: self.first_name.value.clone(),
			last_name: self.last_name.value.clone(),
			email: self.email.value.clone(),
			password: self.password.value.clone(),
		})
	}

	/// Resolves the in-flight submission with the service's answer. A
	/// field-scoped rejection lands on the named field, where the next edit
	/// of that field replaces it with rule output again.
	pub fn finish_submit(&mut self, outcome: Result<(), SignupError>) -> SubmitOutcome {
		self.submitting = false;
		match outcome {
			Ok(()) => SubmitOutcome::Complete,
			Err(rejection) => {
				self.field_mut(rejection.field).error = Some(rejection.error);
				SubmitOutcome::Rejected
			}
		}
	}

	/// Resolves the in-flight submission without an answer from the service,
	/// leaving field state untouched so the user can simply try again.
	pub fn abort_submit(&mut self) {
		self.submitting = false;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn filled_form() -> RegistrationForm {
		let mut form = RegistrationForm::new();
		form.set_field(Field::FirstName, String::from("Al"));
		form.set_field(Field::LastName, String::new());
		form.set_field(Field::Email, String::from("a@b.com"));
		form.set_field(Field::Password, String::from("longenough"));
		form
	}

	fn email_in_use() -> SignupError {
		SignupError {
			field: Field::Email,
			error: String::from("Email already in use"),
		}
	}

	#[test]
	fn new_form_hides_errors_until_touched() {
		let form = RegistrationForm::new();
		assert!(form.error(Field::FirstName).is_some());
		assert!(form.visible_error(Field::FirstName).is_none());
		assert!(!form.is_submitting());
	}

	#[test]
	fn valid_form_submits_current_values() {
		let mut form = filled_form();
		assert!(!form.has_errors());

		let request = form.begin_submit().expect("valid form should produce a request");
		assert_eq!(request.first_name, "Al");
		assert_eq!(request.last_name, "");
		assert_eq!(request.email, "a@b.com");
		assert_eq!(request.password, "longenough");
		assert!(form.is_submitting());
	}

	#[test]
	fn submit_is_noop_while_in_flight() {
		let mut form = filled_form();
		assert!(form.begin_submit().is_some());
		assert!(form.begin_submit().is_none());
		assert!(form.is_submitting());
	}

	#[test]
	fn invalid_form_rejects_without_a_request() {
		let mut form = RegistrationForm::new();
		form.set_field(Field::FirstName, String::from("Al"));

		assert!(form.begin_submit().is_none());
		assert!(!form.is_submitting());
		for field in Field::ALL {
			assert!(form.touched(field));
		}
		assert!(form.visible_error(Field::Email).is_some());
		assert!(form.visible_error(Field::Password).is_some());
		assert!(form.visible_error(Field::LastName).is_none());
	}

	#[test]
	fn service_rejection_lands_on_named_field() {
		let mut form = filled_form();
		form.begin_submit().unwrap();

		let outcome = form.finish_submit(Err(email_in_use()));
		assert_eq!(outcome, SubmitOutcome::Rejected);
		assert!(!form.is_submitting());
		assert_eq!(form.visible_error(Field::Email), Some("Email already in use"));
	}

	#[test]
	fn service_acceptance_completes() {
		let mut form = filled_form();
		form.begin_submit().unwrap();

		let outcome = form.finish_submit(Ok(()));
		assert_eq!(outcome, SubmitOutcome::Complete);
		assert!(!form.is_submitting());
	}

	#[test]
	fn editing_replaces_service_rejection() {
		let mut form = filled_form();
		form.begin_submit().unwrap();
		form.finish_submit(Err(email_in_use()));

		form.set_field(Field::Email, String::from("other@b.com"));
		assert!(form.error(Field::Email).is_none());
	}

	#[test]
	fn abort_reenables_the_form() {
		let mut form = filled_form();
		form.begin_submit().unwrap();

		form.abort_submit();
		assert!(!form.is_submitting());
		assert!(!form.has_errors());
		assert!(form.begin_submit().is_some());
	}
}
