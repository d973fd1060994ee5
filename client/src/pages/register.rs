// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::app::SessionState;
use crate::errors::ErrorData;
use crate::form::{RegistrationForm, SubmitOutcome};
use crate::services::send_signup;
use portal_shared::messages::signup::Field;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore_router::navigate;
use wasm_bindgen::JsCast;
use web_sys::{Event as WebEvent, HtmlInputElement};

/// Reads the current value of the input element that fired the event.
fn event_input_value(event: &WebEvent) -> Option<String> {
	let input: HtmlInputElement = event.target()?.dyn_into().ok()?;
	Some(input.value())
}

#[component]
pub fn RegistrationView<G: Html>(ctx: Scope<'_>) -> View<G> {
	{
		let session_signal: &Signal<SessionState> = use_context(ctx);
		if session_signal.get().signed_in {
			spawn_local_scoped(ctx, async {
				navigate("/app");
			});
			return view! { ctx, };
		}
	}

	let form_signal = create_signal(ctx, RegistrationForm::new());

	let first_name_error_signal = create_memo(ctx, || form_signal.get().visible_error(Field::FirstName).map(String::from));
	let last_name_error_signal = create_memo(ctx, || form_signal.get().visible_error(Field::LastName).map(String::from));
	let email_error_signal = create_memo(ctx, || form_signal.get().visible_error(Field::Email).map(String::from));
	let password_error_signal = create_memo(ctx, || form_signal.get().visible_error(Field::Password).map(String::from));

	// Class signals determine what the class of each input should be based on whether it has a visible error
	let first_name_class_signal = create_memo(ctx, || if (*first_name_error_signal.get()).is_some() { "error" } else { "" });
	let last_name_class_signal = create_memo(ctx, || if (*last_name_error_signal.get()).is_some() { "error" } else { "" });
	let email_class_signal = create_memo(ctx, || if (*email_error_signal.get()).is_some() { "error" } else { "" });
	let password_class_signal = create_memo(ctx, || if (*password_error_signal.get()).is_some() { "error" } else { "" });

	let submitting_signal = create_memo(ctx, || form_signal.get().is_submitting());

	let first_name_input_handler = move |event: WebEvent| {
		let Some(value) = event_input_value(&event) else { return; };
		form_signal.modify().set_field(Field::FirstName, value);
	};
	let last_name_input_handler = move |event: WebEvent| {
		let Some(value) = event_input_value(&event) else { return; };
		form_signal.modify().set_field(Field::LastName, value);
	};
	let email_input_handler = move |event: WebEvent| {
		let Some(value) = event_input_value(&event) else { return; };
		form_signal.modify().set_field(Field::Email, value);
	};
	let password_input_handler = move |event: WebEvent| {
		let Some(value) = event_input_value(&event) else { return; };
		form_signal.modify().set_field(Field::Password, value);
	};

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		// Returns no request while a submission is in flight or any field
		// fails its rule; in the latter case the errors are now visible.
		let Some(request) = form_signal.modify().begin_submit() else { return; };

		spawn_local_scoped(ctx, async move {
			match send_signup(&request).await {
				Ok(outcome) => {
					let outcome = form_signal.modify().finish_submit(outcome);
					match outcome {
						SubmitOutcome::Complete => {
							let session_signal: &Signal<SessionState> = use_context(ctx);
							session_signal.set(SessionState { signed_in: true });
							navigate("/app");
						}
						SubmitOutcome::Rejected => (),
					}
				}
				Err(error) => {
					log::error!("Sign-up request failed: {}", error);
					form_signal.modify().abort_submit();
					let errors_signal: &Signal<Vec<ErrorData>> = use_context(ctx);
					errors_signal.modify().push(ErrorData::new_with_error(
						"Couldn't reach the sign-up service. Check your connection and try again.",
						error,
					));
				}
			}
		});
	};

	view! {
		ctx,
		h1 { "Sign up" }
		form(id="register_form", on:submit=form_submission_handler) {
			div(class="input_with_message") {
				label(for="register_first_name") {
					"First name: "
				}
				input(id="register_first_name", name="firstName", type="text", class=*first_name_class_signal.get(), on:input=first_name_input_handler, autofocus=true)
				(if let Some(message) = (*first_name_error_signal.get()).clone() {
					view! {
						ctx,
						span(class="input_error register_first_name_error") { (message) }
					}
				} else {
					view! { ctx, }
				})
			}
			div(class="input_with_message") {
				label(for="register_last_name") {
					"Last name: "
				}
				input(id="register_last_name", name="lastName", type="text", class=*last_name_class_signal.get(), on:input=last_name_input_handler)
				(if let Some(message) = (*last_name_error_signal.get()).clone() {
					view! {
						ctx,
						span(class="input_error register_last_name_error") { (message) }
					}
				} else {
					view! { ctx, }
				})
			}
			div(class="input_with_message") {
				label(for="register_email") {
					"Email address: "
				}
				input(id="register_email", name="email", type="text", class=*email_class_signal.get(), on:input=email_input_handler)
				(if let Some(message) = (*email_error_signal.get()).clone() {
					view! {
						ctx,
						span(class="input_error register_email_error") { (message) }
					}
				} else {
					view! { ctx, }
				})
			}
			div(class="input_with_message") {
				label(for="register_password") {
					"Password: "
				}
				input(id="register_password", name="password", type="password", class=*password_class_signal.get(), on:input=password_input_handler)
				(if let Some(message) = (*password_error_signal.get()).clone() {
					view! {
						ctx,
						span(class="input_error register_password_error") { (message) }
					}
				} else {
					view! { ctx, }
				})
			}
			button(type="submit", disabled=*submitting_signal.get()) {
				"Sign up"
			}
		}
		p(class="register_sign_in_link") {
			a(href="/") { "Already have an account? Sign in" }
		}
	}
}
