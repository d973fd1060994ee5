// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt::Display;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

/// A dismissible page-level error entry. Carries failures that can't
/// honestly be attached to a single form field, such as transport errors.
#[derive(Clone, Eq, PartialEq)]
pub struct ErrorData {
	message: &'static str,
	detail: Option<String>,
}

impl ErrorData {
	pub fn new_with_error(message: &'static str, error: impl Display) -> Self {
		let detail = Some(format!("{error}"));
		Self { message, detail }
	}

	pub fn to_view<'a, G: Html>(&self, ctx: Scope<'a>, dismiss_handler: impl Fn(WebEvent) + 'a) -> View<G> {
		let message = self.message;
		let detail = self.detail.clone();
		view! {
			ctx,
			li(class="page_error_entry") {
				span(class="page_error_entry_text") { (message) }
				(if let Some(detail) = detail.clone() {
					view! {
						ctx,
						span(class="page_error_entry_details") { (detail) }
					}
				} else {
					view! { ctx, }
				})
				span(class="page_error_entry_dismiss") {
					a(class="click", on:click=dismiss_handler) { "[X]" }
				}
			}
		}
	}
}
