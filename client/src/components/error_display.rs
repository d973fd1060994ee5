// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::errors::ErrorData;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[component]
pub fn ErrorDisplay<G: Html>(ctx: Scope<'_>) -> View<G> {
	let errors_signal: &Signal<Vec<ErrorData>> = use_context(ctx);
	let errors = create_memo(ctx, || (*errors_signal.get()).clone());

	view! {
		ctx,
		ul(id="page_errors") {
			Indexed(
				iterable=errors,
				view=|ctx, error| {
					let dismiss_handler = {
						let error = error.clone();
						move |_event: WebEvent| {
							let errors_signal: &Signal<Vec<ErrorData>> = use_context(ctx);
							let index = errors_signal.get().iter().position(|entry| *entry == error);
							if let Some(index) = index {
								errors_signal.modify().remove(index);
							}
						}
					};
					error.to_view(ctx, dismiss_handler)
				}
			)
		}
	}
}
