// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::prelude::*;

mod app;
mod components;
mod errors;
mod form;
mod pages;
mod services;
mod validation;

use app::{App, SessionState};
use errors::ErrorData;

fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());

	sycamore::render(|ctx| {
		let errors_signal = create_signal(ctx, Vec::<ErrorData>::new());
		provide_context_ref(ctx, errors_signal);

		let session_signal = create_signal(ctx, SessionState::default());
		provide_context_ref(ctx, session_signal);

		view! { ctx, App {} }
	});
}
