// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::app::SessionState;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore_router::navigate;

#[component]
pub fn HomeView<G: Html>(ctx: Scope) -> View<G> {
	let session_signal: &Signal<SessionState> = use_context(ctx);
	if !session_signal.get().signed_in {
		spawn_local_scoped(ctx, async {
			navigate("/register");
		});
		return view! { ctx, };
	}

	view! {
		ctx,
		div(id="home") {
			h1 { "Welcome!" }
			p { "Your account has been created and you're signed in." }
		}
	}
}
