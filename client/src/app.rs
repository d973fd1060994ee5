// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::components::error_display::ErrorDisplay;
use crate::pages::home::HomeView;
use crate::pages::not_found::NotFoundView;
use crate::pages::register::RegistrationView;
use crate::pages::sign_in::SignInView;
use sycamore::prelude::*;
use sycamore_router::{HistoryIntegration, Route, Router};

/// Whether this browser session has completed sign-up. Set by the
/// registration page when the sign-up service accepts a submission.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SessionState {
	pub signed_in: bool,
}

#[derive(Route)]
pub enum AppRoute {
	#[to("/")]
	SignIn,
	#[to("/register")]
	Register,
	#[to("/app")]
	Home,
	#[not_found]
	NotFound,
}

#[component]
pub fn App<G: Html>(ctx: Scope) -> View<G> {
	view! {
		ctx,
		Router(
			integration=HistoryIntegration::new(),
			view=|ctx, route: &ReadSignal<AppRoute>| {
				view! {
					ctx,
					div(class="app") {
						ErrorDisplay {}
						(match route.get().as_ref() {
							AppRoute::SignIn => view! { ctx, SignInView {} },
							AppRoute::Register => view! { ctx, RegistrationView {} },
							AppRoute::Home => view! { ctx, HomeView {} },
							AppRoute::NotFound => view! { ctx, NotFoundView {} },
						})
					}
				}
			}
		)
	}
}
