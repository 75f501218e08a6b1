use super::helpers::with_runtime;
use crate::state::auth::{provide_auth, AuthContext};
use leptos::*;
use leptos_router::{provide_server_redirect, RouterIntegrationContext, ServerIntegration};
use std::{cell::RefCell, rc::Rc};

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Markup of a server-side render plus the redirect it requested, if any.
#[derive(Debug)]
pub struct RenderedRoute {
    pub html: String,
    pub redirect: Option<String>,
}

/// Renders `view` as a request for `path` with `auth` as the
/// authentication context.
pub fn render_at<F, N>(path: &str, auth: AuthContext, view: F) -> RenderedRoute
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    let url = format!("http://localhost{}", path);
    let redirect = Rc::new(RefCell::new(None::<String>));
    let recorded = Rc::clone(&redirect);
    let html = render_to_string(move || {
        provide_auth(auth);
        provide_context(RouterIntegrationContext::new(ServerIntegration { path: url }));
        provide_server_redirect(move |target: &str| {
            *recorded.borrow_mut() = Some(target.to_string());
        });
        view()
    });
    let redirect = redirect.borrow().clone();
    RenderedRoute { html, redirect }
}
