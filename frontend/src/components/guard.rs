use crate::{
    guard::{GuardDecision, NavigationGuard},
    router::RouteDefinition,
    state::auth::use_auth,
};
use leptos::*;
use leptos_meta::Title;
use leptos_router::{NavigateOptions, Redirect};

/// Mounted by the router for a matched route. Runs the navigation guard
/// before the route's view is constructed.
#[component]
pub fn RouteOutlet(route: &'static RouteDefinition) -> impl IntoView {
    let guard = NavigationGuard::new(use_auth());
    match guard.check(route) {
        GuardDecision::Proceed => view! {
            <Title text=page_title(route)/>
            {route.view.render()}
        }
        .into_view(),
        GuardDecision::Redirect(target) => {
            log::debug!("`{}` requires a credential, redirecting to {}", route.name, target);
            let options = NavigateOptions {
                replace: true,
                ..Default::default()
            };
            view! { <Redirect path=target options=options/> }.into_view()
        }
    }
}

fn page_title(route: &RouteDefinition) -> String {
    format!("Agri Admin | {}", route.name)
}
