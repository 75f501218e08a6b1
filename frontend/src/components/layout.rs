use crate::router::{RouteDefinition, RouteTable, HOME_PATH};
use leptos::*;

const NAV_LINK_CLASS: &str =
    "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";
const MOBILE_NAV_LINK_CLASS: &str =
    "block text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

pub fn nav_label(route: &RouteDefinition) -> &'static str {
    match route.name {
        "home" => "Home",
        "dashboard" => "Dashboard",
        "department" => "Departments",
        "employee" => "Employees",
        "agri-tool" => "Tools",
        "tool-usage" => "Tool Usage",
        "crop-management" => "Crops",
        "field-management" => "Fields",
        "visualization" => "Visualization",
        "deepseek-chat" => "Assistant",
        "video-monitor" => "Video Monitor",
        "about" => "About",
        other => other,
    }
}

fn nav_routes() -> Vec<&'static RouteDefinition> {
    RouteTable::default()
        .routes()
        .iter()
        .copied()
        .filter(|route| route.path != HOME_PATH)
        .collect()
}

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center">
                        <a href=HOME_PATH class="text-xl font-semibold text-fg">
                            "Agri Admin"
                        </a>
                    </div>
                    <div class="flex items-center">
                        <nav class="hidden lg:flex space-x-4">
                            {nav_routes()
                                .into_iter()
                                .map(|route| view! {
                                    <a href=route.path class=NAV_LINK_CLASS>{nav_label(route)}</a>
                                })
                                .collect_view()}
                        </nav>
                        <button
                            type="button"
                            class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                            </span>
                            <svg
                                class="h-6 w-6"
                                xmlns="http://www.w3.org/2000/svg"
                                fill="none"
                                viewBox="0 0 24 24"
                                stroke="currentColor"
                            >
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M4 6h16M4 12h16M4 18h16"
                                />
                            </svg>
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="lg:hidden border-t border-border">
                        <nav class="px-4 py-3 space-y-2">
                            {nav_routes()
                                .into_iter()
                                .map(|route| view! {
                                    <a
                                        href=route.path
                                        class=MOBILE_NAV_LINK_CLASS
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        {nav_label(route)}
                                    </a>
                                })
                                .collect_view()}
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn PageHeading(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div>
            <h1 class="text-2xl font-bold text-fg">{title}</h1>
            <p class="mt-1 text-sm text-fg-muted">{description}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_has_a_label() {
        for route in RouteTable::default().routes() {
            assert_ne!(nav_label(route), route.name, "missing label for {}", route.name);
        }
    }

    #[test]
    fn nav_skips_home() {
        let routes = nav_routes();
        assert_eq!(routes.len(), 11);
        assert!(routes.iter().all(|route| route.path != HOME_PATH));
    }
}
