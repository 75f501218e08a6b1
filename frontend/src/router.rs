use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{components::guard::RouteOutlet, config, pages, state::auth::AuthProvider};

mod lazy;

pub use lazy::LazyView;

/// Redirect target for unauthenticated visits to protected routes.
pub const HOME_PATH: &str = "/";

pub type ViewFn = fn() -> View;

#[derive(Debug, Clone, Copy)]
pub enum ViewSource {
    Eager(ViewFn),
    Lazy(&'static LazyView),
}

impl ViewSource {
    pub fn render(&self) -> View {
        match self {
            ViewSource::Eager(view) => view(),
            ViewSource::Lazy(lazy) => (lazy.acquire())(),
        }
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self, ViewSource::Lazy(_))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RouteDefinition {
    pub path: &'static str,
    pub name: &'static str,
    pub view: ViewSource,
    pub requires_auth: bool,
}

impl RouteDefinition {
    pub const fn public(path: &'static str, name: &'static str, view: ViewSource) -> Self {
        Self {
            path,
            name,
            view,
            requires_auth: false,
        }
    }

    pub const fn protected(path: &'static str, name: &'static str, view: ViewSource) -> Self {
        Self {
            path,
            name,
            view,
            requires_auth: true,
        }
    }
}

static ABOUT_VIEW: LazyView = LazyView::new("about", pages::about::load);

pub static HOME: RouteDefinition =
    RouteDefinition::public("/", "home", ViewSource::Eager(pages::home::view));
pub static DASHBOARD: RouteDefinition = RouteDefinition::protected(
    "/dashboard",
    "dashboard",
    ViewSource::Eager(pages::dashboard::view),
);
pub static DEPARTMENT: RouteDefinition = RouteDefinition::protected(
    "/department",
    "department",
    ViewSource::Eager(pages::department::view),
);
pub static EMPLOYEE: RouteDefinition = RouteDefinition::protected(
    "/employee",
    "employee",
    ViewSource::Eager(pages::employee::view),
);
pub static AGRI_TOOL: RouteDefinition = RouteDefinition::protected(
    "/agri-tool",
    "agri-tool",
    ViewSource::Eager(pages::agri_tool::view),
);
pub static TOOL_USAGE: RouteDefinition = RouteDefinition::protected(
    "/tool-usage",
    "tool-usage",
    ViewSource::Eager(pages::tool_usage::view),
);
pub static CROP_MANAGEMENT: RouteDefinition = RouteDefinition::protected(
    "/crop-management",
    "crop-management",
    ViewSource::Eager(pages::crop_management::view),
);
pub static FIELD_MANAGEMENT: RouteDefinition = RouteDefinition::protected(
    "/field-management",
    "field-management",
    ViewSource::Eager(pages::field_management::view),
);
pub static VISUALIZATION: RouteDefinition = RouteDefinition::protected(
    "/visualization",
    "visualization",
    ViewSource::Eager(pages::visualization::view),
);
pub static DEEPSEEK_CHAT: RouteDefinition = RouteDefinition::protected(
    "/deepseek-chat",
    "deepseek-chat",
    ViewSource::Eager(pages::deepseek_chat::view),
);
pub static VIDEO_MONITOR: RouteDefinition = RouteDefinition::protected(
    "/video-monitor",
    "video-monitor",
    ViewSource::Eager(pages::video_monitor::view),
);
pub static ABOUT: RouteDefinition =
    RouteDefinition::public("/about", "about", ViewSource::Lazy(&ABOUT_VIEW));

pub static ROUTES: [&RouteDefinition; 12] = [
    &HOME,
    &DASHBOARD,
    &DEPARTMENT,
    &EMPLOYEE,
    &AGRI_TOOL,
    &TOOL_USAGE,
    &CROP_MANAGEMENT,
    &FIELD_MANAGEMENT,
    &VISUALIZATION,
    &DEEPSEEK_CHAT,
    &VIDEO_MONITOR,
    &ABOUT,
];

/// Read-only lookup over the static route list.
#[derive(Debug, Clone, Copy)]
pub struct RouteTable {
    routes: &'static [&'static RouteDefinition],
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(&ROUTES)
    }
}

impl RouteTable {
    pub const fn new(routes: &'static [&'static RouteDefinition]) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &'static [&'static RouteDefinition] {
        self.routes
    }

    /// Exact path match. A trailing slash is ignored, no wildcards.
    pub fn find(&self, path: &str) -> Option<&'static RouteDefinition> {
        let path = match path.trim_end_matches('/') {
            "" => HOME_PATH,
            trimmed => trimmed,
        };
        self.routes.iter().copied().find(|route| route.path == path)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&'static RouteDefinition> {
        self.routes.iter().copied().find(|route| route.name == name)
    }

    pub fn protected(&self) -> impl Iterator<Item = &'static RouteDefinition> {
        self.routes.iter().copied().filter(|route| route.requires_auth)
    }

    pub fn public(&self) -> impl Iterator<Item = &'static RouteDefinition> {
        self.routes.iter().copied().filter(|route| !route.requires_auth)
    }
}

pub fn mount_app() {
    mount_to_body(app_root);
}

fn outlet(route: &'static RouteDefinition) -> impl IntoView {
    view! { <RouteOutlet route=route/> }
}

/// Router with one `<Route>` per table entry, each rendered through the
/// guard outlet. The auth context comes from the surrounding provider.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router base=config::base_url()>
            <Routes>
                <Route path=HOME.path view=|| outlet(&HOME)/>
                <Route path=DASHBOARD.path view=|| outlet(&DASHBOARD)/>
                <Route path=DEPARTMENT.path view=|| outlet(&DEPARTMENT)/>
                <Route path=EMPLOYEE.path view=|| outlet(&EMPLOYEE)/>
                <Route path=AGRI_TOOL.path view=|| outlet(&AGRI_TOOL)/>
                <Route path=TOOL_USAGE.path view=|| outlet(&TOOL_USAGE)/>
                <Route path=CROP_MANAGEMENT.path view=|| outlet(&CROP_MANAGEMENT)/>
                <Route path=FIELD_MANAGEMENT.path view=|| outlet(&FIELD_MANAGEMENT)/>
                <Route path=VISUALIZATION.path view=|| outlet(&VISUALIZATION)/>
                <Route path=DEEPSEEK_CHAT.path view=|| outlet(&DEEPSEEK_CHAT)/>
                <Route path=VIDEO_MONITOR.path view=|| outlet(&VIDEO_MONITOR)/>
                <Route path=ABOUT.path view=|| outlet(&ABOUT)/>
            </Routes>
        </Router>
    }
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    view! {
        <AuthProvider>
            <AppRoutes/>
        </AuthProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const EXPECTED: &[(&str, &str, bool)] = &[
        ("/", "home", false),
        ("/dashboard", "dashboard", true),
        ("/department", "department", true),
        ("/employee", "employee", true),
        ("/agri-tool", "agri-tool", true),
        ("/tool-usage", "tool-usage", true),
        ("/crop-management", "crop-management", true),
        ("/field-management", "field-management", true),
        ("/visualization", "visualization", true),
        ("/deepseek-chat", "deepseek-chat", true),
        ("/video-monitor", "video-monitor", true),
        ("/about", "about", false),
    ];

    #[test]
    fn table_matches_declared_order_and_protection() {
        let actual: Vec<(&str, &str, bool)> = RouteTable::default()
            .routes()
            .iter()
            .map(|route| (route.path, route.name, route.requires_auth))
            .collect();
        assert_eq!(actual, EXPECTED);
    }

    #[test]
    fn route_list_points_at_the_registered_statics() {
        let registered: [&RouteDefinition; 12] = [
            &HOME,
            &DASHBOARD,
            &DEPARTMENT,
            &EMPLOYEE,
            &AGRI_TOOL,
            &TOOL_USAGE,
            &CROP_MANAGEMENT,
            &FIELD_MANAGEMENT,
            &VISUALIZATION,
            &DEEPSEEK_CHAT,
            &VIDEO_MONITOR,
            &ABOUT,
        ];
        for (listed, static_route) in ROUTES.iter().zip(registered.iter()) {
            assert!(
                std::ptr::eq(*listed, *static_route),
                "{} is not the registered static",
                listed.path
            );
        }
    }

    #[test]
    fn no_duplicate_paths_or_names() {
        let paths: HashSet<&str> = ROUTES.iter().map(|route| route.path).collect();
        let names: HashSet<&str> = ROUTES.iter().map(|route| route.name).collect();
        assert_eq!(paths.len(), ROUTES.len());
        assert_eq!(names.len(), ROUTES.len());
    }

    #[test]
    fn paths_start_with_slash_and_have_no_wildcards() {
        for route in ROUTES.iter() {
            assert!(route.path.starts_with('/'), "bad path: {}", route.path);
            assert!(!route.path.contains('*'), "wildcard path: {}", route.path);
            assert!(!route.path.contains(':'), "param path: {}", route.path);
        }
    }

    #[test]
    fn only_home_and_about_are_public() {
        let public: Vec<&str> = RouteTable::default().public().map(|r| r.path).collect();
        assert_eq!(public, vec![HOME_PATH, "/about"]);
        assert_eq!(RouteTable::default().protected().count(), 10);
    }

    #[test]
    fn redirect_target_is_public() {
        let home = RouteTable::default().find(HOME_PATH).expect("home route");
        assert!(!home.requires_auth);
    }

    #[test]
    fn only_about_is_lazy() {
        let lazy: Vec<&str> = ROUTES
            .iter()
            .filter(|route| route.view.is_lazy())
            .map(|route| route.name)
            .collect();
        assert_eq!(lazy, vec!["about"]);
    }

    #[test]
    fn find_ignores_trailing_slash() {
        let table = RouteTable::default();
        assert_eq!(table.find("/employee/").map(|r| r.name), Some("employee"));
        assert_eq!(table.find("").map(|r| r.name), Some("home"));
        assert_eq!(table.find("/").map(|r| r.name), Some("home"));
    }

    #[test]
    fn unmatched_paths_are_not_found() {
        let table = RouteTable::default();
        assert!(table.find("/login").is_none());
        assert!(table.find("/dashboard/extra").is_none());
        assert!(table.find("/Dashboard").is_none());
    }

    #[test]
    fn find_by_name_returns_matching_route() {
        let table = RouteTable::default();
        assert_eq!(
            table.find_by_name("crop-management").map(|r| r.path),
            Some("/crop-management")
        );
        assert!(table.find_by_name("missing").is_none());
    }
}
