use crate::{
    components::layout::{nav_label, Layout, PageHeading},
    router::RouteTable,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let sections = RouteTable::default()
        .protected()
        .filter(|route| route.name != "dashboard")
        .map(|route| {
            view! {
                <a
                    href=route.path
                    class="block rounded-lg border border-border bg-surface-elevated p-4 shadow-sm hover:bg-action-ghost-bg-hover"
                >
                    <span class="text-sm font-medium text-fg">{nav_label(route)}</span>
                </a>
            }
        })
        .collect_view();

    view! {
        <Layout>
            <section id="dashboard-page" class="space-y-6">
                <PageHeading
                    title="Dashboard"
                    description="Overview of farm operations, staff and equipment at a glance."
                />
                <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-3">
                    {sections}
                </div>
            </section>
        </Layout>
    }
}

pub fn view() -> View {
    view! { <DashboardPage/> }.into_view()
}
