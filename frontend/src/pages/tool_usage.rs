use crate::components::layout::{Layout, PageHeading};
use leptos::*;

#[component]
pub fn ToolUsagePage() -> impl IntoView {
    view! {
        <Layout>
            <section id="tool-usage-page" class="space-y-6">
                <PageHeading
                    title="Tool Usage"
                    description="Apply for tools and review usage requests."
                />
            </section>
        </Layout>
    }
}

pub fn view() -> View {
    view! { <ToolUsagePage/> }.into_view()
}
