use crate::components::layout::{Layout, PageHeading};
use leptos::*;

#[component]
pub fn VisualizationPage() -> impl IntoView {
    view! {
        <Layout>
            <section id="visualization-page" class="space-y-6">
                <PageHeading
                    title="Visualization"
                    description="Charts and large-screen views of farm data."
                />
            </section>
        </Layout>
    }
}

pub fn view() -> View {
    view! { <VisualizationPage/> }.into_view()
}
