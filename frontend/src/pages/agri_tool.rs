use crate::components::layout::{Layout, PageHeading};
use leptos::*;

#[component]
pub fn AgriToolPage() -> impl IntoView {
    view! {
        <Layout>
            <section id="agri-tool-page" class="space-y-6">
                <PageHeading
                    title="Agricultural Tools"
                    description="Track tools, machinery and their availability."
                />
            </section>
        </Layout>
    }
}

pub fn view() -> View {
    view! { <AgriToolPage/> }.into_view()
}
