use crate::{components::layout::Layout, router::ViewFn};
use leptos::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Layout>
            <section id="about-page" class="space-y-4">
                <h1 class="text-2xl font-bold text-fg">"About"</h1>
                <p class="text-sm text-fg-muted">
                    "Agri Admin brings departments, staff, tools, crops and fields together in one dashboard."
                </p>
            </section>
        </Layout>
    }
}

fn view() -> View {
    view! { <AboutPage/> }.into_view()
}

/// Loader for the about route, acquired on first visit.
pub fn load() -> ViewFn {
    view
}
