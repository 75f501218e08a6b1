use crate::components::layout::{Layout, PageHeading};
use leptos::*;

#[component]
pub fn FieldManagementPage() -> impl IntoView {
    view! {
        <Layout>
            <section id="field-management-page" class="space-y-6">
                <PageHeading
                    title="Field Management"
                    description="Manage fields, plots and their current crops."
                />
            </section>
        </Layout>
    }
}

pub fn view() -> View {
    view! { <FieldManagementPage/> }.into_view()
}
