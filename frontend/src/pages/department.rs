use crate::components::layout::{Layout, PageHeading};
use leptos::*;

#[component]
pub fn DepartmentPage() -> impl IntoView {
    view! {
        <Layout>
            <section id="department-page" class="space-y-6">
                <PageHeading
                    title="Departments"
                    description="Manage departments and their responsibilities."
                />
            </section>
        </Layout>
    }
}

pub fn view() -> View {
    view! { <DepartmentPage/> }.into_view()
}
