use crate::components::layout::{Layout, PageHeading};
use leptos::*;

#[component]
pub fn EmployeePage() -> impl IntoView {
    view! {
        <Layout>
            <section id="employee-page" class="space-y-6">
                <PageHeading
                    title="Employees"
                    description="Manage employee records and department assignments."
                />
            </section>
        </Layout>
    }
}

pub fn view() -> View {
    view! { <EmployeePage/> }.into_view()
}
