use crate::components::layout::{Layout, PageHeading};
use leptos::*;

#[component]
pub fn CropManagementPage() -> impl IntoView {
    view! {
        <Layout>
            <section id="crop-management-page" class="space-y-6">
                <PageHeading
                    title="Crop Management"
                    description="Plan crops, growth stages and harvests."
                />
            </section>
        </Layout>
    }
}

pub fn view() -> View {
    view! { <CropManagementPage/> }.into_view()
}
