use crate::components::layout::{Layout, PageHeading};
use leptos::*;

#[component]
pub fn VideoMonitorPage() -> impl IntoView {
    view! {
        <Layout>
            <section id="video-monitor-page" class="space-y-6">
                <PageHeading
                    title="Video Monitor"
                    description="Live camera feeds from fields and storage sites."
                />
                <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                    {(1..=4)
                        .map(|camera| view! {
                            <div class="aspect-video rounded-lg bg-surface-elevated border border-border flex items-center justify-center text-sm text-fg-muted">
                                {format!("Camera {camera}")}
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>
        </Layout>
    }
}

pub fn view() -> View {
    view! { <VideoMonitorPage/> }.into_view()
}
