use crate::components::layout::{Layout, PageHeading};
use leptos::*;

#[component]
pub fn DeepseekChatPage() -> impl IntoView {
    view! {
        <Layout>
            <section id="deepseek-chat-page" class="space-y-6">
                <PageHeading
                    title="Assistant"
                    description="Ask the DeepSeek assistant about crops, fields and tools."
                />
                <div class="rounded-lg border border-border bg-surface-elevated p-4 shadow-sm">
                    <textarea
                        class="w-full rounded-md border border-border bg-surface p-2 text-sm text-fg"
                        rows="4"
                        placeholder="Ask a question"
                    ></textarea>
                </div>
            </section>
        </Layout>
    }
}

pub fn view() -> View {
    view! { <DeepseekChatPage/> }.into_view()
}
