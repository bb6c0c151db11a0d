//! Chatbot page - conversation with the farming assistant

use agrovision_core::{ChatMessage, Role};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::api::chat;
use crate::components::{ChatInput, LoadingDots};
use crate::state::AppState;

#[component]
pub fn ChatbotPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let session = state.chat;
    let input = RwSignal::new(String::new());
    let messages_end_ref = NodeRef::<leptos::html::Div>::new();

    let is_waiting = Signal::derive(move || session.with(|s| s.is_waiting()));

    // Auto-scroll to bottom when new messages arrive
    Effect::new(move |_| {
        session.track();
        if let Some(el) = messages_end_ref.get() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    let send = {
        let state = state.clone();
        move || {
            let text = input.get_untracked();
            let today = chrono::Local::now().date_naive();
            let ctx = state.ctx.clone();
            let request = match session.try_update(|s| s.submit(&ctx, &text, today)) {
                Some(Ok(request)) => request,
                Some(Err(e)) => {
                    tracing::debug!("Message not sent: {}", e);
                    return;
                }
                None => return,
            };
            input.set(String::new());

            let base_url = state.api_base.get_untracked();
            spawn_local(async move {
                let reply = chat(&base_url, &request).await.map(|r| r.answer);
                session.update(|s| {
                    s.complete(reply);
                });
            });
        }
    };

    view! {
        <div class="max-w-7xl mx-auto px-4 py-8 grid md:grid-cols-[18rem_1fr] gap-6 h-[calc(100vh-4rem)]">
            <aside class="bg-white rounded-3xl shadow p-4 flex flex-col gap-4 overflow-hidden">
                <button
                    on:click=move |_| session.update(|s| s.reset())
                    class="w-full py-3 bg-green-700 hover:bg-green-800 text-white font-semibold rounded-full"
                >
                    "+ New Chat"
                </button>
                <h3 class="text-xs font-semibold text-gray-400 uppercase tracking-wider px-2">"Recent"</h3>
                <div class="flex-1 overflow-y-auto space-y-1">
                    {move || {
                        let history = session.with(|s| s.history().to_vec());
                        if history.is_empty() {
                            view! {
                                <p class="text-sm text-gray-400 italic px-2">"No recent history"</p>
                            }
                            .into_any()
                        } else {
                            history
                                .into_iter()
                                .enumerate()
                                .map(|(i, entry)| view! {
                                    <div class="group flex items-center justify-between gap-2 px-2 py-2 rounded-lg hover:bg-green-50">
                                        <div class="min-w-0">
                                            <p class="truncate text-sm font-medium">{entry.title}</p>
                                            <p class="text-xs text-gray-400">{entry.date.format("%b %-d, %Y").to_string()}</p>
                                        </div>
                                        <button
                                            aria-label="Delete"
                                            class="text-gray-400 hover:text-red-600 opacity-0 group-hover:opacity-100"
                                            on:click=move |_| session.update(|s| {
                                                if let Err(e) = s.delete_history(i) {
                                                    tracing::debug!("History entry not removed: {}", e);
                                                }
                                            })
                                        >
                                            "🗑"
                                        </button>
                                    </div>
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }}
                </div>
            </aside>

            <section class="bg-white rounded-3xl shadow flex flex-col overflow-hidden">
                <div class="flex-1 overflow-y-auto p-6 space-y-4">
                    {move || session
                        .with(|s| s.messages().to_vec())
                        .into_iter()
                        .map(|message| view! { <MessageBubble message=message /> })
                        .collect::<Vec<_>>()}
                    <Show when=move || is_waiting.get()>
                        <div class="flex justify-start">
                            <div class="px-4 py-3 bg-gray-100 rounded-2xl">
                                <LoadingDots />
                            </div>
                        </div>
                    </Show>
                    <div node_ref=messages_end_ref></div>
                </div>
                <ChatInput value=input on_submit=send disabled=is_waiting />
            </section>
        </div>
    }
}

/// One transcript entry, aligned by speaker
#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let (row, bubble) = match message.role {
        Role::User => ("flex justify-end", "bg-green-700 text-white rounded-br-sm"),
        Role::Assistant | Role::System => ("flex justify-start", "bg-gray-100 text-gray-800 rounded-bl-sm"),
    };

    view! {
        <div class=row>
            <div class=format!("max-w-[75%] px-4 py-3 rounded-2xl whitespace-pre-wrap {}", bubble)>
                {message.content}
            </div>
        </div>
    }
}
