use chrono::Local;
use leptos::{ev::SubmitEvent, prelude::*};

use crate::chat::{bot_reply, Conversation, Sender, QUICK_REPLIES, REPLY_DELAY};

/// Floating chat bubble with canned replies.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let (open, set_open) = signal(false);
    let (draft, set_draft) = signal(String::new());
    let conversation = RwSignal::new(Conversation::new(&Local::now()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let text = draft.get_untracked();
        let sent = conversation
            .try_update(|c| c.send(&text, &Local::now()).is_some())
            .unwrap_or_default();
        if !sent {
            return;
        }
        set_draft.set(String::new());
        set_timeout(
            move || conversation.update(|c| c.receive(bot_reply(&text), &Local::now())),
            REPLY_DELAY,
        );
    };

    view! {
        <div class="fixed bottom-6 right-6 z-50">
            <Show when=move || open.get()>
                <div class="mb-4 w-80 sm:w-96 flex flex-col overflow-hidden rounded-3xl bg-white dark:bg-gray-900 border border-gray-200 dark:border-gray-800 shadow-2xl">
                    <div class="px-5 py-4 bg-gradient-to-r from-indigo-600 to-purple-600 text-white">
                        <p class="font-bold">"Chat with Rahul"</p>
                        <p class="text-xs opacity-80">"Usually replies instantly"</p>
                    </div>
                    <div class="h-80 overflow-y-auto p-4 space-y-3">
                        {move || {
                            conversation
                                .with(|c| c.messages().to_vec())
                                .into_iter()
                                .map(|message| {
                                    let from_user = message.sender == Sender::User;
                                    view! {
                                        <div class=if from_user {
                                            "flex justify-end"
                                        } else {
                                            "flex justify-start"
                                        }>
                                            <div class=if from_user {
                                                "max-w-[80%] px-4 py-2 rounded-2xl bg-indigo-600 text-white"
                                            } else {
                                                "max-w-[80%] px-4 py-2 rounded-2xl bg-gray-100 dark:bg-gray-800"
                                            }>
                                                <p class="text-sm">{message.text}</p>
                                                <p class="mt-1 text-[10px] opacity-60">
                                                    {message.timestamp}
                                                </p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                    <div class="flex flex-wrap gap-2 px-4 pb-2">
                        {QUICK_REPLIES
                            .iter()
                            .map(|reply| {
                                view! {
                                    <button
                                        type="button"
                                        class="px-3 py-1 text-xs rounded-full border border-indigo-200 dark:border-indigo-800 hover:bg-indigo-50 dark:hover:bg-indigo-950"
                                        on:click=move |_| set_draft.set(reply.to_string())
                                    >
                                        {*reply}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <form on:submit=on_submit class="flex gap-2 p-4 border-t border-gray-200 dark:border-gray-800">
                        <input
                            type="text"
                            placeholder="Type a message..."
                            class="flex-1 px-4 py-2 rounded-full border border-gray-300 dark:border-gray-700 bg-transparent text-sm focus:outline-none focus:ring-2 focus:ring-indigo-600"
                            prop:value=move || draft.get()
                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                        />
                        <button
                            type="submit"
                            class="px-4 py-2 rounded-full bg-indigo-600 text-white text-sm font-semibold"
                        >
                            "Send"
                        </button>
                    </form>
                </div>
            </Show>
            <button
                class="ml-auto flex items-center justify-center w-14 h-14 rounded-full bg-gradient-to-br from-indigo-600 to-purple-600 text-white text-2xl shadow-xl hover:scale-110 transition-transform"
                aria-label="Toggle chat"
                on:click=move |_| set_open.update(|open| *open = !*open)
            >
                {move || if open.get() { "✕" } else { "💬" }}
            </button>
        </div>
    }
}
