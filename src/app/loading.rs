use leptos::prelude::*;

use crate::loading::{random_increment, LoadingProgress, COMPLETE_DELAY, TICK};

/// Full-screen progress overlay shown once per page load.
#[component]
pub fn LoadingGate() -> impl IntoView {
    let progress = RwSignal::new(LoadingProgress::new());
    let visible = RwSignal::new(true);
    let interval = StoredValue::new(None::<IntervalHandle>);

    Effect::new(move |_| {
        let handle = set_interval_with_handle(
            move || {
                let completed = progress
                    .try_update(|p| p.advance(random_increment(&mut rand::thread_rng())))
                    .unwrap_or_default();
                if completed {
                    if let Some(handle) = interval.get_value() {
                        handle.clear();
                    }
                    set_timeout(move || visible.set(false), COMPLETE_DELAY);
                }
            },
            TICK,
        );
        match handle {
            Ok(handle) => interval.set_value(Some(handle)),
            Err(e) => {
                log::error!("couldn't start loading timer: {e:?}");
                visible.set(false);
            }
        }
    });

    view! {
        <Show when=move || visible.get()>
            <div class="fixed inset-0 z-[9999] flex items-center justify-center bg-white dark:bg-gray-950">
                <div class="text-center">
                    <div class="relative w-24 h-24 mx-auto mb-8">
                        <div class="absolute inset-0 rounded-full border-4 border-transparent border-t-indigo-600 animate-spin"></div>
                        <div class="absolute inset-2 flex items-center justify-center rounded-full bg-gradient-to-br from-indigo-600 to-purple-600">
                            <span class="text-3xl font-black text-white">"R"</span>
                        </div>
                    </div>
                    <h2 class="mb-4 text-2xl font-bold">"Loading Portfolio"</h2>
                    <div class="w-64 h-2 mx-auto overflow-hidden rounded-full bg-gray-200 dark:bg-gray-800">
                        <div
                            class="h-full rounded-full bg-gradient-to-r from-indigo-600 to-purple-600"
                            style=move || format!("width: {}%", progress.get().percent())
                        ></div>
                    </div>
                    <p class="mt-4 text-sm text-gray-500">
                        {move || format!("{}%", progress.get().rounded())}
                    </p>
                </div>
            </div>
        </Show>
    }
}
