use leptos::prelude::*;

use crate::section::{SectionState, Skeleton};

#[component]
pub fn SkeletonView(#[prop(optional)] variant: Skeleton) -> impl IntoView {
    let style = format!("min-height: {}", variant.min_height());
    let body = match variant {
        Skeleton::Hero => view! {
            <div class="flex flex-col items-center justify-center gap-6 h-full">
                <div class="loading-skeleton w-32 h-32 rounded-full"></div>
                <div class="loading-skeleton w-2/3 h-12 rounded-lg"></div>
                <div class="loading-skeleton w-1/2 h-6 rounded-lg"></div>
            </div>
        }
        .into_any(),
        Skeleton::Card => view! {
            <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                {(0..3)
                    .map(|_| view! { <div class="loading-skeleton h-64 rounded-2xl"></div> })
                    .collect_view()}
            </div>
        }
        .into_any(),
        Skeleton::Grid => view! {
            <div class="grid gap-6 md:grid-cols-2">
                {(0..4)
                    .map(|_| view! { <div class="loading-skeleton h-56 rounded-2xl"></div> })
                    .collect_view()}
            </div>
        }
        .into_any(),
        Skeleton::Block => view! {
            <div class="space-y-4">
                <div class="loading-skeleton h-10 w-1/3 rounded-lg"></div>
                <div class="loading-skeleton h-4 w-full rounded"></div>
                <div class="loading-skeleton h-4 w-5/6 rounded"></div>
                <div class="loading-skeleton h-4 w-2/3 rounded"></div>
            </div>
        }
        .into_any(),
    };
    view! {
        <div class="max-w-6xl mx-auto px-4 py-16" style=style aria-busy="true">
            {body}
        </div>
    }
}

/// Wraps a page section in a loading placeholder and an error fallback.
///
/// A section that fails to render is replaced by a retry card; the rest of the
/// page keeps working. Retrying builds the section's children from scratch.
#[component]
pub fn LazySection(#[prop(optional)] skeleton: Skeleton, children: ChildrenFn) -> impl IntoView {
    let state = RwSignal::new(SectionState::<()>::pending());
    let attempt = RwSignal::new(0_u32);

    let content = move || {
        attempt.track();
        let view = children();
        // runs after the boundary has had its chance to fail this attempt
        Effect::new(move |_| state.update(|s| s.resolve(())));
        view
    };

    view! {
        <div class="contents" aria-busy=move || state.with(SectionState::is_pending).to_string()>
            <ErrorBoundary fallback=move |errors| view! { <SectionError errors state attempt /> }>
                <Suspense fallback=move || view! { <SkeletonView variant=skeleton /> }>
                    {content.clone()}
                </Suspense>
            </ErrorBoundary>
        </div>
    }
}

#[component]
fn SectionError(
    errors: ArcRwSignal<Errors>,
    state: RwSignal<SectionState<()>>,
    attempt: RwSignal<u32>,
) -> impl IntoView {
    let cause = errors
        .get_untracked()
        .into_iter()
        .next()
        .map(|(_, e)| e.to_string())
        .unwrap_or_else(|| "Failed to load component".to_string());
    state.update(|s| s.fail(cause));

    let retry = move |_| {
        if state.try_update(SectionState::reset).unwrap_or_default() {
            errors.set(Errors::default());
            attempt.update(|n| *n += 1);
        }
    };

    view! {
        <div class="max-w-xl mx-auto my-12 p-8 text-center rounded-2xl border border-red-200 bg-red-50 dark:border-red-900 dark:bg-red-950/30">
            <h3 class="mb-2 text-xl font-bold text-red-600 dark:text-red-400">
                "Oops! Something went wrong"
            </h3>
            <p class="mb-6 text-sm text-gray-600 dark:text-gray-400">
                {move || state.with(|s| s.error().map(str::to_string))}
            </p>
            <button
                class="px-6 py-2 rounded-full bg-indigo-600 text-white font-semibold hover:bg-indigo-700 transition-colors"
                on:click=retry
            >
                "Try Again"
            </button>
        </div>
    }
}
