use leptos::{ev, prelude::*};

use super::theme::ThemeContext;
use crate::scroll::scroll_ratio;

const NAV_LINKS: [(&str, &str); 7] = [
    ("Home", "#home"),
    ("About", "#about"),
    ("Services", "#services"),
    ("Projects", "#projects"),
    ("Certifications", "#certifications"),
    ("Testimonials", "#testimonials"),
    ("Contact", "#contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();
    let (menu_open, set_menu_open) = signal(false);

    let links = move |mobile: bool| {
        NAV_LINKS
            .iter()
            .map(|(label, href)| {
                view! {
                    <a
                        href=*href
                        class=if mobile {
                            "block px-4 py-3 rounded-lg hover:bg-gray-100 dark:hover:bg-gray-800"
                        } else {
                            "px-3 py-2 text-sm font-medium hover:text-indigo-600 dark:hover:text-indigo-400 transition-colors"
                        }
                        on:click=move |_| set_menu_open.set(false)
                    >
                        {*label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="fixed top-0 inset-x-0 z-50 backdrop-blur-md bg-white/70 dark:bg-gray-950/70 border-b border-gray-200/50 dark:border-gray-800/50">
            <ScrollProgress />
            <div class="max-w-6xl mx-auto px-4 h-16 flex items-center justify-between">
                <a href="#home" class="text-2xl font-black tracking-tight">
                    "Rahul"
                    <span class="text-indigo-600">"."</span>
                </a>
                <nav class="hidden lg:flex items-center gap-1">{links(false)}</nav>
                <div class="flex items-center gap-2">
                    <button
                        class="p-2 rounded-full hover:bg-gray-100 dark:hover:bg-gray-800 transition-colors"
                        aria-label="Toggle theme"
                        on:click=move |_| theme.toggle()
                    >
                        {move || if theme.mode().is_dark() { "☀️" } else { "🌙" }}
                    </button>
                    <button
                        class="lg:hidden p-2 rounded-full hover:bg-gray-100 dark:hover:bg-gray-800"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <nav class="lg:hidden px-4 pb-4 bg-white dark:bg-gray-950">{links(true)}</nav>
            </Show>
        </header>
    }
}

/// Thin bar across the top of the viewport tracking how far the page is scrolled.
#[component]
fn ScrollProgress() -> impl IntoView {
    let (ratio, set_ratio) = signal(0.0_f64);

    Effect::new(move |_| {
        let handle = window_event_listener(ev::scroll, move |_| {
            if let Some(root) = document().document_element() {
                set_ratio.set(scroll_ratio(
                    f64::from(root.scroll_top()),
                    f64::from(root.scroll_height()),
                    f64::from(root.client_height()),
                ));
            }
        });
        on_cleanup(move || handle.remove());
    });

    view! {
        <div class="absolute top-0 left-0 h-1 w-full">
            <div
                class="h-full bg-gradient-to-r from-indigo-600 via-purple-600 to-pink-600 origin-left"
                style=move || format!("transform: scaleX({})", ratio.get())
            ></div>
        </div>
    }
}
