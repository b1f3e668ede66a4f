use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::{storage::use_local_storage, use_preferred_dark};

use crate::theme::{ThemeMode, THEME_KEY};

/// Shared handle to the current colour scheme.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    mode: RwSignal<ThemeMode>,
}

impl ThemeContext {
    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    pub fn toggle(&self) {
        self.mode.update(|m| *m = m.toggle());
    }
}

/// Restores the saved theme on load and owns the only write to storage.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let (stored, set_stored, _) = use_local_storage::<String, FromToStringCodec>(THEME_KEY);
    let prefers_dark = use_preferred_dark();
    // server and first client render both start light so hydration matches
    let mode = RwSignal::new(ThemeMode::default());

    Effect::new(move |_| {
        let stored = stored.get_untracked();
        mode.set(ThemeMode::initial(
            Some(stored.as_str()),
            prefers_dark.get_untracked(),
        ));
    });

    Effect::watch(
        move || mode.get(),
        move |mode, _, _| {
            set_stored.set(mode.to_string());
            apply_to_document(*mode);
        },
        false,
    );

    provide_context(ThemeContext { mode });
    children()
}

fn apply_to_document(mode: ThemeMode) {
    if let Some(root) = document().document_element() {
        let _ = root.class_list().toggle_with_force("dark", mode.is_dark());
    }
}
