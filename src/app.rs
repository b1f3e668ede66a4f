mod chat;
mod contact;
mod header;
mod homepage;
mod lazy;
mod loading;
mod projects;
mod sections;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use chat::ChatWidget;
use header::Header;
use homepage::HomePage;
use loading::LoadingGate;
use sections::Footer;
use theme::ThemeProvider;

pub use projects::get_repos_server;
pub use theme::ThemeContext;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Valluri Rahul - {title}") />
        <Meta
            name="description"
            content="Portfolio of Valluri Rahul, full-stack developer: projects, services, certifications and contact."
        />

        <ThemeProvider>
            <LoadingGate />
            <Router>
                <div class="relative min-h-screen bg-white text-gray-900 dark:bg-gray-950 dark:text-gray-100 transition-colors duration-300">
                    <Header />
                    <main class="relative z-10">
                        <Routes fallback=|| "Page not found.".into_view()>
                            <Route path=path!("/") view=HomePage />
                        </Routes>
                    </main>
                    <Footer />
                    <ChatWidget />
                </div>
            </Router>
        </ThemeProvider>
    }
}
