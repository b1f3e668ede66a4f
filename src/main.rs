#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use std::sync::Arc;

    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use portfolio_site::{
        api,
        app::*,
        config::SiteConfig,
        contact::{ContactHandler, SilentFallbackPolicy, Web3FormsRelay},
    };
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_target(true))
        .init();

    let conf = get_configuration(None).expect("Should be able to read leptos configuration");
    let site = SiteConfig::from_env().expect("Should be able to read site configuration");
    if !site.has_access_key() {
        tracing::warn!("WEB3FORMS_ACCESS_KEY is not set, contact emails will not be delivered");
    }
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let relay = Web3FormsRelay::new(reqwest::Client::new(), &site);
    let contact: Arc<api::SiteContactHandler> = Arc::new(ContactHandler::new(
        relay,
        SilentFallbackPolicy,
        site.recipient.clone(),
    ));

    let app = Router::new()
        .merge(api::contact_routes(contact))
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    tracing::info!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Should be able to bind site address");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server exited with an error");
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
