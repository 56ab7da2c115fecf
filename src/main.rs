mod backend;
mod components;
mod config;

use components::home_page::HomeComponent;
use components::nav_bar::NavComponent;
use components::user_detail_page::UserDetailComponent;
use components::user_photos_page::UserPhotosComponent;
use components::AppState;
use config::AppConfig;

use backend::{AppCmd, AppEvent};
use dioxus::prelude::*;
use tokio::sync::mpsc;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[layout(NavComponent)]
    #[route("/")]
    HomeComponent {},
    #[route("/photos/:user_id")]
    UserPhotosComponent { user_id: String },
    #[route("/users/:user_id")]
    UserDetailComponent { user_id: String },
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    init_tracing();
    dioxus::launch(App);
}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

fn load_config() -> AppConfig {
    match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Falling back to default config: {}", e);
            AppConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_context_provider(load_config);
    let app_state = use_context_provider({
        let state = AppState::new(config.logged_in_user_id.clone());
        move || state
    });

    let cmd_tx = use_hook(|| {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<AppCmd>();
        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

        spawn(backend::start_backend(config.clone(), cmd_rx, event_tx));

        let pump_tx = cmd_tx.clone();
        spawn(async move {
            while let Some(event) = event_rx.recv().await {
                app_state.handle_event(&pump_tx, event);
            }
        });

        cmd_tx
    });
    use_context_provider(move || cmd_tx);

    rsx! {
        document::Stylesheet {href: asset!("/assets/main.css")}
        Router::<Route> {}
    }
}
