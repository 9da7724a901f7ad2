use dioxus::prelude::*;

mod auth;
mod components;
mod config;
pub mod notify;
mod routes;
mod timer;
use auth::AuthState;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = config::app_config();

    use_context_provider(|| config.features.clone());
    use_context_provider(|| config.portal.clone());
    use_context_provider(AuthState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
