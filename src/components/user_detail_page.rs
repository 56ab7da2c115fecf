use dioxus::prelude::*;
use tokio::sync::mpsc::UnboundedSender;

use crate::backend::AppCmd;
use crate::components::common::EmptyState;
use crate::components::AppState;
use crate::Route;

#[component]
pub fn UserDetailComponent(user_id: String) -> Element {
    let app_state = use_context::<AppState>();
    let cmd_tx = use_context::<UnboundedSender<AppCmd>>();
    let mut page_title = app_state.page_title;

    use_effect(use_reactive((&user_id,), move |(user_id,)| {
        if let Err(e) = cmd_tx.send(AppCmd::FetchUser { user_id }) {
            tracing::error!("Failed to send FetchUser command: {:?}", e);
        }
    }));

    // A previously viewed user may still be in the signal until the fetch lands.
    let user = app_state
        .viewed_user
        .read()
        .clone()
        .filter(|u| u.id == user_id);

    use_effect(move || {
        if let Some(u) = app_state.viewed_user.read().as_ref() {
            page_title.set(u.display_name());
        }
    });

    rsx! {
        div { class: "page-container animate-fade-in",
            if let Some(user) = user {
                div { class: "panel",
                    h2 { class: "panel-title", "{user.display_name()}" }
                    if let Some(bio) = user.comment.clone().filter(|c| !c.is_empty()) {
                        div { class: "user-bio",
                            span { class: "caption", "Comment" }
                            p { "{bio}" }
                        }
                    }
                    Link {
                        to: Route::UserPhotosComponent { user_id: user.id.clone() },
                        class: "button-link",
                        "User Photos"
                    }
                }
            } else {
                EmptyState { icon: "👤".to_string(), title: "Loading...".to_string() }
            }
        }
    }
}
