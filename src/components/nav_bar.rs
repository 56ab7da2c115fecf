use dioxus::prelude::*;
use crate::Route;

#[component]
pub fn NavComponent() -> Element {
    let app_state = use_context::<crate::components::AppState>();
    let title = app_state.page_title.read().clone();
    let viewer = app_state.logged_in_user_id.read().clone();

    rsx! {
        div { class: "min-h-screen flex flex-col",
            nav { class: "nav-bar",
                div { class: "page-container nav-inner",
                    div { class: "nav-logo",
                        span { class: "logo-text", "Photo Share" }
                    }

                    span { class: "nav-title", "{title}" }

                    div { class: "nav-links",
                        Link {
                            to: Route::HomeComponent {},
                            class: "nav-link",
                            active_class: "active",
                            "Home"
                        }
                        if let Some(id) = viewer {
                            Link {
                                to: Route::UserPhotosComponent { user_id: id },
                                class: "nav-link",
                                active_class: "active",
                                "My Photos"
                            }
                        }
                    }
                }
            }

            div { class: "flex-1",
                Outlet::<Route> {}
            }
        }
    }
}
