//! Protected dashboard page: header, sidebar and the active view.

use leptos::*;
use leptos_router::use_navigate;

use crate::components::{
    DashboardView, MediaGallery, ProfileSettings, Sidebar, UploadSection,
};
use crate::config::APP_NAME;
use crate::state::{use_auth, use_media};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let media_store = use_media();

    // Route protection: once the session probe settles anonymous, leave.
    let navigate = use_navigate();
    create_effect(move |_| {
        if !auth.is_loading().get() && auth.user().get().is_none() {
            navigate("/", Default::default());
        }
    });

    // Load the gallery once per established session.
    create_effect(move |prev: Option<bool>| {
        let logged_in = auth.user().with(|u| u.is_some());
        if logged_in && prev != Some(true) {
            spawn_local(async move {
                if let Err(e) = media_store.refresh().await {
                    log::error!("initial gallery load failed: {}", e);
                }
            });
        }
        logged_in
    });

    let (current_view, set_current_view) = create_signal(DashboardView::Gallery);

    view! {
        <Show
            when=move || auth.user().get().is_some()
            fallback=|| view! { <div class="loading-screen">"Carregando..."</div> }
        >
            <Header/>
            <div class="dashboard">
                <Sidebar current=current_view set_current=set_current_view/>
                <main class="dashboard-content">
                    {move || match current_view.get() {
                        DashboardView::Gallery => view! { <MediaGallery/> }.into_view(),
                        DashboardView::Upload => view! { <UploadSection/> }.into_view(),
                        DashboardView::Profile => view! { <ProfileSettings/> }.into_view(),
                    }}
                </main>
            </div>
        </Show>
    }
}

#[component]
fn Header() -> impl IntoView {
    let auth = use_auth();
    let user = auth.user();

    let navigate = use_navigate();
    let on_logout = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            auth.logout().await;
            navigate("/", Default::default());
        });
    };

    view! {
        <header class="dashboard-header">
            <div class="header-left">
                <span class="logo">"MM"</span>
                <h1>{APP_NAME}</h1>
            </div>
            <div class="header-right">
                <span class="user-badge">
                    {move || {
                        user.with(|u| {
                            u.as_ref()
                                .and_then(|u| u.username.chars().next())
                                .map(|c| c.to_uppercase().to_string())
                                .unwrap_or_default()
                        })
                    }}
                </span>
                <span class="user-name">
                    {move || user.with(|u| u.as_ref().map(|u| u.username.clone()).unwrap_or_default())}
                </span>
                <button class="btn btn-secondary" on:click=on_logout>
                    "Sair"
                </button>
            </div>
        </header>
    }
}
