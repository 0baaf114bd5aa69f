//! Dashboard navigation sidebar.

use leptos::*;

/// Which main view the dashboard is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardView {
    Gallery,
    Upload,
    Profile,
}

const NAV_ITEMS: [(DashboardView, &str, &str, &str); 3] = [
    (
        DashboardView::Gallery,
        "Galeria",
        "🗂️",
        "Visualize todos os seus arquivos",
    ),
    (
        DashboardView::Upload,
        "Upload",
        "📤",
        "Envie novos arquivos",
    ),
    (
        DashboardView::Profile,
        "Perfil",
        "👤",
        "Gerencie sua conta",
    ),
];

#[component]
pub fn Sidebar(
    current: ReadSignal<DashboardView>,
    set_current: WriteSignal<DashboardView>,
) -> impl IntoView {
    view! {
        <nav class="sidebar">
            <p class="sidebar-heading">"Menu"</p>
            {NAV_ITEMS
                .into_iter()
                .map(|(target, label, icon, description)| {
                    view! {
                        <button
                            class="sidebar-item"
                            class:active=move || current.get() == target
                            on:click=move |_| set_current.set(target)
                        >
                            <span class="sidebar-icon">{icon}</span>
                            <span class="sidebar-text">
                                <span class="sidebar-label">{label}</span>
                                <span class="sidebar-description">{description}</span>
                            </span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
