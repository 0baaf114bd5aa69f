//! Gallery view: search, type filter, grid/list browsing.

use leptos::*;

use crate::components::{MediaActions, MediaPreview};
use crate::state::use_media;
use crate::types::{MediaItem, MediaType};

#[derive(Clone, Copy, PartialEq, Eq)]
enum TypeFilter {
    All,
    Only(MediaType),
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ViewMode {
    Grid,
    List,
}

#[component]
pub fn MediaGallery() -> impl IntoView {
    let media_store = use_media();
    let items = media_store.items();

    let (search, set_search) = create_signal(String::new());
    let (filter, set_filter) = create_signal(TypeFilter::All);
    let (mode, set_mode) = create_signal(ViewMode::Grid);
    let (selected, set_selected) = create_signal(None::<u64>);

    let filtered = create_memo(move |_| {
        let query = search.get().to_lowercase();
        let filter = filter.get();
        items
            .get()
            .into_iter()
            .filter(|item| {
                let matches_search = query.is_empty()
                    || item.filename.to_lowercase().contains(&query)
                    || item
                        .description
                        .as_deref()
                        .map(|d| d.to_lowercase().contains(&query))
                        .unwrap_or(false);
                let matches_type = match filter {
                    TypeFilter::All => true,
                    TypeFilter::Only(t) => item.media_type == t,
                };
                matches_search && matches_type
            })
            .collect::<Vec<_>>()
    });

    let total = move || items.with(|v| v.len());
    let count_of = move |t: MediaType| {
        items.with(|v| v.iter().filter(|i| i.media_type == t).count())
    };

    view! {
        {move || {
            selected
                .get()
                .map(|id| {
                    view! {
                        <MediaPreview media_id=id on_close=move |_| set_selected.set(None)/>
                    }
                })
        }}

        <section class="gallery">
            <div class="gallery-header">
                <div>
                    <h2>"Minha Galeria"</h2>
                    <p class="subtitle">
                        {move || {
                            format!(
                                "{} arquivo(s) encontrado(s) de {} total",
                                filtered.get().len(),
                                total(),
                            )
                        }}
                    </p>
                </div>
                <div class="view-toggle">
                    <button
                        class="btn btn-small"
                        class:active=move || mode.get() == ViewMode::Grid
                        on:click=move |_| set_mode.set(ViewMode::Grid)
                    >
                        "▦"
                    </button>
                    <button
                        class="btn btn-small"
                        class:active=move || mode.get() == ViewMode::List
                        on:click=move |_| set_mode.set(ViewMode::List)
                    >
                        "☰"
                    </button>
                </div>
            </div>

            <input
                class="search-input"
                type="search"
                placeholder="Pesquisar por nome ou descrição..."
                prop:value=search
                on:input=move |ev| set_search.set(event_target_value(&ev))
            />

            <div class="filter-row">
                <button
                    class="btn btn-small"
                    class:active=move || filter.get() == TypeFilter::All
                    on:click=move |_| set_filter.set(TypeFilter::All)
                >
                    {move || format!("Todos ({})", total())}
                </button>
                {[MediaType::Image, MediaType::Audio, MediaType::Video]
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                class="btn btn-small"
                                class:active=move || filter.get() == TypeFilter::Only(t)
                                on:click=move |_| set_filter.set(TypeFilter::Only(t))
                            >
                                {move || format!("{} {}s ({})", t.icon(), t.label(), count_of(t))}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <Show
                when=move || !filtered.get().is_empty()
                fallback=move || {
                    view! {
                        <div class="empty-state">
                            {move || {
                                if total() == 0 {
                                    "Nenhum arquivo encontrado. Comece fazendo upload!"
                                } else {
                                    "Nenhum arquivo corresponde aos filtros."
                                }
                            }}
                        </div>
                    }
                }
            >
                <div class=move || {
                    match mode.get() {
                        ViewMode::Grid => "media-grid",
                        ViewMode::List => "media-list",
                    }
                }>
                    <For
                        each=move || filtered.get()
                        key=|item| (item.id, item.updated_at)
                        children=move |item| {
                            view! { <MediaCard item=item on_select=set_selected/> }
                        }
                    />
                </div>
            </Show>
        </section>
    }
}

#[component]
fn MediaCard(item: MediaItem, on_select: WriteSignal<Option<u64>>) -> impl IntoView {
    let id = item.id;
    let media_type = item.media_type;
    let uploaded = item.uploaded_at.format("%d/%m/%Y").to_string();
    let size = format!("{:.2} MB", item.size_mb());
    let thumbnail = item.thumbnail.clone();
    let filename = item.filename.clone();
    let description = item.description.clone();

    view! {
        <div class="media-card" on:click=move |_| on_select.set(Some(id))>
            <div class="media-thumb">
                {match thumbnail {
                    Some(src) => view! {
                        <img src=src alt=filename.clone()/>
                    }
                        .into_view(),
                    None => view! {
                        <div class="media-thumb-placeholder">
                            <span class="media-icon">{media_type.icon()}</span>
                            <span class="media-type">{media_type.label()}</span>
                        </div>
                    }
                        .into_view(),
                }}
            </div>
            <div class="media-info">
                <p class="media-name">{filename}</p>
                <Show when={
                    let has = description.is_some();
                    move || has
                } fallback=|| view! {}>
                    <p class="media-description">{description.clone().unwrap_or_default()}</p>
                </Show>
                <p class="media-meta">{size} " • " {uploaded}</p>
                <div class="media-actions" on:click=|ev| ev.stop_propagation()>
                    <MediaActions item=item.clone()/>
                </div>
            </div>
        </div>
    }
}
