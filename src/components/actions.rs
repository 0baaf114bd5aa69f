//! Per-item edit and delete dialogs.
//!
//! Edits persist through the type-specific PUT first; the local gallery
//! merge only happens after the backend confirms. Deletion asks for
//! confirmation and leaves the item in place when the backend fails.

use leptos::*;

use crate::services::media::{
    parse_tags, update_audio, update_image, update_video, MediaUpdate,
};
use crate::state::{use_media, MediaPatch};
use crate::types::{MediaItem, MediaType};

#[component]
pub fn MediaActions(item: MediaItem) -> impl IntoView {
    let media_store = use_media();

    let id = item.id;
    let media_type = item.media_type;
    let filename = item.filename.clone();

    let (edit_open, set_edit_open) = create_signal(false);
    let (confirm_open, set_confirm_open) = create_signal(false);
    let (description, set_description) =
        create_signal(item.description.clone().unwrap_or_default());
    let (genre, set_genre) = create_signal(item.genre.clone().unwrap_or_default());
    let (tags_input, set_tags_input) = create_signal(item.tags.join(", "));
    let (error, set_error) = create_signal(None::<String>);
    let (busy, set_busy) = create_signal(false);

    let on_save = move |_| {
        set_busy.set(true);
        set_error.set(None);
        spawn_local(async move {
            let tags = parse_tags(&tags_input.get_untracked());
            let update = MediaUpdate {
                description: Some(description.get_untracked()),
                genre: match media_type {
                    MediaType::Image => None,
                    _ => Some(genre.get_untracked()),
                },
                tags: Some(tags.clone()),
            };

            let result = match media_type {
                MediaType::Image => update_image(id, &update).await,
                MediaType::Video => update_video(id, &update).await,
                MediaType::Audio => update_audio(id, &update).await,
            };

            match result {
                Ok(_) => {
                    media_store.update_local(
                        id,
                        MediaPatch {
                            description: update.description,
                            genre: update.genre,
                            tags: Some(tags),
                            ..Default::default()
                        },
                    );
                    set_edit_open.set(false);
                }
                Err(e) => {
                    log::warn!("media update failed for {}: {}", id, e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_busy.set(false);
        });
    };

    let on_delete = move |_| {
        set_busy.set(true);
        set_error.set(None);
        spawn_local(async move {
            match media_store.delete(id).await {
                Ok(()) => set_confirm_open.set(false),
                Err(e) => {
                    log::warn!("media delete failed for {}: {}", id, e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="actions-row">
            <button class="btn btn-small" on:click=move |_| set_edit_open.set(true)>
                "Editar"
            </button>
            <button
                class="btn btn-small btn-danger"
                on:click=move |_| set_confirm_open.set(true)
            >
                "Deletar"
            </button>
        </div>

        <Show when=move || edit_open.get() fallback=|| view! {}>
            <div class="modal-overlay" on:click=move |_| set_edit_open.set(false)>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <h3>"Editar Arquivo"</h3>
                    <label>"Descrição"</label>
                    <input
                        prop:value=description
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    />
                    <Show when=move || media_type != MediaType::Image fallback=|| view! {}>
                        <label>"Gênero"</label>
                        <input
                            prop:value=genre
                            on:input=move |ev| set_genre.set(event_target_value(&ev))
                        />
                    </Show>
                    <label>"Tags (separadas por vírgula)"</label>
                    <input
                        prop:value=tags_input
                        on:input=move |ev| set_tags_input.set(event_target_value(&ev))
                    />
                    <Show when=move || error.get().is_some() fallback=|| view! {}>
                        <p class="error-message">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="modal-buttons">
                        <button
                            class="btn btn-secondary"
                            on:click=move |_| set_edit_open.set(false)
                        >
                            "Cancelar"
                        </button>
                        <button class="btn btn-primary" disabled=busy on:click=on_save>
                            {move || if busy.get() { "Salvando..." } else { "Salvar" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>

        <Show when=move || confirm_open.get() fallback=|| view! {}>
            <div class="modal-overlay" on:click=move |_| set_confirm_open.set(false)>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <h3>"Confirmar Exclusão"</h3>
                    <p>
                        "Tem certeza que deseja deletar \"" {filename.clone()}
                        "\"? Esta ação não pode ser desfeita."
                    </p>
                    <Show when=move || error.get().is_some() fallback=|| view! {}>
                        <p class="error-message">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="modal-buttons">
                        <button
                            class="btn btn-secondary"
                            on:click=move |_| set_confirm_open.set(false)
                        >
                            "Cancelar"
                        </button>
                        <button class="btn btn-danger" disabled=busy on:click=on_delete>
                            {move || if busy.get() { "Deletando..." } else { "Deletar" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
