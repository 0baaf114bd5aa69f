//! Preview modal: fetches the presigned URL and the detail payload on
//! open, then renders a viewer/player for the item's type.

use leptos::*;

use crate::services::media::get_media;
use crate::state::{use_media, MediaPatch};
use crate::types::MediaType;

#[component]
pub fn MediaPreview(media_id: u64, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let media_store = use_media();
    let Some(item) = media_store.get(media_id) else {
        return ().into_view();
    };

    let (url, set_url) = create_signal(item.url.clone());
    let (description, set_description) = create_signal(item.description.clone());
    let (duration, set_duration) = create_signal(item.duration);

    // Presigned URL and detail payload are fetched on demand; neither
    // failure closes the modal.
    spawn_local(async move {
        if let Some(fresh) = media_store.url_for(media_id).await {
            media_store.update_local(
                media_id,
                MediaPatch {
                    url: Some(fresh.clone()),
                    ..Default::default()
                },
            );
            set_url.set(Some(fresh));
        }

        match get_media(media_id).await {
            Ok(detail) => {
                if detail.description.is_some() {
                    set_description.set(detail.description.clone());
                }
                if detail.duration.is_some() {
                    set_duration.set(detail.duration);
                }
                media_store.update_local(
                    media_id,
                    MediaPatch {
                        description: detail.description,
                        genre: detail.genre,
                        tags: Some(detail.tags),
                        duration: detail.duration,
                        ..Default::default()
                    },
                );
            }
            Err(e) => log::warn!("media detail fetch failed for {}: {}", media_id, e),
        }
    });

    let media_type = item.media_type;
    let filename = item.filename.clone();

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.call(())>
            <div class="modal modal-large" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>{filename}</h3>
                    <button class="btn btn-small" on:click=move |_| on_close.call(())>
                        "✕"
                    </button>
                </div>

                <Show
                    when=move || url.get().is_some()
                    fallback=|| view! { <div class="preview-loading">"Carregando mídia..."</div> }
                >
                    {move || {
                        let src = url.get().unwrap_or_default();
                        match media_type {
                            MediaType::Image => view! {
                                <img class="preview-media" src=src/>
                            }
                                .into_view(),
                            MediaType::Audio => view! {
                                <audio class="preview-media" controls src=src></audio>
                            }
                                .into_view(),
                            MediaType::Video => view! {
                                <video class="preview-media" controls src=src></video>
                            }
                                .into_view(),
                        }
                    }}
                </Show>

                <Show when=move || description.get().is_some() fallback=|| view! {}>
                    <p class="preview-description">
                        {move || description.get().unwrap_or_default()}
                    </p>
                </Show>
                <Show when=move || duration.get().is_some() fallback=|| view! {}>
                    <p class="preview-meta">
                        {move || {
                            let secs = duration.get().unwrap_or_default();
                            format!("Duração: {}:{:02}", secs as u64 / 60, secs as u64 % 60)
                        }}
                    </p>
                </Show>
            </div>
        </div>
    }
    .into_view()
}
