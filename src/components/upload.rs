//! Upload section: staged file queue with per-file metadata.
//!
//! Selected files enter the queue as pending entries. Submitting walks
//! the queue strictly sequentially: one upload in flight at a time, in
//! selection order, and one failure never aborts the remainder. After
//! the pass the gallery is refreshed; successful entries leave the
//! queue after a fixed delay while failed ones stay for retry.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, File, HtmlInputElement};

use crate::config::SUCCESS_CLEAR_DELAY_MS;
use crate::services::media::{parse_tags, upload_media, UploadOptions};
use crate::state::{
    entry_id, use_media, QueueAction, QueueEntry, QueueState, UploadMeta, UploadStatus,
};
use crate::types::MediaType;

#[component]
pub fn UploadSection() -> impl IntoView {
    let media_store = use_media();
    let queue = create_rw_signal(QueueState::<File>::default());
    let (picker_error, set_picker_error) = create_signal(None::<String>);

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(files) = input.files() else {
            return;
        };

        let now_ms = js_sys::Date::now() as u64;
        let mut rejected: Vec<String> = Vec::new();

        for index in 0..files.length() {
            let Some(file) = files.get(index) else {
                continue;
            };
            match MediaType::from_mime(&file.type_()) {
                Some(media_type) => {
                    let filename = file.name();
                    queue.update(|q| {
                        q.push(QueueEntry {
                            id: entry_id(now_ms, index as usize, &filename),
                            file: file.clone(),
                            filename,
                            media_type,
                            meta: UploadMeta::default(),
                            status: UploadStatus::Pending,
                        })
                    });
                }
                None => rejected.push(file.name()),
            }
        }

        set_picker_error.set(if rejected.is_empty() {
            None
        } else {
            Some(format!(
                "Tipo de arquivo não suportado: {}",
                rejected.join(", ")
            ))
        });

        // Allow re-selecting the same file later.
        input.set_value("");
    };

    let trigger_file_input = move |_| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(input) = document.get_element_by_id("fileInput") {
                if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
                    html_input.click();
                }
            }
        }
    };

    let on_submit = move |_| {
        if !queue.with_untracked(|q| q.can_submit()) {
            return;
        }
        queue.update(|q| q.apply(QueueAction::BeginPass));

        spawn_local(async move {
            let ids = queue.with_untracked(|q| q.pending_ids());
            log::info!("starting upload pass: {} file(s)", ids.len());

            for id in ids {
                queue.update(|q| q.apply(QueueAction::Started { id: id.clone() }));

                let staged = queue.with_untracked(|q| {
                    q.entries
                        .iter()
                        .find(|e| e.id == id)
                        .map(|e| (e.file.clone(), e.media_type, e.meta.clone()))
                });
                let Some((file, media_type, meta)) = staged else {
                    continue;
                };

                let options = UploadOptions {
                    description: Some(meta.description.trim().to_string())
                        .filter(|d| !d.is_empty()),
                    genre: match media_type {
                        MediaType::Image => None,
                        _ => Some(meta.genre.trim().to_string()).filter(|g| !g.is_empty()),
                    },
                    tags: parse_tags(&meta.tags_input),
                    is_profile: false,
                };

                match upload_media(&file, &options).await {
                    Ok(_) => {
                        queue.update(|q| q.apply(QueueAction::Succeeded { id }));
                    }
                    Err(e) => {
                        log::warn!("upload failed: {}", e);
                        queue.update(|q| {
                            q.apply(QueueAction::Failed {
                                id,
                                message: e.to_string(),
                            })
                        });
                    }
                }
            }

            if let Err(e) = media_store.refresh().await {
                log::error!("gallery refresh after upload failed: {}", e);
            }
            queue.update(|q| q.apply(QueueAction::EndPass));

            gloo_timers::future::TimeoutFuture::new(SUCCESS_CLEAR_DELAY_MS).await;
            queue.update(|q| q.apply(QueueAction::ClearSucceeded));
        });
    };

    let pending_count = move || queue.with(|q| q.pending_ids().len());

    view! {
        <section class="upload-section">
            <h2>"Upload de Arquivos"</h2>
            <p class="subtitle">"Adicione imagens, áudios e vídeos à sua galeria"</p>

            <div class="upload-zone" on:click=trigger_file_input>
                <div class="upload-icon">"📤"</div>
                <div class="upload-text">"Clique ou arraste arquivos para upload"</div>
                <input
                    type="file"
                    id="fileInput"
                    multiple
                    accept="image/*,audio/*,video/*"
                    style="display:none"
                    on:change=on_file_change
                />
            </div>

            <Show when=move || picker_error.get().is_some() fallback=|| view! {}>
                <p class="error-message">{move || picker_error.get().unwrap_or_default()}</p>
            </Show>

            <Show when=move || !queue.with(|q| q.is_empty()) fallback=|| view! {}>
                <div class="queue-list">
                    <For
                        each=move || queue.get().entries
                        key=|entry| entry.id.clone()
                        children=move |entry| view! { <QueueRow entry=entry queue=queue/> }
                    />
                </div>

                <button
                    class="btn btn-primary upload-submit"
                    disabled=move || !queue.with(|q| q.can_submit())
                    on:click=on_submit
                >
                    {move || {
                        if queue.with(|q| q.processing) {
                            "Enviando...".to_string()
                        } else {
                            format!("Enviar {} arquivo(s)", pending_count())
                        }
                    }}
                </button>
            </Show>
        </section>
    }
}

#[component]
fn QueueRow(entry: QueueEntry<File>, queue: RwSignal<QueueState<File>>) -> impl IntoView {
    let id = entry.id.clone();
    let media_type = entry.media_type;
    let size = format!("{:.2} MB", entry.file.size() / 1024.0 / 1024.0);

    let status = create_memo({
        let id = id.clone();
        move |_| {
            queue.with(|q| {
                q.entries
                    .iter()
                    .find(|e| e.id == id)
                    .map(|e| e.status.clone())
                    .unwrap_or(UploadStatus::Pending)
            })
        }
    });
    let is_pending = move || status.get().is_pending();

    let on_remove = {
        let id = id.clone();
        move |_| {
            queue.update(|q| q.apply(QueueAction::Remove { id: id.clone() }));
        }
    };
    let on_description = {
        let id = id.clone();
        move |ev: Event| {
            queue.update(|q| {
                q.apply(QueueAction::SetDescription {
                    id: id.clone(),
                    value: event_target_value(&ev),
                })
            });
        }
    };
    let on_genre = {
        let id = id.clone();
        move |ev: Event| {
            queue.update(|q| {
                q.apply(QueueAction::SetGenre {
                    id: id.clone(),
                    value: event_target_value(&ev),
                })
            });
        }
    };
    let on_tags = {
        let id = id.clone();
        move |ev: Event| {
            queue.update(|q| {
                q.apply(QueueAction::SetTagsInput {
                    id: id.clone(),
                    value: event_target_value(&ev),
                })
            });
        }
    };

    view! {
        <div class="queue-entry">
            <div class="queue-entry-header">
                <span class="queue-filename">
                    {media_type.icon()} " " {entry.filename.clone()}
                </span>
                <span class=move || format!("status-badge {}", status.get().css_class())>
                    {move || status.get().label()}
                </span>
                <Show when=is_pending fallback=|| view! {}>
                    <button class="btn btn-small" on:click=on_remove.clone()>
                        "✕"
                    </button>
                </Show>
            </div>

            <Show when=is_pending fallback=|| view! {}>
                <div class="queue-entry-fields">
                    <input
                        placeholder="Descrição (opcional)"
                        on:input=on_description.clone()
                    />
                    {
                        let on_genre = on_genre.clone();
                        view! {
                            <Show when=move || media_type != MediaType::Image fallback=|| view! {}>
                                <input placeholder="Gênero (opcional)" on:input=on_genre.clone()/>
                            </Show>
                        }
                    }
                    <input
                        placeholder="Tags separadas por vírgula"
                        on:input=on_tags.clone()
                    />
                </div>
            </Show>

            {move || match status.get() {
                UploadStatus::Error(message) => {
                    view! { <p class="error-message">{message}</p> }.into_view()
                }
                _ => ().into_view(),
            }}

            <p class="queue-size">{size}</p>
        </div>
    }
}
