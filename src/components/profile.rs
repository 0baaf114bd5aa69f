//! Profile settings: account fields, avatar, password, gallery stats.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement};

use crate::config::MAX_BIO_LENGTH;
use crate::services::auth::{change_password, current_user, update_profile, ProfileUpdate};
use crate::services::media::{upload_image, UploadOptions};
use crate::state::{use_auth, use_media};
use crate::types::{MediaType, User};

#[component]
pub fn ProfileSettings() -> impl IntoView {
    let auth = use_auth();
    let media_store = use_media();
    let user = auth.user();

    let snapshot: Option<User> = user.get_untracked();
    let (username, set_username) = create_signal(
        snapshot.as_ref().map(|u| u.username.clone()).unwrap_or_default(),
    );
    let (bio, set_bio) = create_signal(
        snapshot
            .as_ref()
            .and_then(|u| u.bio.clone())
            .unwrap_or_default(),
    );

    let (saving, set_saving) = create_signal(false);
    let (notice, set_notice) = create_signal(None::<String>);
    let (error, set_error) = create_signal(None::<String>);

    let on_save = move |_| {
        set_notice.set(None);
        set_error.set(None);

        let username = username.get_untracked();
        let bio = bio.get_untracked();
        if bio.chars().count() > MAX_BIO_LENGTH {
            set_error.set(Some(format!(
                "Bio muito longa (máximo {} caracteres).",
                MAX_BIO_LENGTH
            )));
            return;
        }

        set_saving.set(true);
        spawn_local(async move {
            let update = ProfileUpdate {
                full_name: &username,
                username: None,
                bio: &bio,
            };
            match update_profile(&update).await {
                Ok(updated) => {
                    auth.update_profile(
                        Some(updated.username),
                        updated.bio.or(Some(bio)),
                        updated.avatar_url,
                    );
                    set_notice.set(Some("Perfil atualizado.".to_string()));
                }
                Err(e) => {
                    log::warn!("profile update failed: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_saving.set(false);
        });
    };

    // Avatar upload reuses the image endpoint with the profile flag,
    // then re-probes /users/me so the fresh avatar_url lands in state.
    let on_avatar_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|f| f.get(0)) else {
            return;
        };
        input.set_value("");

        if MediaType::from_mime(&file.type_()) != Some(MediaType::Image) {
            set_error.set(Some("O avatar deve ser uma imagem.".to_string()));
            return;
        }

        set_error.set(None);
        spawn_local(async move {
            let options = UploadOptions {
                is_profile: true,
                ..Default::default()
            };
            match upload_image(&file, &options).await {
                Ok(_) => {
                    match current_user().await {
                        Ok(fresh) => auth.update_profile(None, None, fresh.avatar_url),
                        Err(e) => log::warn!("avatar refresh failed: {}", e),
                    }
                    set_notice.set(Some("Avatar atualizado.".to_string()));
                }
                Err(e) => {
                    log::warn!("avatar upload failed: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let trigger_avatar_input = move |_| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(input) = document.get_element_by_id("avatarInput") {
                if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
                    html_input.click();
                }
            }
        }
    };

    // Password change form.
    let (old_password, set_old_password) = create_signal(String::new());
    let (new_password, set_new_password) = create_signal(String::new());
    let (confirm_password, set_confirm_password) = create_signal(String::new());
    let (password_error, set_password_error) = create_signal(None::<String>);
    let (password_notice, set_password_notice) = create_signal(None::<String>);

    let on_change_password = move |_| {
        set_password_error.set(None);
        set_password_notice.set(None);

        let old = old_password.get_untracked();
        let new = new_password.get_untracked();
        let confirm = confirm_password.get_untracked();

        if old.is_empty() || new.is_empty() {
            set_password_error.set(Some("Preencha todos os campos de senha.".to_string()));
            return;
        }
        if new != confirm {
            set_password_error.set(Some("As senhas não coincidem.".to_string()));
            return;
        }

        spawn_local(async move {
            match change_password(&old, &new).await {
                Ok(()) => {
                    set_old_password.set(String::new());
                    set_new_password.set(String::new());
                    set_confirm_password.set(String::new());
                    set_password_notice.set(Some("Senha alterada com sucesso.".to_string()));
                }
                Err(e) => {
                    log::warn!("password change failed: {}", e);
                    set_password_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let items = media_store.items();
    let count_of = move |t: MediaType| {
        items.with(|v| v.iter().filter(|i| i.media_type == t).count())
    };
    let total_mb = move || {
        let bytes: u64 = items.with(|v| v.iter().map(|i| i.file_size).sum());
        bytes as f64 / 1024.0 / 1024.0
    };

    view! {
        <section class="profile">
            <div class="card">
                <h2>"Meu Perfil"</h2>
                <p class="subtitle">"Gerencie as informações da sua conta"</p>

                <div class="profile-identity">
                    <div class="avatar" on:click=trigger_avatar_input title="Trocar avatar">
                        {move || {
                            user.with(|u| {
                                match u.as_ref().and_then(|u| u.avatar_url.clone()) {
                                    Some(src) => view! { <img src=src alt="avatar"/> }.into_view(),
                                    None => {
                                        let initial = u
                                            .as_ref()
                                            .and_then(|u| u.username.chars().next())
                                            .map(|c| c.to_uppercase().to_string())
                                            .unwrap_or_default();
                                        view! { <span class="avatar-initial">{initial}</span> }
                                            .into_view()
                                    }
                                }
                            })
                        }}
                    </div>
                    <input
                        type="file"
                        id="avatarInput"
                        accept="image/*"
                        style="display:none"
                        on:change=on_avatar_change
                    />
                    <div>
                        <p class="field-label">"Email"</p>
                        <p class="field-value">
                            {move || user.with(|u| u.as_ref().map(|u| u.email.clone()).unwrap_or_default())}
                        </p>
                    </div>
                </div>

                <label>"Nome de usuário"</label>
                <input
                    prop:value=username
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
                <label>"Bio"</label>
                <textarea
                    placeholder="Conte um pouco sobre você"
                    prop:value=bio
                    on:input=move |ev| set_bio.set(event_target_value(&ev))
                ></textarea>

                <Show when=move || notice.get().is_some() fallback=|| view! {}>
                    <p class="notice-message">{move || notice.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || error.get().is_some() fallback=|| view! {}>
                    <p class="error-message">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <button class="btn btn-primary" disabled=saving on:click=on_save>
                    {move || if saving.get() { "Salvando..." } else { "Salvar Alterações" }}
                </button>
            </div>

            <div class="card">
                <h2>"Alterar Senha"</h2>
                <label>"Senha atual"</label>
                <input
                    type="password"
                    prop:value=old_password
                    on:input=move |ev| set_old_password.set(event_target_value(&ev))
                />
                <label>"Nova senha"</label>
                <input
                    type="password"
                    prop:value=new_password
                    on:input=move |ev| set_new_password.set(event_target_value(&ev))
                />
                <label>"Confirmar nova senha"</label>
                <input
                    type="password"
                    prop:value=confirm_password
                    on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                />

                <Show when=move || password_notice.get().is_some() fallback=|| view! {}>
                    <p class="notice-message">
                        {move || password_notice.get().unwrap_or_default()}
                    </p>
                </Show>
                <Show when=move || password_error.get().is_some() fallback=|| view! {}>
                    <p class="error-message">
                        {move || password_error.get().unwrap_or_default()}
                    </p>
                </Show>

                <button class="btn btn-secondary" on:click=on_change_password>
                    "Alterar Senha"
                </button>
            </div>

            <div class="card">
                <h2>"Estatísticas"</h2>
                <p class="subtitle">"Informações sobre sua galeria"</p>
                <div class="stats-grid">
                    <div class="stat">
                        <p class="stat-label">"Total de Arquivos"</p>
                        <p class="stat-value">{move || items.with(|v| v.len())}</p>
                    </div>
                    <div class="stat">
                        <p class="stat-label">"Imagens"</p>
                        <p class="stat-value">{move || count_of(MediaType::Image)}</p>
                    </div>
                    <div class="stat">
                        <p class="stat-label">"Áudios"</p>
                        <p class="stat-value">{move || count_of(MediaType::Audio)}</p>
                    </div>
                    <div class="stat">
                        <p class="stat-label">"Vídeos"</p>
                        <p class="stat-value">{move || count_of(MediaType::Video)}</p>
                    </div>
                </div>
                <p class="stat-label">"Espaço Total Usado"</p>
                <p class="stat-value">{move || format!("{:.2} MB", total_mb())}</p>
            </div>
        </section>
    }
}
