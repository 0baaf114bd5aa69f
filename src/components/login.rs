//! Login / signup page.

use leptos::*;
use leptos_router::use_navigate;

use crate::state::use_auth;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Login,
    Signup,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();

    // Already logged in (or just restored): skip straight to the dashboard.
    let navigate = use_navigate();
    create_effect(move |_| {
        if auth.user().get().is_some() {
            navigate("/dashboard", Default::default());
        }
    });

    let (tab, set_tab) = create_signal(Tab::Login);
    let (email, set_email) = create_signal(String::new());
    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let loading = auth.is_loading();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let email = email.get_untracked();
        let username = username.get_untracked();
        let password = password.get_untracked();
        let signup = tab.get_untracked() == Tab::Signup;

        spawn_local(async move {
            let result = if signup {
                auth.signup(&email, &username, &password).await
            } else {
                auth.login(&email, &password).await
            };

            if let Err(e) = result {
                log::warn!("authentication failed: {}", e);
                set_error.set(Some(e.to_string()));
            }
            // On success the effect above navigates to the dashboard.
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Multimídia Manager"</h1>
                <p class="subtitle">"Gerencie seus arquivos multimídia"</p>

                <div class="tabs">
                    <button
                        class="tab"
                        class:active=move || tab.get() == Tab::Login
                        on:click=move |_| { set_tab.set(Tab::Login); set_error.set(None); }
                    >
                        "Login"
                    </button>
                    <button
                        class="tab"
                        class:active=move || tab.get() == Tab::Signup
                        on:click=move |_| { set_tab.set(Tab::Signup); set_error.set(None); }
                    >
                        "Cadastro"
                    </button>
                </div>

                <form on:submit=on_submit>
                    <input
                        type="email"
                        placeholder="Email"
                        required
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <Show when=move || tab.get() == Tab::Signup fallback=|| view! {}>
                        <input
                            type="text"
                            placeholder="Nome de usuário"
                            required
                            prop:value=username
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                    </Show>
                    <input
                        type="password"
                        placeholder="Senha"
                        required
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />

                    <Show when=move || error.get().is_some() fallback=|| view! {}>
                        <p class="error-message">{move || error.get().unwrap_or_default()}</p>
                    </Show>

                    <button type="submit" class="btn btn-primary" disabled=loading>
                        {move || match (loading.get(), tab.get()) {
                            (true, _) => "Carregando...",
                            (false, Tab::Login) => "Entrar",
                            (false, Tab::Signup) => "Criar Conta",
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}
