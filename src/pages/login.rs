//! Login page: exchanges email/password for a bearer credential.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::notice::Notice;
use crate::net::api;
use crate::session::context::SessionContext;

/// Email/password form posting to `/api/auth/login`. On success the returned
/// token goes through `SessionContext::login` and the viewer lands on the
/// dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let status = session.status_signal();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let navigate = use_navigate();

    // An already-authenticated visitor has nothing to do here.
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            let current = status.get();
            if current.ready && current.identity.is_some() {
                navigate("/", NavigateOptions::default());
            }
        });
    }

    let submit = Callback::new(move |()| {
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.is_empty() {
            error.set(Some("Email and password are required.".to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            #[derive(serde::Serialize)]
            struct LoginRequest {
                email: String,
                password: String,
            }

            #[derive(serde::Deserialize)]
            struct LoginResponse {
                token: String,
            }

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let request = LoginRequest {
                    email: email_value,
                    password: password_value,
                };
                match api::post_json::<_, LoginResponse>("/api/auth/login", &request).await {
                    Ok(response) => match session.login(&response.token) {
                        Ok(()) => navigate("/", NavigateOptions::default()),
                        Err(err) => error.set(Some(format!("Sign-in failed: {err}."))),
                    },
                    Err(_) => error.set(Some("Invalid email or password.".to_owned())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, email_value, password_value);
        }
    });

    view! {
        <div class="login-page">
            <h1>"Procurement Console"</h1>
            <p>"Sign in to manage purchasing"</p>
            <Notice message=error/>
            <form class="login-page__form" on:submit=move |ev| {
                ev.prevent_default();
                submit.run(());
            }>
                <label class="login-page__label">
                    "Email"
                    <input
                        class="login-page__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-page__label">
                    "Password"
                    <input
                        class="login-page__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit">
                    "Sign in"
                </button>
            </form>
        </div>
    }
}
