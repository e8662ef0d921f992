//! Login page with sign-in and sign-up forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! On success the returned user replaces the auth state and the visitor is
//! sent to the conversation page. Failures are shown as reported by the
//! session API.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use session::{SignInRequest, SignUpRequest};

/// Which form the login page is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign in",
            Self::SignUp => "Create account",
        }
    }

    pub fn switch_label(self) -> &'static str {
        match self {
            Self::SignIn => "Need an account? Sign up",
            Self::SignUp => "Have an account? Sign in",
        }
    }

    /// Status text shown while a submission is in flight.
    pub fn pending_label(self) -> &'static str {
        match self {
            Self::SignIn => "Signing in...",
            Self::SignUp => "Creating account...",
        }
    }

    pub fn failure_message(self, error: &impl std::fmt::Display) -> String {
        match self {
            Self::SignIn => format!("Sign-in failed: {error}"),
            Self::SignUp => format!("Sign-up failed: {error}"),
        }
    }
}

fn checked_email(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter an email first.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(email.to_owned())
}

fn checked_password(password: &str) -> Result<String, &'static str> {
    if password.is_empty() {
        return Err("Enter a password.");
    }
    Ok(password.to_owned())
}

/// Build a sign-in body from form input. The password is kept verbatim.
///
/// # Errors
///
/// Returns a user-facing message when a field is missing or malformed.
pub fn sign_in_request(email: &str, password: &str) -> Result<SignInRequest, &'static str> {
    Ok(SignInRequest { email: checked_email(email)?, password: checked_password(password)? })
}

/// Build a sign-up body from form input.
///
/// # Errors
///
/// Returns a user-facing message when a field is missing or malformed.
pub fn sign_up_request(email: &str, password: &str, display_name: &str) -> Result<SignUpRequest, &'static str> {
    let display_name = display_name.trim();
    if display_name.is_empty() {
        return Err("Enter a display name.");
    }
    Ok(SignUpRequest {
        email: checked_email(email)?,
        password: checked_password(password)?,
        display_name: display_name.to_owned(),
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let mode = RwSignal::new(AuthMode::default());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let display_name = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let auth = expect_context::<RwSignal<crate::state::auth::AuthState>>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }

        let current = mode.get();
        let submitted = match current {
            AuthMode::SignIn => sign_in_request(&email.get(), &password.get()).map(Submission::SignIn),
            AuthMode::SignUp => {
                sign_up_request(&email.get(), &password.get(), &display_name.get()).map(Submission::SignUp)
            }
        };
        let submission = match submitted {
            Ok(submission) => submission,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };

        busy.set(true);
        info.set(current.pending_label().to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = match submission {
                    Submission::SignIn(request) => crate::net::api::sign_in(&request).await,
                    Submission::SignUp(request) => crate::net::api::sign_up(&request).await,
                };
                match result {
                    Ok(user) => {
                        auth.update(|a| a.resolve(Some(user)));
                        password.set(String::new());
                        navigate("/", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => info.set(current.failure_message(&e)),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = submission;
            busy.set(false);
        }
    };

    let on_switch = move |_| {
        mode.update(|m| *m = m.toggled());
        info.set(String::new());
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"GPTree"</h1>
                <p class="login-card__subtitle">"Branching conversations"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || mode.get() == AuthMode::SignUp>
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Display name"
                            prop:value=move || display_name.get()
                            on:input=move |ev| display_name.set(event_target_value(&ev))
                        />
                    </Show>
                    <button class="btn login-button" type="submit" disabled=move || busy.get()>
                        {move || mode.get().submit_label()}
                    </button>
                </form>
                <button class="login-card__switch" type="button" on:click=on_switch>
                    {move || mode.get().switch_label()}
                </button>
                <p class="login-card__info">{move || info.get()}</p>
            </div>
        </div>
    }
}

enum Submission {
    SignIn(SignInRequest),
    SignUp(SignUpRequest),
}
