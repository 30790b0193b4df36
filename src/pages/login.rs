//! Login page wiring the credential form to the submit handler.

use leptos::prelude::*;

use crate::components::login_form::LoginForm;
use crate::state::form::Credentials;

/// Login page — renders the credential form and receives submitted values.
///
/// The handler records the attempt in the console. Only the username is
/// logged; the password never reaches a log line.
#[component]
pub fn LoginPage() -> impl IntoView {
    let on_submit = Callback::new(move |creds: Credentials| {
        leptos::logging::log!("login submitted for {}", creds.username);
    });

    view! {
        <div class="login-page">
            <LoginForm on_submit=on_submit/>
        </div>
    }
}
