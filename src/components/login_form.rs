//! Credential form with controlled username/password inputs.

use leptos::prelude::*;

use crate::state::form::{Credentials, FormState};

/// Login form capturing a username and password.
///
/// Both inputs are controlled: `prop:value` renders the state back into
/// the field and `on:input` writes every keystroke into it. Submitting
/// suppresses the browser's default navigation and forwards the current
/// values to `on_submit` — no validation gate, even on an empty form.
#[component]
pub fn LoginForm(on_submit: Callback<Credentials>) -> impl IntoView {
    let form = RwSignal::new(FormState::default());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(form.get().credentials());
    };

    view! {
        <div class="container">
            <h2>"Login"</h2>
            <form on:submit=submit>
                <div class="form-group">
                    <label for="username">"Username:"</label>
                    <input
                        type="text"
                        id="username"
                        class="form-control"
                        prop:value=move || form.get().username
                        on:input=move |ev| {
                            form.update(|f| f.username = event_target_value(&ev));
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="password">"Password:"</label>
                    <input
                        type="password"
                        id="password"
                        class="form-control"
                        prop:value=move || form.get().password
                        on:input=move |ev| {
                            form.update(|f| f.password = event_target_value(&ev));
                        }
                    />
                </div>
                <button type="submit" class="btn btn-primary">"Login"</button>
            </form>
        </div>
    }
}
