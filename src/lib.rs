use leptos::prelude::*;

mod state;

pub use state::{Count, Field, FormState};

/// A counter and a two-field form, each owned by its own component-local
/// signal. The view is a pure projection of the two signals, and the text
/// inputs are controlled: their displayed value is always read back out of
/// [`FormState`], so display can never drift from state.
#[component]
pub fn CounterForm() -> impl IntoView {
    let (count, set_count) = signal(Count::default());
    let (form, set_form) = signal(FormState::default());

    // Debug residue carried over from the original demo: dump the whole form
    // record to the console whenever it changes.
    Effect::new(move |_| log::debug!("{:?}", form.get()));

    view! {
        <p>"Our count is " {move || count.get().value()}</p>
        <button on:click=move |_| set_count.update(|count| count.increment())>
            "Increment"
        </button>

        <p>"Form"</p>
        <input
            class="input__field"
            type="text"
            name="firstName"
            prop:value=move || form.with(|form| form.get(Field::FirstName).to_owned())
            on:input=move |ev| {
                set_form.update(|form| form.set(Field::FirstName, event_target_value(&ev)))
            }
        />
        <input
            class="input__field"
            type="email"
            name="email"
            prop:value=move || form.with(|form| form.get(Field::Email).to_owned())
            on:input=move |ev| {
                set_form.update(|form| form.set(Field::Email, event_target_value(&ev)))
            }
        />
    }
}
