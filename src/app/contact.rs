use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

use crate::contact::form::{
    ContactForm, ContactFormValues, Field, SubmissionStatus, SubmitError, BUDGETS, SERVICES,
    SUCCESS_DISPLAY,
};

#[cfg(feature = "hydrate")]
async fn post_contact(values: &ContactFormValues) -> Result<(), SubmitError> {
    use gloo_net::http::Request;

    use crate::contact::form::CONTACT_ENDPOINT;

    let response = Request::post(CONTACT_ENDPOINT)
        .header("Accept", "application/json")
        .json(values)
        .map_err(|e| SubmitError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;
    if response.ok() {
        Ok(())
    } else {
        Err(SubmitError::Rejected(response.status()))
    }
}

#[cfg(not(feature = "hydrate"))]
async fn post_contact(_values: &ContactFormValues) -> Result<(), SubmitError> {
    Err(SubmitError::Network(
        "the contact form can only be submitted from the browser".to_string(),
    ))
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(values) = form.try_update(ContactForm::begin_submit).flatten() else {
            return;
        };
        let attempt = form.with_untracked(ContactForm::attempt);
        spawn_local(async move {
            let outcome = post_contact(&values).await;
            let sent = outcome.is_ok();
            form.update(|f| f.finish(outcome));
            if sent {
                set_timeout(
                    move || form.update(|f| f.expire_success(attempt)),
                    SUCCESS_DISPLAY,
                );
            }
        });
    };

    view! {
        <section id="contact" class="py-24">
            <div class="max-w-3xl mx-auto px-4">
                <div class="text-center mb-12">
                    <h2 class="text-4xl md:text-5xl font-black tracking-tight mb-4">
                        "Let's Work Together"
                    </h2>
                    <p class="text-lg text-gray-600 dark:text-gray-400">
                        "Have a project in mind? Send me a message and I'll get back to you."
                    </p>
                </div>
                <form
                    on:submit=on_submit
                    class="space-y-6 p-8 rounded-3xl bg-white dark:bg-gray-900 border border-gray-200 dark:border-gray-800 shadow-xl"
                >
                    <div class="grid gap-6 md:grid-cols-2">
                        <TextField form field=Field::Name label="Name" kind="text" />
                        <TextField form field=Field::Email label="Email" kind="email" />
                    </div>
                    <TextField form field=Field::Subject label="Subject" kind="text" />
                    <div class="grid gap-6 md:grid-cols-2">
                        <ChoiceField form field=Field::Service label="Service" options=&SERVICES />
                        <ChoiceField form field=Field::Budget label="Budget" options=&BUDGETS />
                    </div>
                    <label class="block">
                        <span class="block mb-2 text-sm font-semibold">"Message"</span>
                        <textarea
                            rows="5"
                            required
                            class="w-full px-4 py-3 rounded-xl border border-gray-300 dark:border-gray-700 bg-transparent focus:outline-none focus:ring-2 focus:ring-indigo-600"
                            prop:value=move || form.with(|f| f.values().message.clone())
                            on:input=move |ev| form.update(|f| f.set(Field::Message, event_target_value(&ev)))
                        ></textarea>
                    </label>
                    {move || {
                        form.with(|f| f.validation_error().map(str::to_string))
                            .map(|message| {
                                view! { <p class="text-sm text-red-600">{message}</p> }
                            })
                    }}
                    <button
                        type="submit"
                        class="w-full py-4 rounded-xl bg-indigo-600 text-white font-bold hover:bg-indigo-700 disabled:opacity-60 disabled:cursor-not-allowed transition-colors"
                        disabled=move || form.with(ContactForm::is_submitting)
                    >
                        {move || {
                            if form.with(ContactForm::is_submitting) {
                                "Sending..."
                            } else {
                                "Send Message"
                            }
                        }}
                    </button>
                    {move || match form.with(|f| f.status().clone()) {
                        SubmissionStatus::Success => {
                            Some(
                                view! {
                                    <div class="flex items-center justify-between p-4 rounded-xl bg-green-50 text-green-700 dark:bg-green-900/30 dark:text-green-400">
                                        <span>"Message sent! I'll get back to you soon."</span>
                                        <button
                                            type="button"
                                            aria-label="Dismiss"
                                            on:click=move |_| form.update(ContactForm::dismiss)
                                        >
                                            "✕"
                                        </button>
                                    </div>
                                }
                                    .into_any(),
                            )
                        }
                        SubmissionStatus::Error(message) => {
                            Some(
                                view! {
                                    <p class="p-4 rounded-xl bg-red-50 text-red-700 dark:bg-red-900/30 dark:text-red-400">
                                        {message}
                                    </p>
                                }
                                    .into_any(),
                            )
                        }
                        SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
                    }}
                </form>
            </div>
        </section>
    }
}

#[component]
fn TextField(
    form: RwSignal<ContactForm>,
    field: Field,
    label: &'static str,
    kind: &'static str,
) -> impl IntoView {
    let required = field != Field::Subject;
    view! {
        <label class="block">
            <span class="block mb-2 text-sm font-semibold">{label}</span>
            <input
                type=kind
                required=required
                class="w-full px-4 py-3 rounded-xl border border-gray-300 dark:border-gray-700 bg-transparent focus:outline-none focus:ring-2 focus:ring-indigo-600"
                prop:value=move || form.with(|f| f.values().get(field).to_string())
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
            />
        </label>
    }
}

#[component]
fn ChoiceField(
    form: RwSignal<ContactForm>,
    field: Field,
    label: &'static str,
    options: &'static [&'static str],
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="block mb-2 text-sm font-semibold">{label}</span>
            <select
                class="w-full px-4 py-3 rounded-xl border border-gray-300 dark:border-gray-700 bg-transparent focus:outline-none focus:ring-2 focus:ring-indigo-600"
                prop:value=move || form.with(|f| f.values().get(field).to_string())
                on:change=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
            >
                {options
                    .iter()
                    .map(|option| view! { <option value=*option>{*option}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}
