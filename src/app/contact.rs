use leptos::prelude::*;
use leptos::server_fn::codec::Json;
use leptos::task::spawn_local;

use super::heading::SectionHeading;
use super::preferences::use_preferences;
use super::SocialIcons;
use crate::contact::{ContactDraft, ContactField, ContactForm, SubmitStatus, FORM_ID};
use crate::content::{Section, PERSONAL_INFO};
use crate::i18n::ContactFormText;

#[server(input = Json)]
pub async fn send_contact(draft: ContactDraft) -> Result<(), ServerFnError> {
    use crate::config::SITE_CONFIG;
    use crate::contact::{deliver, EmailJsClient};

    let client = EmailJsClient::new(SITE_CONFIG.emailjs.clone())
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    deliver(&client, draft, &SITE_CONFIG.contact_recipient)
        .await
        .map_err(|e| {
            tracing::error!("contact message not sent: {e}");
            ServerFnError::new("Couldn't send message")
        })
}

fn field_text(t: &'static ContactFormText, field: ContactField) -> (&'static str, &'static str) {
    match field {
        ContactField::Name => (t.name, t.name_placeholder),
        ContactField::Email => (t.email, t.email_placeholder),
        ContactField::Subject => (t.subject, t.subject_placeholder),
        ContactField::Message => (t.message, t.message_placeholder),
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let prefs = use_preferences();
    let t = move || &prefs.t().contact;

    view! {
        <section id=Section::Contact.id() class="py-20 px-4">
            <div class="mx-auto max-w-6xl">
                <SectionHeading section=Section::Contact />
                <div class="grid lg:grid-cols-5 gap-10">
                    <div class="lg:col-span-2 space-y-6">
                        <h3 class="text-2xl font-bold">{move || t().info}</h3>
                        <ContactInfo
                            icon="📧"
                            label=move || t().contact_info.email
                            value=PERSONAL_INFO.email
                            href=format!("mailto:{}", PERSONAL_INFO.email)
                        />
                        <ContactInfo
                            icon="📱"
                            label=move || t().contact_info.phone
                            value=PERSONAL_INFO.phone
                            href=format!("tel:{}", PERSONAL_INFO.phone.replace(' ', ""))
                        />
                        <ContactInfo
                            icon="📍"
                            label=move || t().contact_info.location
                            value=PERSONAL_INFO.location
                            href=String::new()
                        />
                        <div>
                            <h4 class="font-semibold mb-3">{move || t().social}</h4>
                            <SocialIcons />
                        </div>
                    </div>
                    <div class="lg:col-span-3">
                        <ContactFormView />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactInfo(
    icon: &'static str,
    label: impl Fn() -> &'static str + Send + Sync + 'static,
    value: &'static str,
    /// Empty for plain text.
    href: String,
) -> impl IntoView {
    let body = view! {
        <span class="text-2xl w-12 h-12 flex items-center justify-center rounded-xl bg-purple-500/10">
            {icon}
        </span>
        <span>
            <span class="block text-sm text-muted">{label}</span>
            <span class="block font-medium">{value}</span>
        </span>
    };
    if href.is_empty() {
        view! { <div class="flex items-center gap-4">{body}</div> }.into_any()
    } else {
        view! {
            <a href=href class="flex items-center gap-4 hover:text-purple-500">
                {body}
            </a>
        }
            .into_any()
    }
}

#[component]
fn ContactFormView() -> impl IntoView {
    let prefs = use_preferences();
    let t = move || &prefs.t().contact.form;
    let form = RwSignal::new(ContactForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut draft = None;
        form.update(|f| draft = f.begin());
        let Some(draft) = draft else {
            return;
        };
        spawn_local(async move {
            let res = send_contact(draft).await;
            form.update(|f| f.finish(res));
        });
    };

    let input = move |field: ContactField| {
        let class = "w-full px-4 py-3 rounded-lg border border-muted/30 bg-background focus:outline-none focus:ring-2 focus:ring-purple-500 transition-all";
        let value = move || form.with(|f| f.draft.get(field).to_string());
        let on_input = move |ev: leptos::ev::Event| form.update(|f| f.draft.set(field, event_target_value(&ev)));
        let kind = if field == ContactField::Email { "email" } else { "text" };
        let control = if field == ContactField::Message {
            view! {
                <textarea
                    id=field.input_id()
                    name=field.label()
                    rows="6"
                    required
                    class=class
                    placeholder=move || field_text(t(), field).1
                    prop:value=value
                    on:input=on_input
                ></textarea>
            }
                .into_any()
        } else {
            view! {
                <input
                    id=field.input_id()
                    name=field.label()
                    type=kind
                    required
                    class=class
                    placeholder=move || field_text(t(), field).1
                    prop:value=value
                    on:input=on_input
                />
            }
                .into_any()
        };
        view! {
            <div>
                <label for=field.input_id() class="block text-sm font-medium mb-2">
                    {move || field_text(t(), field).0}
                </label>
                {control}
            </div>
        }
    };

    view! {
        <form id=FORM_ID class="card space-y-5" on:submit=on_submit>
            <div class="grid sm:grid-cols-2 gap-5">
                {input(ContactField::Name)} {input(ContactField::Email)}
            </div>
            {input(ContactField::Subject)}
            {input(ContactField::Message)}
            <button
                type="submit"
                class="btn-primary w-full disabled:opacity-60"
                disabled=move || form.with(|f| f.submitting())
            >
                {move || {
                    if form.with(|f| f.submitting()) { t().sending } else { t().send }
                }}
            </button>
            {move || match form.with(|f| f.status()) {
                SubmitStatus::Idle => None,
                SubmitStatus::Sent => {
                    Some(
                        view! {
                            <p class="p-4 rounded-lg bg-green-500/10 text-green-600">
                                "✅ " {move || t().success}
                            </p>
                        }
                            .into_any(),
                    )
                }
                SubmitStatus::Failed => {
                    Some(
                        view! {
                            <p class="p-4 rounded-lg bg-red-500/10 text-red-600">
                                "❌ " {move || t().error}
                            </p>
                        }
                            .into_any(),
                    )
                }
            }}
        </form>
    }
}
