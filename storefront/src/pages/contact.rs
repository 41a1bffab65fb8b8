use leptos::ev;
use leptos::prelude::*;
use leptos_meta::Title;
use pods_core::Route;
use pods_quote::contact::{ContactForm, InquiryType};
use wasm_bindgen::JsCast;

use crate::app::use_site;
use crate::browser::{alert, WindowHandoff};

/// Handler copying an input's value into the form.
fn bind<E: JsCast>(form: RwSignal<ContactForm>, set: fn(&mut ContactForm, String)) -> impl Fn(E) + Copy + 'static {
    move |ev: E| {
        let value = event_target_value(&ev);
        form.update(|f| set(f, value));
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let site = StoredValue::new(use_site());
    let (title, email, whatsapp) = site.with_value(|s| {
        let config = s.config();
        (
            Route::Contact.title(&config.site.name),
            config.enquiry.fallback_email.clone(),
            config.enquiry.whatsapp().map(|n| format!("+{}", n)),
        )
    });
    let form = RwSignal::new(ContactForm::default());
    let sent = RwSignal::new(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let result = site.with_value(|s| form.with_untracked(|f| s.submit_contact(f, &mut WindowHandoff)));
        match result {
            Ok(_) => sent.set(true),
            Err(e) => alert(&e.to_string()),
        }
    };

    view! {
        <Title text=title/>
        <section class="page-header">
            <h1>"Get In Touch"</h1>
            <p>"Talk to our team about layouts, custom finishes and bulk orders"</p>
        </section>

        <div class="contact">
            <div class="contact-info">
                <h2>"Let's Start a Conversation"</h2>
                <p>"Email: " <a href=format!("mailto:{}", email)>{email.clone()}</a></p>
                {whatsapp.map(|number| view! { <p>"WhatsApp: " {number}</p> })}
                <p class="muted">"Monday to Saturday, 9:00 - 18:00 IST"</p>
            </div>

            <form class="contact-form" on:submit=on_submit>
                <label>"Name *"
                    <input type="text" prop:value=move || form.with(|f| f.name.clone()) on:input=bind(form, |f, v| f.name = v)/>
                </label>
                <label>"Email *"
                    <input type="email" prop:value=move || form.with(|f| f.email.clone()) on:input=bind(form, |f, v| f.email = v)/>
                </label>
                <label>"Company"
                    <input type="text" prop:value=move || form.with(|f| f.company.clone()) on:input=bind(form, |f, v| f.company = v)/>
                </label>
                <label>"Phone"
                    <input type="tel" prop:value=move || form.with(|f| f.phone.clone()) on:input=bind(form, |f, v| f.phone = v)/>
                </label>
                <label>"Inquiry Type"
                    <select on:change=bind(form, |f, v| f.inquiry = InquiryType::from_key(&v))>
                        {InquiryType::ALL
                            .into_iter()
                            .map(|kind| view! {
                                <option
                                    value=kind.key()
                                    selected=move || form.with(|f| f.inquiry == kind)
                                >
                                    {kind.label()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </label>
                <label>"Message *"
                    <textarea rows="5" prop:value=move || form.with(|f| f.message.clone()) on:input=bind(form, |f, v| f.message = v)></textarea>
                </label>
                <button type="submit" class="btn">"Send Message"</button>
                <Show when=move || sent.get()>
                    <p class="success">"Your mail client should open with the message ready to send."</p>
                </Show>
            </form>
        </div>
    }
}
