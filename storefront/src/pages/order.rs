//! Order form with a live quote.
//!
//! `?series=<id>` preselects a series. The estimate is recomputed from the
//! form signal on every change; submission validates the buyer details and
//! hands the composed enquiry to WhatsApp or email.

use std::sync::Arc;

use leptos::ev;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_query_map;
use pods_catalog::prelude::ProductSeries;
use pods_core::{Route, Site};
use pods_quote::form::{FormField, OrderForm, COLORS};
use pods_quote::pricing::{AddOn, QuoteBreakdown};
use wasm_bindgen::JsCast;

use crate::app::use_site;
use crate::browser::{alert, WindowHandoff};

/// Handler feeding an input's raw value into `field`.
fn bind<E: JsCast>(
    site: StoredValue<Arc<Site>>,
    form: RwSignal<OrderForm>,
    field: FormField,
) -> impl Fn(E) + Copy + 'static {
    move |ev: E| {
        let value = event_target_value(&ev);
        site.with_value(|s| {
            form.update(|f| {
                if let Err(e) = f.update(field, &value, s.catalog()) {
                    s.logger()
                        .warn_builder("form input rejected")
                        .field("error", e.to_string())
                        .emit();
                }
            });
        });
    }
}

#[component]
pub fn OrderPage() -> impl IntoView {
    let site = use_site();
    let query = use_query_map();
    let requested = query.with_untracked(|q| q.get("series"));
    let title = Route::Order { series: None }.title(&site.config().site.name);

    match site.order_form(requested.as_deref()) {
        Ok(form) => view! {
            <Title text=title/>
            <OrderFormView initial=form/>
        }
        .into_any(),
        Err(e) => view! {
            <Title text=title/>
            <p class="error">"Ordering is unavailable: " {e.to_string()}</p>
        }
        .into_any(),
    }
}

#[component]
fn OrderFormView(initial: OrderForm) -> impl IntoView {
    let site = StoredValue::new(use_site());
    let form = RwSignal::new(initial);
    let sent = RwSignal::new(None::<&'static str>);

    let series_options: Vec<(String, String)> = site.with_value(|s| {
        s.catalog()
            .series()
            .iter()
            .map(|series| (series.id.to_string(), series.name.clone()))
            .collect()
    });
    let add_on_labels: Vec<(AddOn, String)> = site.with_value(|s| {
        AddOn::ALL
            .into_iter()
            .map(|add_on| (add_on, s.config().pricing.add_on_label(add_on)))
            .collect()
    });

    let materials = move || -> Vec<(String, String)> {
        site.with_value(|s| {
            form.with(|f| {
                f.series(s.catalog())
                    .map(|series| {
                        series
                            .available_materials()
                            .into_iter()
                            .map(|m| (m.to_string(), ProductSeries::material_label(m)))
                            .collect()
                    })
                    .unwrap_or_default()
            })
        })
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let result = site.with_value(|s| form.with_untracked(|f| s.submit_order(f, &mut WindowHandoff)));
        match result {
            Ok(submission) => sent.set(Some(submission.handoff.channel())),
            Err(e) => alert(&e.to_string()),
        }
    };

    let text_input = move |label: &'static str, kind: &'static str, field: FormField, get: fn(&OrderForm) -> String| {
        view! {
            <label>
                {label}
                <input type=kind prop:value=move || form.with(get) on:input=bind(site, form, field)/>
            </label>
        }
    };

    view! {
        <section class="page-header">
            <h1>"Order Now"</h1>
            <p>"Configure your capsule beds and get an instant estimate"</p>
        </section>

        <form class="order-form" on:submit=on_submit>
            <fieldset>
                <legend>"Configuration"</legend>
                <label>"Series"
                    <select on:change=bind(site, form, FormField::Series)>
                        {series_options
                            .into_iter()
                            .map(|(id, name)| {
                                let selected_id = id.clone();
                                view! {
                                    <option
                                        value=id
                                        selected=move || form.with(|f| f.series_id.as_str() == selected_id)
                                    >
                                        {name}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <label>"Quantity (sets)"
                    <input
                        type="number"
                        min="1"
                        prop:value=move || form.with(|f| f.quantity.to_string())
                        on:input=bind(site, form, FormField::Quantity)
                    />
                </label>
                <label>"Color"
                    <select on:change=bind(site, form, FormField::Color)>
                        {COLORS
                            .iter()
                            .map(|color| view! {
                                <option value=*color selected=move || form.with(|f| f.color == *color)>
                                    {*color}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </label>
                <label>"Material"
                    <select on:change=bind(site, form, FormField::Material)>
                        {move || {
                            materials()
                                .into_iter()
                                .map(|(value, label)| {
                                    let current = value.clone();
                                    view! {
                                        <option
                                            value=value
                                            selected=move || form.with(|f| f.material == current)
                                        >
                                            {label}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </label>
            </fieldset>

            <fieldset>
                <legend>"Add-ons (per set)"</legend>
                {add_on_labels
                    .into_iter()
                    .map(|(add_on, label)| view! {
                        <label class="checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.add_ons.is_enabled(add_on))
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    form.update(|f| f.set_add_on(add_on, checked));
                                }
                            />
                            {label}
                        </label>
                    })
                    .collect_view()}
            </fieldset>

            <fieldset>
                <legend>"Buyer Details"</legend>
                {text_input("Name *", "text", FormField::Name, |f| f.buyer.name.clone())}
                {text_input("Phone *", "tel", FormField::Phone, |f| f.buyer.phone.clone())}
                {text_input("Email *", "email", FormField::Email, |f| f.buyer.email.clone())}
                {text_input("Company", "text", FormField::Company, |f| f.buyer.company.clone())}
                {text_input("GSTIN", "text", FormField::TaxId, |f| f.buyer.tax_id.clone())}
                {text_input("City/State *", "text", FormField::City, |f| f.buyer.city.clone())}
                <label>"Delivery Address *"
                    <textarea
                        rows="3"
                        prop:value=move || form.with(|f| f.buyer.address.clone())
                        on:input=bind(site, form, FormField::Address)
                    ></textarea>
                </label>
                <label>"Access notes"
                    <textarea
                        rows="2"
                        prop:value=move || form.with(|f| f.buyer.notes.clone())
                        on:input=bind(site, form, FormField::Notes)
                    ></textarea>
                </label>
            </fieldset>

            {move || match site.with_value(|s| form.with(|f| s.quote(f))) {
                Ok(quote) => {
                    let (label, rate) = site.with_value(|s| {
                        let pricing = &s.config().pricing;
                        (pricing.tax_label.clone(), pricing.tax_rate_percent())
                    });
                    view! { <QuoteSummary quote=quote tax_label=label tax_rate=rate/> }.into_any()
                }
                Err(e) => view! { <p class="error">{e.to_string()}</p> }.into_any(),
            }}

            <button type="submit" class="btn">"Send Enquiry"</button>
            {move || sent.get().map(|channel| {
                let via = if channel == "whatsapp" { "WhatsApp" } else { "your mail client" };
                view! { <p class="success">"Enquiry ready in " {via} ". We will reply with a formal quote."</p> }
            })}
        </form>
    }
}

#[component]
fn QuoteSummary(quote: QuoteBreakdown, tax_label: String, tax_rate: String) -> impl IntoView {
    let sets = quote.quantity.get();

    view! {
        <div class="quote">
            <h3>"Estimate"</h3>
            <table>
                <tr>
                    <td>"Base (" {sets} " sets)"</td>
                    <td>{quote.base.display()}</td>
                </tr>
                <tr>
                    <td>"Delivery"</td>
                    <td>{quote.delivery.display()}</td>
                </tr>
                {quote
                    .add_on_lines
                    .into_iter()
                    .map(|line| view! {
                        <tr>
                            <td>{line.add_on.name()}</td>
                            <td>{line.subtotal.display()}</td>
                        </tr>
                    })
                    .collect_view()}
                <tr class="subtotal">
                    <td>"Price (ex-" {tax_label.clone()} ")"</td>
                    <td>{quote.taxable.display()}</td>
                </tr>
                <tr>
                    <td>{tax_label.clone()} " @" {tax_rate} "%"</td>
                    <td>{quote.tax.display()}</td>
                </tr>
                <tr class="total">
                    <td>"Total (incl. " {tax_label} ")"</td>
                    <td>{quote.total.display()}</td>
                </tr>
            </table>
        </div>
    }
}
