use leptos::prelude::*;
use leptos_meta::Title;
use pods_core::Route;

use crate::app::use_site;

const VALUES: &[(&str, &str)] = &[
    ("Innovation", "Sleep environments with integrated lighting, ventilation and smart controls."),
    ("Quality", "Direct oversight of materials and production as both manufacturer and importer."),
    ("Customer Focus", "Configurations built around each venue, from hostels to transit hubs."),
    ("Sustainability", "Durable ABS and wooden shells designed for long service lives."),
];

const STATS: &[(&str, &str)] = &[
    ("2015", "Manufacturing Est."),
    ("10,000+", "Pods Delivered"),
    ("25+", "Countries Served"),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    let site = use_site();
    let name = site.config().site.name.clone();
    let title = Route::About.title(&name);

    view! {
        <Title text=title/>
        <section class="page-header">
            <h1>"About " {name}</h1>
            <p>"Pioneering the future of sleep technology through innovative design and engineering"</p>
        </section>

        <section>
            <h2>"Our Mission"</h2>
            <p>
                "Quality sleep is the foundation of performance and well-being. We build capsule beds "
                "that adapt to the people using them, combining manufacturing and importing so every "
                "pod meets the same standard."
            </p>
        </section>

        <section class="values">
            {VALUES
                .iter()
                .map(|(heading, text)| view! {
                    <div class="value">
                        <h3>{*heading}</h3>
                        <p class="muted">{*text}</p>
                    </div>
                })
                .collect_view()}
        </section>

        <section class="stats">
            {STATS
                .iter()
                .map(|(value, label)| view! {
                    <div class="stat">
                        <strong>{*value}</strong>
                        <span>{*label}</span>
                    </div>
                })
                .collect_view()}
        </section>
    }
}
