use leptos::prelude::*;
use leptos_meta::Title;
use pods_core::Route;

use crate::app::use_site;
use crate::components::ProductCard;

/// Number of products featured on the home page.
const FEATURED: usize = 3;

/// Home page with hero section
#[component]
pub fn HomePage() -> impl IntoView {
    let site = use_site();
    let title = Route::Home.title(&site.config().site.name);
    let featured: Vec<_> = site.catalog().products().iter().take(FEATURED).cloned().collect();
    let series: Vec<_> = site
        .catalog()
        .series_with_products()
        .into_iter()
        .map(|s| (s.name.clone(), s.description.clone(), s.order_href()))
        .collect();

    view! {
        <Title text=title/>
        <div class="hero">
            <h1>"Capsule Beds & Sleeping Pods"</h1>
            <p>"Manufactured and imported for hostels, offices, airports and gaming lounges"</p>
            <a href=Route::Catalogue.href() class="btn">"Browse the Catalogue"</a>
            <a href=Route::Order { series: None }.href() class="btn btn-outline">"Get a Quote"</a>
        </div>

        <h2>"Featured Products"</h2>
        <div class="products">
            {featured.into_iter().map(|p| view! { <ProductCard product=p/> }).collect_view()}
        </div>

        <h2>"Our Series"</h2>
        <div class="series-grid">
            {series
                .into_iter()
                .map(|(name, description, href)| view! {
                    <div class="series-card">
                        <h3>{name}</h3>
                        <p class="muted">{description}</p>
                        <a href=href class="btn">"Order this series"</a>
                    </div>
                })
                .collect_view()}
        </div>
    }
}
