use leptos::ev;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;
use pods_catalog::prelude::Product;
use pods_catalog::search::ALL_SERIES;
use pods_core::Route;

use crate::app::use_site;
use crate::components::{LightboxOverlay, ProductCard};

/// Products listing with series filter and search box.
#[component]
pub fn ProductsPage() -> impl IntoView {
    let site = use_site();
    let title = Route::Products.title(&site.config().site.name);
    let series = RwSignal::new(ALL_SERIES.to_string());
    let text = RwSignal::new(String::new());

    let options: Vec<(String, String)> = site
        .catalog()
        .series_with_products()
        .into_iter()
        .map(|s| (s.id.to_string(), s.name.clone()))
        .collect();

    let results = move || -> Vec<Product> {
        series.with(|s| text.with(|t| site.search(s, t).into_iter().cloned().collect()))
    };

    view! {
        <Title text=title/>
        <h2>"All Products"</h2>
        <div class="filters">
            <input
                type="search"
                placeholder="Search products..."
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
            />
            <select on:change=move |ev| series.set(event_target_value(&ev))>
                <option value=ALL_SERIES>"All Series"</option>
                {options
                    .into_iter()
                    .map(|(id, name)| view! { <option value=id>{name}</option> })
                    .collect_view()}
            </select>
        </div>
        {move || {
            let products = results();
            if products.is_empty() {
                view! { <p class="muted">"No products match your search."</p> }.into_any()
            } else {
                view! {
                    <div class="products">
                        {products.into_iter().map(|p| view! { <ProductCard product=p/> }).collect_view()}
                    </div>
                }
                .into_any()
            }
        }}
    }
}

/// Single product page
#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.get().get("id").unwrap_or_default();

    view! { {move || view! { <ProductDetail id=id()/> }} }
}

#[component]
fn ProductDetail(id: String) -> impl IntoView {
    let site = use_site();
    let Some(product) = site.catalog().product(&id).cloned() else {
        site.logger()
            .debug_builder("unknown product")
            .field("id", id.as_str())
            .emit();
        return view! {
            <p>"Product not found"</p>
            <a href=Route::Products.href()>"Back to products"</a>
        }
        .into_any();
    };

    let title = Route::Product(id).title(&site.config().site.name);
    let order_href = site
        .catalog()
        .series_of(&product)
        .map(|s| s.order_href())
        .unwrap_or_else(|| Route::Order { series: None }.href());
    let viewer = RwSignal::new(site.lightbox());
    let images = product.images.clone();
    let open_at = move |index: usize| {
        let images = images.clone();
        move |_: ev::MouseEvent| {
            let images = images.clone();
            viewer.update(|lb| {
                if let Err(e) = lb.open(images, index) {
                    leptos::logging::warn!("product viewer: {}", e);
                }
            });
        }
    };

    view! {
        <Title text=title/>
        <div class="product-detail">
            <div class="product-images">
                {product
                    .images
                    .iter()
                    .enumerate()
                    .map(|(i, src)| view! {
                        <img src=src.clone() alt=format!("{} view {}", product.name, i + 1) on:click=open_at(i)/>
                    })
                    .collect_view()}
            </div>
            <div>
                <h1>{product.name.clone()}</h1>
                <p class="price">{product.price_label.clone()}</p>
                <p class="muted">{product.description.clone()}</p>
                <h3>"Features"</h3>
                <ul>
                    {product.features.iter().map(|f| view! { <li>{f.clone()}</li> }).collect_view()}
                </ul>
                <h3>"Specifications"</h3>
                <table class="specs">
                    {product
                        .specifications
                        .rows()
                        .into_iter()
                        .map(|(label, value)| view! {
                            <tr>
                                <th>{label}</th>
                                <td>{value.to_string()}</td>
                            </tr>
                        })
                        .collect_view()}
                </table>
                <a href=order_href class="btn">"Request a Quote"</a>
            </div>
        </div>
        <LightboxOverlay viewer=viewer/>
    }
    .into_any()
}
