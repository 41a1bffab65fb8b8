use leptos::prelude::*;
use pods_catalog::prelude::Product;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let href = product.href();
    let cover = product.cover_image().unwrap_or_default().to_string();

    view! {
        <div class="product-card">
            <a href=href.clone()>
                <img src=cover alt=product.name.clone() loading="lazy"/>
            </a>
            <div class="product-info">
                <h3>{product.name}</h3>
                <p class="price">{product.price_label}</p>
                <p class="muted">{product.description}</p>
                <a href=href class="btn">"View Details"</a>
            </div>
        </div>
    }
}
