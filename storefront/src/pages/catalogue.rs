use leptos::prelude::*;
use leptos_meta::Title;
use pods_catalog::prelude::ProductSeries;
use pods_core::Route;

use crate::app::use_site;
use crate::components::ProductCard;

/// Every series with its variants, finishes and products.
#[component]
pub fn CataloguePage() -> impl IntoView {
    let site = use_site();
    let title = Route::Catalogue.title(&site.config().site.name);
    let catalog = site.catalog();

    view! {
        <Title text=title/>
        <section class="page-header">
            <h1>"Product Catalogue"</h1>
            <p>"Capsule bed series with sizes, finishes and applications"</p>
        </section>
        {catalog
            .series()
            .iter()
            .map(|series| {
                let products: Vec<_> = catalog.products_in_series(&series.id).cloned().collect();
                view! {
                    <SeriesSection series=series.clone()/>
                    <div class="products">
                        {products.into_iter().map(|p| view! { <ProductCard product=p/> }).collect_view()}
                    </div>
                }
            })
            .collect_view()}
    }
}

#[component]
fn SeriesSection(series: ProductSeries) -> impl IntoView {
    let order_href = series.order_href();
    let materials: Vec<String> = series
        .available_materials()
        .into_iter()
        .map(ProductSeries::material_label)
        .collect();

    view! {
        <section class="series">
            <h2>{series.name}</h2>
            <p class="muted">{series.description}</p>
            <dl>
                <dt>"Models"</dt>
                <dd>{series.models.join(", ")}</dd>
                <dt>"Sizes"</dt>
                <dd>
                    <ul>
                        {series
                            .sizes
                            .into_iter()
                            .map(|size| view! { <li>{size.label} ": " {size.dimensions}</li> })
                            .collect_view()}
                    </ul>
                </dd>
                <dt>"Colours"</dt>
                <dd>{series.colors.join(", ")}</dd>
                <dt>"Materials"</dt>
                <dd>{materials.join(", ")}</dd>
                <dt>"Applications"</dt>
                <dd>{series.applications.join(", ")}</dd>
            </dl>
            <a href=order_href class="btn">"Order this series"</a>
        </section>
    }
}
