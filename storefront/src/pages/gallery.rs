use leptos::ev;
use leptos::prelude::*;
use leptos_meta::Title;
use pods_catalog::gallery::{image_urls, GalleryImage, GALLERY_CATEGORIES};
use pods_core::Route;

use crate::app::use_site;
use crate::components::LightboxOverlay;

/// Showcase gallery; the lightbox pages through the filtered images only.
#[component]
pub fn GalleryPage() -> impl IntoView {
    let site = use_site();
    let title = Route::Gallery.title(&site.config().site.name);
    let category = RwSignal::new(GALLERY_CATEGORIES[0].to_string());
    let viewer = RwSignal::new(site.lightbox());

    let visible = Memo::new(move |_| -> Vec<GalleryImage> {
        category.with(|c| site.gallery(c).into_iter().cloned().collect())
    });

    let open_at = move |index: usize| {
        move |_: ev::MouseEvent| {
            let urls = visible.with_untracked(|images| image_urls(&images.iter().collect::<Vec<_>>()));
            viewer.update(|lb| {
                if let Err(e) = lb.open(urls, index) {
                    leptos::logging::warn!("gallery viewer: {}", e);
                }
            });
        }
    };

    view! {
        <Title text=title/>
        <section class="page-header">
            <h1>"Gallery"</h1>
            <p>"Installations, interiors and details from our capsule bed projects"</p>
        </section>
        <div class="categories">
            {GALLERY_CATEGORIES
                .iter()
                .map(|label| view! {
                    <button
                        class="category"
                        class:active=move || category.with(|c| c == *label)
                        on:click=move |_| category.set(label.to_string())
                    >
                        {*label}
                    </button>
                })
                .collect_view()}
        </div>
        {move || {
            visible
                .get()
                .into_iter()
                .enumerate()
                .map(|(i, image)| view! {
                    <figure class="gallery-item" on:click=open_at(i)>
                        <img src=image.url alt=image.title.clone() loading="lazy"/>
                        <figcaption>
                            <strong>{image.title}</strong>
                            <span class="muted">{image.category}</span>
                        </figcaption>
                    </figure>
                })
                .collect_view()
        }}
        <LightboxOverlay viewer=viewer/>
    }
}
