//! Application shell: site context, router, header and footer.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use pods_core::{Site, SiteApp, SiteConfig, SiteError, NAV_LINKS};
use pods_viewer::ScrollLock;

use crate::browser::{BodyOverflow, ConsoleSink};
use crate::pages::{
    AboutPage, CataloguePage, ContactPage, GalleryPage, HomePage, OrderPage, ProductDetailPage,
    ProductsPage,
};

/// Site settings shipped with the bundle.
const SITE_CONFIG: &str = include_str!("../pods.toml");

fn build_site() -> Result<Site, SiteError> {
    let config = SiteConfig::from_toml_str(SITE_CONFIG)?;
    SiteApp::new(config).with_sink(ConsoleSink).build()
}

/// The configured site, shared by every page.
pub fn use_site() -> Arc<Site> {
    expect_context::<Arc<Site>>()
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let site = match build_site() {
        Ok(site) => Arc::new(site),
        Err(e) => {
            leptos::logging::error!("site failed to start: {}", e);
            return view! { <StartupError message=e.to_string()/> }.into_any();
        }
    };
    let title = site.config().site.title.clone();
    let css = site.config().site.css.clone();
    provide_context(site);
    provide_context(ScrollLock::new(BodyOverflow));

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        {css.map(|href| view! { <Stylesheet id="site" href=href/> })}
        <Meta name="description" content="Capsule beds and sleeping pods for hostels, offices and transit hubs"/>
        <Title text=title/>

        <Router>
            <Header/>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=HomePage/>
                    <Route path=path!("/products") view=ProductsPage/>
                    <Route path=path!("/products/:id") view=ProductDetailPage/>
                    <Route path=path!("/catalogue") view=CataloguePage/>
                    <Route path=path!("/gallery") view=GalleryPage/>
                    <Route path=path!("/about") view=AboutPage/>
                    <Route path=path!("/contact") view=ContactPage/>
                    <Route path=path!("/order") view=OrderPage/>
                    <Route path=path!("/*any") view=NotFound/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
    .into_any()
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header() -> impl IntoView {
    let name = use_site().config().site.name.clone();

    view! {
        <header>
            <a href="/" class="brand">{name}</a>
            <nav>
                {NAV_LINKS
                    .iter()
                    .map(|(label, href)| view! { <a href=*href>{*label}</a> })
                    .collect_view()}
            </nav>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let site = use_site();
    let name = site.config().site.name.clone();
    let email = site.config().enquiry.fallback_email.clone();
    let mailto = format!("mailto:{}", email);

    view! {
        <footer>
            <p>{name} " - capsule beds manufactured and imported for commercial spaces"</p>
            <p class="muted">"Sales: " <a href=mailto>{email}</a></p>
        </footer>
    }
}

#[component]
fn StartupError(message: String) -> impl IntoView {
    view! {
        <div class="startup-error">
            <h1>"Site configuration error"</h1>
            <p>{message}</p>
        </div>
    }
}

/// 404 page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Back to Home"</a>
        </div>
    }
}
