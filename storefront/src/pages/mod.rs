//! Route-level pages.

mod about;
mod catalogue;
mod contact;
mod gallery;
mod home;
mod order;
mod products;

pub use about::AboutPage;
pub use catalogue::CataloguePage;
pub use contact::ContactPage;
pub use gallery::GalleryPage;
pub use home::HomePage;
pub use order::OrderPage;
pub use products::{ProductDetailPage, ProductsPage};
