mod lightbox;
mod product_card;

pub use lightbox::LightboxOverlay;
pub use product_card::ProductCard;
