pub mod classify;
pub mod html;
pub mod sitemap;

#[cfg(test)]
mod tests;

pub use classify::classify;
pub use html::extract;
pub use sitemap::parse_urlset;
