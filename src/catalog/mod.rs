//! Catalog fetching and normalization.
//!
//! Both upstream feeds end up as a `Vec<Product>`. The merchandise feed is
//! already in that shape; the literary feed is mapped work by work, with a
//! synthesized price and description.

mod synth;

pub use synth::{
    random_description, random_price, BOOK_DESCRIPTIONS, MAX_BOOK_PRICE, MIN_BOOK_PRICE,
};

use rand::Rng;
use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::error::{StorefrontError, StorefrontResult};
use crate::models::{BookWork, BooksResponse, CatalogSource, Product, StoreItem};
use crate::traits::{Headers, HttpClient, Response};

/// Fetches a catalog source and normalizes it into products.
#[derive(Clone)]
pub struct CatalogFetcher {
    http: Arc<dyn HttpClient>,
    config: Arc<StorefrontConfig>,
}

impl CatalogFetcher {
    pub fn new(http: Arc<dyn HttpClient>, config: Arc<StorefrontConfig>) -> Self {
        Self { http, config }
    }

    /// Wait out the loading delay, then fetch and normalize `source`.
    ///
    /// No retry. Transport failures and non-2xx statuses are
    /// [`StorefrontError::Network`]/[`StorefrontError::HttpStatus`]; an
    /// undecodable body is [`StorefrontError::Parse`].
    pub async fn load_catalog(&self, source: CatalogSource) -> StorefrontResult<Vec<Product>> {
        if !self.config.loading_delay.is_zero() {
            tokio::time::sleep(self.config.loading_delay).await;
        }

        let url = self.config.catalog_url(source);
        tracing::debug!("Fetching {:?} catalog from {}", source, url);

        let response = self
            .http
            .get(url, &Headers::new())
            .await
            .map_err(|err| StorefrontError::network(url, err))?;
        if !response.is_success() {
            return Err(StorefrontError::HttpStatus {
                url: url.to_string(),
                status: response.status,
                body: response.body_preview(200),
            });
        }

        let products = match source {
            CatalogSource::Merchandise => self.parse_merchandise(url, &response)?,
            CatalogSource::Books => self.parse_books(url, &response)?,
        };
        tracing::info!("Loaded {} products from {:?} catalog", products.len(), source);
        Ok(products)
    }

    fn parse_merchandise(&self, url: &str, response: &Response) -> StorefrontResult<Vec<Product>> {
        let items: Vec<StoreItem> = response
            .json()
            .map_err(|err| StorefrontError::parse(url, err))?;
        Ok(items.into_iter().map(Product::from).collect())
    }

    fn parse_books(&self, url: &str, response: &Response) -> StorefrontResult<Vec<Product>> {
        let books: BooksResponse = response
            .json()
            .map_err(|err| StorefrontError::parse(url, err))?;
        let mut rng = rand::thread_rng();
        Ok(books
            .works
            .into_iter()
            .map(|work| self.book_to_product(work, &mut rng))
            .collect())
    }

    /// Map a literary work. A missing cover becomes an empty image URL.
    pub fn book_to_product<R: Rng + ?Sized>(&self, work: BookWork, rng: &mut R) -> Product {
        let image = work
            .cover_id
            .map(|id| self.config.cover_url(id))
            .unwrap_or_default();
        Product {
            title: work.title,
            description: Some(random_description(rng).to_string()),
            image,
            price: Some(random_price(rng)),
        }
    }
}

impl std::fmt::Debug for CatalogFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogFetcher")
            .field("clothes_url", &self.config.clothes_url)
            .field("books_url", &self.config.books_url)
            .finish()
    }
}
