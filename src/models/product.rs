use serde::{Deserialize, Serialize};

/// The common product shape every catalog source is normalized into.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Product {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Image or cover URL. Empty when the source has none.
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One entry of the merchandise feed.
///
/// Already shaped like [`Product`]; extra fields such as `category` and
/// `rating` are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StoreItem {
    #[serde(default)]
    pub id: Option<u64>,
    pub title: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<StoreItem> for Product {
    fn from(item: StoreItem) -> Self {
        Product {
            title: item.title,
            price: item.price,
            image: item.image.unwrap_or_default(),
            description: item.description,
        }
    }
}

/// Response body of the literary subject feed.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BooksResponse {
    pub works: Vec<BookWork>,
}

/// One work in the literary feed.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BookWork {
    pub title: String,
    #[serde(default)]
    pub cover_id: Option<i64>,
}

/// Which upstream feed a catalog comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogSource {
    /// General merchandise feed
    Merchandise,
    /// Literary subject feed
    Books,
}

/// The catalog page the user is on. Its label prefixes every event route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Clothes,
    Books,
}

impl Route {
    pub fn label(&self) -> &'static str {
        match self {
            Route::Clothes => "Clothes",
            Route::Books => "Books",
        }
    }

    pub fn source(&self) -> CatalogSource {
        match self {
            Route::Clothes => CatalogSource::Merchandise,
            Route::Books => CatalogSource::Books,
        }
    }

    /// Route label for actions taken on the listing.
    pub fn home(&self) -> String {
        format!("{} home", self.label())
    }

    /// Route label for actions taken on or into the detail overlay.
    pub fn details(&self) -> String {
        format!("{} details", self.label())
    }
}
