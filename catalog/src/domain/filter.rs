//! Product filtering.
//!
//! A [`ProductQuery`] is a conjunction of optional criteria. Each criterion
//! constrains the result only when supplied; an empty query keeps every
//! product. Filtering keeps the catalogue order and is idempotent.

use super::product::{BrandCode, Design, Product, Size};

/// Upper end of the price slider, in rupees.
pub const PRICE_CEILING: u32 = 200_000;
/// Price slider step, in rupees.
pub const PRICE_STEP: u32 = 1_000;

/// Query-string key for each criterion.
pub mod keys {
    pub const SEARCH: &str = "search";
    pub const BRAND: &str = "brand";
    pub const SIZE: &str = "size";
    pub const DESIGN: &str = "design";
    pub const PRICE_MIN: &str = "price_min";
    pub const PRICE_MAX: &str = "price_max";
}

/// Rejected query value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryValidationError {
    #[error("unknown brand '{value}'; expected one of A, B, C")]
    UnknownBrand { value: String },
    #[error("unknown size '{value}'; expected one of S, M, L")]
    UnknownSize { value: String },
    #[error("unknown design '{value}'; expected one of Modern, Classic, Minimalist")]
    UnknownDesign { value: String },
    #[error("{field} must be a whole number of rupees, got '{value}'")]
    InvalidPrice { field: &'static str, value: String },
    #[error("price_min ({min}) must not exceed price_max ({max})")]
    InvertedPriceRange { min: u32, max: u32 },
}

impl QueryValidationError {
    /// Query key the failure refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::UnknownBrand { .. } => keys::BRAND,
            Self::UnknownSize { .. } => keys::SIZE,
            Self::UnknownDesign { .. } => keys::DESIGN,
            Self::InvalidPrice { field, .. } => *field,
            Self::InvertedPriceRange { .. } => keys::PRICE_MIN,
        }
    }

    /// Stable code for error details.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownBrand { .. } | Self::UnknownSize { .. } | Self::UnknownDesign { .. } => {
                "unknown_option"
            }
            Self::InvalidPrice { .. } => "invalid_price",
            Self::InvertedPriceRange { .. } => "inverted_price_range",
        }
    }
}

/// Filter criteria for the product grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    /// Case-insensitive substring of the product name.
    pub search: Option<String>,
    /// Accepted brands; empty means any.
    pub brands: Vec<BrandCode>,
    /// Accepted sizes; empty means any.
    pub sizes: Vec<Size>,
    /// Accepted designs; empty means any.
    pub designs: Vec<Design>,
    /// Inclusive lower price bound.
    pub price_min: Option<u32>,
    /// Inclusive upper price bound.
    pub price_max: Option<u32>,
}

impl ProductQuery {
    /// Query that only matches on name.
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search: Some(text.into()),
            ..Self::default()
        }
    }

    /// Build a query from decoded query-string pairs.
    ///
    /// Checklist keys may repeat. Empty values are treated as absent, which
    /// is what an untouched HTML form submits. Unknown keys are ignored.
    ///
    /// # Examples
    /// ```
    /// use rentitease_catalog::domain::{BrandCode, ProductQuery};
    ///
    /// let query = ProductQuery::from_pairs([("brand", "A"), ("brand", "C"), ("search", "")]).unwrap();
    /// assert_eq!(query.brands, vec![BrandCode::A, BrandCode::C]);
    /// assert_eq!(query.search, None);
    /// ```
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, QueryValidationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let value = value.as_ref();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                keys::SEARCH => query.search = Some(value.to_owned()),
                keys::BRAND => query.brands.push(BrandCode::from_code(value).ok_or_else(
                    || QueryValidationError::UnknownBrand {
                        value: value.to_owned(),
                    },
                )?),
                keys::SIZE => query.sizes.push(Size::from_code(value).ok_or_else(|| {
                    QueryValidationError::UnknownSize {
                        value: value.to_owned(),
                    }
                })?),
                keys::DESIGN => query.designs.push(Design::from_label(value).ok_or_else(|| {
                    QueryValidationError::UnknownDesign {
                        value: value.to_owned(),
                    }
                })?),
                keys::PRICE_MIN => query.price_min = Some(parse_price(keys::PRICE_MIN, value)?),
                keys::PRICE_MAX => query.price_max = Some(parse_price(keys::PRICE_MAX, value)?),
                _ => {}
            }
        }
        match (query.price_min, query.price_max) {
            (Some(min), Some(max)) if min > max => {
                Err(QueryValidationError::InvertedPriceRange { min, max })
            }
            _ => Ok(query),
        }
    }

    /// Whether `product` satisfies every supplied criterion.
    pub fn matches(&self, product: &Product) -> bool {
        let name_matches = match self.search.as_deref() {
            None | Some("") => true,
            Some(needle) => product
                .name
                .to_lowercase()
                .contains(&needle.to_lowercase()),
        };
        name_matches
            && (self.brands.is_empty()
                || self.brands.iter().any(|brand| brand.label() == product.brand))
            && (self.sizes.is_empty() || self.sizes.contains(&product.size))
            && (self.designs.is_empty() || self.designs.contains(&product.design))
            && self.price_min.is_none_or(|min| product.price >= min)
            && self.price_max.is_none_or(|max| product.price <= max)
    }

    /// Whether no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.search.as_deref().is_none_or(str::is_empty)
            && self.brands.is_empty()
            && self.sizes.is_empty()
            && self.designs.is_empty()
            && self.price_min.is_none()
            && self.price_max.is_none()
    }
}

fn parse_price(field: &'static str, value: &str) -> Result<u32, QueryValidationError> {
    value
        .trim()
        .parse()
        .map_err(|_| QueryValidationError::InvalidPrice {
            field,
            value: value.to_owned(),
        })
}

/// Products matching `query`, in catalogue order.
pub fn filter_products(products: &[Product], query: &ProductQuery) -> Vec<Product> {
    products
        .iter()
        .filter(|product| query.matches(product))
        .cloned()
        .collect()
}
