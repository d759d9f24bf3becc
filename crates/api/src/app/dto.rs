use serde::{Deserialize, Serialize};

use catalog_core::ProductId;
use catalog_products::{NewProduct, Product, ProductChanges};

// -------------------------
// Request DTOs
// -------------------------

/// Missing, `null` and empty fields all reach validation, which names the
/// offending field, instead of failing body deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(value: CreateProductRequest) -> Self {
        NewProduct::new(
            value.name.unwrap_or_default(),
            value.description.unwrap_or_default(),
            value.url.unwrap_or_default(),
        )
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
}

impl From<UpdateProductRequest> for ProductChanges {
    fn from(value: UpdateProductRequest) -> Self {
        ProductChanges {
            name: value.name,
            description: value.description,
            url: value.url,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RateProductRequest {
    pub rating: i64,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub items: Vec<Product>,
}

#[derive(Debug, Serialize)]
pub struct AverageRatingResponse {
    pub id: ProductId,
    pub average: f64,
}
