use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, DomainResult, Entity, ProductId};

use crate::rating::{Rating, average_rating};

/// Payload for creating a product. All three fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub url: String,
}

impl NewProduct {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            url: url.into(),
        }
    }

    /// Reject the first empty (or all-whitespace) field, in declaration order.
    pub fn validate(&self) -> DomainResult<()> {
        for (field, value) in [
            ("name", &self.name),
            ("description", &self.description),
            ("url", &self.url),
        ] {
            if value.trim().is_empty() {
                return Err(DomainError::empty_field(field));
            }
        }
        Ok(())
    }
}

/// Partial overlay applied by an update. `None` keeps the stored value.
///
/// Unlike [`NewProduct`], no presence validation happens here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
}

/// A catalog product with its rating history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    url: String,
    ratings: Vec<Rating>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Build a fresh record: no ratings, never updated.
    pub fn create(id: ProductId, payload: NewProduct, now: DateTime<Utc>) -> DomainResult<Self> {
        payload.validate()?;

        Ok(Self {
            id,
            name: payload.name,
            description: payload.description,
            url: payload.url,
            ratings: Vec::new(),
            created_at: now,
            updated_at: None,
        })
    }

    pub fn id_typed(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// New record with `rating` appended. Timestamps are untouched.
    pub fn rated(&self, rating: Rating) -> Self {
        let mut ratings = Vec::with_capacity(self.ratings.len() + 1);
        ratings.extend_from_slice(&self.ratings);
        ratings.push(rating);

        Self {
            ratings,
            ..self.clone()
        }
    }

    /// New record with `changes` overlaid and `updated_at` set.
    ///
    /// `updated_at` never precedes `created_at`, even if the clock stepped back.
    pub fn apply(&self, changes: ProductChanges, now: DateTime<Utc>) -> Self {
        Self {
            id: self.id.clone(),
            name: changes.name.unwrap_or_else(|| self.name.clone()),
            description: changes
                .description
                .unwrap_or_else(|| self.description.clone()),
            url: changes.url.unwrap_or_else(|| self.url.clone()),
            ratings: self.ratings.clone(),
            created_at: self.created_at,
            updated_at: Some(now.max(self.created_at)),
        }
    }

    /// Mean rating rounded to two decimals, `0.0` when unrated.
    pub fn average_rating(&self) -> f64 {
        average_rating(&self.ratings)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
