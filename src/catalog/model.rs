use serde::{Deserialize, Serialize};

pub type ProductId = u64;

/// A single catalog entry, serialized exactly as it appears in the data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub quantity: i64,
    pub code_value: String,
    #[serde(default)]
    pub is_published: bool,
    pub expiration: String,
    pub price: f64,
}

impl Product {
    /// Builds an unsaved product. The id stays 0 until the repository assigns one.
    pub fn new(
        name: impl Into<String>,
        quantity: i64,
        code_value: impl Into<String>,
        expiration: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            quantity,
            code_value: code_value.into(),
            is_published: false,
            expiration: expiration.into(),
            price,
        }
    }

    pub fn published(mut self, is_published: bool) -> Self {
        self.is_published = is_published;
        self
    }

    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = id;
        self
    }
}

/// A partial update: only the fields that are `Some` replace the stored values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub code_value: Option<String>,
    pub is_published: Option<bool>,
    pub expiration: Option<String>,
    pub price: Option<f64>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.quantity.is_none()
            && self.code_value.is_none()
            && self.is_published.is_none()
            && self.expiration.is_none()
            && self.price.is_none()
    }

    /// Overlays the patch onto `product`, leaving its id untouched.
    pub fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(quantity) = self.quantity {
            product.quantity = quantity;
        }
        if let Some(code_value) = self.code_value {
            product.code_value = code_value;
        }
        if let Some(is_published) = self.is_published {
            product.is_published = is_published;
        }
        if let Some(expiration) = self.expiration {
            product.expiration = expiration;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
    }
}
