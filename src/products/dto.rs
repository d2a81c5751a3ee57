use serde::{Deserialize, Serialize};

use super::repo_types::{NewProduct, Product, ProductChanges};
use crate::error::{ensure_non_blank, ApiError};

// price and stock are taken as sent, sign included
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub pname: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
}

impl CreateProductRequest {
    pub fn into_new(self) -> Result<NewProduct, ApiError> {
        ensure_non_blank("pname", &self.pname)?;
        Ok(NewProduct {
            pname: self.pname,
            description: self.description,
            price: self.price,
            stock: self.stock,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProductRequest {
    pub pname: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
}

impl UpdateProductRequest {
    pub fn into_changes(self) -> Result<ProductChanges, ApiError> {
        if let Some(pname) = &self.pname {
            ensure_non_blank("pname", pname)?;
        }
        Ok(ProductChanges {
            pname: self.pname,
            description: self.description,
            price: self.price,
            stock: self.stock,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ProductCreatedResponse {
    pub message: &'static str,
    pub product: Product,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
