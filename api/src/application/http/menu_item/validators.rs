use std::str::FromStr;

use axum::{
    extract::{Multipart, multipart::MultipartError},
    http::StatusCode,
};
use menuart_core::domain::{
    category::value_objects::CategoryLabels,
    media::{entities::MediaUpload, value_objects::MAX_MEDIA_SIZE},
    menu_item::value_objects::MenuItemFields,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::ApiError;

/// Room for both binaries at their maximum size plus the text fields.
pub const MAX_UPLOAD_BODY_SIZE: usize = 2 * MAX_MEDIA_SIZE + 1024 * 1024;

/// Shape of the multipart item form, for the API docs.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemUpload {
    pub name: String,
    pub description: Option<String>,
    /// Decimal string, two fractional digits kept.
    pub price: String,
    pub category: Option<String>,
    /// Ignored unless `category` is set.
    pub subcategory: Option<String>,
    /// Update only.
    pub is_available: Option<bool>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub model: Option<Vec<u8>>,
}

/// Raw values collected from the item form before validation.
#[derive(Debug, Default)]
pub struct MenuItemForm {
    name: Option<String>,
    description: Option<String>,
    price: Option<String>,
    category: Option<String>,
    subcategory: Option<String>,
    is_available: Option<String>,
    image: Option<MediaUpload>,
    model: Option<MediaUpload>,
}

#[derive(Debug)]
pub struct ParsedMenuItemForm {
    pub fields: MenuItemFields,
    pub image: Option<MediaUpload>,
    pub model: Option<MediaUpload>,
}

impl MenuItemForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().unwrap_or_default().to_string();

            match name.as_str() {
                "image" | "model" => {
                    let filename = field.file_name().map(str::to_string);
                    let content_type = field.content_type().map(str::to_string);
                    let data = field.bytes().await.map_err(multipart_error)?;

                    form.set_file(
                        &name,
                        MediaUpload {
                            filename,
                            content_type,
                            data,
                        },
                    );
                }
                "name" | "description" | "price" | "category" | "subcategory" | "isAvailable" => {
                    let value = field.text().await.map_err(multipart_error)?;
                    form.set_text(&name, value);
                }
                _ => {}
            }
        }

        Ok(form)
    }

    pub fn set_text(&mut self, name: &str, value: String) {
        match name {
            "name" => self.name = Some(value),
            "description" => self.description = Some(value),
            "price" => self.price = Some(value),
            "category" => self.category = Some(value),
            "subcategory" => self.subcategory = Some(value),
            "isAvailable" => self.is_available = Some(value),
            _ => {}
        }
    }

    /// Browsers send an empty part for an unselected file input; those are
    /// dropped.
    pub fn set_file(&mut self, name: &str, upload: MediaUpload) {
        if upload.data.is_empty() {
            return;
        }

        match name {
            "image" => self.image = Some(upload),
            "model" => self.model = Some(upload),
            _ => {}
        }
    }

    pub fn into_parts(self) -> Result<ParsedMenuItemForm, ApiError> {
        let name = self
            .name
            .ok_or_else(|| ApiError::BadRequest("name is required".to_string()))?;

        let price = self
            .price
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .ok_or_else(|| ApiError::BadRequest("price is required".to_string()))?;
        let price = Decimal::from_str(price)
            .map_err(|_| ApiError::BadRequest("price must be a number".to_string()))?;

        let is_available = self.is_available.as_deref().map(parse_flag).transpose()?;

        Ok(ParsedMenuItemForm {
            fields: MenuItemFields {
                name,
                description: self.description,
                price,
                labels: CategoryLabels::new(self.category.as_deref(), self.subcategory.as_deref()),
                is_available,
            },
            image: self.image,
            model: self.model,
        })
    }
}

/// Accepts the spellings HTML forms and JS clients send for checkboxes.
fn parse_flag(raw: &str) -> Result<bool, ApiError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Ok(true),
        "false" | "0" | "off" | "no" => Ok(false),
        _ => Err(ApiError::BadRequest(
            "isAvailable must be true or false".to_string(),
        )),
    }
}

fn multipart_error(e: MultipartError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ApiError::PayloadTooLarge("File too large".to_string());
    }

    error!("Failed to read multipart field: {}", e);
    ApiError::BadRequest(format!("Failed to read multipart field: {}", e.body_text()))
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;

    fn form(fields: &[(&str, &str)]) -> MenuItemForm {
        let mut form = MenuItemForm::default();
        for (name, value) in fields {
            form.set_text(name, value.to_string());
        }
        form
    }

    fn upload(data: &'static [u8]) -> MediaUpload {
        MediaUpload {
            filename: Some("dish.png".to_string()),
            content_type: Some("image/png".to_string()),
            data: Bytes::from_static(data),
        }
    }

    #[test]
    fn test_form_parses_price_and_labels() {
        let parsed = form(&[
            ("name", "Margherita"),
            ("price", " 9.5 "),
            ("category", "Pizza"),
            ("subcategory", "Classic"),
        ])
        .into_parts()
        .unwrap();

        assert_eq!(parsed.fields.name, "Margherita");
        assert_eq!(parsed.fields.price, Decimal::from_str("9.5").unwrap());
        assert_eq!(parsed.fields.labels.category.as_deref(), Some("Pizza"));
        assert_eq!(parsed.fields.labels.subcategory.as_deref(), Some("Classic"));
        assert_eq!(parsed.fields.is_available, None);
        assert!(parsed.image.is_none());
    }

    #[test]
    fn test_form_requires_name_and_numeric_price() {
        assert_eq!(
            form(&[("price", "3")]).into_parts().unwrap_err(),
            ApiError::BadRequest("name is required".to_string())
        );
        assert_eq!(
            form(&[("name", "Soup"), ("price", "")]).into_parts().unwrap_err(),
            ApiError::BadRequest("price is required".to_string())
        );
        assert_eq!(
            form(&[("name", "Soup"), ("price", "cheap")])
                .into_parts()
                .unwrap_err(),
            ApiError::BadRequest("price must be a number".to_string())
        );
    }

    #[test]
    fn test_form_parses_availability_flag() {
        let parsed = form(&[("name", "Soup"), ("price", "4"), ("isAvailable", "False")])
            .into_parts()
            .unwrap();
        assert_eq!(parsed.fields.is_available, Some(false));

        assert!(
            form(&[("name", "Soup"), ("price", "4"), ("isAvailable", "maybe")])
                .into_parts()
                .is_err()
        );
    }

    #[test]
    fn test_empty_file_parts_are_ignored() {
        let mut form = form(&[("name", "Soup"), ("price", "4")]);
        form.set_file("image", upload(b""));
        form.set_file("model", upload(b"glTF"));

        let parsed = form.into_parts().unwrap();
        assert!(parsed.image.is_none());
        assert_eq!(parsed.model.unwrap().data, Bytes::from_static(b"glTF"));
    }
}
