use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[validate(length(min = 5, max = 40, message = "Name must be between 5 and 40 characters"))]
    #[schema(example = "Produto Teste")]
    pub name: String,

    #[validate(length(
        min = 5,
        max = 200,
        message = "Description must be between 5 and 200 characters"
    ))]
    #[schema(example = "Descrição do produto teste")]
    pub description: String,

    #[schema(example = 99.99)]
    pub price: f64,

    #[schema(example = 10)]
    pub quantity: i32,

    #[schema(example = 1)]
    pub order_id: i32,
}

/// Omitted fields keep their stored value; `orderId` is immutable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[validate(length(min = 5, max = 40, message = "Name must be between 5 and 40 characters"))]
    pub name: Option<String>,

    #[validate(length(
        min = 5,
        max = 200,
        message = "Description must be between 5 and 200 characters"
    ))]
    pub description: Option<String>,

    #[schema(example = 129.99)]
    pub price: Option<f64>,

    pub quantity: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request() -> CreateProductRequest {
        CreateProductRequest {
            name: "Produto Teste".to_string(),
            description: "Descrição do produto teste".to_string(),
            price: 99.99,
            quantity: 10,
            order_id: 1,
        }
    }

    #[test]
    fn valid_create_request_passes() {
        assert!(create_request().validate().is_ok());
    }

    #[test]
    fn short_name_is_rejected() {
        let request = CreateProductRequest {
            name: "abc".to_string(),
            ..create_request()
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn long_description_is_rejected() {
        let request = CreateProductRequest {
            description: "x".repeat(201),
            ..create_request()
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("description"));
    }

    #[test]
    fn update_length_rules_only_apply_to_present_fields() {
        let empty = UpdateProductRequest::default();
        assert!(empty.validate().is_ok());

        let bad_name = UpdateProductRequest {
            name: Some("abc".to_string()),
            ..UpdateProductRequest::default()
        };
        assert!(bad_name.validate().is_err());
    }
}
