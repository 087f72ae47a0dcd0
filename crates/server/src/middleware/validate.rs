use axum::{
    extract::{FromRequest, OptionalFromRequest, Request},
    http::{HeaderMap, StatusCode, header},
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use validator::{Validate, ValidationErrors};

/// Json extractor that runs `validator` rules before the handler sees the
/// body.
pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = (StatusCode, axum::Json<Value>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(body) = <axum::Json<T> as FromRequest<S>>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let payload = json!({
                    "status": "error",
                    "message": rejection.body_text(),
                });
                (rejection.status(), axum::Json(payload))
            })?;

        body.validate().map_err(|validation_errors| {
            let payload = json!({
                "status": "error",
                "message": format_validation_errors(&validation_errors),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload))
        })?;

        Ok(Self(body))
    }
}

/// `Option<SimpleValidatedJson<T>>` extracts `None` for a bodyless request
/// instead of rejecting it, so routes can treat the body as optional.
impl<S, T> OptionalFromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = (StatusCode, axum::Json<Value>);

    async fn from_request(req: Request, state: &S) -> Result<Option<Self>, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Ok(None);
        }

        <Self as FromRequest<S>>::from_request(req, state)
            .await
            .map(Some)
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(header::CONTENT_TYPE) else {
        return false;
    };
    let Ok(content_type) = content_type.to_str() else {
        return false;
    };

    let mime = content_type.split(';').next().unwrap_or("").trim();
    mime == "application/json" || mime.ends_with("+json")
}

fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid {field}"));
            messages.push(format!("{field}: {message}"));
        }
    }

    messages.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use shared::domain::requests::{CreateOrderRequest, CreateProductRequest};

    #[tokio::test]
    async fn bodyless_request_extracts_as_none() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/orders")
            .body(Body::empty())
            .unwrap();

        let extracted =
            <SimpleValidatedJson<CreateOrderRequest> as OptionalFromRequest<()>>::from_request(
                request,
                &(),
            )
            .await
            .unwrap();

        assert!(extracted.is_none());
    }

    #[tokio::test]
    async fn json_body_still_extracts_when_optional() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/orders")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"status":"COMPLETED"}"#))
            .unwrap();

        let extracted =
            <SimpleValidatedJson<CreateOrderRequest> as OptionalFromRequest<()>>::from_request(
                request,
                &(),
            )
            .await
            .unwrap()
            .expect("json body should extract");

        assert_eq!(extracted.0.status.as_deref(), Some("COMPLETED"));
    }

    #[tokio::test]
    async fn invalid_json_body_is_still_rejected_when_optional() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/products")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let result =
            <SimpleValidatedJson<CreateProductRequest> as OptionalFromRequest<()>>::from_request(
                request,
                &(),
            )
            .await;

        assert!(result.is_err());
    }

    #[test]
    fn validation_errors_are_rendered_per_field() {
        let request = CreateProductRequest {
            name: "abc".to_string(),
            description: "Descrição do produto teste".to_string(),
            price: 99.99,
            quantity: 10,
            order_id: 1,
        };

        let errors = request.validate().unwrap_err();
        let message = format_validation_errors(&errors);

        assert!(message.contains("name: Name must be between 5 and 40 characters"));
    }
}
