//! One request/response exchange for a finished order

use super::transport::OrderTransport;
use crate::core::error::SubmissionError;
use crate::core::options::CatalogOptions;
use crate::core::order::Order;

/// Encode `order`, POST it, decode the echo and build the confirmation
///
/// Does not check [`Order::is_valid`]; [`FormSession::submit`] does.
///
/// [`FormSession::submit`]: super::FormSession::submit
pub async fn place_order<T>(
    order: &Order,
    transport: &T,
    options: &CatalogOptions,
) -> Result<String, SubmissionError>
where
    T: OrderTransport + ?Sized,
{
    let body = order.encode_bytes().inspect_err(|e| {
        tracing::error!(error = %e, "Failed to encode order");
    })?;

    tracing::debug!(endpoint = transport.endpoint(), bytes = body.len(), "Posting order");

    let data = transport.post_json(body).await.inspect_err(|e| {
        tracing::warn!(endpoint = transport.endpoint(), error = %e, "No data in response");
    })?;

    confirm(&data, options)
}

/// Turn an echoed response body into the confirmation sentence
pub fn confirm(data: &[u8], options: &CatalogOptions) -> Result<String, SubmissionError> {
    let echoed = Order::decode(data).inspect_err(|e| {
        tracing::warn!(error = %e, body = e.raw(), "Invalid response");
    })?;

    let message = echoed.confirmation_message(options).inspect_err(|e| {
        tracing::warn!(
            error = %e,
            body = %String::from_utf8_lossy(data),
            "Invalid response"
        );
    })?;

    tracing::info!(%message, "Order confirmed");
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::NetworkError;
    use async_trait::async_trait;
    use serde_json::json;

    struct Echo;

    #[async_trait]
    impl OrderTransport for Echo {
        fn endpoint(&self) -> &str {
            "memory://echo"
        }

        async fn post_json(&self, body: Vec<u8>) -> Result<Vec<u8>, NetworkError> {
            Ok(body)
        }
    }

    struct Unreachable;

    #[async_trait]
    impl OrderTransport for Unreachable {
        fn endpoint(&self) -> &str {
            "memory://nowhere"
        }

        async fn post_json(&self, _body: Vec<u8>) -> Result<Vec<u8>, NetworkError> {
            Err(NetworkError::Transport {
                endpoint: "memory://nowhere".to_string(),
                message: "connection refused".to_string(),
            })
        }
    }

    #[test]
    fn test_confirm_known_response() {
        let body = json!({
            "type": 2, "color": 1, "hair": 0, "age": 3, "hypoallergenic": false,
            "name": "A", "streetAddress": "B", "city": "C", "postalCode": "D"
        });
        let message = confirm(body.to_string().as_bytes(), CatalogOptions::standard()).unwrap();
        assert_eq!(message, "Your search for Siamese, White, Short hair cat is found.");
    }

    #[test]
    fn test_confirm_out_of_range_type_is_error() {
        let body = json!({
            "type": 99, "color": 1, "hair": 0, "age": 3, "hypoallergenic": false,
            "name": "A", "streetAddress": "B", "city": "C", "postalCode": "D"
        });
        let err = confirm(body.to_string().as_bytes(), CatalogOptions::standard()).unwrap_err();
        assert!(matches!(err, SubmissionError::Lookup(_)));
    }

    #[tokio::test]
    async fn test_place_order_through_echo() {
        let order = Order {
            cat_type: 5,
            color: 3,
            hair_length: 1,
            name: "A".to_string(),
            street_address: "B".to_string(),
            city: "C".to_string(),
            postal_code: "D".to_string(),
            ..Order::default()
        };
        let message = place_order(&order, &Echo, CatalogOptions::standard())
            .await
            .unwrap();
        assert_eq!(message, "Your search for Bengal, Tabby, Long hair cat is found.");
    }

    #[tokio::test]
    async fn test_place_order_network_failure() {
        let err = place_order(&Order::default(), &Unreachable, CatalogOptions::standard())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SubmissionError::Network(NetworkError::Transport { .. })
        ));
    }

    #[test]
    fn test_confirm_empty_body_is_invalid_response() {
        let err = confirm(b"", CatalogOptions::standard()).unwrap_err();
        match err {
            SubmissionError::Decode(decode) => {
                assert_eq!(decode.raw(), "");
                assert!(decode.to_string().starts_with("Invalid response"));
            }
            other => panic!("expected decode failure, got {:?}", other),
        }
    }
}
