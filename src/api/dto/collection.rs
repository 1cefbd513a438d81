//! The list-response envelope.

use serde::Serialize;
use utoipa::ToSchema;

/// Wraps list results in the `{ "collection": [...] }` envelope used by
/// every `GET /api/{resource}` endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct CollectionResponse<T> {
    pub collection: Vec<T>,
}

impl<T> CollectionResponse<T> {
    pub fn new(collection: Vec<T>) -> Self {
        Self { collection }
    }
}

impl<T> From<Vec<T>> for CollectionResponse<T> {
    fn from(collection: Vec<T>) -> Self {
        Self::new(collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_under_the_collection_key() {
        let envelope = CollectionResponse::new(vec![1, 2, 3]);
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json, serde_json::json!({ "collection": [1, 2, 3] }));
    }

    #[test]
    fn empty_input_yields_empty_collection() {
        let envelope: CollectionResponse<i32> = CollectionResponse::new(Vec::new());
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json, serde_json::json!({ "collection": [] }));
    }
}
