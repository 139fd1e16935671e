use serde::{Deserialize, Serialize};

/// A single catalog entry. The only entity this service manages.
///
/// `id` is assigned by the store at creation time and never changes
/// afterwards. It is `None` on inbound create payloads and omitted from
/// JSON output until the store has assigned one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Book {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_omitted_from_json_when_absent() {
        let book = Book {
            id: None,
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            publication_year: 1965,
        };

        let json = serde_json::to_string(&book).unwrap();
        assert!(!json.contains("\"id\""));
        assert!(json.contains("\"publication_year\":1965"));
    }

    #[test]
    fn create_payload_without_id_deserializes() {
        let json = r#"{"title":"Dune","author":"Frank Herbert","publication_year":1965}"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.id, None);
        assert_eq!(book.title, "Dune");
    }

    #[test]
    fn client_supplied_id_deserializes_but_round_trips() {
        let json = r#"{"id":7,"title":"Dune","author":"Frank Herbert","publication_year":1965}"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.id, Some(7));

        let serialized = serde_json::to_string(&book).unwrap();
        assert!(serialized.contains("\"id\":7"));
    }
}
