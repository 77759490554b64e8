use serde::{
    Deserialize,
    Serialize,
};
use serde_json::{
    Map,
    Value,
};


const ID: &str = "id";

/// A book record.
///
/// Only `id` is owned by the service. Everything else a client posts is kept
/// as-is and in the order it was sent, so `title`, `author` and `price` are
/// read through accessors rather than enforced. The `id` field is always
/// present and always a string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "Map<String, Value>", try_from = "Map<String, Value>")]
pub struct Book {
    fields: Map<String, Value>,
}

#[derive(Debug, thiserror::Error)]
#[error("book record is missing a string `id`")]
pub struct MissingId;

impl Book {
    pub fn new<S: Into<String>>(id: S, title: S, author: S, price: f64) -> Self {
        let mut fields = Map::new();

        fields.insert(ID.into(), Value::String(id.into()));
        fields.insert("title".into(), Value::String(title.into()));
        fields.insert("author".into(), Value::String(author.into()));
        fields.insert("price".into(), Value::from(price));

        Self {
            fields,
        }
    }

    /// Builds a book from a posted JSON object. A posted `id` keeps its
    /// position but takes the assigned value; otherwise `id` goes last.
    pub fn from_attributes<S: Into<String>>(id: S, mut fields: Map<String, Value>) -> Self {
        fields.insert(ID.into(), Value::String(id.into()));

        Self {
            fields,
        }
    }

    pub fn id(&self) -> &str {
        self.fields
            .get(ID)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn title(&self) -> Option<&str> {
        self.fields
            .get("title")
            .and_then(Value::as_str)
    }

    pub fn author(&self) -> Option<&str> {
        self.fields
            .get("author")
            .and_then(Value::as_str)
    }

    pub fn price(&self) -> Option<f64> {
        self.fields
            .get("price")
            .and_then(Value::as_f64)
    }
}

impl From<Book> for Map<String, Value> {
    fn from(book: Book) -> Self {
        book.fields
    }
}

impl TryFrom<Map<String, Value>> for Book {
    type Error = MissingId;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        match fields.get(ID) {
            Some(Value::String(_)) => Ok(Self { fields }),
            _ => Err(MissingId),
        }
    }
}

/// The fixed catalogue every invocation starts from.
pub fn seed() -> Vec<Book> {
    vec![
        Book::new("1", "Cloud Computing Basics", "AWS Expert", 29.99),
        Book::new("2", "MongoDB for Beginners", "DB Master", 24.99),
        Book::new("3", "AWS Lambda Deep Dive", "Serverless Pro", 34.99),
    ]
}


#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{
        Book,
        seed,
    };

    fn object(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        value
            .as_object()
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_seed() {
        let books = seed();

        assert_eq!(books.len(), 3);
        assert_eq!(books[0].id(), "1");
        assert_eq!(books[1].title(), Some("MongoDB for Beginners"));
        assert_eq!(books[2].author(), Some("Serverless Pro"));
        assert_eq!(books[2].price(), Some(34.99));
    }

    #[test]
    fn test_serialize_in_field_order() {
        let book = Book::new("1", "Cloud Computing Basics", "AWS Expert", 29.99);

        assert_eq!(
            serde_json::to_string(&book).unwrap(),
            r#"{"id":"1","title":"Cloud Computing Basics","author":"AWS Expert","price":29.99}"#,
        );
    }

    #[test]
    fn test_from_attributes_appends_id() {
        let book = Book::from_attributes("4", object(json!({"b": 1, "a": 2})));

        assert_eq!(book.id(), "4");
        assert_eq!(serde_json::to_string(&book).unwrap(), r#"{"b":1,"a":2,"id":"4"}"#);
    }

    #[test]
    fn test_from_attributes_overrides_id_in_place() {
        let book = Book::from_attributes("4", object(json!({"id": "99", "title": "X", "isbn": "123"})));

        assert_eq!(
            serde_json::to_string(&book).unwrap(),
            r#"{"id":"4","title":"X","isbn":"123"}"#,
        );
        assert_eq!(book.price(), None);
    }

    #[test]
    fn test_deserialize_requires_string_id() {
        let book: Book = serde_json::from_value(json!({"id": "7", "title": "X"})).unwrap();

        assert_eq!(book.id(), "7");
        assert!(serde_json::from_value::<Book>(json!({"title": "X"})).is_err());
        assert!(serde_json::from_value::<Book>(json!({"id": 7})).is_err());
    }
}
