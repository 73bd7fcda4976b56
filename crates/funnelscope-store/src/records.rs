//! The [`Store`] trait and typed helpers over it.

use funnelscope_core::ApiKeys;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::StoreError;

/// A persisted data category. Each maps to one JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Analyses,
    CompetitorAnalyses,
    Personas,
    PersonaAnalyses,
    ApiKeys,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Analyses,
        Category::CompetitorAnalyses,
        Category::Personas,
        Category::PersonaAnalyses,
        Category::ApiKeys,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Category::Analyses => "analyses",
            Category::CompetitorAnalyses => "competitor_analyses",
            Category::Personas => "personas",
            Category::PersonaAnalyses => "persona_analyses",
            Category::ApiKeys => "api_keys",
        }
    }

    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.json", self.name())
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Whole-document storage keyed by category.
///
/// Implementations never merge: `write` replaces whatever `read` would have
/// returned.
pub trait Store {
    /// Current document for `category`, or `None` if nothing was saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be read or parsed.
    fn read(&self, category: Category) -> Result<Option<Value>, StoreError>;

    /// Replace the document for `category`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the document cannot be persisted.
    fn write(&self, category: Category, value: &Value) -> Result<(), StoreError>;
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

fn read_array<S: Store + ?Sized>(store: &S, category: Category) -> Result<Vec<Value>, StoreError> {
    match store.read(category)? {
        None => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(StoreError::Shape {
            category: category.to_string(),
            expected: "a list",
            found: shape_name(&other),
        }),
    }
}

/// Load every record saved under `category`, oldest first.
///
/// # Errors
///
/// Returns [`StoreError`] if the document is missing-but-unreadable, is not a
/// list, or a record does not match `T`.
pub fn load_list<T, S>(store: &S, category: Category) -> Result<Vec<T>, StoreError>
where
    T: DeserializeOwned,
    S: Store + ?Sized,
{
    read_array(store, category)?
        .into_iter()
        .map(|item| {
            serde_json::from_value(item).map_err(|e| StoreError::Json {
                context: format!("{category} record"),
                source: e,
            })
        })
        .collect()
}

/// Append one record to `category` and rewrite the whole list.
///
/// Returns the new number of records.
///
/// # Errors
///
/// Returns [`StoreError`] if the existing list cannot be read or the updated
/// list cannot be written.
pub fn append<T, S>(store: &S, category: Category, record: &T) -> Result<usize, StoreError>
where
    T: Serialize,
    S: Store + ?Sized,
{
    let mut items = read_array(store, category)?;
    let value = serde_json::to_value(record).map_err(|e| StoreError::Json {
        context: format!("{category} record"),
        source: e,
    })?;
    items.push(value);
    let len = items.len();
    store.write(category, &Value::Array(items))?;
    tracing::info!(category = %category, records = len, "appended record");
    Ok(len)
}

/// Saved API keys, or empty keys when none were saved.
///
/// # Errors
///
/// Returns [`StoreError`] if the stored document is not a keys object.
pub fn load_api_keys<S: Store + ?Sized>(store: &S) -> Result<ApiKeys, StoreError> {
    match store.read(Category::ApiKeys)? {
        None => Ok(ApiKeys::default()),
        Some(value) => serde_json::from_value(value).map_err(|e| StoreError::Json {
            context: Category::ApiKeys.to_string(),
            source: e,
        }),
    }
}

/// # Errors
///
/// Returns [`StoreError`] if the keys cannot be written.
pub fn save_api_keys<S: Store + ?Sized>(store: &S, keys: &ApiKeys) -> Result<(), StoreError> {
    let value = serde_json::to_value(keys).map_err(|e| StoreError::Json {
        context: Category::ApiKeys.to_string(),
        source: e,
    })?;
    store.write(Category::ApiKeys, &value)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::MemoryStore;

    #[test]
    fn category_file_names() {
        assert_eq!(Category::Analyses.file_name(), "analyses.json");
        assert_eq!(
            Category::CompetitorAnalyses.file_name(),
            "competitor_analyses.json"
        );
        assert_eq!(Category::ApiKeys.file_name(), "api_keys.json");
    }

    #[test]
    fn load_list_of_missing_category_is_empty() {
        let store = MemoryStore::new();
        let items: Vec<Value> = load_list(&store, Category::Analyses).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn append_preserves_order() {
        let store = MemoryStore::new();
        assert_eq!(append(&store, Category::Analyses, &json!({"n": 1})).unwrap(), 1);
        assert_eq!(append(&store, Category::Analyses, &json!({"n": 2})).unwrap(), 2);
        let items: Vec<Value> = load_list(&store, Category::Analyses).unwrap();
        assert_eq!(items, vec![json!({"n": 1}), json!({"n": 2})]);
    }

    #[test]
    fn categories_are_independent() {
        let store = MemoryStore::new();
        append(&store, Category::Analyses, &json!(1)).unwrap();
        let other: Vec<Value> = load_list(&store, Category::CompetitorAnalyses).unwrap();
        assert!(other.is_empty());
    }

    #[test]
    fn non_list_document_is_shape_error() {
        let store = MemoryStore::new();
        store.write(Category::Personas, &json!({"oops": true})).unwrap();
        let err = load_list::<Value, _>(&store, Category::Personas).unwrap_err();
        assert!(matches!(err, StoreError::Shape { found: "an object", .. }));
    }

    #[test]
    fn api_keys_default_when_missing_and_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(load_api_keys(&store).unwrap(), ApiKeys::default());

        let keys = ApiKeys {
            openai: "sk-1".to_string(),
            ..ApiKeys::default()
        };
        save_api_keys(&store, &keys).unwrap();
        assert_eq!(load_api_keys(&store).unwrap(), keys);
    }
}
