use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Whether a category (and the transactions filed under it) counts as money in or money out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Income,
    #[default]
    Expense,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    /// Parses the value of a `<select>` option. Anything unrecognised is an expense.
    pub fn from_form_value(value: &str) -> Self {
        match value {
            "income" => Self::Income,
            _ => Self::Expense,
        }
    }
}

/// Anything stored in a slice that the remote store assigned an id to.
pub trait Keyed {
    fn key(&self) -> &str;
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(skip)]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryType,
}

/// Category body as sent to and stored by the remote store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryType,
}

impl NewCategory {
    pub fn with_id(self, id: String) -> Category {
        Category {
            id,
            name: self.name,
            kind: self.kind,
        }
    }
}

impl Keyed for Category {
    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(skip)]
    pub id: String,
    /// Id of the category, not checked against the categories slice.
    pub category: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: EntryType,
    pub created_at: String,
}

/// Transaction body without its id, as posted to the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub category: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: EntryType,
    pub created_at: String,
}

impl NewTransaction {
    pub fn with_id(self, id: String) -> Transaction {
        Transaction {
            id,
            category: self.category,
            amount: self.amount,
            kind: self.kind,
            created_at: self.created_at,
        }
    }
}

impl Keyed for Transaction {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Records that are stored without their id and get it back from the key they live under.
pub trait Record: Sized {
    fn assign_id(self, id: String) -> Self;
}

impl Record for Category {
    fn assign_id(mut self, id: String) -> Self {
        self.id = id;
        self
    }
}

impl Record for Transaction {
    fn assign_id(mut self, id: String) -> Self {
        self.id = id;
        self
    }
}

/// Response to a POST against a collection, carrying the generated key.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CreatedKey {
    pub name: String,
}

/// Turns a `{id: record}` collection into a list of records with their ids filled in.
///
/// Records keep the order the store sent them in. The store answers `null` for a
/// collection that holds nothing yet.
pub fn from_collection<T: Record>(collection: Option<IndexMap<String, T>>) -> Vec<T> {
    collection
        .unwrap_or_default()
        .into_iter()
        .map(|(id, record)| record.assign_id(id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_collection_is_empty() {
        let parsed: Option<IndexMap<String, Category>> = serde_json::from_str("null").unwrap();
        assert!(from_collection(parsed).is_empty());
    }

    #[test]
    fn collection_keys_become_ids_in_response_order() {
        let body = r#"{
            "zeta": {"name": "Salary", "type": "income"},
            "alpha": {"name": "Food", "type": "expense"}
        }"#;
        let parsed: Option<IndexMap<String, Category>> = serde_json::from_str(body).unwrap();

        let categories = from_collection(parsed);

        assert_eq!(
            categories,
            vec![
                Category {
                    id: "zeta".to_string(),
                    name: "Salary".to_string(),
                    kind: EntryType::Income,
                },
                Category {
                    id: "alpha".to_string(),
                    name: "Food".to_string(),
                    kind: EntryType::Expense,
                },
            ]
        );
    }

    #[test]
    fn transaction_uses_camel_case_and_omits_id() {
        let transaction = Transaction {
            id: "-Nx".to_string(),
            category: "-Nb2".to_string(),
            amount: 250.5,
            kind: EntryType::Expense,
            created_at: "2024-03-01T10:15:00.000Z".to_string(),
        };

        let json = serde_json::to_value(&transaction).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "category": "-Nb2",
                "amount": 250.5,
                "type": "expense",
                "createdAt": "2024-03-01T10:15:00.000Z",
            })
        );
    }

    #[test]
    fn unknown_form_value_is_expense() {
        assert_eq!(EntryType::from_form_value("income"), EntryType::Income);
        assert_eq!(EntryType::from_form_value(""), EntryType::Expense);
        assert_eq!(EntryType::default(), EntryType::Expense);
    }
}
