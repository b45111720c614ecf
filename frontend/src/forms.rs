use crate::error::FormError;
use crate::model::{EntryType, NewCategory, NewTransaction, Transaction};

/// Raw values of the transaction form, as typed by the user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionDraft {
    pub kind: EntryType,
    pub category: String,
    pub amount: String,
}

/// Validated transaction fields, still missing a timestamp and an id.
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionInput {
    pub kind: EntryType,
    pub category: String,
    pub amount: f64,
}

impl TransactionDraft {
    pub fn from_transaction(transaction: &Transaction) -> Self {
        TransactionDraft {
            kind: transaction.kind,
            category: transaction.category.clone(),
            amount: transaction.amount.to_string(),
        }
    }

    pub fn validate(&self) -> Result<TransactionInput, FormError> {
        let amount = self.amount.trim().parse::<f64>().unwrap_or(0.0);
        if self.category.is_empty() || !amount.is_finite() || amount <= 0.0 {
            return Err(FormError::MissingTransactionFields);
        }

        Ok(TransactionInput {
            kind: self.kind,
            category: self.category.clone(),
            amount,
        })
    }
}

impl TransactionInput {
    pub fn into_new(self, created_at: String) -> NewTransaction {
        NewTransaction {
            category: self.category,
            amount: self.amount,
            kind: self.kind,
            created_at,
        }
    }

    /// Full replacement for `original`, keeping its id and creation time.
    pub fn replacing(self, original: &Transaction) -> Transaction {
        Transaction {
            id: original.id.clone(),
            category: self.category,
            amount: self.amount,
            kind: self.kind,
            created_at: original.created_at.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryDraft {
    pub name: String,
    pub kind: EntryType,
}

impl CategoryDraft {
    pub fn validate(&self) -> Result<NewCategory, FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingCategoryName);
        }

        Ok(NewCategory {
            name: self.name.clone(),
            kind: self.kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(category: &str, amount: &str) -> TransactionDraft {
        TransactionDraft {
            kind: EntryType::Income,
            category: category.to_string(),
            amount: amount.to_string(),
        }
    }

    #[test]
    fn transaction_needs_category_and_positive_amount() {
        for (category, amount) in [
            ("", "10"),
            ("salary", ""),
            ("salary", "0"),
            ("salary", "-5"),
            ("salary", "ten"),
            ("salary", "inf"),
        ] {
            assert_eq!(
                draft(category, amount).validate(),
                Err(FormError::MissingTransactionFields),
                "category {category:?}, amount {amount:?}"
            );
        }
    }

    #[test]
    fn valid_transaction_draft() {
        let input = draft("salary", " 1500.25 ").validate().unwrap();

        assert_eq!(
            input,
            TransactionInput {
                kind: EntryType::Income,
                category: "salary".to_string(),
                amount: 1500.25,
            }
        );
    }

    #[test]
    fn edit_keeps_id_and_creation_time() {
        let original = Transaction {
            id: "-Nq".to_string(),
            category: "food".to_string(),
            amount: 20.0,
            kind: EntryType::Expense,
            created_at: "2024-04-02T12:00:00.000Z".to_string(),
        };
        let mut edited = TransactionDraft::from_transaction(&original);
        edited.amount = "35".to_string();

        let replacement = edited.validate().unwrap().replacing(&original);

        assert_eq!(
            replacement,
            Transaction {
                amount: 35.0,
                ..original
            }
        );
    }

    #[test]
    fn category_name_must_not_be_blank() {
        let blank = CategoryDraft {
            name: "   ".to_string(),
            kind: EntryType::Income,
        };
        let named = CategoryDraft {
            name: "Salary".to_string(),
            kind: EntryType::Income,
        };

        assert_eq!(blank.validate(), Err(FormError::MissingCategoryName));
        assert_eq!(
            named.validate(),
            Ok(NewCategory {
                name: "Salary".to_string(),
                kind: EntryType::Income,
            })
        );
    }
}
