//! Shared application state.
//!
//! Each remote collection lives in a [`Slice`] driven by a yew reducer. Every request runs
//! through [`run_request`], which marks the slice as loading, awaits the store and then
//! folds the answer (or the error) back into the slice.

use std::future::Future;
use std::rc::Rc;

use yew::prelude::*;

use crate::api::FinanceApi;
use crate::error::ApiError;
use crate::model::{Category, Keyed, NewCategory, NewTransaction, Transaction};

#[derive(Clone, Debug, PartialEq)]
pub struct Slice<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for Slice<T> {
    fn default() -> Self {
        Slice {
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SliceAction<T> {
    Pending,
    Loaded(Vec<T>),
    /// A freshly created record. Ignored if a record with that id is already cached.
    Added(T),
    /// An edited record replacing the cached one with the same id.
    Replaced(T),
    Removed(String),
    Rejected(String),
}

impl<T> Reducible for Slice<T>
where
    T: Keyed + Clone,
{
    type Action = SliceAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            SliceAction::Pending => {
                next.loading = true;
                next.error = None;
            }
            SliceAction::Loaded(items) => {
                next.loading = false;
                next.items = items;
            }
            SliceAction::Added(item) => {
                next.loading = false;
                if !next.items.iter().any(|existing| existing.key() == item.key()) {
                    next.items.push(item);
                }
            }
            SliceAction::Replaced(item) => {
                next.loading = false;
                if let Some(existing) = next.items.iter_mut().find(|e| e.key() == item.key()) {
                    *existing = item;
                }
            }
            SliceAction::Removed(id) => {
                next.loading = false;
                next.items.retain(|existing| existing.key() != id);
            }
            SliceAction::Rejected(message) => {
                next.loading = false;
                next.error = Some(message);
            }
        }

        Rc::new(next)
    }
}

/// The requests the slices know how to run, used to label failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    FetchCategories,
    CreateCategory,
    DeleteCategory,
    FetchTransactions,
    AddTransaction,
    EditTransaction,
    DeleteTransaction,
}

impl Operation {
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::FetchCategories => "Failed to fetch categories",
            Self::CreateCategory => "Failed to create category",
            Self::DeleteCategory => "Failed to delete category",
            Self::FetchTransactions => "Failed to fetch transactions",
            Self::AddTransaction => "Failed to add transaction",
            Self::EditTransaction => "Failed to edit transaction",
            Self::DeleteTransaction => "Failed to delete transaction",
        }
    }

    fn describe(&self, error: &ApiError) -> String {
        if error.detail().trim().is_empty() {
            self.fallback_message().to_string()
        } else {
            error.to_string()
        }
    }
}

/// Runs one request against a slice: `Pending`, then the success action or `Rejected`.
///
/// A failed request is logged and recorded in the slice's `error`, the cached items are
/// left as they were.
pub async fn run_request<T, R, Fut>(
    dispatch: impl Fn(SliceAction<T>),
    operation: Operation,
    request: Fut,
    on_success: impl FnOnce(R) -> SliceAction<T>,
) where
    Fut: Future<Output = Result<R, ApiError>>,
{
    dispatch(SliceAction::Pending);

    match request.await {
        Ok(response) => dispatch(on_success(response)),
        Err(error) => {
            log::error!("{:?} failed: {error}", operation);
            dispatch(SliceAction::Rejected(operation.describe(&error)));
        }
    }
}

/// Everything the pages need: both slices plus the client that feeds them.
#[derive(Clone, PartialEq)]
pub struct Store {
    pub categories: UseReducerHandle<Slice<Category>>,
    pub transactions: UseReducerHandle<Slice<Transaction>>,
    pub api: Rc<FinanceApi>,
}

#[hook]
pub fn use_store() -> Store {
    use_context::<Store>().expect("store context not found")
}

fn dispatcher<T>(handle: &UseReducerHandle<Slice<T>>) -> impl Fn(SliceAction<T>)
where
    T: Keyed + Clone + 'static,
{
    let dispatcher = handle.dispatcher();
    move |action| dispatcher.dispatch(action)
}

impl Store {
    pub async fn fetch_categories(&self) {
        run_request(
            dispatcher(&self.categories),
            Operation::FetchCategories,
            self.api.fetch_categories(),
            SliceAction::Loaded,
        )
        .await
    }

    pub async fn create_category(&self, category: NewCategory) {
        run_request(
            dispatcher(&self.categories),
            Operation::CreateCategory,
            self.api.create_category(category),
            SliceAction::Added,
        )
        .await
    }

    pub async fn delete_category(&self, id: String) {
        run_request(
            dispatcher(&self.categories),
            Operation::DeleteCategory,
            self.api.delete_category(id),
            SliceAction::Removed,
        )
        .await
    }

    pub async fn fetch_transactions(&self) {
        run_request(
            dispatcher(&self.transactions),
            Operation::FetchTransactions,
            self.api.fetch_transactions(),
            SliceAction::Loaded,
        )
        .await
    }

    pub async fn add_transaction(&self, transaction: NewTransaction) {
        run_request(
            dispatcher(&self.transactions),
            Operation::AddTransaction,
            self.api.add_transaction(transaction),
            SliceAction::Added,
        )
        .await
    }

    pub async fn edit_transaction(&self, transaction: Transaction) {
        run_request(
            dispatcher(&self.transactions),
            Operation::EditTransaction,
            self.api.edit_transaction(transaction),
            SliceAction::Replaced,
        )
        .await
    }

    pub async fn delete_transaction(&self, id: String) {
        run_request(
            dispatcher(&self.transactions),
            Operation::DeleteTransaction,
            self.api.delete_transaction(id),
            SliceAction::Removed,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::model::EntryType;

    fn transaction(id: &str, amount: f64) -> Transaction {
        Transaction {
            id: id.to_string(),
            category: "-Cat".to_string(),
            amount,
            kind: EntryType::Expense,
            created_at: "2024-05-01T08:00:00.000Z".to_string(),
        }
    }

    fn reduce(slice: Slice<Transaction>, action: SliceAction<Transaction>) -> Slice<Transaction> {
        (*Rc::new(slice).reduce(action)).clone()
    }

    #[test]
    fn pending_clears_error_and_sets_loading() {
        let slice = Slice {
            items: vec![transaction("a", 1.0)],
            loading: false,
            error: Some("boom".to_string()),
        };

        let next = reduce(slice, SliceAction::Pending);

        assert!(next.loading);
        assert_eq!(next.error, None);
        assert_eq!(next.items.len(), 1);
    }

    #[test]
    fn loaded_replaces_items() {
        let slice = Slice {
            items: vec![transaction("old", 1.0)],
            loading: true,
            error: None,
        };

        let next = reduce(
            slice,
            SliceAction::Loaded(vec![transaction("a", 1.0), transaction("b", 2.0)]),
        );

        assert!(!next.loading);
        let ids: Vec<_> = next.items.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn added_appends_unless_id_is_known() {
        let slice = Slice {
            items: vec![transaction("a", 1.0)],
            loading: true,
            error: None,
        };

        let next = reduce(slice, SliceAction::Added(transaction("b", 2.0)));
        let next = reduce(next, SliceAction::Added(transaction("a", 99.0)));

        assert!(!next.loading);
        assert_eq!(next.items, vec![transaction("a", 1.0), transaction("b", 2.0)]);
    }

    #[test]
    fn replaced_keeps_position() {
        let slice = Slice {
            items: vec![transaction("a", 1.0), transaction("b", 2.0), transaction("c", 3.0)],
            ..Slice::default()
        };

        let next = reduce(slice, SliceAction::Replaced(transaction("b", 20.0)));

        assert_eq!(
            next.items,
            vec![transaction("a", 1.0), transaction("b", 20.0), transaction("c", 3.0)]
        );
    }

    #[test]
    fn replacing_unknown_id_changes_nothing() {
        let slice = Slice {
            items: vec![transaction("a", 1.0)],
            loading: true,
            error: None,
        };

        let next = reduce(slice, SliceAction::Replaced(transaction("zzz", 5.0)));

        assert!(!next.loading);
        assert_eq!(next.items, vec![transaction("a", 1.0)]);
    }

    #[test]
    fn removed_filters_by_id() {
        let slice = Slice {
            items: vec![transaction("a", 1.0), transaction("b", 2.0)],
            ..Slice::default()
        };

        let next = reduce(slice, SliceAction::Removed("a".to_string()));

        assert_eq!(next.items, vec![transaction("b", 2.0)]);
    }

    #[test]
    fn rejected_keeps_items() {
        let slice = Slice {
            items: vec![transaction("a", 1.0)],
            loading: true,
            error: None,
        };

        let next = reduce(slice, SliceAction::Rejected("nope".to_string()));

        assert!(!next.loading);
        assert_eq!(next.error.as_deref(), Some("nope"));
        assert_eq!(next.items, vec![transaction("a", 1.0)]);
    }

    #[tokio::test]
    async fn successful_request_dispatches_pending_then_result() {
        let seen = RefCell::new(Vec::new());

        run_request(
            |action: SliceAction<Transaction>| seen.borrow_mut().push(action),
            Operation::DeleteTransaction,
            async { Ok::<_, ApiError>("a".to_string()) },
            SliceAction::Removed,
        )
        .await;

        assert_eq!(
            seen.into_inner(),
            vec![SliceAction::Pending, SliceAction::Removed("a".to_string())]
        );
    }

    #[tokio::test]
    async fn failed_request_dispatches_error_message() {
        let seen = RefCell::new(Vec::new());
        let error = ApiError::Network("offline".to_string());

        run_request(
            |action: SliceAction<Transaction>| seen.borrow_mut().push(action),
            Operation::FetchTransactions,
            async { Err::<Vec<Transaction>, _>(ApiError::Network("offline".to_string())) },
            SliceAction::Loaded,
        )
        .await;

        assert_eq!(
            seen.into_inner(),
            vec![SliceAction::Pending, SliceAction::Rejected(error.to_string())]
        );
    }

    #[test]
    fn blank_error_detail_uses_operation_message() {
        let blank = ApiError::Status {
            status: 500,
            message: "  ".to_string(),
        };
        let detailed = ApiError::Status {
            status: 401,
            message: "Permission denied".to_string(),
        };

        assert_eq!(
            Operation::AddTransaction.describe(&blank),
            "Failed to add transaction"
        );
        assert_eq!(
            Operation::DeleteCategory.describe(&ApiError::Network(String::new())),
            "Failed to delete category"
        );
        assert_eq!(
            Operation::EditTransaction.describe(&detailed),
            "Request failed with status 401: Permission denied"
        );
    }

    #[tokio::test]
    async fn failed_request_with_blank_detail_records_fallback() {
        let seen = RefCell::new(Vec::new());

        run_request(
            |action: SliceAction<Category>| seen.borrow_mut().push(action),
            Operation::FetchCategories,
            async { Err::<Vec<Category>, _>(ApiError::Decode(String::new())) },
            SliceAction::Loaded,
        )
        .await;

        assert_eq!(
            seen.into_inner(),
            vec![
                SliceAction::Pending,
                SliceAction::Rejected("Failed to fetch categories".to_string()),
            ]
        );
    }
}
