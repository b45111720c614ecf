use yew::prelude::*;

use crate::config::AppSettings;

mod categories;
mod settings;
mod transaction_editor;
mod transactions;

pub use categories::CategoriesPage;
pub use settings::SettingsPage;
pub use transaction_editor::TransactionEditorPage;
pub use transactions::TransactionsPage;

/// Currency label from the settings context, or the default one outside a provider.
#[hook]
fn use_currency_code() -> String {
    use_context::<UseStateHandle<AppSettings>>()
        .map(|settings| settings.currency_code.clone())
        .unwrap_or_else(|| AppSettings::default().currency_code)
}
