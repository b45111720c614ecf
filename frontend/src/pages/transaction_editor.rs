use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{Page, TransactionForm};
use crate::forms::{TransactionDraft, TransactionInput};
use crate::store::use_store;

#[derive(Properties, PartialEq)]
pub struct TransactionEditorPageProps {
    /// Id of the cached transaction being edited.
    pub id: String,
    pub on_navigate: Callback<Page>,
}

#[function_component(TransactionEditorPage)]
pub fn transaction_editor_page(props: &TransactionEditorPageProps) -> Html {
    let store = use_store();

    {
        let store = store.clone();
        use_effect_with_deps(
            move |_| {
                if store.categories.items.is_empty() {
                    let store = store.clone();
                    spawn_local(async move {
                        store.fetch_categories().await;
                    });
                }
                if store.transactions.items.is_empty() {
                    spawn_local(async move {
                        store.fetch_transactions().await;
                    });
                }
                || ()
            },
            (),
        );
    }

    let original = store
        .transactions
        .items
        .iter()
        .find(|transaction| transaction.id == props.id)
        .cloned();

    let back = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: ()| on_navigate.emit(Page::Transactions))
    };

    let on_submit = {
        let store = store.clone();
        let original = original.clone();
        let back = back.clone();
        Callback::from(move |input: TransactionInput| {
            if let Some(original) = &original {
                let store = store.clone();
                let replacement = input.replacing(original);
                spawn_local(async move {
                    store.edit_transaction(replacement).await;
                });
            }
            back.emit(());
        })
    };

    let categories = store.categories.items.clone();

    match original {
        Some(original) => html! {
            <TransactionForm
                key={original.id.clone()}
                title="Edit Expense/Income"
                categories={categories}
                initial={TransactionDraft::from_transaction(&original)}
                on_submit={on_submit}
                on_close={back}
            />
        },
        None if store.transactions.loading => html! {
            <p class="text-sm text-muted-foreground">{"Loading..."}</p>
        },
        None => {
            let on_back = back.reform(|_: MouseEvent| ());
            html! {
                <div class="space-y-3">
                    <p class="text-sm text-red-500">{"Transaction not found."}</p>
                    <button type="button" class="text-sm font-semibold text-[#173E63] underline" onclick={on_back}>
                        {"Back to transactions"}
                    </button>
                </div>
            }
        }
    }
}
