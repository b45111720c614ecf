use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::use_currency_code;
use crate::components::{
    confirm, icon_plus, kind_class, page_shell, status_banner, Page, TransactionForm,
    DANGER_BUTTON_CLASS, PRIMARY_BUTTON_CLASS, SMALL_BUTTON_CLASS,
};
use crate::forms::TransactionInput;
use crate::ledger::{
    category_kind, category_name, format_amount, format_timestamp, newest_first, now_timestamp,
    running_total,
};
use crate::model::EntryType;
use crate::store::use_store;

const DELETE_PROMPT: &str = "Are you sure you want to delete this transaction?";

#[derive(Properties, PartialEq)]
pub struct TransactionsPageProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(TransactionsPage)]
pub fn transactions_page(props: &TransactionsPageProps) -> Html {
    let store = use_store();
    let currency = use_currency_code();
    let show_modal = use_state(|| false);
    let saving = use_state(|| false);

    // fetch whatever is not cached yet
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

    let on_show_modal = {
        let store = store.clone();
        let show_modal = show_modal.clone();
        Callback::from(move |_| {
            if store.categories.items.is_empty() {
                let store = store.clone();
                spawn_local(async move {
                    store.fetch_categories().await;
                });
            }
            show_modal.set(true);
        })
    };

    let on_close_modal = {
        let show_modal = show_modal.clone();
        Callback::from(move |_| show_modal.set(false))
    };

    let on_submit = {
        let store = store.clone();
        let show_modal = show_modal.clone();
        let saving = saving.clone();
        Callback::from(move |input: TransactionInput| {
            let store = store.clone();
            let show_modal = show_modal.clone();
            let saving = saving.clone();
            saving.set(true);
            spawn_local(async move {
                store.add_transaction(input.into_new(now_timestamp())).await;
                saving.set(false);
                show_modal.set(false);
            });
        })
    };

    let on_delete = {
        let store = store.clone();
        Callback::from(move |id: String| {
            if !confirm(DELETE_PROMPT) {
                return;
            }
            let store = store.clone();
            spawn_local(async move {
                store.delete_transaction(id).await;
            });
        })
    };

    let categories = &store.categories.items;
    let transactions = &store.transactions;
    let total = running_total(&transactions.items, categories);

    let actions = html! {
        <>
            <button type="button" class="text-sm font-semibold text-[#173E63] underline"
                onclick={{
                    let on_navigate = props.on_navigate.clone();
                    Callback::from(move |_| on_navigate.emit(Page::Categories))
                }}>
                {"Categories"}
            </button>
            <button type="button" class={classes!(PRIMARY_BUTTON_CLASS, "flex", "items-center", "gap-2")} onclick={on_show_modal}>
                { icon_plus() }
                {"Add"}
            </button>
        </>
    };

    let rows = newest_first(&transactions.items)
        .into_iter()
        .map(|transaction| {
            let is_income = category_kind(categories, &transaction.category) == Some(EntryType::Income);
            let sign = if is_income { "+" } else { "-" };
            let on_edit = {
                let on_navigate = props.on_navigate.clone();
                let id = transaction.id.clone();
                Callback::from(move |_| on_navigate.emit(Page::EditTransaction(id.clone())))
            };
            let on_delete = {
                let on_delete = on_delete.clone();
                let id = transaction.id.clone();
                Callback::from(move |_| on_delete.emit(id.clone()))
            };

            html! {
                <tr key={transaction.id.clone()} class="text-sm hover:bg-muted/40 transition-colors">
                    <td class="px-6 py-4 text-muted-foreground">{ format_timestamp(&transaction.created_at) }</td>
                    <td class="px-6 py-4">{ category_name(categories, &transaction.category) }</td>
                    <td class={classes!("px-6", "py-4", "font-semibold", kind_class(is_income))}>
                        { format!("{}{}", sign, format_amount(transaction.amount, &currency)) }
                    </td>
                    <td class="px-6 py-4 text-right">
                        <button type="button" class={SMALL_BUTTON_CLASS} onclick={on_edit}>{"Edit"}</button>
                        <button type="button" class={DANGER_BUTTON_CLASS} onclick={on_delete}>{"Delete"}</button>
                    </td>
                </tr>
            }
        })
        .collect::<Html>();

    html! {
        { page_shell(
            "Finance Tracker",
            actions,
            html! {
                <>
                    <div class="bg-white p-5 rounded-[10px] shadow-sm border border-white/50">
                        <h4 class="text-lg font-bold text-[#173E63]">
                            {"Total: "}
                            <span class={kind_class(total >= 0.0)}>{ format_amount(total, &currency) }</span>
                        </h4>
                    </div>

                    { status_banner(transactions.loading, &transactions.error) }

                    if !transactions.loading && !transactions.items.is_empty() {
                        <div class="bg-white rounded-[10px] shadow-sm border border-white/50 overflow-hidden">
                            <table class="w-full text-left border-collapse">
                                <thead>
                                    <tr class="bg-muted text-muted-foreground text-[10px] uppercase tracking-widest">
                                        <th class="px-6 py-4 font-bold">{"Date"}</th>
                                        <th class="px-6 py-4 font-bold">{"Category"}</th>
                                        <th class="px-6 py-4 font-bold">{"Amount"}</th>
                                        <th class="px-6 py-4 font-bold text-right">{"Actions"}</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-border">{ rows }</tbody>
                            </table>
                        </div>
                    }

                    if !transactions.loading && transactions.items.is_empty() {
                        <p class="text-sm text-muted-foreground">{"No transactions found."}</p>
                    }

                    if *show_modal {
                        <TransactionForm
                            title="Add Expense/Income"
                            categories={categories.clone()}
                            saving={*saving}
                            on_submit={on_submit}
                            on_close={on_close_modal}
                        />
                    }
                </>
            }
        ) }
    }
}
