use std::rc::Rc;

use yew::prelude::*;

use crate::api::FinanceApi;
use crate::components::{Layout, Page};
use crate::config::{api_base_url, load_settings, AppSettings};
use crate::model::{Category, Transaction};
use crate::pages::{CategoriesPage, SettingsPage, TransactionEditorPage, TransactionsPage};
use crate::store::{Slice, Store};

#[function_component(App)]
pub fn app() -> Html {
    let active_page = use_state(|| Page::Transactions);
    let settings = use_state(load_settings);
    let api = use_memo(|_| FinanceApi::new(api_base_url()), ());
    let categories = use_reducer(Slice::<Category>::default);
    let transactions = use_reducer(Slice::<Transaction>::default);

    let store = Store {
        categories,
        transactions,
        api: Rc::clone(&api),
    };

    let on_select = {
        let active_page = active_page.clone();
        Callback::from(move |page: Page| active_page.set(page))
    };

    let content = match (*active_page).clone() {
        Page::Transactions => html! { <TransactionsPage on_navigate={on_select.clone()} /> },
        Page::EditTransaction(id) => {
            let key = id.clone();
            html! { <TransactionEditorPage key={key} id={id} on_navigate={on_select.clone()} /> }
        }
        Page::Categories => html! { <CategoriesPage /> },
        Page::Settings => html! { <SettingsPage /> },
    };

    html! {
        <ContextProvider<UseStateHandle<AppSettings>> context={settings}>
            <ContextProvider<Store> context={store}>
                <Layout active_page={(*active_page).clone()} on_select={on_select}>
                    { content }
                </Layout>
            </ContextProvider<Store>>
        </ContextProvider<UseStateHandle<AppSettings>>>
    }
}
