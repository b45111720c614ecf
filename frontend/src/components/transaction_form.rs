use yew::prelude::*;

use super::{Modal, INPUT_CLASS, PRIMARY_BUTTON_CLASS, SECONDARY_BUTTON_CLASS};
use crate::forms::{TransactionDraft, TransactionInput};
use crate::model::{Category, EntryType};

#[derive(Properties, PartialEq)]
pub struct TransactionFormProps {
    pub title: AttrValue,
    pub categories: Vec<Category>,
    #[prop_or_default]
    pub initial: TransactionDraft,
    #[prop_or(false)]
    pub saving: bool,
    pub on_submit: Callback<TransactionInput>,
    pub on_close: Callback<()>,
}

#[function_component(TransactionForm)]
pub fn transaction_form(props: &TransactionFormProps) -> Html {
    let draft = {
        let initial = props.initial.clone();
        use_state(move || initial)
    };
    let form_error = use_state(|| None::<String>);

    let on_submit = {
        let draft = draft.clone();
        let form_error = form_error.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match draft.validate() {
                Ok(input) => {
                    form_error.set(None);
                    on_submit.emit(input);
                }
                Err(err) => form_error.set(Some(err.to_string())),
            }
        })
    };

    let on_kind = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlSelectElement = e.target_unchecked_into();
            draft.set(TransactionDraft {
                kind: EntryType::from_form_value(&input.value()),
                ..(*draft).clone()
            });
        })
    };

    let on_category = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlSelectElement = e.target_unchecked_into();
            draft.set(TransactionDraft {
                category: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_amount = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            draft.set(TransactionDraft {
                amount: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <Modal title={props.title.clone()} on_close={props.on_close.clone()}>
            <form class="space-y-4" onsubmit={on_submit}>
                <div class="space-y-1">
                    <label for="type" class="text-[12px] font-bold text-muted-foreground">{"Type"}</label>
                    <select id="type" name="type" class={INPUT_CLASS} onchange={on_kind}>
                        { for [EntryType::Expense, EntryType::Income].into_iter().map(|kind| html! {
                            <option value={kind.as_str()} selected={draft.kind == kind}>{ kind.label() }</option>
                        }) }
                    </select>
                </div>
                <div class="space-y-1">
                    <label for="category" class="text-[12px] font-bold text-muted-foreground">{"Category"}</label>
                    <select id="category" name="category" class={INPUT_CLASS} onchange={on_category}>
                        <option value="" selected={draft.category.is_empty()}>{"Select a category"}</option>
                        { for props.categories.iter().map(|category| html! {
                            <option key={category.id.clone()} value={category.id.clone()} selected={draft.category == category.id}>
                                { category.name.clone() }
                            </option>
                        }) }
                    </select>
                </div>
                <div class="space-y-1">
                    <label for="amount" class="text-[12px] font-bold text-muted-foreground">{"Amount"}</label>
                    <input id="amount" name="amount" type="number" min="0" step="any" class={INPUT_CLASS}
                        value={draft.amount.clone()} oninput={on_amount} />
                </div>

                if let Some(msg) = &*form_error {
                    <p class="text-sm text-red-500">{ msg.clone() }</p>
                }

                <div class="flex justify-end gap-3">
                    <button type="button" class={SECONDARY_BUTTON_CLASS} onclick={on_cancel}>{"Cancel"}</button>
                    <button type="submit" class={PRIMARY_BUTTON_CLASS} disabled={props.saving}>
                        { if props.saving { "Saving..." } else { "Save" } }
                    </button>
                </div>
            </form>
        </Modal>
    }
}
