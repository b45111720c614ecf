use yew::prelude::*;

use super::{confirm, Modal, INPUT_CLASS, PRIMARY_BUTTON_CLASS, SECONDARY_BUTTON_CLASS};
use crate::forms::CategoryDraft;
use crate::model::{EntryType, NewCategory};

const DISCARD_PROMPT: &str = "Are you sure you want to cancel? Unsaved changes will be lost.";

#[derive(Properties, PartialEq)]
pub struct CategoryFormProps {
    pub on_save: Callback<NewCategory>,
    pub on_close: Callback<()>,
}

#[function_component(CategoryForm)]
pub fn category_form(props: &CategoryFormProps) -> Html {
    let draft = use_state(CategoryDraft::default);
    let form_error = use_state(|| None::<String>);

    let on_submit = {
        let draft = draft.clone();
        let form_error = form_error.clone();
        let on_save = props.on_save.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match draft.validate() {
                Ok(category) => {
                    on_save.emit(category);
                    on_close.emit(());
                }
                Err(err) => form_error.set(Some(err.to_string())),
            }
        })
    };

    let on_discard = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: ()| {
            if confirm(DISCARD_PROMPT) {
                on_close.emit(());
            }
        })
    };

    let on_cancel = {
        let on_discard = on_discard.clone();
        Callback::from(move |_: MouseEvent| on_discard.emit(()))
    };

    let on_name = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            draft.set(CategoryDraft {
                name: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_kind = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlSelectElement = e.target_unchecked_into();
            draft.set(CategoryDraft {
                kind: EntryType::from_form_value(&input.value()),
                ..(*draft).clone()
            });
        })
    };

    html! {
        <Modal title="Add Category" on_close={on_discard}>
            <form class="space-y-4" onsubmit={on_submit}>
                <div class="space-y-1">
                    <label for="name" class="text-[12px] font-bold text-muted-foreground">{"Name"}</label>
                    <input id="name" name="name" type="text" class={INPUT_CLASS}
                        value={draft.name.clone()} oninput={on_name} />
                </div>
                <div class="space-y-1">
                    <label for="type" class="text-[12px] font-bold text-muted-foreground">{"Type"}</label>
                    <select id="type" name="type" class={INPUT_CLASS} onchange={on_kind}>
                        { for [EntryType::Income, EntryType::Expense].into_iter().map(|kind| html! {
                            <option value={kind.as_str()} selected={draft.kind == kind}>{ kind.label() }</option>
                        }) }
                    </select>
                </div>

                if let Some(msg) = &*form_error {
                    <p class="text-sm text-red-500">{ msg.clone() }</p>
                }

                <div class="flex justify-end gap-3">
                    <button type="button" class={SECONDARY_BUTTON_CLASS} onclick={on_cancel}>{"Cancel"}</button>
                    <button type="submit" class={PRIMARY_BUTTON_CLASS}>{"Save"}</button>
                </div>
            </form>
        </Modal>
    }
}
