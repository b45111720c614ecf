use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{
    confirm, icon_plus, kind_class, page_shell, status_banner, CategoryForm, DANGER_BUTTON_CLASS,
    PRIMARY_BUTTON_CLASS,
};
use crate::model::{EntryType, NewCategory};
use crate::store::use_store;

const DELETE_PROMPT: &str = "Are you sure you want to delete this category?";

#[function_component(CategoriesPage)]
pub fn categories_page() -> Html {
    let store = use_store();
    let show_form = use_state(|| false);

    {
        let store = store.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    store.fetch_categories().await;
                });
                || ()
            },
            (),
        );
    }

    let on_open_form = {
        let show_form = show_form.clone();
        Callback::from(move |_| show_form.set(true))
    };

    let on_close_form = {
        let show_form = show_form.clone();
        Callback::from(move |_| show_form.set(false))
    };

    let on_save = {
        let store = store.clone();
        Callback::from(move |category: NewCategory| {
            let store = store.clone();
            spawn_local(async move {
                store.create_category(category).await;
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
                store.delete_category(id).await;
            });
        })
    };

    let categories = &store.categories;

    let actions = html! {
        <button type="button" class={classes!(PRIMARY_BUTTON_CLASS, "flex", "items-center", "gap-2")} onclick={on_open_form}>
            { icon_plus() }
            {"Add category"}
        </button>
    };

    html! {
        { page_shell(
            "Categories",
            actions,
            html! {
                <>
                    { status_banner(categories.loading, &categories.error) }

                    if !categories.loading && !categories.items.is_empty() {
                        <div class="bg-white rounded-[10px] shadow-sm border border-white/50 overflow-hidden">
                            <table class="w-full text-left border-collapse">
                                <thead>
                                    <tr class="bg-muted text-muted-foreground text-[10px] uppercase tracking-widest">
                                        <th class="px-6 py-4 font-bold">{"Name"}</th>
                                        <th class="px-6 py-4 font-bold">{"Type"}</th>
                                        <th class="px-6 py-4 font-bold text-right">{"Actions"}</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-border">
                                    { for categories.items.iter().map(|category| {
                                        let on_delete = {
                                            let on_delete = on_delete.clone();
                                            let id = category.id.clone();
                                            Callback::from(move |_| on_delete.emit(id.clone()))
                                        };
                                        html! {
                                            <tr key={category.id.clone()} class="text-sm hover:bg-muted/40 transition-colors">
                                                <td class="px-6 py-4">{ category.name.clone() }</td>
                                                <td class={classes!("px-6", "py-4", kind_class(category.kind == EntryType::Income))}>
                                                    { category.kind.as_str() }
                                                </td>
                                                <td class="px-6 py-4 text-right">
                                                    <button type="button" class={DANGER_BUTTON_CLASS} onclick={on_delete}>{"Delete"}</button>
                                                </td>
                                            </tr>
                                        }
                                    }) }
                                </tbody>
                            </table>
                        </div>
                    }

                    if !categories.loading && categories.items.is_empty() {
                        <p class="text-sm text-muted-foreground">{"No categories found."}</p>
                    }

                    if *show_form {
                        <CategoryForm on_save={on_save} on_close={on_close_form} />
                    }
                </>
            }
        ) }
    }
}
