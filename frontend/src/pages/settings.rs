use yew::prelude::*;

use crate::components::{page_shell, INPUT_CLASS, PRIMARY_BUTTON_CLASS};
use crate::config::{save_settings, AppSettings};

#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let settings = use_context::<UseStateHandle<AppSettings>>();
    let current_currency = settings
        .as_ref()
        .map(|s| s.currency_code.clone())
        .unwrap_or_else(|| AppSettings::default().currency_code);
    let draft = use_state(move || current_currency);
    let saved = use_state(|| false);

    let on_input = {
        let draft = draft.clone();
        let saved = saved.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
            saved.set(false);
        })
    };

    let on_save = {
        let draft = draft.clone();
        let saved = saved.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let code = draft.trim().to_uppercase();
            if code.is_empty() {
                return;
            }
            let next = AppSettings {
                currency_code: code,
            };
            save_settings(&next);
            if let Some(settings) = settings.as_ref() {
                settings.set(next);
            }
            saved.set(true);
        })
    };

    html! {
        { page_shell(
            "Settings",
            html! {},
            html! {
                <div class="bg-white rounded-[10px] p-6 shadow-sm border border-white/50 max-w-md">
                    <h2 class="text-lg font-bold text-[#173E63] mb-4">{"Preferences"}</h2>
                    <form class="space-y-3" onsubmit={on_save}>
                        <label for="currency" class="block text-sm font-medium">{"Currency label"}</label>
                        <input id="currency" type="text" maxlength="8" class={INPUT_CLASS}
                            value={(*draft).clone()} oninput={on_input} />
                        <p class="text-xs text-muted-foreground">{"Shown next to every amount. Amounts are not converted."}</p>
                        <button type="submit" class={PRIMARY_BUTTON_CLASS}>{"Save"}</button>
                        if *saved {
                            <p class="text-sm text-green-600">{"Settings saved."}</p>
                        }
                    </form>
                </div>
            }
        ) }
    }
}
