use yew::prelude::*;

mod category_form;
mod transaction_form;

pub use category_form::CategoryForm;
pub use transaction_form::TransactionForm;

#[derive(Clone, PartialEq, Debug)]
pub enum Page {
    Transactions,
    EditTransaction(String),
    Categories,
    Settings,
}

impl Page {
    fn nav_target(&self) -> Page {
        match self {
            Page::EditTransaction(_) => Page::Transactions,
            other => other.clone(),
        }
    }
}

/// Asks the user through the browser's native dialog. A missing window counts as "no".
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub active_page: Page,
    pub on_select: Callback<Page>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="min-h-screen bg-background">
            <NavBar active_page={props.active_page.nav_target()} on_select={props.on_select.clone()} />
            <main class="max-w-5xl mx-auto px-6 py-8">
                { for props.children.iter() }
            </main>
        </div>
    }
}

struct NavItem {
    label: &'static str,
    page: Page,
    icon: fn() -> Html,
}

#[derive(Properties, PartialEq)]
struct NavBarProps {
    active_page: Page,
    on_select: Callback<Page>,
}

#[function_component(NavBar)]
fn nav_bar(props: &NavBarProps) -> Html {
    let nav_items = vec![
        NavItem {
            label: "Transactions",
            page: Page::Transactions,
            icon: icon_wallet,
        },
        NavItem {
            label: "Categories",
            page: Page::Categories,
            icon: icon_tag,
        },
        NavItem {
            label: "Settings",
            page: Page::Settings,
            icon: icon_settings,
        },
    ];

    html! {
        <header class="bg-[#173E63] h-16 flex items-center justify-between px-6 shadow-lg">
            <span class="text-white text-2xl font-black tracking-tight">{"Finance Tracker"}</span>
            <nav class="flex gap-2">
                { for nav_items.into_iter().map(|item| {
                    let class_name = if item.page == props.active_page {
                        "flex items-center gap-2 px-4 py-2 rounded-xl text-[13px] font-medium bg-[#B2CBDE] text-[#173E63]"
                    } else {
                        "flex items-center gap-2 px-4 py-2 rounded-xl text-[13px] font-medium text-slate-300 hover:bg-white/5 hover:text-white"
                    };
                    let on_select = props.on_select.clone();
                    let page = item.page;

                    html! {
                        <button type="button" class={class_name} onclick={Callback::from(move |_| on_select.emit(page.clone()))}>
                            <span class="shrink-0">{ (item.icon)() }</span>
                            <span>{ item.label }</span>
                        </button>
                    }
                }) }
            </nav>
        </header>
    }
}

pub fn page_shell(title: &'static str, actions: Html, children: Html) -> Html {
    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-[#173E63]">{ title }</h1>
                <div class="flex items-center gap-3">{ actions }</div>
            </div>
            { children }
        </div>
    }
}

/// Loading and error banners shared by the list pages.
pub fn status_banner(loading: bool, error: &Option<String>) -> Html {
    html! {
        <>
            if loading {
                <p class="text-sm text-muted-foreground">{"Loading..."}</p>
            }
            if let Some(message) = error {
                <p class="text-sm text-red-500">{ format!("Error: {message}") }</p>
            }
        </>
    }
}

pub fn kind_class(is_income: bool) -> &'static str {
    if is_income {
        "text-green-600"
    } else {
        "text-red-500"
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/50" role="dialog">
            <div class="w-full max-w-md bg-white rounded-2xl shadow-lg">
                <div class="flex items-center justify-between px-6 py-4 border-b border-border">
                    <h5 class="text-lg font-bold text-[#173E63]">{ props.title.clone() }</h5>
                    <button type="button" class="p-1 rounded-full hover:bg-slate-100" aria-label="Close" onclick={on_close}>
                        { icon_close() }
                    </button>
                </div>
                <div class="px-6 py-4">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}

pub const INPUT_CLASS: &str =
    "w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-sm text-[#173E63] border-none";
pub const PRIMARY_BUTTON_CLASS: &str =
    "bg-[#173E63] text-white px-4 py-2 rounded-[10px] text-sm font-bold hover:opacity-90";
pub const SECONDARY_BUTTON_CLASS: &str =
    "bg-[#B2CBDE] text-[#173E63] px-4 py-2 rounded-[10px] text-sm font-bold";
pub const DANGER_BUTTON_CLASS: &str =
    "bg-red-500 text-white px-3 py-1 rounded-[8px] text-xs font-bold hover:opacity-90";
pub const SMALL_BUTTON_CLASS: &str =
    "bg-[#173E63] text-white px-3 py-1 rounded-[8px] text-xs font-bold hover:opacity-90 mr-2";

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path}></path>
        </svg>
    }
}

fn icon_wallet() -> Html {
    icon_base("M3 7h18v10H3zM16 7V5H5v2")
}
fn icon_tag() -> Html {
    icon_base("M20.59 13.41l-7.17 7.17a2 2 0 01-2.83 0L2 12V2h10l8.59 8.59a2 2 0 010 2.82zM7 7h.01")
}
fn icon_settings() -> Html {
    icon_base("M12 1v3M12 20v3M4.2 4.2l2.1 2.1M17.7 17.7l2.1 2.1M1 12h3M20 12h3M4.2 19.8l2.1-2.1M17.7 6.3l2.1-2.1")
}
fn icon_close() -> Html {
    icon_base("M18 6L6 18M6 6l12 12")
}
pub fn icon_plus() -> Html {
    icon_base("M12 5v14M5 12h14")
}
