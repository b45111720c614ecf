use finance_tracker::{config, App};

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(config::log_level());
    log::info!("API base URL: {}", config::api_base_url());

    yew::Renderer::<App>::new().render();
}
