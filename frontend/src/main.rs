use brandstudios_site::App;

fn main() {
    console_error_panic_hook::set_once();
    // ignore the error if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Starting BrandStudios site");
    yew::Renderer::<App>::new().render();
}
