use devops_counter::App;

const ROOT_ID: &str = "root";

fn mount_target() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(ROOT_ID)
}

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);

    match mount_target() {
        Some(root) => {
            log::info!("mounting into #{ROOT_ID}");
            yew::Renderer::<App>::with_root(root).render();
        }
        None => {
            log::info!("#{ROOT_ID} not found, mounting into <body>");
            yew::Renderer::<App>::new().render();
        }
    }
}
