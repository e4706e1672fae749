mod app;
mod badge;
mod content;

use gloo::console;

use app::App;

const MOUNT_ID: &str = "root";

fn main() {
    console::log!("mounting portfolio page");

    match gloo::utils::document().get_element_by_id(MOUNT_ID) {
        Some(root) => {
            yew::Renderer::<App>::with_root(root).render();
        }
        None => {
            console::warn!(format!("#{MOUNT_ID} not found, mounting on <body>"));
            yew::Renderer::<App>::new().render();
        }
    }
}
