mod components;
mod config;
mod error;
mod model;
mod ticker;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
