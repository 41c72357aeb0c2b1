mod board;
mod config;
mod error;
mod game;
mod generate;
mod primitives;
mod seed;

use dioxus::prelude::*;
use board::Board;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Board {},
}

#[allow(non_snake_case)]
fn App() -> Element {
    // Debug mode decides whether the diagnostic panel is visible
    use_effect(|| board::install_debug_mode());

    rsx! {
        div {
            id: "main",
            Router::<Route> {}
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    dioxus::launch(App);
}
