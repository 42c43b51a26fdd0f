use dioxus::logger::tracing::Level;

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(kallari_site::App);
}
