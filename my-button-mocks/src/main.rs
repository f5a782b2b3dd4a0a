fn main() {
    dioxus::launch(my_button_mocks::App);
}
