use uva_api::Application;

fn main() {
    std::process::exit(Application::new().run());
}
