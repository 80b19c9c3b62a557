use sending_status::app::App;
use sending_status::logging::setup_logging;

fn main() {
    setup_logging(log::LevelFilter::Error);
    yew::Renderer::<App>::new().render();
}
