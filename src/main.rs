use retroterm::{
    config::AppConfig,
    router::path::HOME_PATH,
    ui::app::App,
    util::{hook::set_panic_hook, log::initialize_logging},
};

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> color_eyre::Result<()> {
    setup()?;

    let config = AppConfig::from_env()?;
    let initial_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| HOME_PATH.to_string());

    let mut app = App::new(config, initial_path)?;
    app.run().await
}

fn setup() -> color_eyre::Result<()> {
    color_eyre::install()?;
    dotenv::dotenv().ok();
    set_panic_hook();
    initialize_logging()
}
