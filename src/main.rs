use rand::SeedableRng;
use rand::rngs::StdRng;

use flight_search::FlightApp;
use flight_search::config::AppConfig;
use flight_search::error::ErrorCode;
use flight_search::loader::FlightLoader;
use flight_search::render::render_results;
use flight_search::tabs::{TabController, TabNavigator};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env_or_default();

    let tabs = TabNavigator::new(TabController::default(), config.tab_settle);
    let panel = tabs.with_controller(|c| c.active_panel().unwrap_or_default().to_owned());
    tracing::info!(%panel, settle = ?tabs.settle(), "tab navigation ready");

    let records = match FlightLoader::new(config.timeouts) {
        Ok(loader) => loader.fetch(&config.source).await,
        Err(e) => Err(e),
    };
    let records = match records {
        Ok(records) => records,
        Err(e) => {
            tracing::error!(error = %e, code = e.error_code(), source = %config.source, "flight data load failed");
            println!("{}", e.user_message());
            return;
        }
    };

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut app = FlightApp::from_records(records, &mut rng);

    let flights = if config.initial_search.is_empty() {
        app.current_filtered_flights()
    } else {
        app.update_search(config.initial_search)
    };
    println!("{}", render_results(&flights));
}
