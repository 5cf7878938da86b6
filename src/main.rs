use life_hack_os::{load_state, resolve_data_path, router, StateStore};
use std::{env, net::SocketAddr, time::Duration};
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

// Matches the original UI's 40-second "feel alive" interval.
const ENVIRONMENT_SIM_PERIOD: Duration = Duration::from_secs(40);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_path = resolve_data_path()?;
    if let Some(parent) = data_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let state = load_state(&data_path).await;
    let store = StateStore::new(data_path, state);

    spawn_environment_sim(store.clone());

    let app = router(store);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Periodic sensor-drift simulation. Shares the store handle with the
/// handlers, so its writes serialize with user-triggered mutations.
fn spawn_environment_sim(store: StateStore) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(ENVIRONMENT_SIM_PERIOD);
        // interval fires immediately; swallow the first tick so the initial
        // environment survives one full period.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            store.randomize_environment().await;
        }
    });
}
