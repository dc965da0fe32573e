use foodtracker::{app, state::AppState, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let state = AppState::init()?;
    telemetry::init(&state.config.log);

    let router = app::build_app(state.clone());
    app::serve(router, &state).await
}
