use engine::Tab;

mod error;
mod settings;

#[tokio::main]
async fn main() -> error::Result<()> {
    let settings = settings::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "tabsplit={level},server={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let listener = tokio::net::TcpListener::bind(settings.address()).await?;
    tracing::info!("Starting with an empty tab, nothing is persisted");

    server::run_with_listener(Tab::new(), listener).await?;
    Ok(())
}
