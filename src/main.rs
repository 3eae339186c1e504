use portfolio::configuration::get_configuration;
use portfolio::startup::Application;
use portfolio::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("portfolio".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration()?;
    let application = Application::build(configuration)?;
    application.run_until_stopped().await?;
    Ok(())
}
