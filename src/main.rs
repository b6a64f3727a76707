use portfolio::{Config, Server, Site, logging};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), portfolio::Error> {
    logging::init();

    let config = Config::from_env().inspect_err(|e| error!("{e}"))?;
    let server = Server::bind(config.addr()).await?;

    info!(
        url = %format!("http://localhost:{}", server.local_addr().port()),
        data_dir = %config.data_dir.display(),
        public_dir = %config.public_dir.display(),
        "portfolio running"
    );

    server.serve(Site::from_config(&config).router()).await
}
