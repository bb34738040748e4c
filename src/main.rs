use anyhow::Result;
use backstage::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
