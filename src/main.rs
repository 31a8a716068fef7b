#[tokio::main]
async fn main() -> std::io::Result<()> {
    slither_server::run_with_config().await
}
