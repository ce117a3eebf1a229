#[tokio::main]
async fn main() -> anyhow::Result<()> {
    clipify_lib::bootstrap::launch().await
}
