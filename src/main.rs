//! Notary anchor service binary.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    notary_anchor::server::run().await
}
