#[tokio::main]
async fn main() {
    if let Err(err) = texttoolbox_lib::run().await {
        tracing::error!(error = %err, "texttoolbox stopped");
        eprintln!("texttoolbox: {}", err);
        std::process::exit(1);
    }
}
