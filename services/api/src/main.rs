#[tokio::main]
async fn main() {
    if let Err(err) = coastline_stays_api::run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}
