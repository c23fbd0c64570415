#[tokio::main]
async fn main() {
    hostel_guide::run().await;
}
