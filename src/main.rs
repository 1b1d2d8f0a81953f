#[tokio::main]
async fn main() {
    workhub_backend::run().await;
}
