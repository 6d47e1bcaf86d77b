use room_lights::desktop;

#[tokio::main]
async fn main() {
    desktop::run().await.expect("starting desktop sync failed");
}
