pub mod api_request;

/// print `message` behind a local timestamp, like `2024-06-01 21:04:30: started`
pub fn log(message: &str) {
    println!("{}: {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"), message);
}
