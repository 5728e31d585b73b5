// Request logging and response compression shared by every app instance.

use actix_web::middleware::{Compress, Logger};

/// Access log line: remote address, request line, status, size, latency.
const ACCESS_LOG_FORMAT: &str = r#"%a "%r" %s %b %Dms"#;

pub fn setup_middleware() -> (Logger, Compress) {
    let logger = Logger::new(ACCESS_LOG_FORMAT).exclude("/health");
    let compress = Compress::default();
    (logger, compress)
}
