//! The users/articles service with its default fixtures.
//!
//! Run with:
//!   RUST_LOG=info cargo run --example basic
//!
//! Try:
//!   curl http://localhost:3000/users \
//!        -u admin:supersecret
//!   curl -X POST http://localhost:3000/users \
//!        -u admin:supersecret \
//!        -H 'content-type: application/json' \
//!        -d '{"name":"alice","email":"alice@example.com"}'
//!   curl http://localhost:3000/articles -u reader:letmein     # 403
//!   curl http://localhost:3000/users/999 -u admin:supersecret # 404
//!   curl http://localhost:3000/healthz

use torii::{Server, routes};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let app = routes::app(routes::AppConfig::default());

    Server::bind("0.0.0.0:3000")
        .serve(app)
        .await
        .expect("server error");
}
