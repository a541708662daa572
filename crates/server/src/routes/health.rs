pub async fn health() -> &'static str {
    "status is available\n"
}
