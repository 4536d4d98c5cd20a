//! Remote API snapshotting.

use std::fs;

use crate::store::DataStore;
use crate::tasks::TaskReport;
use crate::Result;

pub(crate) const POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Fetch the JSON collection at `url` and save it as `api_data.json`.
/// The dispatcher always passes [`POSTS_URL`]. A non-success status is
/// reported; transport and decode failures are faults.
pub(crate) async fn fetch_api_data(
    http: &reqwest::Client,
    store: &DataStore,
    url: &str,
) -> Result<TaskReport> {
    let response = http.get(url).send().await?;
    if !response.status().is_success() {
        tracing::error!(status = %response.status(), url, "upstream request failed");
        return Ok(TaskReport::error("API request failed"));
    }

    let posts: serde_json::Value = response.json().await?;
    fs::write(store.path("api_data.json"), serde_json::to_string(&posts)?)?;

    Ok(TaskReport::success("API data saved"))
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;
    use crate::tasks::testing::scratch_store;

    /// Serve one canned HTTP response on a loopback port and return the
    /// URL pointing at it.
    async fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 1024];
            let _ = socket.read(&mut request).await.unwrap();
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });
        format!("http://{addr}/posts")
    }

    #[tokio::test]
    async fn saves_fetched_posts() {
        let (_dir, store) = scratch_store();
        let url = serve_once(
            "HTTP/1.1 200 OK\r\n\
             content-type: application/json\r\n\
             content-length: 19\r\n\
             connection: close\r\n\
             \r\n\
             [{\"id\":1},{\"id\":2}]",
        )
        .await;

        let report = fetch_api_data(&reqwest::Client::new(), &store, &url)
            .await
            .unwrap();
        assert_eq!(report, TaskReport::success("API data saved"));
        assert_eq!(
            fs::read_to_string(store.path("api_data.json")).unwrap(),
            r#"[{"id":1},{"id":2}]"#
        );
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let (_dir, store) = scratch_store();
        let url = serve_once(
            "HTTP/1.1 500 Internal Server Error\r\n\
             content-length: 0\r\n\
             connection: close\r\n\
             \r\n",
        )
        .await;

        let report = fetch_api_data(&reqwest::Client::new(), &store, &url)
            .await
            .unwrap();
        assert_eq!(report, TaskReport::error("API request failed"));
        assert!(!store.path("api_data.json").exists());
    }
}
