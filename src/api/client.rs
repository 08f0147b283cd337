use crate::api::error::ApiError;
use crate::api::models::*;
use once_cell::sync::Lazy;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

const AUTOCOMPLETE_PATH: &str = "/autocomplete";
const NEW_PLAYLIST_PATH: &str = "/new_playlist";

/// The two backend calls the page depends on.
///
/// The page only ever runs these on a single-threaded executor, so the
/// returned futures carry no `Send` bound.
#[allow(async_fn_in_trait)]
pub trait Backend: Clone + 'static {
    async fn autocomplete(&self, query: &str) -> Result<Vec<SearchResultItem>, ApiError>;

    async fn new_playlist(&self, request: &NewPlaylistRequest) -> Result<PlaylistResult, ApiError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct WaveGuideClient {
    pub base_url: String,
}

impl WaveGuideClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.build_url(path);
        let response = HTTP_CLIENT.post(&url).json(body).send().await?;

        let status = response.status();
        if status == StatusCode::FORBIDDEN {
            return Err(ApiError::Forbidden);
        }
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl Backend for WaveGuideClient {
    async fn autocomplete(&self, query: &str) -> Result<Vec<SearchResultItem>, ApiError> {
        let body = AutocompleteRequest {
            query: query.to_string(),
        };
        self.post_json(AUTOCOMPLETE_PATH, &body).await
    }

    async fn new_playlist(&self, request: &NewPlaylistRequest) -> Result<PlaylistResult, ApiError> {
        self.post_json(NEW_PLAYLIST_PATH, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    /// Read one request: headers plus `Content-Length` bytes of body.
    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf).to_string();
            if let Some(end) = text.find("\r\n\r\n") {
                let length = text[..end]
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).to_string()
    }

    /// Serve exactly one canned response on a local port. The handle yields
    /// the raw request that was received.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });
        (format!("http://{addr}"), handle)
    }

    #[test]
    fn base_url_drops_trailing_slashes() {
        let client = WaveGuideClient::new("http://localhost:5000//");
        assert_eq!(
            client.build_url(AUTOCOMPLETE_PATH),
            "http://localhost:5000/autocomplete"
        );
    }

    #[tokio::test]
    async fn autocomplete_posts_query_and_decodes_rows() {
        let (base, server) = serve_once(
            "200 OK",
            r#"[{"id":"t1","track_name":"Unravel","artist_name":"Bjork"}]"#,
        )
        .await;

        let items = WaveGuideClient::new(base).autocomplete("unr").await.unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("POST /autocomplete "));
        assert!(request.ends_with(r#"{"query":"unr"}"#));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].caption(), "Unravel by Bjork");
    }

    #[tokio::test]
    async fn forbidden_maps_to_session_error() {
        let (base, server) = serve_once("403 Forbidden", "").await;

        let err = WaveGuideClient::new(base)
            .new_playlist(&NewPlaylistRequest::default())
            .await
            .unwrap_err();
        let request = server.await.unwrap();

        assert!(request.starts_with("POST /new_playlist "));
        assert_eq!(err, ApiError::Forbidden);
        assert!(!err.is_transient());
    }

    #[tokio::test]
    async fn other_error_statuses_keep_their_code() {
        let (base, server) = serve_once("502 Bad Gateway", "").await;

        let err = WaveGuideClient::new(base).autocomplete("a").await.unwrap_err();
        server.await.unwrap();

        assert_eq!(err, ApiError::Status(502));
        assert_eq!(err.to_string(), "HTTP error! status: 502");
        assert!(err.is_transient());
    }

    #[tokio::test]
    async fn unreadable_body_is_a_decode_error() {
        let (base, server) = serve_once("200 OK", "<html>oops</html>").await;

        let err = WaveGuideClient::new(base).autocomplete("a").await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, ApiError::Decode(_)), "got {err:?}");
        assert!(!err.is_transient());
    }

    #[tokio::test]
    async fn refused_connection_is_a_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = WaveGuideClient::new(format!("http://{addr}"))
            .autocomplete("a")
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Network(_)), "got {err:?}");
    }
}
