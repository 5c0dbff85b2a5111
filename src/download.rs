//! Downloads the spreadsheet export and the chart library.

use anyhow::{Context, Error, Result};
use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use tracing::info;

use crate::cli::create_spinner;

/// Downloads the CSV export at `url` and returns it as text.
pub async fn fetch_csv(url: &str) -> Result<String, Error> {
    fetch_text(&Client::new(), url, "rainfall sheet").await
}

/// Downloads `url` as UTF-8 text, showing progress under the name `what`.
pub async fn fetch_text(client: &Client, url: &str, what: &str) -> Result<String, Error> {
    let progress_bar = create_spinner(format!("Downloading {}...", what));

    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to download `{}`", url))?;

    if !response.status().is_success() {
        progress_bar.abandon_with_message("Download failed");
        return Err(Error::msg(format!(
            "Failed to download `{}`: {}",
            url,
            response.status()
        )));
    }

    // Sheets exports rarely send a length; keep the spinner when they don't.
    let total_size = response.content_length().unwrap_or(0);
    if total_size > 0 {
        progress_bar.set_length(total_size);
        progress_bar.set_style(
            ProgressStyle::with_template("{msg} [{bar:40.cyan/blue}] {bytes}/{total_bytes}")?
                .progress_chars("=> "),
        );
    }

    let body = read_body(response, &progress_bar).await?;
    progress_bar.finish_with_message(format!("Downloaded {}", what));
    info!(url, bytes = body.len(), "Downloaded {}", what);

    decode(body)
}

async fn read_body(response: reqwest::Response, progress_bar: &ProgressBar) -> Result<Vec<u8>> {
    let mut body = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.context("Error reading response body")?;
        body.extend_from_slice(&chunk);
        progress_bar.set_position(body.len() as u64);
    }

    Ok(body)
}

/// UTF-8 text without a leading byte-order mark.
fn decode(body: Vec<u8>) -> Result<String> {
    let text = String::from_utf8(body).context("Download is not valid UTF-8")?;

    Ok(match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    use super::*;

    /// Serves `response` verbatim to the first connection and returns its URL.
    async fn serve_once(response: Vec<u8>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            socket.write_all(&response).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{}/export?format=csv", addr)
    }

    fn local_client() -> Client {
        Client::builder().no_proxy().build().unwrap()
    }

    #[tokio::test]
    async fn should_fail_with_status_on_not_found() {
        let url = serve_once(
            b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_vec(),
        )
        .await;

        let err = fetch_text(&local_client(), &url, "rainfall sheet")
            .await
            .unwrap_err();

        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn should_download_sheet_and_strip_byte_order_mark() {
        let body = "\u{feff}DateR,Mm\n05/01/2024,3.2\n";
        let mut response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        )
        .into_bytes();
        response.extend_from_slice(body.as_bytes());
        let url = serve_once(response).await;

        let text = fetch_text(&local_client(), &url, "rainfall sheet")
            .await
            .unwrap();

        assert_eq!(text, "DateR,Mm\n05/01/2024,3.2\n");
    }

    #[tokio::test]
    async fn should_download_body_without_length() {
        let response =
            b"HTTP/1.1 200 OK\r\nConnection: close\r\n\r\nDateR,Mm\n19/01/2024,1.1\n".to_vec();
        let url = serve_once(response).await;

        let text = fetch_text(&local_client(), &url, "rainfall sheet")
            .await
            .unwrap();

        assert_eq!(text, "DateR,Mm\n19/01/2024,1.1\n");
    }

    #[test]
    fn should_strip_byte_order_mark() {
        let body = "\u{feff}DateR,Mm\n".as_bytes().to_vec();

        assert_eq!(decode(body).unwrap(), "DateR,Mm\n");
    }

    #[test]
    fn should_keep_plain_text() {
        let body = b"DateR,Mm\n05/01/2024,3.2\n".to_vec();

        assert_eq!(decode(body).unwrap(), "DateR,Mm\n05/01/2024,3.2\n");
    }

    #[test]
    fn should_reject_invalid_utf8() {
        assert!(decode(vec![0xff, 0xfe, 0x00]).is_err());
    }
}
