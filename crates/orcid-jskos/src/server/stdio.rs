//! Stdio transport.
//!
//! One JSON object of query parameters per input line, one JSON array of concepts per
//! output line.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::models::ConceptQuery;
use crate::service::OrcidService;

/// Answer queries from stdin on stdout until EOF.
pub async fn run_stdio(service: OrcidService) -> anyhow::Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    tracing::info!("Stdio mode ready, waiting for queries...");
    serve_lines(&service, stdin, stdout).await
}

/// Answer line-delimited queries from `reader` on `writer`.
pub async fn serve_lines<R, W>(
    service: &OrcidService,
    mut reader: R,
    mut writer: W,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;

        if bytes_read == 0 {
            tracing::info!("Input closed, shutting down");
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let output = match serde_json::from_str::<ConceptQuery>(trimmed) {
            Ok(query) => {
                tracing::debug!(?query, "Received query");
                serde_json::to_string(&service.query(&query).await.concepts)?
            }
            Err(e) => serde_json::json!({"error": format!("Parse error: {e}")}).to_string(),
        };

        writer.write_all(output.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }

    Ok(())
}
