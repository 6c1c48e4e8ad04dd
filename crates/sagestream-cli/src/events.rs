use anyhow::{Context, Result};
use futures::Stream;
use sagestream_llm::ChunkEvent;
use std::pin::Pin;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

pub type EventStream = Pin<Box<dyn Stream<Item = Result<ChunkEvent>> + Send>>;

/// Open the event log at `path`, or stdin when `None`
pub async fn open_source(path: Option<&str>) -> Result<Box<dyn AsyncRead + Unpin + Send>> {
    match path {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("Failed to open event log {}", path))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(tokio::io::stdin())),
    }
}

/// Read chunk events from a JSON-lines event log.
///
/// Each non-blank line holds one event as recorded from the endpoint, e.g.
/// `{"PayloadPart": {"Bytes": "..."}}`. Lines that are not JSON end the
/// stream with an error.
pub fn read_events<R>(reader: R) -> EventStream
where
    R: AsyncRead + Unpin + Send + 'static,
{
    Box::pin(async_stream::stream! {
        let mut lines = BufReader::new(reader).lines();
        let mut line_number = 0usize;

        loop {
            line_number += 1;
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    yield Err(anyhow::Error::new(e).context("Failed to read event log"));
                    break;
                }
            };

            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<ChunkEvent>(&line) {
                Ok(event) => yield Ok(event),
                Err(e) => {
                    yield Err(anyhow::anyhow!("Invalid event at line {}: {}", line_number, e));
                    break;
                }
            }
        }
    })
}
