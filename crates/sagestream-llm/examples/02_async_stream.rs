use anyhow::Result;
use futures::stream;
use sagestream_llm::{line_stream, ChunkEvent, EventPrinter};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<()> {
    let events = vec![
        ChunkEvent::from_value(json!({"PayloadPart": {"Bytes": "{\"choices\":[{\"delta\":"}})),
        ChunkEvent::from_value(json!({"PayloadPart": {"Bytes": "{\"content\":\"Hi\"},\"index\":1}]}\n"}})),
        // Not a payload event: logged and skipped
        ChunkEvent::from_value(json!({"InternalStreamFailure": {"Message": "retrying"}})),
        ChunkEvent::from_value(json!({"PayloadPart": {"Bytes": "{\"choices\":[{\"delta\":{\"content\":\"</s>\"},\"index\":2}]}\n"}})),
    ];

    let mut printer = EventPrinter::stdout();
    let summary = printer
        .print_line_stream(line_stream(stream::iter(events)))
        .await?;

    println!("\nSummary: {}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
