pub mod chunk;
pub mod record;

pub use chunk::{ChunkEvent, PayloadPart, PAYLOAD_PART_KEY};
pub use record::{Choice, Delta, Record, STOP_TOKEN};
