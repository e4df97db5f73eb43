pub mod protocol;

pub use protocol::{LeafRecord, OutputBuffer, ProtocolLayout};
