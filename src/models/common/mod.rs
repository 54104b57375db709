pub mod timestamp;

pub use timestamp::OffsetTimestamp;
