mod sentinel;

pub use sentinel::SentinelCodec;
