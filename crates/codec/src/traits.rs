use crate::error::CodecError;

/// Core trait for sequence codecs.
///
/// `encode` takes ASCII nucleotide bytes and returns the packed binary form;
/// `decode` reverses it and yields uppercase ASCII bytes.
pub trait Codec {
    fn encode(&self, seq: &[u8]) -> Result<Vec<u8>, CodecError>;
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>, CodecError>;
}
