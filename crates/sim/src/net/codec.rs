use std::io::{Read, Write};

use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;

use crate::physics::{PendulumState, STATE_BYTES};

/// Upper bound on a compressed frame. A peer declaring more than this on
/// the wire is sending garbage and gets discarded before any payload read.
pub const MAX_FRAME_SIZE: usize = 128;

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("compression failed: {0}")]
    Compress(#[source] std::io::Error),
    #[error("frame does not decompress to a valid state")]
    Corrupt,
}

/// Compresses a state into a frame body (the length prefix is added by the
/// transport). 16 bytes of input always fit `MAX_FRAME_SIZE` compressed.
pub fn encode(state: &PendulumState) -> Result<Vec<u8>, CodecError> {
    let mut encoder = ZlibEncoder::new(Vec::with_capacity(MAX_FRAME_SIZE), Compression::default());
    encoder
        .write_all(&state.to_bytes())
        .map_err(CodecError::Compress)?;
    let frame = encoder.finish().map_err(CodecError::Compress)?;
    debug_assert!(frame.len() <= MAX_FRAME_SIZE);
    Ok(frame)
}

/// Decompresses a frame body back into a state. Anything that is not a
/// zlib stream inflating to exactly [`STATE_BYTES`] bytes is rejected as
/// corrupt; arbitrary input never panics and never over-reads.
pub fn decode(frame: &[u8]) -> Result<PendulumState, CodecError> {
    let mut decoder = ZlibDecoder::new(frame);

    let mut bytes = [0u8; STATE_BYTES];
    decoder
        .read_exact(&mut bytes)
        .map_err(|_| CodecError::Corrupt)?;

    // The stream must end exactly at STATE_BYTES.
    let mut overflow = [0u8; 1];
    match decoder.read(&mut overflow) {
        Ok(0) => Ok(PendulumState::from_bytes(&bytes)),
        _ => Err(CodecError::Corrupt),
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;

    fn round_trip(state: PendulumState) {
        let frame = encode(&state).unwrap();
        assert!(frame.len() <= MAX_FRAME_SIZE);

        let decoded = decode(&frame).unwrap();
        assert_eq!(decoded.theta1.to_bits(), state.theta1.to_bits());
        assert_eq!(decoded.omega1.to_bits(), state.omega1.to_bits());
        assert_eq!(decoded.theta2.to_bits(), state.theta2.to_bits());
        assert_eq!(decoded.omega2.to_bits(), state.omega2.to_bits());
    }

    #[test]
    fn round_trip_is_bit_exact() {
        round_trip(PendulumState::new(0.0, 0.0, 0.0, 0.0));
        round_trip(PendulumState::inverted());
        round_trip(PendulumState::new(-PI, -12.75, 7.0 * PI, 1e-4));
        // Angles accumulate without wrapping, so large magnitudes are normal
        // after a long run.
        round_trip(PendulumState::new(4096.5, -300.0, -8192.25, 250.0));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(decode(b"not a zlib stream"), Err(CodecError::Corrupt)));
        assert!(matches!(decode(&[]), Err(CodecError::Corrupt)));
        assert!(matches!(decode(&[0x78]), Err(CodecError::Corrupt)));
    }

    #[test]
    fn truncated_frame_is_rejected() {
        let frame = encode(&PendulumState::inverted()).unwrap();
        assert!(matches!(
            decode(&frame[..frame.len() - 3]),
            Err(CodecError::Corrupt)
        ));
    }

    #[test]
    fn corrupted_byte_is_rejected() {
        let mut frame = encode(&PendulumState::inverted()).unwrap();
        let mid = frame.len() / 2;
        frame[mid] ^= 0xFF;
        assert!(decode(&frame).is_err());
    }

    #[test]
    fn wrong_decompressed_size_is_rejected() {
        // A valid zlib stream of the wrong inner length must not pass.
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&[0u8; STATE_BYTES + 4]).unwrap();
        let frame = encoder.finish().unwrap();
        assert!(matches!(decode(&frame), Err(CodecError::Corrupt)));

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&[0u8; STATE_BYTES - 4]).unwrap();
        let frame = encoder.finish().unwrap();
        assert!(matches!(decode(&frame), Err(CodecError::Corrupt)));
    }
}
