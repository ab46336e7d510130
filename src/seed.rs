use tracing::debug;
use zeroize::Zeroizing;

use crate::error::Error;

// Seed bytes are wiped on drop
pub fn decode_seed(seed_hex: &str) -> Result<Zeroizing<Vec<u8>>, Error> {
    let bytes = Zeroizing::new(hex::decode(seed_hex)?);
    debug!("decoded {} seed bytes", bytes.len());
    Ok(bytes)
}
