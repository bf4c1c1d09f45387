//! Request signing for private endpoints.
//!
//! `signature = hex(HMAC-SHA256(secret, query))`, where `query` is the
//! exact string sent on the wire (including `recvWindow` and `timestamp`).

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::ProtocolError;

type HmacSha256 = Hmac<Sha256>;

pub fn sign(secret: &str, query: &str) -> Result<String, ProtocolError> {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| ProtocolError::InvalidKey)?;
    mac.update(query.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Worked example from the exchange's API documentation.
    #[test]
    fn matches_published_example() {
        let secret = "NhqPtmdSJYdKjVHjA7PZj4Mge3R5YNiP1e3UZjInClVN65XAbvqqM6A7H5fATj0j";
        let query = "symbol=LTCBTC&side=BUY&type=LIMIT&timeInForce=GTC&quantity=1&price=0.1&recvWindow=5000&timestamp=1499827319559";
        assert_eq!(
            sign(secret, query).unwrap(),
            "c8db56825ae71d6d79447849e617115f4a920fa2acdcab2b053c4b2838bd6b71"
        );
    }

    #[test]
    fn empty_secret_still_signs() {
        let sig = sign("", "timestamp=1").unwrap();
        assert_eq!(sig.len(), 64);
    }
}
