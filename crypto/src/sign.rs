//! Ed25519 message signing and verification.

use cachet_types::{PrivateKey, PublicKey, Signature};
use ed25519_dalek::{Signer, SigningKey, Verifier, VerifyingKey};

use crate::error::CryptoError;

/// Sign a message with a private key.
///
/// Signer failures surface as an error; a garbage or blank signature is
/// never returned.
pub fn sign_message(message: &[u8], private_key: &PrivateKey) -> Result<Signature, CryptoError> {
    let signing_key = SigningKey::from_bytes(&private_key.0);
    let sig = signing_key
        .try_sign(message)
        .map_err(|e| CryptoError::SigningFailure(e.to_string()))?;
    Ok(Signature(sig.to_bytes()))
}

/// Verify a signature against a message and public key.
///
/// Returns `true` if the signature is valid, `false` otherwise. A malformed
/// public key verifies nothing.
pub fn verify_signature(message: &[u8], signature: &Signature, public_key: &PublicKey) -> bool {
    let Ok(verifying_key) = VerifyingKey::from_bytes(&public_key.0) else {
        return false;
    };
    let dalek_sig = ed25519_dalek::Signature::from_bytes(&signature.0);
    verifying_key.verify(message, &dalek_sig).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{generate_keypair, keypair_from_seed};

    #[test]
    fn sign_and_verify() {
        let kp = generate_keypair();
        let msg = b"ab12:7:3601000";
        let sig = sign_message(msg, &kp.private).unwrap();
        assert!(verify_signature(msg, &sig, &kp.public));
    }

    #[test]
    fn tampered_message_fails() {
        let kp = generate_keypair();
        let sig = sign_message(b"ab12:7:3601000", &kp.private).unwrap();
        assert!(!verify_signature(b"ab12:8:3601000", &sig, &kp.public));
    }

    #[test]
    fn wrong_key_fails() {
        let kp1 = generate_keypair();
        let kp2 = generate_keypair();
        let msg = b"proof";
        let sig = sign_message(msg, &kp1.private).unwrap();
        assert!(!verify_signature(msg, &sig, &kp2.public));
    }

    #[test]
    fn signature_deterministic() {
        let kp = keypair_from_seed(&[99u8; 32]);
        let msg = b"same message, same signature";
        let sig1 = sign_message(msg, &kp.private).unwrap();
        let sig2 = sign_message(msg, &kp.private).unwrap();
        assert_eq!(sig1.0, sig2.0);
    }

    #[test]
    fn signature_is_never_blank() {
        let kp = keypair_from_seed(&[3u8; 32]);
        let sig = sign_message(b"", &kp.private).unwrap();
        assert!(!sig.is_zero());
        assert!(verify_signature(b"", &sig, &kp.public));
    }

    #[test]
    fn malformed_public_key_rejected() {
        let kp = generate_keypair();
        let sig = sign_message(b"proof", &kp.private).unwrap();
        let bad_key = PublicKey([0xFF; 32]);
        assert!(!verify_signature(b"proof", &sig, &bad_key));
    }
}
