//! Coupon code cipher and lookup hashing.
//!
//! Codes are stored encrypted with AES-256-GCM (fresh 96-bit nonce per
//! encryption, base64 of nonce followed by ciphertext) next to a
//! deterministic HMAC-SHA256 lookup hash. Validation and redemption query
//! the indexed hash column; plaintext codes never reach the database.

use aes_gcm::{
    aead::{Aead, AeadCore, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use cinema_core::config::coupon::CouponConfig;
use cinema_core::{AppError, AppResult};

type HmacSha256 = Hmac<Sha256>;

const NONCE_LEN: usize = 12;

/// Encrypts coupon codes and derives their lookup hashes.
///
/// Both keys are derived from the single configured secret with
/// domain-separated SHA-256, so rotating the secret rotates everything.
#[derive(Clone)]
pub struct CouponCipher {
    cipher: Aes256Gcm,
    lookup_mac: HmacSha256,
}

impl std::fmt::Debug for CouponCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CouponCipher").finish_non_exhaustive()
    }
}

impl CouponCipher {
    /// Build the cipher from the configured secret.
    ///
    /// The secret must be at least 16 characters.
    pub fn new(config: &CouponConfig) -> AppResult<Self> {
        if config.secret.len() < 16 {
            return Err(AppError::configuration(
                "Coupon secret must be at least 16 characters",
            ));
        }

        let encryption_key = derive_key("pulse-cinema:coupon-encrypt", &config.secret);
        let lookup_key = derive_key("pulse-cinema:coupon-lookup", &config.secret);

        let cipher = Aes256Gcm::new_from_slice(&encryption_key).map_err(|e| {
            AppError::configuration(format!("Failed to initialize coupon cipher: {e}"))
        })?;
        let lookup_mac = <HmacSha256 as Mac>::new_from_slice(&lookup_key).map_err(|e| {
            AppError::configuration(format!("Failed to initialize coupon lookup hash: {e}"))
        })?;

        Ok(Self { cipher, lookup_mac })
    }

    /// Encrypt a plaintext code. Every call produces a different ciphertext.
    pub fn encrypt(&self, code: &str) -> AppResult<String> {
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let ciphertext = self
            .cipher
            .encrypt(&nonce, code.as_bytes())
            .map_err(|e| AppError::internal(format!("Coupon encryption failed: {e}")))?;

        let mut combined = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        combined.extend_from_slice(&nonce);
        combined.extend_from_slice(&ciphertext);
        Ok(BASE64.encode(combined))
    }

    /// Decrypt a stored ciphertext back to the plaintext code.
    pub fn decrypt(&self, encoded: &str) -> AppResult<String> {
        let combined = BASE64
            .decode(encoded)
            .map_err(|e| AppError::internal(format!("Corrupt coupon ciphertext: {e}")))?;
        if combined.len() <= NONCE_LEN {
            return Err(AppError::internal("Corrupt coupon ciphertext"));
        }

        let (nonce_bytes, ciphertext) = combined.split_at(NONCE_LEN);
        let nonce = Nonce::clone_from_slice(nonce_bytes);
        let plaintext = self
            .cipher
            .decrypt(&nonce, ciphertext)
            .map_err(|e| AppError::internal(format!("Coupon decryption failed: {e}")))?;

        String::from_utf8(plaintext)
            .map_err(|e| AppError::internal(format!("Coupon plaintext is not UTF-8: {e}")))
    }

    /// Deterministic lookup hash for a code.
    ///
    /// Input is trimmed and uppercased first, so lookups are
    /// case-insensitive.
    pub fn lookup_hash(&self, code: &str) -> String {
        let mut mac = self.lookup_mac.clone();
        mac.update(code.trim().to_uppercase().as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

fn derive_key(label: &str, secret: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(label.as_bytes());
    hasher.update(secret.as_bytes());
    hasher.finalize().into()
}
