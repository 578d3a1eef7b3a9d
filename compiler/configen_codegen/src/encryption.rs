//! Field encryption.
//!
//! One variable tagged `EncryptionKey` supplies the key. The IV is not random:
//! it is derived from a hash of the whole value source, so regenerating from
//! unchanged input produces byte-identical output. The IV is published to the
//! generated code as an extra `ByteArray` variable named `<key field>IV`.
//!
//! Setup is a two-phase pipeline. [`EncryptionSetup::resolve`] reads the
//! inputs and computes the synthetic IV variable without touching them;
//! [`EncryptionSetup::merge`] then builds the spec list and value source the
//! renderer consumes.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::{Aes128, Aes192, Aes256};
use configen_ir::{Mapping, TypeTag, Value, ValueSource, VariableSpec};
use sha2::{Digest, Sha256};

use crate::GenerateError;

/// IV length in bytes (the AES block size).
pub const IV_LENGTH: usize = 16;

/// Suffix appended to the key field's name for the synthetic IV variable.
pub const IV_FIELD_SUFFIX: &str = "IV";

/// Key material and IV for one generation pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncryptionConfig {
    /// UTF-8 bytes of the key field's value.
    pub key: Vec<u8>,
    /// `IV_LENGTH` ASCII hex characters; their bytes are the cipher IV.
    pub iv: String,
    /// Name of the `EncryptionKey` variable.
    pub field_name: String,
}

impl EncryptionConfig {
    pub fn iv_field_name(&self) -> String {
        format!("{}{IV_FIELD_SUFFIX}", self.field_name)
    }

    /// AES-CBC encrypt with PKCS#7 padding. Key length picks AES-128/192/256.
    pub fn encrypt(&self, name: &str, plaintext: &[u8]) -> Result<Vec<u8>, GenerateError> {
        let key = self.key.as_slice();
        let iv = self.iv.as_bytes();
        let ciphertext = match key.len() {
            16 => cbc::Encryptor::<Aes128>::new_from_slices(key, iv)
                .map(|cipher| cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext)),
            24 => cbc::Encryptor::<Aes192>::new_from_slices(key, iv)
                .map(|cipher| cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext)),
            32 => cbc::Encryptor::<Aes256>::new_from_slices(key, iv)
                .map(|cipher| cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext)),
            n => return Err(bad_key_length(name, n)),
        };
        ciphertext.map_err(|err| GenerateError::EncryptionFailure {
            name: name.to_string(),
            reason: err.to_string(),
        })
    }

    /// Inverse of [`encrypt`](Self::encrypt).
    pub fn decrypt(&self, name: &str, ciphertext: &[u8]) -> Result<Vec<u8>, GenerateError> {
        let key = self.key.as_slice();
        let iv = self.iv.as_bytes();
        let failure = |reason: String| GenerateError::EncryptionFailure {
            name: name.to_string(),
            reason,
        };
        let plaintext = match key.len() {
            16 => cbc::Decryptor::<Aes128>::new_from_slices(key, iv)
                .map_err(|err| failure(err.to_string()))?
                .decrypt_padded_vec_mut::<Pkcs7>(ciphertext),
            24 => cbc::Decryptor::<Aes192>::new_from_slices(key, iv)
                .map_err(|err| failure(err.to_string()))?
                .decrypt_padded_vec_mut::<Pkcs7>(ciphertext),
            32 => cbc::Decryptor::<Aes256>::new_from_slices(key, iv)
                .map_err(|err| failure(err.to_string()))?
                .decrypt_padded_vec_mut::<Pkcs7>(ciphertext),
            n => return Err(bad_key_length(name, n)),
        };
        plaintext.map_err(|err| failure(err.to_string()))
    }
}

fn bad_key_length(name: &str, len: usize) -> GenerateError {
    GenerateError::EncryptionFailure {
        name: name.to_string(),
        reason: format!("key must be 16, 24 or 32 bytes, found {len}"),
    }
}

/// Result of resolving encryption settings for a pass.
#[derive(Clone, Debug, PartialEq)]
pub struct EncryptionSetup {
    config: Option<EncryptionConfig>,
    /// Why `config` is absent, reported when an `Encrypted` field needs it.
    unavailable: String,
}

impl EncryptionSetup {
    /// A setup with no key; every `Encrypted` field fails.
    pub fn disabled() -> Self {
        Self {
            config: None,
            unavailable: "Encrypted value with no key set, declare an EncryptionKey field"
                .to_string(),
        }
    }

    /// Find the key field and derive the IV from the current value source.
    ///
    /// Only the first `EncryptionKey` variable is used. A key field without a
    /// string value disables encryption here; the field itself is reported
    /// when it is rendered.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn resolve(mapping: &Mapping, values: &ValueSource) -> Result<Self, GenerateError> {
        let Some(key_spec) = mapping.first_of_type(&TypeTag::EncryptionKey) else {
            return Ok(Self::disabled());
        };
        for extra in mapping
            .iter()
            .filter(|spec| spec.type_tag == TypeTag::EncryptionKey && spec.name != key_spec.name)
        {
            tracing::warn!(
                field = %extra.name,
                used = %key_spec.name,
                "only one EncryptionKey field is supported, ignoring"
            );
        }
        let Some(key) = values.get(&key_spec.name).and_then(Value::as_str) else {
            tracing::debug!(field = %key_spec.name, "encryption key has no string value");
            return Ok(Self {
                config: None,
                unavailable: format!(
                    "Encrypted value with no key set, `{}` has no string value",
                    key_spec.name
                ),
            });
        };

        let iv = derive_iv(values).map_err(|reason| GenerateError::EncryptionFailure {
            name: key_spec.name.clone(),
            reason: format!("unable to create initialization vector: {reason}"),
        })?;
        tracing::debug!(field = %key_spec.name, "derived initialization vector");

        Ok(Self {
            config: Some(EncryptionConfig {
                key: key.as_bytes().to_vec(),
                iv,
                field_name: key_spec.name.clone(),
            }),
            unavailable: String::new(),
        })
    }

    pub fn config(&self) -> Option<&EncryptionConfig> {
        self.config.as_ref()
    }

    /// Build the spec list and value source the renderer consumes.
    ///
    /// The synthetic IV variable is appended after the declared ones. If the
    /// mapping already declares that name, it is retyped in place.
    pub fn merge(&self, mapping: &Mapping, values: &ValueSource) -> (Mapping, ValueSource) {
        let mut mapping = mapping.clone();
        let mut values = values.clone();
        let Some(config) = &self.config else {
            return (mapping, values);
        };

        let iv_name = config.iv_field_name();
        let existing = mapping.iter().position(|spec| spec.name == iv_name);
        let iv_spec = VariableSpec::new(iv_name.clone(), TypeTag::ByteArray);
        mapping = match existing {
            Some(position) => mapping
                .iter()
                .enumerate()
                .map(|(i, spec)| if i == position { iv_spec.clone() } else { spec.clone() })
                .collect(),
            None => {
                mapping.push(iv_spec);
                mapping
            }
        };
        values.insert(iv_name, Value::String(config.iv.clone()));
        (mapping, values)
    }

    /// Encrypt an `Encrypted` variable's value.
    pub fn encrypt_field(&self, name: &str, value: &Value) -> Result<Vec<u8>, GenerateError> {
        let Some(config) = &self.config else {
            return Err(GenerateError::EncryptionMisconfigured {
                name: name.to_string(),
                reason: self.unavailable.clone(),
            });
        };
        let Some(plaintext) = value.as_str() else {
            return Err(GenerateError::type_mismatch(name, "string", value));
        };
        config.encrypt(name, plaintext.as_bytes())
    }
}

/// Derive the IV from the value source content.
///
/// SHA-256 over compact JSON of the source with keys sorted at every level,
/// hex encoded, first [`IV_LENGTH`] characters. Insertion order does not
/// matter; any change to a key or value changes the result.
pub fn derive_iv(values: &ValueSource) -> Result<String, serde_json::Error> {
    let canonical = serde_json::to_vec(&values.canonical())?;
    let digest = Sha256::digest(&canonical);
    let mut iv = hex::encode(digest);
    iv.truncate(IV_LENGTH);
    Ok(iv)
}
