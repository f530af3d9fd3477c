//! Serde glue for secret request fields.
//!
//! Secrets are stored as [`SecretString`] so they stay out of `Debug` output,
//! but the gateway still needs them in plain text on the wire.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serializer};

#[allow(
    clippy::ref_option,
    reason = "signature is dictated by serde's serialize_with"
)]
pub(crate) fn serialize<S: Serializer>(
    value: &Option<SecretString>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(secret) => serializer.serialize_str(secret.expose_secret()),
        None => serializer.serialize_none(),
    }
}

pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<SecretString>, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.map(SecretString::from))
}
