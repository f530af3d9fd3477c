//! Fills unset token fields from the client configuration.

use secrecy::{ExposeSecret, SecretString};

use crate::{config::ClientConfig, model::PaymentToken};

/// Copies configured defaults into fields the caller left unset.
///
/// Only `webhookUrl`, `gatewayUsername` and `gatewayPassword` take defaults,
/// each independently. A value already on the token always wins.
#[must_use]
pub fn apply_config_defaults(mut token: PaymentToken, config: &ClientConfig) -> PaymentToken {
    if token.webhook_url.is_none()
        && let Some(url) = config.webhook_url()
    {
        token.webhook_url = Some(url.to_owned());
    }

    if token.gateway_username.is_none()
        && let Some(username) = config.gateway_username()
    {
        token.gateway_username = Some(username.to_owned());
    }

    if token.gateway_password.is_none()
        && let Some(password) = config.gateway_password()
    {
        token.gateway_password = Some(SecretString::from(password.expose_secret()));
    }

    token
}
