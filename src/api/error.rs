use thiserror::Error;

/// Failures raised by the resolver, route table and session before or around a request.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unknown route: '{0}'")]
    UnknownRoute(String),

    #[error("Route '{route}' does not accept parameter '{key}'")]
    UnexpectedParam { route: &'static str, key: String },

    #[error("Route '{route}' requires path parameter '{name}'")]
    MissingPathParam { route: &'static str, name: String },

    #[error("Route '{route}' requires secret header '{header}' but none is configured")]
    MissingSecret { route: &'static str, header: &'static str },

    #[error("Unrecognized region code: '{0}'")]
    UnknownRegion(String),

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Route '{route}' takes either a raw body or form fields, not both")]
    BodyConflict { route: &'static str },

    #[error("Login failed: {0}")]
    LoginFailed(String),

    #[error("Activation code expired; request a new one")]
    ActivationExpired,

    #[error("Activation code was not entered within {0} seconds")]
    ActivationTimedOut(u64),

    #[error("Failed to switch to profile '{0}'")]
    ProfileSwitchFailed(String),
}
