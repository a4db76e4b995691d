use crate::error::RollcallError;
use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use url::{Origin, Url};

/// Cross-origin configuration. Exactly one browser origin is allowed.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Front-end origin allowed to call the API.
    /// TOML: `cors.allowed_origin`. Default: `http://localhost:3000`.
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: Url,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: default_allowed_origin(),
        }
    }
}

impl CorsConfig {
    /// Serialized origin (`scheme://host[:port]`, no trailing slash) as sent by browsers.
    pub fn origin_header(&self) -> Result<HeaderValue, RollcallError> {
        let origin = self.allowed_origin.origin();
        if !matches!(origin, Origin::Tuple(..)) {
            return Err(RollcallError::InvalidConfig(format!(
                "cors.allowed_origin has no usable origin: {}",
                self.allowed_origin
            )));
        }
        HeaderValue::from_str(&origin.ascii_serialization()).map_err(|e| {
            RollcallError::InvalidConfig(format!("cors.allowed_origin is not a valid header: {e}"))
        })
    }
}

fn default_allowed_origin() -> Url {
    Url::parse("http://localhost:3000").expect("default origin is a valid url")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_header_strips_path() {
        let cfg = CorsConfig {
            allowed_origin: Url::parse("http://localhost:3000/app/").unwrap(),
        };
        assert_eq!(cfg.origin_header().unwrap(), "http://localhost:3000");
    }

    #[test]
    fn opaque_origin_is_rejected() {
        let cfg = CorsConfig {
            allowed_origin: Url::parse("data:text/plain,hello").unwrap(),
        };
        assert!(cfg.origin_header().is_err());
    }
}
