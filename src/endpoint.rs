//! Cloud API endpoint constants

/// Hostname of the Acquia Cloud API
pub const CLOUD_API_HOST: &str = "cloudapi.acquia.com";

/// Current version of the Cloud API
pub const CLOUD_API_VERSION: &str = "v1";

/// The base URI of the Acquia Cloud API.
pub fn cloud_api_uri() -> String {
    format!("https://{CLOUD_API_HOST}")
}

/// The Cloud API endpoint as a full URI, version included.
pub fn cloud_api_endpoint() -> String {
    format!("{}/{}/", cloud_api_uri(), CLOUD_API_VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_contains_uri_and_version() {
        let endpoint = cloud_api_endpoint();
        assert!(endpoint.starts_with(&cloud_api_uri()));
        assert!(endpoint.contains(CLOUD_API_VERSION));
        assert!(endpoint.ends_with('/'));
    }

    #[test]
    fn uri_is_https() {
        assert!(cloud_api_uri().starts_with("https://"));
    }
}
