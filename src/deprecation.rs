//! Runtime deprecation notices for legacy API surfaces.

/// Logs a warning naming a deprecated method and its replacement.
pub fn warn_deprecated_method(deprecated_method: &str, preferred_method: &str) {
    tracing::warn!(
        "{} is deprecated, use {} instead",
        deprecated_method,
        preferred_method
    );
}
