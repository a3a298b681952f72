//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn data() -> PathBuf {
        "data.json".into()
    }

    pub fn output() -> PathBuf {
        "_includes".into()
    }

    pub fn files() -> PathBuf {
        ".".into()
    }

    pub fn indent() -> usize {
        2
    }
}
