//! Feature Layout - Centralized Feature Definition
//!
//! Single source of truth for the order of the five business metrics.
//! The scaler, the forest, importance reporting and the peer comparison
//! all index features through this layout. Changing the order here
//! changes the meaning of every trained model.

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Feature names in the exact order they appear in the vector
pub const FEATURE_LAYOUT: &[&str] = &[
    "funding",     // 0: Total funding raised (USD)
    "team_size",   // 1: Head count
    "market_size", // 2: Total addressable market (USD)
    "revenue",     // 3: Monthly revenue (USD)
    "growth_rate", // 4: Month-over-month growth (%)
];

/// Total number of features
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 5;

/// Human-readable names, same order as FEATURE_LAYOUT
pub const FEATURE_DISPLAY_NAMES: &[&str] = &[
    "Funding",
    "Team Size",
    "Market Size",
    "Monthly Revenue",
    "Growth Rate",
];

// ============================================================================
// FEATURE INDEX LOOKUP
// ============================================================================

/// Get feature index by name (O(n) but features are few)
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

/// Get feature name by index
pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_LAYOUT.get(index).copied()
}

/// Get human-readable feature name by index
pub fn feature_display_name(index: usize) -> Option<&'static str> {
    FEATURE_DISPLAY_NAMES.get(index).copied()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_count() {
        assert_eq!(FEATURE_COUNT, 5);
        assert_eq!(FEATURE_LAYOUT.len(), FEATURE_COUNT);
        assert_eq!(FEATURE_DISPLAY_NAMES.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_feature_index() {
        assert_eq!(feature_index("funding"), Some(0));
        assert_eq!(feature_index("market_size"), Some(2));
        assert_eq!(feature_index("growth_rate"), Some(4));
        assert_eq!(feature_index("nonexistent"), None);
    }

    #[test]
    fn test_feature_name() {
        assert_eq!(feature_name(0), Some("funding"));
        assert_eq!(feature_name(4), Some("growth_rate"));
        assert_eq!(feature_name(100), None);
    }

    #[test]
    fn test_display_names_align() {
        assert_eq!(feature_display_name(3), Some("Monthly Revenue"));
    }
}
