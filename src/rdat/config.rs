//! Validation configuration for runtime data loading
//!
//! The decoder never reads outside of the container, regardless of these settings. What they
//! control is how much of the producer's structural contract is checked up front when the
//! container is loaded, versus being discovered lazily when a view touches a bad reference.

/// Configuration for the checks performed when a container is loaded.
///
/// # Examples
///
/// ```rust
/// use rdatscope::ValidationConfig;
///
/// let config = ValidationConfig::strict();
/// assert!(config.reject_unknown_tables);
///
/// let permissive = ValidationConfig::disabled();
/// assert!(!permissive.enable_partition_validation);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ValidationConfig {
    /// Require whole records in the resource and function tables, whole words in the index
    /// table, and a nul-terminated string table
    pub enable_structural_validation: bool,

    /// Require resource records of known classes to be grouped in CBuffer, Sampler, SRV, UAV
    /// order
    pub enable_partition_validation: bool,

    /// Fail on table tags outside of the known set, instead of skipping them
    pub reject_unknown_tables: bool,

    /// Fail when a table kind is declared twice, instead of letting the later one win
    pub reject_duplicate_tables: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enable_structural_validation: true,
            enable_partition_validation: true,
            reject_unknown_tables: false,
            reject_duplicate_tables: false,
        }
    }
}

impl ValidationConfig {
    /// Skip all up-front checks. Bad references still fail when they are resolved.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enable_structural_validation: false,
            enable_partition_validation: false,
            reject_unknown_tables: false,
            reject_duplicate_tables: false,
        }
    }

    /// Every check enabled, including rejecting unknown and duplicate tables
    #[must_use]
    pub fn strict() -> Self {
        Self {
            enable_structural_validation: true,
            enable_partition_validation: true,
            reject_unknown_tables: true,
            reject_duplicate_tables: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets() {
        let default = ValidationConfig::default();
        assert!(default.enable_structural_validation);
        assert!(default.enable_partition_validation);
        assert!(!default.reject_unknown_tables);
        assert!(!default.reject_duplicate_tables);

        let disabled = ValidationConfig::disabled();
        assert!(!disabled.enable_structural_validation);
        assert!(!disabled.enable_partition_validation);
        assert!(!disabled.reject_unknown_tables);
        assert!(!disabled.reject_duplicate_tables);

        let strict = ValidationConfig::strict();
        assert!(strict.enable_structural_validation);
        assert!(strict.enable_partition_validation);
        assert!(strict.reject_unknown_tables);
        assert!(strict.reject_duplicate_tables);
    }
}
