//! Default configurations and presets for jsondiff-tools.
//!
//! Provides named presets for common use cases.

use super::types::{AppConfig, BehaviorConfig, FilterConfig, MatchingConfig, OutputConfig};
use crate::reports::ReportFormat;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Balanced settings suitable for most comparisons
    Default,
    /// Only pair near-identical array elements
    Strict,
    /// Pair loosely related array elements
    Lenient,
    /// Machine-readable output and failure exit codes
    CiCd,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Strict => "strict",
            Self::Lenient => "lenient",
            Self::CiCd => "ci-cd",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" | "balanced" => Some(Self::Default),
            "strict" | "exact" => Some(Self::Strict),
            "lenient" | "permissive" | "loose" => Some(Self::Lenient),
            "ci-cd" | "ci" | "pipeline" => Some(Self::CiCd),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Balanced settings suitable for most JSON comparisons",
            Self::Strict => "Near-identical array elements only; other items are missing/extra",
            Self::Lenient => "Pairs loosely related array elements and reports their changes",
            Self::CiCd => "JSON output that fails the pipeline on critical differences",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Strict, Self::Lenient, Self::CiCd]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Strict => Self::strict_preset(),
            ConfigPreset::Lenient => Self::lenient_preset(),
            ConfigPreset::CiCd => Self::ci_cd_preset(),
        }
    }

    /// Strict preset.
    #[must_use]
    pub fn strict_preset() -> Self {
        Self {
            matching: MatchingConfig {
                preset: "strict".to_string(),
                ..MatchingConfig::default()
            },
            ..Self::default()
        }
    }

    /// Lenient preset.
    #[must_use]
    pub fn lenient_preset() -> Self {
        Self {
            matching: MatchingConfig {
                preset: "lenient".to_string(),
                ..MatchingConfig::default()
            },
            ..Self::default()
        }
    }

    /// CI/CD pipeline preset.
    ///
    /// - JSON output for machine parsing
    /// - Fail on critical differences
    /// - Quiet mode to reduce noise
    /// - Depth-guarded comparison
    #[must_use]
    pub fn ci_cd_preset() -> Self {
        Self {
            matching: MatchingConfig {
                max_depth: Some(DEFAULT_CI_MAX_DEPTH),
                ..MatchingConfig::default()
            },
            output: OutputConfig {
                format: ReportFormat::Json,
                file: None,
                no_color: true,
                pretty: false,
            },
            filtering: FilterConfig::default(),
            behavior: BehaviorConfig {
                fail_on_change: false,
                fail_on_critical: true,
                quiet: true,
            },
        }
    }
}

// ============================================================================
// Default Value Constants
// ============================================================================

/// Nesting limit applied by the CI/CD preset.
pub const DEFAULT_CI_MAX_DEPTH: usize = 256;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_names() {
        assert_eq!(ConfigPreset::Default.name(), "default");
        assert_eq!(ConfigPreset::CiCd.name(), "ci-cd");
        assert_eq!(ConfigPreset::CiCd.to_string(), "ci-cd");
    }

    #[test]
    fn test_preset_from_name() {
        assert_eq!(ConfigPreset::from_name("balanced"), Some(ConfigPreset::Default));
        assert_eq!(ConfigPreset::from_name("Strict"), Some(ConfigPreset::Strict));
        assert_eq!(ConfigPreset::from_name("permissive"), Some(ConfigPreset::Lenient));
        assert_eq!(ConfigPreset::from_name("pipeline"), Some(ConfigPreset::CiCd));
        assert_eq!(ConfigPreset::from_name("invalid"), None);
    }

    #[test]
    fn test_ci_cd_preset() {
        let config = AppConfig::ci_cd_preset();
        assert!(config.behavior.fail_on_critical);
        assert!(config.behavior.quiet);
        assert!(config.output.no_color);
        assert_eq!(config.output.format, ReportFormat::Json);
        assert_eq!(config.matching.max_depth, Some(DEFAULT_CI_MAX_DEPTH));
    }

    #[test]
    fn test_matching_presets() {
        assert_eq!(AppConfig::from_preset(ConfigPreset::Default).matching.preset, "balanced");
        assert_eq!(AppConfig::from_preset(ConfigPreset::Strict).matching.preset, "strict");
        assert_eq!(AppConfig::from_preset(ConfigPreset::Lenient).matching.preset, "lenient");
    }

    #[test]
    fn test_all_presets() {
        assert_eq!(ConfigPreset::all().len(), 4);
        assert!(ConfigPreset::all().iter().all(|p| !p.description().is_empty()));
    }
}
