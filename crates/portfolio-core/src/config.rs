use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("section list is empty")]
    NoSections,
    #[error("header offset must be a finite, non-negative number (got {0})")]
    InvalidHeaderOffset(f64),
    #[error("unknown site variant {0:?}")]
    UnknownVariant(String),
}

/// Which of the two site assemblies is mounted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SiteVariant {
    Original,
    #[default]
    Creative,
}

impl SiteVariant {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "original" => Ok(Self::Original),
            "creative" => Ok(Self::Creative),
            other => Err(ConfigError::UnknownVariant(other.to_string())),
        }
    }

    pub fn features(self) -> VariantFeatures {
        match self {
            Self::Original => VariantFeatures {
                scroll_spy: false,
                particles: false,
                progress_bar: false,
                floating_geometry: false,
                theme_toggle: false,
            },
            Self::Creative => VariantFeatures {
                scroll_spy: true,
                particles: true,
                progress_bar: true,
                floating_geometry: true,
                theme_toggle: true,
            },
        }
    }
}

/// Decorative and navigation behaviours a variant switches on.
/// Smooth-scroll nav and the contact form are always present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariantFeatures {
    pub scroll_spy: bool,
    pub particles: bool,
    pub progress_bar: bool,
    pub floating_geometry: bool,
    pub theme_toggle: bool,
}

/// Identifiers handed to the message-delivery service with every request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeliveryConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub recipient_name: String,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            endpoint: EMAILJS_ENDPOINT.to_string(),
            service_id: EMAILJS_SERVICE_ID.to_string(),
            template_id: EMAILJS_TEMPLATE_ID.to_string(),
            public_key: EMAILJS_PUBLIC_KEY.to_string(),
            recipient_name: RECIPIENT_NAME.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SiteConfig {
    pub variant: SiteVariant,
    pub sections: &'static [&'static str],
    pub header_offset: f64,
    /// Hero particle count; `None` leaves the field at its default size.
    pub particle_count: Option<usize>,
    pub delivery: DeliveryConfig,
}

impl SiteConfig {
    pub fn for_variant(variant: SiteVariant) -> Self {
        let particle_count = variant.features().particles.then_some(HERO_PARTICLE_COUNT);
        Self {
            variant,
            sections: &SECTION_IDS,
            header_offset: HEADER_OFFSET_PX,
            particle_count,
            delivery: DeliveryConfig::default(),
        }
    }

    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = Some(count);
        self
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::for_variant(SiteVariant::default())
    }
}
