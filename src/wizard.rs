//! Publish wizard steps
//!
//! The wizard walks the user through ten pages. Informational pages carry
//! no inputs; the five input pages are the ones that gate navigation and
//! count towards progress.
//!
//! # Step Flow
//!
//! ```text
//! Welcome -> Basics -> Category -> Location -> PhotosIntro -> Photos
//!         -> Details -> PricingIntro -> Price -> Preview
//! ```
//!
//! # Step Field Tables
//!
//! Each step has two field sets. The navigation gate ([`WizardStep::gate_fields`])
//! decides whether "next" is enabled; full validation
//! ([`WizardStep::validation_fields`]) is what the step reports when
//! validated explicitly. They are identical except for `Location`, whose
//! gate checks only the address text and lets the user move on before
//! dropping a pin on the map. Full validation of `Location` also requires
//! the coordinates.

use std::fmt;

use crate::error::PublishError;
use crate::types::Field;

/// A page of the publish wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum WizardStep {
    /// Introduction to publishing a venue
    Welcome = 1,
    /// Overview of what the wizard will ask for
    Basics = 2,
    /// Venue category selection
    Category = 3,
    /// Address and map location
    Location = 4,
    /// Introduction to the photo section
    PhotosIntro = 5,
    /// Photo upload
    Photos = 6,
    /// Name, description, capacity and features
    Details = 7,
    /// Introduction to pricing
    PricingIntro = 8,
    /// Hourly price
    Price = 9,
    /// Final review before publishing
    Preview = 10,
}

const LOCATION_GATE: &[Field] = &[Field::Country, Field::City, Field::District, Field::Street];

const LOCATION_FULL: &[Field] = &[
    Field::Country,
    Field::City,
    Field::District,
    Field::Street,
    Field::Latitude,
    Field::Longitude,
];

const DETAILS: &[Field] = &[
    Field::LocalName,
    Field::DescriptionMessage,
    Field::Capacity,
    Field::Features,
];

impl WizardStep {
    /// Total number of steps.
    pub const TOTAL_STEPS: usize = 10;

    /// Steps that count towards progress, in wizard order.
    pub const TRACKABLE: [WizardStep; 5] = [
        Self::Category,
        Self::Location,
        Self::Photos,
        Self::Details,
        Self::Price,
    ];

    /// Every step in wizard order.
    pub const ALL: [WizardStep; 10] = [
        Self::Welcome,
        Self::Basics,
        Self::Category,
        Self::Location,
        Self::PhotosIntro,
        Self::Photos,
        Self::Details,
        Self::PricingIntro,
        Self::Price,
        Self::Preview,
    ];

    /// The 1-based step number shown to users.
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Look up a step by its number.
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Welcome),
            2 => Some(Self::Basics),
            3 => Some(Self::Category),
            4 => Some(Self::Location),
            5 => Some(Self::PhotosIntro),
            6 => Some(Self::Photos),
            7 => Some(Self::Details),
            8 => Some(Self::PricingIntro),
            9 => Some(Self::Price),
            10 => Some(Self::Preview),
            _ => None,
        }
    }

    /// The next step, or `None` on the preview.
    pub const fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    /// The previous step, or `None` on the welcome page.
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Welcome => None,
            _ => Self::from_number(self.number() - 1),
        }
    }

    /// Get the display title for this step.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Welcome => "Publica tu local",
            Self::Basics => "Empecemos",
            Self::Category => "Tipo de local",
            Self::Location => "Ubicacion",
            Self::PhotosIntro => "Haz que destaque",
            Self::Photos => "Fotos",
            Self::Details => "Detalles",
            Self::PricingIntro => "Termina y publica",
            Self::Price => "Precio por hora",
            Self::Preview => "Vista previa",
        }
    }

    /// Fields checked by the navigation gate.
    pub const fn gate_fields(self) -> &'static [Field] {
        match self {
            Self::Category => &[Field::LocalCategoryId],
            Self::Location => LOCATION_GATE,
            Self::Photos => &[Field::PhotoUrls],
            Self::Details => DETAILS,
            Self::Price => &[Field::Price],
            Self::Welcome | Self::Basics | Self::PhotosIntro | Self::PricingIntro | Self::Preview => {
                &[]
            }
        }
    }

    /// Fields checked by full step validation.
    pub const fn validation_fields(self) -> &'static [Field] {
        match self {
            Self::Location => LOCATION_FULL,
            _ => self.gate_fields(),
        }
    }

    /// Whether the step counts towards progress.
    pub const fn is_trackable(self) -> bool {
        !self.gate_fields().is_empty()
    }
}

impl From<WizardStep> for u8 {
    fn from(step: WizardStep) -> Self {
        step.number()
    }
}

impl TryFrom<u8> for WizardStep {
    type Error = PublishError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::from_number(number).ok_or(PublishError::UnknownStep(number))
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.title())
    }
}

/// Gate field set for a raw step number; empty when the number is unknown.
pub fn gate_fields_for(step: u8) -> &'static [Field] {
    WizardStep::from_number(step)
        .map(WizardStep::gate_fields)
        .unwrap_or_default()
}

/// Full-validation field set for a raw step number; empty when unknown.
pub fn validation_fields_for(step: u8) -> &'static [Field] {
    WizardStep::from_number(step)
        .map(WizardStep::validation_fields)
        .unwrap_or_default()
}
