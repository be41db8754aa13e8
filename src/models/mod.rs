//! Domain records shared by the pricing, comparison and analysis engines.

/// Declares a closed catalog enum serialized as a kebab-case key.
///
/// Every catalog gets an explicit `Other` variant which is also the default,
/// and any key that is not recognized deserializes to `Other` instead of failing.
macro_rules! catalog_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => ($key:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            #[default]
            Other,
        }

        impl $name {
            /// All variants in declaration order, `Other` last.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+ $name::Other];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                    $name::Other => "other",
                }
            }

            /// Human readable label.
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                    $name::Other => "Other",
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                // "living-room", "livingRoom" and "Living Room" name the same key
                let normalize = |s: &str| {
                    s.chars()
                        .filter(|c| c.is_ascii_alphanumeric())
                        .map(|c| c.to_ascii_lowercase())
                        .collect::<String>()
                };
                let key = normalize(value);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|variant| normalize(variant.as_str()) == key)
                    .unwrap_or_default()
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::from(value.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub mod comparison;
pub mod floorplan;
pub mod project;
pub mod quotation;
pub mod requirement;
pub mod style_report;

pub use comparison::{
    Analysis, CategoryComparison, CategoryValue, Comparison, CostComparison, CostFeature,
    PriceLevel, PriceSummary, QuotationAnalysis,
};
pub use floorplan::{FloorplanAnalysis, LayoutIssue, RoomAnalysis, RoomKind};
pub use project::{Project, ProjectWithRequirements};
pub use quotation::{Detail, ItemizedCosts, Quotation};
pub use requirement::{
    BasicInfo, BudgetRange, ColorPreference, DoorWindowMaterial, FloorMaterial,
    FunctionalRequirements, KitchenBathroomMaterial, LightingPreference, MaterialChoices,
    Requirement, RoomType, SpecialRequirements, StorageNeeds, Style, StylePreferences,
    WallMaterial,
};
pub use style_report::{AnalysisSource, StyleReport, StyleScore, TopStyle};
