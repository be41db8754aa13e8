use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

catalog_enum! {
    /// Decor style of the renovation.
    pub enum Style {
        ModernMinimalist => ("modern-minimalist", "Modern minimalist"),
        Nordic => ("nordic", "Nordic"),
        ChineseTraditional => ("chinese-traditional", "Chinese traditional"),
        American => ("american", "American"),
        Industrial => ("industrial", "Industrial"),
    }
}

impl Style {
    /// Styles that can be recommended, in declaration order.
    pub const NAMED: [Style; 5] = [
        Style::ModernMinimalist,
        Style::Nordic,
        Style::ChineseTraditional,
        Style::American,
        Style::Industrial,
    ];
}

catalog_enum! {
    pub enum RoomType {
        LivingRoom => ("living-room", "Living room"),
        Bedroom => ("bedroom", "Bedroom"),
        Kitchen => ("kitchen", "Kitchen"),
        Bathroom => ("bathroom", "Bathroom"),
        DiningRoom => ("dining-room", "Dining room"),
        StudyRoom => ("study-room", "Study room"),
        WholeHouse => ("whole-house", "Whole house"),
    }
}

catalog_enum! {
    pub enum ColorPreference {
        Cool => ("cool", "Cool tones"),
        Warm => ("warm", "Warm tones"),
        Neutral => ("neutral", "Neutral tones"),
    }
}

catalog_enum! {
    pub enum FloorMaterial {
        WoodFloor => ("wood-floor", "Wood flooring"),
        CeramicTile => ("ceramic-tile", "Ceramic tile"),
        Marble => ("marble", "Marble"),
    }
}

catalog_enum! {
    pub enum WallMaterial {
        LatexPaint => ("latex-paint", "Latex paint"),
        Wallpaper => ("wallpaper", "Wallpaper"),
        DiatomMud => ("diatom-mud", "Diatom mud"),
    }
}

catalog_enum! {
    pub enum KitchenBathroomMaterial {
        StandardCounter => ("standard-counter", "Standard countertop"),
        QuartzCounter => ("quartz-counter", "Quartz countertop"),
        MarbleCounter => ("marble-counter", "Marble countertop"),
    }
}

catalog_enum! {
    pub enum DoorWindowMaterial {
        SolidWoodDoor => ("solid-wood-door", "Solid wood door"),
        CompositeDoor => ("composite-door", "Composite door"),
        AluminumAlloy => ("aluminum-alloy", "Aluminum alloy doors and windows"),
    }
}

catalog_enum! {
    pub enum StorageNeeds {
        High => ("high", "High"),
        Medium => ("medium", "Medium"),
        Low => ("low", "Low"),
    }
}

catalog_enum! {
    pub enum LightingPreference {
        Natural => ("natural", "Natural light"),
        Artificial => ("artificial", "Artificial light"),
        Mixed => ("mixed", "Mixed"),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfo {
    /// Floor area in square meters
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub room_type: Option<RoomType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_range: Option<BudgetRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_completion_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylePreferences {
    #[serde(default)]
    pub style: Option<Style>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_preference: Option<ColorPreference>,
    #[serde(default)]
    pub reference_images: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialChoices {
    #[serde(default)]
    pub floor_material: Option<FloorMaterial>,
    #[serde(default)]
    pub wall_material: Option<WallMaterial>,
    #[serde(default)]
    pub kitchen_bathroom_material: Option<KitchenBathroomMaterial>,
    #[serde(default)]
    pub door_window_material: Option<DoorWindowMaterial>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionalRequirements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_needs: Option<StorageNeeds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lighting_preference: Option<LightingPreference>,
    #[serde(default)]
    pub smart_home_needs: Vec<String>,
    #[serde(default)]
    pub special_functional_areas: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialRequirements {
    #[serde(default)]
    pub elderly_child_friendly: bool,
    #[serde(default)]
    pub pet_friendly: bool,
    #[serde(default)]
    pub eco_friendly: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_special_requirements: Option<String>,
}

/// Structured description of a renovation project's scope and preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirement {
    #[serde(rename = "_id")]
    pub id: String,
    pub project_id: String,
    #[serde(default)]
    pub basic_info: BasicInfo,
    #[serde(default)]
    pub style_preferences: StylePreferences,
    #[serde(default)]
    pub material_choices: MaterialChoices,
    #[serde(default)]
    pub functional_requirements: FunctionalRequirements,
    #[serde(default)]
    pub special_requirements: SpecialRequirements,
    pub created_at: DateTime<Utc>,
}

impl Requirement {
    /// Build a requirement for `project_id` with a fresh id and timestamp.
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            id: format!("req_{}", uuid::Uuid::new_v4().simple()),
            project_id: project_id.into(),
            basic_info: BasicInfo::default(),
            style_preferences: StylePreferences::default(),
            material_choices: MaterialChoices::default(),
            functional_requirements: FunctionalRequirements::default(),
            special_requirements: SpecialRequirements::default(),
            created_at: Utc::now(),
        }
    }

    pub fn style(&self) -> Style {
        self.style_preferences.style.unwrap_or_default()
    }
}
