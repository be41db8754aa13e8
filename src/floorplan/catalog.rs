use crate::models::RoomKind;

pub struct RoomGuide {
    pub name: &'static str,
    pub tips: [&'static str; 4],
}

pub struct IssueGuide {
    pub key: &'static str,
    pub name: &'static str,
    pub tips: [&'static str; 4],
}

pub fn room_guide(kind: RoomKind) -> &'static RoomGuide {
    match kind {
        RoomKind::LivingRoom => &LIVING_ROOM,
        RoomKind::Bedroom => &BEDROOM,
        RoomKind::Kitchen => &KITCHEN,
        RoomKind::Bathroom => &BATHROOM,
        RoomKind::DiningRoom => &DINING_ROOM,
        RoomKind::StudyRoom => &STUDY_ROOM,
        RoomKind::Other => &OTHER_ROOM,
    }
}

static LIVING_ROOM: RoomGuide = RoomGuide {
    name: "Living room",
    tips: [
        "The living room is the center of family life, keep it open and airy",
        "Face the sofa area toward the TV or a feature wall to form a conversation zone",
        "Make sure the room gets enough natural light",
        "Do not let furniture block the circulation routes",
    ],
};

static BEDROOM: RoomGuide = RoomGuide {
    name: "Bedroom",
    tips: [
        "Avoid placing the headboard directly facing the door",
        "Leave walking space on both sides of the bed",
        "Wardrobe doors should open without obstruction",
        "Use curtains to control light and protect sleep quality",
    ],
};

static KITCHEN: RoomGuide = RoomGuide {
    name: "Kitchen",
    tips: [
        "Follow the work triangle between fridge, sink and stove",
        "Provide enough worktop space",
        "Check the position and extraction of the range hood",
        "Use the full wall height for storage",
    ],
};

static BATHROOM: RoomGuide = RoomGuide {
    name: "Bathroom",
    tips: [
        "Separate the wet and dry zones",
        "Ensure good ventilation to prevent damp",
        "Arrange toilet, basin and shower or bath sensibly",
        "Consider adding storage space",
    ],
};

static DINING_ROOM: RoomGuide = RoomGuide {
    name: "Dining room",
    tips: [
        "Keep the table a convenient distance from the kitchen",
        "Give every seat enough room to move",
        "Consider a sideboard for extra storage",
        "Light the table brightly without glare",
    ],
};

static STUDY_ROOM: RoomGuide = RoomGuide {
    name: "Study room",
    tips: [
        "Give the desk plenty of daylight while avoiding glare",
        "Keep bookshelves at a reachable height",
        "Plan power outlets around the electronic devices",
        "Consider sound insulation for a quiet workspace",
    ],
};

static OTHER_ROOM: RoomGuide = RoomGuide {
    name: "Other",
    tips: [
        "Define the room's function before choosing furniture",
        "Keep circulation paths clear",
        "Make use of natural light where possible",
        "Plan storage to match how the space will be used",
    ],
};

pub static LAYOUT_ISSUES: [IssueGuide; 5] = [
    IssueGuide {
        key: "narrowEntrance",
        name: "Narrow entrance",
        tips: [
            "Use mirrors to visually enlarge the space",
            "Keep entrance furniture minimal",
            "Use bright lighting",
            "Choose light wall colors",
        ],
    },
    IssueGuide {
        key: "poorLighting",
        name: "Poor lighting",
        tips: [
            "Use light finishes to brighten the space",
            "Add mirrors to reflect daylight",
            "Choose sheer curtains",
            "Add layered artificial lighting",
        ],
    },
    IssueGuide {
        key: "awkwardLayout",
        name: "Irregular layout",
        tips: [
            "Zone the space with furniture",
            "Turn irregular corners into storage",
            "Use one floor material throughout for continuity",
            "Consider custom furniture for irregular areas",
        ],
    },
    IssueGuide {
        key: "limitedSpace",
        name: "Limited space",
        tips: [
            "Choose furniture of appropriate scale",
            "Multifunctional furniture saves space",
            "Make use of walls and high storage",
            "Open-plan design increases the sense of space",
        ],
    },
    IssueGuide {
        key: "poorVentilation",
        name: "Poor ventilation",
        tips: [
            "Consider an extractor fan or fresh-air system",
            "Reposition windows or switch to opening windows",
            "Indoor plants can improve air quality",
            "Remove partitions that block airflow",
        ],
    },
];

pub const GENERAL_RECOMMENDATIONS: [&str; 4] = [
    "Plan circulation so movement through the home flows smoothly",
    "Assign room functions according to orientation",
    "Make full use of natural light",
    "Leave flexible space for future changes in lifestyle",
];
