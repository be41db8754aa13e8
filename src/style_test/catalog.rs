//! Fixed questionnaire and style reference texts.

use serde::Serialize;

use crate::models::Style;

pub struct QuizOption {
    pub id: &'static str,
    pub text: &'static str,
    pub styles: &'static [Style],
}

pub struct QuizQuestion {
    pub id: &'static str,
    pub question: &'static str,
    pub options: [QuizOption; 4],
}

impl QuizQuestion {
    pub fn option(&self, option_id: &str) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.id == option_id)
    }
}

use Style::{American, ChineseTraditional, Industrial, ModernMinimalist, Nordic};

pub static QUESTIONS: [QuizQuestion; 5] = [
    QuizQuestion {
        id: "q1",
        question: "Which color family do you prefer?",
        options: [
            QuizOption { id: "a", text: "Bright and lively colors (red, orange, yellow)", styles: &[American, Industrial] },
            QuizOption { id: "b", text: "Soft natural colors (beige, brown, green)", styles: &[Nordic, ChineseTraditional] },
            QuizOption { id: "c", text: "Clean modern colors (white, grey, black)", styles: &[ModernMinimalist, Industrial] },
            QuizOption { id: "d", text: "Elegant luxurious colors (purple, gold, navy)", styles: &[American, ChineseTraditional] },
        ],
    },
    QuizQuestion {
        id: "q2",
        question: "Which furniture lines do you like?",
        options: [
            QuizOption { id: "a", text: "Simple straight lines", styles: &[ModernMinimalist, Nordic] },
            QuizOption { id: "b", text: "Natural organic shapes", styles: &[Nordic, ChineseTraditional] },
            QuizOption { id: "c", text: "Ornate vintage details", styles: &[American, ChineseTraditional] },
            QuizOption { id: "d", text: "Rugged industrial forms", styles: &[Industrial] },
        ],
    },
    QuizQuestion {
        id: "q3",
        question: "What is your ideal living space?",
        options: [
            QuizOption { id: "a", text: "Open and airy", styles: &[ModernMinimalist, Nordic] },
            QuizOption { id: "b", text: "Warm and cosy", styles: &[Nordic, American] },
            QuizOption { id: "c", text: "Classic and graceful", styles: &[ChineseTraditional, American] },
            QuizOption { id: "d", text: "Bold and expressive", styles: &[Industrial, ModernMinimalist] },
        ],
    },
    QuizQuestion {
        id: "q4",
        question: "Which materials matter most to you?",
        options: [
            QuizOption { id: "a", text: "Wood and fabric", styles: &[Nordic, American] },
            QuizOption { id: "b", text: "Metal and concrete", styles: &[Industrial, ModernMinimalist] },
            QuizOption { id: "c", text: "Marble and glass", styles: &[ModernMinimalist, American] },
            QuizOption { id: "d", text: "Bamboo, rattan and ceramics", styles: &[ChineseTraditional, Nordic] },
        ],
    },
    QuizQuestion {
        id: "q5",
        question: "Which decorative elements do you like?",
        options: [
            QuizOption { id: "a", text: "Geometric patterns", styles: &[ModernMinimalist, Industrial] },
            QuizOption { id: "b", text: "Natural motifs (plants, animals)", styles: &[Nordic, ChineseTraditional] },
            QuizOption { id: "c", text: "Retro and nostalgic pieces", styles: &[American, Industrial] },
            QuizOption { id: "d", text: "Traditional cultural elements", styles: &[ChineseTraditional] },
        ],
    },
];

pub fn question(question_id: &str) -> Option<&'static QuizQuestion> {
    QUESTIONS.iter().find(|q| q.id == question_id)
}

/// Question as shown to quiz takers, without the style tags.
#[derive(Debug, Clone, Serialize)]
pub struct PublicQuestion {
    pub id: &'static str,
    pub question: &'static str,
    pub options: Vec<PublicOption>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PublicOption {
    pub id: &'static str,
    pub text: &'static str,
}

pub fn public_questions() -> Vec<PublicQuestion> {
    QUESTIONS
        .iter()
        .map(|q| PublicQuestion {
            id: q.id,
            question: q.question,
            options: q
                .options
                .iter()
                .map(|o| PublicOption { id: o.id, text: o.text })
                .collect(),
        })
        .collect()
}

pub struct StyleProfile {
    pub description: &'static str,
    pub characteristics: [&'static str; 5],
    pub suitable_for: &'static str,
    pub recommendations: [&'static str; 5],
}

/// Reference texts of a style. `Other` borrows the modern minimalist profile.
pub fn profile(style: Style) -> &'static StyleProfile {
    match style {
        Style::Nordic => &NORDIC,
        Style::ChineseTraditional => &CHINESE_TRADITIONAL,
        Style::American => &AMERICAN,
        Style::Industrial => &INDUSTRIAL,
        Style::ModernMinimalist | Style::Other => &MODERN_MINIMALIST,
    }
}

static MODERN_MINIMALIST: StyleProfile = StyleProfile {
    description: "Simple and practical design with clean lines, mostly neutral colors and an emphasis on open, functional space.",
    characteristics: ["Clean straight lines", "Black, white and grey palette", "Open space", "Highly functional", "Little ornament"],
    suitable_for: "Young people and busy professionals who value a simple, practical lifestyle.",
    recommendations: [
        "Choose furniture with clean lines and avoid excessive decoration",
        "Build the palette around neutral black, white and grey",
        "Keep the space open and airy with few partitions",
        "Pick storage solutions with strong functionality",
        "Keep lighting simple and bright, avoiding elaborate fixtures",
    ],
};

static NORDIC: StyleProfile = StyleProfile {
    description: "Natural, comfortable and functional, with bright warm colors, plenty of wood and a simple yet cosy feel.",
    characteristics: ["Wooden elements", "Bright palette", "Comfortable and practical", "Natural materials", "Cosy atmosphere"],
    suitable_for: "Families who love nature and a comfortable home life.",
    recommendations: [
        "Use plenty of natural wood such as pine or white oak",
        "Choose comfortable, practical furniture",
        "Start from white and add bright blues and greens",
        "Bring in natural elements such as plants and raw wood",
        "Make the most of daylight and keep windows unobstructed",
    ],
};

static CHINESE_TRADITIONAL: StyleProfile = StyleProfile {
    description: "Blends traditional cultural elements with modern living, favoring symmetry and balance with rosewood and deep red tones.",
    characteristics: ["Traditional patterns", "Symmetrical layout", "Wooden furniture", "Cultural elements", "Sense of artistry"],
    suitable_for: "People who love traditional Chinese culture and seek restraint and harmony.",
    recommendations: [
        "Choose furniture in traditional woods such as rosewood or ebony",
        "Favor symmetrical layouts and balance",
        "Add traditional elements such as calligraphy and ink painting",
        "Consider traditional colors such as red and gold",
        "Pick lanterns or palace-style lamps for lighting",
    ],
};

static AMERICAN: StyleProfile = StyleProfile {
    description: "Comfortable and free-spirited, ranging from country to classic, with rich colors and abundant decoration.",
    characteristics: ["Comfortable and practical", "Rich colors", "Abundant decoration", "Mixed styles", "Relaxed and free"],
    suitable_for: "Outgoing families who like to express themselves freely.",
    recommendations: [
        "Choose large, comfortable sofas and armchairs",
        "Mix furniture and decor of different styles",
        "Layer soft furnishings such as cushions and rugs",
        "Use a rich and unconstrained color palette",
        "Consider wallpaper or wainscoting on feature walls",
    ],
};

static INDUSTRIAL: StyleProfile = StyleProfile {
    description: "Rooted in converted factories, keeping raw building elements such as exposed brick and pipes, mostly in grey and black.",
    characteristics: ["Exposed materials", "Rugged lines", "Metal elements", "Open space", "Vintage touches"],
    suitable_for: "Young people with a bold personality seeking a distinctive lifestyle.",
    recommendations: [
        "Keep or imitate exposed brick walls and pipework",
        "Choose metal furniture and light fittings",
        "Build on grey and black with bright accents",
        "Combine rough timber with metal in furniture",
        "Use industrial pendant or track lighting",
    ],
};
