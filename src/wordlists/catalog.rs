//! Static catalog of word-search themes

/// A themed word list for one word-search puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub words: &'static [&'static str],
}

/// All built-in themes; sized for a 9x9 grid
pub const THEMES: &[Theme] = &[
    Theme {
        id: 1,
        name: "Types of Trees",
        description: "Find words related to different tree species",
        words: &["OAK", "MAPLE", "PINE", "BIRCH", "CEDAR", "WILLOW", "PALM", "SPRUCE", "REDWOOD"],
    },
    Theme {
        id: 2,
        name: "Weather Phenomena",
        description: "Discover different weather conditions and events",
        words: &[
            "RAIN", "SNOW", "HAIL", "FROST", "SLEET", "THUNDER", "MIST", "STORM", "BREEZE",
            "TORNADO",
        ],
    },
    Theme {
        id: 3,
        name: "Celestial Bodies",
        description: "Identify objects found in space",
        words: &[
            "STAR", "MOON", "PLANET", "COMET", "GALAXY", "NEBULA", "METEOR", "ASTEROID",
            "SATELLITE",
        ],
    },
    Theme {
        id: 4,
        name: "Kitchen Utensils",
        description: "Find tools used for cooking and food preparation",
        words: &[
            "SPOON", "KNIFE", "WHISK", "LADLE", "GRATER", "TONGS", "SPATULA", "PEELER", "STRAINER",
        ],
    },
    Theme {
        id: 5,
        name: "Music Genres",
        description: "Discover different styles of music",
        words: &[
            "JAZZ", "ROCK", "BLUES", "METAL", "TECHNO", "FOLK", "COUNTRY", "REGGAE", "CLASSICAL",
            "HIPHOP",
        ],
    },
    Theme {
        id: 6,
        name: "Gemstones",
        description: "Find precious and semi-precious stones",
        words: &[
            "RUBY", "AMBER", "OPAL", "DIAMOND", "EMERALD", "SAPPHIRE", "TOPAZ", "GARNET", "JADE",
            "PEARL",
        ],
    },
    Theme {
        id: 7,
        name: "Sports Equipment",
        description: "Identify gear used in various sports",
        words: &[
            "BALL", "RACKET", "HELMET", "GLOVE", "SKATES", "PADDLE", "NET", "GOAL", "BAT", "CLUB",
        ],
    },
    Theme {
        id: 8,
        name: "Ocean Creatures",
        description: "Find animals that live in the sea",
        words: &[
            "SHARK", "WHALE", "CRAB", "SEAL", "DOLPHIN", "OCTOPUS", "TURTLE", "LOBSTER",
            "JELLYFISH",
        ],
    },
    Theme {
        id: 9,
        name: "Fruits",
        description: "Discover different types of fruit",
        words: &[
            "APPLE", "BANANA", "ORANGE", "GRAPE", "MANGO", "MELON", "KIWI", "PEACH", "PLUM",
            "CHERRY",
        ],
    },
    Theme {
        id: 10,
        name: "Computer Terms",
        description: "Identify technology and computing concepts",
        words: &[
            "MOUSE", "PIXEL", "DISK", "MEMORY", "ROUTER", "SERVER", "BROWSER", "KEYBOARD",
            "MONITOR", "CODE",
        ],
    },
];

/// Look up a theme by its id
#[must_use]
pub fn theme_by_id(id: u32) -> Option<&'static Theme> {
    THEMES.iter().find(|t| t.id == id)
}
