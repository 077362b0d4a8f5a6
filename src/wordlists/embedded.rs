//! Embedded word lists
//!
//! Compiled into the binary so the game is playable without a word list file.

/// Used whenever a loaded word list yields no usable five-letter words
pub const FALLBACK_WORDS: &[&str] = &["APPLE", "BEACH", "CHART", "DREAM", "EAGLE"];

/// Built-in Wordle answers (200 words)
pub const ANSWERS: &[&str] = &[
    "ABOUT", "ABOVE", "ACTOR", "ADOPT", "AGENT", "ALARM", "ALBUM", "ALERT", "ALLOW", "ALONE",
    "APPLE", "ARENA", "ARGUE", "AWARD", "BEACH", "BEGIN", "BENCH", "BIRTH", "BLADE", "BLAME",
    "BLANK", "BLOOM", "BOARD", "BRAIN", "BRAVE", "BREAD", "BRICK", "BRUSH", "BUILD", "CABIN",
    "CANDY", "CHAIR", "CHALK", "CHART", "CHASE", "CHEAP", "CHEST", "CLIMB", "CLOCK", "CLOUD",
    "COAST", "CRANE", "CRASH", "CREAM", "DANCE", "DELAY", "DEPTH", "DIRTY", "DOUBT", "DRAFT",
    "DRAMA", "DREAM", "DRINK", "DRIVE", "EAGLE", "EARTH", "EMPTY", "ENJOY", "ENTRY", "EQUAL",
    "EVENT", "EXTRA", "FAITH", "FALSE", "FAULT", "FEAST", "FIELD", "FLAME", "FLOOR", "FLUTE",
    "FOCUS", "FORCE", "FRAME", "FRESH", "FRUIT", "GHOST", "GIANT", "GLASS", "GLOVE", "GRACE",
    "GRAIN", "GRAPE", "GRASS", "GREEN", "GUARD", "GUEST", "HABIT", "HAPPY", "HEART", "HONEY",
    "HORSE", "HOTEL", "HOUSE", "HUMAN", "IDEAL", "IMAGE", "INDEX", "IVORY", "JELLY", "JUDGE",
    "JUICE", "KNIFE", "LABEL", "LASER", "LAUGH", "LEARN", "LEMON", "LEVEL", "LIGHT", "LLAMA",
    "LOGIC", "LUNCH", "MAGIC", "MANGO", "MARCH", "MATCH", "MEDAL", "METAL", "MONEY", "MOUSE",
    "MUSIC", "NERVE", "NIGHT", "NOBLE", "NOISE", "NORTH", "NOVEL", "OCEAN", "OLIVE", "ORBIT",
    "OTHER", "PAINT", "PANEL", "PAPER", "PARTY", "PEACE", "PEARL", "PHONE", "PIANO", "PILOT",
    "PIXEL", "PLACE", "PLANT", "PLATE", "POINT", "POWER", "PRIDE", "PRIZE", "QUEEN", "QUIET",
    "RADIO", "RAISE", "REACT", "RIVER", "ROBOT", "ROUND", "ROYAL", "SALAD", "SCALE", "SCENE",
    "SHARK", "SHEEP", "SHINE", "SLATE", "SMILE", "SNAKE", "SOLID", "SOUND", "SPACE", "SPARK",
    "SPEED", "SPOON", "STAGE", "STONE", "STORM", "STYLE", "SUGAR", "SWEET", "TABLE", "TEACH",
    "THEME", "TIGER", "TOAST", "TORCH", "TOWER", "TRACE", "TRAIN", "TRUST", "UNCLE", "UNITY",
    "VALUE", "VIDEO", "VOICE", "WATER", "WHALE", "WHEAT", "WORLD", "WRITE", "YOUTH", "ZEBRA",
];
