//! Built-in English opinion lexicon.
//!
//! Each entry is `(word, polarity, subjectivity)` with polarity in -1.0..=1.0
//! and subjectivity in 0.0..=1.0.

pub(crate) const ENTRIES: &[(&str, f64, f64)] = &[
    // positive
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("excellent", 1.0, 1.0),
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("wonderful", 1.0, 1.0),
    ("fantastic", 0.4, 0.9),
    ("brilliant", 0.9, 1.0),
    ("perfect", 1.0, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("nice", 0.6, 1.0),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("lovely", 0.5, 0.75),
    ("like", 0.2, 0.4),
    ("enjoy", 0.4, 0.5),
    ("enjoyable", 0.5, 0.6),
    ("happy", 0.8, 1.0),
    ("glad", 0.5, 1.0),
    ("delighted", 0.7, 0.9),
    ("pleased", 0.5, 0.8),
    ("joy", 0.8, 0.9),
    ("joyful", 0.8, 0.9),
    ("fun", 0.3, 0.2),
    ("beautiful", 0.85, 1.0),
    ("clear", 0.1, 0.4),
    ("clean", 0.37, 0.69),
    ("simple", 0.0, 0.36),
    ("easy", 0.43, 0.83),
    ("helpful", 0.5, 0.5),
    ("useful", 0.3, 0.0),
    ("valuable", 0.6, 0.7),
    ("effective", 0.6, 0.8),
    ("efficient", 0.5, 0.6),
    ("powerful", 0.3, 1.0),
    ("impressive", 1.0, 1.0),
    ("interesting", 0.5, 0.5),
    ("exciting", 0.3, 0.8),
    ("excited", 0.375, 0.75),
    ("positive", 0.23, 0.55),
    ("successful", 0.75, 0.95),
    ("success", 0.3, 0.2),
    ("right", 0.29, 0.54),
    ("correct", 0.0, 0.0),
    ("important", 0.4, 1.0),
    ("strong", 0.43, 0.73),
    ("smooth", 0.4, 0.6),
    ("friendly", 0.375, 0.5),
    ("kind", 0.6, 0.9),
    ("thoughtful", 0.5, 0.6),
    ("creative", 0.5, 0.5),
    ("elegant", 0.4, 0.75),
    ("robust", 0.3, 0.5),
    ("reliable", 0.4, 0.6),
    ("confident", 0.5, 0.67),
    ("hopeful", 0.5, 0.8),
    ("grateful", 0.5, 0.8),
    ("thanks", 0.2, 0.2),
    ("thank", 0.2, 0.2),
    ("welcome", 0.8, 0.9),
    ("fine", 0.42, 0.5),
    ("well", 0.2, 0.3),
    ("recommended", 0.3, 0.4),
    ("more", 0.5, 0.5),
    ("new", 0.14, 0.45),
    ("free", 0.4, 0.8),
    ("fresh", 0.3, 0.5),
    ("inspiring", 0.6, 0.8),
    ("remarkable", 0.75, 0.75),
    ("outstanding", 0.5, 0.5),
    ("superb", 1.0, 1.0),
    ("pleasant", 0.73, 0.97),
    ("satisfying", 0.5, 0.6),
    ("calm", 0.3, 0.75),
    ("safe", 0.5, 0.5),
    // negative
    ("bad", -0.7, 0.67),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("poor", -0.4, 0.6),
    ("wrong", -0.5, 0.9),
    ("hate", -0.8, 0.9),
    ("hated", -0.9, 0.7),
    ("dislike", -0.3, 0.5),
    ("sad", -0.5, 1.0),
    ("unhappy", -0.6, 0.8),
    ("angry", -0.5, 1.0),
    ("annoying", -0.8, 0.9),
    ("boring", -1.0, 1.0),
    ("confusing", -0.3, 0.6),
    ("confused", -0.4, 0.7),
    ("difficult", -0.5, 1.0),
    ("hard", -0.29, 0.54),
    ("complicated", -0.5, 0.8),
    ("ugly", -0.7, 1.0),
    ("stupid", -0.8, 1.0),
    ("useless", -0.5, 0.2),
    ("broken", -0.4, 0.4),
    ("slow", -0.3, 0.4),
    ("weak", -0.375, 0.625),
    ("negative", -0.3, 0.4),
    ("problem", -0.2, 0.3),
    ("problematic", -0.4, 0.6),
    ("painful", -0.7, 0.9),
    ("frustrating", -0.4, 0.7),
    ("disappointing", -0.6, 0.7),
    ("disappointed", -0.75, 0.75),
    ("fail", -0.5, 0.3),
    ("failed", -0.5, 0.3),
    ("failure", -0.32, 0.3),
    ("dangerous", -0.6, 0.9),
    ("risky", -0.3, 0.6),
    ("unclear", -0.1, 0.5),
    ("messy", -0.4, 0.7),
    ("worried", -0.4, 0.8),
    ("afraid", -0.6, 0.9),
    ("sorry", -0.5, 1.0),
    ("unfortunately", -0.5, 1.0),
    ("unfortunate", -0.5, 1.0),
    ("impossible", -0.67, 1.0),
    ("mediocre", -0.3, 0.6),
    ("tedious", -0.5, 0.8),
];

/// Words that scale the next opinion word, with their multiplier.
pub(crate) const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.2),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("truly", 1.2),
    ("so", 1.3),
    ("too", 1.2),
    ("highly", 1.4),
    ("especially", 1.2),
    ("quite", 1.1),
    ("absolutely", 1.5),
    ("totally", 1.3),
    ("slightly", 0.6),
    ("somewhat", 0.7),
    ("barely", 0.5),
];

/// Words that flip the next opinion word. Any "-n't" contraction also negates.
pub(crate) const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "none", "nothing", "nobody", "without", "hardly",
    "cannot",
];
