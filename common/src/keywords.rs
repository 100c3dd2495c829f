//! Seed values shown before the user has configured anything.

/// Keyword picker entries for the INPUT screen.
pub const KUSHTI_KEYWORDS: &[&str] = &[
    "Maharashtra Kesari",
    "Hind Kesari",
    "Bharat Kesari",
    "Kushti Dangal",
    "Lal Mati Kushti",
    "Akhada Training",
    "Pehelwan Diet",
    "Mat Wrestling",
    "Kolhapur Kushti",
    "Gada Competition",
];

/// Footer text appended to captions until the user writes their own.
pub const DEFAULT_FOOTER: &str =
    "🙏 Follow for more Kushti action!\n📍 Support Indian wrestling and our pehelwans.";

/// Hashtags stored in fresh settings.
pub const DEFAULT_HASHTAGS: &[&str] = &["#Kushti", "#MaharashtraKesari", "#IndianWrestling"];
