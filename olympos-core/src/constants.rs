//! Fixed literals shared by the pipeline stages

/// Sentence delimiter used both for splitting and for re-joining
pub const SENTENCE_DELIMITER: char = '.';

/// Separator inserted between two fragments when the left one does not
/// already end with the delimiter
pub const JOIN_SEPARATOR: &str = ". ";

/// Topic keyword, matched case-insensitively ("Olympus", "Olympian", "Olympos", ...)
pub const TOPIC_KEYWORD: &str = "olymp";

/// Archaic past-tense contraction: RIGHT SINGLE QUOTATION MARK followed by `d`
pub const ARCHAIC_CONTRACTION: &str = "\u{2019}d";

/// Modern spelling substituted for [`ARCHAIC_CONTRACTION`]
pub const MODERN_SUFFIX: &str = "ed";

/// Platform line ending replaced by a single space during cleaning
pub const CRLF: &str = "\r\n";

/// Pattern of bracketed numeric footnote references such as `[12]`
pub const CITATION_MARKER_PATTERN: &str = r"\[\d+\]";

/// Project Gutenberg plain-text edition of the Iliad
pub const DEFAULT_SOURCE_URL: &str = "https://www.gutenberg.org/cache/epub/16452/pg16452.txt";
