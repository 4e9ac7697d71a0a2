use anyhow::Result;
use regex::Regex;

/// Curated author names of the knowledge domain. Informational for now:
/// reserved for cross-checking extracted name candidates, never gating a
/// sub-score directly.
const KNOWN_AUTHORS: &[&str] = &[
    "سيف الرحبي",
    "هدى حمد",
    "عبدالله الريامي",
    "سعيد الصقلاوي",
    "محمد الحارثي",
    "جوخة الحارثي",
    "بدرية الشحي",
    "سالم الراشدي",
    "أحمد بلال",
    "يحيى منصور",
    "حسين العبري",
    "فاطمة الشيدي",
];

/// Textual shapes of implausibly precise claims: an exact birth year stated
/// as certain, an exact works count, a named prize with a year, precise
/// study-and-graduation details.
const SUSPICIOUS_PATTERNS: &[&str] = &[
    r"وُلد في عام \d{4} تحديداً",
    r"يبلغ عدد أعماله \d+ عملاً بالضبط",
    r"حاز على جائزة .+ في عام \d{4}",
    r"درس في جامعة .+ وتخرج عام \d{4}",
];

/// Hedging phrases; their presence is a positive signal of epistemic
/// honesty. The generic stem `لا أملك معلومات` covers the several cautious
/// completions the assistant actually produces.
const UNCERTAINTY_PHRASES: &[&str] = &[
    "يُذكر أن",
    "من المحتمل",
    "يبدو أن",
    "وفقاً للمصادر",
    "حسب علمي",
    "في ضوء المتاح",
    "لا أملك معلومات دقيقة",
    "لا أملك معلومات",
];

/// Quoted spans that look like a specific work title, with or without a
/// preceding genre word. Titles are quoted both with straight quotes and
/// with «…» in the corpus.
const TITLE_PATTERNS: &[&str] = &[
    r#""[^"]{5,30}""#,
    r"«[^»]{5,30}»",
    r#"ديوان "[^"]+?""#,
    r#"رواية "[^"]+?""#,
    r#"كتاب "[^"]+?""#,
    r#"مجموعة "[^"]+?""#,
];

const DATE_PATTERN: &str = r"عام \d{4}|سنة \d{4}|\d{4}م|\d{4}هـ";

const WORK_COUNT_PATTERN: &str = r"\d+ (كتاباً|مؤلفاً|عملاً|ديواناً|رواية)";

/// Immutable reference tables backing the verifier. Compiled once at
/// construction; a compile failure here is a fatal startup error for the
/// hosting service, never a per-request concern.
pub struct Lexicon {
    known_authors: Vec<&'static str>,
    suspicious_patterns: Vec<Regex>,
    uncertainty_phrases: Vec<&'static str>,
    title_patterns: Vec<Regex>,
    date_pattern: Regex,
    work_count_pattern: Regex,
}

impl Lexicon {
    /// The Omani-literature tables the assistant ships with.
    pub fn omani_literature() -> Result<Self> {
        Self::new(
            KNOWN_AUTHORS,
            SUSPICIOUS_PATTERNS,
            UNCERTAINTY_PHRASES,
            TITLE_PATTERNS,
            DATE_PATTERN,
            WORK_COUNT_PATTERN,
        )
    }

    pub fn new(
        known_authors: &[&'static str],
        suspicious_patterns: &[&str],
        uncertainty_phrases: &[&'static str],
        title_patterns: &[&str],
        date_pattern: &str,
        work_count_pattern: &str,
    ) -> Result<Self> {
        Ok(Self {
            known_authors: known_authors.to_vec(),
            suspicious_patterns: compile_all(suspicious_patterns)?,
            uncertainty_phrases: uncertainty_phrases.to_vec(),
            title_patterns: compile_all(title_patterns)?,
            date_pattern: Regex::new(date_pattern)?,
            work_count_pattern: Regex::new(work_count_pattern)?,
        })
    }

    pub fn known_authors(&self) -> &[&'static str] {
        &self.known_authors
    }

    pub fn suspicious_patterns(&self) -> &[Regex] {
        &self.suspicious_patterns
    }

    pub fn uncertainty_phrases(&self) -> &[&'static str] {
        &self.uncertainty_phrases
    }

    pub fn title_patterns(&self) -> &[Regex] {
        &self.title_patterns
    }

    pub fn date_pattern(&self) -> &Regex {
        &self.date_pattern
    }

    pub fn work_count_pattern(&self) -> &Regex {
        &self.work_count_pattern
    }

    /// Total occurrences of hedging phrases in `text`.
    pub fn count_uncertainty_phrases(&self, text: &str) -> usize {
        self.uncertainty_phrases
            .iter()
            .map(|phrase| text.matches(phrase).count())
            .sum()
    }

    pub fn has_uncertainty_phrase(&self, text: &str) -> bool {
        self.uncertainty_phrases
            .iter()
            .any(|phrase| text.contains(phrase))
    }
}

fn compile_all(patterns: &[&str]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| Regex::new(pattern).map_err(anyhow::Error::from))
        .collect()
}
