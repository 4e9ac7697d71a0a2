use anyhow::Result;

use crate::lexicon::Lexicon;
use crate::models::{ConfidenceLevel, VerificationResult};
use crate::tokenize::{word_set, ArabicNameExtractor, NameExtractor};

const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.8;
const RELIABLE_THRESHOLD: f64 = 0.6;

/// Candidate name spans longer than this (in characters) read as garbled or
/// invented compound entities.
const LONG_NAME_CHARS: usize = 20;

/// Responses longer than this without any hedging phrase get an
/// epistemic-limits suggestion.
const SUGGEST_MIN_CHARS: usize = 100;

const REVIEW_WARNING: &str = "يحتاج مراجعة إضافية";

/// Heuristic post-hoc scorer for generated answers. Stateless: reads only
/// the immutable reference tables and the call arguments, so one instance
/// serves arbitrarily many concurrent requests.
pub struct ReliabilityVerifier {
    lexicon: Lexicon,
    names: Box<dyn NameExtractor>,
}

impl ReliabilityVerifier {
    pub fn new(lexicon: Lexicon, names: Box<dyn NameExtractor>) -> Self {
        Self { lexicon, names }
    }

    /// Verifier preconfigured with the Omani-literature reference tables and
    /// the Arabic-script name extractor.
    pub fn omani_literature() -> Result<Self> {
        Ok(Self::new(
            Lexicon::omani_literature()?,
            Box::new(ArabicNameExtractor::new()?),
        ))
    }

    /// Score a (response, query) pair for likely-fabricated-content risk.
    ///
    /// Total over arbitrary text: empty or out-of-domain input degrades to
    /// neutral sub-scores, never an error. Pure and deterministic, so
    /// identical inputs always produce identical results.
    pub fn verify(&self, response_text: &str, query_text: &str) -> VerificationResult {
        let mut warnings = Vec::new();

        let suspicious = self.suspicious_pattern_score(response_text, &mut warnings);
        let uncertainty = self.uncertainty_usage_score(response_text);
        let specific = self.specific_information_score(response_text, &mut warnings);
        let names = self.name_plausibility_score(response_text, &mut warnings);
        let context = self.context_consistency_score(response_text, query_text);

        let overall_score = suspicious * 0.3
            + uncertainty * 0.2
            + specific * 0.2
            + names * 0.2
            + context * 0.1;

        tracing::debug!(
            suspicious,
            uncertainty,
            specific,
            names,
            context,
            overall_score,
            "computed reliability sub-scores"
        );

        let (confidence_level, is_reliable) = classify(overall_score);
        if confidence_level != ConfidenceLevel::High {
            warnings.push(REVIEW_WARNING.to_string());
        }

        VerificationResult {
            overall_score,
            confidence_level,
            is_reliable,
            warnings,
            suggestions: Vec::new(),
        }
    }

    /// Render the one-line reliability report for a verdict.
    pub fn report(&self, result: &VerificationResult) -> String {
        let level = result.confidence_level.as_str();
        let percent = format!("{:.1}%", result.overall_score * 100.0);

        match result.confidence_level {
            ConfidenceLevel::High => {
                format!("✅ هذا الرد موثوق بدرجة {level} ({percent})")
            }
            ConfidenceLevel::Medium => {
                format!("⚠️ هذا الرد مقبول بدرجة ثقة {level} ({percent}) - يُفضل مراجعة إضافية")
            }
            ConfidenceLevel::Low => {
                format!("❌ هذا الرد يحتاج مراجعة دقيقة - موثوقية {level} ({percent})")
            }
        }
    }

    /// Advisory pass, separate from scoring: phrasing improvements the
    /// upstream generator could apply before the answer is surfaced.
    pub fn suggest(&self, response_text: &str, result: &VerificationResult) -> Vec<String> {
        let mut suggestions = Vec::new();

        if result.overall_score < RELIABLE_THRESHOLD {
            suggestions
                .push("أضف عبارات مثل 'وفقاً للمصادر المتاحة' أو 'حسب علمي'".to_string());
        }

        if !result.warnings.is_empty() {
            suggestions.push("راجع المعلومات المحددة والتواريخ الدقيقة".to_string());
        }

        if response_text.chars().count() > SUGGEST_MIN_CHARS
            && !self.lexicon.has_uncertainty_phrase(response_text)
        {
            suggestions.push("أضف عبارات تدل على حدود المعرفة عند الضرورة".to_string());
        }

        suggestions
    }

    /// Each match of an over-specific claim shape erodes trust; three or
    /// more drive the score to zero.
    fn suspicious_pattern_score(&self, text: &str, warnings: &mut Vec<String>) -> f64 {
        let mut suspicious_count = 0usize;

        for pattern in self.lexicon.suspicious_patterns() {
            let matches: Vec<&str> = pattern.find_iter(text).map(|m| m.as_str()).collect();
            if let Some(first) = matches.first() {
                suspicious_count += matches.len();
                warnings.push(format!("تم العثور على نمط مشبوه: {first}"));
            }
        }

        (1.0 - 0.3 * suspicious_count as f64).max(0.0)
    }

    /// Hedging language is a positive signal: baseline 0.5 with none,
    /// saturating at 1.0 after a few uses.
    fn uncertainty_usage_score(&self, text: &str) -> f64 {
        let count = self.lexicon.count_uncertainty_phrases(text) as f64;
        (0.2 * count + 0.5).min(1.0)
    }

    /// Quoting specific work titles without corroboration is the strongest
    /// single fabrication signal in this domain; date clusters and explicit
    /// works counts compound the penalty.
    fn specific_information_score(&self, text: &str, warnings: &mut Vec<String>) -> f64 {
        let mut score = 1.0_f64;

        let title_mentions: usize = self
            .lexicon
            .title_patterns()
            .iter()
            .map(|pattern| pattern.find_iter(text).count())
            .sum();
        if title_mentions > 0 {
            score = 0.2;
            tracing::warn!(title_mentions, "response quotes specific work titles");
            warnings.push(format!(
                "تم ذكر {title_mentions} عنوان كتاب محدد - مؤشر هلوسة قوي"
            ));
        }

        let dates: Vec<&str> = self
            .lexicon
            .date_pattern()
            .find_iter(text)
            .map(|m| m.as_str())
            .collect();
        if dates.len() > 2 {
            score -= 0.3;
            warnings.push(format!("تواريخ محددة كثيرة: {}", dates.join("، ")));
        }

        let work_counts: Vec<&str> = self
            .lexicon
            .work_count_pattern()
            .find_iter(text)
            .map(|m| m.as_str())
            .collect();
        if work_counts.len() > 1 {
            score -= 0.4;
            warnings.push(format!("أرقام محددة مشبوهة: {}", work_counts.join("، ")));
        }

        score.clamp(0.0, 1.0)
    }

    /// Anomalously long name-like spans suggest garbled or invented
    /// compound entities.
    fn name_plausibility_score(&self, text: &str, warnings: &mut Vec<String>) -> f64 {
        let mut score = 1.0_f64;

        for name in self.names.candidate_names(text) {
            if name.chars().count() > LONG_NAME_CHARS {
                score -= 0.1;
                warnings.push(format!("اسم مشبوه: {name}"));
            }
        }

        score.max(0.0)
    }

    /// Vocabulary overlap between query and response. The 0.3 floor keeps
    /// short zero-overlap answers from being unfairly zeroed.
    fn context_consistency_score(&self, response_text: &str, query_text: &str) -> f64 {
        let query_words = word_set(query_text);
        if query_words.is_empty() {
            return 0.5;
        }

        let response_words = word_set(response_text);
        let common = query_words.intersection(&response_words).count() as f64;
        let relevance = common / query_words.len() as f64;

        (relevance + 0.3).min(1.0)
    }
}

fn classify(overall_score: f64) -> (ConfidenceLevel, bool) {
    if overall_score >= HIGH_CONFIDENCE_THRESHOLD {
        (ConfidenceLevel::High, true)
    } else if overall_score >= RELIABLE_THRESHOLD {
        (ConfidenceLevel::Medium, true)
    } else {
        (ConfidenceLevel::Low, false)
    }
}
