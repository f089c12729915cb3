//! URL feature extraction.
//!
//! Maps an arbitrary input string to the fixed 49-slot numeric vector the
//! classifier was trained against. Slot order is the contract: consumers
//! depend on index, not name. Extraction is pure and deterministic — no I/O,
//! no clock, no randomness.
//!
//! A block of content-level slots (page markup, favicon, form fields, ...)
//! is emitted as fixed placeholder values rather than measurements; the
//! model was fitted against these exact literals, so filling them with real
//! page data would shift the input distribution it expects.

use crate::domain::url_parts::{SplitError, UrlParts};

/// Number of slots in a feature vector. The classifier rejects any other
/// dimensionality.
pub const FEATURE_COUNT: usize = 49;

/// Dataset column name for each slot, in positional order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "URLLength",
    "DomainLength",
    "IsDomainIP",
    "URLSimilarityIndex",
    "CharContinuationRate",
    "TLDLegitimateProb",
    "URLCharProb",
    "TLDLength",
    "NoOfSubDomain",
    "HasObfuscation",
    "NoOfObfuscatedChar",
    "ObfuscationRatio",
    "NoOfLettersInURL",
    "LetterRatioInURL",
    "NoOfDegitsInURL",
    "DegitRatioInURL",
    "NoOfEqualsInURL",
    "NoOfQMarkInURL",
    "NoOfAmpersandInURL",
    "NoOfOtherSpecialCharsInURL",
    "SpacialCharRatioInURL",
    "IsHTTPS",
    "LineOfCode",
    "LargestLineLength",
    "HasTitle",
    "DomainTitleMatchScore",
    "URLTitleMatchScore",
    "HasFavicon",
    "IsResponsive",
    "NoOfURLRedirect",
    "NoOfSelfRedirect",
    "HasDescription",
    "NoOfPopup",
    "NoOfiFrame",
    "HasExternalFormSubmit",
    "HasSocialNet",
    "HasSubmitButton",
    "HasHiddenFields",
    "HasPasswordField",
    "Bank",
    "Pay",
    "Crypto",
    "HasCopyrightInfo",
    "NoOfImage",
    "NoOfCSS",
    "NoOfJS",
    "NoOfSelfRef",
    "NoOfEmptyRef",
    "NoOfExternalRef",
];

/// TLDs granted the higher legitimacy score.
const LEGITIMATE_TLDS: [&str; 6] = ["com", "org", "net", "edu", "gov", "mil"];

/// Fixed values for the content-level slots (HasTitle .. NoOfExternalRef).
const CONTENT_PLACEHOLDERS: [f64; 25] = [
    1.0, // HasTitle
    0.5, // DomainTitleMatchScore
    0.5, // URLTitleMatchScore
    1.0, // HasFavicon
    1.0, // IsResponsive
    0.0, // NoOfURLRedirect
    0.0, // NoOfSelfRedirect
    1.0, // HasDescription
    0.0, // NoOfPopup
    0.0, // NoOfiFrame
    0.0, // HasExternalFormSubmit
    0.0, // HasSocialNet
    0.0, // HasSubmitButton
    0.0, // HasHiddenFields
    0.0, // HasPasswordField
    0.0, // Bank
    0.0, // Pay
    0.0, // Crypto
    1.0, // HasCopyrightInfo
    5.0, // NoOfImage
    3.0, // NoOfCSS
    2.0, // NoOfJS
    1.0, // NoOfSelfRef
    0.0, // NoOfEmptyRef
    0.0, // NoOfExternalRef
];

/// Ordered numeric encoding of a URL, always exactly [`FEATURE_COUNT`] slots.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    /// The all-zero fallback vector.
    pub fn zeros() -> Self {
        FeatureVector([0.0; FEATURE_COUNT])
    }

    /// Build from accumulated slot values, right-padding with zeros and
    /// truncating to exactly [`FEATURE_COUNT`]. Runs unconditionally on the
    /// success path too.
    fn from_raw(mut values: Vec<f64>) -> Self {
        values.resize(FEATURE_COUNT, 0.0);
        let mut slots = [0.0; FEATURE_COUNT];
        slots.copy_from_slice(&values);
        FeatureVector(slots)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl std::ops::Index<usize> for FeatureVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

/// Extract the feature vector for a URL.
///
/// Never fails: empty input and any internal error (currently only a
/// malformed network location) yield the all-zero vector, so the classifier
/// always receives a valid-shape input.
pub fn extract(url: &str) -> FeatureVector {
    if url.is_empty() {
        return FeatureVector::zeros();
    }
    match gather(url) {
        Ok(values) => FeatureVector::from_raw(values),
        Err(_) => FeatureVector::zeros(),
    }
}

fn gather(url: &str) -> Result<Vec<f64>, SplitError> {
    let parts = UrlParts::split(url)?;
    let domain = parts.netloc.as_str();
    let url_len = url.chars().count();

    let mut f = Vec::with_capacity(FEATURE_COUNT);

    // Structural counts.
    f.push(url_len as f64);
    f.push(domain.chars().count() as f64);

    // Syntactic dotted-quad check only; octet range is deliberately not
    // validated, so 999.999.999.999 still counts as an IP literal.
    f.push(flag(is_dotted_quad(domain)));

    // URL similarity index and character continuation rate are not computed.
    f.push(100.0);
    f.push(1.0);

    let tld = match domain.rsplit_once('.') {
        Some((_, t)) => t,
        None => "",
    };
    f.push(if LEGITIMATE_TLDS.contains(&tld) { 0.8 } else { 0.2 });
    f.push(0.5); // URL character probability placeholder
    f.push(tld.chars().count() as f64);

    // Label-count heuristic, not registrable-domain aware: www.example.com
    // counts 2, a bare label counts 0.
    f.push((domain.split('.').count() - 1) as f64);

    // Obfuscation: percent-encoded escape triples anywhere in the URL.
    let escapes = percent_escape_count(url);
    f.push(flag(escapes > 0));
    f.push(escapes as f64);
    f.push(ratio(escapes, url_len));

    // Character classes over the whole string.
    let letters = url.chars().filter(char::is_ascii_alphabetic).count();
    let digits = url.chars().filter(char::is_ascii_digit).count();
    let specials = url.chars().filter(|c| !c.is_ascii_alphanumeric()).count();

    f.push(letters as f64);
    f.push(ratio(letters, url_len));
    f.push(digits as f64);
    f.push(ratio(digits, url_len));

    f.push(count_char(url, '=') as f64);
    f.push(count_char(url, '?') as f64);
    f.push(count_char(url, '&') as f64);
    f.push(specials as f64);
    f.push(ratio(specials, url_len));

    f.push(flag(parts.scheme == "https"));

    // Content-level block: no page is fetched, so these hold the fixed
    // values the model was fitted against. LargestLineLength mirrors the
    // raw URL length rather than a literal constant.
    f.push(100.0); // LineOfCode
    f.push(url_len as f64); // LargestLineLength
    f.extend_from_slice(&CONTENT_PLACEHOLDERS);

    Ok(f)
}

fn flag(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}

/// Count/length ratio rounded to 3 decimals; 0 when the URL is empty.
fn ratio(count: usize, len: usize) -> f64 {
    if len == 0 {
        0.0
    } else {
        round3(count as f64 / len as f64)
    }
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

fn count_char(s: &str, c: char) -> usize {
    s.chars().filter(|&x| x == c).count()
}

/// True iff the domain is four `.`-separated groups of 1-3 ASCII digits.
fn is_dotted_quad(domain: &str) -> bool {
    let groups: Vec<&str> = domain.split('.').collect();
    groups.len() == 4
        && groups.iter().all(|g| {
            (1..=3).contains(&g.len()) && g.bytes().all(|b| b.is_ascii_digit())
        })
}

/// Count non-overlapping `%XX` escape triples (two hex digits after `%`).
fn percent_escape_count(url: &str) -> usize {
    let bytes = url.as_bytes();
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%'
            && bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
            && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit)
        {
            count += 1;
            i += 3;
        } else {
            i += 1;
        }
    }
    count
}
