/*!
 * English syllable counting.
 *
 * A word is split on anything that is not a letter and every part is counted
 * from its vowel groups. Known affixes are counted and stripped first, then
 * letter patterns that merge two vowel groups into one syllable (or split one
 * group into two) correct the count. A few irregular words are looked up
 * directly.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Words the pattern rules get wrong
const IRREGULAR_WORDS: &[(&str, usize)] = &[
    ("abalone", 4),
    ("abare", 3),
    ("apache", 3),
    ("avalanche", 4),
    ("business", 2),
    ("colonel", 2),
    ("coyote", 3),
    ("every", 2),
    ("forever", 3),
    ("hygiene", 2),
    ("people", 2),
    ("recipe", 3),
    ("shoreline", 2),
    ("simile", 3),
    ("somewhere", 2),
];

/// Affixes worth three syllables
static TRIPLE_AFFIX_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:creations?|ology|ologist|onomy|onomist)$")
        .expect("Failed to compile triple affix regex")
});

/// Affixes worth two syllables
static DOUBLE_AFFIX_REGEX: Lazy<Regex> = Lazy::new(|| {
    let prefixes = [
        "above", "anti", "ante", "counter", "hyper", "afore", "agri", "infra", "intra", "inter",
        "over", "semi", "ultra", "under", "extra", "dia", "micro", "mega", "kilo", "pico", "nano",
        "macro", "somer",
    ];
    let suffixes = [
        "fully",
        "berry",
        "woman",
        "women",
        "edly",
        "union",
        "(?:[bcdfghjklmnpqrstvwxz]|[aeiou])ye?ing",
    ];
    Regex::new(&format!(
        "^(?:{})|(?:{})$",
        prefixes.join("|"),
        suffixes.join("|")
    ))
    .expect("Failed to compile double affix regex")
});

/// Affixes worth one syllable
static SINGLE_AFFIX_REGEX: Lazy<Regex> = Lazy::new(|| {
    let prefixes = [
        "un", "fore", "ware", "none?", "out", "post", "sub", "pre", "pro", "dis", "side", "some",
    ];
    let suffixes = [
        "ly",
        "less",
        "some",
        "ful",
        "ers?",
        "ness",
        "cians?",
        "ments?",
        "ettes?",
        "villes?",
        "ships?",
        "sides?",
        "ports?",
        "shires?",
        "[gnst]ion(?:ed|s)?",
    ];
    Regex::new(&format!(
        "^(?:{})|(?:{})$",
        prefixes.join("|"),
        suffixes.join("|")
    ))
    .expect("Failed to compile single affix regex")
});

static VOWEL_GROUP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[aeiouy]+").expect("Failed to compile vowel group regex"));

/// Vowel groups that sound as one syllable less than they look
static MERGED_SYLLABLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    let past_tense = "[bcfgklmnprsvwxyz]|ch|dg|g[hn]|lch|l[lv]|mm|nch|n[cgn]|r[bcnsv]|squ|s[chkls]|th";
    let plural = "[bdfklmnprstvy]|ch|g[hn]|lch|l[lv]|mm|nch|nn|r[nsv]|squ|s[cklst]|th";
    let patterns = [
        "awe(?:$|d|so)".to_string(),
        "cia(?:l|$)".to_string(),
        "tia".to_string(),
        "cius".to_string(),
        "cious".to_string(),
        "[^aeiou]giu".to_string(),
        "[aeiouy][^aeiouy]ion".to_string(),
        "iou".to_string(),
        "sia$".to_string(),
        "eous$".to_string(),
        "[oa]gue$".to_string(),
        ".[^aeiuoycgltdb]{2,}ed$".to_string(),
        ".ely$".to_string(),
        "^jua".to_string(),
        "uai".to_string(),
        "eau".to_string(),
        "^busi$".to_string(),
        format!("(?:[aeiouy](?:{})ed$)", past_tense),
        format!("(?:[aeiouy](?:{})es$)", plural),
    ];
    Regex::new(&patterns.join("|")).expect("Failed to compile merged syllable regex")
});

/// Silent final `e` after a consonant cluster
static SILENT_E_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[aeiouy](?:[bcdfgklmnprstvyz]|ch|dg|g[hn]|l[lv]|mm|n[cgns]|r[cnsv]|squ|s[cklst]|th)e$",
    )
    .expect("Failed to compile silent e regex")
});

/// Word endings where one vowel group sounds as two syllables
static SPLIT_ENDING_REGEX: Lazy<Regex> = Lazy::new(|| {
    let patterns = [
        "[^aeiouy]ie(?:r|s?t)",
        "[aeiouym]bl",
        "eo",
        "ism",
        "asm",
        "thm",
        "dnt",
        "snt",
        "uity",
        "dea",
        "gean",
        "oa",
        "ua",
        "react?",
        "orbed",
        "shred",
        "eings?",
        "[aeiouy]sh?e[rs]",
    ];
    Regex::new(&format!("(?:{})$", patterns.join("|")))
        .expect("Failed to compile split ending regex")
});

/// Letter runs where one vowel group sounds as two syllables
static SPLIT_VOWELS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^gq]ua[^auieo]|[aeiou]{3}|^(?:ia|mc|coa[dglx].)|^re(?:app|es|im|us)|(?:th|d)eist")
        .expect("Failed to compile split vowels regex")
});

static HIATUS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[^aeiou]y[ae]|[^l]lien|riet|dien|iu|io|ii|uen|[aeilotu]real|real[aeilotu]|iell|eo[^aeiou]|[aeiou]y[aeiou]",
    )
    .expect("Failed to compile hiatus regex")
});

static SPLIT_IA_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^s]ia").expect("Failed to compile split ia regex"));

/// Estimate the number of syllables in an English word.
///
/// Anything without a Latin letter (numbers, other scripts) counts as one.
pub fn count_syllables(word: &str) -> usize {
    let lower: String = word
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '\'' | '\u{2019}'))
        .collect();

    if !lower.chars().any(|c| c.is_ascii_lowercase()) {
        return 1;
    }

    let total: usize = lower
        .split(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'))
        .map(|part| {
            let letters: String = part.chars().filter(char::is_ascii_lowercase).collect();
            count_part(&letters)
        })
        .sum();

    total.max(1)
}

/// Count one run of lowercase ASCII letters.
fn count_part(part: &str) -> usize {
    if part.is_empty() {
        return 0;
    }
    if part.len() < 3 {
        return 1;
    }
    if let Some(count) = irregular(part).or_else(|| part.strip_suffix('s').and_then(irregular)) {
        return count;
    }

    let mut count = 0;
    let mut rest = part.to_string();
    for (regex, weight) in [
        (&*TRIPLE_AFFIX_REGEX, 3),
        (&*DOUBLE_AFFIX_REGEX, 2),
        (&*SINGLE_AFFIX_REGEX, 1),
    ] {
        count += regex.find_iter(&rest).count() * weight;
        rest = regex.replace_all(&rest, "").into_owned();
    }

    count += VOWEL_GROUP_REGEX.find_iter(&rest).count();

    let merged =
        MERGED_SYLLABLE_REGEX.find_iter(&rest).count() + SILENT_E_REGEX.find_iter(&rest).count();

    if SPLIT_ENDING_REGEX.is_match(&rest) || ends_with_doubled_consonant_l(&rest) {
        count += 1;
    }
    count += SPLIT_VOWELS_REGEX.find_iter(&rest).count();
    count += count_creat(&rest);
    count += HIATUS_REGEX.find_iter(&rest).count();
    if SPLIT_IA_REGEX.is_match(&rest) {
        count += 1;
    }

    count.saturating_sub(merged).max(1)
}

fn irregular(word: &str) -> Option<usize> {
    IRREGULAR_WORDS
        .iter()
        .find(|(irregular, _)| *irregular == word)
        .map(|(_, count)| *count)
}

/// `bottl`, `middl`: a doubled consonant before a final `l`
fn ends_with_doubled_consonant_l(word: &str) -> bool {
    let bytes = word.as_bytes();
    match bytes {
        [.., a, b, b'l'] => a == b && !b"aeiouy".contains(a),
        _ => false,
    }
}

/// `creat` not followed by `u` (`create`, but not `creature`)
fn count_creat(word: &str) -> usize {
    word.match_indices("creat")
        .filter(|(index, found)| !word[index + found.len()..].starts_with('u'))
        .count()
}
