//! Suffix-based matching of inflected Ukrainian word forms.
//!
//! A heuristic, not a morphological analyzer: it recognizes the common
//! case endings of feminine/masculine nouns and adjectives, and accepts
//! occasional false positives on short stems.

/// Lowercase a word and fold typographic apostrophes to the ASCII one.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace(['’', 'ʼ', '`'], "'")
}

/// Generate inflected surface forms of a lemma, one declension paradigm
/// per ending class.
pub fn inflected_variants(lemma: &str) -> Vec<String> {
    // Adjectives: -ий / -ій. Masculine oblique cases plus feminine
    // genitive/instrumental for agreement inside two-word names.
    if let Some(stem) = lemma.strip_suffix("ий").or_else(|| lemma.strip_suffix("ій")) {
        return ["ого", "ому", "им", "ім", "их", "ими", "ої", "ою"]
            .iter()
            .map(|suffix| format!("{stem}{suffix}"))
            .collect();
    }

    // Feminine nouns in -я (кав'ярня): gen/dat/loc, accusative,
    // instrumental, plural.
    if let Some(stem) = lemma.strip_suffix('я') {
        return ["і", "ю", "ею", "ями", "ях"]
            .iter()
            .map(|suffix| format!("{stem}{suffix}"))
            .collect();
    }

    // Feminine nouns in -а (річка, бібліотека).
    if let Some(stem) = lemma.strip_suffix('а') {
        return ["и", "і", "у", "ою", "ами", "ах"]
            .iter()
            .map(|suffix| format!("{stem}{suffix}"))
            .collect();
    }

    // Neuter nouns in -о (озеро).
    if let Some(stem) = lemma.strip_suffix('о') {
        return ["а", "у", "ом", "і", "ами", "ах"]
            .iter()
            .map(|suffix| format!("{stem}{suffix}"))
            .collect();
    }

    // Masculine nouns in -й (музей): iotated case endings.
    if let Some(stem) = lemma.strip_suffix('й') {
        return ["ю", "я", "єм", "єві", "ї", "їв", "ями", "ях"]
            .iter()
            .map(|suffix| format!("{stem}{suffix}"))
            .collect();
    }

    // Masculine nouns ending in a consonant or soft sign (парк,
    // готель): gen/dat, instrumental, locative, genitive plural.
    let stem = lemma.strip_suffix('ь').unwrap_or(lemma);
    ["а", "я", "у", "ю", "ові", "еві", "ом", "ем", "і", "и", "ів", "ами", "ах"]
        .iter()
        .map(|suffix| format!("{stem}{suffix}"))
        .collect()
}

/// Whether `observed` looks like a grammatical form of `canonical_lemma`.
///
/// Exact match and substring containment succeed immediately; otherwise
/// any generated variant of at least 3 characters found inside the
/// observed word counts as a match.
pub fn matches(observed: &str, canonical_lemma: &str) -> bool {
    let observed = normalize(observed);
    let lemma = normalize(canonical_lemma);
    if lemma.is_empty() || observed.is_empty() {
        return false;
    }

    if observed == lemma || observed.contains(&lemma) {
        return true;
    }

    inflected_variants(&lemma)
        .iter()
        .any(|variant| variant.chars().count() >= 3 && observed.contains(variant.as_str()))
}

/// Spelling variants of a (possibly declined) place name, most likely
/// first. The original spelling always leads; nominative reconstructions
/// follow, with adjective + noun agreement handled for two-word names.
pub fn name_variants(name: &str) -> Vec<String> {
    let name = name.trim();
    let mut variants = vec![name.to_string()];

    let words: Vec<&str> = name.split_whitespace().collect();
    match words.as_slice() {
        [word] => {
            for guess in noun_nominative_guesses(word) {
                push_unique(&mut variants, guess);
            }
        }
        [adj, noun] => {
            let mut adj_forms = vec![adj.to_string()];
            adj_forms.extend(adjective_nominative_guesses(adj));
            let mut noun_forms = vec![noun.to_string()];
            noun_forms.extend(noun_nominative_guesses(noun));

            for a in &adj_forms {
                for n in &noun_forms {
                    push_unique(&mut variants, format!("{a} {n}"));
                }
            }
        }
        [head @ .., last] => {
            // Longer names: decline only the final word.
            let head = head.join(" ");
            for guess in noun_nominative_guesses(last) {
                push_unique(&mut variants, format!("{head} {guess}"));
            }
        }
        [] => {}
    }

    variants.truncate(8);
    variants
}

fn push_unique(variants: &mut Vec<String>, candidate: String) {
    if !candidate.is_empty() && !variants.contains(&candidate) {
        variants.push(candidate);
    }
}

/// Guess nominative forms of a declined noun by reversing common case
/// endings. Ordered by how often each ending shows up in route requests.
fn noun_nominative_guesses(word: &str) -> Vec<String> {
    let mut guesses = Vec::new();

    if let Some(stem) = word.strip_suffix("ові").or_else(|| word.strip_suffix("еві")) {
        guesses.push(stem.to_string());
    } else if let Some(stem) = word.strip_suffix("ом").or_else(|| word.strip_suffix("ем")) {
        guesses.push(stem.to_string());
    } else if let Some(stem) = word.strip_suffix("ою").or_else(|| word.strip_suffix("ею")) {
        guesses.push(format!("{stem}а"));
        guesses.push(format!("{stem}я"));
    } else if let Some(stem) = word.strip_suffix('у').or_else(|| word.strip_suffix('ю')) {
        // Masculine genitive/dative (автовокзалу) or feminine accusative
        // (площу); try both reconstructions.
        guesses.push(stem.to_string());
        guesses.push(format!("{stem}а"));
    } else if let Some(stem) = word.strip_suffix('і') {
        guesses.push(format!("{stem}а"));
        guesses.push(format!("{stem}я"));
    } else if let Some(stem) = word.strip_suffix('а') {
        guesses.push(stem.to_string());
    }

    guesses
}

/// Guess the nominative of a declined adjective.
fn adjective_nominative_guesses(word: &str) -> Vec<String> {
    if let Some(stem) = word.strip_suffix("ого") {
        return vec![format!("{stem}ий"), format!("{stem}ій")];
    }
    if let Some(stem) = word.strip_suffix("ому") {
        return vec![format!("{stem}ий")];
    }
    if let Some(stem) = word.strip_suffix("им").or_else(|| word.strip_suffix("ім")) {
        return vec![format!("{stem}ий")];
    }
    if let Some(stem) = word.strip_suffix("ої").or_else(|| word.strip_suffix("ою")) {
        return vec![format!("{stem}а")];
    }
    Vec::new()
}
