//! English stop-words skipped by the highlighter and the word cloud.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Lower-cased stop-words, contractions included.
pub static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Articles, conjunctions, prepositions
    set.extend([
        "a", "an", "the", "and", "but", "or", "nor", "so", "if", "because", "as", "until",
        "while", "of", "at", "by", "for", "with", "about", "against", "between", "into",
        "through", "during", "before", "after", "above", "below", "to", "from", "up", "down",
        "in", "out", "on", "off", "over", "under", "again", "further", "since", "than", "then",
        "once", "else", "hence", "therefore", "however", "otherwise",
    ]);

    // Pronouns and determiners
    set.extend([
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
        "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
        "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
        "who", "whom", "this", "that", "these", "those", "all", "any", "both", "each", "few",
        "more", "most", "other", "some", "such", "no", "not", "only", "own", "same", "too",
        "very", "here", "there", "when", "where", "why", "how", "just", "also", "ever", "like",
    ]);

    // Auxiliary and modal verbs
    set.extend([
        "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
        "do", "does", "did", "doing", "would", "should", "could", "ought", "can", "cannot",
        "shall", "get",
    ]);

    // Contractions
    set.extend([
        "i'm", "i've", "i'd", "i'll", "you're", "you've", "you'd", "you'll", "he's", "he'd",
        "he'll", "she's", "she'd", "she'll", "it's", "we're", "we've", "we'd", "we'll",
        "they're", "they've", "they'd", "they'll", "that's", "who's", "what's", "here's",
        "there's", "when's", "where's", "why's", "how's", "let's", "isn't", "aren't", "wasn't",
        "weren't", "hasn't", "haven't", "hadn't", "doesn't", "don't", "didn't", "won't",
        "wouldn't", "shan't", "shouldn't", "can't", "couldn't", "mustn't",
    ]);

    // Contraction fragments left over when splitting on apostrophes
    set.extend(["s", "t", "d", "ll", "m", "re", "ve"]);

    // Web debris
    set.extend(["http", "https", "www", "com", "k", "r"]);

    set
});

/// Whether `word` is a stop-word (case-insensitive).
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word.to_lowercase().as_str())
}
