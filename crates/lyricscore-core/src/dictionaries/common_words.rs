//! Built-in reference dictionary of common English words.
//!
//! A compact list of everyday vocabulary used when no external word list is
//! configured. Inflected forms are listed explicitly for the most frequent
//! verbs. Load a full word list (one word per line) for finer rarity scores.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Lower-cased common words.
pub static COMMON_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Function words
    set.extend([
        "a", "an", "the", "and", "or", "but", "nor", "so", "yet", "if", "then", "than", "because",
        "as", "while", "though", "although", "until", "unless", "since", "of", "at", "by", "for",
        "with", "about", "against", "between", "into", "through", "during", "before", "after",
        "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
        "again", "once", "here", "there", "when", "where", "why", "how", "all", "any", "both",
        "each", "few", "more", "most", "other", "some", "such", "no", "not", "only", "own", "same",
        "too", "very", "just", "also", "ever", "never", "always", "often", "sometimes", "still",
        "even", "almost", "already", "away", "back", "now", "today", "tonight", "tomorrow",
        "yesterday", "together", "alone", "around", "across", "along", "among", "behind", "beside",
        "beyond", "inside", "outside", "near", "far", "upon", "within", "without", "toward",
        "towards",
    ]);

    // Pronouns
    set.extend([
        "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "ourselves", "you", "your",
        "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers",
        "herself", "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "this",
        "that", "these", "those", "who", "whom", "whose", "which", "what", "whatever", "whoever",
        "whenever", "wherever", "everyone", "everybody", "everything", "everywhere", "someone",
        "somebody", "something", "somewhere", "anyone", "anybody", "anything", "anywhere",
        "nobody", "nothing", "nowhere",
    ]);

    // Auxiliaries
    set.extend([
        "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
        "do", "does", "did", "doing", "done", "will", "would", "shall", "should", "can", "could",
        "may", "might", "must", "ought",
    ]);

    // Numbers
    set.extend([
        "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
        "twelve", "twenty", "thirty", "forty", "fifty", "hundred", "thousand", "million", "first",
        "second", "third", "last", "next", "half", "double", "single",
    ]);

    // People
    set.extend([
        "man", "men", "woman", "women", "boy", "boys", "girl", "girls", "baby", "babe", "child",
        "children", "kid", "kids", "mother", "mama", "mom", "father", "papa", "dad", "daddy",
        "brother", "sister", "son", "daughter", "family", "friend", "friends", "lover", "lady",
        "ladies", "gentleman", "king", "queen", "prince", "princess", "people", "person",
        "stranger", "enemy", "angel", "angels", "devil", "god", "lord", "soul", "souls", "ghost",
        "hero", "fool", "crowd", "neighbor", "teacher", "doctor", "soldier",
    ]);

    // Body
    set.extend([
        "body", "heart", "hearts", "hand", "hands", "eye", "eyes", "face", "head", "hair", "lip",
        "lips", "mouth", "arm", "arms", "leg", "legs", "foot", "feet", "skin", "blood", "bone",
        "bones", "breath", "tear", "tears", "voice", "neck", "shoulder", "finger", "fingers",
        "knee", "knees", "brain", "mind",
    ]);

    // Nature
    set.extend([
        "world", "earth", "sky", "sun", "moon", "star", "stars", "light", "dark", "darkness",
        "night", "day", "morning", "evening", "sunset", "sunrise", "rain", "snow", "wind", "storm",
        "cloud", "clouds", "fire", "water", "sea", "ocean", "river", "lake", "wave", "waves",
        "tree", "trees", "flower", "flowers", "rose", "roses", "garden", "field", "mountain",
        "hill", "stone", "rock", "sand", "dust", "gold", "silver", "diamond", "ice", "air",
        "smoke", "thunder", "lightning", "shadow", "shadows", "spring", "summer", "autumn", "fall",
        "winter", "season", "bird", "birds", "dog", "cat", "horse", "fish", "lion", "snake",
        "butterfly",
    ]);

    // Places and things
    set.extend([
        "home", "house", "room", "door", "window", "wall", "floor", "roof", "bed", "table",
        "chair", "kitchen", "street", "road", "way", "city", "town", "country", "car", "train",
        "plane", "boat", "ship", "bus", "station", "bridge", "church", "school", "club", "party",
        "bar", "store", "money", "cash", "dollar", "dollars", "ring", "phone", "radio", "song",
        "songs", "music", "dance", "beat", "rhythm", "melody", "guitar", "drum", "drums", "piano",
        "record", "stage", "show", "game", "picture", "photo", "letter", "book", "page", "story",
        "word", "words", "name", "names", "line", "lines", "paper", "glass", "bottle", "wine",
        "whiskey", "cigarette", "clothes", "dress", "shoes", "hat", "key", "box", "mat", "cup",
        "gun", "knife", "sword", "chain", "crown", "throne", "mirror", "bell", "clock",
    ]);

    // Time
    set.extend([
        "time", "times", "moment", "minute", "minutes", "hour", "hours", "week", "weeks", "month",
        "months", "year", "years", "life", "lives", "death", "birth", "age", "future", "past",
        "present", "forever", "history", "memory", "memories", "dream", "dreams",
    ]);

    // Feelings
    set.extend([
        "love", "hate", "fear", "hope", "faith", "joy", "pain", "sorrow", "grief", "peace", "war",
        "anger", "rage", "pride", "shame", "guilt", "trust", "lust", "desire", "passion",
        "heartbreak", "happiness", "sadness", "loneliness", "freedom", "truth", "lie", "lies",
        "secret", "secrets", "promise", "promises", "chance", "luck", "fate", "destiny", "power",
        "glory", "honor", "beauty", "grace", "mercy", "sin", "sins", "heaven", "hell", "paradise",
        "trouble", "problem", "problems", "reason", "reasons", "feeling", "feelings", "sense",
        "touch", "kiss", "kisses", "hug", "smile", "smiles", "laugh", "laughter", "cry", "care",
        "comfort",
    ]);

    // Verbs
    set.extend([
        "go", "goes", "went", "gone", "going", "come", "comes", "came", "coming", "get", "gets",
        "got", "getting", "give", "gives", "gave", "given", "giving", "take", "takes", "took",
        "taken", "taking", "make", "makes", "made", "making", "know", "knows", "knew", "known",
        "knowing", "think", "thinks", "thought", "thinking", "see", "sees", "saw", "seen",
        "seeing", "look", "looks", "looked", "looking", "want", "wants", "wanted", "wanting",
        "need", "needs", "needed", "feel", "feels", "felt", "find", "finds", "found", "tell",
        "tells", "told", "telling", "say", "says", "said", "saying", "ask", "asks", "asked",
        "work", "works", "worked", "try", "tries", "tried", "trying", "leave", "leaves", "left",
        "leaving", "call", "calls", "called", "keep", "keeps", "kept", "let", "lets", "begin",
        "began", "begun", "seem", "seemed", "help", "helped", "showed", "shown", "hear", "hears",
        "heard", "hearing", "play", "plays", "played", "playing", "run", "runs", "ran", "running",
        "move", "moved", "live", "lived", "living", "believe", "believed", "bring", "brought",
        "happen", "happened", "write", "wrote", "written", "sit", "sat", "stand", "stood", "lose",
        "lost", "losing", "pay", "paid", "meet", "met", "include", "continue", "set", "learn",
        "learned", "change", "changed", "lead", "led", "understand", "understood", "watch",
        "watched", "follow", "followed", "stop", "stopped", "create", "speak", "spoke", "spoken",
        "read", "spend", "spent", "grow", "grew", "grown", "open", "opened", "walk", "walked",
        "walking", "win", "won", "offer", "remember", "remembered", "forget", "forgot",
        "forgotten", "consider", "appear", "buy", "bought", "wait", "waited", "waiting", "serve",
        "die", "died", "dying", "send", "sent", "expect", "build", "built", "stay", "stayed",
        "staying", "fell", "fallen", "falling", "cut", "reach", "kill", "killed", "remain",
        "suggest", "raise", "pass", "sell", "sold", "require", "report", "decide", "pull", "push",
        "hold", "holds", "holding", "held", "break", "broke", "broken", "breaking", "turn",
        "turned", "turning", "burn", "burning", "burned", "shine", "shining", "fly", "flying",
        "flew", "sing", "sings", "sang", "sung", "singing", "dancing", "danced", "cries", "cried",
        "crying", "laughed", "laughing", "kissed", "loves", "loved", "loving", "hated", "hurt",
        "hurts", "hurting", "fight", "fought", "fighting", "save", "saved", "pray", "prayed",
        "praying", "hide", "hid", "hiding", "drive", "drove", "driving", "ride", "rode", "riding",
        "swim", "eat", "ate", "drink", "drank", "sleep", "slept", "sleeping", "wake", "woke",
        "dreaming", "dreamed", "smiled", "shake", "shook", "throw", "threw", "catch", "caught",
        "touched", "miss", "missed", "missing", "wish", "wished", "hoped", "wonder", "wondered",
        "scream", "screamed", "shout", "whisper", "whispered", "breathe", "breathing", "bleed",
        "bleeding", "fade", "fading", "rise", "rising", "shoot", "shot", "climb", "jump", "jumped",
        "wear", "wore", "carry", "carried", "steal", "stole", "chase", "chasing",
    ]);

    // Adjectives
    set.extend([
        "good", "better", "best", "bad", "worse", "worst", "new", "old", "young", "big", "small",
        "little", "large", "long", "short", "high", "low", "great", "different", "right", "wrong",
        "true", "false", "real", "free", "full", "empty", "easy", "hard", "strong", "weak", "hot",
        "cold", "warm", "cool", "bright", "heavy", "deep", "soft", "sweet", "bitter", "beautiful",
        "pretty", "ugly", "happy", "sad", "lonely", "crazy", "wild", "quiet", "loud", "slow",
        "fast", "quick", "early", "late", "alive", "dead", "sick", "tired", "rich", "poor",
        "clean", "dirty", "black", "white", "red", "blue", "green", "yellow", "golden", "gray",
        "grey", "pink", "purple", "brown", "blind", "holy", "perfect", "wonderful", "sure",
        "ready", "whole", "close", "closed", "nice", "fine", "kind", "cruel", "brave", "proud",
        "afraid", "safe", "dangerous", "strange", "familiar", "simple", "special", "certain",
        "possible", "impossible", "important", "fresh", "final", "silent", "tender", "gentle",
        "honest", "lucky", "precious", "sorry", "glad",
    ]);

    // Adverbs and interjections
    set.extend([
        "yes", "oh", "ah", "hey", "well", "really", "maybe", "please", "okay", "ok", "soon",
        "later", "enough", "quite", "rather", "truly", "simply", "slowly", "softly", "deeply",
        "somehow", "anyway", "instead",
    ]);

    set
});
