// Built-in English sentiment lexicon.
//
// Polarity values follow the conventions of the pattern/TextBlob adjective
// lexicon: -1.0 is the most negative, 1.0 the most positive. Entries are
// lowercase and matched against whole tokens.

/// Word → polarity.
pub(crate) const POLARITY: &[(&str, f64)] = &[
    // Positive
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("beautiful", 0.85),
    ("best", 1.0),
    ("better", 0.5),
    ("brilliant", 0.9),
    ("calm", 0.3),
    ("charming", 0.5),
    ("cheerful", 0.6),
    ("clean", 0.37),
    ("clever", 0.5),
    ("comfortable", 0.4),
    ("cool", 0.35),
    ("correct", 0.2),
    ("delicious", 1.0),
    ("delightful", 0.9),
    ("easy", 0.43),
    ("enjoy", 0.4),
    ("enjoyable", 0.5),
    ("excellent", 1.0),
    ("exciting", 0.3),
    ("fabulous", 0.4),
    ("fair", 0.7),
    ("fantastic", 0.4),
    ("fine", 0.42),
    ("fortunate", 0.4),
    ("free", 0.4),
    ("friendly", 0.38),
    ("fun", 0.3),
    ("funny", 0.25),
    ("generous", 0.6),
    ("gentle", 0.3),
    ("glad", 0.5),
    ("good", 0.7),
    ("gorgeous", 0.7),
    ("grateful", 0.7),
    ("great", 0.8),
    ("happy", 0.8),
    ("helpful", 0.5),
    ("honest", 0.6),
    ("hope", 0.2),
    ("impressive", 1.0),
    ("incredible", 0.9),
    ("interesting", 0.5),
    ("kind", 0.6),
    ("like", 0.2),
    ("love", 0.5),
    ("loved", 0.7),
    ("lovely", 0.5),
    ("lucky", 0.33),
    ("magnificent", 1.0),
    ("marvelous", 0.8),
    ("nice", 0.6),
    ("perfect", 1.0),
    ("pleasant", 0.73),
    ("pleased", 0.5),
    ("polite", 0.4),
    ("positive", 0.23),
    ("pretty", 0.25),
    ("proud", 0.8),
    ("respectful", 0.5),
    ("right", 0.29),
    ("safe", 0.5),
    ("smart", 0.21),
    ("splendid", 1.0),
    ("strong", 0.43),
    ("stunning", 0.5),
    ("superb", 1.0),
    ("supportive", 0.5),
    ("sweet", 0.35),
    ("terrific", 1.0),
    ("thank", 0.2),
    ("thanks", 0.2),
    ("thoughtful", 0.5),
    ("useful", 0.3),
    ("valuable", 0.4),
    ("warm", 0.6),
    ("welcome", 0.8),
    ("well", 0.2),
    ("win", 0.8),
    ("wise", 0.7),
    ("wonderful", 1.0),
    ("worthy", 0.6),
    // Negative
    ("abusive", -0.8),
    ("absurd", -0.5),
    ("angry", -0.5),
    ("annoying", -0.8),
    ("arrogant", -0.8),
    ("ashamed", -0.5),
    ("awful", -1.0),
    ("bad", -0.7),
    ("bitter", -0.1),
    ("boring", -1.0),
    ("broken", -0.4),
    ("cruel", -1.0),
    ("damn", -0.5),
    ("damned", -0.5),
    ("dangerous", -0.6),
    ("dead", -0.2),
    ("despicable", -1.0),
    ("dirty", -0.6),
    ("disappointing", -0.6),
    ("disgusting", -1.0),
    ("dishonest", -0.6),
    ("dreadful", -1.0),
    ("dull", -0.31),
    ("dumb", -0.38),
    ("evil", -1.0),
    ("fake", -0.5),
    ("false", -0.4),
    ("filthy", -0.8),
    ("foolish", -0.6),
    ("gross", -0.8),
    ("hate", -0.8),
    ("hated", -0.9),
    ("hateful", -0.9),
    ("hideous", -1.0),
    ("horrible", -1.0),
    ("horrid", -1.0),
    ("hostile", -0.6),
    ("hurt", -0.4),
    ("idiot", -0.8),
    ("idiotic", -0.8),
    ("ignorant", -0.6),
    ("ill", -0.5),
    ("insane", -1.0),
    ("lame", -0.5),
    ("lazy", -0.25),
    ("loser", -0.7),
    ("mad", -0.63),
    ("mean", -0.31),
    ("miserable", -1.0),
    ("moron", -0.8),
    ("nasty", -1.0),
    ("negative", -0.3),
    ("offensive", -0.7),
    ("pathetic", -1.0),
    ("poor", -0.4),
    ("repulsive", -1.0),
    ("ridiculous", -0.33),
    ("rude", -0.6),
    ("sad", -0.5),
    ("scary", -0.5),
    ("shameful", -0.8),
    ("sick", -0.71),
    ("silly", -0.5),
    ("stupid", -0.8),
    ("terrible", -1.0),
    ("trash", -0.6),
    ("ugly", -0.7),
    ("unfair", -0.5),
    ("unhappy", -0.6),
    ("upset", -0.5),
    ("useless", -0.5),
    ("vile", -1.0),
    ("violent", -0.8),
    ("weak", -0.38),
    ("wicked", -0.5),
    ("worse", -0.4),
    ("worst", -1.0),
    ("worthless", -0.8),
    ("wrong", -0.5),
    // Emoticons
    (":)", 0.5),
    (":-)", 0.5),
    (";)", 0.5),
    (":d", 0.8),
    (":(", -0.75),
    (":-(", -0.75),
];

/// Adverbs that scale the polarity of the next sentiment word.
pub(crate) const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.6),
    ("barely", 0.5),
    ("completely", 1.6),
    ("especially", 1.3),
    ("exceptionally", 1.5),
    ("extremely", 1.8),
    ("highly", 1.5),
    ("incredibly", 1.8),
    ("really", 1.3),
    ("slightly", 0.5),
    ("so", 1.3),
    ("somewhat", 0.7),
    ("super", 1.5),
    ("too", 1.2),
    ("totally", 1.5),
    ("truly", 1.4),
    ("utterly", 1.8),
    ("very", 1.3),
];

/// Words that flip (and dampen) the next sentiment word in the same clause.
pub(crate) const NEGATIONS: &[&str] = &[
    "aren't", "can't", "cannot", "didn't", "doesn't", "don't", "hardly", "isn't", "never",
    "no", "nor", "not", "wasn't", "weren't", "won't", "wouldn't",
];
