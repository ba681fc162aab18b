//! Title and author similarity integration tests
//!
//! Title lists are real variant titles returned by a library classification
//! service for a handful of classic novels.

use std::collections::BTreeMap;

use proptest::prelude::*;
use shelfmark_text::{
    author_similarity, histogram_distance, title_similarity, Contributor, MatchConfidence,
    MetadataSimilarity, StopwordSet,
};

fn articles() -> MetadataSimilarity {
    let stopwords: StopwordSet = ["the", "a", "an"].into_iter().collect();
    MetadataSimilarity::new(stopwords)
}

/// Group `others` by how confidently each matches `title`, sorted within bands
fn arrange_by_confidence<'a>(
    title: &str,
    others: &[&'a str],
) -> BTreeMap<MatchConfidence, Vec<&'a str>> {
    let similarity = articles();
    let mut bands: BTreeMap<MatchConfidence, Vec<&'a str>> = BTreeMap::new();
    for other in others {
        let confidence = similarity.classify_titles(&[title], &[*other]);
        bands.entry(confidence).or_default().push(*other);
    }
    for titles in bands.values_mut() {
        titles.sort();
    }
    bands
}

fn band<'a>(
    bands: &BTreeMap<MatchConfidence, Vec<&'a str>>,
    confidence: MatchConfidence,
) -> Vec<&'a str> {
    bands.get(&confidence).cloned().unwrap_or_default()
}

// === Basic Properties ===

#[test]
fn test_word_order_and_punctuation_are_ignored() {
    assert_eq!(title_similarity("foo bar", "foo bar"), 1.0);
    assert_eq!(title_similarity("foo bar", "bar, foo"), 1.0);
    assert_eq!(title_similarity("foo bar.", "FOO BAR"), 1.0);
}

#[test]
fn test_same_histogram_has_zero_distance() {
    let a = ["The First Title", "The Second Title"];
    let b = ["title the second", "FIRST, THE TITLE"];
    assert_eq!(histogram_distance(&a, &b, None), 0.0);
}

#[test]
fn test_disjoint_titles_have_maximum_distance() {
    let a = ["These Words Have Absolutely"];
    let b = ["Nothing In Common, Really"];
    assert_eq!(histogram_distance(&a, &b, None), 1.0);
}

#[test]
fn test_empty_lists() {
    let empty: [&str; 0] = [];
    assert_eq!(histogram_distance(&empty, &empty, None), 0.0);
    assert_eq!(histogram_distance(&empty, &["Moby Dick"], None), 1.0);
}

// === Tom Sawyer Abroad vs. Tom Sawyer, Detective ===
//
// Two different books whose titles differ by one word and which are often
// anthologized together, so both title sets carry plenty of shared noise.

const ABROAD: &[&str] = &[
    "Tom Sawyer abroad",
    "The adventures of Tom Sawyer, Tom Sawyer abroad [and] Tom Sawyer, detective",
    "Tom Sawyer abroad",
    "Tom Sawyer abroad",
    "Tom Sawyer Abroad",
    "Tom Sawyer Abroad",
    "Tom Sawyer Abroad",
    "Tom Sawyer abroad : and other stories",
    "Tom Sawyer abroad Tom Sawyer, detective : and other stories, etc. etc.",
    "Tom Sawyer abroad",
    "Tom Sawyer abroad",
    "Tom Sawyer abroad",
    "Tom Sawyer abroad and other stories",
    "Tom Sawyer abroad and other stories",
    "Tom Sawyer abroad and the American claimant,",
    "Tom Sawyer abroad and the American claimant",
    "Tom Sawyer abroad : and The American claimant: novels.",
    "Tom Sawyer abroad : and The American claimant: novels.",
    "Tom Sawyer Abroad - Tom Sawyer, Detective",
];

const DETECTIVE: &[&str] = &[
    "Tom Sawyer, Detective",
    "Tom Sawyer Abroad - Tom Sawyer, Detective",
    "Tom Sawyer Detective : As Told by Huck Finn : And Other Tales.",
    "Tom Sawyer, Detective",
    "Tom Sawyer, Detective.",
    "The adventures of Tom Sawyer, Tom Sawyer abroad [and] Tom Sawyer, detective",
    "Tom Sawyer detective : and other stories every child should know",
    "Tom Sawyer, detective : as told by Huck Finn and other tales",
    "Tom Sawyer, detective, as told by Huck Finn and other tales...",
    "The adventures of Tom Sawyer, Tom Sawyer abroad [and] Tom Sawyer, detective,",
    "Tom Sawyer abroad, Tom Sawyer, detective, and other stories",
    "Tom Sawyer, detective",
    "Tom Sawyer, detective",
    "Tom Sawyer, detective",
    "Tom Sawyer, detective",
    "Tom Sawyer, detective",
    "Tom Sawyer, detective",
    "Tom Sawyer abroad Tom Sawyer detective",
    "Tom Sawyer, detective : as told by Huck Finn",
    "Tom Sawyer : detective",
];

#[test]
fn test_tom_sawyer_title_sets() {
    let d = histogram_distance(ABROAD, DETECTIVE, None);
    let reverse = histogram_distance(DETECTIVE, ABROAD, None);
    assert!((d - reverse).abs() < 1e-6);
    assert!(d > 0.0 && d < 1.0, "distance should be significant, got {}", d);
}

#[test]
fn test_canonical_title_is_close_to_its_own_variants() {
    let ab_ab = histogram_distance(&["Tom Sawyer Abroad"], ABROAD, None);
    let de_de = histogram_distance(&["Tom Sawyer, Detective"], DETECTIVE, None);
    assert!(ab_ab < 0.5, "got {}", ab_ab);
    assert!(de_de < 0.5, "got {}", de_de);
}

#[test]
fn test_canonical_title_is_far_from_the_other_books_variants() {
    let ab_de = histogram_distance(&["Tom Sawyer Abroad"], DETECTIVE, None);
    let de_ab = histogram_distance(&["Tom Sawyer, Detective"], ABROAD, None);
    assert!(ab_de > 0.5, "got {}", ab_de);
    assert!(de_ab > 0.5, "got {}", de_ab);
}

// === Confidence Bands ===

#[test]
fn test_identical_titles_are_identical() {
    let t = "a !@#$@#%& the #FDUSG($E% N%SDAMF_) and #$MI# asdff \u{2603}";
    assert_eq!(title_similarity(t, t), 1.0);
}

#[test]
fn test_moby_dick_bands() {
    let moby = arrange_by_confidence(
        "Moby Dick",
        &[
            "Moby Dick",
            "Moby-Dick",
            "Moby Dick Selections",
            "Moby Dick; notes",
            "Moby Dick; or, The whale",
            "Moby Dick, or, The whale",
            "The best of Herman Melville : Moby Dick : Omoo : Typee : Israel Potter.",
            "The best of Herman Melville",
            "Redburn : his first voyage",
            "Redburn, his first voyage : being the sailorboy confessions and reminiscences of the son-of-a-gentleman in the merchant service",
            "Redburn, his first voyage ; White-jacket, or, The world in a man-of-war ; Moby-Dick, or, The whale",
            "Ishmael's white world : a phenomenological reading of Moby Dick.",
            "Moby-Dick : an authoritative text, reviews and letters",
        ],
    );

    assert_eq!(
        band(&moby, MatchConfidence::Identical),
        vec!["Moby Dick", "Moby-Dick"]
    );
    assert!(band(&moby, MatchConfidence::High).is_empty());
    assert_eq!(
        band(&moby, MatchConfidence::Medium),
        vec![
            "Moby Dick Selections",
            "Moby Dick, or, The whale",
            "Moby Dick; notes",
            "Moby Dick; or, The whale",
        ]
    );
    assert_eq!(
        band(&moby, MatchConfidence::Low),
        vec!["Moby-Dick : an authoritative text, reviews and letters"]
    );
    // Anthologies and other Melville titles
    assert_eq!(
        band(&moby, MatchConfidence::NoMatch),
        vec![
            "Ishmael's white world : a phenomenological reading of Moby Dick.",
            "Redburn : his first voyage",
            "Redburn, his first voyage : being the sailorboy confessions and reminiscences of the son-of-a-gentleman in the merchant service",
            "Redburn, his first voyage ; White-jacket, or, The world in a man-of-war ; Moby-Dick, or, The whale",
            "The best of Herman Melville",
            "The best of Herman Melville : Moby Dick : Omoo : Typee : Israel Potter.",
        ]
    );
}

#[test]
fn test_huckleberry_finn_long_title_bands() {
    let huck = arrange_by_confidence(
        "The Adventures of Huckleberry Finn (Tom Sawyer's Comrade)",
        &[
            "Adventures of Huckleberry Finn",
            "The Adventures of Huckleberry Finn",
            "Adventures of Huckleberry Finn : \"Tom Sawyer's comrade\", scene: the Mississippi Valley, time: early nineteenth century",
            "The adventures of Huckleberry Finn : (Tom Sawyer's Comrade) : Scene: The Mississippi Valley, Time: Firty to Fifty Years Ago : In 2 Volumes : Vol. 1-2.",
            "The adventures of Tom Sawyer",
        ],
    );

    assert!(band(&huck, MatchConfidence::Identical).is_empty());
    assert!(band(&huck, MatchConfidence::High).is_empty());
    // Word frequencies alone rank Tom Sawyer alongside Huckleberry Finn
    assert_eq!(
        band(&huck, MatchConfidence::Medium),
        vec![
            "Adventures of Huckleberry Finn",
            "Adventures of Huckleberry Finn : \"Tom Sawyer's comrade\", scene: the Mississippi Valley, time: early nineteenth century",
            "The Adventures of Huckleberry Finn",
            "The adventures of Tom Sawyer",
        ]
    );
    assert_eq!(
        band(&huck, MatchConfidence::Low),
        vec!["The adventures of Huckleberry Finn : (Tom Sawyer's Comrade) : Scene: The Mississippi Valley, Time: Firty to Fifty Years Ago : In 2 Volumes : Vol. 1-2."]
    );
}

#[test]
fn test_huckleberry_finn_short_title_bands() {
    let huck = arrange_by_confidence(
        "Adventures of Huckleberry Finn",
        &[
            "The adventures of Huckleberry Finn",
            "Huckleberry Finn",
            "Mississippi writings",
            "The adventures of Tom Sawyer",
            "The adventures of Tom Sawyer and the adventures of Huckleberry Finn",
            "Adventures of Huckleberry Finn : a case study in critical controversy",
            "Adventures of Huckleberry Finn : an authoritative text, contexts and sources, criticism",
            "Tom Sawyer and Huckleberry Finn",
            "Mark Twain : four complete novels.",
            "The annotated Huckleberry Finn : Adventures of Huckleberry Finn (Tom Sawyer's comrade)",
            "The annotated Huckleberry Finn : Adventures of Huckleberry Finn",
            "Tom Sawyer. Huckleberry Finn.",
        ],
    );

    assert_eq!(
        band(&huck, MatchConfidence::Identical),
        vec!["The adventures of Huckleberry Finn"]
    );
    assert!(band(&huck, MatchConfidence::High).is_empty());
    assert_eq!(
        band(&huck, MatchConfidence::Medium),
        vec![
            "Huckleberry Finn",
            "The adventures of Tom Sawyer",
            "The adventures of Tom Sawyer and the adventures of Huckleberry Finn",
            "The annotated Huckleberry Finn : Adventures of Huckleberry Finn",
            "The annotated Huckleberry Finn : Adventures of Huckleberry Finn (Tom Sawyer's comrade)",
            "Tom Sawyer. Huckleberry Finn.",
        ]
    );
    assert_eq!(
        band(&huck, MatchConfidence::Low),
        vec![
            "Adventures of Huckleberry Finn : a case study in critical controversy",
            "Adventures of Huckleberry Finn : an authoritative text, contexts and sources, criticism",
            "Tom Sawyer and Huckleberry Finn",
        ]
    );
    assert_eq!(
        band(&huck, MatchConfidence::NoMatch),
        vec!["Mark Twain : four complete novels.", "Mississippi writings"]
    );
}

#[test]
fn test_alice_bands() {
    let alice = arrange_by_confidence(
        "Alice's Adventures in Wonderland",
        &[
            "The nursery \"Alice\"",
            "Alice in Wonderland",
            "Alice in Zombieland",
            "Through the looking-glass and what Alice found there",
            "Alice's adventures under ground",
            "Alice in Wonderland &amp; Through the looking glass",
            "Michael Foreman's Alice's adventures in Wonderland",
            "Alice in Wonderland : comprising the two books, Alice's adventures in Wonderland and Through the looking-glass",
        ],
    );

    assert!(band(&alice, MatchConfidence::High).is_empty());
    assert_eq!(
        band(&alice, MatchConfidence::Medium),
        vec![
            "Alice in Wonderland",
            "Alice in Wonderland : comprising the two books, Alice's adventures in Wonderland and Through the looking-glass",
            "Alice's adventures under ground",
            "Michael Foreman's Alice's adventures in Wonderland",
        ]
    );
    assert_eq!(
        band(&alice, MatchConfidence::Low),
        vec![
            "Alice in Wonderland &amp; Through the looking glass",
            "Alice in Zombieland",
        ]
    );
    assert_eq!(
        band(&alice, MatchConfidence::NoMatch),
        vec![
            "The nursery \"Alice\"",
            "Through the looking-glass and what Alice found there",
        ]
    );
}

// === Authors ===

#[test]
fn test_author_similarity_of_empty_lists() {
    assert_eq!(author_similarity(&[], &[]), 1.0);
}

#[test]
fn test_author_similarity_with_shared_coauthor() {
    let a = [Contributor::new("Mark Twain"), Contributor::new("Charles Dudley Warner")];
    let b = [Contributor::new("Twain, Mark")];
    let similarity = author_similarity(&a, &b);
    assert!(similarity > 0.0 && similarity < 1.0, "got {}", similarity);
}

#[test]
fn test_contributor_deserializes_without_aliases() {
    let author: Contributor = serde_json::from_str(r#"{"name": "Lewis Carroll"}"#).unwrap();
    assert_eq!(author, Contributor::new("Lewis Carroll"));
}

// === Property-Based Tests ===

proptest! {
    #[test]
    fn test_histogram_distance_symmetric(
        a in prop::collection::vec("[a-zA-Z ,.:]{0,30}", 0..5),
        b in prop::collection::vec("[a-zA-Z ,.:]{0,30}", 0..5),
    ) {
        prop_assert_eq!(
            histogram_distance(&a, &b, None),
            histogram_distance(&b, &a, None),
            "histogram distance should be symmetric"
        );
    }

    #[test]
    fn test_histogram_distance_bounded(
        a in prop::collection::vec("[a-zA-Z ]{0,30}", 0..5),
        b in prop::collection::vec("[a-zA-Z ]{0,30}", 0..5),
    ) {
        let d = histogram_distance(&a, &b, None);
        prop_assert!((0.0..=1.0).contains(&d), "distance out of range: {}", d);
    }

    #[test]
    fn test_identical_titles_always_identical(title in "[a-zA-Z0-9 !?,.'-]{0,40}") {
        prop_assert_eq!(title_similarity(&title, &title), 1.0);
    }

    #[test]
    fn test_reordered_words_are_identical(words in prop::collection::vec("[a-z]{1,8}", 1..6)) {
        let forward = words.join(" ");
        let backward: Vec<&str> = words.iter().rev().map(String::as_str).collect();
        prop_assert_eq!(title_similarity(&forward, &backward.join(", ")), 1.0);
    }
}
