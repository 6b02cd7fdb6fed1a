use super::keyword::KeywordResult;
use super::random::RandomSource;

/// Number of records in one batch
pub const BATCH_SIZE: usize = 20;

/// Suffixes appended to the query, selected by batch position.
/// "strategies" appears twice (positions 7 and 14).
pub const SUFFIX_TEMPLATES: [&str; 20] = [
    "tool",
    "guide",
    "tips",
    "tricks",
    "hacks",
    "ideas",
    "examples",
    "strategies",
    "solutions",
    "how to",
    "tutorial",
    "best practices",
    "checklist",
    "resources",
    "strategies",
    "approaches",
    "insights",
    "reviews",
    "recommendations",
    "FAQS",
];

/// Generate a full batch for `query`
///
/// The query is used verbatim as the phrase base; callers trim it first.
/// Each record draws its search volume before its competition level.
pub fn generate_batch<S: RandomSource + ?Sized>(query: &str, source: &mut S) -> Vec<KeywordResult> {
    (0..BATCH_SIZE)
        .map(|i| KeywordResult {
            id: i as u32 + 1,
            phrase: format!("{} {}", query, SUFFIX_TEMPLATES[i % SUFFIX_TEMPLATES.len()]),
            search_volume: source.search_volume(),
            competition_level: source.competition(),
        })
        .collect()
}

#[cfg(test)]
#[path = "generator_tests.rs"]
mod generator_tests;
