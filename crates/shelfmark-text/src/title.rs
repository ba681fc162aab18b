//! Sort keys for titles

/// Leading articles moved to the end of a sort key
const ARTICLES: &[&str] = &["the", "a", "an"];

/// Build a sort key by moving a leading English article to the end.
///
/// `"The Little Prince"` sorts as `"Little Prince, The"`. Only the first word
/// is examined and the article keeps its original casing. Titles without a
/// leading article come back unchanged.
///
/// ```
/// use shelfmark_text::sort_title_for;
/// assert_eq!(sort_title_for(Some("An Unexpected Journey")).as_deref(), Some("Unexpected Journey, An"));
/// assert_eq!(sort_title_for(Some("Then This Happened")).as_deref(), Some("Then This Happened"));
/// assert_eq!(sort_title_for(None), None);
/// ```
pub fn sort_title_for(title: Option<&str>) -> Option<String> {
    let title = title?;

    let Some((first, rest)) = title.split_once(char::is_whitespace) else {
        return Some(title.to_string());
    };

    let rest = rest.trim_start();
    let is_article = ARTICLES
        .iter()
        .any(|article| first.eq_ignore_ascii_case(article));

    if is_article && !rest.is_empty() {
        Some(format!("{}, {}", rest, first))
    } else {
        Some(title.to_string())
    }
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn sort_title_for_ffi(title: Option<String>) -> Option<String> {
    sort_title_for(title.as_deref())
}
