//! Category display formatting

/// Format the category list joined by commas
///
/// An empty list yields an empty joined string after the heading.
pub fn format_category_list(heading: &str, categories: &[String]) -> String {
    format!("{}: {}\n", heading, categories.join(", "))
}
