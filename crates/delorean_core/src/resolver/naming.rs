//! Symbolic name to resource file name transform.

/// Returns the last segment of a namespaced symbolic name.
///
/// Segments are separated by `::`, `\` or `.`. Returns `None` when the name
/// has no non-empty trailing segment (e.g. `delorean::`).
pub fn last_segment(name: &str) -> Option<&str> {
    let segment = name.rsplit(|c| c == ':' || c == '\\' || c == '.').next()?;
    if segment.is_empty() {
        None
    } else {
        Some(segment)
    }
}

/// Converts a component segment into its hyphenated lowercase stem.
///
/// `SomeFeature_Name` becomes `somefeature-name`.
pub fn hyphenate(segment: &str) -> String {
    segment.replace('_', "-").to_ascii_lowercase()
}

/// Computes the resource file name for `name`: `<tag><stem>.<extension>`.
pub fn resource_file_name(name: &str, tag: &str, extension: &str) -> Option<String> {
    let stem = hyphenate(last_segment(name)?);
    Some(format!("{tag}{stem}.{extension}"))
}

#[cfg(test)]
mod tests {
    use super::{hyphenate, last_segment, resource_file_name};

    #[test]
    fn takes_last_segment_for_every_separator() {
        assert_eq!(last_segment("delorean::Cursors"), Some("Cursors"));
        assert_eq!(last_segment("aubreypwd\\Delorean\\Timeline"), Some("Timeline"));
        assert_eq!(last_segment("delorean.shared"), Some("shared"));
        assert_eq!(last_segment("Shared"), Some("Shared"));
        assert_eq!(last_segment("delorean::"), None);
    }

    #[test]
    fn hyphenates_underscores_and_lowercases() {
        assert_eq!(hyphenate("SomeFeature_Name"), "somefeature-name");
        assert_eq!(hyphenate("Admin_Bar_Menu"), "admin-bar-menu");
    }

    #[test]
    fn keeps_whitespace_inside_the_segment() {
        assert_eq!(last_segment("delorean:: Foo"), Some(" Foo"));
        assert_eq!(
            resource_file_name("delorean:: Foo", "class-", "inc").as_deref(),
            Some("class- foo.inc")
        );
    }

    #[test]
    fn builds_tagged_file_name() {
        assert_eq!(
            resource_file_name("delorean::SomeFeature_Name", "class-", "inc").as_deref(),
            Some("class-somefeature-name.inc")
        );
        assert_eq!(resource_file_name("delorean::", "class-", "inc"), None);
    }
}
