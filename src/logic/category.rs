//! Category binding logic
//!
//! Pure functions for turning the subdirectories of the sorted root into
//! shortcut bindings. Each binding pairs a display label with the directory
//! it copies into and the digit key that triggers it.

/// A sorting destination bound to a digit key
///
/// Built once at startup from the subdirectories of the sorted root.
/// Bindings past the tenth have no shortcut and are reachable only
/// through the category pane listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBinding {
    /// Display label, e.g. "Cats (0)"
    pub label: String,
    /// Directory name under the sorted root, e.g. "cats"
    pub dir_name: String,
    /// Digit key that triggers the copy, if one was assigned
    pub shortcut: Option<char>,
}

/// Build category bindings from directory names
///
/// Assigns digit shortcuts 0 through 9 in listing order. Directory names
/// are title-cased for display; the copy destination keeps the original
/// spelling.
///
/// # Examples
/// ```
/// use sortui::logic::category::build_bindings;
///
/// let bindings = build_bindings(vec!["cats".to_string(), "dogs".to_string()]);
/// assert_eq!(bindings[0].label, "Cats (0)");
/// assert_eq!(bindings[0].dir_name, "cats");
/// assert_eq!(bindings[0].shortcut, Some('0'));
/// assert_eq!(bindings[1].label, "Dogs (1)");
/// ```
pub fn build_bindings(dir_names: Vec<String>) -> Vec<CategoryBinding> {
    dir_names
        .into_iter()
        .enumerate()
        .map(|(i, dir_name)| {
            let shortcut = char::from_digit(i as u32, 10);
            let label = match shortcut {
                Some(key) => format!("{} ({})", title_case(&dir_name), key),
                None => title_case(&dir_name),
            };
            CategoryBinding {
                label,
                dir_name,
                shortcut,
            }
        })
        .collect()
}

/// Look up the binding assigned to a digit key
///
/// # Examples
/// ```
/// use sortui::logic::category::{binding_for_digit, build_bindings};
///
/// let bindings = build_bindings(vec!["cats".to_string()]);
/// assert_eq!(binding_for_digit(&bindings, '0').map(|b| b.dir_name.as_str()), Some("cats"));
/// assert_eq!(binding_for_digit(&bindings, '7'), None);
/// ```
pub fn binding_for_digit(bindings: &[CategoryBinding], digit: char) -> Option<&CategoryBinding> {
    bindings
        .iter()
        .find(|binding| binding.shortcut == Some(digit))
}

/// Title-case a directory name for display
///
/// Uppercases the first letter of each alphabetic run and lowercases the
/// rest, so "my_photos" becomes "My_Photos" and "CATS" becomes "Cats".
///
/// # Examples
/// ```
/// use sortui::logic::category::title_case;
///
/// assert_eq!(title_case("cats"), "Cats");
/// assert_eq!(title_case("old pics"), "Old Pics");
/// assert_eq!(title_case("CATS"), "Cats");
/// ```
pub fn title_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut prev_was_alpha = false;
    for c in name.chars() {
        if c.is_alphabetic() {
            if prev_was_alpha {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            prev_was_alpha = true;
        } else {
            result.push(c);
            prev_was_alpha = false;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_bindings_empty() {
        assert!(build_bindings(Vec::new()).is_empty());
    }

    #[test]
    fn test_build_bindings_assigns_digits_in_order() {
        let bindings = build_bindings(vec![
            "cats".to_string(),
            "dogs".to_string(),
            "misc".to_string(),
        ]);
        assert_eq!(bindings.len(), 3);
        assert_eq!(bindings[0].shortcut, Some('0'));
        assert_eq!(bindings[1].shortcut, Some('1'));
        assert_eq!(bindings[2].shortcut, Some('2'));
        assert_eq!(bindings[2].label, "Misc (2)");
        assert_eq!(bindings[2].dir_name, "misc");
    }

    #[test]
    fn test_build_bindings_keeps_directory_spelling() {
        // The destination directory must keep its on-disk name
        let bindings = build_bindings(vec!["OLD_pics".to_string()]);
        assert_eq!(bindings[0].dir_name, "OLD_pics");
        assert_eq!(bindings[0].label, "Old_Pics (0)");
    }

    #[test]
    fn test_build_bindings_stops_shortcuts_after_ten() {
        // Only ten digit keys exist, the eleventh category gets none
        let names = (0..12).map(|i| format!("cat{}", i)).collect();
        let bindings = build_bindings(names);
        assert_eq!(bindings[9].shortcut, Some('9'));
        assert_eq!(bindings[10].shortcut, None);
        assert_eq!(bindings[10].label, "Cat10");
        assert_eq!(bindings[11].shortcut, None);
    }

    #[test]
    fn test_binding_for_digit_found_and_missing() {
        let bindings = build_bindings(vec!["cats".to_string(), "dogs".to_string()]);
        assert_eq!(
            binding_for_digit(&bindings, '1').map(|b| b.dir_name.as_str()),
            Some("dogs")
        );
        assert_eq!(binding_for_digit(&bindings, '5'), None);
        assert_eq!(binding_for_digit(&[], '0'), None);
    }

    #[test]
    fn test_title_case_variants() {
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("cats"), "Cats");
        assert_eq!(title_case("two words"), "Two Words");
        assert_eq!(title_case("snake_case_name"), "Snake_Case_Name");
        assert_eq!(title_case("123dogs"), "123Dogs");
        assert_eq!(title_case("ALLCAPS"), "Allcaps");
    }
}
