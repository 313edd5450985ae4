//! Splitting the remaining tokens into first, middle, and last name.

use std::collections::HashSet;

use crate::constants::PARTICLE_SET;

use super::initials::group_initials;
use super::tokenize::normalize_token;

/// First/middle/last split of the tokens left after prefix and suffix
/// extraction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NameTokens {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
}

fn is_particle(token: &str, custom: Option<&HashSet<String>>) -> bool {
    let normalized = normalize_token(token);
    match custom {
        Some(set) => set.contains(&normalized),
        None => PARTICLE_SET.contains(normalized.as_str()),
    }
}

/// Assigns the remaining tokens to first, middle, and last name, folding
/// lowercase joining particles into the last name.
///
/// Zero tokens produce no fields; one token is a first name only; two tokens
/// are first + last (a particle cannot sit between them at that length). For
/// three or more, consecutive initials are grouped first, then the last-name
/// start is pushed leftward from the second-to-last grouped token across any
/// particles — never past index 1, so the first token always stays the first
/// name. Grouped tokens strictly between the first name and the last-name
/// start become the middle name.
///
/// # Examples
///
/// ```
/// use nameparse::parser::split_name_tokens;
///
/// let tokens: Vec<String> = ["Vincent", "Willem", "van", "Gogh"]
///     .iter()
///     .map(|t| t.to_string())
///     .collect();
/// let names = split_name_tokens(&tokens, None);
/// assert_eq!(names.first_name.as_deref(), Some("Vincent"));
/// assert_eq!(names.middle_name.as_deref(), Some("Willem"));
/// assert_eq!(names.last_name.as_deref(), Some("van Gogh"));
/// ```
pub fn split_name_tokens(tokens: &[String], particles: Option<&HashSet<String>>) -> NameTokens {
    match tokens.len() {
        0 => return NameTokens::default(),
        1 => {
            return NameTokens {
                first_name: Some(tokens[0].clone()),
                ..Default::default()
            };
        }
        2 => {
            return NameTokens {
                first_name: Some(tokens[0].clone()),
                last_name: Some(tokens[1].clone()),
                ..Default::default()
            };
        }
        _ => {}
    }

    let grouped = group_initials(tokens);

    // The last name starts at the final grouped token, extended leftward over
    // particles. The scan never reaches index 0: the first token is always
    // the first name, even if it looks like a particle.
    let mut last_name_start = grouped.len() - 1;
    for i in (1..grouped.len() - 1).rev() {
        if is_particle(&grouped[i], particles) {
            last_name_start = i;
        } else {
            break;
        }
    }

    let middle_name = if last_name_start > 1 {
        Some(grouped[1..last_name_start].join(" "))
    } else {
        None
    };

    NameTokens {
        first_name: Some(grouped[0].clone()),
        middle_name,
        last_name: Some(grouped[last_name_start..].join(" ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_zero_tokens() {
        assert_eq!(split_name_tokens(&[], None), NameTokens::default());
    }

    #[test]
    fn test_single_token_is_first_name_only() {
        let names = split_name_tokens(&toks(&["Madonna"]), None);
        assert_eq!(names.first_name.as_deref(), Some("Madonna"));
        assert!(names.middle_name.is_none());
        assert!(names.last_name.is_none());
    }

    #[test]
    fn test_two_tokens_are_first_and_last() {
        let names = split_name_tokens(&toks(&["John", "Smith"]), None);
        assert_eq!(names.first_name.as_deref(), Some("John"));
        assert!(names.middle_name.is_none());
        assert_eq!(names.last_name.as_deref(), Some("Smith"));
    }

    #[test]
    fn test_two_tokens_ignore_particles() {
        // "van Gogh" alone: "van" must stay the first name, there is nothing
        // else it could be.
        let names = split_name_tokens(&toks(&["van", "Gogh"]), None);
        assert_eq!(names.first_name.as_deref(), Some("van"));
        assert_eq!(names.last_name.as_deref(), Some("Gogh"));
    }

    #[test]
    fn test_three_tokens_middle_name() {
        let names = split_name_tokens(&toks(&["John", "David", "Smith"]), None);
        assert_eq!(names.first_name.as_deref(), Some("John"));
        assert_eq!(names.middle_name.as_deref(), Some("David"));
        assert_eq!(names.last_name.as_deref(), Some("Smith"));
    }

    #[test]
    fn test_particle_folds_into_last_name() {
        let names = split_name_tokens(&toks(&["Ludwig", "van", "Beethoven"]), None);
        assert_eq!(names.first_name.as_deref(), Some("Ludwig"));
        assert!(names.middle_name.is_none());
        assert_eq!(names.last_name.as_deref(), Some("van Beethoven"));
    }

    #[test]
    fn test_stacked_particles_fold_into_last_name() {
        let names = split_name_tokens(&toks(&["Jan", "van", "der", "Berg"]), None);
        assert_eq!(names.first_name.as_deref(), Some("Jan"));
        assert!(names.middle_name.is_none());
        assert_eq!(names.last_name.as_deref(), Some("van der Berg"));
    }

    #[test]
    fn test_middle_name_before_particle() {
        let names = split_name_tokens(&toks(&["Vincent", "Willem", "van", "Gogh"]), None);
        assert_eq!(names.first_name.as_deref(), Some("Vincent"));
        assert_eq!(names.middle_name.as_deref(), Some("Willem"));
        assert_eq!(names.last_name.as_deref(), Some("van Gogh"));
    }

    #[test]
    fn test_particle_scan_never_reaches_first_token() {
        // Every interior token is a particle; index 0 still stays first name.
        let names = split_name_tokens(&toks(&["De", "la", "de", "Cruz"]), None);
        assert_eq!(names.first_name.as_deref(), Some("De"));
        assert!(names.middle_name.is_none());
        assert_eq!(names.last_name.as_deref(), Some("la de Cruz"));
    }

    #[test]
    fn test_particle_matching_is_case_insensitive() {
        let names = split_name_tokens(&toks(&["Ludwig", "VAN", "Beethoven"]), None);
        assert_eq!(names.last_name.as_deref(), Some("VAN Beethoven"));
    }

    #[test]
    fn test_initials_group_before_the_split() {
        let names = split_name_tokens(&toks(&["T.", "S.", "Eliot"]), None);
        assert_eq!(names.first_name.as_deref(), Some("T. S."));
        assert!(names.middle_name.is_none());
        assert_eq!(names.last_name.as_deref(), Some("Eliot"));
    }

    #[test]
    fn test_middle_initial_stays_middle() {
        let names = split_name_tokens(&toks(&["John", "F.", "Kennedy"]), None);
        assert_eq!(names.first_name.as_deref(), Some("John"));
        assert_eq!(names.middle_name.as_deref(), Some("F."));
        assert_eq!(names.last_name.as_deref(), Some("Kennedy"));
    }

    #[test]
    fn test_all_initials_degenerate_case() {
        // Everything groups into one token, which becomes both first and
        // last name. Odd, but it is the established behavior.
        let names = split_name_tokens(&toks(&["J.", "R.", "R."]), None);
        assert_eq!(names.first_name.as_deref(), Some("J. R. R."));
        assert!(names.middle_name.is_none());
        assert_eq!(names.last_name.as_deref(), Some("J. R. R."));
    }

    #[test]
    fn test_multiple_middle_names() {
        let names =
            split_name_tokens(&toks(&["John", "Paul", "George", "Ringo", "Starr"]), None);
        assert_eq!(names.first_name.as_deref(), Some("John"));
        assert_eq!(names.middle_name.as_deref(), Some("Paul George Ringo"));
        assert_eq!(names.last_name.as_deref(), Some("Starr"));
    }

    #[test]
    fn test_custom_particle_set_replaces_default() {
        let custom: HashSet<String> = ["zu".to_string()].into();
        let names = split_name_tokens(&toks(&["Karl", "zu", "Guttenberg"]), Some(&custom));
        assert_eq!(names.last_name.as_deref(), Some("zu Guttenberg"));

        // "van" is no longer a particle under the custom set.
        let names = split_name_tokens(&toks(&["Ludwig", "van", "Beethoven"]), Some(&custom));
        assert_eq!(names.middle_name.as_deref(), Some("van"));
        assert_eq!(names.last_name.as_deref(), Some("Beethoven"));
    }
}
