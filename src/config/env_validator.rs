//! Validation of enumerated environment values
//!
//! An invalid value never fails the run: the default is kept and a warning
//! (with a typo suggestion when one is close) is returned to the caller.

/// Validator for one enumerated environment variable
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse `value`, or explain why it was rejected.
    pub fn parse<T, F>(&self, value: &str, parser: F) -> Result<T, String>
    where
        F: Fn(&str) -> Option<T>,
    {
        parser(value).ok_or_else(|| self.rejection(value))
    }

    fn rejection(&self, value: &str) -> String {
        let suggestion = self
            .closest(value)
            .map(|s| format!(". Did you mean '{}'?", s))
            .unwrap_or_default();
        format!(
            "Invalid {} value '{}'{} (valid values: {})",
            self.var_name,
            value,
            suggestion,
            self.valid_values.join(", ")
        )
    }

    fn closest(&self, value: &str) -> Option<&'a str> {
        let input = value.trim().to_lowercase();
        self.valid_values
            .iter()
            .map(|v| (*v, levenshtein(&input, v)))
            .filter(|(_, d)| *d > 0 && *d <= 2)
            .min_by_key(|(_, d)| *d)
            .map(|(v, _)| v)
    }
}

/// Edit distance between two ASCII-ish strings, used for typo suggestions
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorMode;

    const COLOR_VALUES: &[&str] = &["auto", "always", "never"];

    #[test]
    fn valid_value_parses() {
        let validator = EnvVarValidator::new("STACKPILOT_COLOR", COLOR_VALUES);
        assert_eq!(
            validator.parse("never", ColorMode::parse),
            Ok(ColorMode::Never)
        );
    }

    #[test]
    fn typo_gets_suggestion() {
        let validator = EnvVarValidator::new("STACKPILOT_COLOR", COLOR_VALUES);
        let message = validator.parse("alwys", ColorMode::parse).unwrap_err();
        assert!(message.contains("Invalid STACKPILOT_COLOR value 'alwys'"));
        assert!(message.contains("Did you mean 'always'?"));
        assert!(message.contains("valid values: auto, always, never"));
    }

    #[test]
    fn far_off_value_has_no_suggestion() {
        let validator = EnvVarValidator::new("STACKPILOT_COLOR", COLOR_VALUES);
        let message = validator.parse("rainbow", ColorMode::parse).unwrap_err();
        assert!(!message.contains("Did you mean"));
    }

    #[test]
    fn levenshtein_distances() {
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", "abc"), 0);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("stack_nme", "stack_name"), 1);
    }
}
