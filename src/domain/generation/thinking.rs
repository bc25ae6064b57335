use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// How much internal reasoning the model may spend before answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThinkingBudget {
    /// Explicit token budget.
    Tokens(u32),
    /// Let the service pick the budget.
    Dynamic,
    /// Thinking disabled.
    Off,
}

impl ThinkingBudget {
    /// Budget value understood by the API: `-1` for dynamic, `0` for off.
    pub fn as_api_value(&self) -> i64 {
        match self {
            ThinkingBudget::Tokens(tokens) => i64::from(*tokens),
            ThinkingBudget::Dynamic => -1,
            ThinkingBudget::Off => 0,
        }
    }
}

impl FromStr for ThinkingBudget {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            return raw
                .parse::<u32>()
                .map(ThinkingBudget::Tokens)
                .map_err(|_| AppError::InvalidThinkingMode(raw.to_string()));
        }

        match raw.to_ascii_lowercase().as_str() {
            "off" => Ok(ThinkingBudget::Off),
            "dynamic" => Ok(ThinkingBudget::Dynamic),
            _ => Err(AppError::InvalidThinkingMode(raw.to_string())),
        }
    }
}

impl fmt::Display for ThinkingBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThinkingBudget::Tokens(tokens) => write!(f, "{}", tokens),
            ThinkingBudget::Dynamic => f.write_str("dynamic"),
            ThinkingBudget::Off => f.write_str("off"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn off_maps_to_zero_budget() {
        let budget: ThinkingBudget = "off".parse().unwrap();
        assert_eq!(budget, ThinkingBudget::Off);
        assert_eq!(budget.as_api_value(), 0);
    }

    #[test]
    fn dynamic_maps_to_open_ended_budget() {
        let budget: ThinkingBudget = "dynamic".parse().unwrap();
        assert_eq!(budget, ThinkingBudget::Dynamic);
        assert_eq!(budget.as_api_value(), -1);
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!("OFF".parse::<ThinkingBudget>().unwrap(), ThinkingBudget::Off);
        assert_eq!("Dynamic".parse::<ThinkingBudget>().unwrap(), ThinkingBudget::Dynamic);
    }

    #[test]
    fn integer_maps_to_token_budget() {
        let budget: ThinkingBudget = "3".parse().unwrap();
        assert_eq!(budget, ThinkingBudget::Tokens(3));
        assert_eq!(budget.as_api_value(), 3);
    }

    #[test]
    fn rejects_unknown_tokens() {
        for raw in ["banana", "-1", "1.5", " 3", "auto", "99999999999"] {
            let err = raw.parse::<ThinkingBudget>().unwrap_err();
            assert!(matches!(err, AppError::InvalidThinkingMode(ref v) if v == raw), "{}", raw);
        }
    }

    proptest! {
        #[test]
        fn any_u32_is_a_token_budget(tokens in any::<u32>()) {
            let budget: ThinkingBudget = tokens.to_string().parse().unwrap();
            prop_assert_eq!(budget, ThinkingBudget::Tokens(tokens));
            prop_assert_eq!(budget.as_api_value(), i64::from(tokens));
        }

        #[test]
        fn alphabetic_words_other_than_keywords_are_rejected(word in "[a-z]{1,12}") {
            prop_assume!(word != "off" && word != "dynamic");
            prop_assert!(word.parse::<ThinkingBudget>().is_err());
        }
    }
}
