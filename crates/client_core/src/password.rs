//! Password strength scoring for the registration form.

use serde::Serialize;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Password length in UTF-16 code units, so characters outside the Basic
/// Multilingual Plane count twice.
pub fn password_len(password: &str) -> usize {
    password.encode_utf16().count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthRule {
    MinLength,
    HasUpper,
    HasDigit,
    HasSymbol,
}

impl StrengthRule {
    pub const ALL: [StrengthRule; 4] = [
        StrengthRule::MinLength,
        StrengthRule::HasUpper,
        StrengthRule::HasDigit,
        StrengthRule::HasSymbol,
    ];

    pub fn is_satisfied_by(self, password: &str) -> bool {
        match self {
            Self::MinLength => password_len(password) >= MIN_PASSWORD_LEN,
            Self::HasUpper => password.chars().any(|c| c.is_ascii_uppercase()),
            Self::HasDigit => password.chars().any(|c| c.is_ascii_digit()),
            Self::HasSymbol => password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::MinLength => "At least 8 characters",
            Self::HasUpper => "At least 1 uppercase letter",
            Self::HasDigit => "At least 1 number",
            Self::HasSymbol => "At least 1 special character",
        }
    }

    fn bit(self) -> u8 {
        match self {
            Self::MinLength => 1,
            Self::HasUpper => 1 << 1,
            Self::HasDigit => 1 << 2,
            Self::HasSymbol => 1 << 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuleSet(u8);

impl RuleSet {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, rule: StrengthRule) {
        self.0 |= rule.bit();
    }

    pub fn contains(self, rule: StrengthRule) -> bool {
        self.0 & rule.bit() != 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = StrengthRule> {
        StrengthRule::ALL
            .into_iter()
            .filter(move |rule| self.contains(*rule))
    }
}

impl FromIterator<StrengthRule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = StrengthRule>>(iter: I) -> Self {
        let mut set = Self::empty();
        for rule in iter {
            set.insert(rule);
        }
        set
    }
}

impl Serialize for RuleSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthLabel {
    None,
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLabel {
    const BY_SCORE: [StrengthLabel; 5] = [
        StrengthLabel::None,
        StrengthLabel::Weak,
        StrengthLabel::Fair,
        StrengthLabel::Good,
        StrengthLabel::Strong,
    ];

    pub fn for_score(score: u8) -> Self {
        Self::BY_SCORE
            .get(usize::from(score))
            .copied()
            .unwrap_or(StrengthLabel::Strong)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Strong => "Strong",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PasswordStrength {
    pub score: u8,
    pub label: StrengthLabel,
    /// Every rule the password satisfies, independent of which scoring branch applied.
    pub satisfied: RuleSet,
}

impl PasswordStrength {
    pub const MAX_SCORE: u8 = 4;

    /// Rows for the checklist under the password field.
    pub fn checklist(&self) -> [(StrengthRule, bool); 4] {
        StrengthRule::ALL.map(|rule| (rule, self.satisfied.contains(rule)))
    }
}

/// Scores a password.
///
/// Short passwords are pinned to `Weak` before any rule counting happens, so
/// seven characters with every other rule met still score 1. From eight
/// characters on, the score is the number of satisfied rules.
pub fn evaluate(password: &str) -> PasswordStrength {
    let satisfied: RuleSet = StrengthRule::ALL
        .into_iter()
        .filter(|rule| rule.is_satisfied_by(password))
        .collect();

    if password.is_empty() {
        return PasswordStrength {
            score: 0,
            label: StrengthLabel::None,
            satisfied,
        };
    }

    if !satisfied.contains(StrengthRule::MinLength) {
        return PasswordStrength {
            score: 1,
            label: StrengthLabel::Weak,
            satisfied,
        };
    }

    let score = satisfied.len() as u8;
    PasswordStrength {
        score,
        label: StrengthLabel::for_score(score),
        satisfied,
    }
}
