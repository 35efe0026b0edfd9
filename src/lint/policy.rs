//! Rule-set configuration.
//!
//! The built-in lists live in process-wide statics. [`RulePolicy`] bundles
//! them so that a registry can be built from a modified rule set, either
//! from the linter config file or in tests.

use std::borrow::Cow;

/// Top-level fields every lesson must define.
pub static REQUIRED_FIELDS: &[&str] = &[
    "lessonId",
    "version",
    "title",
    "steps",
    "graphemeConstraints",
];

/// Step types a lesson may open with.
pub static OPENING_STEP_TYPES: &[&str] = &["introduction", "review"];

/// Step type that ends a lesson.
pub const COMPLETION_STEP_TYPE: &str = "completion";

/// Why a keyword is forbidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordGroup {
    /// Points, badges, rewards and similar game mechanics.
    Gamification,
    /// Excitement, urgency and time pressure.
    Pressure,
    /// Ranking and competing against others.
    Comparison,
    /// Added through the linter config file.
    Custom,
}

impl KeywordGroup {
    /// Rewording hint shown with findings for this group.
    pub fn suggestion(&self) -> &'static str {
        match self {
            KeywordGroup::Gamification => "Remove game mechanics; describe what the learner did",
            KeywordGroup::Pressure => "Use a steady, unhurried tone",
            KeywordGroup::Comparison => "Avoid comparing the learner with others",
            KeywordGroup::Custom => "Rephrase to follow the calm design guidelines",
        }
    }
}

/// A forbidden keyword, matched case-insensitively as a substring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForbiddenKeyword {
    /// The keyword as written in reports.
    pub keyword: Cow<'static, str>,
    /// Policy group.
    pub group: KeywordGroup,
}

impl ForbiddenKeyword {
    /// A built-in keyword.
    pub const fn builtin(keyword: &'static str, group: KeywordGroup) -> Self {
        Self {
            keyword: Cow::Borrowed(keyword),
            group,
        }
    }

    /// A keyword added at runtime.
    pub fn custom(keyword: impl Into<String>) -> Self {
        Self {
            keyword: Cow::Owned(keyword.into()),
            group: KeywordGroup::Custom,
        }
    }
}

/// Built-in calm design keyword list. `" win "` keeps its padding so that
/// words like "window" do not match.
pub static FORBIDDEN_KEYWORDS: &[ForbiddenKeyword] = {
    use KeywordGroup::{Comparison, Gamification, Pressure};
    &[
        ForbiddenKeyword::builtin("points", Gamification),
        ForbiddenKeyword::builtin("score", Gamification),
        ForbiddenKeyword::builtin("level up", Gamification),
        ForbiddenKeyword::builtin("unlock", Gamification),
        ForbiddenKeyword::builtin("achievement", Gamification),
        ForbiddenKeyword::builtin("badge", Gamification),
        ForbiddenKeyword::builtin("reward", Gamification),
        ForbiddenKeyword::builtin("coins", Gamification),
        ForbiddenKeyword::builtin("stars", Gamification),
        ForbiddenKeyword::builtin("streak", Gamification),
        ForbiddenKeyword::builtin("bonus", Gamification),
        ForbiddenKeyword::builtin("prize", Gamification),
        ForbiddenKeyword::builtin(" win ", Gamification),
        ForbiddenKeyword::builtin("winner", Gamification),
        ForbiddenKeyword::builtin("champion", Gamification),
        ForbiddenKeyword::builtin("amazing", Pressure),
        ForbiddenKeyword::builtin("awesome", Pressure),
        ForbiddenKeyword::builtin("fantastic", Pressure),
        ForbiddenKeyword::builtin("incredible", Pressure),
        ForbiddenKeyword::builtin("wow", Pressure),
        ForbiddenKeyword::builtin("hurry", Pressure),
        ForbiddenKeyword::builtin("quick", Pressure),
        ForbiddenKeyword::builtin("fast", Pressure),
        ForbiddenKeyword::builtin("time's up", Pressure),
        ForbiddenKeyword::builtin("don't miss", Pressure),
        ForbiddenKeyword::builtin("limited time", Pressure),
        ForbiddenKeyword::builtin("special offer", Pressure),
        ForbiddenKeyword::builtin("best", Comparison),
        ForbiddenKeyword::builtin("better than", Comparison),
        ForbiddenKeyword::builtin("beat", Comparison),
        ForbiddenKeyword::builtin("compete", Comparison),
        ForbiddenKeyword::builtin("leaderboard", Comparison),
        ForbiddenKeyword::builtin("rank", Comparison),
    ]
};

/// The configurable parts of the built-in rule set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulePolicy {
    /// Top-level fields checked by the required-fields rule.
    pub required_fields: Vec<Cow<'static, str>>,
    /// Keywords checked by the calm design rule, in reporting order.
    pub forbidden_keywords: Vec<ForbiddenKeyword>,
    /// Step types accepted as the first step.
    pub opening_step_types: Vec<Cow<'static, str>>,
    /// Step type that must appear somewhere in the lesson.
    pub completion_step_type: Cow<'static, str>,
}

impl Default for RulePolicy {
    fn default() -> Self {
        Self {
            required_fields: REQUIRED_FIELDS.iter().map(|f| Cow::Borrowed(*f)).collect(),
            forbidden_keywords: FORBIDDEN_KEYWORDS.to_vec(),
            opening_step_types: OPENING_STEP_TYPES
                .iter()
                .map(|t| Cow::Borrowed(*t))
                .collect(),
            completion_step_type: Cow::Borrowed(COMPLETION_STEP_TYPE),
        }
    }
}

impl RulePolicy {
    /// Append keywords after the built-in ones, skipping duplicates.
    pub fn with_extra_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for keyword in keywords {
            let keyword = keyword.into();
            if keyword.is_empty() {
                continue;
            }
            let exists = self
                .forbidden_keywords
                .iter()
                .any(|k| k.keyword.eq_ignore_ascii_case(&keyword));
            if !exists {
                self.forbidden_keywords.push(ForbiddenKeyword::custom(keyword));
            }
        }
        self
    }
}
