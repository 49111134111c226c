//! Placeholder substitution for hook and script copy.
//!
//! Templates reference tokens as `{name}`. Every recognized token is resolved
//! against a [`TokenContext`] in a single left-to-right pass, so resolved text is
//! never re-scanned and the order tokens appear in does not matter. Unknown
//! tokens are copied through untouched.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    lexicon::{derive_outcome, derive_pain_point, derive_timeframe},
    types::{FormatStyle, PlanConfig},
};

lazy_static! {
    static ref LEADING_ARTICLE: Regex = Regex::new(r"(?i)^(the|a|an)\s").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Audience,
    PainPoint,
    PainPointDescription,
    TopicFragment,
    Outcome,
    Timeframe,
    UndesiredAction,
    FormatStyle,
    UnexpectedAngle,
    AudienceDescriptor,
    DreamState,
    Steps,
    DesiredOutcome,
}

impl Token {
    pub const ALL: [Token; 13] = [
        Token::Audience,
        Token::PainPoint,
        Token::PainPointDescription,
        Token::TopicFragment,
        Token::Outcome,
        Token::Timeframe,
        Token::UndesiredAction,
        Token::FormatStyle,
        Token::UnexpectedAngle,
        Token::AudienceDescriptor,
        Token::DreamState,
        Token::Steps,
        Token::DesiredOutcome,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Token::Audience => "audience",
            Token::PainPoint => "pain_point",
            Token::PainPointDescription => "pain_point_description",
            Token::TopicFragment => "topic_fragment",
            Token::Outcome => "outcome",
            Token::Timeframe => "timeframe",
            Token::UndesiredAction => "undesired_action",
            Token::FormatStyle => "format_style",
            Token::UnexpectedAngle => "unexpected_angle",
            Token::AudienceDescriptor => "audience_descriptor",
            Token::DreamState => "dream_state",
            Token::Steps => "steps",
            Token::DesiredOutcome => "desired_outcome",
        }
    }

    pub fn from_name(name: &str) -> Option<Token> {
        Self::ALL.into_iter().find(|token| token.name() == name)
    }
}

/// Lowercased topic without a leading "the", "a" or "an".
pub fn topic_fragment(topic: &str) -> String {
    LEADING_ARTICLE.replace(&topic.to_lowercase(), "").into_owned()
}

pub fn unexpected_angle(format_style: FormatStyle) -> &'static str {
    match format_style {
        FormatStyle::Tutorial => "step you skipped",
        FormatStyle::Listicle => "list that actually delivers",
        _ => "loophole no one's talking about",
    }
}

/// Number of micro-steps a reel of this length can promise.
pub fn step_count(duration: u32) -> u32 {
    ((duration as f64 / 8.0).round() as u32).clamp(3, 6)
}

/// Values derived once per brief and shared by every template fill.
#[derive(Debug, Clone)]
pub struct TokenContext<'a> {
    config: &'a PlanConfig,
    pain_point: String,
    outcome: String,
    timeframe: &'static str,
    topic_fragment: String,
    unexpected_angle: &'static str,
    steps: u32,
}

impl<'a> TokenContext<'a> {
    pub fn new(config: &'a PlanConfig) -> Self {
        Self {
            config,
            pain_point: derive_pain_point(&config.topic, &config.audience),
            outcome: derive_outcome(config.goal, &config.topic),
            timeframe: derive_timeframe(config.duration),
            topic_fragment: topic_fragment(&config.topic),
            unexpected_angle: unexpected_angle(config.format_style),
            steps: step_count(config.duration),
        }
    }

    pub fn with_unexpected_angle(mut self, angle: &'static str) -> Self {
        self.unexpected_angle = angle;
        self
    }

    pub fn resolve(&self, token: Token) -> Cow<'_, str> {
        match token {
            Token::Audience | Token::AudienceDescriptor => {
                Cow::Borrowed(self.config.audience.as_str())
            }
            Token::PainPoint | Token::PainPointDescription => {
                Cow::Borrowed(self.pain_point.as_str())
            }
            Token::TopicFragment => Cow::Borrowed(self.topic_fragment.as_str()),
            Token::Outcome | Token::DreamState | Token::DesiredOutcome => {
                Cow::Borrowed(self.outcome.as_str())
            }
            Token::Timeframe => Cow::Borrowed(self.timeframe),
            Token::UndesiredAction => Cow::Owned(format!(
                "making {} harder than it needs to be",
                self.config.topic.to_lowercase()
            )),
            Token::FormatStyle => Cow::Borrowed(self.config.format_style.as_str()),
            Token::UnexpectedAngle => Cow::Borrowed(self.unexpected_angle),
            Token::Steps => Cow::Owned(self.steps.to_string()),
        }
    }

    pub fn fill(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let token = after
                .find('}')
                .and_then(|close| Token::from_name(&after[..close]).map(|t| (t, close)));

            match token {
                Some((token, close)) => {
                    out.push_str(&self.resolve(token));
                    rest = &after[close + 1..];
                }
                None => {
                    out.push('{');
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        out
    }
}
