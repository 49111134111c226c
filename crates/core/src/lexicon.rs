use crate::types::Goal;

/// Topic keywords with dedicated copy, checked in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicKeyword {
    Content,
    Meal,
    Fitness,
}

impl TopicKeyword {
    const ORDERED: [TopicKeyword; 3] = [
        TopicKeyword::Content,
        TopicKeyword::Meal,
        TopicKeyword::Fitness,
    ];

    fn needle(&self) -> &'static str {
        match self {
            TopicKeyword::Content => "content",
            TopicKeyword::Meal => "meal",
            TopicKeyword::Fitness => "fitness",
        }
    }

    /// First keyword contained in the topic (case-insensitive) wins.
    pub fn detect(topic: &str) -> Option<TopicKeyword> {
        let topic = topic.to_lowercase();
        Self::ORDERED
            .into_iter()
            .find(|keyword| topic.contains(keyword.needle()))
    }
}

pub fn derive_pain_point(topic: &str, audience: &str) -> String {
    if topic.is_empty() || audience.is_empty() {
        return "losing time".to_string();
    }
    match TopicKeyword::detect(topic) {
        Some(TopicKeyword::Content) => "burning hours creating content".to_string(),
        Some(TopicKeyword::Meal) => "spending every evening scrambling dinner".to_string(),
        Some(TopicKeyword::Fitness) => "skipping workouts when schedules collapse".to_string(),
        None => format!("struggling with {}", topic.to_lowercase()),
    }
}

pub fn derive_outcome(goal: Goal, topic: &str) -> String {
    match goal {
        Goal::DriveSaves => format!("having this {} system on standby", topic.to_lowercase()),
        Goal::GrowFollowers => "turning curious scrollers into obsessed followers".to_string(),
        Goal::PromoteProduct => "getting your dream customers to say “take my money”".to_string(),
        Goal::IncreaseWebsiteClicks => "sending traffic straight to your link in bio".to_string(),
    }
}

pub fn derive_timeframe(duration: u32) -> &'static str {
    if duration <= 30 {
        "30 seconds"
    } else if duration <= 45 {
        "45 seconds"
    } else if duration <= 60 {
        "under a minute"
    } else {
        "a minute"
    }
}
