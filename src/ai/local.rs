use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::error::CatalogError;

/// Topic label for a canned strategist response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Default,
    Integration,
    Ai,
    Leadership,
    Strategy,
    Operations,
    Data,
}

impl Topic {
    pub const ALL: [Topic; 7] = [
        Topic::Default,
        Topic::Integration,
        Topic::Ai,
        Topic::Leadership,
        Topic::Strategy,
        Topic::Operations,
        Topic::Data,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Topic::Default => "default",
            Topic::Integration => "integration",
            Topic::Ai => "ai",
            Topic::Leadership => "leadership",
            Topic::Strategy => "strategy",
            Topic::Operations => "operations",
            Topic::Data => "data",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A topic and the substrings that select it
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub topic: Topic,
    pub keywords: &'static [&'static str],
}

/// Matching priority, first hit wins. Keywords are lowercase and matched as raw substrings.
pub const KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule {
        topic: Topic::Integration,
        keywords: &["integrat", "roadmap", "pipeline", "connect", "unif"],
    },
    KeywordRule {
        topic: Topic::Operations,
        keywords: &[
            "supply chain",
            "manufactur",
            "operation",
            "capacity",
            "throughput",
            "workflow",
            "process",
            "efficien",
        ],
    },
    KeywordRule {
        topic: Topic::Data,
        keywords: &["data", "kpi", "report", "metric", "analytic", "dashboard", "visibility"],
    },
    KeywordRule {
        topic: Topic::Leadership,
        keywords: &["leader", "executive", "board", "ceo", "culture", "talent", "governance"],
    },
    KeywordRule {
        topic: Topic::Strategy,
        keywords: &["strateg", "vision", "competitive", "growth", "market", "transform"],
    },
    KeywordRule {
        topic: Topic::Ai,
        keywords: &[
            "ai",
            "artificial intelligence",
            "machine learning",
            "llm",
            "agent",
            "automat",
            "pilot",
        ],
    },
];

pub const CALL_TO_ACTION: &str =
    " Request a briefing and a senior strategist will map this to your operating model.";

const DEFAULT_RESPONSE: &str = "The divide between AI potential and realized value sits in the operating model, not the technology. Specify the friction point: where decisions stall, where data fragments, or where pilots fail to scale. We will architect the path from intent to execution.";

const TOPIC_RESPONSES: &[(Topic, &str)] = &[
    (
        Topic::Integration,
        "Integration fails when systems are connected before decisions are. Start by mapping the decision pathways your pilot is meant to accelerate, then sequence the roadmap around them: one unified data layer, one governed model pipeline, one accountable owner per workflow. Connect the stack to the operating rhythm, not the other way around.",
    ),
    (
        Topic::Ai,
        "AI pilots stall because they are scoped as experiments, not as changes to how work gets done. Pick one execution-critical decision, embed intelligence directly into that workflow, and keep human judgment as the accountable lever. Measure the pilot on cycle time and margin, not on model accuracy.",
    ),
    (
        Topic::Leadership,
        "Leadership intent and technical execution drift apart without a synthesis layer. Give your executive team a single view of where AI is deployed, who owns each outcome, and which decisions remain human. Governance is not a brake; it is what lets you scale with confidence.",
    ),
    (
        Topic::Strategy,
        "Strategy becomes advantage only when it changes the operating model. Identify the two or three decisions that most constrain growth, redesign them for an AI-augmented workforce, and fund the transformation from the capacity it releases. Restraint in scope is what creates momentum.",
    ),
    (
        Topic::Operations,
        "Operational leverage comes from the hidden capacity already inside your footprint. Predictive scheduling tied to real-time telemetry and demand signals lets lines rebalance for throughput rather than utilization. Comparable manufacturers have unlocked double-digit capacity gains without adding headcount.",
    ),
    (
        Topic::Data,
        "Fragmented reporting delays every decision it feeds. Architect a unified KPI layer across your business units, automate the variance analysis, and move leadership from retroactive monthly reviews to proactive weekly steering. Visibility is the precondition for every other AI investment.",
    ),
];

/// Immutable topic to paragraph mapping
#[derive(Debug, Clone)]
pub struct ResponseCatalog {
    entries: HashMap<Topic, String>,
}

impl ResponseCatalog {
    /// Builds the site's catalog. Topic paragraphs carry the call-to-action suffix.
    pub fn standard() -> Self {
        let mut entries = HashMap::with_capacity(Topic::ALL.len());
        entries.insert(Topic::Default, DEFAULT_RESPONSE.to_string());
        for (topic, body) in TOPIC_RESPONSES {
            entries.insert(*topic, format!("{}{}", body, CALL_TO_ACTION));
        }
        Self { entries }
    }

    pub fn from_entries(entries: HashMap<Topic, String>) -> Self {
        Self { entries }
    }

    pub fn get(&self, topic: Topic) -> Option<&str> {
        self.entries.get(&topic).map(String::as_str)
    }

    /// Checks that `default` and every topic referenced by `rules` have a non-empty paragraph.
    pub fn validate(&self, rules: &[KeywordRule]) -> Result<(), CatalogError> {
        let topics = std::iter::once(Topic::Default).chain(rules.iter().map(|r| r.topic));
        for topic in topics {
            match self.get(topic) {
                None => return Err(CatalogError::MissingEntry(topic.label())),
                Some(text) if text.trim().is_empty() => {
                    return Err(CatalogError::EmptyEntry(topic.label()))
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Returns the stored paragraph for the topic `prompt` selects under `rules`.
    ///
    /// Falls back to `default` when the topic has no entry; a validated catalog never does.
    pub fn respond(&self, rules: &[KeywordRule], prompt: &str) -> &str {
        let topic = classify_with(rules, prompt);
        self.get(topic)
            .or_else(|| self.get(Topic::Default))
            .unwrap_or(DEFAULT_RESPONSE)
    }
}

/// Picks the first topic in `rules` with a keyword contained in the lowercased prompt.
pub fn classify_with(rules: &[KeywordRule], prompt: &str) -> Topic {
    let input_lower = prompt.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.keywords.iter().any(|&kw| input_lower.contains(kw)))
        .map(|rule| rule.topic)
        .unwrap_or(Topic::Default)
}

pub fn classify(prompt: &str) -> Topic {
    classify_with(KEYWORD_RULES, prompt)
}

static CATALOG: OnceLock<ResponseCatalog> = OnceLock::new();

pub fn catalog() -> &'static ResponseCatalog {
    CATALOG.get_or_init(ResponseCatalog::standard)
}

/// Canned strategist answer for when the model can't be reached
pub fn select_response(prompt: &str) -> &'static str {
    catalog().respond(KEYWORD_RULES, prompt)
}
