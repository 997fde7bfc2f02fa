//! Learning recommendations
//!
//! Static curated modules keyed by criterion. A general "fundamentals"
//! module is prepended when the overall score is low and several criteria
//! are weak; an "advanced" module is offered when nothing is weak.

use crate::config::FeedbackConfig;
use crate::models::{Criterion, LearningRecommendation, Resource};

struct Module {
    module: &'static str,
    description: &'static str,
    resources: &'static [(&'static str, &'static str)],
}

impl Module {
    fn recommend(&self, criterion: Option<Criterion>) -> LearningRecommendation {
        LearningRecommendation {
            module: self.module.to_string(),
            criterion,
            description: self.description.to_string(),
            resources: self
                .resources
                .iter()
                .map(|(title, kind)| Resource {
                    title: title.to_string(),
                    kind: kind.to_string(),
                })
                .collect(),
        }
    }
}

const FUNDAMENTALS: Module = Module {
    module: "Journalism Fundamentals",
    description: "Core reporting practice: sourcing, verification, structure, and neutral language",
    resources: &[
        ("SPJ Code of Ethics", "guide"),
        ("The Elements of Journalism", "book"),
        ("Inverted Pyramid Basics", "exercise"),
    ],
};

const ADVANCED: Module = Module {
    module: "Advanced Reporting Techniques",
    description: "Investigative methods, data journalism, and long-form narrative",
    resources: &[
        ("Data Journalism Handbook", "handbook"),
        ("Investigative Reporting Methods", "course"),
        ("Long-Form Narrative Structure", "guide"),
    ],
};

fn criterion_module(criterion: Criterion) -> Module {
    match criterion {
        Criterion::Objectivity => Module {
            module: "Neutral Language in News Writing",
            description: "Spotting and replacing loaded words and opinion adverbs",
            resources: &[
                ("Loaded Language Checklist", "checklist"),
                ("Writing Without Adjectives", "exercise"),
            ],
        },
        Criterion::SourceQuality => Module {
            module: "Attribution and Sourcing",
            description: "Finding, naming, and qualifying sources; when anonymity is justified",
            resources: &[
                ("Attribution Style Guide", "guide"),
                ("Verification Handbook: Sources", "handbook"),
            ],
        },
        Criterion::FactualAccuracy => Module {
            module: "Data and Verification",
            description: "Using figures, dates, and primary documents to support claims",
            resources: &[
                ("Numbers in the Newsroom", "book"),
                ("Fact-Checking Fundamentals", "course"),
            ],
        },
        Criterion::WritingClarity => Module {
            module: "Clear and Concise Writing",
            description: "Short sentences, plain words, and the active voice",
            resources: &[
                ("On Writing Well", "book"),
                ("Plain Language Guidelines", "guide"),
            ],
        },
        Criterion::EthicalStandards => Module {
            module: "Journalism Ethics and Privacy",
            description: "Minimizing harm, protecting personal data, and seeking response",
            resources: &[
                ("SPJ Code of Ethics: Minimize Harm", "guide"),
                ("Right of Reply Case Studies", "case study"),
            ],
        },
        Criterion::BiasControl => Module {
            module: "Recognizing and Reducing Bias",
            description: "Measured claims, attributed opinion, and fair framing",
            resources: &[
                ("Fair Framing Checklist", "checklist"),
                ("Bias in Reporting", "course"),
            ],
        },
        Criterion::StructureFlow => Module {
            module: "Story Structure and the Inverted Pyramid",
            description: "Writing a strong lead and ordering information by importance",
            resources: &[
                ("The Inverted Pyramid", "guide"),
                ("Writing Strong Leads", "exercise"),
            ],
        },
        Criterion::HeadlineQuality => Module {
            module: "Headline Writing",
            description: "Specific, accurate headlines that inform rather than tease",
            resources: &[
                ("Headlines That Inform", "guide"),
                ("Avoiding Clickbait", "article"),
            ],
        },
    }
}

/// `weak` is ordered weakest first
pub fn recommend(
    weak: &[Criterion],
    overall_score: u8,
    config: &FeedbackConfig,
) -> Vec<LearningRecommendation> {
    if weak.is_empty() {
        return vec![ADVANCED.recommend(None)];
    }
    let mut out = Vec::with_capacity(weak.len() + 1);
    if overall_score < config.low_overall_score && weak.len() >= config.min_weak_criteria {
        out.push(FUNDAMENTALS.recommend(None));
    }
    out.extend(weak.iter().map(|c| criterion_module(*c).recommend(Some(*c))));
    out
}
