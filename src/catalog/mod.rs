//! Built-in demo scenarios.
//!
//! Scripts are compiled-in fixtures, not loaded from anywhere. Every
//! scenario returned here passes validation; a test pins that so a broken
//! script is caught before it can render partially.

use crate::scenario::{
    Action, ActionKind, AgentResponse, Completion, Epilogue, Insight, Interaction, Scenario,
    Severity,
};

/// All built-in scenarios, in display order.
pub fn all() -> Vec<Scenario> {
    vec![post_op_day2(), polypharmacy_review()]
}

/// Look up a built-in scenario by id.
pub fn by_id(id: &str) -> Option<Scenario> {
    all().into_iter().find(|scenario| scenario.id == id)
}

/// Post-operative day 2 check-in: triage opener, two interactions, and an
/// epilogue that exercises every completion kind.
pub fn post_op_day2() -> Scenario {
    Scenario {
        id: "post-op-day2".into(),
        title: "Post-op day 2 check-in".into(),
        subtitle: "Hip replacement · surgical ward".into(),
        patient_label: "Margaret Chen, 67".into(),
        triage: Some(
            "Good morning. I've reviewed Margaret Chen's overnight observations ahead of her \
             post-op day 2 check-in. Two readings need your attention before rounds."
                .into(),
        ),
        interactions: vec![
            Interaction {
                user_message: "How is she recovering after the hip replacement?".into(),
                response: AgentResponse {
                    reasoning: "Pulling overnight vitals, the wound-care record, and the \
                                post-op pathway for day 2 milestones."
                        .into(),
                    reasoning_duration_ms: 2300,
                    narrative: "Recovery is broadly on track for day 2, with two flags. Her \
                                temperature has crept up over the last three readings and her \
                                resting heart rate is above her pre-op baseline. Mobility and \
                                wound healing both look good."
                        .into(),
                    insights: vec![
                        Insight::new(
                            Severity::Critical,
                            "Low-grade fever trend",
                            "37.4 → 37.7 → 37.9 °C over the last 12 hours. Pattern is \
                             consistent with early infection; worth ruling out before rounds.",
                        ),
                        Insight::new(
                            Severity::Warning,
                            "Elevated resting heart rate",
                            "88–94 bpm overnight against a pre-op baseline of 72 bpm.",
                        ),
                        Insight::new(
                            Severity::Positive,
                            "Wound site clean",
                            "Last dressing change noted no erythema or discharge; drain \
                             output continues to fall.",
                        ),
                    ],
                    follow_ups: vec![
                        "Compare vitals with post-op day 1".into(),
                        "Show the pain medication schedule".into(),
                    ],
                    actions: vec![],
                },
            },
            Interaction {
                user_message: "Anything we should do before rounds this afternoon?".into(),
                response: AgentResponse {
                    reasoning: "Weighing the fever trend against the day-2 pathway; checking \
                                lab turnaround times and the ward diary for open slots."
                        .into(),
                    reasoning_duration_ms: 3100,
                    narrative: "Three steps would de-risk the afternoon: confirm or exclude \
                                infection with bloods, put the registrar in the loop on the \
                                fever trend, and get the wound reviewed while the dressing \
                                team is on the ward."
                        .into(),
                    insights: vec![
                        Insight::new(
                            Severity::Info,
                            "Lab turnaround",
                            "Morning draws resulted before 14:00 on 9 of the last 10 \
                             weekdays; ordering now keeps results ahead of rounds.",
                        ),
                        Insight::new(
                            Severity::Warning,
                            "Antibiotic timing",
                            "If bloods support infection, the afternoon dose window closes \
                             at 16:00.",
                        ),
                    ],
                    follow_ups: vec!["What did her day 1 bloods show?".into()],
                    actions: vec![
                        Action::new(ActionKind::Order, "Order CBC with differential")
                            .with_icon("lab"),
                        Action::new(ActionKind::Message, "Message the surgical registrar")
                            .with_icon("send"),
                        Action::new(ActionKind::Schedule, "Book a wound review for 15:00"),
                        Action::new(ActionKind::Document, "Draft the day-2 progress note"),
                    ],
                },
            },
        ],
        epilogue: Some(Epilogue {
            completions: vec![
                Completion::agent_task(
                    "Order CBC with differential",
                    "CBC ordered — results expected by 14:00",
                )
                .with_active_label("Sending the order to the lab system"),
                Completion::human_queued(
                    "Message the surgical registrar",
                    "Drafted and queued for you to review before sending",
                ),
                Completion::agent_task(
                    "Book a wound review for 15:00",
                    "Wound review booked for 15:00 with the dressing team",
                )
                .with_active_label("Checking the ward diary"),
                Completion::agent_task(
                    "Draft the day-2 progress note",
                    "Note drafted in the background",
                )
                .with_active_label("Drafting from today's observations")
                .never_resolving(),
            ],
            memory: "Noted for next time: Margaret prefers afternoon reviews, and her \
                     daughter should be copied on discharge planning."
                .into(),
        }),
    }
}

/// Polypharmacy review: no triage opener, no epilogue — the conversation
/// simply settles once both interactions have played out.
pub fn polypharmacy_review() -> Scenario {
    Scenario {
        id: "polypharmacy-review".into(),
        title: "Polypharmacy review".into(),
        subtitle: "Annual medication review · community clinic".into(),
        patient_label: "Arthur Osei, 82".into(),
        triage: None,
        interactions: vec![
            Interaction {
                user_message: "Arthur is on nine repeat medications. Where should we start?"
                    .into(),
                response: AgentResponse {
                    reasoning: "Cross-checking the repeat list against interaction tables and \
                                his last renal function results."
                        .into(),
                    reasoning_duration_ms: 2700,
                    narrative: "Two combinations stand out. The NSAID alongside his ACE \
                                inhibitor and diuretic is the classic triple-whammy for his \
                                kidneys, and the anticholinergic burden across three of the \
                                repeats is high for his age."
                        .into(),
                    insights: vec![
                        Insight::new(
                            Severity::Critical,
                            "Triple-whammy combination",
                            "Naproxen + ramipril + furosemide with an eGFR of 51 puts him at \
                             real risk of acute kidney injury.",
                        ),
                        Insight::new(
                            Severity::Warning,
                            "Anticholinergic burden",
                            "Amitriptyline, oxybutynin and chlorphenamine together score 6 on \
                             the burden scale; falls and confusion risk rises above 3.",
                        ),
                    ],
                    follow_ups: vec![
                        "When was his renal function last checked?".into(),
                        "Which repeats has he actually been collecting?".into(),
                    ],
                    actions: vec![],
                },
            },
            Interaction {
                user_message: "Let's deprescribe carefully. What's a safe first step?".into(),
                response: AgentResponse {
                    reasoning: "Sequencing the deprescribing so no single change masks the \
                                effect of another; checking taper guidance for amitriptyline."
                        .into(),
                    reasoning_duration_ms: 3400,
                    narrative: "Start with the naproxen — it has the clearest harm and the \
                                easiest substitute. Swap to topical diclofenac for his knee, \
                                recheck renal function in two weeks, then begin a slow \
                                amitriptyline taper once the dust settles."
                        .into(),
                    insights: vec![
                        Insight::new(
                            Severity::Info,
                            "Taper guidance",
                            "Amitriptyline 25 mg → 10 mg for four weeks, then alternate-day \
                             dosing; stopping abruptly risks rebound insomnia.",
                        ),
                        Insight::new(
                            Severity::Positive,
                            "Good adherence signal",
                            "Pharmacy records show consistent collection; changes here will \
                             actually reach him.",
                        ),
                    ],
                    follow_ups: vec!["Draft a two-week review plan".into()],
                    actions: vec![
                        Action::new(ActionKind::Order, "Stop naproxen on the repeat list"),
                        Action::new(ActionKind::Referral, "Refer to the practice pharmacist"),
                        Action::new(ActionKind::Schedule, "Recheck renal function in two weeks"),
                    ],
                },
            },
        ],
        epilogue: None,
    }
}
