//! Shared scenario fixtures for the engine suites.

use clinisim::scenario::{
    Action, ActionKind, AgentResponse, Completion, Epilogue, Insight, Interaction, Scenario,
    Severity,
};

pub fn response(actions: Vec<Action>) -> AgentResponse {
    AgentResponse {
        reasoning: "Reviewing the overnight chart.".into(),
        reasoning_duration_ms: 1500,
        narrative: "Stable overnight, one flag to clear.".into(),
        insights: vec![
            Insight::new(Severity::Warning, "Fever trend", "Creeping up since 02:00."),
            Insight::new(Severity::Positive, "Wound clean", "No erythema at last check."),
        ],
        follow_ups: vec!["Compare with yesterday".into(), "Show the med schedule".into()],
        actions,
    }
}

pub fn interaction(user_message: &str, actions: Vec<Action>) -> Interaction {
    Interaction {
        user_message: user_message.into(),
        response: response(actions),
    }
}

/// One interaction, no triage, no epilogue — the §example walk shape.
pub fn single_interaction() -> Scenario {
    Scenario {
        id: "single".into(),
        title: "Single".into(),
        subtitle: "One interaction".into(),
        patient_label: "Pat Doe".into(),
        triage: None,
        interactions: vec![interaction(
            "How is the patient?",
            vec![
                Action::new(ActionKind::Order, "Order CBC"),
                Action::new(ActionKind::Message, "Message the registrar"),
            ],
        )],
        epilogue: None,
    }
}

/// Two interactions, no triage, three epilogue completions.
pub fn with_epilogue() -> Scenario {
    Scenario {
        id: "epilogue".into(),
        title: "Epilogue".into(),
        subtitle: "Two interactions, three completions".into(),
        patient_label: "Pat Doe".into(),
        triage: None,
        interactions: vec![
            interaction("How is the patient?", vec![]),
            interaction(
                "What should we do next?",
                vec![
                    Action::new(ActionKind::Order, "Order CBC"),
                    Action::new(ActionKind::Message, "Message the registrar"),
                    Action::new(ActionKind::Schedule, "Book a review"),
                ],
            ),
        ],
        epilogue: Some(Epilogue {
            completions: vec![
                Completion::agent_task("Order CBC", "CBC ordered")
                    .with_active_label("Sending the order"),
                Completion::human_queued("Message the registrar", "Queued for review"),
                Completion::agent_task("Book a review", "Review booked for 15:00"),
            ],
            memory: "Prefers afternoon reviews.".into(),
        }),
    }
}

/// Triage opener plus one interaction.
pub fn with_triage() -> Scenario {
    Scenario {
        id: "triage".into(),
        title: "Triage".into(),
        subtitle: "Opener plus one interaction".into(),
        patient_label: "Pat Doe".into(),
        triage: Some("Two readings need your attention.".into()),
        interactions: vec![interaction("What happened overnight?", vec![])],
        epilogue: None,
    }
}
