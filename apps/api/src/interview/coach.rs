//! Interview Coach: canned answers and a deterministic five-question mock interview.
//!
//! No model calls: questions come from a role-aware bank and feedback comes from
//! simple checks on the answer text (quantified result, length, empty).

use serde::{Deserialize, Serialize};

use crate::profile::analyzer::RoleTrack;

/// Questions per mock interview, including the opening question.
pub const INTERVIEW_LENGTH: u32 = 5;

/// Answers shorter than this are nudged toward the STAR structure.
const MIN_ANSWER_WORDS: usize = 25;

const DATA_QUESTIONS: &[&str] = &[
    "Walk me through a dataset you cleaned and explored. What surprised you?",
    "How would you design an A/B test for a new feature, and which metric would you watch?",
    "Describe, in words, a SQL query that finds the top three customers by revenue each month.",
    "Tell me about a time your analysis changed a decision. What was the result?",
];

const WEB_QUESTIONS: &[&str] = &[
    "How do you make a layout work well on both phone and desktop screens?",
    "Describe how you would fetch data from a REST API and handle loading and error states.",
    "A page feels slow. How do you find out why, and how do you fix it?",
    "Tell me about a UI you shipped that users gave feedback on. What did you change?",
];

const GENERAL_QUESTIONS: &[&str] = &[
    "Can you tell me about a challenging project you worked on and how you overcame the obstacles?",
    "Describe a time you disagreed with a teammate. How did you resolve it?",
    "How do you prioritise when several deadlines land in the same week?",
    "What is something you learned recently, and how did you apply it?",
];

/// One prior message in the mock interview transcript.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationMessage {
    /// "bot" or "user"
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
}

/// A candidate answer to question `question_number` (1-based).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InterviewTurn {
    pub role: String,
    pub answer: String,
    pub question_number: u32,
    pub conversation_history: Vec<ConversationMessage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewReply {
    pub response: String,
    pub feedback: String,
    pub next_question: Option<String>,
    pub is_complete: bool,
}

/// Canned answer text for a free-form interview question.
pub fn canned_answer(question: &str) -> String {
    format!("Sample answer to: '{question}'. Prepare with STAR method and quantify impact.")
}

/// Greeting plus the "tell me about yourself" opener.
pub fn opening_question(role: &str) -> String {
    let position = match role.trim() {
        "" => "this position".to_string(),
        role => format!("the {role} position"),
    };
    format!(
        "Hi, thanks for joining this mock interview for {position}. \
         To start, tell me about yourself and what draws you to this role."
    )
}

/// Feedback on the answer plus the next question, or a wrap-up after the last one.
pub fn respond(turn: &InterviewTurn) -> InterviewReply {
    let question_number = turn.question_number.max(1);
    let is_complete = question_number >= INTERVIEW_LENGTH;
    let feedback = answer_feedback(&turn.answer);

    if is_complete {
        let answered = turn
            .conversation_history
            .iter()
            .filter(|m| m.kind == "user" && !m.content.trim().is_empty())
            .count()
            + 1;
        return InterviewReply {
            response: format!(
                "Thank you for your answer. That completes the mock interview: \
                 you answered {answered} of {INTERVIEW_LENGTH} questions."
            ),
            feedback,
            next_question: None,
            is_complete,
        };
    }

    InterviewReply {
        response: "Thank you for your answer. Let me provide some feedback.".to_string(),
        feedback,
        next_question: Some(next_question(&turn.role, question_number)),
        is_complete,
    }
}

/// The question that follows `answered` (1-based) for this role.
fn next_question(role: &str, answered: u32) -> String {
    let bank = match RoleTrack::primary(role) {
        RoleTrack::Data => DATA_QUESTIONS,
        RoleTrack::Web => WEB_QUESTIONS,
        RoleTrack::General => GENERAL_QUESTIONS,
    };
    let index = answered.saturating_sub(1) as usize;
    bank.get(index)
        .or(bank.last())
        .map(|q| q.to_string())
        .unwrap_or_default()
}

fn answer_feedback(answer: &str) -> String {
    let answer = answer.trim();
    if answer.is_empty() {
        return "No answer received. Take a moment, then walk through the Situation, \
                Task, Action and Result."
            .to_string();
    }

    let mut notes: Vec<&str> = Vec::new();
    if is_quantified(answer) {
        notes.push("Good use of concrete numbers to show impact.");
    } else {
        notes.push("Quantify the impact: a metric, percentage or cost makes the result stick.");
    }
    if answer.split_whitespace().count() < MIN_ANSWER_WORDS {
        notes.push(
            "Expand your answer using STAR (Situation, Task, Action, Result) with a specific example.",
        );
    } else {
        notes.push("Clear structure and enough detail to follow.");
    }
    notes.join(" ")
}

/// A digit, percentage or currency sign counts as a quantified result.
fn is_quantified(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
        || text.contains('%')
        || text.contains('$')
        || text.contains('€')
        || text.contains('£')
}
