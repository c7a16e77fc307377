// Interview: canned answers and the deterministic mock-interview flow.

pub mod coach;
pub mod handlers;
