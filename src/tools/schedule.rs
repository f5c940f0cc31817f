use crate::mcp::types::{OperationResult, ToolDescriptor};
use crate::tools::parse_args;
use serde::Deserialize;
use serde_json::{json, Value};

pub const NAME: &str = "find_optimal_times";

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Params {
    participants: Vec<String>,
    date_range: String,
    duration_hours: u32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            participants: Vec::new(),
            date_range: String::new(),
            duration_hours: 3,
        }
    }
}

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: NAME,
        description: "Find the meeting time slots that work best across participant calendars",
        input_schema: json!({
            "type": "object",
            "properties": {
                "participants": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Participant names to check availability for"
                },
                "date_range": {
                    "type": "string",
                    "description": "Date range to search, e.g. \"2026-08-10 to 2026-08-16\""
                },
                "duration_hours": {
                    "type": "number",
                    "description": "Desired meeting length in hours (default 3)"
                }
            },
            "required": ["participants", "date_range"]
        }),
    }
}

pub fn run(args: Value) -> OperationResult {
    let p: Params = match parse_args(args) {
        Ok(p) => p,
        Err(e) => return OperationResult::failure(format!("{NAME}: {e}")),
    };

    // Ranked by strictly descending score. The second slot conflicts the last
    // participant in input order, the third the first.
    let slots = vec![
        slot(&p, "Saturday", 14, 0.95, None, "every participant is free in this window"),
        slot(
            &p,
            "Sunday",
            10,
            0.82,
            p.participants.last().map(|n| (n, "has an overlapping commitment")),
            "weekend morning with a single known conflict",
        ),
        slot(
            &p,
            "Friday",
            19,
            0.64,
            p.participants.first().map(|n| (n, "unavailable on weekday evenings")),
            "evening fallback with limited availability",
        ),
    ];

    let total = p.participants.len();
    let label = |v: &Value| {
        format!(
            "{} ({}/{} available)",
            v["slot"].as_str().unwrap_or(""),
            v["available_count"],
            total
        )
    };
    let message = format!(
        "1st choice: {}, 2nd choice: {}",
        label(&slots[0]),
        label(&slots[1])
    );

    OperationResult::ok(
        json!({
            "date_range": p.date_range,
            "duration_hours": p.duration_hours,
            "recommended_slots": slots,
        }),
        message,
    )
}

fn slot(
    p: &Params,
    day: &str,
    start: u32,
    score: f64,
    conflict: Option<(&String, &str)>,
    why: &str,
) -> Value {
    let conflicts: Vec<Value> = conflict
        .map(|(name, reason)| vec![json!({ "participant": name, "reason": reason })])
        .unwrap_or_default();
    let available: Vec<&String> = p
        .participants
        .iter()
        .filter(|n| conflict.map(|(c, _)| c != *n).unwrap_or(true))
        .collect();
    json!({
        "slot": format!("{} {:02}:00-{:02}:00", day, start, (start + p.duration_hours) % 24),
        "score": score,
        "available_count": p.participants.len().saturating_sub(conflicts.len()),
        "available_participants": available,
        "conflicts": conflicts,
        "reason": why,
    })
}
