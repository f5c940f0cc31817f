use crate::mcp::types::{OperationResult, ToolDescriptor};
use crate::tools::parse_args;
use chrono::{Duration, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

pub const NAME: &str = "create_meetup_poll";

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Params {
    time_options: Vec<Value>,
    venue_options: Vec<Value>,
    deadline_hours: u32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            time_options: Vec::new(),
            venue_options: Vec::new(),
            deadline_hours: 24,
        }
    }
}

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: NAME,
        description: "Open a poll over candidate times and venues for participants to vote on",
        input_schema: json!({
            "type": "object",
            "properties": {
                "time_options": {
                    "type": "array",
                    "items": { "type": "object" },
                    "description": "Candidate time slots to vote on"
                },
                "venue_options": {
                    "type": "array",
                    "items": { "type": "object" },
                    "description": "Candidate venues to vote on"
                },
                "deadline_hours": {
                    "type": "number",
                    "description": "Hours until the poll closes (default 24)"
                }
            },
            "required": ["time_options", "venue_options"]
        }),
    }
}

pub fn run(args: Value) -> OperationResult {
    let p: Params = match parse_args(args) {
        Ok(p) => p,
        Err(e) => return OperationResult::failure(format!("{NAME}: {e}")),
    };

    let poll_id = format!("poll-{}", Uuid::new_v4());
    let closes_at = (Utc::now() + Duration::hours(i64::from(p.deadline_hours))).to_rfc3339();

    let message = format!(
        "Poll {} is open with {} time options and {} venue options, closing in {}h",
        poll_id,
        p.time_options.len(),
        p.venue_options.len(),
        p.deadline_hours
    );

    OperationResult::ok(
        json!({
            "poll_id": poll_id,
            "status": "active",
            "time_option_count": p.time_options.len(),
            "venue_option_count": p.venue_options.len(),
            "deadline_hours": p.deadline_hours,
            "closes_at": closes_at,
        }),
        message,
    )
}
