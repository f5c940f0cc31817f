use crate::mcp::types::{OperationResult, ToolDescriptor};
use crate::tools::parse_args;
use serde::Deserialize;
use serde_json::{json, Value};

pub const NAME: &str = "finalize_meetup";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Params {
    selected_time: String,
    selected_venue: String,
    participants: Vec<String>,
    make_reservation: bool,
}

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: NAME,
        description: "Confirm the chosen time and venue and record calendar holds for everyone",
        input_schema: json!({
            "type": "object",
            "properties": {
                "selected_time": {
                    "type": "string",
                    "description": "The winning time slot"
                },
                "selected_venue": {
                    "type": "string",
                    "description": "The winning venue"
                },
                "participants": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Everyone attending"
                },
                "make_reservation": {
                    "type": "boolean",
                    "description": "Also request a table reservation (default false)"
                }
            },
            "required": ["selected_time", "selected_venue", "participants"]
        }),
    }
}

pub fn run(args: Value) -> OperationResult {
    let p: Params = match parse_args(args) {
        Ok(p) => p,
        Err(e) => return OperationResult::failure(format!("{NAME}: {e}")),
    };

    // Confirmation record only; no calendar or reservation backend is called.
    let reservation_status = if p.make_reservation { "requested" } else { "skipped" };
    let message = format!(
        "Meetup confirmed: {} at {} with {} participants",
        p.selected_time,
        p.selected_venue,
        p.participants.len()
    );

    OperationResult::ok(
        json!({
            "selected_time": p.selected_time,
            "selected_venue": p.selected_venue,
            "participants": p.participants,
            "participant_count": p.participants.len(),
            "make_reservation": p.make_reservation,
            "reservation_status": reservation_status,
            "calendar_events_created": p.participants.len(),
        }),
        message,
    )
}
