use crate::mcp::types::{OperationResult, ToolDescriptor};
use crate::tools::parse_args;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

pub const NAME: &str = "initiate_dutch_pay";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
enum SplitType {
    #[default]
    Equal,
    Custom,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Params {
    total_amount: f64,
    participants: Vec<String>,
    payer: String,
    split_type: SplitType,
}

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: NAME,
        description: "Split a shared bill across participants and raise payment requests",
        input_schema: json!({
            "type": "object",
            "properties": {
                "total_amount": {
                    "type": "number",
                    "description": "Total bill to split"
                },
                "participants": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Everyone sharing the bill"
                },
                "payer": {
                    "type": "string",
                    "description": "Who fronted the payment and collects the shares"
                },
                "split_type": {
                    "type": "string",
                    "enum": ["equal", "custom"],
                    "description": "How to divide the bill (default \"equal\")"
                }
            },
            "required": ["total_amount", "participants", "payer"]
        }),
    }
}

pub fn run(args: Value) -> OperationResult {
    let p: Params = match parse_args(args) {
        Ok(p) => p,
        Err(e) => return OperationResult::failure(format!("{NAME}: {e}")),
    };

    // Zero participants still divides by one so the share stays meaningful.
    let divisor = p.participants.len().max(1);
    let per_person_share = (p.total_amount / divisor as f64).ceil() as i64;
    let request_id = format!("dutch-{}", Uuid::new_v4());

    let requests: Vec<Value> = p
        .participants
        .iter()
        .filter(|name| **name != p.payer)
        .map(|name| json!({ "participant": name, "amount": per_person_share, "status": "pending" }))
        .collect();

    let message = format!(
        "Splitting {} {} ways: {} per person, payable to {}",
        p.total_amount, divisor, per_person_share, p.payer
    );

    OperationResult::ok(
        json!({
            "request_id": request_id,
            "total_amount": p.total_amount,
            "payer": p.payer,
            "split_type": p.split_type,
            "participant_count": p.participants.len(),
            "per_person_share": per_person_share,
            "requests": requests,
        }),
        message,
    )
}
