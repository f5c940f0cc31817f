use crate::mcp::types::{OperationResult, ToolDescriptor};
use crate::tools::parse_args;
use serde::Deserialize;
use serde_json::{json, Value};

pub const NAME: &str = "recommend_venues";

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Params {
    participant_locations: Vec<String>,
    category: String,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            participant_locations: Vec::new(),
            category: "restaurant".to_string(),
        }
    }
}

struct Candidate {
    name: &'static str,
    rating: f64,
    avg_travel_minutes: u32,
    fairness_score: f64,
}

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: NAME,
        description: "Recommend venues that balance travel time across participant locations",
        input_schema: json!({
            "type": "object",
            "properties": {
                "participant_locations": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Where each participant is coming from"
                },
                "category": {
                    "type": "string",
                    "description": "Venue category to search (default \"restaurant\")"
                }
            },
            "required": ["participant_locations"]
        }),
    }
}

pub fn run(args: Value) -> OperationResult {
    let p: Params = match parse_args(args) {
        Ok(p) => p,
        Err(e) => return OperationResult::failure(format!("{NAME}: {e}")),
    };

    // With three or more starting points the search pivots to a central
    // district; with fewer, the midpoint between them.
    let centroid_area = if p.participant_locations.len() >= 3 {
        "city-center area"
    } else {
        "halfway point"
    };

    let mut candidates = vec![
        Candidate { name: "The Commons", rating: 4.6, avg_travel_minutes: 18, fairness_score: 0.91 },
        Candidate { name: "Riverside Table", rating: 4.4, avg_travel_minutes: 21, fairness_score: 0.84 },
        Candidate { name: "Corner Alley", rating: 4.7, avg_travel_minutes: 27, fairness_score: 0.72 },
    ];
    candidates.sort_by(|a, b| {
        b.fairness_score
            .total_cmp(&a.fairness_score)
            .then(b.rating.total_cmp(&a.rating))
    });

    let venues: Vec<Value> = candidates
        .iter()
        .map(|c| {
            json!({
                "name": c.name,
                "category": p.category,
                "rating": c.rating,
                "avg_travel_minutes": c.avg_travel_minutes,
                "fairness_score": c.fairness_score,
            })
        })
        .collect();

    let message = format!(
        "Top pick near the {}: {} (fairness {:.2}, rating {})",
        centroid_area, candidates[0].name, candidates[0].fairness_score, candidates[0].rating
    );

    OperationResult::ok(
        json!({
            "category": p.category,
            "centroid_area": centroid_area,
            "participant_count": p.participant_locations.len(),
            "venues": venues,
        }),
        message,
    )
}
