use crate::mcp::types::{OperationResult, ToolDescriptor};
use crate::tools::{dutch_pay, finalize, poll, schedule, venues};
use serde_json::Value;

/// The complete, fixed operation set. Declaration order here is the catalog
/// order `tools/list` returns on every call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolKind {
    FindOptimalTimes,
    RecommendVenues,
    CreateMeetupPoll,
    FinalizeMeetup,
    InitiateDutchPay,
}

pub const ALL: [ToolKind; 5] = [
    ToolKind::FindOptimalTimes,
    ToolKind::RecommendVenues,
    ToolKind::CreateMeetupPoll,
    ToolKind::FinalizeMeetup,
    ToolKind::InitiateDutchPay,
];

impl ToolKind {
    pub fn from_name(name: &str) -> Option<Self> {
        ALL.into_iter().find(|k| k.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::FindOptimalTimes => schedule::NAME,
            ToolKind::RecommendVenues => venues::NAME,
            ToolKind::CreateMeetupPoll => poll::NAME,
            ToolKind::FinalizeMeetup => finalize::NAME,
            ToolKind::InitiateDutchPay => dutch_pay::NAME,
        }
    }

    pub fn descriptor(self) -> ToolDescriptor {
        match self {
            ToolKind::FindOptimalTimes => schedule::descriptor(),
            ToolKind::RecommendVenues => venues::descriptor(),
            ToolKind::CreateMeetupPoll => poll::descriptor(),
            ToolKind::FinalizeMeetup => finalize::descriptor(),
            ToolKind::InitiateDutchPay => dutch_pay::descriptor(),
        }
    }

    pub fn run(self, args: Value) -> OperationResult {
        match self {
            ToolKind::FindOptimalTimes => schedule::run(args),
            ToolKind::RecommendVenues => venues::run(args),
            ToolKind::CreateMeetupPoll => poll::run(args),
            ToolKind::FinalizeMeetup => finalize::run(args),
            ToolKind::InitiateDutchPay => dutch_pay::run(args),
        }
    }
}

pub fn list() -> Vec<ToolDescriptor> {
    ALL.into_iter().map(ToolKind::descriptor).collect()
}
