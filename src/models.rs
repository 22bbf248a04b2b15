use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::prompt::Tool;

// Longest accepted free-text input, counted in characters after trimming
pub const MAX_INPUT_LEN: usize = 5000;

// Career endpoint request format
#[derive(Deserialize, Serialize, Clone)]
pub struct ToolRequest {
    pub tool: Tool,
    pub input: String,
    #[serde(default)]
    pub options: HashMap<String, String>,
}

// Career endpoint response format
#[derive(Deserialize, Serialize, Clone)]
pub struct GenerateResponse {
    pub result: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

#[derive(Deserialize, Serialize, Clone, Copy)]
pub struct Usage {
    pub tokens: u32,
}

// Naming endpoint request format
#[derive(Deserialize, Serialize, Clone)]
pub struct NameRequest {
    pub query: String,
    #[serde(default)]
    pub style: String,
}

// One model-proposed name, before the domain check
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NameCandidate {
    pub name: String,
    pub domain: String,
    pub tagline: String,
}

// Candidate plus the DNS-derived availability hint. The flag is a
// heuristic: DNS presence stands in for registration status, so it must
// not be treated as authoritative.
#[derive(Deserialize, Serialize, Clone)]
pub struct GeneratedName {
    pub name: String,
    pub domain: String,
    pub tagline: String,
    pub available: bool,
}

// Naming endpoint response format
#[derive(Deserialize, Serialize, Clone)]
pub struct NamesResponse {
    pub names: Vec<GeneratedName>,
}
