use serde::Serialize;

#[derive(Debug, Serialize, Clone)]
pub struct ImageMatch {
    pub name: String,
    pub description: String,
}
