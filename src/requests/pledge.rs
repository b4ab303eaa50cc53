use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PledgeForm {
    pub name: String,
    pub amount: String,
    pub contact: String,
    pub location: String,
    pub message: String,
}
