use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawTicketRecord {
    pub id: String,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawEnvelope {
    pub success: bool,
    #[serde(default)]
    pub ticket: Option<WithdrawTicketRecord>,
    #[serde(default)]
    pub error: Option<String>,
}
