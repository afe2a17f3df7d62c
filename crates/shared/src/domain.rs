use serde::{Deserialize, Serialize};

/// Raw form values as the widget host submits them. Field names follow the
/// form component ids, so `campaignId`/`spaceId` stay camel-cased on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmitValues {
    #[serde(default)]
    pub address: String,
    #[serde(default, rename = "campaignId")]
    pub campaign_id: String,
    #[serde(default, rename = "spaceId")]
    pub space_id: SpaceField,
}

/// Space id as submitted: hosts send it either as the raw input text or,
/// when the form pre-fills it, as a bare integer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpaceField {
    Text(String),
    Number(i64),
}

impl Default for SpaceField {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

/// Full `/submit` body sent by the inbox host. Everything except
/// `input_values` is passthrough context we only log.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitPayload {
    #[serde(default)]
    pub conversation_id: i64,
    #[serde(default)]
    pub inbox_app_id: i64,
    #[serde(default)]
    pub admin_id: i64,
    #[serde(default)]
    pub app_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub component_id: String,
    #[serde(default)]
    pub input_values: SubmitValues,
    #[serde(default)]
    pub current_canvas: serde_json::Value,
}

/// A submission that passed validation. Constructed only by the validator.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub user_address: String,
    pub target: QueryTarget,
}

/// What the submission asks us to resolve: one campaign directly, or a
/// space whose member campaigns are expanded and resolved individually.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryTarget {
    Campaign(String),
    Space(i64),
}

/// Resolved data for one campaign, as returned by the Galxe query service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignRecord {
    pub id: String,
    pub name: String,
    pub status: String,
    pub space: SpaceInfo,
    pub nft_core: NftCore,
    pub is_nft_holder: bool,
    pub claimed_times: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceInfo {
    pub id: String,
    pub name: String,
    pub is_verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftCore {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub contract_address: String,
    pub chain: String,
}
