use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use shared::domain::{CampaignRecord, NftCore, SpaceInfo};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_GRAPHQL_ENDPOINT: &str = "https://graphigo.prd.galaxy.eco/query";

/// One campaign keyed by id, with holder status and claim count for the
/// given address. Ids and the address travel as GraphQL variables, never
/// interpolated into the query text.
const CAMPAIGN_QUERY: &str = r#"
query CampaignStatus($id: ID!, $address: String!) {
  campaign(id: $id) {
    id
    name
    status
    space {
      id
      name
      isVerified
    }
    nftCore {
      id
      name
      symbol
      contractAddress
      chain
    }
    isNFTHolder(address: $address)
    claimedTimes(address: $address)
  }
}
"#;

/// Member campaign ids of one space, in the order the service lists them.
const SPACE_QUERY: &str = r#"
query SpaceCampaigns($id: Int!) {
  space(id: $id) {
    id
    name
    campaigns(input: { spaceId: $id }) {
      totalCount
      list {
        id
      }
    }
  }
}
"#;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("galxe transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("galxe rejected the query: {0}")]
    Graphql(String),
    #[error("galxe response carried no data")]
    MissingData,
}

/// The seam the pipeline resolves against. `GalxeClient` is the real
/// implementation; tests substitute in-memory fakes.
#[async_trait]
pub trait GalxeQuery: Send + Sync {
    /// Resolve one campaign for one address.
    async fn campaign(&self, id: &str, address: &str) -> Result<CampaignRecord, QueryError>;

    /// List the member campaign ids of a space.
    async fn space_campaign_ids(&self, id: i64) -> Result<Vec<String>, QueryError>;
}

/// GraphQL client for the Galxe query service. Cheap to clone; the inner
/// reqwest client pools connections across requests.
#[derive(Clone)]
pub struct GalxeClient {
    http: Client,
    endpoint: String,
}

impl GalxeClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    async fn run<V, T>(&self, query: &'static str, variables: V) -> Result<T, QueryError>
    where
        V: Serialize + Send + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&GraphqlRequest { query, variables })
            .send()
            .await?
            .error_for_status()?;
        let envelope: GraphqlEnvelope<T> = response.json().await?;
        unwrap_envelope(envelope)
    }
}

#[async_trait]
impl GalxeQuery for GalxeClient {
    async fn campaign(&self, id: &str, address: &str) -> Result<CampaignRecord, QueryError> {
        let data: CampaignData = self
            .run(
                CAMPAIGN_QUERY,
                serde_json::json!({ "id": id, "address": address }),
            )
            .await?;
        Ok(data.campaign.into())
    }

    async fn space_campaign_ids(&self, id: i64) -> Result<Vec<String>, QueryError> {
        let data: SpaceData = self.run(SPACE_QUERY, serde_json::json!({ "id": id })).await?;
        debug!(
            space = %data.space.name,
            total_count = data.space.campaigns.total_count,
            "listed space campaigns"
        );
        Ok(data
            .space
            .campaigns
            .list
            .into_iter()
            .map(|entry| entry.id)
            .collect())
    }
}

fn unwrap_envelope<T>(envelope: GraphqlEnvelope<T>) -> Result<T, QueryError> {
    if !envelope.errors.is_empty() {
        let joined = envelope
            .errors
            .into_iter()
            .map(|error| error.message)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(QueryError::Graphql(joined));
    }
    envelope.data.ok_or(QueryError::MissingData)
}

#[derive(Debug, Serialize)]
struct GraphqlRequest<V: Serialize> {
    query: &'static str,
    variables: V,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct GraphqlEnvelope<T> {
    #[serde(default)]
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct CampaignData {
    campaign: CampaignPayload,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CampaignPayload {
    id: String,
    name: String,
    #[serde(default)]
    status: String,
    space: SpacePayload,
    nft_core: NftCorePayload,
    #[serde(rename = "isNFTHolder")]
    is_nft_holder: bool,
    claimed_times: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SpacePayload {
    id: String,
    name: String,
    #[serde(default)]
    is_verified: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NftCorePayload {
    id: String,
    name: String,
    symbol: String,
    contract_address: String,
    chain: String,
}

#[derive(Debug, Deserialize)]
struct SpaceData {
    space: SpaceDetailPayload,
}

#[derive(Debug, Deserialize)]
struct SpaceDetailPayload {
    #[allow(dead_code)]
    id: String,
    name: String,
    campaigns: CampaignPage,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CampaignPage {
    #[serde(default)]
    total_count: i64,
    list: Vec<CampaignIdEntry>,
}

#[derive(Debug, Deserialize)]
struct CampaignIdEntry {
    id: String,
}

impl From<CampaignPayload> for CampaignRecord {
    fn from(payload: CampaignPayload) -> Self {
        Self {
            id: payload.id,
            name: payload.name,
            status: payload.status,
            space: SpaceInfo {
                id: payload.space.id,
                name: payload.space.name,
                is_verified: payload.space.is_verified,
            },
            nft_core: NftCore {
                id: payload.nft_core.id,
                name: payload.nft_core.name,
                symbol: payload.nft_core.symbol,
                contract_address: payload.nft_core.contract_address,
                chain: payload.nft_core.chain,
            },
            is_nft_holder: payload.is_nft_holder,
            claimed_times: payload.claimed_times,
        }
    }
}
