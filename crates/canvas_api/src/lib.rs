use std::sync::Arc;

use galxe_integration::GalxeQuery;
use shared::{
    domain::{CampaignRecord, QueryTarget, SubmitValues},
    error::SubmitError,
};
use tokio::sync::mpsc;
use tracing::{info, warn};

pub mod present;
pub mod validate;

pub use present::RenderedCanvas;

/// Everything one submission needs to resolve. Stateless across requests;
/// the query handle is the only collaborator.
#[derive(Clone)]
pub struct PipelineContext {
    pub galxe: Arc<dyn GalxeQuery>,
}

/// End-to-end submission flow: validate, resolve one campaign or fan out
/// over a space's members, then render. Every failure past decoding comes
/// back as an error canvas, never as a bare error.
pub async fn handle_submission(ctx: &PipelineContext, values: &SubmitValues) -> RenderedCanvas {
    let submission = match validate::validate(values) {
        Ok(submission) => submission,
        Err(error) => {
            info!(%error, "rejected submission");
            return RenderedCanvas::Error(present::error_components(&error));
        }
    };

    let resolved = match &submission.target {
        QueryTarget::Campaign(id) => resolve_campaign(ctx, id, &submission.user_address)
            .await
            .map(|record| vec![record]),
        QueryTarget::Space(id) => expand_space(ctx, *id, &submission.user_address).await,
    };

    match resolved {
        Ok(records) => {
            info!(resolved = records.len(), "rendering resolved submission");
            RenderedCanvas::Success(present::campaign_components(&records))
        }
        Err(error) => {
            warn!(%error, "submission failed to resolve");
            RenderedCanvas::Error(present::error_components(&error))
        }
    }
}

/// Resolve one campaign for one address. No shared state; this is the unit
/// of concurrency for space expansion.
pub async fn resolve_campaign(
    ctx: &PipelineContext,
    campaign_id: &str,
    address: &str,
) -> Result<CampaignRecord, SubmitError> {
    ctx.galxe
        .campaign(campaign_id, address)
        .await
        .map_err(SubmitError::remote)
}

/// Expand a space into its member campaigns and resolve every member
/// concurrently, one task each.
///
/// The member listing is fatal on failure. Individual members that fail to
/// resolve are logged and dropped from the result. There is no concurrency
/// cap and no timeout, so one huge or slow space delays the whole response.
/// Results are restored to listing order before returning.
pub async fn expand_space(
    ctx: &PipelineContext,
    space_id: i64,
    address: &str,
) -> Result<Vec<CampaignRecord>, SubmitError> {
    let member_ids = ctx
        .galxe
        .space_campaign_ids(space_id)
        .await
        .map_err(SubmitError::remote)?;

    let (tx, mut rx) = mpsc::unbounded_channel();
    for (index, campaign_id) in member_ids.into_iter().enumerate() {
        let galxe = Arc::clone(&ctx.galxe);
        let address = address.to_string();
        let tx = tx.clone();
        tokio::spawn(async move {
            match galxe.campaign(&campaign_id, &address).await {
                Ok(record) => {
                    let _ = tx.send((index, record));
                }
                Err(error) => {
                    warn!(%campaign_id, %error, "dropping member campaign that failed to resolve");
                }
            }
        });
    }
    drop(tx);

    // Join barrier: the channel only closes once every spawned task has
    // finished, whether or not it sent anything.
    let mut resolved = Vec::new();
    while let Some(entry) = rx.recv().await {
        resolved.push(entry);
    }
    resolved.sort_by_key(|(index, _)| *index);
    Ok(resolved.into_iter().map(|(_, record)| record).collect())
}
