use std::{net::SocketAddr, sync::Arc};

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use canvas_api::{handle_submission, present, PipelineContext, RenderedCanvas};
use galxe_integration::GalxeClient;
use shared::{canvas::CanvasResponse, domain::SubmitPayload, error::SubmitError};
use tower_http::cors::CorsLayer;
use tracing::{error, info};

mod config;

use config::load_settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let galxe = GalxeClient::new(settings.galxe_endpoint.clone());
    let state = PipelineContext {
        galxe: Arc::new(galxe),
    };
    let app = build_router(state);

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, galxe_endpoint = %settings.galxe_endpoint, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: PipelineContext) -> Router {
    // The widget host loads the canvas cross-origin, so CORS stays open.
    Router::new()
        .route("/init", get(init_canvas).post(init_canvas))
        .route("/submit", post(submit))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn init_canvas() -> Response {
    canvas_reply(CanvasResponse::new(present::initial_form()))
}

async fn submit(State(state): State<PipelineContext>, body: Bytes) -> Response {
    // Decode by hand: a body the host mangled still has to come back as a
    // renderable error canvas, not as a bare 4xx.
    let payload: SubmitPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(decode_error) => {
            info!(%decode_error, "undecodable submit payload");
            let rendered = RenderedCanvas::Error(present::error_components(
                &SubmitError::MalformedPayload(decode_error.to_string()),
            ));
            return canvas_reply(rendered.into_envelope());
        }
    };

    info!(
        conversation_id = payload.conversation_id,
        component_id = %payload.component_id,
        "handling submission"
    );
    let rendered = handle_submission(&state, &payload.input_values).await;
    canvas_reply(rendered.into_envelope())
}

/// Serialize the envelope ourselves so an encoding failure surfaces as a
/// bare 500; once serialization itself breaks, rendering an error canvas is
/// off the table too.
fn canvas_reply(canvas: CanvasResponse) -> Response {
    match serde_json::to_vec(&canvas) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(encode_error) => {
            error!(%encode_error, "failed to encode canvas response");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "failed to encode canvas response",
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use axum::{body::Body, http::Request};
    use galxe_integration::{GalxeQuery, QueryError};
    use shared::domain::{CampaignRecord, NftCore, SpaceInfo};
    use tower::ServiceExt;

    use super::*;

    struct StubGalxe;

    #[async_trait]
    impl GalxeQuery for StubGalxe {
        async fn campaign(&self, id: &str, _address: &str) -> Result<CampaignRecord, QueryError> {
            Ok(CampaignRecord {
                id: id.to_string(),
                name: format!("Campaign {id}"),
                status: "Active".to_string(),
                space: SpaceInfo {
                    id: "40".to_string(),
                    name: "Example Space".to_string(),
                    is_verified: true,
                },
                nft_core: NftCore {
                    id: "n1".to_string(),
                    name: "Example NFT".to_string(),
                    symbol: "EX".to_string(),
                    contract_address: "0xcontract".to_string(),
                    chain: "ETHEREUM".to_string(),
                },
                is_nft_holder: true,
                claimed_times: 3,
            })
        }

        async fn space_campaign_ids(&self, _id: i64) -> Result<Vec<String>, QueryError> {
            Ok(vec!["a".to_string(), "b".to_string()])
        }
    }

    fn test_app() -> Router {
        build_router(PipelineContext {
            galxe: Arc::new(StubGalxe),
        })
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    fn components(json: &serde_json::Value) -> &Vec<serde_json::Value> {
        json["canvas"]["content"]["components"]
            .as_array()
            .expect("components array")
    }

    #[tokio::test]
    async fn init_returns_the_static_form() {
        let request = Request::get("/init").body(Body::empty()).expect("request");
        let response = test_app().oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let components = components(&json);
        assert_eq!(components[0]["type"], "text");
        assert_eq!(components.last().expect("button")["action"]["type"], "submit");
    }

    #[tokio::test]
    async fn submit_resolves_a_campaign_canvas() {
        let body = serde_json::json!({
            "input_values": {"address": "0xabc", "campaignId": "GC1"}
        });
        let request = Request::post("/submit")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request");
        let response = test_app().oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let components = components(&json);
        assert_eq!(components[0]["text"], "Campaign ID: GC1");
        assert_eq!(components.last().expect("button")["action"]["type"], "submit");
    }

    #[tokio::test]
    async fn validation_failure_still_answers_200_with_an_error_canvas() {
        let body = serde_json::json!({ "input_values": {"address": ""} });
        let request = Request::post("/submit")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request");
        let response = test_app().oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let components = components(&json);
        assert_eq!(components.len(), 3);
        assert_eq!(components[0]["text"], "Error: User Address is required");
        assert_eq!(components.last().expect("button")["action"]["type"], "init");
    }

    #[tokio::test]
    async fn undecodable_body_still_answers_200_with_an_error_canvas() {
        let request = Request::post("/submit")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("this is not json"))
            .expect("request");
        let response = test_app().oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(
            components(&json).last().expect("button")["action"]["type"],
            "init"
        );
    }
}
