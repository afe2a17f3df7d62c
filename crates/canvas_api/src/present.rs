use shared::{
    canvas::{Action, CanvasResponse, Component},
    domain::CampaignRecord,
    error::SubmitError,
};

/// Render outcome, kept tagged so the success and error paths stay
/// structurally distinct until the transport edge serializes them.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedCanvas {
    Success(Vec<Component>),
    Error(Vec<Component>),
}

impl RenderedCanvas {
    pub fn components(&self) -> &[Component] {
        match self {
            Self::Success(components) | Self::Error(components) => components,
        }
    }

    pub fn into_envelope(self) -> CanvasResponse {
        match self {
            Self::Success(components) | Self::Error(components) => {
                CanvasResponse::new(components)
            }
        }
    }
}

/// The static `/init` form. Pure data; the only process-wide canvas state.
pub fn initial_form() -> Vec<Component> {
    vec![
        Component::header("*Check address Galxe nft balance*"),
        Component::small_spacer(),
        Component::Input {
            id: "address".to_string(),
            label: "User Address".to_string(),
            placeholder: Some("0x...".to_string()),
            options: Vec::new(),
        },
        Component::small_spacer(),
        Component::input("campaignId", "Campaign Id"),
        Component::paragraph("*Or*"),
        Component::input("spaceId", "Space Id"),
        Component::small_spacer(),
        Component::primary_button("query-address", "Check Address Balance", Action::Submit),
    ]
}

/// One four-line block per record, in the given order, then the re-submit
/// trailer. Field order inside a block is fixed: id, name, holder flag,
/// claim count.
pub fn campaign_components(records: &[CampaignRecord]) -> Vec<Component> {
    let mut components = Vec::with_capacity(records.len() * 4 + 1);
    for record in records {
        components.push(Component::header(format!("Campaign ID: {}", record.id)));
        components.push(Component::paragraph(format!("Name: {}", record.name)));
        components.push(Component::paragraph(format!(
            "Is NFT Holder: {}",
            record.is_nft_holder
        )));
        components.push(Component::paragraph(format!(
            "Claimed Times: {}",
            record.claimed_times
        )));
    }
    components.push(Component::primary_button(
        "query-again",
        "Query Again",
        Action::Submit,
    ));
    components
}

/// Error canvas: the failure message, a spacer, and a button that restarts
/// the form from `/init` rather than re-submitting the bad input.
pub fn error_components(error: &SubmitError) -> Vec<Component> {
    vec![
        Component::header(format!("Error: {error}")),
        Component::small_spacer(),
        Component::primary_button("refresh-button", "Refresh", Action::Init),
    ]
}
