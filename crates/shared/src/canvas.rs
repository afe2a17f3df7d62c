use serde::{Deserialize, Serialize};

/// One node of the Canvas-Kit component tree the inbox widget renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Component {
    Text {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<TextStyle>,
    },
    Spacer {
        size: SpacerSize,
    },
    Input {
        id: String,
        label: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        options: Vec<SelectOption>,
    },
    Button {
        id: String,
        label: String,
        style: ButtonStyle,
        action: Action,
    },
}

impl Component {
    pub fn header(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            style: Some(TextStyle::Header),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            style: Some(TextStyle::Paragraph),
        }
    }

    pub fn small_spacer() -> Self {
        Self::Spacer {
            size: SpacerSize::S,
        }
    }

    pub fn input(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Input {
            id: id.into(),
            label: label.into(),
            placeholder: None,
            options: Vec::new(),
        }
    }

    pub fn primary_button(id: impl Into<String>, label: impl Into<String>, action: Action) -> Self {
        Self::Button {
            id: id.into(),
            label: label.into(),
            style: ButtonStyle::Primary,
            action,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
    Header,
    Paragraph,
    Muted,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpacerSize {
    Xs,
    S,
    M,
    L,
    Xl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonStyle {
    Primary,
    Secondary,
    Link,
}

/// What pressing a button asks the host to do. `Submit` re-posts the current
/// form to `/submit`; `Init` throws the form away and calls `/init` again.
/// The two are distinct on the wire and must stay that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    Submit,
    Init,
}

/// Selectable entry for input components that carry a fixed choice list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "option")]
pub struct SelectOption {
    pub id: String,
    pub text: String,
}

/// Fixed response envelope: `{ "canvas": { "content": { "components": [..] } } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasResponse {
    pub canvas: Canvas,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub content: Content,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub components: Vec<Component>,
}

impl CanvasResponse {
    pub fn new(components: Vec<Component>) -> Self {
        Self {
            canvas: Canvas {
                content: Content { components },
            },
        }
    }

    pub fn components(&self) -> &[Component] {
        &self.canvas.content.components
    }
}
