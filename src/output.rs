//! Output types for React frontend consumption.
//!
//! These structs are serialized to JSON and sent to the galaxy view. Node
//! fields mirror the view's `GalaxyWord` type.

use serde::Serialize;

use crate::error::GalaxyError;
use crate::layout::{CENTER_ID, Layout, Node, Role};

/// A placed word ready for the view to display
#[derive(Debug, Clone, Serialize)]
pub struct NodeOutput {
    pub id: u32,
    pub word: String,
    /// Percent of canvas width
    pub x: f64,
    /// Percent of canvas height
    pub y: f64,
    #[serde(rename = "type")]
    pub role: Role,
    /// Glyph scale multiplier
    pub size: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    /// Placed on the fallback ring (may overlap neighbours)
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub fallback: bool,
}

impl From<&Node> for NodeOutput {
    fn from(node: &Node) -> Self {
        NodeOutput {
            id: node.id,
            word: node.label.clone(),
            x: node.position.x,
            y: node.position.y,
            role: node.role,
            size: node.visual_scale,
            strength: node.relation_strength,
            example: node.example_text.clone(),
            fallback: node.fallback,
        }
    }
}

/// A connecting line from the center word, styled by the target's role
#[derive(Debug, Clone, Serialize)]
pub struct EdgeOutput {
    pub from: u32,
    pub to: u32,
    pub role: Role,
}

/// Headline data for the searched word
#[derive(Debug, Clone, Serialize)]
pub struct EntrySummary {
    pub word: String,
    pub definition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// Error information for the search page
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    /// "request" or "config"
    pub kind: String,
    pub message: String,
}

impl From<&GalaxyError> for ErrorInfo {
    fn from(err: &GalaxyError) -> Self {
        ErrorInfo {
            kind: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}

/// The combined output sent to the view
#[derive(Debug, Clone, Default, Serialize)]
pub struct GalaxyOutput {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<NodeOutput>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<EdgeOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<EntrySummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl GalaxyOutput {
    pub fn from_layout(layout: &Layout, entry: Option<EntrySummary>) -> Self {
        let nodes = layout.nodes.iter().map(NodeOutput::from).collect();
        let edges = layout
            .related()
            .iter()
            .map(|n| EdgeOutput {
                from: CENTER_ID,
                to: n.id,
                role: n.role,
            })
            .collect();
        GalaxyOutput {
            nodes,
            edges,
            entry,
            error: None,
        }
    }

    pub fn from_error(err: &GalaxyError) -> Self {
        GalaxyOutput {
            error: Some(ErrorInfo::from(err)),
            ..GalaxyOutput::default()
        }
    }
}
