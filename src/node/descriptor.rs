use crate::splice::pipeline::{MAX_REPLACE_FRAMES, SpliceParams};

/// Host-facing description of the splice node: identifiers, typed inputs and outputs.
///
/// This is metadata only; nothing in the splice core reads it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NodeDescriptor {
    /// Stable node identifier.
    pub id: String,
    /// Human-readable name.
    pub display_name: String,
    /// Menu category.
    pub category: String,
    /// Required inputs in declaration order.
    pub inputs: Vec<NodeInput>,
    /// Outputs in declaration order.
    pub outputs: Vec<NodeOutput>,
}

/// One named node input.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NodeInput {
    /// Input name.
    pub name: String,
    /// Value kind and constraints.
    #[serde(flatten)]
    pub kind: InputKind,
}

/// Value kinds a node input can take.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputKind {
    /// A frame sequence.
    Image,
    /// A bounded integer.
    Int {
        /// Default value.
        default: u32,
        /// Inclusive lower bound.
        min: u32,
        /// Inclusive upper bound.
        max: u32,
        /// UI increment.
        step: u32,
    },
}

/// One named node output.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NodeOutput {
    /// Output name.
    pub name: String,
    /// Output value kind.
    #[serde(rename = "type")]
    pub kind: String,
}

impl NodeDescriptor {
    /// Descriptor for the first/last frame replacement node.
    pub fn replace_first_last_frames() -> Self {
        let defaults = SpliceParams::default();
        let count = |name: &str, default: u32| NodeInput {
            name: name.to_string(),
            kind: InputKind::Int {
                default,
                min: 0,
                max: MAX_REPLACE_FRAMES,
                step: 1,
            },
        };
        let image = |name: &str| NodeInput {
            name: name.to_string(),
            kind: InputKind::Image,
        };

        Self {
            id: "ReplaceFirstLastFrames".to_string(),
            display_name: "Replace First & Last Frames".to_string(),
            category: "image/animation".to_string(),
            inputs: vec![
                image("images"),
                image("start_frames"),
                image("last_frames"),
                count("num_start_frames", defaults.start_frames),
                count("num_last_frames", defaults.end_frames),
            ],
            outputs: vec![NodeOutput {
                name: "images".to_string(),
                kind: "IMAGE".to_string(),
            }],
        }
    }

    /// Serialize as pretty JSON.
    pub fn to_json_pretty(&self) -> crate::SpliceResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/node/descriptor.rs"]
mod tests;
