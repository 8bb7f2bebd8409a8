use std::path::Path;

use anyhow::{bail, Context};
use serde::Deserialize;

use crate::error::{Result, ServiceError};

/// Maps (marks, attendance) to a risk label.
pub trait RiskModel: Send + Sync {
    fn predict(&self, marks: f64, attendance: f64) -> Result<String>;
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        label: String,
    },
}

/// Sample layout passed to the tree: `[marks, attendance]`.
pub const FEATURE_ORDER: [&str; 2] = ["marks", "attendance"];

/// Decision tree exported from the training pipeline. Samples with
/// `x[feature] <= threshold` descend left.
#[derive(Debug, Clone, Deserialize)]
pub struct DecisionTree {
    pub features: Vec<String>,
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.features != FEATURE_ORDER {
            bail!(
                "expected features {:?}, artifact declares {:?}",
                FEATURE_ORDER,
                self.features
            );
        }
        if self.nodes.is_empty() {
            bail!("decision tree has no nodes");
        }

        for (index, node) in self.nodes.iter().enumerate() {
            if let TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } = node
            {
                if *feature >= self.features.len() {
                    bail!("node {index} splits on unknown feature {feature}");
                }
                if !threshold.is_finite() {
                    bail!("node {index} has a non-finite threshold");
                }
                // Children must come after their parent so traversal always ends.
                for child in [*left, *right] {
                    if child <= index || child >= self.nodes.len() {
                        bail!("node {index} points at invalid child {child}");
                    }
                }
            }
        }

        Ok(())
    }
}

impl RiskModel for DecisionTree {
    fn predict(&self, marks: f64, attendance: f64) -> Result<String> {
        let sample = [marks, attendance];
        let mut index = 0;

        loop {
            match self.nodes.get(index) {
                Some(TreeNode::Leaf { label }) => return Ok(label.clone()),
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let value = sample.get(*feature).ok_or_else(|| {
                        ServiceError::Model(format!("node {index} splits on unknown feature"))
                    })?;
                    index = if *value <= *threshold { *left } else { *right };
                }
                None => {
                    return Err(ServiceError::Model(format!(
                        "traversal reached missing node {index}"
                    )))
                }
            }
        }
    }
}

/// Load the model artifact once at startup. Any failure here is fatal.
pub fn load_model(path: &Path) -> anyhow::Result<DecisionTree> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read risk model artifact {}", path.display()))?;
    let tree: DecisionTree = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse risk model artifact {}", path.display()))?;
    tree.validate()
        .with_context(|| format!("invalid risk model artifact {}", path.display()))?;
    Ok(tree)
}
