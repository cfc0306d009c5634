//! Translation trees and the dot-path codec.
//!
//! A [`LanguageTree`] holds every section of one language. Sections are
//! branches; below a section, keys are dot paths (`cta.primary`) that map to
//! nested branches ending in string leaves.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Children of a branch, ordered by name.
pub type Branch = BTreeMap<String, TranslationNode>;

/// A node of a translation tree: either a string or a named group of nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TranslationNode {
    Leaf(String),
    Branch(Branch),
}

impl TranslationNode {
    /// The string value if this node is a leaf.
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Self::Leaf(value) => Some(value),
            Self::Branch(_) => None,
        }
    }

    /// The children if this node is a branch.
    pub fn as_branch(&self) -> Option<&Branch> {
        match self {
            Self::Branch(children) => Some(children),
            Self::Leaf(_) => None,
        }
    }

    /// Children of this node, turning a leaf into an empty branch first.
    fn branch_mut(&mut self) -> &mut Branch {
        if let Self::Leaf(_) = self {
            *self = Self::Branch(Branch::new());
        }
        match self {
            Self::Branch(children) => children,
            Self::Leaf(_) => unreachable!("leaf was replaced by a branch"),
        }
    }
}

/// Error raised when a JSON document does not fit the translation shape.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("translation document must be a JSON object")]
    NotAnObject,

    #[error("unsupported {kind} at `{path}`: only strings and objects are allowed")]
    UnsupportedValue { path: String, kind: &'static str },
}

/// One leaf of a flattened tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatEntry {
    pub section: String,
    /// Dot path below the section.
    pub key: String,
    pub value: String,
}

/// All sections of one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LanguageTree {
    sections: Branch,
}

impl LanguageTree {
    /// Build a tree from a parsed JSON object.
    ///
    /// Arrays, numbers, booleans and null are rejected with the path where
    /// they were found, so content that could never be synced or edited does
    /// not load silently.
    pub fn from_json(value: &Value) -> Result<Self, TreeError> {
        let Value::Object(map) = value else {
            return Err(TreeError::NotAnObject);
        };

        let mut sections = Branch::new();
        for (name, child) in map {
            sections.insert(name.clone(), node_from_json(child, name)?);
        }
        Ok(Self { sections })
    }

    /// Top-level node for a section name.
    pub fn section(&self, name: &str) -> Option<&TranslationNode> {
        self.sections.get(name)
    }

    /// Walk a dot path from the root. Stops with `None` at the first missing
    /// segment or at a leaf reached before the path ends.
    pub fn get_node(&self, path: &str) -> Option<&TranslationNode> {
        let mut segments = path.split('.');
        let mut current = self.sections.get(segments.next()?)?;
        for segment in segments {
            current = current.as_branch()?.get(segment)?;
        }
        Some(current)
    }

    /// String value at a dot path, `None` if missing or not a leaf.
    pub fn get_nested(&self, path: &str) -> Option<&str> {
        self.get_node(path).and_then(TranslationNode::as_leaf)
    }

    /// Write a leaf at a dot path.
    ///
    /// Missing intermediate branches are created and intermediate leaves are
    /// replaced by branches. The final segment always becomes a leaf, even if
    /// a branch was there before.
    pub fn set_nested(&mut self, path: &str, value: impl Into<String>) {
        let (parents, last) = match path.rsplit_once('.') {
            Some((parents, last)) => (Some(parents), last),
            None => (None, path),
        };

        let mut current = &mut self.sections;
        if let Some(parents) = parents {
            for segment in parents.split('.') {
                current = current
                    .entry(segment.to_string())
                    .or_insert_with(|| TranslationNode::Branch(Branch::new()))
                    .branch_mut();
            }
        }

        current.insert(last.to_string(), TranslationNode::Leaf(value.into()));
    }

    /// One entry per leaf below a section, keyed by its path inside the
    /// section. Leaves sitting at the top level have no section and are
    /// skipped.
    pub fn flatten(&self) -> Vec<FlatEntry> {
        let mut entries = Vec::new();
        for (section, node) in &self.sections {
            if let TranslationNode::Branch(children) = node {
                flatten_branch(section, None, children, &mut entries);
            }
        }
        entries
    }
}

fn flatten_branch(section: &str, prefix: Option<&str>, children: &Branch, out: &mut Vec<FlatEntry>) {
    for (name, node) in children {
        let key = match prefix {
            Some(prefix) => format!("{prefix}.{name}"),
            None => name.clone(),
        };

        match node {
            TranslationNode::Leaf(value) => out.push(FlatEntry {
                section: section.to_string(),
                key,
                value: value.clone(),
            }),
            TranslationNode::Branch(grandchildren) => {
                flatten_branch(section, Some(&key), grandchildren, out);
            }
        }
    }
}

fn node_from_json(value: &Value, path: &str) -> Result<TranslationNode, TreeError> {
    let kind = match value {
        Value::String(s) => return Ok(TranslationNode::Leaf(s.clone())),
        Value::Object(map) => {
            let mut children = Branch::new();
            for (name, child) in map {
                let child_path = format!("{path}.{name}");
                children.insert(name.clone(), node_from_json(child, &child_path)?);
            }
            return Ok(TranslationNode::Branch(children));
        }
        Value::Array(_) => "array",
        Value::Number(_) => "number",
        Value::Bool(_) => "boolean",
        Value::Null => "null",
    };

    Err(TreeError::UnsupportedValue {
        path: path.to_string(),
        kind,
    })
}
