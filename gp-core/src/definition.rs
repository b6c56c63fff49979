//! Serializable form of the graph construction input.
//!
//! A definition is plain data; turning it into a [`Graph`](crate::Graph) with `Graph::try_from`
//! is where validation happens.
//!
//! ```yaml
//! edges: [[0, 1], [0, 3], [1, 2], [2, 3]]
//! edge_weights: [5, 10, 3, 1]
//! ```
use std::fs::File;
use std::io::{
    BufReader,
    Read,
};
use std::path::Path;

use serde::{
    Deserialize,
    Serialize,
};
use tracing::instrument;

use crate::errors::{
    GraphError,
    Result,
};

/// Edges plus optional edge weights, vertex coordinates and vertex weights.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDefinition {
    /// Directed `(from, to)` vertex pairs.
    pub edges: Vec<(usize, usize)>,
    /// One weight per edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_weights: Option<Vec<f64>>,
    /// One coordinate vector per vertex, all of the same dimensionality.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertices: Option<Vec<Vec<f64>>>,
    /// One weight per vertex.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertex_weights: Option<Vec<f64>>,
}

impl GraphDefinition {
    /// Parse a JSON definition.
    ///
    /// # Errors
    ///
    /// [`GraphError::Json`] if the input is not a well-formed definition.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parse a YAML definition.
    ///
    /// # Errors
    ///
    /// [`GraphError::Yaml`] if the input is not a well-formed definition.
    pub fn from_yaml_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    /// Read a definition from disk, choosing the format by file extension (`json`, `yaml`, `yml`).
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownFormat`] for any other extension, otherwise whatever opening or parsing
    /// the file produces.
    #[instrument]
    pub fn load(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
        let parse = match extension.as_deref() {
            Some("json") => Self::from_json_reader::<BufReader<File>>,
            Some("yaml" | "yml") => Self::from_yaml_reader::<BufReader<File>>,
            _ => return Err(GraphError::UnknownFormat(path.to_path_buf())),
        };

        let file = File::open(path)?;
        parse(BufReader::new(file))
    }
}
