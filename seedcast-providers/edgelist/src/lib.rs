//! Edge-list provider turning delimiter-separated text rows into a graph.
//!
//! Link rows carry one `source,target` pair per line; an optional second
//! stream of node rows (`label` or `label,cluster`) declares nodes up front
//! and attaches cluster tags. Blank lines and `#` comments are skipped.
//! Malformed rows fail with a line-numbered error, while self-loop and
//! duplicate link rows are silently dropped by the builder.

use std::io::BufRead;

use seedcast_core::{Graph, GraphBuilder};
use thiserror::Error;

/// Graph parsed from edge-list text rows.
#[derive(Debug)]
pub struct EdgeListSource {
    name: String,
    graph: Graph,
    labels: Vec<String>,
}

/// Errors raised while parsing edge-list rows.
#[derive(Debug, Error)]
pub enum EdgeListError {
    /// A link row did not split into exactly two non-empty fields.
    #[error("links line {line}: expected `source,target` but found `{row}`")]
    MalformedLink {
        /// One-based line number within the links stream.
        line: usize,
        /// Offending row with surrounding whitespace removed.
        row: String,
    },
    /// A node row did not split into a label and optional cluster field.
    #[error("nodes line {line}: expected `label` or `label,cluster` but found `{row}`")]
    MalformedNode {
        /// One-based line number within the nodes stream.
        line: usize,
        /// Offending row with surrounding whitespace removed.
        row: String,
    },
    /// A node row carried a cluster field that is not an unsigned integer.
    #[error("nodes line {line}: cluster tag `{value}` is not an unsigned integer")]
    InvalidCluster {
        /// One-based line number within the nodes stream.
        line: usize,
        /// Raw cluster field.
        value: String,
    },
    /// Reading an input stream failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl EdgeListSource {
    /// Parses link rows, and optionally node rows, into a graph.
    ///
    /// Node rows are ingested first so declared labels take the lowest ids;
    /// endpoints seen only in link rows are interned afterwards in
    /// first-seen order.
    ///
    /// # Errors
    /// Returns [`EdgeListError`] when a stream cannot be read or a row is
    /// malformed.
    ///
    /// # Examples
    /// ```
    /// # use std::error::Error;
    /// # use std::io::Cursor;
    /// # use seedcast_providers_edgelist::EdgeListSource;
    /// #
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// let links = Cursor::new("ana,bruno\nbruno,carla\n");
    /// let source = EdgeListSource::try_from_readers("demo", links, None::<Cursor<&[u8]>>)?;
    /// assert_eq!(source.graph().node_count(), 3);
    /// assert_eq!(source.labels()[0], "ana");
    /// # Ok(())
    /// # }
    /// ```
    pub fn try_from_readers(
        name: impl Into<String>,
        links: impl BufRead,
        nodes: Option<impl BufRead>,
    ) -> Result<Self, EdgeListError> {
        let mut builder = GraphBuilder::new();
        if let Some(reader) = nodes {
            ingest_node_rows(&mut builder, reader)?;
        }
        ingest_link_rows(&mut builder, links)?;
        let (graph, labels) = builder.build();
        Ok(Self {
            name: name.into(),
            graph,
            labels,
        })
    }

    /// Name reported for this source.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parsed graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Interned labels in node-id order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Consumes the source, returning the graph and labels.
    #[must_use]
    pub fn into_parts(self) -> (Graph, Vec<String>) {
        (self.graph, self.labels)
    }
}

fn ingest_link_rows(
    builder: &mut GraphBuilder,
    reader: impl BufRead,
) -> Result<(), EdgeListError> {
    for (index, row) in reader.lines().enumerate() {
        let row = row?;
        let Some(trimmed) = content(&row) else {
            continue;
        };
        let (source, target) = split_pair(trimmed).ok_or_else(|| EdgeListError::MalformedLink {
            line: index + 1,
            row: trimmed.to_owned(),
        })?;
        builder.link(source, target);
    }
    Ok(())
}

fn ingest_node_rows(
    builder: &mut GraphBuilder,
    reader: impl BufRead,
) -> Result<(), EdgeListError> {
    for (index, row) in reader.lines().enumerate() {
        let row = row?;
        let Some(trimmed) = content(&row) else {
            continue;
        };
        let line = index + 1;
        match trimmed.split_once(',') {
            None => {
                builder.intern(trimmed);
            }
            Some((label, cluster)) => {
                let label = label.trim();
                let cluster = cluster.trim();
                if label.is_empty() || cluster.contains(',') {
                    return Err(EdgeListError::MalformedNode {
                        line,
                        row: trimmed.to_owned(),
                    });
                }
                let tag = cluster
                    .parse::<u32>()
                    .map_err(|_| EdgeListError::InvalidCluster {
                        line,
                        value: cluster.to_owned(),
                    })?;
                builder.tag(label, tag);
            }
        }
    }
    Ok(())
}

/// Strips surrounding whitespace, filtering out blank and comment rows.
fn content(row: &str) -> Option<&str> {
    let trimmed = row.trim();
    (!trimmed.is_empty() && !trimmed.starts_with('#')).then_some(trimmed)
}

/// Splits a link row into exactly two non-empty fields.
fn split_pair(row: &str) -> Option<(&str, &str)> {
    let (source, target) = row.split_once(',')?;
    let source = source.trim();
    let target = target.trim();
    (!source.is_empty() && !target.is_empty() && !target.contains(','))
        .then_some((source, target))
}
