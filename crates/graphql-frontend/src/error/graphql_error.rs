use crate::ast::Location;
use crate::ast::Node;
use crate::source::Source;
use crate::source_location::SourceLocation;
use crate::source_location::get_location;
use serde::Serialize;
use smallvec::SmallVec;

/// One segment of a response path: either a field name or a list index.
///
/// Serializes untagged so a path renders as e.g. `["friends", 0, "name"]`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

impl From<&str> for PathSegment {
    fn from(value: &str) -> Self {
        PathSegment::Field(value.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(value: String) -> Self {
        PathSegment::Field(value)
    }
}

impl From<usize> for PathSegment {
    fn from(value: usize) -> Self {
        PathSegment::Index(value)
    }
}

/// A positioned error describing why a GraphQL operation failed.
///
/// Beyond the human-readable message this carries everything needed to
/// point a user at the offending text: the AST node locations involved,
/// the [`Source`] the error arose in, character offsets into its body,
/// and the line/column pairs derived from them.
#[derive(Clone, Debug, thiserror::Error)]
#[error("{message}")]
pub struct GraphQLError {
    message: String,
    locations: SmallVec<[SourceLocation; 1]>,
    path: Vec<PathSegment>,
    nodes: Vec<Location>,
    // Named `src` so the derive chains `original_error`, not this.
    src: Option<Source>,
    positions: SmallVec<[usize; 1]>,
    #[source]
    original_error: Option<Box<GraphQLError>>,
}

impl GraphQLError {
    /// Builds an error, deriving whatever positional data was not given
    /// explicitly.
    ///
    /// Absent a source, the source of the first node's location is used.
    /// Absent explicit positions, the start offsets of the node locations
    /// are used; an empty derived list is normalized to absent. Line and
    /// column pairs are then computed from whichever positions survive,
    /// but only when a source is present to resolve them against.
    pub fn new(
        message: impl Into<String>,
        nodes: &[&dyn Node],
        source: Option<Source>,
        positions: Vec<usize>,
        path: Vec<PathSegment>,
        original_error: Option<GraphQLError>,
    ) -> Self {
        let nodes: Vec<Location> = nodes.iter().filter_map(|node| node.loc().cloned()).collect();
        let src = source.or_else(|| nodes.first().map(|loc| loc.source.clone()));
        let positions: SmallVec<[usize; 1]> = if positions.is_empty() {
            nodes.iter().map(|loc| loc.start).collect()
        } else {
            positions.into()
        };
        let locations = match &src {
            Some(source) => positions
                .iter()
                .map(|&position| get_location(source, position))
                .collect(),
            None => SmallVec::new(),
        };
        GraphQLError {
            message: message.into(),
            locations,
            path,
            nodes,
            src,
            positions,
            original_error: original_error.map(Box::new),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Line/column pairs for each position, in source order.
    pub fn locations(&self) -> &[SourceLocation] {
        &self.locations
    }

    /// The response path to the field the error arose in. Empty for
    /// errors not attributed to a field.
    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    /// Locations of the AST nodes involved in producing this error.
    pub fn nodes(&self) -> &[Location] {
        &self.nodes
    }

    pub fn source(&self) -> Option<&Source> {
        self.src.as_ref()
    }

    /// Character offsets into the source body, in source order.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// The underlying error this one wraps, if any.
    pub fn original_error(&self) -> Option<&GraphQLError> {
        self.original_error.as_deref()
    }

    /// Projects this error onto the transport shape mandated for GraphQL
    /// responses.
    pub fn formatted(&self) -> super::GraphQLFormattedError {
        super::format_error(self)
    }
}
