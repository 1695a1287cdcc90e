use super::GraphQLError;
use super::PathSegment;
use crate::source_location::SourceLocation;
use serde::Serialize;

/// The wire shape of an error in a GraphQL response: the message plus,
/// when known, locations and the response path. Empty collections are
/// omitted from the serialized form entirely rather than rendered as
/// `[]`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphQLFormattedError {
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<SourceLocation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<PathSegment>,
}

/// Projects a [`GraphQLError`] onto its transport shape, dropping the
/// server-side detail (source, offsets, node locations, cause chain).
pub fn format_error(error: &GraphQLError) -> GraphQLFormattedError {
    GraphQLFormattedError {
        message: error.message().to_string(),
        locations: error.locations().to_vec(),
        path: error.path().to_vec(),
    }
}
