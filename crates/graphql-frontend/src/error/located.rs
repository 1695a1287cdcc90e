use super::GraphQLError;
use super::PathSegment;
use crate::ast::Node;

/// Attributes an error to a field by attaching the response path and,
/// when the underlying error lacks them, the given node locations.
///
/// An error that already carries a path has been attributed once
/// already and is passed through untouched. Without an underlying
/// error a placeholder message is used.
pub fn located_error(
    original_error: Option<GraphQLError>,
    nodes: &[&dyn Node],
    path: Vec<PathSegment>,
) -> GraphQLError {
    let Some(original) = original_error else {
        return GraphQLError::new("An unknown error occurred.", nodes, None, Vec::new(), path, None);
    };
    if !original.path().is_empty() {
        return original;
    }
    let original_nodes: Vec<&dyn Node> = original
        .nodes()
        .iter()
        .map(|loc| loc as &dyn Node)
        .collect();
    let nodes = if original_nodes.is_empty() {
        nodes
    } else {
        &original_nodes[..]
    };
    GraphQLError::new(
        original.message().to_string(),
        nodes,
        original.source().cloned(),
        original.positions().to_vec(),
        path,
        Some(original.clone()),
    )
}
