use crate::openapi::{Parameter, ParameterLocation};
use crate::parse::Request;

use super::path::extract_path_params;

/// Synthesize the parameter list for one request.
///
/// Query parameters come first, then the declared path parameters, then any
/// `{name}` placeholder in `normalized_path` that was not declared. A name is
/// never emitted twice for the same location.
pub fn build_parameters(request: &Request, normalized_path: &str) -> Vec<Parameter> {
    let mut parameters: Vec<Parameter> = request
        .query
        .iter()
        .map(|(name, value)| Parameter::query(name, value))
        .collect();

    parameters.extend(
        request
            .path_params
            .iter()
            .map(|(name, value)| Parameter::path(name, Some(value))),
    );

    for name in extract_path_params(normalized_path) {
        if !has_path_param(&parameters, name) {
            parameters.push(Parameter::path(name, None));
        }
    }

    parameters
}

fn has_path_param(parameters: &[Parameter], name: &str) -> bool {
    parameters
        .iter()
        .any(|p| p.location == ParameterLocation::Path && p.name == name)
}
