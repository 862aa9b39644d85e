/// Format the summary line emitted when a container is built.
pub fn format_model_summary(name: &str, layers: usize, params: usize, elements: usize) -> String {
    format!(
        "{}: {} layers, {} parameters ({} values)",
        name, layers, params, elements
    )
}

/// Log the container summary at debug level.
pub fn log_model_summary(name: &str, layers: usize, params: usize, elements: usize) {
    log::debug!("{}", format_model_summary(name, layers, params, elements));
}

/// Format a per-layer trace line for a forward or backward pass.
pub fn format_layer_shape(pass: &str, index: usize, layer: &str, shape: &[usize]) -> String {
    format!("{} [{}] {} -> {:?}", pass, index, layer, shape)
}

/// Log a per-layer trace line at debug level.
pub fn log_layer_shape(pass: &str, index: usize, layer: &str, shape: &[usize]) {
    log::debug!("{}", format_layer_shape(pass, index, layer, shape));
}
