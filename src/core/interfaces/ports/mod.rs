mod capture_output;
mod layer_name_resolver;
mod scene_renderer;
mod spatial_query;

pub use capture_output::CaptureOutput;
pub use layer_name_resolver::LayerNameResolver;
pub use scene_renderer::SceneRenderer;
pub use spatial_query::SpatialQuery;
