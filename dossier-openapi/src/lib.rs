mod builder;
mod components;
mod explore;
mod registry;
mod sort;

pub use builder::{
    build_spec, to_json_string, DocumentBuilder, DocumentScanner, OpenApiConfig, RouteScanner,
};
pub use components::{merge_schemas, registry_components};
pub use explore::{ExploreContext, Explored, ProviderExplorer, SchemaExplorer, TypeExplorer};
pub use registry::SchemaRegistry;
pub use sort::{sort_schemas, SortPolicy};
