pub mod compiler;
pub mod middleware;
pub mod parser;
pub mod priority;
pub mod table;
pub mod types;

pub use compiler::{compile_segments, match_path, normalize_path, CompiledPattern};
pub use middleware::applicable_middleware;
pub use parser::parse_specification;
pub use priority::{compare_routes, priority_score};
pub use table::{compile_declarations, Dispatcher, RouterBuilder, RoutingTable};
pub use types::{
    CompiledRoute, HttpMethod, MiddlewareBinding, ParamValue, RouteDeclaration, RouteMatch,
    Segment,
};
