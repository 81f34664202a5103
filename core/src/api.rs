pub use crate::errors::{error_codes, RouteError};
pub use crate::routing::{
    applicable_middleware, compile_declarations, compile_segments, match_path,
    parse_specification, priority_score, CompiledRoute, Dispatcher, HttpMethod,
    MiddlewareBinding, ParamValue, RouteDeclaration, RouteMatch, RouterBuilder, RoutingTable,
    Segment,
};
