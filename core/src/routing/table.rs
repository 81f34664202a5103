use crate::errors::RouteError;
use crate::routing::compiler::{compile_segments, match_path};
use crate::routing::middleware::applicable_middleware;
use crate::routing::parser::parse_specification;
use crate::routing::priority::{compare_routes, priority_score};
use crate::routing::types::{
    CompiledRoute, HttpMethod, MiddlewareBinding, RouteDeclaration, RouteMatch,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Accumulates route registrations and produces one immutable
/// `RoutingTable` per compile cycle.
///
/// Registrations are keyed by `(method, canonical pattern)`; the last
/// registration for an identical key silently replaces the prior one,
/// which is the expected re-registration path under hot reload.
#[derive(Debug, Default)]
pub struct RouterBuilder {
    routes: HashMap<(HttpMethod, String), CompiledRoute>,
}

impl RouterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse, compile and score one declaration. Failure rejects only
    /// this declaration; the builder stays usable for the rest.
    pub fn register(&mut self, declaration: RouteDeclaration) -> Result<(), RouteError> {
        let segments = parse_specification(&declaration.spec)?;
        let pattern = compile_segments(&segments)?;
        let priority = priority_score(&pattern.segments);

        let route = CompiledRoute {
            method: declaration.method,
            canonical: pattern.canonical,
            segments: pattern.segments,
            param_names: pattern.param_names,
            priority,
            handler_ref: declaration.handler_ref,
            middleware: declaration.middleware,
            path_regex: pattern.regex,
        };

        let key = (route.method, route.canonical.clone());
        if let Some(previous) = self.routes.insert(key, route) {
            log::debug!(
                "Replaced registration for {:?} {}",
                previous.method,
                previous.canonical
            );
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Freeze into an immutable table: attach prefix-scoped middleware
    /// (scoped bindings first, then the route's own declarations) and
    /// sort each method partition into descending priority order.
    pub fn compile(self, bindings: &[MiddlewareBinding]) -> RoutingTable {
        let mut partitions: HashMap<HttpMethod, Vec<CompiledRoute>> = HashMap::new();
        for (_, mut route) in self.routes {
            let mut middleware = applicable_middleware(&route.canonical, bindings);
            middleware.append(&mut route.middleware);
            route.middleware = middleware;
            partitions.entry(route.method).or_default().push(route);
        }

        let mut total = 0;
        for routes in partitions.values_mut() {
            routes.sort_by(compare_routes);
            total += routes.len();
        }
        log::debug!("Compiled routing table with {total} routes");

        RoutingTable { partitions }
    }
}

/// Immutable, method-partitioned, priority-ordered route table.
///
/// `find` takes `&self` and mutates nothing, so matching may run fully
/// in parallel across arbitrarily many callers.
#[derive(Debug)]
pub struct RoutingTable {
    partitions: HashMap<HttpMethod, Vec<CompiledRoute>>,
}

impl RoutingTable {
    /// Resolve the winning route for an incoming request. `None` is
    /// the normal negative result (404 territory, including method
    /// mismatch on an otherwise-matching path).
    pub fn find(&self, method: HttpMethod, path: &str) -> Option<RouteMatch> {
        let candidates = self.partitions.get(&method)?;
        for route in candidates {
            if let Some(params) = match_path(&route.path_regex, &route.segments, path) {
                return Some(RouteMatch {
                    handler_ref: route.handler_ref.clone(),
                    params,
                    middleware: route.middleware.clone(),
                });
            }
        }
        None
    }

    pub fn len(&self) -> usize {
        self.partitions.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.partitions.values().all(Vec::is_empty)
    }

    /// Routes for one method in match-priority order.
    pub fn routes_for(&self, method: HttpMethod) -> &[CompiledRoute] {
        self.partitions.get(&method).map_or(&[], Vec::as_slice)
    }
}

#[derive(Debug)]
enum DispatcherState {
    Building(RouterBuilder),
    Ready(Arc<RoutingTable>),
}

/// Two-state front door over builder and table.
///
/// Uncompiled accepts `register`/`bind_middleware` and fails `find`
/// with `NotReady`; `compile` transitions once to Compiled, which
/// serves `find` and fails registration with `AlreadyCompiled`.
/// `reset` is the explicit transition back, starting a fresh cycle.
#[derive(Debug)]
pub struct Dispatcher {
    state: DispatcherState,
    bindings: Vec<MiddlewareBinding>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            state: DispatcherState::Building(RouterBuilder::new()),
            bindings: Vec::new(),
        }
    }

    pub fn register(&mut self, declaration: RouteDeclaration) -> Result<(), RouteError> {
        match &mut self.state {
            DispatcherState::Building(builder) => builder.register(declaration),
            DispatcherState::Ready(_) => Err(RouteError::AlreadyCompiled),
        }
    }

    pub fn bind_middleware(&mut self, binding: MiddlewareBinding) -> Result<(), RouteError> {
        match &self.state {
            DispatcherState::Building(_) => {
                self.bindings.push(binding);
                Ok(())
            }
            DispatcherState::Ready(_) => Err(RouteError::AlreadyCompiled),
        }
    }

    /// Freeze the accumulated registrations into the served table.
    /// The table is returned behind an `Arc` so a hot-reload
    /// collaborator can hold it and atomically swap in a successor.
    pub fn compile(&mut self) -> Result<Arc<RoutingTable>, RouteError> {
        match std::mem::replace(
            &mut self.state,
            DispatcherState::Building(RouterBuilder::new()),
        ) {
            DispatcherState::Building(builder) => {
                let table = Arc::new(builder.compile(&self.bindings));
                self.state = DispatcherState::Ready(Arc::clone(&table));
                Ok(table)
            }
            ready @ DispatcherState::Ready(_) => {
                self.state = ready;
                Err(RouteError::AlreadyCompiled)
            }
        }
    }

    pub fn find(&self, method: HttpMethod, path: &str) -> Result<Option<RouteMatch>, RouteError> {
        match &self.state {
            DispatcherState::Ready(table) => Ok(table.find(method, path)),
            DispatcherState::Building(_) => Err(RouteError::NotReady),
        }
    }

    /// Currently served table, if compiled.
    pub fn table(&self) -> Option<Arc<RoutingTable>> {
        match &self.state {
            DispatcherState::Ready(table) => Some(Arc::clone(table)),
            DispatcherState::Building(_) => None,
        }
    }

    /// Start a fresh compile cycle. The previous table stays valid for
    /// anyone still holding its `Arc`.
    pub fn reset(&mut self) {
        self.state = DispatcherState::Building(RouterBuilder::new());
        self.bindings.clear();
    }
}

/// Compile a whole batch of discovered declarations in one call.
///
/// Malformed declarations are rejected individually and reported back;
/// compilation of the remaining declarations continues.
pub fn compile_declarations(
    declarations: Vec<RouteDeclaration>,
    bindings: &[MiddlewareBinding],
) -> (RoutingTable, Vec<RouteError>) {
    let mut builder = RouterBuilder::new();
    let mut rejected = Vec::new();
    for declaration in declarations {
        if let Err(e) = builder.register(declaration) {
            rejected.push(e);
        }
    }
    (builder.compile(bindings), rejected)
}
