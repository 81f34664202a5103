use fsroute::api::*;

fn decl(spec: &str, method: HttpMethod, handler: &str) -> RouteDeclaration {
    let _ = env_logger::builder().is_test(true).try_init();
    RouteDeclaration::new(spec, method, handler)
}

#[test]
fn test_literal_specifications_round_trip() {
    let specs = ["about/page", "docs/getting-started/page", "api/health/route"];
    let declarations = specs
        .iter()
        .map(|s| decl(s, HttpMethod::GET, *s))
        .collect();
    let (table, rejected) = compile_declarations(declarations, &[]);
    assert!(rejected.is_empty());

    for (spec, path) in [
        ("about/page", "/about"),
        ("docs/getting-started/page", "/docs/getting-started"),
        ("api/health/route", "/api/health"),
    ] {
        let matched = table.find(HttpMethod::GET, path).unwrap();
        assert_eq!(matched.handler_ref, spec);
        assert!(matched.params.is_empty());
    }
}

#[test]
fn test_dynamic_specification_binds_and_bounds() {
    let (table, _) = compile_declarations(
        vec![decl("users/[id]", HttpMethod::GET, "show")],
        &[],
    );

    let matched = table.find(HttpMethod::GET, "/users/42").unwrap();
    assert_eq!(matched.params.get("id"), Some(&ParamValue::Single("42".into())));

    assert!(table.find(HttpMethod::GET, "/users").is_none());
    assert!(table.find(HttpMethod::GET, "/users/42/extra").is_none());
}

#[test]
fn test_catch_all_specification_greedy_and_nonempty() {
    let (table, _) = compile_declarations(
        vec![decl("files/[...slug]", HttpMethod::GET, "files")],
        &[],
    );

    let matched = table.find(HttpMethod::GET, "/files/a/b/c").unwrap();
    assert_eq!(
        matched.params.get("slug"),
        Some(&ParamValue::Multi(vec!["a".into(), "b".into(), "c".into()]))
    );

    assert!(table.find(HttpMethod::GET, "/files").is_none());
}

#[test]
fn test_group_segment_elided_from_url() {
    let (table, _) = compile_declarations(
        vec![decl("(group)/dashboard/page", HttpMethod::GET, "dashboard")],
        &[],
    );

    assert!(table.find(HttpMethod::GET, "/dashboard").is_some());
    assert!(table.find(HttpMethod::GET, "/group/dashboard").is_none());
}

#[test]
fn test_root_specification_compiles_to_slash() {
    let (table, _) = compile_declarations(vec![decl("page", HttpMethod::GET, "root")], &[]);
    let matched = table.find(HttpMethod::GET, "/").unwrap();
    assert_eq!(matched.handler_ref, "root");
    assert!(matched.params.is_empty());
}

#[test]
fn test_static_route_wins_over_dynamic_in_either_order() {
    for reversed in [false, true] {
        let mut declarations = vec![
            decl("users/[id]", HttpMethod::GET, "show"),
            decl("users/new", HttpMethod::GET, "new"),
        ];
        if reversed {
            declarations.reverse();
        }
        let (table, _) = compile_declarations(declarations, &[]);
        assert_eq!(table.find(HttpMethod::GET, "/users/new").unwrap().handler_ref, "new");
        assert_eq!(table.find(HttpMethod::GET, "/users/7").unwrap().handler_ref, "show");
    }
}

#[test]
fn test_duplicate_identity_key_resolves_to_last_handler() {
    let (table, rejected) = compile_declarations(
        vec![
            decl("users/[id]", HttpMethod::GET, "first"),
            decl("users/[id]", HttpMethod::GET, "second"),
        ],
        &[],
    );
    assert!(rejected.is_empty());
    assert_eq!(table.len(), 1);
    assert_eq!(table.find(HttpMethod::GET, "/users/1").unwrap().handler_ref, "second");
}

#[test]
fn test_recompiling_identical_set_is_idempotent() {
    let declarations = vec![
        decl("page", HttpMethod::GET, "root"),
        decl("users/new", HttpMethod::GET, "new"),
        decl("users/[id]", HttpMethod::GET, "show"),
        decl("users/[id]", HttpMethod::POST, "update"),
        decl("files/[...slug]", HttpMethod::GET, "files"),
        decl("(admin)/settings", HttpMethod::GET, "settings"),
    ];

    let mut dispatcher = Dispatcher::new();
    for d in declarations.clone() {
        dispatcher.register(d).unwrap();
    }
    let first = dispatcher.compile().unwrap();

    dispatcher.reset();
    for d in declarations {
        dispatcher.register(d).unwrap();
    }
    let second = dispatcher.compile().unwrap();

    for method in [HttpMethod::GET, HttpMethod::POST] {
        let a: Vec<_> = first.routes_for(method).iter().map(|r| &r.canonical).collect();
        let b: Vec<_> = second.routes_for(method).iter().map(|r| &r.canonical).collect();
        assert_eq!(a, b);
    }

    let probes = [
        "/", "/users/new", "/users/42", "/files/x/y", "/settings", "/missing",
    ];
    for probe in probes {
        let a = first.find(HttpMethod::GET, probe).map(|m| m.handler_ref);
        let b = second.find(HttpMethod::GET, probe).map(|m| m.handler_ref);
        assert_eq!(a, b, "probe {probe} diverged between compile cycles");
    }
}

#[test]
fn test_middleware_scoping_end_to_end() {
    let bindings = vec![
        MiddlewareBinding::new("/", vec!["logging".into()]),
        MiddlewareBinding::new("/admin", vec!["auth".into()]),
    ];
    let (table, _) = compile_declarations(
        vec![
            decl("admin/users", HttpMethod::GET, "admin-users"),
            decl("public", HttpMethod::GET, "public"),
        ],
        &bindings,
    );

    assert_eq!(
        table.find(HttpMethod::GET, "/admin/users").unwrap().middleware,
        vec!["logging", "auth"]
    );
    assert_eq!(
        table.find(HttpMethod::GET, "/public").unwrap().middleware,
        vec!["logging"]
    );
}

#[test]
fn test_invalid_specification_does_not_poison_batch() {
    let (table, rejected) = compile_declarations(
        vec![
            decl("ok/page", HttpMethod::GET, "ok"),
            decl("bad/[...slug]/tail", HttpMethod::GET, "bad"),
            decl("also-ok/[id]", HttpMethod::GET, "also-ok"),
        ],
        &[],
    );

    assert_eq!(rejected.len(), 1);
    assert!(matches!(
        rejected[0],
        RouteError::InvalidSpecification { ref code, .. }
            if code == error_codes::MISPLACED_CATCH_ALL
    ));
    assert!(table.find(HttpMethod::GET, "/ok").is_some());
    assert!(table.find(HttpMethod::GET, "/also-ok/5").is_some());
}

#[test]
fn test_match_result_serializes_for_serving_collaborator() {
    let (table, _) = compile_declarations(
        vec![decl("repos/[owner]/[...path]", HttpMethod::GET, "blob")],
        &[],
    );
    let matched = table.find(HttpMethod::GET, "/repos/octo/src/lib.rs").unwrap();
    let value = serde_json::to_value(&matched).unwrap();
    assert_eq!(value["handler_ref"], serde_json::json!("blob"));
    assert_eq!(value["params"]["owner"], serde_json::json!("octo"));
    assert_eq!(value["params"]["path"], serde_json::json!(["src", "lib.rs"]));
}

#[test]
fn test_concurrent_matching_on_shared_table() {
    let mut dispatcher = Dispatcher::new();
    dispatcher.register(decl("users/[id]", HttpMethod::GET, "show")).unwrap();
    let table = dispatcher.compile().unwrap();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let table = std::sync::Arc::clone(&table);
            std::thread::spawn(move || {
                let path = format!("/users/{i}");
                let matched = table.find(HttpMethod::GET, &path).unwrap();
                assert_eq!(
                    matched.params.get("id"),
                    Some(&ParamValue::Single(i.to_string()))
                );
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
