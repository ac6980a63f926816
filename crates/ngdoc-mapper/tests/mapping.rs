use ngdoc_mapper::{map, MapError, Module, ParsedComment, Tag, TagKind};

fn fixture(name: &str) -> Vec<ParsedComment> {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    let content = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}

fn module<'a>(tree: &'a [Module], name: &str) -> &'a Module {
    tree.iter().find(|m| m.name == name).unwrap()
}

#[test]
fn no_module_declarations_yield_nothing() {
    let comments = vec![ParsedComment::new(vec![
        Tag::new("ngdoc").with_description("service"),
        Tag::new("name").with_name("$http"),
        Tag::new("module").with_name("ng"),
    ])];
    assert!(map(&comments).unwrap().is_empty());
}

#[test]
fn fixture_tree_shape() {
    let tree = map(&fixture("ng.json")).unwrap();
    let names: Vec<_> = tree.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["ng", "ngRoute"]);

    let ng = module(&tree, "ng");
    let entities: Vec<_> = ng.entities.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(entities, ["$http", "ngClick"]);

    let route = module(&tree, "ngRoute");
    assert_eq!(route.entities.len(), 1);
    assert_eq!(route.entities[0].name, "$routeProvider");
    assert_eq!(route.entities[0].requires, ["$location"]);
}

#[test]
fn no_cross_module_leakage() {
    let tree = map(&fixture("ng.json")).unwrap();
    let all: Vec<_> = tree
        .iter()
        .flat_map(|m| m.entities.iter().map(|e| e.name.as_str()))
        .collect();
    assert!(!all.contains(&"$orphan"));
    assert!(!all.contains(&"guide"));
}

#[test]
fn entity_attributes_and_requires() {
    let tree = map(&fixture("ng.json")).unwrap();
    let http = &module(&tree, "ng").entities[0];

    assert_eq!(http.kind, "service");
    assert_eq!(http.requires, ["$httpBackend", "$cacheFactory"]);
    assert_eq!(
        http.description.as_deref(),
        Some("Communicates with remote HTTP servers.")
    );
    assert_eq!(http.attributes.len(), 2);
    assert_eq!(http.attributes[0].name, "interceptors");
    assert_eq!(http.attributes[0].type_name.as_deref(), Some("Function[]"));
    assert!(!http.attributes[0].optional);
    assert_eq!(http.attributes[1].name, "defaults");
    assert_eq!(http.attributes[1].type_name.as_deref(), Some("Object"));
    assert!(http.attributes[1].optional);
}

#[test]
fn bare_deprecated_tag_has_no_notice() {
    let tree = map(&fixture("ng.json")).unwrap();
    let click = &module(&tree, "ng").entities[1];
    assert_eq!(click.kind, "Directive");
    assert_eq!(click.deprecated, None);
    assert!(click.methods.is_empty());
}

#[test]
fn methods_follow_method_of_reference() {
    let tree = map(&fixture("ng.json")).unwrap();
    let http = &module(&tree, "ng").entities[0];
    let names: Vec<_> = http.methods.iter().map(|m| m.name.as_str()).collect();
    // $httpProvider#useApplyAsync names a different entity.
    assert_eq!(names, ["get", "pendingRequests"]);

    let get = &http.methods[0];
    let params = get.params.as_ref().unwrap();
    assert_eq!(params.len(), 2);
    assert_eq!(params[0].type_name.as_deref(), Some("string"));
    assert_eq!(params[1].name, "config");
    let returns = get.returns.as_ref().unwrap();
    assert_eq!(returns.name, "Future object");
    assert_eq!(returns.type_name.as_deref(), Some("HttpPromise"));

    let pending = &http.methods[1];
    assert_eq!(pending.params, None);
    assert_eq!(pending.deprecated.as_deref(), Some("Inspect $httpBackend instead."));
}

#[test]
fn attributes_empty_but_params_absent() {
    let tree = map(&fixture("ng.json")).unwrap();
    let provider = &module(&tree, "ngRoute").entities[0];
    assert!(provider.attributes.is_empty());

    let json = serde_json::to_value(&tree).unwrap();
    assert_eq!(json[1]["entities"][0]["attributes"], serde_json::json!([]));
    let pending = &json[0]["entities"][0]["methods"][1];
    assert!(pending.get("params").is_none());
    assert!(pending.get("returns").is_none());
}

#[test]
fn mapping_is_idempotent() {
    let comments = fixture("ng.json");
    assert_eq!(map(&comments).unwrap(), map(&comments).unwrap());
}

#[test]
fn module_without_name_aborts_mapping() {
    let mut comments = fixture("ng.json");
    comments.push(ParsedComment::new(vec![
        Tag::new("ngdoc").with_description("module"),
        Tag::new("description").with_description("nameless"),
    ]));
    assert_eq!(
        map(&comments),
        Err(MapError::MissingTag {
            tag: TagKind::Name,
            declaring: "module"
        })
    );
}

#[test]
fn method_without_description_aborts_mapping() {
    let mut comments = fixture("ng.json");
    comments.push(ParsedComment::new(vec![
        Tag::new("ngdoc").with_description("method"),
        Tag::new("name").with_name("$http#head"),
        Tag::new("methodOf").with_description("$http"),
    ]));
    let err = map(&comments).unwrap_err();
    assert_eq!(err.to_string(), "method comment has no @description tag");
}
