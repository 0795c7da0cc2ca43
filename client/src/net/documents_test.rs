use super::*;
use serde_json::json;

// =============================================================
// FirestoreConfig
// =============================================================

#[test]
fn from_parts_requires_project_id() {
    assert_eq!(FirestoreConfig::from_parts(None, Some("k")), None);
    assert_eq!(FirestoreConfig::from_parts(Some("   "), None), None);
}

#[test]
fn from_parts_trims_and_drops_empty_key() {
    let cfg = FirestoreConfig::from_parts(Some(" controle "), Some("")).unwrap();
    assert_eq!(cfg.project_id, "controle");
    assert_eq!(cfg.api_key, None);
}

#[test]
fn collection_url_without_key() {
    let cfg = FirestoreConfig { project_id: "controle".to_owned(), api_key: None };
    assert_eq!(
        cfg.collection_url(VEHICLE_REGISTRY, None),
        "https://firestore.googleapis.com/v1/projects/controle/databases/(default)/documents/registro-veiculo"
    );
}

#[test]
fn collection_url_with_key_and_page_token() {
    let cfg = FirestoreConfig { project_id: "p".to_owned(), api_key: Some("abc".to_owned()) };
    assert_eq!(
        cfg.collection_url("c", Some("t1")),
        "https://firestore.googleapis.com/v1/projects/p/databases/(default)/documents/c?key=abc&pageToken=t1"
    );
}

#[test]
fn collection_url_percent_encodes_page_token() {
    let cfg = FirestoreConfig { project_id: "p".to_owned(), api_key: Some("k".to_owned()) };
    let url = cfg.collection_url("c", Some("AbC+d/e=="));
    assert!(url.ends_with("?key=k&pageToken=AbC%2Bd%2Fe%3D%3D"), "{url}");
}

// =============================================================
// parse_list_response
// =============================================================

#[test]
fn parse_list_response_extracts_ids_and_plain_fields() {
    let body = json!({
        "documents": [{
            "name": "projects/p/databases/(default)/documents/registro-veiculo/a1b2",
            "fields": {
                "placa": { "stringValue": "ABC-1234" },
                "vagas": { "integerValue": "42" },
                "liberado": { "booleanValue": true },
                "saida": { "nullValue": null },
                "entrada": { "timestampValue": "2019-05-06T15:59:22Z" }
            },
            "createTime": "2019-05-06T15:59:22Z"
        }]
    })
    .to_string();

    let page = parse_list_response(&body).unwrap();
    assert_eq!(page.next_page_token, None);
    assert_eq!(page.documents.len(), 1);

    let doc = &page.documents[0];
    assert_eq!(doc.id, "a1b2");
    assert_eq!(doc.fields["placa"], json!("ABC-1234"));
    assert_eq!(doc.fields["vagas"], json!(42));
    assert_eq!(doc.fields["liberado"], json!(true));
    assert_eq!(doc.fields["saida"], Value::Null);
    assert_eq!(doc.fields["entrada"], json!("2019-05-06T15:59:22Z"));
}

#[test]
fn parse_list_response_decodes_nested_map_and_array() {
    let body = json!({
        "documents": [{
            "name": "projects/p/databases/(default)/documents/c/d",
            "fields": {
                "portaria": { "mapValue": { "fields": { "nome": { "stringValue": "Norte" } } } },
                "fotos": { "arrayValue": { "values": [{ "stringValue": "a.jpg" }, { "doubleValue": 1.5 }] } },
                "vazio": { "arrayValue": {} }
            }
        }]
    })
    .to_string();

    let doc = &parse_list_response(&body).unwrap().documents[0];
    assert_eq!(doc.fields["portaria"], json!({ "nome": "Norte" }));
    assert_eq!(doc.fields["fotos"], json!(["a.jpg", 1.5]));
    assert_eq!(doc.fields["vazio"], json!([]));
}

#[test]
fn parse_list_response_empty_collection() {
    let page = parse_list_response("{}").unwrap();
    assert_eq!(page, DocumentPage::default());
}

#[test]
fn parse_list_response_keeps_next_page_token() {
    let page = parse_list_response(r#"{"documents": [], "nextPageToken": "next"}"#).unwrap();
    assert_eq!(page.next_page_token.as_deref(), Some("next"));
}

#[test]
fn parse_list_response_rejects_unknown_value_type() {
    let body = r#"{"documents": [{"name": "x/y", "fields": {"f": {"weirdValue": 1}}}]}"#;
    assert!(matches!(parse_list_response(body), Err(DocumentStoreError::Decode(_))));
}

#[test]
fn parse_list_response_rejects_bad_integer() {
    let body = r#"{"documents": [{"name": "x/y", "fields": {"f": {"integerValue": "twelve"}}}]}"#;
    assert!(matches!(parse_list_response(body), Err(DocumentStoreError::Decode(_))));
}

#[test]
fn parse_list_response_rejects_non_json() {
    assert!(matches!(parse_list_response("not json"), Err(DocumentStoreError::Decode(_))));
}

// =============================================================
// fetch_all / describe
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_all_is_unavailable_outside_browser() {
    let cfg = FirestoreConfig { project_id: "p".to_owned(), api_key: None };
    let result = futures::executor::block_on(fetch_all(&cfg, VEHICLE_REGISTRY));
    assert!(matches!(result, Err(DocumentStoreError::Unavailable(_))));
}

#[test]
fn describe_formats_id_and_fields() {
    let mut fields = BTreeMap::new();
    fields.insert("placa".to_owned(), json!("ABC-1234"));
    let doc = Document { id: "a1".to_owned(), fields };
    assert_eq!(describe(&doc), r#"a1 => {"placa":"ABC-1234"}"#);
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(
        DocumentStoreError::Status { status: 403 }.to_string(),
        "document store returned status 403"
    );
}
