use funnelscope_analysis::{CompetitorAnalysis, ContentAnalysis};
use funnelscope_core::{ApiKeys, NewPersona};
use funnelscope_store::{
    add_personas, append, load_api_keys, load_list, load_personas, save_api_keys, Category,
    JsonFileStore, StoreError,
};

fn store() -> (tempfile::TempDir, JsonFileStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("analyzer_data"));
    (dir, store)
}

#[test]
fn reads_do_not_create_the_data_directory() {
    let (_dir, store) = store();
    let items: Vec<serde_json::Value> = load_list(&store, Category::Analyses).unwrap();
    assert!(items.is_empty());
    assert!(load_personas(&store).unwrap().is_empty());
    assert!(!store.data_dir().exists());
}

#[test]
fn first_write_creates_the_data_directory() {
    let (_dir, store) = store();
    append(&store, Category::Analyses, &serde_json::json!({"n": 1})).unwrap();
    assert!(store.data_dir().is_dir());
    assert!(store.path_for(Category::Analyses).is_file());
}

#[test]
fn analyses_persist_as_pretty_json_lists() {
    let (_dir, store) = store();
    let analysis = ContentAnalysis::run(
        "Direct Text Input",
        "A beginner guide to what is SEO.",
        &[],
        &["seo".to_string()],
    );
    append(&store, Category::Analyses, &analysis).unwrap();

    let raw = std::fs::read_to_string(store.path_for(Category::Analyses)).unwrap();
    assert!(raw.starts_with("[\n  {"));

    let loaded: Vec<ContentAnalysis> = load_list(&store, Category::Analyses).unwrap();
    assert_eq!(loaded, vec![analysis]);
}

#[test]
fn reopened_store_sees_earlier_saves() {
    let (dir, store) = store();
    let competitor = CompetitorAnalysis::run("Rival", "Competitor Direct Input", "pricing", &[], &[]);
    append(&store, Category::CompetitorAnalyses, &competitor).unwrap();
    drop(store);

    let reopened = JsonFileStore::new(dir.path().join("analyzer_data"));
    let loaded: Vec<CompetitorAnalysis> =
        load_list(&reopened, Category::CompetitorAnalyses).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].competitor_name, "Rival");
}

#[test]
fn personas_and_keys_live_in_their_own_files() {
    let (_dir, store) = store();
    add_personas(
        &store,
        vec![NewPersona {
            name: "Ops Olivia".to_string(),
            role: "COO".to_string(),
            ..NewPersona::default()
        }],
    )
    .unwrap();
    save_api_keys(
        &store,
        &ApiKeys {
            openai: "sk-test".to_string(),
            ..ApiKeys::default()
        },
    )
    .unwrap();

    assert!(store.path_for(Category::Personas).is_file());
    assert!(store.path_for(Category::ApiKeys).is_file());
    assert_eq!(load_personas(&store).unwrap()[0].name, "Ops Olivia");
    assert_eq!(load_api_keys(&store).unwrap().openai(), Some("sk-test"));
}

#[test]
fn corrupt_file_is_reported() {
    let (_dir, store) = store();
    std::fs::create_dir_all(store.data_dir()).unwrap();
    std::fs::write(store.path_for(Category::Analyses), "{not json").unwrap();
    let err = load_list::<serde_json::Value, _>(&store, Category::Analyses).unwrap_err();
    assert!(matches!(err, StoreError::Json { .. }));
}
