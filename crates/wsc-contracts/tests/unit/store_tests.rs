//! Record store semantics against prepared world states

use wsc_contracts::RecordStore;
use wsc_domain::error::Error;
use wsc_domain::ports::WorldState;
use wsc_domain::record::{Dong, DongPatch, Rr, RrPatch};

use crate::support::{BAD_KEY, FOREIGN_KEY, MISSING_KEY, RR_KEY, empty_fixture, fixture};

fn rr_store() -> RecordStore<Rr> {
    RecordStore::new()
}

#[tokio::test]
async fn exists_is_true_for_a_stored_record() {
    let fx = fixture().await;
    assert!(rr_store().exists(&fx.ctx, RR_KEY).await.unwrap());
}

#[tokio::test]
async fn exists_is_false_for_a_missing_key() {
    let fx = fixture().await;
    assert!(!rr_store().exists(&fx.ctx, MISSING_KEY).await.unwrap());
}

#[tokio::test]
async fn exists_is_true_for_undecodable_bytes() {
    // Presence is about stored bytes, not about whether they decode
    let fx = fixture().await;
    assert!(rr_store().exists(&fx.ctx, FOREIGN_KEY).await.unwrap());
}

#[tokio::test]
async fn exists_wraps_backend_failures() {
    let fx = fixture().await;
    let err = rr_store().exists(&fx.ctx, BAD_KEY).await.unwrap_err();
    assert!(matches!(err, Error::ReadFailure { .. }));
    assert!(
        err.to_string()
            .starts_with("Could not read from world state for key 'statebad'")
    );
}

#[tokio::test]
async fn empty_stored_value_counts_as_absent() {
    let (memory, ctx) = empty_fixture();
    memory.put_state("emptykey", b"").await.unwrap();
    assert!(!rr_store().exists(&ctx, "emptykey").await.unwrap());
    let err = rr_store().get(&ctx, "emptykey").await.unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[tokio::test]
async fn get_decodes_the_stored_record() {
    let fx = fixture().await;
    let record = rr_store().get(&fx.ctx, RR_KEY).await.unwrap();
    assert_eq!(record, Rr::new("set value"));
}

#[tokio::test]
async fn get_fails_not_found_for_a_missing_key() {
    let fx = fixture().await;
    let err = rr_store().get(&fx.ctx, MISSING_KEY).await.unwrap_err();
    assert_eq!(err.to_string(), "The asset missingkey does not exist");
}

#[tokio::test]
async fn get_surfaces_undecodable_bytes_as_deserialization_failure() {
    let fx = fixture().await;
    let err = rr_store().get(&fx.ctx, FOREIGN_KEY).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Could not unmarshal world state data to type Rr"
    );
}

#[tokio::test]
async fn create_writes_the_canonical_json_document() {
    let fx = fixture().await;
    rr_store()
        .create(&fx.ctx, "key001", &Rr::new("some value"))
        .await
        .unwrap();
    assert_eq!(
        fx.memory.get_state("key001").await.unwrap(),
        Some(br#"{"value":"some value"}"#.to_vec())
    );
}

#[tokio::test]
async fn create_refuses_an_occupied_key() {
    let fx = fixture().await;
    let err = rr_store()
        .create(&fx.ctx, RR_KEY, &Rr::new("other value"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "The asset rrkey already exists");
}

#[tokio::test]
async fn create_refuses_a_key_holding_foreign_bytes() {
    // Occupied is occupied, decodable or not
    let fx = fixture().await;
    let err = rr_store()
        .create(&fx.ctx, FOREIGN_KEY, &Rr::new("some value"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::AlreadyExists { .. }));
}

#[tokio::test]
async fn create_stops_before_writing_when_the_precondition_read_fails() {
    let fx = fixture().await;
    let err = rr_store()
        .create(&fx.ctx, BAD_KEY, &Rr::new("some value"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ReadFailure { .. }));
    assert_eq!(fx.counter.puts(), 0);
}

#[tokio::test]
async fn update_replaces_the_stored_document() {
    let fx = fixture().await;
    rr_store()
        .update(
            &fx.ctx,
            RR_KEY,
            RrPatch {
                value: "new value".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(
        fx.memory.get_state(RR_KEY).await.unwrap(),
        Some(br#"{"value":"new value"}"#.to_vec())
    );

    // Repeating the same update settles on the same bytes
    rr_store()
        .update(
            &fx.ctx,
            RR_KEY,
            RrPatch {
                value: "new value".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(
        fx.memory.get_state(RR_KEY).await.unwrap(),
        Some(br#"{"value":"new value"}"#.to_vec())
    );
}

#[tokio::test]
async fn update_fails_not_found_for_a_missing_key() {
    let fx = fixture().await;
    let err = rr_store()
        .update(
            &fx.ctx,
            MISSING_KEY,
            RrPatch {
                value: "new value".into(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
    assert_eq!(fx.counter.puts(), 0);
}

#[tokio::test]
async fn update_over_undecodable_bytes_fails_without_writing() {
    let fx = fixture().await;
    let err = rr_store()
        .update(
            &fx.ctx,
            FOREIGN_KEY,
            RrPatch {
                value: "new value".into(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Deserialization { .. }));
    assert_eq!(fx.counter.puts(), 0);
    assert_eq!(
        fx.memory.get_state(FOREIGN_KEY).await.unwrap(),
        Some(b"some value".to_vec())
    );
}

#[tokio::test]
async fn update_stops_before_writing_when_the_precondition_read_fails() {
    let fx = fixture().await;
    let err = rr_store()
        .update(
            &fx.ctx,
            BAD_KEY,
            RrPatch {
                value: "new value".into(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ReadFailure { .. }));
    assert_eq!(fx.counter.puts(), 0);
}

#[tokio::test]
async fn delete_removes_the_stored_entry() {
    let fx = fixture().await;
    rr_store().delete(&fx.ctx, RR_KEY).await.unwrap();
    assert_eq!(fx.memory.get_state(RR_KEY).await.unwrap(), None);
}

#[tokio::test]
async fn delete_fails_not_found_without_touching_the_backend_delete() {
    let fx = fixture().await;
    let err = rr_store().delete(&fx.ctx, MISSING_KEY).await.unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
    assert_eq!(fx.counter.deletes(), 0);
}

#[tokio::test]
async fn delete_stops_when_the_precondition_read_fails() {
    let fx = fixture().await;
    let err = rr_store().delete(&fx.ctx, BAD_KEY).await.unwrap_err();
    assert!(matches!(err, Error::ReadFailure { .. }));
    assert_eq!(fx.counter.deletes(), 0);
}

#[tokio::test]
async fn patching_preserves_fields_outside_the_patch() {
    let (memory, ctx) = empty_fixture();
    let store: RecordStore<Dong> = RecordStore::new();
    store
        .create(&ctx, "dong001", &Dong::new("dong-7", "gold dong", "token-abc"))
        .await
        .unwrap();
    store
        .update(
            &ctx,
            "dong001",
            DongPatch {
                name: "silver dong".into(),
            },
        )
        .await
        .unwrap();
    let stored = store.get(&ctx, "dong001").await.unwrap();
    assert_eq!(stored.name, "silver dong");
    assert_eq!(stored.id, "dong-7");
    assert_eq!(stored.token, "token-abc");
    assert_eq!(memory.len(), 1);
}
