use seafreight_core::datasets::{content_hash, DatasetCache, DatasetStore, LoadStatus};
use seafreight_parser::{LoaderConfig, Shipment};

const SHIPMENTS_CSV: &[u8] = b"\
Container_ID,Origin_Port,Destination_Port,Status,ETA,Delivered_Date,Cost_Planned,Cost_Actual
CNT-001,Shanghai,Rotterdam,Delivered,2024-01-10,2024-01-12,1000,1300
CNT-002,Singapore,Hamburg,In Transit,bad-date,,2500,
";

#[test]
fn second_load_of_identical_content_is_a_cache_hit() {
    let config = LoaderConfig::default();
    let mut cache: DatasetCache<Shipment> = DatasetCache::new();

    let first = cache.load(SHIPMENTS_CSV, &config).expect("first load");
    assert_eq!(first.status, LoadStatus::Fresh);
    assert_eq!(first.record_count, 1);
    assert_eq!(first.reject_count, 1);

    let second = cache.load(SHIPMENTS_CSV, &config).expect("second load");
    assert_eq!(second.status, LoadStatus::Cached);
    assert_eq!(second.hash, first.hash);
    assert_eq!(cache.records().len(), 1);
    assert_eq!(cache.rejects().len(), 1);
}

#[test]
fn changed_content_reparses() {
    let config = LoaderConfig::default();
    let mut cache: DatasetCache<Shipment> = DatasetCache::new();
    cache.load(SHIPMENTS_CSV, &config).expect("first load");

    let updated = "\
Container_ID,Origin_Port,Destination_Port,Status,ETA,Delivered_Date,Cost_Planned,Cost_Actual
CNT-003,Busan,Antwerp,Delayed,2024-02-05,,700,
";
    let report = cache
        .load(updated.as_bytes(), &config)
        .expect("second load");
    assert_eq!(report.status, LoadStatus::Fresh);
    assert_eq!(cache.records().len(), 1);
    assert_eq!(cache.records()[0].shipment_id, "CNT-003");
}

#[test]
fn content_hash_is_stable_and_content_sensitive() {
    assert_eq!(content_hash(b"abc"), content_hash(b"abc"));
    assert_ne!(content_hash(b"abc"), content_hash(b"abd"));
}

#[test]
fn empty_store_exposes_empty_slices() {
    let store = DatasetStore::new();
    assert!(store.shipments.records().is_empty());
    assert!(store.invoices.records().is_empty());
    assert!(store.warehouse.records().is_empty());
    assert!(store.clients.records().is_empty());
}
