//! Tests for JsonResource
//!
//! These tests verify:
//! - Create assigns an id and refreshes the score
//! - Read clears the id when the record was removed externally
//! - Update writes only changed attributes and refreshes
//! - Delete tolerates records that are already gone

use std::fs;

use jsonstate::{Driver, JsonResource, RandomIdAllocator, Record, ResourceData, StoreConfig};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_driver() -> (TempDir, Driver) {
    let temp_dir = TempDir::new().unwrap();
    let config = StoreConfig::builder().state_dir(temp_dir.path()).build();
    let driver = Driver::with_allocator(config, RandomIdAllocator::with_seed(99)).unwrap();
    (temp_dir, driver)
}

// =============================================================================
// Create / Read Tests
// =============================================================================

#[test]
fn test_create_sets_id_and_persists_score() {
    let (_temp, mut driver) = setup_temp_driver();
    let mut d = ResourceData::new(10);

    JsonResource::new(&mut driver).create(&mut d).unwrap();

    let id = d.id().unwrap().to_string();
    assert_eq!(d.score(), 10);
    assert!(!d.has_change());
    assert_eq!(Record::from_slice(&driver.read(&id).unwrap()).unwrap().score, 10);
}

#[test]
fn test_read_picks_up_external_change() {
    let (_temp, mut driver) = setup_temp_driver();
    let mut d = ResourceData::new(1);
    JsonResource::new(&mut driver).create(&mut d).unwrap();

    let id = d.id().unwrap().to_string();
    driver.update(&id, &Record::new(7)).unwrap();

    JsonResource::new(&mut driver).read(&mut d).unwrap();
    assert_eq!(d.score(), 7);
}

#[test]
fn test_read_clears_id_when_removed_externally() {
    let (_temp, mut driver) = setup_temp_driver();
    let mut d = ResourceData::new(1);
    JsonResource::new(&mut driver).create(&mut d).unwrap();

    fs::remove_file(driver.state_path(d.id().unwrap())).unwrap();

    JsonResource::new(&mut driver).read(&mut d).unwrap();
    assert_eq!(d.id(), None);
}

#[test]
fn test_read_surfaces_corrupt_state() {
    let (_temp, mut driver) = setup_temp_driver();
    let mut d = ResourceData::new(1);
    JsonResource::new(&mut driver).create(&mut d).unwrap();

    fs::write(driver.state_path(d.id().unwrap()), b"not json").unwrap();

    let err = JsonResource::new(&mut driver).read(&mut d).unwrap_err();
    assert!(!err.is_not_found());
    assert!(d.id().is_some());
}

// =============================================================================
// Update Tests
// =============================================================================

#[test]
fn test_update_writes_changed_score() {
    let (_temp, mut driver) = setup_temp_driver();
    let mut d = ResourceData::new(1);
    JsonResource::new(&mut driver).create(&mut d).unwrap();

    d.set_score(2);
    JsonResource::new(&mut driver).update(&mut d).unwrap();

    let id = d.id().unwrap().to_string();
    assert_eq!(d.score(), 2);
    assert!(!d.has_change());
    assert_eq!(Record::from_slice(&driver.read(&id).unwrap()).unwrap().score, 2);
}

#[test]
fn test_update_without_change_keeps_stored_score() {
    let (_temp, mut driver) = setup_temp_driver();
    let mut d = ResourceData::new(1);
    JsonResource::new(&mut driver).create(&mut d).unwrap();

    let id = d.id().unwrap().to_string();
    driver.update(&id, &Record::new(5)).unwrap();

    JsonResource::new(&mut driver).update(&mut d).unwrap();
    assert_eq!(d.score(), 5);
}

#[test]
fn test_update_clears_id_when_absent() {
    let (_temp, mut driver) = setup_temp_driver();
    let mut d = ResourceData::with_id("12345", 1);
    d.set_score(2);

    JsonResource::new(&mut driver).update(&mut d).unwrap();

    assert_eq!(d.id(), None);
    assert!(!driver.exists("12345"));
}

// =============================================================================
// Delete Tests
// =============================================================================

#[test]
fn test_delete_removes_file_and_clears_id() {
    let (_temp, mut driver) = setup_temp_driver();
    let mut d = ResourceData::new(3);
    JsonResource::new(&mut driver).create(&mut d).unwrap();
    let id = d.id().unwrap().to_string();

    JsonResource::new(&mut driver).delete(&mut d).unwrap();

    assert_eq!(d.id(), None);
    assert!(!driver.exists(&id));
}

#[test]
fn test_delete_tolerates_missing_record() {
    let (_temp, mut driver) = setup_temp_driver();
    let mut d = ResourceData::with_id("404", 0);

    JsonResource::new(&mut driver).delete(&mut d).unwrap();

    assert_eq!(d.id(), None);
}
