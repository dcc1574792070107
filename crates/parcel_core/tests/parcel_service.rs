use parcel_core::db::open_db_in_memory;
use parcel_core::{ParcelService, ParcelStatus, RepoError, SqliteParcelStore};

#[test]
fn register_persists_registered_parcel() {
    let conn = open_db_in_memory().unwrap();
    let service = ParcelService::new(SqliteParcelStore::try_new(&conn).unwrap());

    let parcel = service.register(1000, "Moscow, Red Square 1").unwrap();

    assert!(parcel.is_persisted());
    assert_eq!(parcel.status, ParcelStatus::Registered);
    assert_eq!(service.parcel(parcel.number).unwrap(), parcel);
}

#[test]
fn next_status_walks_lifecycle_then_stops() {
    let conn = open_db_in_memory().unwrap();
    let service = ParcelService::new(SqliteParcelStore::try_new(&conn).unwrap());
    let number = service.register(1, "addr").unwrap().number;

    assert_eq!(service.next_status(number).unwrap(), Some(ParcelStatus::Sent));
    assert_eq!(
        service.next_status(number).unwrap(),
        Some(ParcelStatus::Delivered)
    );
    assert_eq!(service.next_status(number).unwrap(), None);
    assert_eq!(
        service.parcel(number).unwrap().status,
        ParcelStatus::Delivered
    );
}

#[test]
fn next_status_on_missing_parcel_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = ParcelService::new(SqliteParcelStore::try_new(&conn).unwrap());

    assert!(service.next_status(12).unwrap_err().is_not_found());
}

#[test]
fn change_address_and_delete_follow_guard_policy() {
    let conn = open_db_in_memory().unwrap();
    let service = ParcelService::new(SqliteParcelStore::try_new(&conn).unwrap());

    let cancelled = service.register(5, "first").unwrap().number;
    service.change_address(cancelled, "second").unwrap();
    assert_eq!(service.parcel(cancelled).unwrap().address, "second");
    service.delete(cancelled).unwrap();
    assert!(service.parcel(cancelled).unwrap_err().is_not_found());

    let shipped = service.register(5, "third").unwrap().number;
    service.next_status(shipped).unwrap();
    assert!(matches!(
        service.change_address(shipped, "fourth").unwrap_err(),
        RepoError::NotRegistered { .. }
    ));
    assert!(matches!(
        service.delete(shipped).unwrap_err(),
        RepoError::NotRegistered { .. }
    ));

    let remaining = service.client_parcels(5).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].number, shipped);
    assert_eq!(remaining[0].address, "third");
}
