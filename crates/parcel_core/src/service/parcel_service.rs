//! Parcel tracking use-case service.
//!
//! # Responsibility
//! - Provide tracker flows (register, advance status, re-address, cancel).
//! - Delegate persistence and guarded-mutation checks to the store.
//!
//! # Invariants
//! - New parcels are always registered with status `registered`.
//! - Status only moves forward through this service; the store itself stays permissive.

use crate::model::parcel::{ClientId, Parcel, ParcelNumber, ParcelStatus};
use crate::repo::parcel_store::{ParcelStore, RepoResult};
use log::info;

/// Use-case wrapper over a parcel store.
pub struct ParcelService<S: ParcelStore> {
    store: S,
}

impl<S: ParcelStore> ParcelService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Registers a new parcel for `client` and returns it with its number.
    pub fn register(&self, client: ClientId, address: impl Into<String>) -> RepoResult<Parcel> {
        let mut parcel = Parcel::new(client, address);
        parcel.number = self.store.add(&parcel)?;
        info!(
            "event=parcel_register module=service status=ok number={} client={client}",
            parcel.number
        );
        Ok(parcel)
    }

    pub fn parcel(&self, number: ParcelNumber) -> RepoResult<Parcel> {
        self.store.get(number)
    }

    pub fn client_parcels(&self, client: ClientId) -> RepoResult<Vec<Parcel>> {
        self.store.get_by_client(client)
    }

    /// Moves a parcel to its next lifecycle stage.
    ///
    /// Returns the new status, or `None` without writing when the parcel is
    /// already `delivered`.
    pub fn next_status(&self, number: ParcelNumber) -> RepoResult<Option<ParcelStatus>> {
        let current = self.store.get(number)?.status;
        let Some(next) = current.next() else {
            info!(
                "event=parcel_next_status module=service status=skipped number={number} parcel_status={current}"
            );
            return Ok(None);
        };

        self.store.set_status(number, next)?;
        info!(
            "event=parcel_next_status module=service status=ok number={number} from={current} to={next}"
        );
        Ok(Some(next))
    }

    /// Changes the delivery address; fails once the parcel has been sent.
    pub fn change_address(&self, number: ParcelNumber, address: &str) -> RepoResult<()> {
        self.store.set_address(number, address)
    }

    /// Cancels a parcel that has not been sent yet.
    pub fn delete(&self, number: ParcelNumber) -> RepoResult<()> {
        self.store.delete(number)
    }
}
