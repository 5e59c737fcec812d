//! Command surface over store transitions.
//!
//! UIs that dispatch messages build a `StoreCommand` and hand it to
//! `ShopStore::apply`; each variant maps to exactly one store method.

use crate::model::aggregate::{CollectionsReplace, ShopData};
use crate::model::appointment::{AppointmentId, AppointmentPatch, NewAppointment};
use crate::model::customer::{CustomerDraft, CustomerId};
use crate::model::history::{HistoryAction, Section};
use crate::model::inventory::{InventoryDraft, InventoryId};
use crate::model::sale::{NewSale, SaleId, SalePatch};
use crate::model::staff::{NewStaffOverride, OverrideId, Staff};

#[derive(Debug, Clone, PartialEq)]
pub enum StoreCommand {
    AddAppointment(NewAppointment),
    UpdateAppointment {
        id: AppointmentId,
        patch: AppointmentPatch,
    },
    DeleteAppointment(AppointmentId),
    AddSale(NewSale),
    UpdateSale {
        id: SaleId,
        patch: SalePatch,
    },
    DeleteSale(SaleId),
    AddStaff(Staff),
    /// Replaces the member currently named `name`.
    UpdateStaff {
        name: String,
        staff: Staff,
    },
    DeleteStaff(String),
    AddCustomer(CustomerDraft),
    UpdateCustomer {
        id: CustomerId,
        customer: CustomerDraft,
    },
    DeleteCustomer(CustomerId),
    AddInventoryItem(InventoryDraft),
    UpdateInventoryItem {
        id: InventoryId,
        item: InventoryDraft,
    },
    DeleteInventoryItem(InventoryId),
    AddStaffOverride(NewStaffOverride),
    /// Free-form audit note.
    AddHistory {
        action: HistoryAction,
        section: Section,
        details: String,
    },
    Load(ShopData),
    Replace(CollectionsReplace),
}

/// Key of a record created by an add command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityKey {
    Appointment(AppointmentId),
    Sale(SaleId),
    Staff(String),
    Customer(CustomerId),
    Inventory(InventoryId),
    Override(OverrideId),
}

/// Result of a transition that did not fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Target found and changed.
    Applied,
    /// Target absent; only the history entry was written.
    Missing,
}

impl MutationOutcome {
    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Missing => "missing",
        }
    }
}

/// Outcome of `ShopStore::apply`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Added(EntityKey),
    Mutated(MutationOutcome),
    /// Audit note appended.
    Recorded,
    /// Collections loaded or replaced without a history entry.
    Loaded,
}
