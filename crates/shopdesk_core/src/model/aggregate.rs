//! The persisted aggregate: every entity collection as one unit.

use crate::model::appointment::Appointment;
use crate::model::customer::Customer;
use crate::model::history::HistoryEntry;
use crate::model::inventory::InventoryItem;
use crate::model::sale::Sale;
use crate::model::staff::{Staff, StaffOverride};
use serde::{Deserialize, Serialize};

/// All business collections, loaded and saved together.
///
/// Missing collections in a snapshot load as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShopData {
    pub appointments: Vec<Appointment>,
    pub sales: Vec<Sale>,
    pub staff: Vec<Staff>,
    pub inventory: Vec<InventoryItem>,
    pub customers: Vec<Customer>,
    pub staff_overrides: Vec<StaffOverride>,
    /// Most-recent-first.
    pub history: Vec<HistoryEntry>,
}

impl ShopData {
    pub fn find_staff(&self, name: &str) -> Option<&Staff> {
        self.staff.iter().find(|member| member.name == name)
    }

    /// Entity records across all collections, history excluded.
    pub fn record_count(&self) -> usize {
        self.appointments.len()
            + self.sales.len()
            + self.staff.len()
            + self.inventory.len()
            + self.customers.len()
            + self.staff_overrides.len()
    }
}

/// Wholesale replacement of selected collections.
///
/// `None` leaves the collection as it is. History is never replaced here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionsReplace {
    pub appointments: Option<Vec<Appointment>>,
    pub sales: Option<Vec<Sale>>,
    pub staff: Option<Vec<Staff>>,
    pub inventory: Option<Vec<InventoryItem>>,
    pub customers: Option<Vec<Customer>>,
    pub staff_overrides: Option<Vec<StaffOverride>>,
}

impl CollectionsReplace {
    pub fn is_empty(&self) -> bool {
        self.appointments.is_none()
            && self.sales.is_none()
            && self.staff.is_none()
            && self.inventory.is_none()
            && self.customers.is_none()
            && self.staff_overrides.is_none()
    }

    pub(crate) fn apply_to(self, data: &mut ShopData) {
        if let Some(appointments) = self.appointments {
            data.appointments = appointments;
        }
        if let Some(sales) = self.sales {
            data.sales = sales;
        }
        if let Some(staff) = self.staff {
            data.staff = staff;
        }
        if let Some(inventory) = self.inventory {
            data.inventory = inventory;
        }
        if let Some(customers) = self.customers {
            data.customers = customers;
        }
        if let Some(staff_overrides) = self.staff_overrides {
            data.staff_overrides = staff_overrides;
        }
    }
}
