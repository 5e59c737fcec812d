//! Flat export rows for the download collaborator.
//!
//! The core only assembles ordered column/value rows; delimiting, quoting and
//! file output belong to the `RowExporter` implementation.

use crate::model::appointment::Appointment;
use crate::model::customer::Customer;
use crate::model::history::HistoryEntry;
use crate::model::inventory::InventoryItem;
use crate::model::sale::Sale;
use crate::model::staff::Staff;
use crate::model::wire::format_hhmm;
use crate::view::ShopView;

/// One flat record: column names with their rendered values, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportRow {
    cells: Vec<(&'static str, String)>,
}

impl ExportRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: &'static str, value: impl ToString) -> Self {
        self.cells.push((column, value.to_string()));
        self
    }

    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.cells.iter().map(|(column, _)| *column)
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, value)| value.as_str())
    }

    pub fn cells(&self) -> &[(&'static str, String)] {
        &self.cells
    }
}

/// Which collection to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportSource {
    /// In-range appointments.
    Appointments,
    /// In-range sales.
    Sales,
    Staff,
    Customers,
    Inventory,
    History,
}

impl ExportSource {
    /// Default download file name.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Appointments => "appointments.csv",
            Self::Sales => "sales.csv",
            Self::Staff => "staff.csv",
            Self::Customers => "customers.csv",
            Self::Inventory => "inventory.csv",
            Self::History => "history.csv",
        }
    }
}

/// Download collaborator turning rows into a file artifact.
pub trait RowExporter {
    type Error;

    fn export(&mut self, rows: &[ExportRow], filename: &str) -> Result<(), Self::Error>;
}

impl ShopView<'_> {
    pub fn export_rows(&self, source: ExportSource) -> Vec<ExportRow> {
        let data = self.data();
        match source {
            ExportSource::Appointments => {
                self.appointments().into_iter().map(appointment_row).collect()
            }
            ExportSource::Sales => self.sales().into_iter().map(sale_row).collect(),
            ExportSource::Staff => data.staff.iter().map(staff_row).collect(),
            ExportSource::Customers => data.customers.iter().map(customer_row).collect(),
            ExportSource::Inventory => data.inventory.iter().map(inventory_row).collect(),
            ExportSource::History => data.history.iter().map(history_row).collect(),
        }
    }

    /// Hands the rows of `source` to `exporter` under its default file name.
    pub fn export_to<E: RowExporter>(
        &self,
        source: ExportSource,
        exporter: &mut E,
    ) -> Result<(), E::Error> {
        exporter.export(&self.export_rows(source), source.file_name())
    }
}

fn appointment_row(appointment: &Appointment) -> ExportRow {
    ExportRow::new()
        .with("id", &appointment.id)
        .with("customer", &appointment.customer)
        .with("phone", &appointment.phone)
        .with("service", &appointment.service)
        .with("barber", &appointment.barber)
        .with("date", appointment.date.format("%Y-%m-%d"))
        .with("time", format_hhmm(appointment.time))
        .with("status", appointment.status.as_str())
}

fn sale_row(sale: &Sale) -> ExportRow {
    ExportRow::new()
        .with("id", sale.id)
        .with("date", sale.date.format("%Y-%m-%dT%H:%M:%S"))
        .with("customer", &sale.customer)
        .with("service", &sale.service)
        .with("barber", &sale.barber)
        .with("amount", sale.amount)
        .with("payment", sale.payment.as_str())
}

fn staff_row(member: &Staff) -> ExportRow {
    ExportRow::new()
        .with("name", &member.name)
        .with("role", member.role.as_str())
        .with("phone", &member.phone)
        .with("email", &member.email)
        .with("schedule", &member.schedule)
        .with("status", member.status.as_str())
}

fn customer_row(customer: &Customer) -> ExportRow {
    ExportRow::new()
        .with("id", customer.id)
        .with("name", &customer.name)
        .with("phone", &customer.phone)
        .with("email", customer.email.as_deref().unwrap_or_default())
        .with("visits", customer.visits)
        .with(
            "lastVisit",
            customer
                .last_visit
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        )
        .with("notes", customer.notes.as_deref().unwrap_or_default())
}

fn inventory_row(item: &InventoryItem) -> ExportRow {
    ExportRow::new()
        .with("id", item.id)
        .with("name", &item.name)
        .with("category", item.category.as_str())
        .with("quantity", item.quantity)
        .with("min_stock", item.min_stock)
        .with("status", item.stock_status().as_str())
}

fn history_row(entry: &HistoryEntry) -> ExportRow {
    ExportRow::new()
        .with("timestamp", entry.timestamp.to_rfc3339())
        .with("action", entry.action.as_str())
        .with("section", entry.section.as_str())
        .with("details", &entry.details)
        .with("user", &entry.user)
}
