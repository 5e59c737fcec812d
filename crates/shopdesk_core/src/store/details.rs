//! Human-readable history details for store transitions.
//!
//! Detail text is part of the persisted audit trail; keep the formats stable.

use crate::model::appointment::Appointment;
use crate::model::sale::Sale;
use crate::model::staff::StaffOverride;
use crate::model::wire::format_hhmm;

/// Label used when a transition targets a record that does not exist.
pub const UNKNOWN: &str = "Unknown";

pub(crate) fn appointment_added(appointment: &Appointment) -> String {
    format!(
        "{} on {} {}",
        appointment.customer,
        appointment.date.format("%Y-%m-%d"),
        format_hhmm(appointment.time)
    )
}

pub(crate) fn by_id(id: impl std::fmt::Display) -> String {
    format!("#{id}")
}

pub(crate) fn appointment_deleted(removed: Option<&Appointment>) -> String {
    removed.map_or(UNKNOWN, |appointment| appointment.customer.as_str()).to_string()
}

pub(crate) fn sale_added(sale: &Sale) -> String {
    format!("{} - {}", sale.customer, sale.service)
}

pub(crate) fn sale_deleted(removed: Option<&Sale>) -> String {
    let customer = removed.map_or(UNKNOWN, |sale| sale.customer.as_str());
    let service = removed.map_or(UNKNOWN, |sale| sale.service.as_str());
    format!("Sale: {customer} - {service}")
}

/// `"<prefix> <name>"`, with `Unknown` standing in for a missing record.
pub(crate) fn named_deleted(prefix: &str, name: Option<&str>) -> String {
    format!("{prefix} {}", name.unwrap_or(UNKNOWN))
}

pub(crate) fn name_or_unknown(name: Option<&str>) -> String {
    name.unwrap_or(UNKNOWN).to_string()
}

pub(crate) fn override_added(entry: &StaffOverride) -> String {
    format!(
        "Availability: {} on {} {}-{}",
        entry.name,
        entry.date.format("%Y-%m-%d"),
        format_hhmm(entry.start),
        format_hhmm(entry.end)
    )
}

#[cfg(test)]
mod tests {
    use super::{named_deleted, sale_deleted};

    #[test]
    fn missing_records_are_labelled_unknown() {
        assert_eq!(sale_deleted(None), "Sale: Unknown - Unknown");
        assert_eq!(named_deleted("Staff", None), "Staff Unknown");
        assert_eq!(named_deleted("Item", Some("Hair Gel")), "Item Hair Gel");
    }
}
