//! Aggregate statistics for dashboards and reports.
//!
//! Tallies keep first-seen key order so ties resolve to the earliest entry.

use crate::model::appointment::AppointmentStatus;
use crate::time::range::{month_range, today_range, week_range, TimeRange};
use crate::view::ShopView;
use chrono::Datelike;
use serde::Serialize;

/// Placeholder name reported when a ranking has no entries.
pub const NO_LEADER: &str = "—";

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SalesSummary {
    pub revenue: f64,
    pub count: usize,
    /// Zero when there are no sales.
    pub average_ticket: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Tally {
    pub count: usize,
    pub revenue: f64,
}

/// Revenue over the canonical today/week/month ranges, independent of the
/// active range.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SalesByPeriod {
    pub today: f64,
    pub week: f64,
    pub month: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AppointmentStats {
    pub total: usize,
    pub completed: usize,
    pub confirmed: usize,
    pub pending: usize,
    pub cancelled: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leader {
    pub name: String,
    pub count: usize,
}

/// Report-page figures; computed over all records, not the active range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    /// Revenue of sales in the current calendar month.
    pub monthly_revenue: f64,
    /// Most booked service; [`NO_LEADER`] with count 0 when empty.
    pub top_service: Leader,
    /// Barber with most appointments; [`NO_LEADER`] with count 0 when empty.
    pub top_barber: Leader,
    pub average_ticket: f64,
    /// Appointment count per service, first-seen order.
    pub service_distribution: Vec<(String, usize)>,
}

impl ShopView<'_> {
    pub fn sales_summary(&self) -> SalesSummary {
        let sales = self.sales();
        let revenue: f64 = sales.iter().map(|sale| sale.amount).sum();
        SalesSummary {
            revenue,
            count: sales.len(),
            average_ticket: average(revenue, sales.len()),
        }
    }

    /// In-range sales grouped by service.
    pub fn sales_by_service(&self) -> Vec<(String, Tally)> {
        tally(self.sales().into_iter().map(|sale| (sale.service.as_str(), sale.amount)))
    }

    /// In-range sales grouped by barber.
    pub fn sales_by_barber(&self) -> Vec<(String, Tally)> {
        tally(self.sales().into_iter().map(|sale| (sale.barber.as_str(), sale.amount)))
    }

    pub fn sales_by_period(&self) -> SalesByPeriod {
        let revenue_in = |range: TimeRange| -> f64 {
            self.data()
                .sales
                .iter()
                .filter(|sale| range.contains(sale.date))
                .map(|sale| sale.amount)
                .sum()
        };
        SalesByPeriod {
            today: revenue_in(today_range(self.now())),
            week: revenue_in(week_range(self.now())),
            month: revenue_in(month_range(self.now())),
        }
    }

    /// Status counts over in-range appointments.
    pub fn appointment_stats(&self) -> AppointmentStats {
        let appointments = self.appointments();
        let count = |status: AppointmentStatus| {
            appointments
                .iter()
                .filter(|appointment| appointment.status == status)
                .count()
        };
        AppointmentStats {
            total: appointments.len(),
            completed: count(AppointmentStatus::Completed),
            confirmed: count(AppointmentStatus::Confirmed),
            pending: count(AppointmentStatus::Pending),
            cancelled: count(AppointmentStatus::Cancelled),
        }
    }

    pub fn report_summary(&self) -> ReportSummary {
        let data = self.data();
        let now = self.now();
        let monthly_revenue = data
            .sales
            .iter()
            .filter(|sale| sale.date.year() == now.year() && sale.date.month() == now.month())
            .map(|sale| sale.amount)
            .sum();

        let service_distribution =
            count_by(data.appointments.iter().map(|appointment| appointment.service.as_str()));
        let barber_counts =
            count_by(data.appointments.iter().map(|appointment| appointment.barber.as_str()));
        let revenue: f64 = data.sales.iter().map(|sale| sale.amount).sum();

        ReportSummary {
            monthly_revenue,
            top_service: leader(&service_distribution),
            top_barber: leader(&barber_counts),
            average_ticket: average(revenue, data.sales.len()),
            service_distribution,
        }
    }
}

fn average(total: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

fn tally<'s>(entries: impl Iterator<Item = (&'s str, f64)>) -> Vec<(String, Tally)> {
    let mut tallies: Vec<(String, Tally)> = Vec::new();
    for (key, amount) in entries {
        let position = match tallies.iter().position(|(name, _)| name == key) {
            Some(position) => position,
            None => {
                tallies.push((key.to_string(), Tally::default()));
                tallies.len() - 1
            }
        };
        let entry = &mut tallies[position].1;
        entry.count += 1;
        entry.revenue += amount;
    }
    tallies
}

fn count_by<'s>(keys: impl Iterator<Item = &'s str>) -> Vec<(String, usize)> {
    tally(keys.map(|key| (key, 0.0)))
        .into_iter()
        .map(|(name, entry)| (name, entry.count))
        .collect()
}

/// Highest count; the earliest key wins ties.
fn leader(counts: &[(String, usize)]) -> Leader {
    let mut best = Leader {
        name: NO_LEADER.to_string(),
        count: 0,
    };
    for (name, count) in counts {
        if *count > best.count {
            best = Leader {
                name: name.clone(),
                count: *count,
            };
        }
    }
    best
}
