//! Domain store: the authoritative in-memory aggregate and its transitions.
//!
//! # Responsibility
//! - Apply add/update/delete transitions for every entity collection.
//! - Write one audit entry per transition and persist the aggregate after it.
//! - Hold the active reporting range and week offset beside the aggregate.
//!
//! # Invariants
//! - A transition rejected by validation changes nothing and writes no history.
//! - Every other entity transition prepends exactly one `HistoryEntry`, even
//!   when its target is missing.
//! - Store-owned fields (ids, sale dates, history timestamps) are never taken
//!   from caller input.
//! - Persistence failures are logged and never reach the caller.
//! - Range and week-offset changes do not touch the aggregate and are not
//!   persisted.
//!
//! # See also
//! - `store::command` for the dispatchable command surface.

use crate::config::OrgSettings;
use crate::model::aggregate::{CollectionsReplace, ShopData};
use crate::model::appointment::{
    AppointmentId, AppointmentPatch, AppointmentStatus, NewAppointment,
};
use crate::model::customer::{CustomerDraft, CustomerId};
use crate::model::history::{Actor, HistoryAction, HistoryEntry, Section};
use crate::model::inventory::{InventoryDraft, InventoryId};
use crate::model::sale::{NewSale, SaleId, SalePatch};
use crate::model::staff::{NewStaffOverride, OverrideId, Staff};
use crate::model::validation::ValidationError;
use crate::repo::snapshot_repo::{load_or_default, SnapshotRepository, STORAGE_KEY};
use crate::schedule::availability::AvailabilityResolver;
use crate::store::command::{CommandOutcome, EntityKey, MutationOutcome, StoreCommand};
use crate::store::details;
use crate::store::seed::default_data;
use crate::time::clock::{Clock, SystemClock};
use crate::time::range::{compute_range, week_dates, RangeKind, TimeRange};
use crate::view::ShopView;
use chrono::{NaiveDate, NaiveDateTime};
use log::{debug, info, warn};
use std::time::Instant;
use uuid::Uuid;

/// Single-owner store over the business aggregate.
pub struct ShopStore<R: SnapshotRepository, C: Clock = SystemClock> {
    data: ShopData,
    range_kind: RangeKind,
    range: TimeRange,
    week_offset: i32,
    settings: OrgSettings,
    repo: R,
    clock: C,
}

impl<R: SnapshotRepository, C: Clock> ShopStore<R, C> {
    /// Restores the aggregate from `repo`, or seeds it when no usable
    /// snapshot exists.
    pub fn open(repo: R, clock: C, settings: OrgSettings) -> Self {
        let started_at = Instant::now();
        let data = load_or_default(&repo, STORAGE_KEY, default_data);
        let store = Self::from_data(repo, clock, settings, data);
        info!(
            "event=store_open module=store status=ok records={} history={} duration_ms={}",
            store.data.record_count(),
            store.data.history.len(),
            started_at.elapsed().as_millis()
        );
        store
    }

    /// Store over an explicit aggregate; nothing is loaded or saved.
    pub fn from_data(repo: R, clock: C, settings: OrgSettings, data: ShopData) -> Self {
        let range_kind = RangeKind::default();
        let range = compute_range(range_kind, clock.local_now(), settings.fiscal_year_start());
        Self {
            data,
            range_kind,
            range,
            week_offset: 0,
            settings,
            repo,
            clock,
        }
    }

    pub fn data(&self) -> &ShopData {
        &self.data
    }

    pub fn settings(&self) -> &OrgSettings {
        &self.settings
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn range(&self) -> TimeRange {
        self.range
    }

    pub fn range_kind(&self) -> RangeKind {
        self.range_kind
    }

    /// Read-only projections over the aggregate and the active range.
    pub fn view(&self) -> ShopView<'_> {
        ShopView::new(&self.data, self.range, self.clock.local_now(), &self.settings)
    }

    pub fn availability(&self) -> AvailabilityResolver<'_> {
        AvailabilityResolver::new(&self.data)
    }

    /// Selects the active reporting range.
    ///
    /// `Custom` takes `start`/`end` verbatim; other kinds ignore them and are
    /// computed from the clock and the fiscal-year setting.
    pub fn set_range(
        &mut self,
        kind: RangeKind,
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
    ) {
        self.range = match kind {
            RangeKind::Custom => TimeRange::new(start, end),
            _ => compute_range(
                kind,
                self.clock.local_now(),
                self.settings.fiscal_year_start(),
            ),
        };
        self.range_kind = kind;
        info!(
            "event=store_range_set module=store status=ok kind={} has_start={} has_end={}",
            kind.as_str(),
            self.range.start.is_some(),
            self.range.end.is_some()
        );
    }

    /// Recomputes a named range against the current clock reading.
    pub fn refresh_range(&mut self) {
        if self.range_kind != RangeKind::Custom {
            self.set_range(self.range_kind, None, None);
        }
    }

    pub fn week_offset(&self) -> i32 {
        self.week_offset
    }

    pub fn set_week_offset(&mut self, offset: i32) {
        self.week_offset = offset;
    }

    pub fn shift_week(&mut self, delta: i32) {
        self.week_offset = self.week_offset.saturating_add(delta);
    }

    /// Sunday-first dates of the week selected by the week offset.
    pub fn week_dates(&self) -> [NaiveDate; 7] {
        week_dates(self.clock.local_now().date(), self.week_offset)
    }

    // Appointments

    pub fn add_appointment(
        &mut self,
        actor: &Actor,
        input: NewAppointment,
    ) -> Result<AppointmentId, ValidationError> {
        self.check(Section::Appointments, input.validate())?;
        let appointment = input.into_appointment(Uuid::new_v4().to_string());
        let id = appointment.id.clone();
        let details = details::appointment_added(&appointment);
        self.data.appointments.push(appointment);
        self.commit(
            actor,
            HistoryAction::Added,
            Section::Appointments,
            details,
            MutationOutcome::Applied,
        );
        Ok(id)
    }

    /// Merges `patch` into the appointment with `id`.
    pub fn update_appointment(
        &mut self,
        actor: &Actor,
        id: &str,
        patch: AppointmentPatch,
    ) -> Result<MutationOutcome, ValidationError> {
        self.check(Section::Appointments, patch.validate())?;
        let outcome = match self.data.appointments.iter_mut().find(|entry| entry.id == id) {
            Some(target) => {
                patch.apply_to(target);
                MutationOutcome::Applied
            }
            None => MutationOutcome::Missing,
        };
        self.commit(
            actor,
            HistoryAction::Updated,
            Section::Appointments,
            details::by_id(id),
            outcome,
        );
        Ok(outcome)
    }

    pub fn complete_appointment(&mut self, actor: &Actor, id: &str) -> MutationOutcome {
        self.set_appointment_status(actor, id, AppointmentStatus::Completed)
    }

    pub fn cancel_appointment(&mut self, actor: &Actor, id: &str) -> MutationOutcome {
        self.set_appointment_status(actor, id, AppointmentStatus::Cancelled)
    }

    fn set_appointment_status(
        &mut self,
        actor: &Actor,
        id: &str,
        status: AppointmentStatus,
    ) -> MutationOutcome {
        // A status-only patch has no fields to reject.
        self.update_appointment(actor, id, AppointmentPatch::status(status))
            .unwrap_or(MutationOutcome::Missing)
    }

    pub fn delete_appointment(&mut self, actor: &Actor, id: &str) -> MutationOutcome {
        let position = self.data.appointments.iter().position(|entry| entry.id == id);
        let removed = take_at(&mut self.data.appointments, position);
        let details = details::appointment_deleted(removed.as_ref());
        let outcome = outcome_of(removed.is_some());
        self.commit(
            actor,
            HistoryAction::Deleted,
            Section::Appointments,
            details,
            outcome,
        );
        outcome
    }

    // Sales

    /// Records a sale stamped with the current local time.
    pub fn add_sale(&mut self, actor: &Actor, input: NewSale) -> Result<SaleId, ValidationError> {
        self.check(Section::Sales, input.validate())?;
        let id = self.next_time_id(self.data.sales.iter().map(|sale| sale.id));
        let sale = input.into_sale(id, self.clock.local_now());
        let details = details::sale_added(&sale);
        self.data.sales.push(sale);
        self.commit(
            actor,
            HistoryAction::Added,
            Section::Sales,
            details,
            MutationOutcome::Applied,
        );
        Ok(id)
    }

    pub fn update_sale(
        &mut self,
        actor: &Actor,
        id: SaleId,
        patch: SalePatch,
    ) -> Result<MutationOutcome, ValidationError> {
        self.check(Section::Sales, patch.validate())?;
        let outcome = match self.data.sales.iter_mut().find(|sale| sale.id == id) {
            Some(target) => {
                patch.apply_to(target);
                MutationOutcome::Applied
            }
            None => MutationOutcome::Missing,
        };
        self.commit(
            actor,
            HistoryAction::Updated,
            Section::Sales,
            details::by_id(id),
            outcome,
        );
        Ok(outcome)
    }

    pub fn delete_sale(&mut self, actor: &Actor, id: SaleId) -> MutationOutcome {
        let position = self.data.sales.iter().position(|sale| sale.id == id);
        let removed = take_at(&mut self.data.sales, position);
        let details = details::sale_deleted(removed.as_ref());
        let outcome = outcome_of(removed.is_some());
        self.commit(actor, HistoryAction::Deleted, Section::Sales, details, outcome);
        outcome
    }

    // Staff

    /// Appends a staff member; names must be unique.
    pub fn add_staff(&mut self, actor: &Actor, staff: Staff) -> Result<String, ValidationError> {
        self.check(Section::Staff, self.validate_staff(&staff, None))?;
        let name = staff.name.clone();
        self.data.staff.push(staff);
        self.commit(
            actor,
            HistoryAction::Added,
            Section::Staff,
            name.clone(),
            MutationOutcome::Applied,
        );
        Ok(name)
    }

    /// Replaces the member named `name`, keeping its position.
    ///
    /// Overrides and appointments keep referring to the old name.
    pub fn update_staff(
        &mut self,
        actor: &Actor,
        name: &str,
        staff: Staff,
    ) -> Result<MutationOutcome, ValidationError> {
        let position = self.staff_position(name);
        self.update_staff_position(actor, position, staff)
    }

    pub fn update_staff_at(
        &mut self,
        actor: &Actor,
        index: usize,
        staff: Staff,
    ) -> Result<MutationOutcome, ValidationError> {
        let position = (index < self.data.staff.len()).then_some(index);
        self.update_staff_position(actor, position, staff)
    }

    /// Removes the member named `name` and every override recorded for it.
    pub fn delete_staff(&mut self, actor: &Actor, name: &str) -> MutationOutcome {
        let position = self.staff_position(name);
        self.delete_staff_position(actor, position)
    }

    pub fn delete_staff_at(&mut self, actor: &Actor, index: usize) -> MutationOutcome {
        self.delete_staff_position(actor, Some(index))
    }

    /// Declares a one-off availability window; recorded under `staff`.
    pub fn add_staff_override(
        &mut self,
        actor: &Actor,
        input: NewStaffOverride,
    ) -> Result<OverrideId, ValidationError> {
        self.check(Section::Staff, input.validate())?;
        let id = self.next_time_id(self.data.staff_overrides.iter().map(|entry| entry.id));
        let entry = input.into_override(id);
        let details = details::override_added(&entry);
        self.data.staff_overrides.push(entry);
        self.commit(
            actor,
            HistoryAction::Added,
            Section::Staff,
            details,
            MutationOutcome::Applied,
        );
        Ok(id)
    }

    // Customers

    pub fn add_customer(
        &mut self,
        actor: &Actor,
        draft: CustomerDraft,
    ) -> Result<CustomerId, ValidationError> {
        self.check(Section::Customers, draft.validate())?;
        let id = next_sequential_id(self.data.customers.iter().map(|customer| customer.id));
        let customer = draft.into_customer(id);
        let details = customer.name.clone();
        self.data.customers.push(customer);
        self.commit(
            actor,
            HistoryAction::Added,
            Section::Customers,
            details,
            MutationOutcome::Applied,
        );
        Ok(id)
    }

    /// Replaces the customer with `id`; the id is kept.
    pub fn update_customer(
        &mut self,
        actor: &Actor,
        id: CustomerId,
        draft: CustomerDraft,
    ) -> Result<MutationOutcome, ValidationError> {
        let position = self.data.customers.iter().position(|customer| customer.id == id);
        self.update_customer_position(actor, position, draft)
    }

    pub fn update_customer_at(
        &mut self,
        actor: &Actor,
        index: usize,
        draft: CustomerDraft,
    ) -> Result<MutationOutcome, ValidationError> {
        let position = (index < self.data.customers.len()).then_some(index);
        self.update_customer_position(actor, position, draft)
    }

    pub fn delete_customer(&mut self, actor: &Actor, id: CustomerId) -> MutationOutcome {
        let position = self.data.customers.iter().position(|customer| customer.id == id);
        self.delete_customer_position(actor, position)
    }

    pub fn delete_customer_at(&mut self, actor: &Actor, index: usize) -> MutationOutcome {
        self.delete_customer_position(actor, Some(index))
    }

    // Inventory

    pub fn add_inventory_item(
        &mut self,
        actor: &Actor,
        draft: InventoryDraft,
    ) -> Result<InventoryId, ValidationError> {
        self.check(Section::Inventory, draft.validate())?;
        let id = next_sequential_id(self.data.inventory.iter().map(|item| item.id));
        let item = draft.into_item(id);
        let details = item.name.clone();
        self.data.inventory.push(item);
        self.commit(
            actor,
            HistoryAction::Added,
            Section::Inventory,
            details,
            MutationOutcome::Applied,
        );
        Ok(id)
    }

    /// Replaces the item with `id`; the id is kept.
    pub fn update_inventory_item(
        &mut self,
        actor: &Actor,
        id: InventoryId,
        draft: InventoryDraft,
    ) -> Result<MutationOutcome, ValidationError> {
        let position = self.data.inventory.iter().position(|item| item.id == id);
        self.update_inventory_position(actor, position, draft)
    }

    pub fn update_inventory_item_at(
        &mut self,
        actor: &Actor,
        index: usize,
        draft: InventoryDraft,
    ) -> Result<MutationOutcome, ValidationError> {
        let position = (index < self.data.inventory.len()).then_some(index);
        self.update_inventory_position(actor, position, draft)
    }

    pub fn delete_inventory_item(&mut self, actor: &Actor, id: InventoryId) -> MutationOutcome {
        let position = self.data.inventory.iter().position(|item| item.id == id);
        self.delete_inventory_position(actor, position)
    }

    pub fn delete_inventory_item_at(&mut self, actor: &Actor, index: usize) -> MutationOutcome {
        self.delete_inventory_position(actor, Some(index))
    }

    // History and bulk

    /// Appends a free-form audit note stamped by the store clock.
    pub fn add_history(
        &mut self,
        actor: &Actor,
        action: HistoryAction,
        section: Section,
        details: impl Into<String>,
    ) {
        self.commit(actor, action, section, details.into(), MutationOutcome::Applied);
    }

    /// Replaces the whole aggregate, history included. Writes no history.
    pub fn load(&mut self, data: ShopData) {
        self.data = data;
        info!(
            "event=store_mutation module=store status=ok action=load records={} history={}",
            self.data.record_count(),
            self.data.history.len()
        );
        self.persist();
    }

    /// Replaces the supplied collections. History is left as it is.
    pub fn replace(&mut self, collections: CollectionsReplace) {
        if collections.is_empty() {
            return;
        }
        collections.apply_to(&mut self.data);
        info!(
            "event=store_mutation module=store status=ok action=replace records={}",
            self.data.record_count()
        );
        self.persist();
    }

    /// Dispatches `command` to the matching transition.
    pub fn apply(
        &mut self,
        actor: &Actor,
        command: StoreCommand,
    ) -> Result<CommandOutcome, ValidationError> {
        let outcome = match command {
            StoreCommand::AddAppointment(input) => {
                CommandOutcome::Added(EntityKey::Appointment(self.add_appointment(actor, input)?))
            }
            StoreCommand::UpdateAppointment { id, patch } => {
                CommandOutcome::Mutated(self.update_appointment(actor, &id, patch)?)
            }
            StoreCommand::DeleteAppointment(id) => {
                CommandOutcome::Mutated(self.delete_appointment(actor, &id))
            }
            StoreCommand::AddSale(input) => {
                CommandOutcome::Added(EntityKey::Sale(self.add_sale(actor, input)?))
            }
            StoreCommand::UpdateSale { id, patch } => {
                CommandOutcome::Mutated(self.update_sale(actor, id, patch)?)
            }
            StoreCommand::DeleteSale(id) => CommandOutcome::Mutated(self.delete_sale(actor, id)),
            StoreCommand::AddStaff(staff) => {
                CommandOutcome::Added(EntityKey::Staff(self.add_staff(actor, staff)?))
            }
            StoreCommand::UpdateStaff { name, staff } => {
                CommandOutcome::Mutated(self.update_staff(actor, &name, staff)?)
            }
            StoreCommand::DeleteStaff(name) => {
                CommandOutcome::Mutated(self.delete_staff(actor, &name))
            }
            StoreCommand::AddCustomer(draft) => {
                CommandOutcome::Added(EntityKey::Customer(self.add_customer(actor, draft)?))
            }
            StoreCommand::UpdateCustomer { id, customer } => {
                CommandOutcome::Mutated(self.update_customer(actor, id, customer)?)
            }
            StoreCommand::DeleteCustomer(id) => {
                CommandOutcome::Mutated(self.delete_customer(actor, id))
            }
            StoreCommand::AddInventoryItem(draft) => {
                CommandOutcome::Added(EntityKey::Inventory(self.add_inventory_item(actor, draft)?))
            }
            StoreCommand::UpdateInventoryItem { id, item } => {
                CommandOutcome::Mutated(self.update_inventory_item(actor, id, item)?)
            }
            StoreCommand::DeleteInventoryItem(id) => {
                CommandOutcome::Mutated(self.delete_inventory_item(actor, id))
            }
            StoreCommand::AddStaffOverride(input) => {
                CommandOutcome::Added(EntityKey::Override(self.add_staff_override(actor, input)?))
            }
            StoreCommand::AddHistory {
                action,
                section,
                details,
            } => {
                self.add_history(actor, action, section, details);
                CommandOutcome::Recorded
            }
            StoreCommand::Load(data) => {
                self.load(data);
                CommandOutcome::Loaded
            }
            StoreCommand::Replace(collections) => {
                self.replace(collections);
                CommandOutcome::Loaded
            }
        };
        Ok(outcome)
    }

    fn staff_position(&self, name: &str) -> Option<usize> {
        self.data.staff.iter().position(|member| member.name == name)
    }

    /// Name must be set and unique among members other than `position`.
    fn validate_staff(&self, staff: &Staff, position: Option<usize>) -> Result<(), ValidationError> {
        staff.validate()?;
        let clash = self
            .data
            .staff
            .iter()
            .enumerate()
            .any(|(index, member)| Some(index) != position && member.name == staff.name);
        if clash {
            return Err(ValidationError::DuplicateStaffName(staff.name.clone()));
        }
        Ok(())
    }

    fn update_staff_position(
        &mut self,
        actor: &Actor,
        position: Option<usize>,
        staff: Staff,
    ) -> Result<MutationOutcome, ValidationError> {
        self.check(Section::Staff, self.validate_staff(&staff, position))?;
        let (outcome, details) = match position.and_then(|index| self.data.staff.get_mut(index)) {
            Some(target) => {
                let details = staff.name.clone();
                *target = staff;
                (MutationOutcome::Applied, details)
            }
            None => (MutationOutcome::Missing, details::name_or_unknown(None)),
        };
        self.commit(actor, HistoryAction::Updated, Section::Staff, details, outcome);
        Ok(outcome)
    }

    fn delete_staff_position(&mut self, actor: &Actor, position: Option<usize>) -> MutationOutcome {
        let removed = take_at(&mut self.data.staff, position);
        if let Some(member) = &removed {
            self.data
                .staff_overrides
                .retain(|entry| entry.name != member.name);
        }
        let details = details::named_deleted("Staff", removed.as_ref().map(|m| m.name.as_str()));
        let outcome = outcome_of(removed.is_some());
        self.commit(actor, HistoryAction::Deleted, Section::Staff, details, outcome);
        outcome
    }

    fn update_customer_position(
        &mut self,
        actor: &Actor,
        position: Option<usize>,
        draft: CustomerDraft,
    ) -> Result<MutationOutcome, ValidationError> {
        self.check(Section::Customers, draft.validate())?;
        let (outcome, details) =
            match position.and_then(|index| self.data.customers.get_mut(index)) {
                Some(target) => {
                    let details = draft.name.clone();
                    *target = draft.into_customer(target.id);
                    (MutationOutcome::Applied, details)
                }
                None => (MutationOutcome::Missing, details::name_or_unknown(None)),
            };
        self.commit(actor, HistoryAction::Updated, Section::Customers, details, outcome);
        Ok(outcome)
    }

    fn delete_customer_position(
        &mut self,
        actor: &Actor,
        position: Option<usize>,
    ) -> MutationOutcome {
        let removed = take_at(&mut self.data.customers, position);
        let details =
            details::named_deleted("Customer", removed.as_ref().map(|c| c.name.as_str()));
        let outcome = outcome_of(removed.is_some());
        self.commit(actor, HistoryAction::Deleted, Section::Customers, details, outcome);
        outcome
    }

    fn update_inventory_position(
        &mut self,
        actor: &Actor,
        position: Option<usize>,
        draft: InventoryDraft,
    ) -> Result<MutationOutcome, ValidationError> {
        self.check(Section::Inventory, draft.validate())?;
        let (outcome, details) =
            match position.and_then(|index| self.data.inventory.get_mut(index)) {
                Some(target) => {
                    let details = draft.name.clone();
                    *target = draft.into_item(target.id);
                    (MutationOutcome::Applied, details)
                }
                None => (MutationOutcome::Missing, details::name_or_unknown(None)),
            };
        self.commit(actor, HistoryAction::Updated, Section::Inventory, details, outcome);
        Ok(outcome)
    }

    fn delete_inventory_position(
        &mut self,
        actor: &Actor,
        position: Option<usize>,
    ) -> MutationOutcome {
        let removed = take_at(&mut self.data.inventory, position);
        let details = details::named_deleted("Item", removed.as_ref().map(|i| i.name.as_str()));
        let outcome = outcome_of(removed.is_some());
        self.commit(actor, HistoryAction::Deleted, Section::Inventory, details, outcome);
        outcome
    }

    fn check(
        &self,
        section: Section,
        result: Result<(), ValidationError>,
    ) -> Result<(), ValidationError> {
        if let Err(err) = &result {
            warn!(
                "event=store_validation_rejected module=store section={} error={err}",
                section.as_str()
            );
        }
        result
    }

    /// Epoch-millisecond id, bumped past the largest existing one.
    fn next_time_id(&self, existing: impl Iterator<Item = i64>) -> i64 {
        let now_ms = self.clock.utc_now().timestamp_millis();
        existing
            .max()
            .map_or(now_ms, |max| now_ms.max(max.saturating_add(1)))
    }

    fn commit(
        &mut self,
        actor: &Actor,
        action: HistoryAction,
        section: Section,
        details: String,
        outcome: MutationOutcome,
    ) {
        self.data.history.insert(
            0,
            HistoryEntry {
                timestamp: self.clock.utc_now(),
                action,
                section,
                details,
                user: actor.name().to_string(),
            },
        );
        info!(
            "event=store_mutation module=store status=ok section={} action={} outcome={} history={}",
            section.as_str(),
            action.as_str(),
            outcome.as_str(),
            self.data.history.len()
        );
        self.persist();
    }

    fn persist(&self) {
        let started_at = Instant::now();
        match self.repo.save(STORAGE_KEY, &self.data) {
            Ok(()) => debug!(
                "event=snapshot_save module=store status=ok duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Err(err) => warn!(
                "event=snapshot_save module=store status=error duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            ),
        }
    }
}

fn take_at<T>(items: &mut Vec<T>, position: Option<usize>) -> Option<T> {
    let index = position?;
    (index < items.len()).then(|| items.remove(index))
}

fn outcome_of(found: bool) -> MutationOutcome {
    if found {
        MutationOutcome::Applied
    } else {
        MutationOutcome::Missing
    }
}

fn next_sequential_id(existing: impl Iterator<Item = u64>) -> u64 {
    existing.max().map_or(1, |max| max.saturating_add(1))
}

#[cfg(test)]
mod tests {
    use super::{next_sequential_id, take_at};

    #[test]
    fn sequential_ids_start_at_one_and_follow_the_maximum() {
        assert_eq!(next_sequential_id(std::iter::empty()), 1);
        assert_eq!(next_sequential_id([3, 9, 4].into_iter()), 10);
    }

    #[test]
    fn take_at_ignores_out_of_range_positions() {
        let mut items = vec!["a", "b"];
        assert_eq!(take_at(&mut items, Some(5)), None);
        assert_eq!(take_at(&mut items, None), None);
        assert_eq!(take_at(&mut items, Some(0)), Some("a"));
        assert_eq!(items, vec!["b"]);
    }
}
