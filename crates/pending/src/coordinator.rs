//! Optimistic mutation coordinator.
//!
//! Orchestrates batch commit/delete over grouped aggregates: the affected
//! aggregates are removed from the shared cell eagerly, before any network
//! confirmation, and a failed remote call rolls the cell back by replacing
//! it wholesale with a fresh authoritative fetch. Rollback is never a patch;
//! that is what keeps the list free of duplicated or misplaced members while
//! a mutation is unresolved.
//!
//! Scopes are mutually exclusive while a ticket is open: a second mutation
//! against a locked scope is rejected with `ScopeBusy` instead of racing the
//! first one's rollback.

use crate::events::{ListenerId, PendingEvent};
use crate::transport::{FetchCriteria, MutationKind, RecordTransport};
use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use hashbrown::{HashMap, HashSet};
use tracklet_core::{ChangeRecord, Error, GroupedAggregate, RecordId, Result, Timestamp};
use tracklet_grouping::{assemble, member_total};
use tracklet_view::ViewState;

/// Unique identifier for an in-flight mutation.
pub type TicketId = u64;

/// The shared cell of grouped pending changes.
///
/// Only the coordinator and the fetch-completion path write to it; every
/// other consumer reads via snapshot or subscription.
pub type PendingCell = Rc<RefCell<ViewState<Vec<GroupedAggregate>, Error>>>;

/// What a mutation applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MutationScope {
    /// Every aggregate currently in the cell.
    All,
    /// The single aggregate whose scope key (its `timestamp_created`)
    /// matches.
    Single(Timestamp),
}

/// An open mutation: the optimistic removal has been applied and the remote
/// call has not settled yet.
///
/// The ticket carries the flattened member identifiers the transport call
/// needs. Settle it with `MutationCoordinator::confirm` or
/// `MutationCoordinator::roll_back`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MutationTicket {
    id: TicketId,
    kind: MutationKind,
    scope: MutationScope,
    record_ids: Vec<RecordId>,
}

impl MutationTicket {
    /// Returns the ticket identifier.
    #[inline]
    pub fn id(&self) -> TicketId {
        self.id
    }

    /// Returns the mutation kind.
    #[inline]
    pub fn kind(&self) -> MutationKind {
        self.kind
    }

    /// Returns the mutation scope.
    #[inline]
    pub fn scope(&self) -> MutationScope {
        self.scope
    }

    /// Returns the member ids of the removed aggregates, in display order.
    #[inline]
    pub fn record_ids(&self) -> &[RecordId] {
        &self.record_ids
    }
}

/// Terminal state of a driven mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The remote call succeeded; the optimistic removal is final.
    Confirmed,
    /// The remote call failed; the cell was rolled back to the
    /// authoritative set.
    RolledBack,
}

type EventListener = Box<dyn Fn(&PendingEvent)>;

/// Coordinates optimistic commit/delete batches over the pending cell.
pub struct MutationCoordinator {
    /// The shared view cell
    state: PendingCell,
    /// Open tickets by id
    in_flight: HashMap<TicketId, MutationScope>,
    /// Scope keys locked by open single-scope tickets
    locked: HashSet<Timestamp>,
    /// Whether an all-scope ticket is open
    all_locked: bool,
    /// Event listeners in registration order
    listeners: Vec<(ListenerId, EventListener)>,
    /// Next ticket ID to assign
    next_ticket: TicketId,
    /// Next listener ID to assign
    next_listener: ListenerId,
}

impl Default for MutationCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl MutationCoordinator {
    /// Creates a coordinator over a fresh, empty cell.
    pub fn new() -> Self {
        Self::with_cell(Rc::new(RefCell::new(ViewState::new())))
    }

    /// Creates a coordinator over an existing cell.
    pub fn with_cell(state: PendingCell) -> Self {
        Self {
            state,
            in_flight: HashMap::new(),
            locked: HashSet::new(),
            all_locked: false,
            listeners: Vec::new(),
            next_ticket: 1,
            next_listener: 1,
        }
    }

    /// Returns a handle on the shared cell.
    pub fn state(&self) -> PendingCell {
        self.state.clone()
    }

    /// Returns the number of open tickets.
    #[inline]
    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }

    /// Registers a listener for pending events.
    ///
    /// Listeners are invoked synchronously, in registration order.
    pub fn on_event<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&PendingEvent) + 'static,
    {
        let id = self.next_listener;
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener by ID.
    ///
    /// Returns true if the listener was found and removed.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let len_before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() < len_before
    }

    fn emit(&self, event: &PendingEvent) {
        for (_, listener) in &self.listeners {
            listener(event);
        }
    }

    /// Installs an authoritative record set into the cell.
    ///
    /// Assembles the records into aggregates, emits `Refreshed`, and
    /// publishes the result as fresh data.
    pub fn install(&mut self, records: Vec<ChangeRecord>) {
        let groups = assemble(&records);
        self.emit(&PendingEvent::Refreshed {
            member_total: member_total(&groups),
        });
        self.state.borrow_mut().resolve(groups);
    }

    /// Reloads the pending set from the collaborator.
    ///
    /// The cell enters `Loading` first, so previously fetched data stays
    /// visible while the fetch is in flight. A fetch failure lands in
    /// `Failed` with the stale data preserved; it is never silently blanked.
    pub fn refresh<T: RecordTransport>(&mut self, transport: &mut T) {
        self.state.borrow_mut().begin_load();
        match transport.fetch_pending() {
            Ok(records) => self.install(records),
            Err(error) => self.state.borrow_mut().fail(error),
        }
    }

    /// Reloads a filtered record set from the collaborator.
    pub fn refresh_filtered<T: RecordTransport>(
        &mut self,
        criteria: &FetchCriteria,
        transport: &mut T,
    ) {
        self.state.borrow_mut().begin_load();
        match transport.fetch_filtered(criteria) {
            Ok(records) => self.install(records),
            Err(error) => self.state.borrow_mut().fail(error),
        }
    }

    /// Opens a mutation: applies the optimistic removal and returns the
    /// ticket for the remote call.
    ///
    /// The scoped aggregates leave the cell immediately; subscribers see the
    /// removal before any network traffic. Fails with `ScopeBusy` if the
    /// scope (or everything, for `All`) is already locked by an open ticket,
    /// and with `ScopeNotFound` if no aggregate carries the scope key.
    pub fn begin(&mut self, kind: MutationKind, scope: MutationScope) -> Result<MutationTicket> {
        self.check_scope_free(scope)?;

        let current = self
            .state
            .borrow()
            .snapshot()
            .into_data()
            .unwrap_or_default();

        let (removed, remaining) = match scope {
            MutationScope::All => (current, Vec::new()),
            MutationScope::Single(key) => {
                if !current.iter().any(|g| g.timestamp_created() == key) {
                    return Err(Error::scope_not_found(key));
                }
                current
                    .into_iter()
                    .partition(|g| g.timestamp_created() == key)
            }
        };

        let record_ids: Vec<RecordId> =
            removed.iter().flat_map(GroupedAggregate::member_ids).collect();
        let members_removed = member_total(&removed);

        let event = match scope {
            MutationScope::All => PendingEvent::AllRemoved,
            MutationScope::Single(_) => PendingEvent::ScopeRemoved {
                members_removed,
                members_remaining: member_total(&remaining),
            },
        };

        // Eager local removal, then the badge correction it implies
        self.state.borrow_mut().resolve(remaining);
        self.emit(&event);

        self.lock_scope(scope);
        let id = self.next_ticket;
        self.next_ticket += 1;
        self.in_flight.insert(id, scope);

        Ok(MutationTicket {
            id,
            kind,
            scope,
            record_ids,
        })
    }

    /// Settles a ticket after remote success.
    ///
    /// The optimistic removal already reflects the final state; this only
    /// releases the scope lock.
    pub fn confirm(&mut self, ticket: TicketId) -> Result<()> {
        self.settle(ticket)?;
        Ok(())
    }

    /// Settles a ticket after remote failure.
    ///
    /// `authoritative` is a fresh `fetch_pending` result; it replaces the
    /// cell wholesale, discarding the optimistic removal rather than
    /// patching it back in.
    pub fn roll_back(&mut self, ticket: TicketId, authoritative: Vec<ChangeRecord>) -> Result<()> {
        self.settle(ticket)?;
        self.install(authoritative);
        Ok(())
    }

    /// Drives one mutation to a terminal state against the collaborator.
    ///
    /// On remote failure the authoritative pending set is re-fetched and
    /// rolled in. If that re-fetch itself fails, the ticket is still
    /// settled and the failure is surfaced through the cell instead.
    pub fn run<T: RecordTransport>(
        &mut self,
        kind: MutationKind,
        scope: MutationScope,
        transport: &mut T,
    ) -> Result<MutationOutcome> {
        let ticket = self.begin(kind, scope)?;

        let remote = match kind {
            MutationKind::Commit => transport.commit(ticket.record_ids()),
            MutationKind::Delete => transport.delete(ticket.record_ids()),
        };

        match remote {
            Ok(()) => {
                self.confirm(ticket.id())?;
                Ok(MutationOutcome::Confirmed)
            }
            Err(_) => {
                match transport.fetch_pending() {
                    Ok(records) => self.roll_back(ticket.id(), records)?,
                    Err(fetch_error) => {
                        self.settle(ticket.id())?;
                        self.state.borrow_mut().fail(fetch_error);
                    }
                }
                Ok(MutationOutcome::RolledBack)
            }
        }
    }

    fn check_scope_free(&self, scope: MutationScope) -> Result<()> {
        if self.all_locked {
            return Err(Error::all_scopes_busy());
        }
        match scope {
            MutationScope::All => {
                if !self.locked.is_empty() {
                    return Err(Error::all_scopes_busy());
                }
            }
            MutationScope::Single(key) => {
                if self.locked.contains(&key) {
                    return Err(Error::scope_busy(key));
                }
            }
        }
        Ok(())
    }

    fn lock_scope(&mut self, scope: MutationScope) {
        match scope {
            MutationScope::All => self.all_locked = true,
            MutationScope::Single(key) => {
                self.locked.insert(key);
            }
        }
    }

    /// Closes a ticket and releases its scope lock.
    fn settle(&mut self, ticket: TicketId) -> Result<MutationScope> {
        let scope = self
            .in_flight
            .remove(&ticket)
            .ok_or(Error::UnknownTicket { ticket })?;
        match scope {
            MutationScope::All => self.all_locked = false,
            MutationScope::Single(key) => {
                self.locked.remove(&key);
            }
        }
        Ok(scope)
    }
}
