use chrono::{Datelike, NaiveDate};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::store::ConfigStore;
use crate::core::{FactureError, InvoiceNumber};

/// Store key holding the last year a number was shown or issued for.
pub const KEY_LAST_YEAR: &str = "derniere_annee_facture";
/// Store key holding the next sequential number.
pub const KEY_NEXT_NUMBER: &str = "prochain_numero";
/// Store key holding the year [`KEY_NEXT_NUMBER`] belongs to.
pub const KEY_COUNTER_YEAR: &str = "annee_prochain_numero";

/// Year-scoped invoice numbering over a [`ConfigStore`].
///
/// Two ways to obtain a number:
///
/// - [`allocate_number`](Self::allocate_number) reserves and advances the
///   counter in one step. Use it when the number is issued immediately.
/// - [`peek_next_number`](Self::peek_next_number) shows the number an invoice
///   will get, and [`confirm_number`](Self::confirm_number) advances the counter
///   once the invoice is saved. Nothing links the save to the confirm: a crash
///   between the two hands out the same number again, and confirming without
///   saving skips one.
///
/// One sequencer must own a given counter; operations on it are serialized.
#[derive(Debug)]
pub struct InvoiceSequencer<S> {
    store: S,
    lock: Mutex<()>,
}

/// Sequencer entries as read from the store.
#[derive(Debug, Clone, Copy)]
struct CounterState {
    last_year: Option<i32>,
    next_number: u64,
    counter_year: Option<i32>,
}

impl CounterState {
    /// The next number for `year`. A counter left from another year does not
    /// count; the year starts again at 1.
    fn next_for(&self, year: i32) -> u64 {
        // Stores written before the counter year was tracked only have the
        // year marker.
        let owner = self.counter_year.or(self.last_year);
        if owner == Some(year) {
            self.next_number
        } else {
            1
        }
    }
}

impl<S: ConfigStore> InvoiceSequencer<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            lock: Mutex::new(()),
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Number the next invoice of `year` will get, without consuming it.
    ///
    /// On the first call for a new year, the year marker is persisted; the
    /// counter itself is only written by [`confirm_number`](Self::confirm_number).
    pub async fn peek_next_number(&self, year: i32) -> Result<InvoiceNumber, FactureError> {
        let _guard = self.lock.lock().await;
        let state = self.read_state().await?;

        if state.last_year != Some(year) {
            self.roll_over(&state, year).await?;
        }

        let number = InvoiceNumber::new(year, state.next_for(year));
        debug!(%number, "peeked next invoice number");
        Ok(number)
    }

    /// Advance the counter of `year` past the number last shown by
    /// [`peek_next_number`](Self::peek_next_number).
    ///
    /// Call exactly once per saved invoice. A counter at `u64::MAX` is
    /// reported as [`FactureError::Numbering`] and left untouched.
    pub async fn confirm_number(&self, year: i32) -> Result<(), FactureError> {
        let _guard = self.lock.lock().await;
        let state = self.read_state().await?;

        let issued = InvoiceNumber::new(year, state.next_for(year));
        let next = issued.next()?;
        self.write_counter(&state, year, next.sequence()).await?;
        debug!(%issued, "confirmed invoice number");
        Ok(())
    }

    /// Reserve the next number of `year` and advance the counter in one step.
    pub async fn allocate_number(&self, year: i32) -> Result<InvoiceNumber, FactureError> {
        let _guard = self.lock.lock().await;
        let state = self.read_state().await?;

        if state.last_year != Some(year) {
            info!(year, previous = ?state.last_year, "invoice numbering rolled over to new year");
        }

        let number = InvoiceNumber::new(year, state.next_for(year));
        let next = number.next()?;
        self.write_counter(&state, year, next.sequence()).await?;
        debug!(%number, "allocated invoice number");
        Ok(number)
    }

    /// [`peek_next_number`](Self::peek_next_number) for the year of `date`.
    pub async fn peek_for_date(&self, date: NaiveDate) -> Result<InvoiceNumber, FactureError> {
        self.peek_next_number(date.year()).await
    }

    /// [`confirm_number`](Self::confirm_number) for the year of `date`.
    pub async fn confirm_for_date(&self, date: NaiveDate) -> Result<(), FactureError> {
        self.confirm_number(date.year()).await
    }

    /// [`allocate_number`](Self::allocate_number) for the year of `date`.
    pub async fn allocate_for_date(&self, date: NaiveDate) -> Result<InvoiceNumber, FactureError> {
        self.allocate_number(date.year()).await
    }

    async fn read_state(&self) -> Result<CounterState, FactureError> {
        let last_year = self.read_year(KEY_LAST_YEAR).await?;
        let counter_year = self.read_year(KEY_COUNTER_YEAR).await?;

        let next_number = match self.store.get_config(KEY_NEXT_NUMBER).await? {
            None => 1,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(n) if n > 0 => n,
                _ => {
                    warn!(key = KEY_NEXT_NUMBER, value = %raw, "malformed invoice counter, restarting at 1");
                    1
                }
            },
        };

        Ok(CounterState {
            last_year,
            next_number,
            counter_year,
        })
    }

    async fn read_year(&self, key: &str) -> Result<Option<i32>, FactureError> {
        let Some(raw) = self.store.get_config(key).await? else {
            return Ok(None);
        };
        match raw.trim().parse::<i32>() {
            Ok(year) => Ok(Some(year)),
            Err(_) => {
                warn!(key, value = %raw, "malformed year in invoice numbering state");
                Ok(None)
            }
        }
    }

    async fn roll_over(&self, state: &CounterState, year: i32) -> Result<(), FactureError> {
        info!(year, previous = ?state.last_year, "invoice numbering rolled over to new year");

        // Pin the stored counter to the year it was issued in, so the new
        // year marker does not adopt it before the first confirm.
        if state.counter_year.is_none() {
            let owner = state.last_year.unwrap_or_default();
            self.store
                .set_config(KEY_COUNTER_YEAR, &owner.to_string())
                .await?;
        }
        self.store
            .set_config(KEY_LAST_YEAR, &format!("{year:04}"))
            .await
    }

    async fn write_counter(
        &self,
        state: &CounterState,
        year: i32,
        next: u64,
    ) -> Result<(), FactureError> {
        self.store
            .set_config(KEY_NEXT_NUMBER, &next.to_string())
            .await?;
        if state.counter_year != Some(year) {
            self.store
                .set_config(KEY_COUNTER_YEAR, &format!("{year:04}"))
                .await?;
        }
        if state.last_year != Some(year) {
            self.store
                .set_config(KEY_LAST_YEAR, &format!("{year:04}"))
                .await?;
        }
        Ok(())
    }
}
