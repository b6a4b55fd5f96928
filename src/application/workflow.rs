use super::gate::{PinGate, TokenIssuer};
use super::search;
use crate::domain::atm::{AtmId, AtmRecord};
use crate::domain::cash::{Amount, Denomination, DenominationCounts};
use crate::domain::ports::{
    AtmDirectory, AtmDirectoryBox, CredentialVerifierBox, TokenGeneratorBox,
};
use crate::domain::reservation::{Reservation, ensure_reservable};
use crate::error::ReservationError;
use chrono::{Local, NaiveDate};
use tracing::{debug, info};

/// Where a workflow instance currently is.
///
/// Confirmation is terminal for a draft: the produced `Reservation` is
/// surfaced to the caller and the workflow resets to `SelectingAtm` for
/// reuse, so the confirmed state never appears in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    SelectingAtm,
    EnteringDetails,
    AwaitingPin,
}

impl Step {
    fn name(&self) -> &'static str {
        match self {
            Step::SelectingAtm => "selecting a terminal",
            Step::EnteringDetails => "entering details",
            Step::AwaitingPin => "awaiting PIN",
        }
    }
}

/// Snapshot of the in-progress draft, re-emitted after every intent.
///
/// `last_error` carries the most recent rejection for the presentation
/// layer to render; it is cleared by the next accepted intent.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowState {
    pub step: Step,
    pub atm: Option<AtmRecord>,
    pub amount_entry: String,
    pub date: NaiveDate,
    pub counts: DenominationCounts,
    pub last_error: Option<ReservationError>,
}

impl WorkflowState {
    fn new(today: NaiveDate) -> Self {
        Self {
            step: Step::SelectingAtm,
            atm: None,
            amount_entry: String::new(),
            date: today,
            counts: DenominationCounts::new(),
            last_error: None,
        }
    }
}

/// The reservation state machine: `SelectingAtm -> EnteringDetails ->
/// AwaitingPin -> confirmed`, with `EnteringDetails` looping on itself while
/// the user edits amount, date and denominations.
///
/// Owns one draft at a time. Every rejected intent returns a typed error and
/// leaves the draft unchanged apart from the recorded error; abandoning the
/// draft before confirmation has no side effects.
pub struct ReservationWorkflow {
    directory: AtmDirectoryBox,
    gate: PinGate,
    issuer: TokenIssuer,
    state: WorkflowState,
}

impl ReservationWorkflow {
    pub fn new(
        directory: AtmDirectoryBox,
        verifier: CredentialVerifierBox,
        generator: TokenGeneratorBox,
    ) -> Self {
        let state = WorkflowState::new(Local::now().date_naive());
        Self {
            directory,
            gate: PinGate::new(verifier),
            issuer: TokenIssuer::new(generator),
            state,
        }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    /// The directory listing narrowed by the search box text.
    pub fn search(&self, query: &str) -> Vec<AtmRecord> {
        search::filter_directory(&self.directory.list_atms(), query)
    }

    /// Chooses the terminal for the draft and moves to detail entry.
    ///
    /// Reselecting while entering details keeps the rest of the draft, as a
    /// user backing out of one terminal into another would expect.
    pub fn select_atm(&mut self, id: &AtmId) -> Result<(), ReservationError> {
        let outcome = self.try_select(id);
        self.record(outcome)
    }

    fn try_select(&mut self, id: &AtmId) -> Result<(), ReservationError> {
        if self.state.step == Step::AwaitingPin {
            return Err(self.out_of_turn("select_atm"));
        }
        let atm = self
            .directory
            .find(id)
            .ok_or_else(|| ReservationError::UnknownAtm(id.to_string()))?;
        info!(atm = %atm.id, location = %atm.location, "terminal selected");
        self.state.atm = Some(atm);
        self.state.step = Step::EnteringDetails;
        Ok(())
    }

    /// Records the raw amount text. Parsing is deferred to submission so the
    /// user can edit freely.
    pub fn set_amount(&mut self, text: impl Into<String>) -> Result<(), ReservationError> {
        let outcome = if self.state.step == Step::SelectingAtm {
            Err(self.out_of_turn("set_amount"))
        } else {
            self.state.amount_entry = text.into();
            Ok(())
        };
        self.record(outcome)
    }

    pub fn set_date(&mut self, date: NaiveDate) -> Result<(), ReservationError> {
        let outcome = if self.state.step == Step::SelectingAtm {
            Err(self.out_of_turn("set_date"))
        } else {
            self.state.date = date;
            Ok(())
        };
        self.record(outcome)
    }

    /// Applies a signed adjustment to one denomination counter.
    pub fn adjust_denomination(
        &mut self,
        denomination: Denomination,
        delta: i64,
    ) -> Result<(), ReservationError> {
        let outcome = if self.state.step == Step::SelectingAtm {
            Err(self.out_of_turn("adjust_denomination"))
        } else {
            self.state.counts.adjust(denomination, delta);
            debug!(?denomination, delta, total = %self.state.counts.total(), "denominations adjusted");
            Ok(())
        };
        self.record(outcome)
    }

    /// Validates the draft and moves to the PIN prompt.
    ///
    /// Checks run in a fixed order: the amount must parse as a positive
    /// number, the note total must reconcile against it exactly, and the
    /// date must not precede today. The first failure is returned and the
    /// draft stays in `EnteringDetails`.
    pub fn submit_details(&mut self) -> Result<(), ReservationError> {
        let outcome = self.try_submit_details();
        self.record(outcome)
    }

    fn try_submit_details(&mut self) -> Result<(), ReservationError> {
        if self.state.step != Step::EnteringDetails {
            return Err(self.out_of_turn("submit_details"));
        }
        let amount = Amount::parse(&self.state.amount_entry)?;
        self.state.counts.reconcile(amount)?;
        ensure_reservable(self.state.date, Local::now().date_naive())?;
        debug!(%amount, total = %self.state.counts.total(), "details validated");
        self.state.step = Step::AwaitingPin;
        Ok(())
    }

    /// Confirms the draft behind the PIN gate.
    ///
    /// Edits stay live while the PIN prompt is open, so the draft is
    /// re-validated before the token is drawn. On success the completed
    /// `Reservation` is returned by value and the workflow resets to
    /// `SelectingAtm`. On a failed check the draft stays in `AwaitingPin`
    /// and retries are unlimited; the submitted PIN is never retained.
    pub fn submit_pin(&mut self, pin: &str) -> Result<Reservation, ReservationError> {
        let outcome = self.try_submit_pin(pin);
        self.record(outcome)
    }

    fn try_submit_pin(&mut self, pin: &str) -> Result<Reservation, ReservationError> {
        if self.state.step != Step::AwaitingPin {
            return Err(self.out_of_turn("submit_pin"));
        }
        self.gate.submit(pin)?;

        let today = Local::now().date_naive();
        let amount = Amount::parse(&self.state.amount_entry)?;
        self.state.counts.reconcile(amount)?;
        let date = ensure_reservable(self.state.date, today)?;
        let atm = match self.state.atm.clone() {
            Some(atm) => atm,
            // Unreachable through the public API; rejected like any other
            // wrong-step intent.
            None => return Err(self.out_of_turn("submit_pin")),
        };

        let reservation = Reservation {
            atm,
            amount,
            date,
            token: self.issuer.issue(),
            denominations: self.state.counts,
        };
        info!(
            token = %reservation.token,
            atm = %reservation.atm.id,
            amount = %reservation.amount,
            date = %reservation.date,
            "reservation confirmed"
        );
        self.state = WorkflowState::new(today);
        Ok(reservation)
    }

    /// Declines to confirm and returns to detail entry.
    pub fn cancel_pin(&mut self) -> Result<(), ReservationError> {
        let outcome = if self.state.step == Step::AwaitingPin {
            self.state.step = Step::EnteringDetails;
            Ok(())
        } else {
            Err(self.out_of_turn("cancel_pin"))
        };
        self.record(outcome)
    }

    fn out_of_turn(&self, intent: &'static str) -> ReservationError {
        ReservationError::OutOfTurn {
            intent,
            step: self.state.step.name(),
        }
    }

    fn record<T>(
        &mut self,
        outcome: Result<T, ReservationError>,
    ) -> Result<T, ReservationError> {
        self.state.last_error = match &outcome {
            Ok(_) => None,
            Err(e) => Some(e.clone()),
        };
        outcome
    }
}
