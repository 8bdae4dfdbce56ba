use tracing::{debug, info};

use crate::core::{
    HitSummary, PlottedPoint, PointerPoint, ViewConfig, ViewOrientation, ZoneId, classify,
    zone_center,
};
use crate::error::{ChartError, ChartResult};
use crate::extensions::{SessionEvent, SessionObserver};
use crate::game::{CountStateMachine, GameState};
use crate::interaction::{PlotState, PlotTarget};

use super::{
    ChartDocument, ChartId, ChartKind, ChartStore, GameStateMarker, Participants, PitchDraft,
    PitchId, PromptQueue, PromptRole, SessionConfig, StoredPitch, restore_game_state,
};

/// Charting session for one chart.
///
/// Created on chart load, mutated only through its methods, and dropped (or
/// turned back into its store with [`ChartingSession::into_store`]) when the
/// operator navigates away. All mutation happens through `&mut self`, so at
/// most one persistence call can be in flight for the chart.
pub struct ChartingSession<S: ChartStore> {
    pub(super) store: S,
    pub(super) config: SessionConfig,
    pub(super) chart_id: ChartId,
    pub(super) kind: ChartKind,
    pub(super) participants: Participants,
    pub(super) pitches: Vec<StoredPitch>,
    pub(super) game_state: Option<GameState>,
    pub(super) game_state_marker: Option<GameStateMarker>,
    pub(super) machine: CountStateMachine,
    pub(super) zone_view: ViewConfig,
    pub(super) field_view: ViewConfig,
    pub(super) plot: PlotState,
    pub(super) draft: PitchDraft,
    pub(super) prompts: PromptQueue,
    pub(super) observers: Vec<Box<dyn SessionObserver>>,
}

impl<S: ChartStore> ChartingSession<S> {
    /// Fetches the chart and derives game state from its persisted pitches.
    ///
    /// Missing required players are queued as prompts: the pitcher always,
    /// the batter for game charts.
    pub fn load(mut store: S, chart_id: ChartId, config: SessionConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        let document = store.get_chart_by_id(&chart_id)?;
        if document.id != chart_id {
            return Err(ChartError::InvalidData(format!(
                "store returned chart `{}` for `{chart_id}`",
                document.id
            )));
        }

        let zone_view = config
            .zone_plot
            .view_config(config.orientation.is_mirrored())?;
        let field_view = config.field_plot.view_config(false)?;
        let game_state = restore_game_state(
            document.kind,
            &document.pitches,
            document.game_state_marker.as_ref(),
        );

        let mut prompts = PromptQueue::default();
        if document.participants.pitcher.is_none() {
            prompts.push(PromptRole::Pitcher);
        }
        if document.kind == ChartKind::Game && document.participants.batter.is_none() {
            prompts.push(PromptRole::Batter);
        }

        info!(
            chart_id = %chart_id,
            kind = ?document.kind,
            pitches = document.pitches.len(),
            pending_prompts = prompts.len(),
            "chart loaded"
        );

        Ok(Self {
            store,
            machine: CountStateMachine::new(config.disable_auto_outs),
            config,
            chart_id,
            kind: document.kind,
            participants: document.participants,
            pitches: document.pitches,
            game_state,
            game_state_marker: document.game_state_marker,
            zone_view,
            field_view,
            plot: PlotState::default(),
            draft: PitchDraft::default(),
            prompts,
            observers: Vec::new(),
        })
    }

    /// Re-fetches the chart and recomputes state from persisted history.
    ///
    /// The in-progress plot and draft are kept.
    pub fn reload(&mut self) -> ChartResult<()> {
        let document = self.store.get_chart_by_id(&self.chart_id)?;
        self.kind = document.kind;
        self.apply_chart_document(document);
        debug!(chart_id = %self.chart_id, pitches = self.pitches.len(), "chart reloaded");
        Ok(())
    }

    /// Takes participants, pitches and the game-state marker from a store
    /// response.
    pub(super) fn apply_chart_document(&mut self, document: ChartDocument) {
        self.participants = document.participants;
        self.pitches = document.pitches;
        self.game_state_marker = document.game_state_marker;
        self.refresh_game_state();
    }

    pub(super) fn refresh_game_state(&mut self) {
        self.game_state =
            restore_game_state(self.kind, &self.pitches, self.game_state_marker.as_ref());
    }

    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Direct store access. Changes made here are not seen by the session
    /// until [`ChartingSession::reload`].
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn chart_id(&self) -> &ChartId {
        &self.chart_id
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    #[must_use]
    pub fn participants(&self) -> &Participants {
        &self.participants
    }

    #[must_use]
    pub fn pitches(&self) -> &[StoredPitch] {
        &self.pitches
    }

    /// Current count/outs/inning. `None` for bullpen charts.
    #[must_use]
    pub fn game_state(&self) -> Option<GameState> {
        self.game_state
    }

    #[must_use]
    pub fn plot_state(&self) -> PlotState {
        self.plot
    }

    #[must_use]
    pub fn draft(&self) -> &PitchDraft {
        &self.draft
    }

    #[must_use]
    pub fn prompts(&self) -> &PromptQueue {
        &self.prompts
    }

    #[must_use]
    pub fn pending_prompt(&self) -> Option<PromptRole> {
        self.prompts.current()
    }

    #[must_use]
    pub fn view(&self, target: PlotTarget) -> ViewConfig {
        match target {
            PlotTarget::StrikeZone => self.zone_view,
            PlotTarget::Field => self.field_view,
        }
    }

    #[must_use]
    pub fn orientation(&self) -> ViewOrientation {
        self.config.orientation
    }

    /// Switches between batter and pitcher view. Plotted points are domain
    /// coordinates and survive the switch untouched.
    pub fn set_orientation(&mut self, orientation: ViewOrientation) {
        self.config.orientation = orientation;
        self.zone_view = self.zone_view.with_mirrored(orientation.is_mirrored());
        debug!(?orientation, "view orientation changed");
    }

    pub fn set_disable_auto_outs(&mut self, disable: bool) {
        self.config.disable_auto_outs = disable;
        self.machine = CountStateMachine::new(disable);
        debug!(disable, "auto outs toggled");
    }

    pub fn pointer_move(&mut self, target: PlotTarget, pointer: PointerPoint) {
        let domain = self.view(target).to_domain(pointer);
        self.plot.on_pointer_move(target, pointer, domain);
    }

    pub fn pointer_leave(&mut self) {
        self.plot.on_pointer_leave();
    }

    /// Plots the point under `pointer`.
    ///
    /// Returns `None` and leaves the plot untouched when the pointer lies
    /// outside the plot rectangle.
    pub fn plot_pointer(
        &mut self,
        target: PlotTarget,
        pointer: PointerPoint,
    ) -> Option<PlottedPoint> {
        let point = self.view(target).to_domain(pointer)?;
        self.plot.plot(target, point);
        self.emit_session_event(SessionEvent::PointPlotted {
            target,
            x: point.x,
            y: point.y,
        });
        Some(point)
    }

    /// Plots a domain coordinate directly (keyboard entry, imports).
    pub fn plot_domain(&mut self, target: PlotTarget, point: PlottedPoint) -> ChartResult<()> {
        if !point.is_finite() {
            return Err(ChartError::InvalidData(
                "plotted point must be finite".to_owned(),
            ));
        }
        let pointer = self.view(target).to_pointer(point);
        if !self.view(target).contains_pointer(pointer) {
            return Err(ChartError::InvalidData(
                "plotted point lies outside the plot".to_owned(),
            ));
        }
        self.plot.plot(target, point);
        self.emit_session_event(SessionEvent::PointPlotted {
            target,
            x: point.x,
            y: point.y,
        });
        Ok(())
    }

    /// Zone enclosing a strike-zone domain point under the configured scheme.
    #[must_use]
    pub fn classify_point(&self, point: PlottedPoint) -> Option<ZoneId> {
        classify(point, self.config.zone_scheme, self.config.strike_zone)
    }

    /// Zone under a strike-zone pointer position in the current orientation.
    #[must_use]
    pub fn zone_at_pointer(&self, pointer: PointerPoint) -> Option<ZoneId> {
        self.zone_view
            .to_domain(pointer)
            .and_then(|point| self.classify_point(point))
    }

    /// Pointer position of a zone's center in the current orientation.
    #[must_use]
    pub fn zone_pointer_center(&self, zone: ZoneId) -> Option<PointerPoint> {
        zone_center(zone, self.config.zone_scheme, self.config.strike_zone)
            .map(|point| self.zone_view.to_pointer(point))
    }

    /// Field reading of the plotted hit location for the current matchup.
    #[must_use]
    pub fn hit_summary(&self) -> Option<HitSummary> {
        let point = self.plot.hit_point()?;
        Some(self.config.field.summarize(point, self.participants.batter_side()))
    }

    /// Field reading of a persisted pitch's hit location, relative to the
    /// players recorded with it. `Ok(None)` when the pitch has no hit location.
    pub fn pitch_hit_summary(&self, pitch_id: &PitchId) -> ChartResult<Option<HitSummary>> {
        let record = self
            .pitches
            .iter()
            .find(|pitch| &pitch.id == pitch_id)
            .map(|pitch| &pitch.record)
            .ok_or_else(|| ChartError::PitchNotFound {
                id: pitch_id.to_string(),
            })?;
        let batter_side = record
            .batter
            .as_ref()
            .map(|batter| batter.batting_hand.side_against(record.pitcher.throwing_hand));
        Ok(record
            .hit_location
            .map(|point| self.config.field.summarize(point, batter_side)))
    }
}
