//! One dashboard session: the filter machine plus the view currently shown.

use crate::core::diagram::{DIMMED_OPACITY, TimelineDiagram, clamp_opacity};
use crate::core::filter::{FilterEvent, FilterMachine, StageOutput};
use crate::core::view::ViewModel;
use crate::errors::{AppError, AppResult};
use crate::models::RecordSet;
use std::collections::HashSet;

/// Displayed state lives here and only changes on a successful confirm,
/// a reset, or an emphasis toggle.
pub struct DashboardSession {
    machine: FilterMachine,
    view: Option<ViewModel>,
    diagram: Option<TimelineDiagram>,
    dimmed_opacity: f64,
}

impl DashboardSession {
    pub fn new(records: RecordSet) -> Self {
        Self {
            machine: FilterMachine::new(records),
            view: None,
            diagram: None,
            dimmed_opacity: DIMMED_OPACITY,
        }
    }

    pub fn with_dimmed_opacity(mut self, dimmed: f64) -> Self {
        self.dimmed_opacity = clamp_opacity(dimmed);
        self
    }

    pub fn machine(&self) -> &FilterMachine {
        &self.machine
    }

    pub fn view(&self) -> Option<&ViewModel> {
        self.view.as_ref()
    }

    pub fn diagram(&self) -> Option<&TimelineDiagram> {
        self.diagram.as_ref()
    }

    /// Forward an event; a confirmed subset replaces the displayed view.
    pub fn handle(&mut self, event: FilterEvent) -> AppResult<StageOutput> {
        let is_reset = event == FilterEvent::Reset;
        let out = self.machine.apply(event)?;

        if let StageOutput::Confirmed(subset) = &out {
            let view = ViewModel::new(subset.clone())?;
            self.diagram = Some(view.states_duration_diagram());
            self.view = Some(view);
        } else if is_reset {
            self.view = None;
            self.diagram = None;
        }
        Ok(out)
    }

    /// Back to the settings: the selection and the displayed view are dropped.
    pub fn back_to_settings(&mut self) -> AppResult<StageOutput> {
        self.handle(FilterEvent::Reset)
    }

    /// Re-emphasise the displayed diagram. The diagram is moved through the
    /// transform, never edited in place.
    pub fn emphasize(&mut self, selected: &HashSet<String>) -> AppResult<&TimelineDiagram> {
        let diagram = self.diagram.take().ok_or(AppError::EmptyView)?;
        let diagram = diagram.with_emphasis(selected, self.dimmed_opacity);
        Ok(self.diagram.insert(diagram))
    }
}
