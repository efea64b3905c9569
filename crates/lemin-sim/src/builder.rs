//! Fluent builder wiring `PathFinder` → `AntScheduler` → `Simulation`.

use lemin_core::RunConfig;
use lemin_graph::{Farm, GraphError, PathFinder, PathSet, finders_for};
use lemin_schedule::{AntScheduler, Assignment, GreedyScheduler};
use tracing::{debug, info, warn};

use crate::{SimError, SimResult, Simulation};

/// The outcome of path search and scheduling, before any tick is run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// Name of the finder whose paths were kept.
    pub finder:     &'static str,
    pub paths:      PathSet,
    pub assignment: Assignment,
    /// Predicted number of ticks.
    pub makespan:   u64,
}

/// Fluent builder for [`Simulation`].
///
/// # Inputs
///
/// - `&Farm` — a farm satisfying the builder invariants (see `lemin-graph`).
/// - [`RunConfig`] — strategy, neighbor order, limits.
///
/// # Optional overrides
///
/// | Method              | Default                                   |
/// |---------------------|-------------------------------------------|
/// | `.path_finder(f)`   | finder(s) named by `config.strategy`      |
/// | `.scheduler(s)`     | [`GreedyScheduler`]                       |
///
/// When several finders are configured ([`Strategy::Best`]), each result is
/// scheduled and the plan with the smallest makespan is kept; on a tie the
/// later finder wins.
///
/// [`Strategy::Best`]: lemin_core::Strategy::Best
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(&farm, config).build()?;
/// let summary = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<'f> {
    farm:      &'f Farm,
    config:    RunConfig,
    finders:   Option<Vec<Box<dyn PathFinder>>>,
    scheduler: Box<dyn AntScheduler>,
}

impl<'f> SimBuilder<'f> {
    pub fn new(farm: &'f Farm, config: RunConfig) -> Self {
        Self {
            farm,
            config,
            finders:   None,
            scheduler: Box::new(GreedyScheduler),
        }
    }

    /// Use `finder` instead of the configured strategy.  May be called more
    /// than once to compare several finders.
    pub fn path_finder<F: PathFinder + 'static>(mut self, finder: F) -> Self {
        self.finders.get_or_insert_with(Vec::new).push(Box::new(finder));
        self
    }

    pub fn scheduler<S: AntScheduler + 'static>(mut self, scheduler: S) -> Self {
        self.scheduler = Box::new(scheduler);
        self
    }

    /// Run path search and scheduling without building a simulation.
    pub fn plan(&self) -> SimResult<Plan> {
        self.config.validate()?;

        let configured;
        let finders: &[Box<dyn PathFinder>] = match &self.finders {
            Some(f) => f,
            None => {
                configured = finders_for(&self.config);
                &configured
            }
        };

        let mut best: Option<Plan>              = None;
        let mut no_route: Option<GraphError>    = None;

        for finder in finders {
            let paths = match finder.find_paths(self.farm) {
                Ok(p) => p,
                Err(e @ GraphError::NoRoute { .. }) => {
                    no_route = Some(e);
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            let assignment = self.scheduler.assign(&paths, self.farm.ants)?;
            validate(&paths, &assignment, self.farm.ants)?;
            let makespan = assignment.makespan(&paths);
            debug!(finder = finder.name(), paths = paths.len(), makespan, "candidate plan");

            if best.as_ref().is_none_or(|b| makespan <= b.makespan) {
                best = Some(Plan { finder: finder.name(), paths, assignment, makespan });
            }
        }

        let plan = match (best, no_route) {
            (Some(plan), _)  => plan,
            (None, Some(e))  => return Err(e.into()),
            // Only reachable with an empty finder list.
            (None, None)     => return Err(lemin_schedule::ScheduleError::NoPaths.into()),
        };

        info!(
            finder   = plan.finder,
            paths    = plan.paths.len(),
            ants     = self.farm.ants,
            makespan = plan.makespan,
            "plan selected"
        );
        Ok(plan)
    }

    /// Plan the run and return a ready-to-step [`Simulation`].
    ///
    /// A plan whose makespan exceeds `config.tick_limit` is rejected here with
    /// [`SimError::TickLimit`], before any tick is produced.
    pub fn build(self) -> SimResult<Simulation<'f>> {
        let plan = self.plan()?;
        if let Some(limit) = self.config.tick_limit.filter(|&limit| plan.makespan > limit) {
            warn!(makespan = plan.makespan, limit, "plan exceeds the tick limit");
            return Err(SimError::TickLimit {
                limit,
                remaining: self.farm.ants as usize,
            });
        }
        Ok(Simulation::new(self.farm, plan.paths, plan.assignment)
            .with_tick_limit(self.config.tick_limit))
    }
}

/// Reject an assignment that does not match its path set or drops ants.
fn validate(paths: &PathSet, assignment: &Assignment, ants: u32) -> SimResult<()> {
    if assignment.path_count() != paths.len() {
        return Err(SimError::PathCountMismatch {
            paths:  paths.len(),
            queues: assignment.path_count(),
        });
    }
    assignment.check_complete(ants)?;
    Ok(())
}
