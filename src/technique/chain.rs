//! This module contains [`TechniqueChain`], the ordered container of the
//! techniques attached to a manager, along with the rules that fold the
//! chain's hooks into a single decision.

use std::rc::Rc;

use tracing::trace;

use crate::{
    error::{
        technique::{Fault, Hook},
        Result,
    },
    manager::{SimulationManager, StashMapping, StepOptions},
    state::State,
    technique::{DynTechnique, FilterOutcome, Technique},
};

/// A container for an ordered set of techniques, where earlier techniques take
/// precedence over later ones.
#[derive(Debug, Default)]
pub struct TechniqueChain {
    /// The techniques, in priority order.
    techniques: Vec<DynTechnique>,
}

impl TechniqueChain {
    /// Creates a new chain with the provided `techniques`.
    #[must_use]
    pub fn new(techniques: impl Into<Vec<DynTechnique>>) -> Self {
        Self {
            techniques: techniques.into(),
        }
    }

    /// Adds `technique` to the end of the chain.
    pub fn add(&mut self, technique: DynTechnique) {
        self.techniques.push(technique);
    }

    /// Removes the first technique of type `T` from the chain, returning it.
    pub fn remove<T: Technique>(&mut self) -> Option<DynTechnique> {
        let index = self.techniques.iter().position(|t| t.as_ref().as_any().is::<T>())?;
        Some(self.techniques.remove(index))
    }

    /// Removes exactly the provided `technique` from the chain, returning it.
    ///
    /// Techniques are compared by identity, so other instances of the same
    /// type stay attached.
    pub fn remove_instance(&mut self, technique: &DynTechnique) -> Option<DynTechnique> {
        let target = Rc::as_ptr(technique).cast::<()>();
        let index = self
            .techniques
            .iter()
            .position(|t| Rc::as_ptr(t).cast::<()>() == target)?;
        Some(self.techniques.remove(index))
    }

    /// Gets a reference to the first technique of type `T`, if one exists in
    /// the chain.
    #[must_use]
    pub fn get<T: Technique>(&self) -> Option<&T> {
        self.techniques
            .iter()
            .find_map(|t| t.as_ref().as_any().downcast_ref::<T>())
    }

    /// Gets the technique at position `index` in the chain.
    #[must_use]
    pub fn nth(&self, index: usize) -> Option<DynTechnique> {
        self.techniques.get(index).cloned()
    }

    /// Gets the names of the techniques in the chain, in order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.techniques.iter().map(|t| t.name()).collect()
    }

    /// Gets the number of techniques in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.techniques.len()
    }

    /// Checks if the chain holds no techniques.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.techniques.is_empty()
    }

    /// Runs the setup hook of every technique in order on `manager`.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] on the first setup hook that fails. Later techniques are
    /// not set up.
    pub fn setup(&self, manager: &mut SimulationManager) -> Result<()> {
        for technique in &self.techniques {
            technique
                .setup(manager)
                .map_err(|error| Fault::wrap(technique.name(), Hook::Setup, error))?;
        }

        Ok(())
    }

    /// Offers `state` to the `step_state` hook of each technique in turn,
    /// returning the first mapping produced.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if a consulted hook fails.
    pub fn step_state(&self, state: &State, options: &StepOptions) -> Result<Option<StashMapping>> {
        first_opinion(&self.techniques, Hook::StepState, |technique| {
            technique.step_state(state, options)
        })
    }

    /// Offers `state` to the `filter` hook of each technique in turn, returning
    /// the first outcome produced.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if a consulted hook fails.
    pub fn filter(&self, state: &State) -> Result<Option<FilterOutcome>> {
        first_opinion(&self.techniques, Hook::Filter, |technique| {
            technique.filter(state)
        })
    }

    /// Checks if any technique considers exploration of `manager` complete.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if a consulted hook fails.
    pub fn complete(&self, manager: &SimulationManager) -> Result<bool> {
        any_complete(&self.techniques, |technique| technique.complete(manager))
    }
}

impl From<Vec<DynTechnique>> for TechniqueChain {
    fn from(value: Vec<DynTechnique>) -> Self {
        Self::new(value)
    }
}

impl IntoIterator for TechniqueChain {
    type IntoIter = std::vec::IntoIter<DynTechnique>;
    type Item = DynTechnique;

    fn into_iter(self) -> Self::IntoIter {
        self.techniques.into_iter()
    }
}

/// Asks each of `techniques` in order for its opinion through `ask`, returning
/// the first opinion given.
///
/// Techniques after the one that answers are not asked. Errors are attributed
/// to the technique that raised them and the `hook` being folded.
///
/// # Errors
///
/// Returns [`Err`] if `ask` fails for a consulted technique.
pub fn first_opinion<T>(
    techniques: &[DynTechnique],
    hook: Hook,
    mut ask: impl FnMut(&dyn Technique) -> Result<Option<T>>,
) -> Result<Option<T>> {
    for technique in techniques {
        let opinion = ask(technique.as_ref())
            .map_err(|error| Fault::wrap(technique.name(), hook, error))?;

        if opinion.is_some() {
            trace!(technique = technique.name(), %hook, "technique decided");
            return Ok(opinion);
        }
    }

    Ok(None)
}

/// Asks each of `techniques` in order whether exploration is complete,
/// stopping at the first that says it is.
///
/// # Errors
///
/// Returns [`Err`] if `ask` fails for a consulted technique.
pub fn any_complete(
    techniques: &[DynTechnique],
    mut ask: impl FnMut(&dyn Technique) -> Result<bool>,
) -> Result<bool> {
    for technique in techniques {
        let complete = ask(technique.as_ref())
            .map_err(|error| Fault::wrap(technique.name(), Hook::Complete, error))?;

        if complete {
            trace!(technique = technique.name(), "technique reported completion");
            return Ok(true);
        }
    }

    Ok(false)
}
