//! Repository port for value-function persistence.
//!
//! The engine never touches this port. Training drivers use it to store the
//! artifact a learned agent plays from, keyed by team name.

use crate::{Result, types::TeamName, value_function::ValueFunction};

/// Port for persisting and loading value functions.
///
/// # Examples
///
/// ```no_run
/// use wild_tictactoe::{
///     ports::ValueFunctionRepository,
///     types::TeamName,
///     value_function::ValueFunction,
/// };
///
/// fn publish<R: ValueFunctionRepository>(
///     repo: &R,
///     values: &ValueFunction,
///     team: &TeamName,
/// ) -> wild_tictactoe::Result<()> {
///     repo.save(values, team)
/// }
/// ```
pub trait ValueFunctionRepository {
    /// Save the value function for `team`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the underlying storage fails.
    fn save(&self, values: &ValueFunction, team: &TeamName) -> Result<()>;

    /// Load the value function stored for `team`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ValueFunctionNotFound`] if nothing is stored
    /// for `team`, or another error if the stored data cannot be decoded.
    fn load(&self, team: &TeamName) -> Result<ValueFunction>;
}
