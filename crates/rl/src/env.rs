/// Reinforcement learning environment trait.
///
/// Inspired by classic frameworks like OpenAI Gym, this trait defines the core
/// interface an environment must provide. Each call to [`step`] advances the
/// simulation by one decision and returns the new observation vector, a reward
/// signal, and whether the episode has terminated.
///
/// Actions arrive as a flat vector, one entry per action branch. Discrete
/// branches carry the chosen option as a whole number.
///
/// [`step`]: Env::step
pub trait Env {
    /// Advance the environment by one decision.
    ///
    /// Returns `(obs, reward, done)` where `obs` is the new observation vector,
    /// `reward` is the scalar reward, and `done` indicates episode termination.
    fn step(&mut self, action: &[f32]) -> (Vec<f32>, f32, bool);

    /// Reset the environment to its starting state and return the initial
    /// observation vector.
    fn reset(&mut self) -> Vec<f32>;

    /// Size of the observation vector.
    fn obs_size(&self) -> usize;

    /// Number of action branches.
    fn action_size(&self) -> usize;

    /// Per branch, per option availability for the next decision. An empty
    /// vector means nothing is masked.
    fn action_mask(&self) -> Vec<Vec<bool>> {
        Vec::new()
    }
}
