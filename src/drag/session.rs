use super::Sampler;

/// Outcome of feeding one value to a [`DragSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplerStatus {
    /// The geometry was rebuilt and replaced the preview.
    Accepted,
    /// Same value as before, or the builder had nothing new to show.
    NoChange,
    /// The value violates a precondition; the previous preview stays current.
    Rejected,
}

/// State of one interactive pull.
///
/// Dropping the session cancels it.
#[derive(Debug)]
pub struct DragSession<S: Sampler> {
    sampler: S,
    param: Option<S::Param>,
    current: Option<S::Output>,
}

impl<S: Sampler> DragSession<S> {
    /// Starts a session with no preview yet.
    #[must_use]
    pub fn new(sampler: S) -> Self {
        Self {
            sampler,
            param: None,
            current: None,
        }
    }

    /// Starts a session and samples `initial` right away. The returned status
    /// tells whether a first preview exists.
    #[must_use]
    pub fn with_initial(sampler: S, initial: S::Param) -> (Self, SamplerStatus) {
        let mut session = Self::new(sampler);
        let status = session.sample(initial);
        (session, status)
    }

    /// Feeds a new value and rebuilds the preview if it changed.
    pub fn sample(&mut self, param: S::Param) -> SamplerStatus {
        if self.param == Some(param) {
            tracing::trace!(?param, "sample unchanged");
            return SamplerStatus::NoChange;
        }
        match self.sampler.build(param) {
            Ok(Some(output)) => {
                self.param = Some(param);
                self.current = Some(output);
                SamplerStatus::Accepted
            }
            Ok(None) => {
                tracing::trace!(?param, "builder reported no change");
                SamplerStatus::NoChange
            }
            Err(err) => {
                tracing::debug!(?param, %err, "sample rejected");
                SamplerStatus::Rejected
            }
        }
    }

    #[must_use]
    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    /// Last accepted value.
    #[must_use]
    pub fn param(&self) -> Option<S::Param> {
        self.param
    }

    /// Geometry built for the last accepted value.
    #[must_use]
    pub fn current(&self) -> Option<&S::Output> {
        self.current.as_ref()
    }

    /// Ends the session, handing back the last accepted value with its geometry.
    ///
    /// Builders are pure, so the result is what a fresh build of that value
    /// would give.
    #[must_use]
    pub fn finish(self) -> Option<(S::Param, S::Output)> {
        self.param.zip(self.current)
    }
}
