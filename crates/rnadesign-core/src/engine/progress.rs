// Designs complete in whatever order the worker threads finish.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Progress {
    BatchStart { total_designs: u64 },
    DesignComplete { index: usize, pair_energy: f64 },
    BatchFinish,
}

/// Called from worker threads during batch design, hence `Send + Sync`.
pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
