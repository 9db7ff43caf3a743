#[derive(Debug, Clone)]
pub enum Progress {
    /// A whole-pipeline stage (generation, discovery, cleanup) has begun.
    StageStart { name: &'static str },
    StageFinish,

    /// The per-item analysis pass has begun over `total_items` candidate sets.
    BatchStart { total_items: u64 },
    /// One candidate set is now being processed.
    ItemStart { stem: String },
    ItemFinish,
    BatchFinish,

    Message(String),
}

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
