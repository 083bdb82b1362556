use std::fmt;
use std::sync::Arc;

/// How a run hands icons to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    /// Write every candidate.
    #[default]
    Direct,
    /// Decode every candidate, let the collaborator pick, write the picks.
    Preview,
}

#[derive(Clone, Default)]
pub struct ExtractOptions {
    pub mode: Mode,
    /// Inner package to use when the source is a split bundle.
    pub inner: Option<String>,
    pub on_progress: Option<Arc<dyn Fn(Progress) + Send + Sync>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Progress {
    pub processed: usize,
    pub total: usize,
    pub current: String,
}

impl ExtractOptions {
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn inner(mut self, name: impl Into<String>) -> Self {
        self.inner = Some(name.into());
        self
    }

    pub fn on_progress(mut self, callback: Arc<dyn Fn(Progress) + Send + Sync>) -> Self {
        self.on_progress = Some(callback);
        self
    }

    pub(crate) fn report_progress(&self, processed: usize, total: usize, current: &str) {
        if let Some(callback) = &self.on_progress {
            callback(Progress {
                processed,
                total,
                current: current.to_string(),
            });
        }
    }
}

impl fmt::Debug for ExtractOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractOptions")
            .field("mode", &self.mode)
            .field("inner", &self.inner)
            .field("on_progress", &self.on_progress.is_some())
            .finish()
    }
}

impl Progress {
    pub fn percentage(&self) -> f32 {
        if self.total == 0 {
            100.0
        } else {
            (self.processed as f32 / self.total as f32) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn extract_options_default() {
        let options = ExtractOptions::default();
        assert_eq!(options.mode, Mode::Direct);
        assert!(options.inner.is_none());
        assert!(options.on_progress.is_none());
    }

    #[test]
    fn extract_options_builder_pattern() {
        let options = ExtractOptions::default()
            .mode(Mode::Preview)
            .inner("base.apk");
        assert_eq!(options.mode, Mode::Preview);
        assert_eq!(options.inner.as_deref(), Some("base.apk"));
    }

    #[test]
    fn extract_options_on_progress_callback() {
        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = counter.clone();

        let options = ExtractOptions::default().on_progress(Arc::new(move |progress| {
            counter_clone.fetch_add(progress.processed, Ordering::SeqCst);
        }));

        options.report_progress(1, 2, "res/drawable/a.png");
        options.report_progress(2, 2, "res/drawable/b.png");
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn progress_percentage() {
        let progress = Progress {
            processed: 1,
            total: 4,
            current: "res/drawable/a.png".to_string(),
        };
        assert_eq!(progress.percentage(), 25.0);

        let empty = Progress {
            processed: 0,
            total: 0,
            current: String::new(),
        };
        assert_eq!(empty.percentage(), 100.0);
    }

    #[test]
    fn debug_hides_callback() {
        let options = ExtractOptions::default().on_progress(Arc::new(|_| {}));
        assert!(format!("{options:?}").contains("on_progress: true"));
    }
}
