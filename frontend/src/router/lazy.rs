use std::sync::OnceLock;

use super::ViewFn;

/// A route view that is only acquired the first time its route is visited.
///
/// The loader runs at most once per process; later visits reuse the cached
/// view function.
pub struct LazyView {
    label: &'static str,
    loader: fn() -> ViewFn,
    cell: OnceLock<ViewFn>,
}

impl LazyView {
    pub const fn new(label: &'static str, loader: fn() -> ViewFn) -> Self {
        Self {
            label,
            loader,
            cell: OnceLock::new(),
        }
    }

    pub fn acquire(&self) -> ViewFn {
        *self.cell.get_or_init(|| {
            log::debug!("acquiring lazy view `{}`", self.label);
            (self.loader)()
        })
    }

    pub fn is_acquired(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl std::fmt::Debug for LazyView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyView")
            .field("label", &self.label)
            .field("acquired", &self.is_acquired())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::{IntoView, View};
    use std::sync::atomic::{AtomicUsize, Ordering};

    static LOADS: AtomicUsize = AtomicUsize::new(0);
    static COUNTED: LazyView = LazyView::new("counted", counted_loader);

    fn counted_view() -> View {
        "counted".into_view()
    }

    fn counted_loader() -> ViewFn {
        LOADS.fetch_add(1, Ordering::SeqCst);
        counted_view
    }

    #[test]
    fn loader_runs_at_most_once() {
        assert!(!COUNTED.is_acquired());
        let first = COUNTED.acquire();
        assert!(COUNTED.is_acquired());
        for _ in 0..5 {
            assert_eq!(COUNTED.acquire() as usize, first as usize);
        }
        assert_eq!(LOADS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn debug_output_reports_label() {
        let lazy = LazyView::new("report", counted_loader);
        let rendered = format!("{:?}", lazy);
        assert!(rendered.contains("report"));
        assert!(rendered.contains("acquired: false"));
    }
}
