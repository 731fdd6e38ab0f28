//! Stats Counter Logic
//!
//! Linear counter interpolation and the toast queue.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterSpec {
    pub start: i64,
    pub end: i64,
}

impl CounterSpec {
    /// Value at `progress` in [0, 1], truncated
    pub fn value_at_progress(&self, progress: f64) -> i64 {
        (progress * (self.end - self.start) as f64 + self.start as f64).floor() as i64
    }

    /// Counters that end above ten carry a trailing `+`
    pub fn display(&self, value: i64) -> String {
        if self.end > 10 { format!("{}+", value) } else { value.to_string() }
    }

    pub fn initial_display(&self) -> String {
        self.display(self.start)
    }
}

pub const TOAST_TEXT: &str = "Статистика обновлена!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub text: String,
}

/// Toasts on screen; each one removes itself by id after its timeout
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u32,
}

impl ToastQueue {
    pub fn push(&mut self, text: impl Into<String>) -> u32 {
        self.next_id += 1;
        self.toasts.push(Toast { id: self.next_id, text: text.into() });
        self.next_id
    }

    pub fn remove(&mut self, id: u32) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::STATS_ANIMATION_MS;
    use leptos_viewport::progress;

    const PROJECTS: CounterSpec = CounterSpec { start: 8, end: 12 };
    const YEARS: CounterSpec = CounterSpec { start: 3, end: 4 };

    /// Counter value for a frame at `now` in a run that started at `start`
    fn frame_value(spec: CounterSpec, start: f64, now: f64) -> i64 {
        spec.value_at_progress(progress(start, now, STATS_ANIMATION_MS))
    }

    #[test]
    fn test_counters_finish_at_end_value() {
        assert_eq!(PROJECTS.display(frame_value(PROJECTS, 200.0, 1200.0)), "12+");
        assert_eq!(YEARS.display(frame_value(YEARS, 200.0, 1200.0)), "4");
        assert_eq!(frame_value(PROJECTS, 200.0, 9000.0), 12);
    }

    #[test]
    fn test_interpolation_truncates() {
        assert_eq!(frame_value(PROJECTS, 200.0, 200.0), 8);
        assert_eq!(frame_value(PROJECTS, 200.0, 699.0), 9);
        assert_eq!(frame_value(PROJECTS, 200.0, 700.0), 10);
        assert_eq!(frame_value(YEARS, 200.0, 1199.0), 3);
    }

    #[test]
    fn test_initial_display() {
        assert_eq!(PROJECTS.initial_display(), "8+");
        assert_eq!(YEARS.initial_display(), "3");
    }

    #[test]
    fn test_toasts_remove_by_id() {
        let mut queue = ToastQueue::default();
        let a = queue.push(TOAST_TEXT);
        let b = queue.push(TOAST_TEXT);
        assert_ne!(a, b);
        queue.remove(a);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, b);
        queue.remove(a);
        assert_eq!(queue.toasts().len(), 1);
    }
}
