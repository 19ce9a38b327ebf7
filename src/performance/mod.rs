//! # Performance Metrics
//!
//! Frame-time tracking for the render loop. Metrics are recomputed on a fixed
//! interval from a ring buffer of recent frame times and reported through the
//! `log` facade.
//!
//! ```rust
//! use orrery::performance::PerformanceMonitor;
//!
//! let mut monitor = PerformanceMonitor::new();
//! monitor.begin_frame();
//! // ... run one frame ...
//! monitor.end_frame();
//! ```

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Summary statistics over the recent frame window
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceMetrics {
    /// Current frames per second
    pub fps: f32,
    /// Average frame time in milliseconds
    pub frame_time_ms: f32,
    /// Minimum frame time in the current window
    pub min_frame_time_ms: f32,
    /// Maximum frame time in the current window
    pub max_frame_time_ms: f32,
    /// Number of draw calls in the last frame
    pub draw_calls: u32,
}

impl Default for PerformanceMetrics {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time_ms: 0.0,
            min_frame_time_ms: f32::MAX,
            max_frame_time_ms: 0.0,
            draw_calls: 0,
        }
    }
}

pub struct PerformanceMonitor {
    frame_times: VecDeque<Duration>,
    max_samples: usize,
    frame_start: Option<Instant>,
    current_metrics: PerformanceMetrics,
    last_update: Instant,
    update_interval: Duration,
    last_report: Instant,
    report_interval: Duration,
}

impl PerformanceMonitor {
    pub fn new() -> Self {
        // ~2 seconds at 60fps
        Self::with_config(120, Duration::from_secs(5))
    }

    /// Monitor averaging over `max_samples` frames, logging every `report_interval`
    pub fn with_config(max_samples: usize, report_interval: Duration) -> Self {
        let max_samples = max_samples.max(1);
        Self {
            frame_times: VecDeque::with_capacity(max_samples),
            max_samples,
            frame_start: None,
            current_metrics: PerformanceMetrics::default(),
            last_update: Instant::now(),
            update_interval: Duration::from_millis(100),
            last_report: Instant::now(),
            report_interval,
        }
    }

    /// Mark the beginning of a frame
    pub fn begin_frame(&mut self) {
        self.frame_start = Some(Instant::now());
    }

    /// Mark the end of a frame and update metrics
    pub fn end_frame(&mut self) {
        if let Some(start) = self.frame_start.take() {
            self.record_frame_time(start.elapsed());

            if self.last_update.elapsed() >= self.update_interval {
                self.update_metrics();
                self.last_update = Instant::now();
            }
            if self.last_report.elapsed() >= self.report_interval {
                self.log_metrics();
                self.last_report = Instant::now();
            }
        }
    }

    /// Add a frame time sample directly
    pub fn record_frame_time(&mut self, frame_time: Duration) {
        if self.frame_times.len() >= self.max_samples {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(frame_time);
    }

    /// Recalculate the summary from the current window
    pub fn update_metrics(&mut self) {
        if self.frame_times.is_empty() {
            return;
        }

        let total_time: Duration = self.frame_times.iter().sum();
        let avg_frame_time_ms = total_time.as_secs_f32() * 1000.0 / self.frame_times.len() as f32;

        let (min_ms, max_ms) = self
            .frame_times
            .iter()
            .map(|t| t.as_secs_f32() * 1000.0)
            .fold((f32::MAX, 0.0f32), |(lo, hi), ms| (lo.min(ms), hi.max(ms)));

        self.current_metrics.frame_time_ms = avg_frame_time_ms;
        self.current_metrics.fps = if avg_frame_time_ms > 0.0 {
            1000.0 / avg_frame_time_ms
        } else {
            0.0
        };
        self.current_metrics.min_frame_time_ms = min_ms;
        self.current_metrics.max_frame_time_ms = max_ms;
    }

    pub fn update_render_stats(&mut self, draw_calls: u32) {
        self.current_metrics.draw_calls = draw_calls;
    }

    pub fn get_metrics(&self) -> &PerformanceMetrics {
        &self.current_metrics
    }

    /// Recent frame times in milliseconds, oldest first
    pub fn get_frame_time_history(&self) -> Vec<f32> {
        self.frame_times
            .iter()
            .map(|t| t.as_secs_f32() * 1000.0)
            .collect()
    }

    pub fn reset(&mut self) {
        self.frame_times.clear();
        self.frame_start = None;
        self.current_metrics = PerformanceMetrics::default();
    }

    fn log_metrics(&self) {
        let metrics = &self.current_metrics;
        log::debug!(
            "{:.1} fps ({:.2}ms avg, {:.2}..{:.2}ms), {} draw calls",
            metrics.fps,
            metrics.frame_time_ms,
            metrics.min_frame_time_ms,
            metrics.max_frame_time_ms,
            metrics.draw_calls
        );
    }
}

impl Default for PerformanceMonitor {
    fn default() -> Self {
        Self::new()
    }
}
