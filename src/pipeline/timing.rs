use std::collections::HashMap;
use std::time::{Duration, Instant};

/// 时间跟踪作用域
pub struct TimingScope {
    start_time: Instant,
    phase_start_times: HashMap<&'static str, Instant>,
    phase_durations: Vec<(&'static str, Duration)>,
}

impl Default for TimingScope {
    fn default() -> Self {
        Self::new()
    }
}

impl TimingScope {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            phase_start_times: HashMap::new(),
            phase_durations: Vec::new(),
        }
    }

    /// 开始一个新的阶段计时
    pub fn start_phase(&mut self, phase_name: &'static str) {
        self.phase_start_times.insert(phase_name, Instant::now());
    }

    /// 结束一个阶段的计时
    pub fn end_phase(&mut self, phase_name: &'static str) -> Option<Duration> {
        let start_time = self.phase_start_times.remove(phase_name)?;
        let duration = start_time.elapsed();
        self.phase_durations.push((phase_name, duration));
        Some(duration)
    }

    /// 获取总执行时间
    pub fn total_duration(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// 按结束顺序返回各阶段耗时
    pub fn phase_durations(&self) -> &[(&'static str, Duration)] {
        &self.phase_durations
    }

    /// 获取格式化的执行时间报告
    pub fn generate_timing_report(&self) -> String {
        let phases = self
            .phase_durations
            .iter()
            .map(|(phase, duration)| format!("{}={:.3}s", phase, duration.as_secs_f64()))
            .collect::<Vec<_>>()
            .join(" ");

        format!(
            "total={:.3}s {}",
            self.total_duration().as_secs_f64(),
            phases
        )
        .trim_end()
        .to_string()
    }
}

/// 流水线阶段名称
pub struct TimingKeys;

impl TimingKeys {
    pub const ANALYZE: &'static str = "analyze";
    pub const SEARCH: &'static str = "search";
    pub const SUMMARIZE: &'static str = "summarize";
    pub const ADVISE: &'static str = "advise";
}
