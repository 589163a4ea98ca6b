//! 延时任务
//!
//! 事件循环每次轮询后取出到期任务并交给控制器处理

use std::time::{Duration, Instant};

/// 已安排任务的编号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// 到期后要执行的任务
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTask {
    HideNotification(TimerId),
}

/// 单次延时调度能力
pub trait Scheduler {
    /// 安排一个任务在 `delay` 之后执行，任务中携带返回的编号
    fn schedule_once(&mut self, delay: Duration, task: fn(TimerId) -> TimerTask) -> TimerId;

    /// 取消尚未到期的任务；已到期或不存在的编号直接忽略
    fn cancel(&mut self, id: TimerId);
}

/// 基于截止时间的任务队列
#[derive(Debug, Default)]
pub struct Timers {
    next_id: u64,
    pending: Vec<(Instant, TimerTask, TimerId)>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule_at(&mut self, deadline: Instant, task: fn(TimerId) -> TimerTask) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push((deadline, task(id), id));
        id
    }

    /// 最早的截止时间，用于计算轮询超时
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|(deadline, _, _)| *deadline).min()
    }

    /// 取出所有在 `now` 之前到期的任务，按截止时间排序
    pub fn due(&mut self, now: Instant) -> Vec<TimerTask> {
        let mut fired = Vec::new();
        self.pending.retain(|(deadline, task, _)| {
            if *deadline <= now {
                fired.push((*deadline, *task));
                false
            } else {
                true
            }
        });
        fired.sort_by_key(|(deadline, _)| *deadline);
        fired.into_iter().map(|(_, task)| task).collect()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

impl Scheduler for Timers {
    fn schedule_once(&mut self, delay: Duration, task: fn(TimerId) -> TimerTask) -> TimerId {
        self.schedule_at(Instant::now() + delay, task)
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.retain(|(_, _, pending)| *pending != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_fires_after_deadline_only() {
        let mut timers = Timers::new();
        let start = Instant::now();
        let id = timers.schedule_at(start + Duration::from_millis(100), TimerTask::HideNotification);

        assert!(timers.due(start).is_empty());
        assert_eq!(timers.len(), 1);

        let fired = timers.due(start + Duration::from_millis(100));
        assert_eq!(fired, vec![TimerTask::HideNotification(id)]);
        assert_eq!(timers.len(), 0);
    }

    #[test]
    fn test_cancel_removes_pending() {
        let mut timers = Timers::new();
        let start = Instant::now();
        let first = timers.schedule_at(start + Duration::from_millis(50), TimerTask::HideNotification);
        let second = timers.schedule_at(start + Duration::from_millis(80), TimerTask::HideNotification);

        timers.cancel(first);
        assert_eq!(timers.next_deadline(), Some(start + Duration::from_millis(80)));
        assert_eq!(
            timers.due(start + Duration::from_secs(1)),
            vec![TimerTask::HideNotification(second)]
        );
    }

    #[test]
    fn test_due_is_ordered() {
        let mut timers = Timers::new();
        let start = Instant::now();
        let late = timers.schedule_at(start + Duration::from_millis(90), TimerTask::HideNotification);
        let early = timers.schedule_at(start + Duration::from_millis(10), TimerTask::HideNotification);

        assert_eq!(
            timers.due(start + Duration::from_millis(100)),
            vec![
                TimerTask::HideNotification(early),
                TimerTask::HideNotification(late)
            ]
        );
    }
}
