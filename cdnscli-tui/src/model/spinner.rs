//! 加载动画

use std::time::Duration;

/// 帧序列
pub const FRAMES: [&str; 4] = ["∙∙∙", "●∙∙", "∙●∙", "∙∙●"];

/// 每帧时长（约 7 帧/秒）
pub const TICK_RATE: Duration = Duration::from_millis(1000 / 7);

#[derive(Debug, Clone, Default)]
pub struct Spinner {
    frame: usize,
}

impl Spinner {
    /// 前进一帧
    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % FRAMES.len();
    }

    pub fn current(&self) -> &'static str {
        FRAMES[self.frame % FRAMES.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_through_frames() {
        let mut spinner = Spinner::default();
        assert_eq!(spinner.current(), "∙∙∙");
        for _ in 0..FRAMES.len() {
            spinner.tick();
        }
        assert_eq!(spinner.current(), "∙∙∙");
        spinner.tick();
        assert_eq!(spinner.current(), "●∙∙");
    }
}
