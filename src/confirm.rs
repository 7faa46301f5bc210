use chrono::{DateTime, Duration, Utc};
use log::debug;

pub const IDLE_LABEL: &str = "Restart...";
pub const CONFIRM_LABEL: &str = "Confirm";
pub const RESTART_PATH: &str = "/restart";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Idle,
    PendingConfirm { deadline: DateTime<Utc> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// First click: the button now asks for confirmation.
    Armed,
    /// Second click inside the window. The caller performs the restart.
    Confirmed { target: &'static str },
}

/// Two-click restart guard. Time only moves when the caller passes `now`.
#[derive(Debug, Clone)]
pub struct RestartButton {
    timeout: Duration,
    state: ButtonState,
}

impl RestartButton {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            state: ButtonState::Idle,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn label(&self) -> &'static str {
        match self.state {
            ButtonState::Idle => IDLE_LABEL,
            ButtonState::PendingConfirm { .. } => CONFIRM_LABEL,
        }
    }

    pub fn click(&mut self, now: DateTime<Utc>) -> ClickOutcome {
        self.tick(now);

        match self.state {
            ButtonState::PendingConfirm { .. } => {
                debug!("restart confirmed");
                self.state = ButtonState::Idle;
                ClickOutcome::Confirmed {
                    target: RESTART_PATH,
                }
            }
            ButtonState::Idle => {
                let deadline = now + self.timeout;
                debug!("restart armed until {}", deadline);
                self.state = ButtonState::PendingConfirm { deadline };
                ClickOutcome::Armed
            }
        }
    }

    /// Drops back to idle once the confirmation window has passed.
    /// Returns true if that happened on this call.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        match self.state {
            ButtonState::PendingConfirm { deadline } if now >= deadline => {
                debug!("restart confirmation expired");
                self.state = ButtonState::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn reset(&mut self) {
        self.state = ButtonState::Idle;
    }
}

impl Default for RestartButton {
    fn default() -> Self {
        Self::new(Duration::seconds(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 1, 1, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let button = RestartButton::default();
        assert_eq!(button.state(), ButtonState::Idle);
        assert_eq!(button.label(), "Restart...");
        assert_eq!(button.timeout(), Duration::seconds(2));
    }

    #[test]
    fn test_click_then_confirm() {
        let mut button = RestartButton::default();
        let t0 = start();

        assert_eq!(button.click(t0), ClickOutcome::Armed);
        assert_eq!(button.label(), "Confirm");
        assert_eq!(
            button.state(),
            ButtonState::PendingConfirm {
                deadline: t0 + Duration::seconds(2)
            }
        );

        let outcome = button.click(t0 + Duration::milliseconds(1500));
        assert_eq!(outcome, ClickOutcome::Confirmed { target: "/restart" });
        assert_eq!(button.state(), ButtonState::Idle);
        assert_eq!(button.label(), "Restart...");
    }

    #[test]
    fn test_tick_expires_confirmation() {
        let mut button = RestartButton::default();
        let t0 = start();

        button.click(t0);
        assert!(!button.tick(t0 + Duration::seconds(1)));
        assert_eq!(button.label(), "Confirm");

        assert!(button.tick(t0 + Duration::seconds(2)));
        assert_eq!(button.label(), "Restart...");
        assert!(!button.tick(t0 + Duration::seconds(3)));
    }

    #[test]
    fn test_late_click_rearms() {
        let mut button = RestartButton::default();
        let t0 = start();
        let late = t0 + Duration::seconds(5);

        button.click(t0);
        // No tick in between; the click itself notices the window is over.
        assert_eq!(button.click(late), ClickOutcome::Armed);
        assert_eq!(
            button.state(),
            ButtonState::PendingConfirm {
                deadline: late + Duration::seconds(2)
            }
        );
    }

    #[test]
    fn test_custom_timeout_and_reset() {
        let mut button = RestartButton::new(Duration::milliseconds(500));
        let t0 = start();

        button.click(t0);
        assert!(button.tick(t0 + Duration::milliseconds(500)));

        button.click(t0 + Duration::seconds(1));
        button.reset();
        assert_eq!(button.state(), ButtonState::Idle);
    }
}
